/// Environment variable holding the tracing filter.
pub const LOG_ENV_VAR: &str = "CAUSALITY_LOG";

/// Environment variable holding an optional TOML config path.
pub const CONFIG_ENV_VAR: &str = "CAUSALITY_CONFIG";

/// Indentation used by the console trace.
pub const REPORT_INDENT: &str = "      ";
