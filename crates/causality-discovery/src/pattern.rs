//! Bucket tag patterns and the partition test.
//!
//! On the console:  `+` hits only, `-` non-hits only, `:` both, ` ` no samples.

use std::fmt;
use std::str::FromStr;

use causality_core::DiscoveryError;
use serde::{Serialize, Serializer};

/// What a single bucket contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BucketTag {
    Mixed,
    HitOnly,
    NonHitOnly,
    Empty,
}

impl BucketTag {
    pub fn as_char(&self) -> char {
        match self {
            Self::Mixed => ':',
            Self::HitOnly => '+',
            Self::NonHitOnly => '-',
            Self::Empty => ' ',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            ':' => Some(Self::Mixed),
            '+' => Some(Self::HitOnly),
            '-' => Some(Self::NonHitOnly),
            ' ' => Some(Self::Empty),
            _ => None,
        }
    }
}

/// One tag per bucket index over the contiguous range `Vmin..=Vmax`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pattern {
    tags: Vec<BucketTag>,
}

impl Pattern {
    pub fn new(tags: Vec<BucketTag>) -> Self {
        Self { tags }
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn tags(&self) -> &[BucketTag] {
        &self.tags
    }

    /// Whether hit and non-hit buckets separate cleanly.
    ///
    /// Only interior positions `1..L-1` act as triggers; each trigger that is
    /// mixed fails the test if either neighbour is also mixed. Patterns of
    /// length two or less always pass, so `"::"` is clean while `"::-"` is not.
    pub fn is_partitioned(&self) -> bool {
        let tags = &self.tags;
        let len = tags.len();
        if len <= 2 {
            return true;
        }
        !(1..len - 1).any(|i| {
            tags[i] == BucketTag::Mixed
                && (tags[i - 1] == BucketTag::Mixed || tags[i + 1] == BucketTag::Mixed)
        })
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tag in &self.tags {
            write!(f, "{}", tag.as_char())?;
        }
        Ok(())
    }
}

impl FromStr for Pattern {
    type Err = DiscoveryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .enumerate()
            .map(|(position, c)| {
                BucketTag::from_char(c).ok_or(DiscoveryError::InvalidPattern { found: c, position })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self::new)
    }
}

impl Serialize for Pattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(s: &str) -> Pattern {
        s.parse().unwrap()
    }

    #[test]
    fn isolated_mixed_bucket_is_clean() {
        assert!(pattern("-+:-+").is_partitioned());
        assert!(pattern("--:++: -").is_partitioned());
    }

    #[test]
    fn adjacent_mixed_buckets_are_not_clean() {
        assert!(!pattern("-::+-").is_partitioned());
        assert!(!pattern("::-").is_partitioned());
        assert!(!pattern("-::").is_partitioned());
    }

    #[test]
    fn short_patterns_are_always_clean() {
        assert!(pattern("").is_partitioned());
        assert!(pattern(":").is_partitioned());
        assert!(pattern("::").is_partitioned());
    }

    #[test]
    fn gap_breaks_mixed_adjacency() {
        assert!(pattern(": :").is_partitioned());
    }

    #[test]
    fn display_round_trips_text() {
        let text = "-- :++:-";
        assert_eq!(pattern(text).to_string(), text);
    }

    #[test]
    fn rejects_unknown_characters() {
        let err = "-+x".parse::<Pattern>().unwrap_err();
        assert!(matches!(err, DiscoveryError::InvalidPattern { found: 'x', position: 2 }));
    }
}
