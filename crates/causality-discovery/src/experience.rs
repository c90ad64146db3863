use causality_core::Situation;

/// Append-only record of every situation seen during a run.
#[derive(Debug, Clone, Default)]
pub struct Experience {
    situations: Vec<Situation>,
}

impl Experience {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, situation: Situation) {
        self.situations.push(situation);
    }

    pub fn len(&self) -> usize {
        self.situations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.situations.is_empty()
    }

    /// Number of stored hits.
    pub fn hits(&self) -> usize {
        self.situations.iter().filter(|s| s.hit).count()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Situation> {
        self.situations.iter()
    }

    pub fn as_slice(&self) -> &[Situation] {
        &self.situations
    }
}

impl FromIterator<Situation> for Experience {
    fn from_iter<I: IntoIterator<Item = Situation>>(iter: I) -> Self {
        Self {
            situations: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Experience {
    type Item = &'a Situation;
    type IntoIter = std::slice::Iter<'a, Situation>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
