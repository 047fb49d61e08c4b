use std::fmt;

/// A trimmed, non-empty feed identifier. The only way to build one is
/// [`SourceName::parse`], so a lane can never carry a blank name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceName(String);

impl SourceName {
    /// Trim `raw` and accept it if anything is left.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lane {
    pub source_name: SourceName,
}

/// Ordered lanes. A lane is identified by its index; duplicates are allowed
/// and render as separate cards.
#[derive(Debug, Clone, Default)]
pub struct LaneCollection {
    lanes: Vec<Lane>,
}

impl LaneCollection {
    pub fn new() -> Self {
        Self { lanes: Vec::new() }
    }

    /// Append a lane and return its index.
    pub fn push(&mut self, source_name: SourceName) -> usize {
        self.lanes.push(Lane { source_name });
        self.lanes.len() - 1
    }

    /// Remove the lane at `index`, shifting later lanes down. Stale indices
    /// are ignored and return `None`.
    pub fn remove_at(&mut self, index: usize) -> Option<Lane> {
        if index < self.lanes.len() {
            Some(self.lanes.remove(index))
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.lanes.clear();
    }

    pub fn len(&self) -> usize {
        self.lanes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lanes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Lane> {
        self.lanes.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Lane> {
        self.lanes.iter()
    }

    /// Source names in display order, duplicates included.
    pub fn names(&self) -> Vec<String> {
        self.lanes
            .iter()
            .map(|l| l.source_name.as_str().to_string())
            .collect()
    }
}
