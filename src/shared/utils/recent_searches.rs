//! Most-recent-first list of past queries

use serde::{Deserialize, Serialize};

pub const DEFAULT_RECENT_CAPACITY: usize = 5;
pub const STORAGE_KEY: &str = "khidma_recent_searches";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentSearches {
    capacity: usize,
    entries: Vec<String>,
}

impl RecentSearches {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Vec::new(),
        }
    }

    /// Record a query; duplicates (case-insensitive) move to the front
    pub fn record(&mut self, query: &str) {
        let query = query.trim();
        if query.is_empty() || self.capacity == 0 {
            return;
        }
        let lower = query.to_lowercase();
        self.entries.retain(|existing| existing.to_lowercase() != lower);
        self.entries.insert(0, query.to_string());
        self.entries.truncate(self.capacity);
    }

    pub fn remove(&mut self, query: &str) {
        let lower = query.to_lowercase();
        self.entries.retain(|existing| existing.to_lowercase() != lower);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.entries).unwrap_or_else(|_| "[]".to_string())
    }

    /// Restore from a stored JSON array, ignoring malformed input
    pub fn from_json(raw: &str, capacity: usize) -> Self {
        let mut recent = Self::new(capacity);
        let stored: Vec<String> = serde_json::from_str(raw).unwrap_or_default();
        for query in stored.iter().rev() {
            recent.record(query);
        }
        recent
    }

    /// Load from localStorage (empty on native)
    pub fn load(capacity: usize) -> Self {
        match super::storage::get_item(STORAGE_KEY) {
            Some(raw) => Self::from_json(&raw, capacity),
            None => Self::new(capacity),
        }
    }

    pub fn save(&self) {
        if let Err(e) = super::storage::set_item(STORAGE_KEY, &self.to_json()) {
            tracing::warn!("Failed to persist recent searches: {}", e);
        }
    }
}

impl Default for RecentSearches {
    fn default() -> Self {
        Self::new(DEFAULT_RECENT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_most_recent_first_and_bounded() {
        let mut recent = RecentSearches::new(3);
        for q in ["plombier", "ménage", "peinture", "jardinage"] {
            recent.record(q);
        }
        assert_eq!(recent.entries(), &["jardinage", "peinture", "ménage"]);
    }

    #[test]
    fn test_duplicate_moves_to_front() {
        let mut recent = RecentSearches::default();
        recent.record("Plombier");
        recent.record("Ménage");
        recent.record("plombier");
        assert_eq!(recent.entries(), &["plombier", "Ménage"]);
    }

    #[test]
    fn test_blank_query_ignored() {
        let mut recent = RecentSearches::default();
        recent.record("   ");
        assert!(recent.entries().is_empty());
    }

    #[test]
    fn test_json_restore_keeps_order() {
        let mut recent = RecentSearches::default();
        recent.record("a");
        recent.record("b");
        let restored = RecentSearches::from_json(&recent.to_json(), 5);
        assert_eq!(restored.entries(), &["b", "a"]);

        let garbage = RecentSearches::from_json("{not json", 5);
        assert!(garbage.entries().is_empty());
    }
}
