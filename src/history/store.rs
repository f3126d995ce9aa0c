//! Deduplicated command storage.
//!
//! Maps each command text to the most recent record that ran it, keeping
//! keys in the order they were first seen.

use indexmap::IndexMap;

#[derive(Clone, Debug, Default)]
pub struct HistoryStore {
    entries: IndexMap<String, String>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `record` as the latest occurrence of `command`.
    /// Returns the record it replaced, if any. The key keeps its original position.
    pub fn insert(&mut self, command: &str, record: &str) -> Option<String> {
        if let Some(existing) = self.entries.get_mut(command) {
            return Some(std::mem::replace(existing, record.to_string()));
        }
        self.entries.insert(command.to_string(), record.to_string());
        None
    }

    /// Latest record for a command.
    pub fn get(&self, command: &str) -> Option<&str> {
        self.entries.get(command).map(String::as_str)
    }

    /// Iterate `(command, record)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterate the stored records in first-seen order.
    pub fn records(&self) -> impl Iterator<Item = &str> {
        self.entries.values().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_new_command() {
        let mut store = HistoryStore::new();
        assert!(store.insert("ls", " 1:0;ls").is_none());
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("ls"), Some(" 1:0;ls"));
    }

    #[test]
    fn test_last_write_wins() {
        let mut store = HistoryStore::new();
        store.insert("ls", " 1:0;ls");
        let replaced = store.insert("ls", " 5:0;ls");

        assert_eq!(replaced.as_deref(), Some(" 1:0;ls"));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("ls"), Some(" 5:0;ls"));
    }

    #[test]
    fn test_overwrite_keeps_first_seen_order() {
        let mut store = HistoryStore::new();
        store.insert("ls", " 1:0;ls");
        store.insert("pwd", " 2:0;pwd");
        store.insert("ls", " 3:0;ls");

        let order: Vec<&str> = store.iter().map(|(cmd, _)| cmd).collect();
        assert_eq!(order, vec!["ls", "pwd"]);

        let records: Vec<&str> = store.records().collect();
        assert_eq!(records, vec![" 3:0;ls", " 2:0;pwd"]);
    }

    #[test]
    fn test_empty_store() {
        let store = HistoryStore::default();
        assert!(store.is_empty());
        assert_eq!(store.get("ls"), None);
        assert_eq!(store.records().count(), 0);
    }
}
