//! Session-scoped message log.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Ordered, append-only list of human-readable lines.
///
/// Cheap to clone; clones share the same entries. Lost when the process
/// exits.
#[derive(Debug, Clone, Default)]
pub struct ChatLog {
    entries: Arc<Mutex<Vec<String>>>,
}

impl ChatLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, entry: impl Into<String>) {
        self.lock().push(entry.into());
    }

    /// Remove every entry.
    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy of all entries, oldest first.
    pub fn entries(&self) -> Vec<String> {
        self.lock().clone()
    }

    /// Copy of the entries from `start` on.
    pub fn entries_since(&self, start: usize) -> Vec<String> {
        self.lock().iter().skip(start).cloned().collect()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_order() {
        let log = ChatLog::new();
        log.push("one");
        log.push(String::from("two"));
        assert_eq!(log.entries(), vec!["one", "two"]);
        assert_eq!(log.entries_since(1), vec!["two"]);
        assert!(log.entries_since(5).is_empty());
    }

    #[test]
    fn test_clones_share_entries() {
        let log = ChatLog::new();
        let view = log.clone();
        log.push("hello");
        assert_eq!(view.len(), 1);

        view.clear();
        assert!(log.is_empty());
    }
}
