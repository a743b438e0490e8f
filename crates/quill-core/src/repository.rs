//! Table lookup by name
//!
//! Query layers resolve table names through [`TableRepository`]. The trait
//! says nothing about what a table is; implementations pick the handle type.

use crate::{Error, Result};
use parking_lot::RwLock;
use std::collections::HashMap;

/// Resolves table names to queryable handles
pub trait TableRepository {
    /// Handle returned for a known table
    type Table;

    /// Look up a table, `None` if it does not exist
    fn table_ref(&self, name: &str) -> Option<Self::Table>;

    /// Look up a table, failing with [`Error::TableNotFound`]
    fn require(&self, name: &str) -> Result<Self::Table> {
        self.table_ref(name)
            .ok_or_else(|| Error::TableNotFound(name.to_string()))
    }
}

/// In-memory repository, safe to share between threads
#[derive(Debug)]
pub struct MemoryTableRepository<T> {
    tables: RwLock<HashMap<String, T>>,
}

impl<T> Default for MemoryTableRepository<T> {
    fn default() -> Self {
        Self {
            tables: RwLock::new(HashMap::new()),
        }
    }
}

impl<T: Clone> MemoryTableRepository<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a table, returning the handle it replaced
    pub fn insert(&self, name: impl Into<String>, table: T) -> Option<T> {
        self.tables.write().insert(name.into(), table)
    }

    /// Unregister a table
    pub fn remove(&self, name: &str) -> Option<T> {
        self.tables.write().remove(name)
    }

    pub fn len(&self) -> usize {
        self.tables.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.read().is_empty()
    }
}

impl<T: Clone> TableRepository for MemoryTableRepository<T> {
    type Table = T;

    fn table_ref(&self, name: &str) -> Option<T> {
        self.tables.read().get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_lookup() {
        let repo = MemoryTableRepository::new();
        assert!(repo.is_empty());
        repo.insert("cpu.load", 7u32);

        assert_eq!(repo.table_ref("cpu.load"), Some(7));
        assert_eq!(repo.table_ref("mem.free"), None);
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn test_require_not_found() {
        let repo: MemoryTableRepository<u32> = MemoryTableRepository::new();
        assert_eq!(
            repo.require("missing"),
            Err(Error::TableNotFound("missing".to_string()))
        );
    }

    #[test]
    fn test_replace_and_remove() {
        let repo = MemoryTableRepository::new();
        assert_eq!(repo.insert("t", "v1"), None);
        assert_eq!(repo.insert("t", "v2"), Some("v1"));
        assert_eq!(repo.require("t"), Ok("v2"));
        assert_eq!(repo.remove("t"), Some("v2"));
        assert!(repo.table_ref("t").is_none());
    }

    #[test]
    fn test_shared_across_threads() {
        let repo = Arc::new(MemoryTableRepository::new());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let repo = Arc::clone(&repo);
                std::thread::spawn(move || {
                    repo.insert(format!("t{}", i), i);
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(repo.len(), 4);
        assert_eq!(repo.require("t3"), Ok(3));
    }
}
