//! Condition parsing cache

use ahash::AHashMap;
use parking_lot::RwLock;

use crate::error::Result;
use crate::filter::condition::ConditionTree;

/// Caller-owned cache of parsed condition trees
///
/// List endpoints see the same filter expressions over and over; a REST
/// layer constructs one cache at startup and shares it across request
/// handlers. Parsing itself stays free of process-wide state. Only
/// successful parses are cached.
pub struct ConditionCache {
    inner: RwLock<AHashMap<String, ConditionTree>>,
}

impl ConditionCache {
    pub fn new() -> Self {
        Self::with_capacity(2048)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        ConditionCache {
            inner: RwLock::new(AHashMap::with_capacity(capacity)),
        }
    }

    /// Parse a filter expression, reusing the cached tree for repeats
    pub fn get_or_parse(&self, text: &str) -> Result<ConditionTree> {
        // Fast path: check read lock first
        {
            let cache = self.inner.read();
            if let Some(tree) = cache.get(text) {
                return Ok(tree.clone());
            }
        }

        let tree = crate::filter::parse(text)?;

        {
            let mut cache = self.inner.write();
            cache.insert(text.to_string(), tree.clone());
        }

        Ok(tree)
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    pub fn clear(&self) {
        self.inner.write().clear();
    }
}

impl Default for ConditionCache {
    fn default() -> Self {
        Self::new()
    }
}
