//! CacheIndex data structure
//!
//! Read-only once built; safe to share across unlimited concurrent
//! resolution calls.

use crate::fact::ResultLocation;
use std::collections::HashMap;

/// Separator between sorted endpoints in a canonical key
///
/// A space cannot occur un-encoded inside an endpoint IRI, so joined keys
/// are unambiguous.
const KEY_SEPARATOR: &str = " ";

/// Canonical key of an endpoint set
///
/// Lexicographically sorted and joined, so any permutation of the same
/// endpoints produces the same key.
pub fn canonical_key<S: AsRef<str>>(endpoints: &[S]) -> String {
    let mut sorted: Vec<&str> = endpoints.iter().map(|e| e.as_ref()).collect();
    sorted.sort_unstable();
    sorted.join(KEY_SEPARATOR)
}

/// A finished cache entry: a query, its federation, and its stored result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    /// Subject identifier that declared this entry in the description graph
    pub id: String,

    /// The cached query's text
    pub query: String,

    /// Location of the stored result payload
    pub location: ResultLocation,

    /// Federation endpoints in declaration order (not sorted)
    pub endpoints: Vec<String>,
}

/// Index of cache entries, bucketed by canonical endpoint-set key and then
/// keyed by exact query text
///
/// Invariant: every entry in a bucket was declared with an endpoint set
/// whose canonical key equals the bucket key.
#[derive(Debug, Clone, Default)]
pub struct CacheIndex {
    buckets: HashMap<String, HashMap<String, CacheEntry>>,
}

impl CacheIndex {
    /// Look up the bucket for an endpoint set (any order)
    pub fn bucket<S: AsRef<str>>(&self, endpoints: &[S]) -> Option<&HashMap<String, CacheEntry>> {
        self.bucket_by_key(&canonical_key(endpoints))
    }

    /// Look up a bucket by its canonical key
    pub fn bucket_by_key(&self, key: &str) -> Option<&HashMap<String, CacheEntry>> {
        self.buckets.get(key)
    }

    /// Number of buckets (distinct federations)
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Total number of entries across all buckets
    pub fn entry_count(&self) -> usize {
        self.buckets.values().map(|b| b.len()).sum()
    }

    /// Iterate over (canonical key, bucket) pairs
    pub fn iter(&self) -> impl Iterator<Item = (&String, &HashMap<String, CacheEntry>)> {
        self.buckets.iter()
    }

    /// Insert an entry under its own canonical key, replacing any earlier
    /// entry with the same query text (last-write-wins)
    pub(crate) fn insert(&mut self, entry: CacheEntry) {
        let key = canonical_key(&entry.endpoints);
        self.buckets
            .entry(key)
            .or_default()
            .insert(entry.query.clone(), entry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, query: &str, endpoints: &[&str]) -> CacheEntry {
        CacheEntry {
            id: id.to_string(),
            query: query.to_string(),
            location: ResultLocation::Url(format!("http://example.org/{id}")),
            endpoints: endpoints.iter().map(|e| e.to_string()).collect(),
        }
    }

    #[test]
    fn test_canonical_key_is_order_independent() {
        let key = canonical_key(&["e2", "e1", "e3"]);
        assert_eq!(key, canonical_key(&["e1", "e2", "e3"]));
        assert_eq!(key, canonical_key(&["e3", "e1", "e2"]));
        assert_eq!(key, "e1 e2 e3");
    }

    #[test]
    fn test_canonical_key_of_empty_set() {
        let empty: [&str; 0] = [];
        assert_eq!(canonical_key(&empty), "");
    }

    #[test]
    fn test_bucket_lookup_ignores_endpoint_order() {
        let mut index = CacheIndex::default();
        index.insert(entry("a", "Q", &["e2", "e1"]));

        let bucket = index.bucket(&["e1", "e2"]).expect("bucket should exist");
        assert_eq!(bucket.len(), 1);
        // Declaration order is preserved inside the entry
        assert_eq!(bucket["Q"].endpoints, vec!["e2", "e1"]);
    }

    #[test]
    fn test_insert_is_last_write_wins_per_query() {
        let mut index = CacheIndex::default();
        index.insert(entry("a", "Q", &["e1", "e2"]));
        index.insert(entry("b", "Q", &["e2", "e1"]));

        let bucket = index.bucket(&["e1", "e2"]).expect("bucket should exist");
        assert_eq!(bucket.len(), 1);
        assert_eq!(bucket["Q"].id, "b");
    }

    #[test]
    fn test_distinct_federations_get_distinct_buckets() {
        let mut index = CacheIndex::default();
        index.insert(entry("a", "Q", &["e1"]));
        index.insert(entry("b", "Q", &["e1", "e2"]));

        assert_eq!(index.len(), 2);
        assert_eq!(index.entry_count(), 2);
        assert!(index.bucket(&["e2"]).is_none());
    }
}
