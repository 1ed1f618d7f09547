//! Cache index built from a cache description graph
//!
//! Ingests a fact stream into an immutable [`CacheIndex`]: a mapping from
//! canonical endpoint-set key to the cached queries declared for that
//! federation. The index is built once per ingestion and never mutated;
//! build a new one to refresh.

mod builder;
mod cache_index;

pub use builder::build;
pub use cache_index::{canonical_key, CacheEntry, CacheIndex};
