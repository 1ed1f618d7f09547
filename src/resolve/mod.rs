//! Resolution of a query against the cache index
//!
//! Looks up the bucket for the caller's federation and races caller-supplied
//! equivalence oracles against every candidate entry, tier by tier, under
//! per-check time budgets and a shared concurrency ceiling.

mod engine;
mod oracle;

pub use engine::{resolve, CacheHit, OutputMode, ResolveRequest};
pub use oracle::{
    ConcurrencyLimit, EquivalenceOracle, OracleContext, OracleTier, QueryParser, TextQueryParser,
};
