//! sparql-cache-client - Resolution engine for RDF-described caches of
//! federated SPARQL query results
//!
//! A cache of previously computed query results is described declaratively as
//! a set of RDF facts: each entry associates a query, the federation of
//! endpoints it was evaluated over, and the location of its stored result.
//! This crate ingests that description into an indexed, read-only structure
//! and resolves incoming queries against it using caller-supplied equivalence
//! oracles raced under time budgets and a global concurrency ceiling.
//!
//! # Architecture
//!
//! - **fact**: Core data model (Term, Fact, ResultLocation)
//! - **vocabulary**: The fixed predicate schema recognized in cache descriptions
//! - **index**: Fact-stream ingestion into the immutable CacheIndex
//! - **resolve**: Tiered, concurrent equivalence checking against a bucket
//! - **materialize**: Fetching and decoding of a confirmed result payload
//!
//! Retrieval of the raw fact stream, query parsing policy, and the
//! equivalence decision itself are all supplied by the caller.

// Core modules
pub mod error;
pub mod fact;
pub mod index;
pub mod logging;
pub mod materialize;
pub mod resolve;
pub mod vocabulary;

// Re-exports
pub use error::{CacheError, Result};
pub use fact::{Fact, ResultLocation, Term, TermKind};
pub use index::{CacheEntry, CacheIndex};
pub use resolve::{
    resolve, CacheHit, ConcurrencyLimit, EquivalenceOracle, OracleContext, OracleTier, OutputMode,
    QueryParser, ResolveRequest, TextQueryParser,
};
