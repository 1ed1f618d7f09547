//! Equivalence oracle seam and its supporting types
//!
//! The decision of whether two queries are cache-equivalent is supplied by
//! the caller; the engine only schedules, bounds, and races it.

use crate::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Semaphore, SemaphorePermit};

/// Caller-supplied equivalence check between the incoming query and one
/// cached candidate
///
/// May be arbitrarily slow; the engine bounds it with the tier's time
/// budget. An `Err` outcome counts as a miss for that candidate only.
#[async_trait]
pub trait EquivalenceOracle<Q>: Send + Sync
where
    Q: Send + Sync,
{
    async fn equivalent(&self, query: &Q, candidate: &Q, context: &OracleContext) -> Result<bool>;
}

/// Caller-supplied translation of cached query text into the structured
/// query form the oracles compare
pub trait QueryParser<Q>: Send + Sync {
    fn parse(&self, text: &str) -> Result<Q>;
}

/// Identity parser for oracles that compare query text directly
#[derive(Debug, Clone, Copy, Default)]
pub struct TextQueryParser;

impl QueryParser<String> for TextQueryParser {
    fn parse(&self, text: &str) -> Result<String> {
        Ok(text.to_string())
    }
}

/// Context handed to an oracle alongside the two queries
///
/// `sources` is the candidate entry's own declared federation, in
/// declaration order - not the caller's endpoint set, since a bucket may
/// aggregate entries whose declaration order differed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OracleContext {
    pub sources: Vec<String>,
    pub options: HashMap<String, serde_json::Value>,
}

/// One oracle with its optional time budget and pass-through options
///
/// Tiers are tried in the order supplied; a tier's options are forwarded to
/// its oracle in every check's context.
pub struct OracleTier<Q> {
    pub oracle: Arc<dyn EquivalenceOracle<Q>>,
    pub time_budget: Option<Duration>,
    pub options: HashMap<String, serde_json::Value>,
}

impl<Q> OracleTier<Q> {
    pub fn new(oracle: Arc<dyn EquivalenceOracle<Q>>) -> Self {
        Self {
            oracle,
            time_budget: None,
            options: HashMap::new(),
        }
    }

    /// Bound every check of this tier by `budget`
    pub fn with_time_budget(mut self, budget: Duration) -> Self {
        self.time_budget = Some(budget);
        self
    }

    /// Forward an extra option to the oracle's context
    pub fn with_option(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.options.insert(key.into(), value);
        self
    }
}

impl<Q> Clone for OracleTier<Q> {
    fn clone(&self) -> Self {
        Self {
            oracle: Arc::clone(&self.oracle),
            time_budget: self.time_budget,
            options: self.options.clone(),
        }
    }
}

/// Global ceiling on concurrently running oracle checks
///
/// Cloneable handle around one semaphore: clones share the ceiling, so a
/// caller can hold one limit across overlapping `resolve` calls and never
/// admit more than the configured number of checks at once.
#[derive(Debug, Clone)]
pub struct ConcurrencyLimit {
    semaphore: Arc<Semaphore>,
}

impl ConcurrencyLimit {
    pub fn new(max_in_flight: usize) -> Self {
        Self {
            semaphore: Arc::new(Semaphore::new(max_in_flight)),
        }
    }

    /// Wait for admission; the permit is held for the duration of one check
    pub(crate) async fn acquire(&self) -> Option<SemaphorePermit<'_>> {
        // The semaphore is never closed, so this only ever yields a permit
        self.semaphore.acquire().await.ok()
    }

    #[cfg(test)]
    pub(crate) fn available(&self) -> usize {
        self.semaphore.available_permits()
    }
}
