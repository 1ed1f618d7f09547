//! The resolution engine
//!
//! Tiers run strictly in order; within a tier every candidate check runs
//! concurrently and the first positive completion wins. Losing checks are
//! dropped on the spot, so a late answer can never overturn a chosen winner.

use super::oracle::{ConcurrencyLimit, OracleContext, OracleTier, QueryParser};
use crate::fact::ResultLocation;
use crate::index::{CacheEntry, CacheIndex};
use crate::materialize::{self, BindingRow};
use crate::Result;
use futures::stream::{FuturesUnordered, StreamExt};
use tokio::time::timeout;

/// What a confirmed hit should return
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// The stored result's location, no further I/O
    Reference,
    /// The stored result fetched and decoded into binding rows
    Materialized,
}

/// A confirmed cache hit
///
/// `tier` is the index of the oracle tier that produced the match.
#[derive(Debug, Clone, PartialEq)]
pub enum CacheHit {
    Reference {
        location: ResultLocation,
        tier: usize,
    },
    Materialized {
        rows: Vec<BindingRow>,
        tier: usize,
    },
}

impl CacheHit {
    pub fn tier(&self) -> usize {
        match self {
            Self::Reference { tier, .. } | Self::Materialized { tier, .. } => *tier,
        }
    }
}

/// One resolution call's inputs
pub struct ResolveRequest<Q> {
    /// The incoming query, already in its structured form
    pub query: Q,
    /// The federation the query targets, in any order
    pub endpoints: Vec<String>,
    /// Oracle tiers in priority order
    pub tiers: Vec<OracleTier<Q>>,
    /// Optional shared ceiling on in-flight oracle checks
    pub concurrency: Option<ConcurrencyLimit>,
    pub mode: OutputMode,
}

/// Resolve a query against the index
///
/// Returns `Ok(None)` for a definite miss: unknown federation, empty tier
/// list, or every check negative in every tier. Returns an error only for a
/// materialization fault after a confirmed hit - a hit whose payload cannot
/// be read is an operational problem, not a miss.
pub async fn resolve<Q>(
    index: &CacheIndex,
    parser: &dyn QueryParser<Q>,
    request: &ResolveRequest<Q>,
) -> Result<Option<CacheHit>>
where
    Q: Send + Sync,
{
    let Some(bucket) = index.bucket(&request.endpoints) else {
        tracing::debug!(endpoints = ?request.endpoints, "no bucket for federation");
        return Ok(None);
    };
    if request.tiers.is_empty() || bucket.is_empty() {
        return Ok(None);
    }

    for (tier_index, tier) in request.tiers.iter().enumerate() {
        tracing::debug!(tier = tier_index, candidates = bucket.len(), "trying tier");

        let mut checks: FuturesUnordered<_> = bucket
            .values()
            .map(|entry| {
                check_candidate(
                    parser,
                    tier,
                    &request.query,
                    entry,
                    request.concurrency.as_ref(),
                )
            })
            .collect();

        let mut winner: Option<&CacheEntry> = None;
        while let Some(outcome) = checks.next().await {
            if let Some(entry) = outcome {
                winner = Some(entry);
                break;
            }
        }
        // Dropping the set abandons every unfinished check of this tier
        drop(checks);

        if let Some(entry) = winner {
            tracing::info!(tier = tier_index, entry = %entry.id, "cache hit");
            return finish(entry, tier_index, request.mode).await.map(Some);
        }
    }

    tracing::debug!("no tier produced a match");
    Ok(None)
}

/// Run one oracle check against one candidate
///
/// Admission through the shared ceiling happens before the time budget
/// starts. Every non-positive outcome - negative answer, oracle fault,
/// parse fault, elapsed budget - collapses to `None`.
async fn check_candidate<'a, Q>(
    parser: &dyn QueryParser<Q>,
    tier: &OracleTier<Q>,
    query: &Q,
    entry: &'a CacheEntry,
    limit: Option<&ConcurrencyLimit>,
) -> Option<&'a CacheEntry>
where
    Q: Send + Sync,
{
    let _permit = match limit {
        Some(limit) => limit.acquire().await,
        None => None,
    };

    let candidate = match parser.parse(&entry.query) {
        Ok(candidate) => candidate,
        Err(e) => {
            tracing::debug!(entry = %entry.id, error = %e, "candidate query does not parse");
            return None;
        }
    };

    let context = OracleContext {
        sources: entry.endpoints.clone(),
        options: tier.options.clone(),
    };

    let outcome = match tier.time_budget {
        Some(budget) => {
            match timeout(budget, tier.oracle.equivalent(query, &candidate, &context)).await {
                Ok(outcome) => outcome,
                Err(_) => {
                    tracing::debug!(entry = %entry.id, "check timed out");
                    return None;
                }
            }
        }
        None => tier.oracle.equivalent(query, &candidate, &context).await,
    };

    match outcome {
        Ok(true) => Some(entry),
        Ok(false) => None,
        Err(e) => {
            tracing::debug!(entry = %entry.id, error = %e, "oracle fault treated as miss");
            None
        }
    }
}

async fn finish(entry: &CacheEntry, tier: usize, mode: OutputMode) -> Result<CacheHit> {
    match mode {
        OutputMode::Reference => Ok(CacheHit::Reference {
            location: entry.location.clone(),
            tier,
        }),
        OutputMode::Materialized => {
            let rows = materialize::fetch_rows(&entry.location).await?;
            Ok(CacheHit::Materialized { rows, tier })
        }
    }
}
