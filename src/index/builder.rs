//! Fact-stream ingestion
//!
//! Single pass over the stream accumulating partial state keyed by subject,
//! then a finalize pass that promotes complete candidates into the index.
//! Cache descriptions are best-effort: incomplete candidates and malformed
//! endpoint lists are dropped silently, never reported as errors. Only a
//! fault of the fact stream itself aborts ingestion.

use super::cache_index::{CacheEntry, CacheIndex};
use crate::fact::{Fact, ResultLocation};
use crate::vocabulary;
use crate::Result;
use futures::{Stream, StreamExt};
use std::collections::HashMap;

/// Defensive bound on endpoint-list traversal
///
/// A cyclic or malformed list is truncated at this length rather than
/// looping; truncation is not an error.
const MAX_LIST_LENGTH: usize = 100_000;

/// A partially assembled cache entry, keyed by subject
///
/// `seq` records the position at which the subject was first seen, so
/// duplicate resolution in `finalize` does not depend on hash-map
/// iteration order.
#[derive(Debug, Default)]
struct RawCandidate {
    seq: usize,
    is_entry: bool,
    query: Option<String>,
    location: Option<ResultLocation>,
    endpoints_root: Option<String>,
}

/// A node of an endpoint list embedded in the graph
///
/// Payload and next-pointer arrive as separate facts, in any order.
#[derive(Debug, Default)]
struct ListNode {
    first: Option<String>,
    rest: Option<String>,
}

/// Build a [`CacheIndex`] from a stream of facts
///
/// Consumes the stream to completion. An error item resolves the build
/// immediately with that error; no partial index is returned and no further
/// facts are read. An empty stream yields an empty index.
pub async fn build<S>(facts: S) -> Result<CacheIndex>
where
    S: Stream<Item = Result<Fact>>,
{
    futures::pin_mut!(facts);

    let mut candidates: HashMap<String, RawCandidate> = HashMap::new();
    let mut list_nodes: HashMap<String, ListNode> = HashMap::new();

    while let Some(item) = facts.next().await {
        let fact = item?;
        collect(&fact, &mut candidates, &mut list_nodes);
    }

    Ok(finalize(candidates, &list_nodes))
}

/// Fold one fact into the pending candidate and list-node tables
fn collect(
    fact: &Fact,
    candidates: &mut HashMap<String, RawCandidate>,
    list_nodes: &mut HashMap<String, ListNode>,
) {
    match fact.predicate.as_str() {
        vocabulary::LIST_ELEMENT_PREDICATE => {
            list_nodes.entry(fact.subject.clone()).or_default().first =
                Some(fact.object.value.clone());
        }
        vocabulary::LIST_NEXT_PREDICATE => {
            list_nodes.entry(fact.subject.clone()).or_default().rest =
                Some(fact.object.value.clone());
        }
        vocabulary::RDF_TYPE if vocabulary::is_query_class(&fact.object) => {
            candidate(candidates, &fact.subject).is_entry = true;
        }
        vocabulary::QUERY_PREDICATE => {
            candidate(candidates, &fact.subject).query = Some(fact.object.value.clone());
        }
        vocabulary::RESULT_PREDICATE => {
            candidate(candidates, &fact.subject).location = ResultLocation::from_term(&fact.object);
        }
        vocabulary::ENDPOINT_PREDICATE => {
            candidate(candidates, &fact.subject).endpoints_root = Some(fact.object.value.clone());
        }
        _ => {}
    }
}

/// Look up a subject's candidate, creating it with the next first-seen
/// position on first sight
fn candidate<'a>(
    candidates: &'a mut HashMap<String, RawCandidate>,
    subject: &str,
) -> &'a mut RawCandidate {
    let seq = candidates.len();
    candidates
        .entry(subject.to_string())
        .or_insert_with(|| RawCandidate {
            seq,
            ..RawCandidate::default()
        })
}

/// Promote complete candidates into the index
fn finalize(
    candidates: HashMap<String, RawCandidate>,
    list_nodes: &HashMap<String, ListNode>,
) -> CacheIndex {
    let mut index = CacheIndex::default();

    // Replay candidates in the order their subjects first appeared, so when
    // two complete candidates share a bucket and query text the later one
    // deterministically overwrites the earlier.
    let mut ordered: Vec<(String, RawCandidate)> = candidates.into_iter().collect();
    ordered.sort_unstable_by_key(|(_, candidate)| candidate.seq);

    for (id, candidate) in ordered {
        let RawCandidate {
            is_entry: true,
            query: Some(query),
            location: Some(location),
            endpoints_root: Some(root),
            ..
        } = candidate
        else {
            tracing::debug!(subject = %id, "dropping incomplete cache candidate");
            continue;
        };

        let endpoints = collect_endpoint_list(&root, list_nodes);
        if endpoints.is_empty() {
            // An entry with no declared endpoints cannot be targeted
            tracing::debug!(subject = %id, "dropping cache candidate with empty endpoint list");
            continue;
        }

        index.insert(CacheEntry {
            id,
            query,
            location,
            endpoints,
        });
    }

    tracing::debug!(
        buckets = index.len(),
        entries = index.entry_count(),
        "cache index built"
    );
    index
}

/// Walk an endpoint list from its root through the node table
///
/// Iterative, never recursive. Stops at an unknown node, a node without a
/// next-pointer, the terminal identifier, or the traversal cap.
fn collect_endpoint_list(root: &str, list_nodes: &HashMap<String, ListNode>) -> Vec<String> {
    let mut endpoints = Vec::new();
    let mut current = root;

    for _ in 0..MAX_LIST_LENGTH {
        let Some(node) = list_nodes.get(current) else {
            break;
        };
        if let Some(first) = &node.first {
            endpoints.push(first.clone());
        }
        match &node.rest {
            None => break,
            Some(rest) if rest == vocabulary::LIST_TERMINAL => break,
            Some(rest) => current = rest,
        }
    }

    endpoints
}
