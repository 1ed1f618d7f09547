//! SPARQL JSON results decoding
//!
//! The stored payload uses the standard `application/sparql-results+json`
//! encoding; each binding row maps variable names to RDF terms.

use crate::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One RDF term in a result binding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RdfTerm {
    /// "uri", "literal", or "bnode"
    #[serde(rename = "type")]
    pub kind: String,

    pub value: String,

    /// Language tag for language-tagged literals
    #[serde(rename = "xml:lang", skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,

    /// Datatype IRI for typed literals
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datatype: Option<String>,
}

/// One result row: variable name to bound term
pub type BindingRow = HashMap<String, RdfTerm>;

#[derive(Debug, Deserialize)]
struct SparqlJsonResults {
    head: Head,
    results: Bindings,
}

#[derive(Debug, Deserialize)]
struct Head {
    #[serde(default)]
    vars: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct Bindings {
    bindings: Vec<BindingRow>,
}

/// Decode a SPARQL JSON results document into binding rows
pub fn decode_rows(bytes: &[u8]) -> Result<Vec<BindingRow>> {
    let parsed: SparqlJsonResults = serde_json::from_slice(bytes)?;
    tracing::debug!(
        vars = parsed.head.vars.len(),
        rows = parsed.results.bindings.len(),
        "decoded result payload"
    );
    Ok(parsed.results.bindings)
}
