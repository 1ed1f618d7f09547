//! Vocabulary of the cache description schema
//!
//! A cache description is a set of RDF facts using a fixed, versionless set
//! of predicates. These constants are the entire schema contract between
//! this crate and the producer of the description.

use crate::fact::{Term, TermKind};

/// Predicate declaring the endpoint-list root of a cache entry
pub const ENDPOINT_PREDICATE: &str = "http://www.w3.org/ns/sparql-service-description#endpoint";

/// Predicate declaring the location of an entry's stored result
pub const RESULT_PREDICATE: &str =
    "http://www.w3.org/2001/sw/DataAccess/tests/test-manifest#result";

/// Predicate declaring an entry's query text
pub const QUERY_PREDICATE: &str = "http://www.w3.org/2001/sw/DataAccess/tests/test-query#query";

/// rdf:type
pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";

/// Class asserted on subjects that are cache entries
pub const QUERY_CLASS: &str = "http://www.w3.org/2001/sw/DataAccess/tests/test-query#Query";

/// rdf:first - payload of a list node
pub const LIST_ELEMENT_PREDICATE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#first";

/// rdf:rest - next pointer of a list node
pub const LIST_NEXT_PREDICATE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#rest";

/// rdf:nil - terminal identifier marking list end
pub const LIST_TERMINAL: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#nil";

/// Whether a term is the exact query-class assertion object (kind and value)
pub fn is_query_class(term: &Term) -> bool {
    term.kind == TermKind::Iri && term.value == QUERY_CLASS
}
