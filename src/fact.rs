//! Fact data model
//!
//! Represents a single subject-predicate-object statement from the source
//! graph, plus the result-location type derived from result facts.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Kind of an object term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TermKind {
    /// A named node (IRI reference)
    Iri,
    /// A plain literal value
    Literal,
    /// A blank node label
    Blank,
}

/// An RDF term: a value with its kind discriminator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    pub value: String,
    pub kind: TermKind,
}

impl Term {
    /// Create an IRI term
    pub fn iri(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            kind: TermKind::Iri,
        }
    }

    /// Create a literal term
    pub fn literal(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            kind: TermKind::Literal,
        }
    }

    /// Create a blank node term
    pub fn blank(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            kind: TermKind::Blank,
        }
    }
}

/// A subject-predicate-object statement from the cache description graph
///
/// Subjects and predicates are identifiers (IRIs or blank node labels), so
/// only their values are kept; the object carries its kind because result
/// facts are discriminated on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fact {
    pub subject: String,
    pub predicate: String,
    pub object: Term,
}

impl Fact {
    pub fn new(
        subject: impl Into<String>,
        predicate: impl Into<String>,
        object: Term,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object,
        }
    }
}

/// Location of a stored query result
///
/// A result fact whose object is an IRI points at a network resource; a
/// literal object names a local resource path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultLocation {
    Url(String),
    Path(PathBuf),
}

impl ResultLocation {
    /// Derive the location from a result fact's object term
    ///
    /// Blank-node objects cannot address a payload and yield `None`.
    pub fn from_term(term: &Term) -> Option<Self> {
        match term.kind {
            TermKind::Iri => Some(Self::Url(term.value.clone())),
            TermKind::Literal => Some(Self::Path(PathBuf::from(&term.value))),
            TermKind::Blank => None,
        }
    }
}
