//! RDF terms and statements

use crate::error::{RdfError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a resource: an IRI or a blank node label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Node {
    /// Absolute (or caller-chosen compact) IRI
    Iri(String),
    /// Blank node label, without the `_:` marker
    Blank(String),
}

impl Node {
    /// Create an IRI node
    pub fn iri(iri: impl Into<String>) -> Self {
        Self::Iri(iri.into())
    }

    /// Create a blank node
    pub fn blank(label: impl Into<String>) -> Self {
        Self::Blank(label.into())
    }

    /// Create an IRI node, rejecting the empty string
    pub fn try_iri(iri: impl Into<String>) -> Result<Self> {
        let iri = iri.into();
        if iri.is_empty() {
            return Err(RdfError::Empty { what: "IRI" });
        }
        Ok(Self::Iri(iri))
    }

    /// Raw value: the IRI itself or the blank label
    pub fn value(&self) -> &str {
        match self {
            Self::Iri(iri) => iri,
            Self::Blank(label) => label,
        }
    }

    /// The IRI, if this is an IRI node
    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Self::Iri(iri) => Some(iri),
            Self::Blank(_) => None,
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Blank(_))
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Iri(iri) => write!(f, "<{}>", iri),
            Self::Blank(label) => write!(f, "_:{}", label),
        }
    }
}

/// Literal value with optional datatype and language tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Literal {
    /// Lexical form
    pub value: String,

    /// Datatype IRI (absent means plain `xsd:string`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datatype: Option<String>,

    /// Language tag for `rdf:langString` literals
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl Literal {
    /// Create a plain literal
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            datatype: None,
            language: None,
        }
    }

    /// Create a typed literal
    pub fn typed(value: impl Into<String>, datatype: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            datatype: Some(datatype.into()),
            language: None,
        }
    }

    /// Create a language-tagged literal
    pub fn lang(value: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            datatype: None,
            language: Some(language.into()),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.value)?;
        if let Some(lang) = &self.language {
            write!(f, "@{}", lang)
        } else if let Some(dt) = &self.datatype {
            write!(f, "^^<{}>", dt)
        } else {
            Ok(())
        }
    }
}

/// Object position of a statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Term {
    Node(Node),
    Literal(Literal),
}

impl Term {
    /// Shorthand for an IRI object
    pub fn iri(iri: impl Into<String>) -> Self {
        Self::Node(Node::iri(iri))
    }

    /// Shorthand for a blank node object
    pub fn blank(label: impl Into<String>) -> Self {
        Self::Node(Node::blank(label))
    }

    /// Shorthand for a plain literal object
    pub fn literal(value: impl Into<String>) -> Self {
        Self::Literal(Literal::new(value))
    }

    /// Raw value of the term, never prefix-compacted.
    pub fn value(&self) -> &str {
        match self {
            Self::Node(node) => node.value(),
            Self::Literal(lit) => &lit.value,
        }
    }

    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Self::Node(node) => Some(node),
            Self::Literal(_) => None,
        }
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Self::Node(_) => None,
            Self::Literal(lit) => Some(lit),
        }
    }

    /// The IRI, if this term is an IRI node
    pub fn as_iri(&self) -> Option<&str> {
        self.as_node().and_then(Node::as_iri)
    }
}

impl From<Node> for Term {
    fn from(node: Node) -> Self {
        Self::Node(node)
    }
}

impl From<Literal> for Term {
    fn from(lit: Literal) -> Self {
        Self::Literal(lit)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Node(node) => node.fmt(f),
            Self::Literal(lit) => lit.fmt(f),
        }
    }
}

/// One subject–predicate–object statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triple {
    pub subject: Node,
    /// Predicate IRI
    pub predicate: String,
    pub object: Term,
}

impl Triple {
    pub fn new(subject: Node, predicate: impl Into<String>, object: impl Into<Term>) -> Self {
        Self {
            subject,
            predicate: predicate.into(),
            object: object.into(),
        }
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}> {} .", self.subject, self.predicate, self.object)
    }
}
