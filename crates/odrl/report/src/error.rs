//! Error types for report decoding

use odrl_rdf::Node;
use thiserror::Error;

/// Report decoding errors.
///
/// Any of these aborts the whole decode call; no partial tree is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReportError {
    /// The node is not typed as a PolicyReport exactly once
    #[error("malformed report: {node} has {found} PolicyReport type assertions, expected exactly one")]
    MalformedReport { node: Node, found: usize },

    /// No recognized rule or premise kind among the node's types
    #[error("unknown report kind for {node}: {}", type_iri.as_deref().unwrap_or("no type asserted"))]
    UnknownReportKind {
        node: Node,
        type_iri: Option<String>,
    },

    /// More than one recognized kind asserted for the same node
    #[error("conflicting report kinds for {node}: {kinds:?}")]
    ConflictingReportKind { node: Node, kinds: Vec<String> },

    /// A required single-valued attribute is absent
    #[error("missing attribute {attribute} on {node}")]
    MissingAttribute {
        node: Node,
        attribute: &'static str,
    },

    /// A single-valued attribute carries several distinct values
    #[error("attribute {attribute} on {node} has {found} distinct values")]
    AmbiguousAttribute {
        node: Node,
        attribute: &'static str,
        found: usize,
    },

    /// An attribute value outside the attribute's enumeration
    #[error("unrecognized value {value} for {attribute} on {node}")]
    UnknownAttributeValue {
        node: Node,
        attribute: &'static str,
        value: String,
    },

    /// A literal where a node reference is required
    #[error("attribute {attribute} on {node} is a literal, expected a node")]
    UnexpectedLiteral {
        node: Node,
        attribute: &'static str,
    },

    /// A node is reachable from itself along the nesting predicates
    #[error("cyclic report: {node} is nested inside itself")]
    CyclicReport { node: Node },

    /// Nesting goes past the decoder's depth limit
    #[error("report nesting too deep at {node}: more than {limit} levels")]
    TooDeep { node: Node, limit: usize },
}

/// Result type for report decoding
pub type Result<T> = std::result::Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_kind_display_without_type() {
        let e = ReportError::UnknownReportKind {
            node: Node::iri("urn:r"),
            type_iri: None,
        };
        assert!(e.to_string().contains("no type asserted"));
    }

    #[test]
    fn too_deep_display_names_limit() {
        let e = ReportError::TooDeep {
            node: Node::iri("urn:p"),
            limit: 256,
        };
        assert_eq!(
            e.to_string(),
            "report nesting too deep at <urn:p>: more than 256 levels"
        );
    }

    #[test]
    fn malformed_display_counts() {
        let e = ReportError::MalformedReport {
            node: Node::blank("b0"),
            found: 2,
        };
        let msg = e.to_string();
        assert!(msg.contains("_:b0"));
        assert!(msg.contains("2 PolicyReport"));
    }
}
