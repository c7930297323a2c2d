//! Error types for the RDF layer

use thiserror::Error;

/// Errors raised while building terms or resolving prefixes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RdfError {
    /// A compact IRI used a prefix that is not bound
    #[error("unknown prefix: {prefix}")]
    UnknownPrefix { prefix: String },

    /// A compact IRI had no `prefix:local` separator
    #[error("not a compact IRI: {value}")]
    NotCompact { value: String },

    /// An empty string was given where an identifier is required
    #[error("empty {what}")]
    Empty { what: &'static str },
}

/// Result type for RDF operations
pub type Result<T> = std::result::Result<T, RdfError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_prefix_display() {
        let e = RdfError::UnknownPrefix {
            prefix: "zz".into(),
        };
        assert!(e.to_string().contains("zz"));
    }
}
