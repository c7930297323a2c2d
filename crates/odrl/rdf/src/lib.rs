#![deny(unsafe_code)]
//! # odrl-rdf
//!
//! Minimal RDF data model for the ODRL playground.
//!
//! The playground never parses or serializes RDF grammars itself; those are
//! external collaborators. What lives here is the shape they hand over:
//!
//! - [`Node`]: an IRI or blank node identifier (subject position)
//! - [`Term`]: a node or a [`Literal`] (object position)
//! - [`Triple`]: one subject–predicate–object statement
//! - [`TripleStore`]: an encounter-ordered statement collection with
//!   pattern queries over any bound/unbound combination
//! - [`PrefixMap`]: prefix ↔ namespace mapping used for display
//! - [`ns`]: the well-known namespaces the playground talks about

pub mod error;
pub mod ns;
pub mod prefix;
pub mod store;
pub mod term;

pub use error::{RdfError, Result};
pub use prefix::PrefixMap;
pub use store::TripleStore;
pub use term::{Literal, Node, Term, Triple};
