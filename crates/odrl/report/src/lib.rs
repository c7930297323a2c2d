#![deny(unsafe_code)]
//! # odrl-report
//!
//! Decoding of ODRL compliance reports.
//!
//! An evaluation engine answers a request with a graph of report nodes.
//! This crate turns that graph back into a typed tree:
//!
//! ```text
//! PolicyReport → RuleReport[] → PremiseReport[] → PremiseReport[] ...
//! ```
//!
//! ## Key Types
//!
//! - [`Concept`]: the closed vocabulary registry (name ↔ IRI)
//! - [`PolicyReport`], [`RuleReport`], [`PremiseReport`]: the decoded tree
//! - [`ReportDecoder`]: strict, cycle-guarded graph walker
//! - [`ReportError`]: every way a report can fail to decode
//!
//! ## Example
//!
//! ```rust
//! use odrl_rdf::{ns::rdf, Node, Term, TripleStore};
//! use odrl_report::{decode_reports, Concept};
//!
//! let mut store = TripleStore::new();
//! let report = Node::iri("urn:report");
//! store.add(report.clone(), rdf::TYPE, Term::iri(Concept::PolicyReport.iri()));
//!
//! let reports = decode_reports(&store).unwrap();
//! assert_eq!(reports.len(), 1);
//! assert!(reports[0].rule_reports.is_empty());
//! ```

pub mod decoder;
pub mod error;
pub mod model;
pub mod vocab;

pub use decoder::{
    decode_policy_report, decode_premise_report, decode_reports, decode_rule_report,
    policy_report_ids, ReportDecoder, DEFAULT_MAX_DEPTH,
};
pub use error::{ReportError, Result};
pub use model::{
    ActivationState, DeonticState, PerformanceState, PolicyReport, PremiseKind, PremiseReport,
    RuleKind, RuleReport, SatisfactionState,
};
pub use vocab::{Concept, REPORT_NS};
