//! Compliance report vocabulary
//!
//! Closed registry of the report concepts the decoder understands, each
//! bound to one IRI under [`REPORT_NS`]. Resolution goes both ways: symbolic
//! name → IRI for building queries, IRI → concept for classifying nodes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Base namespace of the compliance report vocabulary (the `report:` prefix)
pub const REPORT_NS: &str = "http://example.com/report/temp/";

macro_rules! concepts {
    ($($variant:ident => $local:literal,)+) => {
        /// A named concept of the compliance report vocabulary.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum Concept {
            $($variant,)+
        }

        impl Concept {
            /// Every registered concept, in declaration order
            pub const ALL: &'static [Concept] = &[$(Concept::$variant,)+];

            /// Local name, e.g. `ruleReport`
            pub const fn name(self) -> &'static str {
                match self {
                    $(Concept::$variant => $local,)+
                }
            }

            /// Full IRI under [`REPORT_NS`]
            pub const fn iri(self) -> &'static str {
                match self {
                    $(Concept::$variant => concat!("http://example.com/report/temp/", $local),)+
                }
            }
        }
    };
}

concepts! {
    // classes
    PolicyReport => "PolicyReport",
    RuleReport => "RuleReport",
    PermissionReport => "PermissionReport",
    ProhibitionReport => "ProhibitionReport",
    ObligationReport => "ObligationReport",
    DutyReport => "DutyReport",
    PremiseReport => "PremiseReport",
    ConstraintReport => "ConstraintReport",
    PartyReport => "PartyReport",
    TargetReport => "TargetReport",
    ActionReport => "ActionReport",
    // properties
    RuleReportProperty => "ruleReport",
    PremiseReportProperty => "premiseReport",
    Policy => "policy",
    PolicyRequest => "policyRequest",
    Rule => "rule",
    RuleRequest => "ruleRequest",
    ActivationState => "activationState",
    SatisfactionState => "satisfactionState",
    PerformanceState => "performanceState",
    DeonticState => "deonticState",
    // individuals
    Active => "Active",
    Inactive => "Inactive",
    Satisfied => "Satisfied",
    Unsatisfied => "Unsatisfied",
    Performed => "Performed",
    Unperformed => "Unperformed",
    Unknown => "Unknown",
    NonSet => "NonSet",
    Violated => "Violated",
    Fulfilled => "Fulfilled",
}

impl Concept {
    /// Resolve an IRI to its concept
    pub fn from_iri(iri: &str) -> Option<Self> {
        let local = iri.strip_prefix(REPORT_NS)?;
        Self::from_name(local)
    }

    /// Resolve a local name (case-sensitive) to its concept
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.name() == name)
    }
}

impl fmt::Display for Concept {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "report:{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iri_is_namespaced() {
        assert_eq!(
            Concept::PolicyReport.iri(),
            "http://example.com/report/temp/PolicyReport"
        );
        assert_eq!(
            Concept::RuleReportProperty.iri(),
            "http://example.com/report/temp/ruleReport"
        );
        assert!(Concept::ALL.iter().all(|c| c.iri().starts_with(REPORT_NS)));
    }

    #[test]
    fn resolution_is_bijective() {
        for concept in Concept::ALL {
            assert_eq!(Concept::from_iri(concept.iri()), Some(*concept));
            assert_eq!(Concept::from_name(concept.name()), Some(*concept));
        }
    }

    #[test]
    fn class_and_property_names_differ_by_case() {
        assert_eq!(Concept::from_name("RuleReport"), Some(Concept::RuleReport));
        assert_eq!(
            Concept::from_name("ruleReport"),
            Some(Concept::RuleReportProperty)
        );
    }

    #[test]
    fn foreign_iris_do_not_resolve() {
        assert_eq!(Concept::from_iri("http://www.w3.org/ns/odrl/2/Permission"), None);
        assert_eq!(Concept::from_iri("http://example.com/report/temp/Nope"), None);
    }

    #[test]
    fn display_uses_report_prefix() {
        assert_eq!(Concept::Active.to_string(), "report:Active");
    }
}
