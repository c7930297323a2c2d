//! Verdict classification
//!
//! Pure function from a rule report's `(kind, activation)` pair to a
//! [`Verdict`], plus sentence rendering.

use crate::error::Result;
use crate::request::RequestTriple;
use odrl_rdf::TripleStore;
use odrl_report::{ActivationState, PolicyReport, RuleKind, RuleReport};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Outcome of a request under a policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    Allowed,
    NotAllowed,
    /// Not enough information to decide
    Undetermined,
}

impl Verdict {
    /// Classify one rule report; `None` means there was nothing to classify.
    pub fn classify(rule: Option<&RuleReport>) -> Self {
        let Some(rule) = rule else {
            return Self::Undetermined;
        };
        match (rule.kind, rule.activation) {
            (RuleKind::Permission, ActivationState::Active) => Self::Allowed,
            (RuleKind::Permission, ActivationState::Inactive) => Self::NotAllowed,
            (RuleKind::Prohibition, ActivationState::Active) => Self::NotAllowed,
            (RuleKind::Prohibition, ActivationState::Inactive) => Self::Undetermined,
            (RuleKind::Obligation, _) => Self::Undetermined,
        }
    }

    /// Classify the first rule report of the first policy report.
    pub fn from_reports(reports: &[PolicyReport]) -> Self {
        Self::classify(reports.first().and_then(PolicyReport::first_rule))
    }

    /// Render the verdict for a concrete request.
    pub fn sentence(&self, request: &RequestTriple) -> String {
        let assignee = request.assignee.value();
        let action = request.action.value();
        let target = request.target.value();
        match self {
            Self::Allowed => format!(
                "{} is ALLOWED to perform {} on {}.",
                assignee, action, target
            ),
            Self::NotAllowed => format!(
                "{} is NOT ALLOWED to perform {} on {}.",
                assignee, action, target
            ),
            Self::Undetermined => format!(
                "Not enough information is present to determine whether {} is allowed to perform {} on {}.",
                assignee, action, target
            ),
        }
    }

    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Allowed => "allowed",
            Self::NotAllowed => "not allowed",
            Self::Undetermined => "undetermined",
        };
        f.write_str(s)
    }
}

/// Produce the verdict sentence for decoded reports and the request graph
/// they answer.
pub fn summarize(reports: &[PolicyReport], request: &TripleStore) -> Result<String> {
    let triple = RequestTriple::extract(request)?;
    let verdict = Verdict::from_reports(reports);
    debug!(verdict = %verdict, policy_reports = reports.len(), "Classified report");
    Ok(verdict.sentence(&triple))
}
