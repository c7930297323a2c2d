//! Decoded compliance report tree
//!
//! ```text
//! PolicyReport ─┬─ RuleReport ─┬─ PremiseReport ─── PremiseReport ...
//!               │              └─ PremiseReport
//!               └─ RuleReport ...
//! ```
//!
//! Every enumeration here is closed: the decoder maps vocabulary IRIs onto
//! these variants and rejects anything else.

use crate::vocab::Concept;
use chrono::{DateTime, FixedOffset};
use odrl_rdf::{Literal, Node};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Report on a whole policy evaluated against one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyReport {
    pub id: Node,

    /// `dct:created` literal, kept as written
    pub created: Option<Literal>,

    /// The evaluated policy
    pub policy: Option<Node>,

    /// The originating request
    pub request: Option<Node>,

    /// Rule reports in store encounter order
    pub rule_reports: Vec<RuleReport>,
}

impl PolicyReport {
    /// Parse the created literal as an RFC 3339 timestamp.
    pub fn created_at(&self) -> Option<DateTime<FixedOffset>> {
        self.created
            .as_ref()
            .and_then(|lit| DateTime::parse_from_rfc3339(&lit.value).ok())
    }

    /// First rule report, the one the verdict is drawn from
    pub fn first_rule(&self) -> Option<&RuleReport> {
        self.rule_reports.first()
    }
}

/// Report on one rule of the policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleReport {
    pub id: Node,
    pub kind: RuleKind,
    pub activation: ActivationState,

    /// The rule of the request this report answers
    pub rule_request: Option<Node>,

    /// The policy rule that was matched
    pub rule: Option<Node>,

    /// Premises in store encounter order
    pub premises: Vec<PremiseReport>,

    /// Duty performance, when the evaluator reports it
    pub performance: Option<PerformanceState>,

    /// Duty deontic state, when the evaluator reports it
    pub deontic: Option<DeonticState>,
}

impl RuleReport {
    /// Whether every direct premise is satisfied
    pub fn premises_satisfied(&self) -> bool {
        self.premises.iter().all(PremiseReport::is_satisfied)
    }
}

/// Report on one premise (party, action, target or constraint check).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PremiseReport {
    pub id: Node,
    pub kind: PremiseKind,
    pub satisfaction: SatisfactionState,

    /// Sub-premises of a composite premise
    pub premises: Vec<PremiseReport>,
}

impl PremiseReport {
    pub fn is_satisfied(&self) -> bool {
        self.satisfaction == SatisfactionState::Satisfied
    }

    /// Depth of the premise tree rooted here (a leaf has depth 1)
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 1)];
        while let Some((premise, level)) = stack.pop() {
            deepest = deepest.max(level);
            stack.extend(premise.premises.iter().map(|child| (child, level + 1)));
        }
        deepest
    }

    /// Every premise in this subtree, pre-order, including `self`
    pub fn walk(&self) -> Vec<&PremiseReport> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(premise) = stack.pop() {
            out.push(premise);
            stack.extend(premise.premises.iter().rev());
        }
        out
    }
}

/// Deontic kind of a rule report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleKind {
    Permission,
    Prohibition,
    /// `ObligationReport` and `DutyReport` both land here
    Obligation,
}

impl RuleKind {
    pub fn from_concept(concept: Concept) -> Option<Self> {
        match concept {
            Concept::PermissionReport => Some(Self::Permission),
            Concept::ProhibitionReport => Some(Self::Prohibition),
            Concept::ObligationReport | Concept::DutyReport => Some(Self::Obligation),
            _ => None,
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Permission => "PermissionReport",
            Self::Prohibition => "ProhibitionReport",
            Self::Obligation => "ObligationReport",
        };
        f.write_str(s)
    }
}

/// Kind of a premise report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PremiseKind {
    Constraint,
    Party,
    Target,
    Action,
}

impl PremiseKind {
    pub fn from_concept(concept: Concept) -> Option<Self> {
        match concept {
            Concept::ConstraintReport => Some(Self::Constraint),
            Concept::PartyReport => Some(Self::Party),
            Concept::TargetReport => Some(Self::Target),
            Concept::ActionReport => Some(Self::Action),
            _ => None,
        }
    }
}

/// Whether a rule is in force for the evaluated request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivationState {
    Active,
    Inactive,
}

impl ActivationState {
    pub fn from_concept(concept: Concept) -> Option<Self> {
        match concept {
            Concept::Active => Some(Self::Active),
            Concept::Inactive => Some(Self::Inactive),
            _ => None,
        }
    }
}

/// Whether a premise holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SatisfactionState {
    Satisfied,
    Unsatisfied,
}

impl SatisfactionState {
    pub fn from_concept(concept: Concept) -> Option<Self> {
        match concept {
            Concept::Satisfied => Some(Self::Satisfied),
            Concept::Unsatisfied => Some(Self::Unsatisfied),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PerformanceState {
    Performed,
    Unperformed,
    Unknown,
}

impl PerformanceState {
    pub fn from_concept(concept: Concept) -> Option<Self> {
        match concept {
            Concept::Performed => Some(Self::Performed),
            Concept::Unperformed => Some(Self::Unperformed),
            Concept::Unknown => Some(Self::Unknown),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeonticState {
    NonSet,
    Violated,
    Fulfilled,
}

impl DeonticState {
    pub fn from_concept(concept: Concept) -> Option<Self> {
        match concept {
            Concept::NonSet => Some(Self::NonSet),
            Concept::Violated => Some(Self::Violated),
            Concept::Fulfilled => Some(Self::Fulfilled),
            _ => None,
        }
    }
}
