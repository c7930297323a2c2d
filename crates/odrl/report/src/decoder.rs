//! Report decoder
//!
//! Walks a [`TripleStore`] holding an evaluator's compliance report and
//! rebuilds the typed [`PolicyReport`] tree. The walk is strict: the first
//! problem found aborts the whole decode.
//!
//! Nodes are classified by their `rdf:type` through the closed [`Concept`]
//! registry. Nesting along `report:premiseReport` is guarded by the set of
//! ancestors on the current path, so a report that loops back on itself
//! fails with [`ReportError::CyclicReport`] while a premise shared by two
//! parents is decoded twice.

use crate::error::{ReportError, Result};
use crate::model::{
    ActivationState, DeonticState, PerformanceState, PolicyReport, PremiseKind, PremiseReport,
    RuleKind, RuleReport, SatisfactionState,
};
use crate::vocab::Concept;
use odrl_rdf::ns::{dct, rdf};
use odrl_rdf::{Literal, Node, Term, TripleStore};
use std::collections::HashSet;
use tracing::{debug, trace};

/// Nodes typed `report:PolicyReport`, in encounter order, without repeats.
pub fn policy_report_ids(store: &TripleStore) -> Vec<&Node> {
    let class = Term::iri(Concept::PolicyReport.iri());
    let mut seen = HashSet::new();
    store
        .subjects(rdf::TYPE, &class)
        .into_iter()
        .filter(|node| seen.insert(*node))
        .collect()
}

/// Decode every policy report in the store.
pub fn decode_reports(store: &TripleStore) -> Result<Vec<PolicyReport>> {
    policy_report_ids(store)
        .into_iter()
        .map(|id| decode_policy_report(id, store))
        .collect()
}

/// Decode the policy report rooted at `id`.
pub fn decode_policy_report(id: &Node, store: &TripleStore) -> Result<PolicyReport> {
    ReportDecoder::new(store).policy_report(id)
}

/// Decode the rule report rooted at `id`.
pub fn decode_rule_report(id: &Node, store: &TripleStore) -> Result<RuleReport> {
    ReportDecoder::new(store).rule_report(id)
}

/// Decode the premise report rooted at `id`.
pub fn decode_premise_report(id: &Node, store: &TripleStore) -> Result<PremiseReport> {
    ReportDecoder::new(store).premise_report(id)
}

/// Nesting bound used by [`ReportDecoder::new`]: report nodes on one path.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Stateful walker; holds the ancestor path of the node being decoded.
///
/// The path is unwound on every exit, so one decoder can be reused after a
/// failed decode.
pub struct ReportDecoder<'a> {
    store: &'a TripleStore,
    path: HashSet<Node>,
    max_depth: usize,
}

impl<'a> ReportDecoder<'a> {
    pub fn new(store: &'a TripleStore) -> Self {
        Self {
            store,
            path: HashSet::new(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Bound the number of report nodes on one nesting path.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn policy_report(&mut self, id: &Node) -> Result<PolicyReport> {
        let class = Term::iri(Concept::PolicyReport.iri());
        let found = self.store.count(Some(id), Some(rdf::TYPE), Some(&class));
        if found != 1 {
            return Err(ReportError::MalformedReport {
                node: id.clone(),
                found,
            });
        }

        let report = self.nested(id, |this| this.policy_report_body(id))?;
        debug!(
            report = %id,
            rules = report.rule_reports.len(),
            "Decoded policy report"
        );
        Ok(report)
    }

    pub fn rule_report(&mut self, id: &Node) -> Result<RuleReport> {
        let rule = self.nested(id, |this| this.rule_report_body(id))?;
        debug!(
            rule_report = %id,
            kind = %rule.kind,
            activation = ?rule.activation,
            premises = rule.premises.len(),
            "Decoded rule report"
        );
        Ok(rule)
    }

    pub fn premise_report(&mut self, id: &Node) -> Result<PremiseReport> {
        let premise = self.nested(id, |this| this.premise_report_body(id))?;
        trace!(
            premise = %id,
            kind = ?premise.kind,
            satisfaction = ?premise.satisfaction,
            "Decoded premise"
        );
        Ok(premise)
    }

    fn policy_report_body(&mut self, id: &Node) -> Result<PolicyReport> {
        let created = self.created(id)?;
        let policy = self.single_node(id, Concept::Policy)?.cloned();
        let request = self.single_node(id, Concept::PolicyRequest)?.cloned();

        let mut rule_reports = Vec::new();
        for child in self.children(id, Concept::RuleReportProperty)? {
            rule_reports.push(self.rule_report(&child)?);
        }

        Ok(PolicyReport {
            id: id.clone(),
            created,
            policy,
            request,
            rule_reports,
        })
    }

    fn rule_report_body(&mut self, id: &Node) -> Result<RuleReport> {
        let kind = self.kind(id, RuleKind::from_concept, Concept::RuleReport)?;
        let activation = self
            .state(id, Concept::ActivationState, ActivationState::from_concept)?
            .ok_or_else(|| ReportError::MissingAttribute {
                node: id.clone(),
                attribute: Concept::ActivationState.name(),
            })?;
        let rule = self.single_node(id, Concept::Rule)?.cloned();
        let rule_request = self.single_node(id, Concept::RuleRequest)?.cloned();
        let performance =
            self.state(id, Concept::PerformanceState, PerformanceState::from_concept)?;
        let deontic = self.state(id, Concept::DeonticState, DeonticState::from_concept)?;
        let premises = self.premises(id)?;

        Ok(RuleReport {
            id: id.clone(),
            kind,
            activation,
            rule_request,
            rule,
            premises,
            performance,
            deontic,
        })
    }

    fn premise_report_body(&mut self, id: &Node) -> Result<PremiseReport> {
        let kind = self.kind(id, PremiseKind::from_concept, Concept::PremiseReport)?;
        let satisfaction = self
            .state(id, Concept::SatisfactionState, SatisfactionState::from_concept)?
            .ok_or_else(|| ReportError::MissingAttribute {
                node: id.clone(),
                attribute: Concept::SatisfactionState.name(),
            })?;
        let premises = self.premises(id)?;

        Ok(PremiseReport {
            id: id.clone(),
            kind,
            satisfaction,
            premises,
        })
    }

    fn premises(&mut self, id: &Node) -> Result<Vec<PremiseReport>> {
        let mut premises = Vec::new();
        for child in self.children(id, Concept::PremiseReportProperty)? {
            premises.push(self.premise_report(&child)?);
        }
        Ok(premises)
    }

    /// Run `decode` with `id` pushed on the ancestor path.
    fn nested<T>(
        &mut self,
        id: &Node,
        decode: impl FnOnce(&mut Self) -> Result<T>,
    ) -> Result<T> {
        if self.path.contains(id) {
            return Err(ReportError::CyclicReport { node: id.clone() });
        }
        if self.path.len() >= self.max_depth {
            return Err(ReportError::TooDeep {
                node: id.clone(),
                limit: self.max_depth,
            });
        }

        self.path.insert(id.clone());
        let result = decode(self);
        self.path.remove(id);
        result
    }

    /// Distinct node objects of `(id, property, ?x)`, encounter order.
    fn children(&self, id: &Node, property: Concept) -> Result<Vec<Node>> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for term in self.store.objects(id, property.iri()) {
            let node = term.as_node().ok_or_else(|| ReportError::UnexpectedLiteral {
                node: id.clone(),
                attribute: property.name(),
            })?;
            if seen.insert(node) {
                out.push(node.clone());
            }
        }
        Ok(out)
    }

    /// At most one distinct value of `(id, predicate, ?x)`.
    fn single_term(
        &self,
        id: &Node,
        predicate: &str,
        attribute: &'static str,
    ) -> Result<Option<&'a Term>> {
        let mut values: Vec<&'a Term> = Vec::new();
        for term in self.store.objects(id, predicate) {
            if !values.contains(&term) {
                values.push(term);
            }
        }
        match values.len() {
            0 => Ok(None),
            1 => Ok(values.pop()),
            found => Err(ReportError::AmbiguousAttribute {
                node: id.clone(),
                attribute,
                found,
            }),
        }
    }

    fn single_node(&self, id: &Node, property: Concept) -> Result<Option<&'a Node>> {
        match self.single_term(id, property.iri(), property.name())? {
            None => Ok(None),
            Some(Term::Node(node)) => Ok(Some(node)),
            Some(Term::Literal(_)) => Err(ReportError::UnexpectedLiteral {
                node: id.clone(),
                attribute: property.name(),
            }),
        }
    }

    fn created(&self, id: &Node) -> Result<Option<Literal>> {
        match self.single_term(id, dct::CREATED, "created")? {
            None => Ok(None),
            Some(Term::Literal(lit)) => Ok(Some(lit.clone())),
            Some(Term::Node(node)) => Err(ReportError::UnknownAttributeValue {
                node: id.clone(),
                attribute: "created",
                value: node.value().to_string(),
            }),
        }
    }

    /// Optional enumerated state behind `property`.
    fn state<S>(
        &self,
        id: &Node,
        property: Concept,
        map: fn(Concept) -> Option<S>,
    ) -> Result<Option<S>> {
        let Some(node) = self.single_node(id, property)? else {
            return Ok(None);
        };
        node.as_iri()
            .and_then(Concept::from_iri)
            .and_then(map)
            .map(Some)
            .ok_or_else(|| ReportError::UnknownAttributeValue {
                node: id.clone(),
                attribute: property.name(),
                value: node.value().to_string(),
            })
    }

    /// Resolve the node's kind from its `rdf:type` assertions.
    ///
    /// The generic super-class is skipped; exactly one recognized kind must
    /// remain.
    fn kind<K: Copy + PartialEq>(
        &self,
        id: &Node,
        map: fn(Concept) -> Option<K>,
        generic: Concept,
    ) -> Result<K> {
        let mut kinds: Vec<(K, &str)> = Vec::new();
        let mut unrecognized: Option<&str> = None;
        let mut generic_iri: Option<&str> = None;

        for term in self.store.objects(id, rdf::TYPE) {
            let Some(iri) = term.as_iri() else { continue };
            let concept = Concept::from_iri(iri);
            if concept == Some(generic) {
                generic_iri = Some(iri);
                continue;
            }
            match concept.and_then(map) {
                Some(kind) if !kinds.iter().any(|(k, _)| *k == kind) => kinds.push((kind, iri)),
                Some(_) => {}
                None => {
                    unrecognized.get_or_insert(iri);
                }
            }
        }

        match kinds.as_slice() {
            [(kind, _)] => Ok(*kind),
            [] => Err(ReportError::UnknownReportKind {
                node: id.clone(),
                type_iri: unrecognized.or(generic_iri).map(str::to_string),
            }),
            many => Err(ReportError::ConflictingReportKind {
                node: id.clone(),
                kinds: many.iter().map(|(_, iri)| iri.to_string()).collect(),
            }),
        }
    }
}
