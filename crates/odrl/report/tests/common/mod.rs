//! Builders for evaluator-shaped report graphs.

#![allow(dead_code)]

use odrl_rdf::ns::{dct, rdf, xsd};
use odrl_rdf::{Literal, Node, Term, TripleStore};
use odrl_report::Concept;

pub struct ReportBuilder {
    pub store: TripleStore,
    pub report: Node,
    next: usize,
}

impl ReportBuilder {
    pub fn new(report: &str) -> Self {
        let report = Node::iri(report);
        let mut store = TripleStore::new();
        store.add(report.clone(), rdf::TYPE, Term::iri(Concept::PolicyReport.iri()));
        store.add(
            report.clone(),
            dct::CREATED,
            Literal::typed("2024-02-12T11:20:10.999Z", xsd::DATE_TIME),
        );
        store.add(
            report.clone(),
            Concept::Policy.iri(),
            Node::iri("http://example.org/usagePolicy"),
        );
        store.add(
            report.clone(),
            Concept::PolicyRequest.iri(),
            Node::iri("http://example.org/usageRequest"),
        );
        Self {
            store,
            report,
            next: 0,
        }
    }

    fn fresh(&mut self, prefix: &str) -> Node {
        self.next += 1;
        Node::iri(format!("urn:uuid:{}-{}", prefix, self.next))
    }

    /// Add a rule report with one satisfied premise per premise kind.
    pub fn rule(&mut self, kind: Concept, activation: Option<Concept>) -> Node {
        let rule = self.fresh("rule");
        self.store
            .add(self.report.clone(), Concept::RuleReportProperty.iri(), rule.clone());
        self.store.add(rule.clone(), rdf::TYPE, Term::iri(kind.iri()));
        if let Some(state) = activation {
            self.store
                .add(rule.clone(), Concept::ActivationState.iri(), Term::iri(state.iri()));
        }
        self.store
            .add(rule.clone(), Concept::Rule.iri(), Node::iri("http://example.org/permission"));
        self.store.add(
            rule.clone(),
            Concept::RuleRequest.iri(),
            Node::iri("http://example.org/requestPermission"),
        );
        for premise_kind in [Concept::PartyReport, Concept::TargetReport, Concept::ActionReport] {
            let premise = self.premise(premise_kind, Concept::Satisfied);
            self.store
                .add(rule.clone(), Concept::PremiseReportProperty.iri(), premise);
        }
        rule
    }

    pub fn premise(&mut self, kind: Concept, state: Concept) -> Node {
        let premise = self.fresh("premise");
        self.store.add(premise.clone(), rdf::TYPE, Term::iri(kind.iri()));
        self.store
            .add(premise.clone(), Concept::SatisfactionState.iri(), Term::iri(state.iri()));
        premise
    }

    pub fn nest(&mut self, parent: &Node, child: &Node) {
        self.store
            .add(parent.clone(), Concept::PremiseReportProperty.iri(), child.clone());
    }
}
