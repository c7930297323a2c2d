//! Decoded report + request graph → verdict sentence.

use odrl_rdf::ns::{odrl, rdf};
use odrl_rdf::{Node, Term, TripleStore};
use odrl_report::{decode_reports, Concept};
use odrl_verdict::{summarize, Verdict, VerdictError};

const ALICE: &str = "http://example.org/alice";
const READ: &str = "http://www.w3.org/ns/odrl/2/read";
const TARGET: &str = "http://example.org/x";

fn request_graph() -> TripleStore {
    let mut store = TripleStore::new();
    let req = Node::iri("http://example.org/usageRequest");
    let perm = Node::iri("http://example.org/requestPermission");
    store.add(req.clone(), rdf::TYPE, Term::iri(odrl::REQUEST));
    store.add(req, odrl::PERMISSION, perm.clone());
    store.add(perm.clone(), odrl::ASSIGNEE, Term::iri(ALICE));
    store.add(perm.clone(), odrl::ACTION, Term::iri(READ));
    store.add(perm, odrl::TARGET, Term::iri(TARGET));
    store
}

fn report_graph(rules: &[(Concept, Concept)]) -> TripleStore {
    let mut store = TripleStore::new();
    let report = Node::iri("http://example.org/report");
    store.add(report.clone(), rdf::TYPE, Term::iri(Concept::PolicyReport.iri()));
    for (i, (kind, state)) in rules.iter().enumerate() {
        let rule = Node::iri(format!("http://example.org/rule-{}", i));
        store.add(report.clone(), Concept::RuleReportProperty.iri(), rule.clone());
        store.add(rule.clone(), rdf::TYPE, Term::iri(kind.iri()));
        store.add(rule, Concept::ActivationState.iri(), Term::iri(state.iri()));
    }
    store
}

#[test]
fn active_permission_is_allowed() {
    let reports =
        decode_reports(&report_graph(&[(Concept::PermissionReport, Concept::Active)])).unwrap();
    let sentence = summarize(&reports, &request_graph()).unwrap();
    assert_eq!(
        sentence,
        format!("{} is ALLOWED to perform {} on {}.", ALICE, READ, TARGET)
    );
}

#[test]
fn only_the_first_rule_counts() {
    let reports = decode_reports(&report_graph(&[
        (Concept::ProhibitionReport, Concept::Active),
        (Concept::PermissionReport, Concept::Active),
    ]))
    .unwrap();
    assert_eq!(Verdict::from_reports(&reports), Verdict::NotAllowed);
}

#[test]
fn zero_rule_reports_fall_back_without_error() {
    let reports = decode_reports(&report_graph(&[])).unwrap();
    let sentence = summarize(&reports, &request_graph()).unwrap();
    assert!(sentence.starts_with("Not enough information is present"));
}

#[test]
fn request_without_target_is_malformed() {
    let reports =
        decode_reports(&report_graph(&[(Concept::PermissionReport, Concept::Active)])).unwrap();
    let mut request = TripleStore::new();
    request.add(Node::blank("p"), odrl::ASSIGNEE, Term::iri(ALICE));
    request.add(Node::blank("p"), odrl::ACTION, Term::iri(READ));
    assert_eq!(
        summarize(&reports, &request).unwrap_err(),
        VerdictError::MalformedRequest {
            property: "odrl:target".into(),
            found: 0
        }
    );
}
