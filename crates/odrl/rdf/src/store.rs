//! In-memory triple store

use crate::term::{Node, Term, Triple};
use std::collections::{HashMap, HashSet, VecDeque};

/// Encounter-ordered statement collection.
///
/// Statements are kept exactly as asserted, duplicates included, so a
/// reader can tell a node typed once from a node typed twice. Call
/// [`dedup`](Self::dedup) to get set semantics.
#[derive(Debug, Clone, Default)]
pub struct TripleStore {
    triples: Vec<Triple>,
    by_subject: HashMap<Node, Vec<usize>>,
}

impl TripleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a statement.
    pub fn insert(&mut self, triple: Triple) {
        let idx = self.triples.len();
        self.by_subject
            .entry(triple.subject.clone())
            .or_default()
            .push(idx);
        self.triples.push(triple);
    }

    /// Convenience for `insert(Triple::new(..))`
    pub fn add(&mut self, subject: Node, predicate: impl Into<String>, object: impl Into<Term>) {
        self.insert(Triple::new(subject, predicate, object));
    }

    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// All statements in encounter order
    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// Statements matching a pattern; `None` leaves a position unbound.
    pub fn matching<'a>(
        &'a self,
        subject: Option<&'a Node>,
        predicate: Option<&'a str>,
        object: Option<&'a Term>,
    ) -> Box<dyn Iterator<Item = &'a Triple> + 'a> {
        let filter = move |t: &&Triple| {
            predicate.map_or(true, |p| t.predicate == p) && object.map_or(true, |o| t.object == *o)
        };
        match subject {
            Some(s) => {
                let indices = self.by_subject.get(s).map(Vec::as_slice).unwrap_or(&[]);
                Box::new(indices.iter().map(|&i| &self.triples[i]).filter(filter))
            }
            None => Box::new(self.triples.iter().filter(filter)),
        }
    }

    /// Objects of `(subject, predicate, ?o)` in encounter order
    pub fn objects(&self, subject: &Node, predicate: &str) -> Vec<&Term> {
        self.subject_triples(subject)
            .filter(|t| t.predicate == predicate)
            .map(|t| &t.object)
            .collect()
    }

    /// Subjects of `(?s, predicate, object)` in encounter order
    pub fn subjects(&self, predicate: &str, object: &Term) -> Vec<&Node> {
        self.triples
            .iter()
            .filter(|t| t.predicate == predicate && t.object == *object)
            .map(|t| &t.subject)
            .collect()
    }

    /// Number of statements matching a pattern
    pub fn count(
        &self,
        subject: Option<&Node>,
        predicate: Option<&str>,
        object: Option<&Term>,
    ) -> usize {
        self.matching(subject, predicate, object).count()
    }

    fn subject_triples(&self, subject: &Node) -> impl Iterator<Item = &Triple> {
        self.by_subject
            .get(subject)
            .map(Vec::as_slice)
            .unwrap_or(&[])
            .iter()
            .map(move |&i| &self.triples[i])
    }

    /// Whether `node` appears as a subject
    pub fn has_subject(&self, node: &Node) -> bool {
        self.by_subject.contains_key(node)
    }

    /// Remove exact duplicates, keeping first occurrences.
    pub fn dedup(&mut self) {
        let mut seen = HashSet::new();
        let kept: Vec<Triple> = self
            .triples
            .drain(..)
            .filter(|t| seen.insert(t.clone()))
            .collect();
        self.by_subject.clear();
        for triple in kept {
            self.insert(triple);
        }
    }

    /// Concise bounded description of `root`.
    ///
    /// Every statement about `root`, plus the statements about blank nodes
    /// reached from it, breadth first. Named resources are leaves: facts
    /// about them stay out unless `root` is the resource itself.
    pub fn subgraph(&self, root: &Node) -> TripleStore {
        let mut out = TripleStore::new();
        let mut visited: HashSet<&Node> = HashSet::new();
        let mut queue: VecDeque<&Node> = VecDeque::from([root]);

        while let Some(node) = queue.pop_front() {
            if !visited.insert(node) {
                continue;
            }
            for triple in self.subject_triples(node) {
                out.insert(triple.clone());
                if let Some(next) = triple.object.as_node().filter(|n| n.is_blank()) {
                    if self.has_subject(next) && !visited.contains(next) {
                        queue.push_back(next);
                    }
                }
            }
        }
        out
    }
}

impl Extend<Triple> for TripleStore {
    fn extend<I: IntoIterator<Item = Triple>>(&mut self, iter: I) {
        for triple in iter {
            self.insert(triple);
        }
    }
}

impl FromIterator<Triple> for TripleStore {
    fn from_iter<I: IntoIterator<Item = Triple>>(iter: I) -> Self {
        let mut store = Self::new();
        store.extend(iter);
        store
    }
}

impl IntoIterator for TripleStore {
    type Item = Triple;
    type IntoIter = std::vec::IntoIter<Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.into_iter()
    }
}

impl<'a> IntoIterator for &'a TripleStore {
    type Item = &'a Triple;
    type IntoIter = std::slice::Iter<'a, Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ns;
    use crate::term::Literal;

    fn ex(local: &str) -> Node {
        Node::iri(format!("{}{}", ns::ex::NS, local))
    }

    fn sample() -> TripleStore {
        let mut store = TripleStore::new();
        store.add(ex("p1"), ns::rdf::TYPE, Term::iri(ns::odrl::SET));
        store.add(ex("p1"), ns::odrl::PERMISSION, Term::blank("r1"));
        store.add(
            Node::blank("r1"),
            ns::odrl::ACTION,
            Term::iri("http://www.w3.org/ns/odrl/2/read"),
        );
        store.add(Node::blank("r1"), ns::odrl::TARGET, Node::iri("http://example.org/x"));
        store.add(ex("other"), ns::dct::TITLE, Literal::new("unrelated"));
        store
    }

    #[test]
    fn matching_subject_and_predicate() {
        let store = sample();
        let s = ex("p1");
        let hits: Vec<_> = store.matching(Some(&s), Some(ns::rdf::TYPE), None).collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].object, Term::iri(ns::odrl::SET));
    }

    #[test]
    fn matching_unbound_subject() {
        let store = sample();
        let obj = Term::iri(ns::odrl::SET);
        assert_eq!(store.subjects(ns::rdf::TYPE, &obj), vec![&ex("p1")]);
        assert_eq!(store.count(None, None, None), 5);
        assert_eq!(store.count(None, Some(ns::odrl::TARGET), None), 1);
    }

    #[test]
    fn unknown_subject_yields_nothing() {
        let store = sample();
        let missing = ex("missing");
        assert_eq!(store.matching(Some(&missing), None, None).count(), 0);
    }

    #[test]
    fn duplicates_are_kept_until_dedup() {
        let mut store = TripleStore::new();
        store.add(ex("a"), ns::rdf::TYPE, Term::iri(ns::odrl::SET));
        store.add(ex("a"), ns::rdf::TYPE, Term::iri(ns::odrl::SET));
        assert_eq!(store.len(), 2);
        store.dedup();
        assert_eq!(store.len(), 1);
        assert_eq!(store.count(Some(&ex("a")), None, None), 1);
    }

    #[test]
    fn objects_preserve_encounter_order() {
        let mut store = TripleStore::new();
        for i in 0..5 {
            store.add(ex("a"), "urn:p", Term::iri(format!("urn:o{}", i)));
        }
        let values: Vec<_> = store.objects(&ex("a"), "urn:p").iter().map(|t| t.value()).collect();
        assert_eq!(values, vec!["urn:o0", "urn:o1", "urn:o2", "urn:o3", "urn:o4"]);
    }

    #[test]
    fn subgraph_follows_nested_nodes() {
        let store = sample();
        let sub = store.subgraph(&ex("p1"));
        assert_eq!(sub.len(), 4);
        assert!(!sub.has_subject(&ex("other")));
    }

    #[test]
    fn subgraph_terminates_on_cycles() {
        let mut store = TripleStore::new();
        store.add(Node::blank("a"), "urn:next", Node::blank("b"));
        store.add(Node::blank("b"), "urn:next", Node::blank("a"));
        let sub = store.subgraph(&Node::blank("a"));
        assert_eq!(sub.len(), 2);
    }

    #[test]
    fn subgraph_stops_at_named_resources() {
        let mut store = TripleStore::new();
        store.add(ex("policy"), ns::odrl::ASSIGNEE, ex("alice"));
        store.add(ex("request"), ns::odrl::ASSIGNEE, ex("alice"));
        store.add(ex("alice"), "http://xmlns.com/foaf/0.1/age", Literal::new("30"));

        let policy = store.subgraph(&ex("policy"));
        assert_eq!(policy.len(), 1);
        assert!(!policy.has_subject(&ex("alice")));

        let alice = store.subgraph(&ex("alice"));
        assert_eq!(alice.len(), 1);
    }
}
