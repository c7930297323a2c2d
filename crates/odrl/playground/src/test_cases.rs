//! Remote test-case index
//!
//! The index is a Turtle document listing nodes typed `<manifest>TestCase`.
//! Each carries a `dct:identifier`, a `dct:title`, and links to the three
//! graphs of the case through `<manifest>policy`, `<manifest>request` and
//! `<manifest>stateOfTheWorld`.

use crate::codec::{CodecError, RdfParser, RdfPrinter};
use crate::config::TestCaseConfig;
use crate::error::TestCaseError;
use crate::inputs::EvaluationInputs;
use async_trait::async_trait;
use odrl_rdf::ns::{dct, rdf};
use odrl_rdf::{Node, PrefixMap, Term, TripleStore};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// One entry of the index listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCaseSummary {
    pub identifier: String,
    pub title: String,
    pub node: Node,
}

/// The three graphs of a test case.
#[derive(Debug, Clone)]
pub struct TestCase {
    pub identifier: String,
    pub title: String,
    pub policy: TripleStore,
    pub request: TripleStore,
    pub state_of_the_world: TripleStore,
}

impl TestCase {
    /// Render the graphs into input buffers.
    pub fn to_inputs(
        &self,
        printer: &dyn RdfPrinter,
        prefixes: &PrefixMap,
    ) -> Result<EvaluationInputs, CodecError> {
        Ok(EvaluationInputs::new(
            printer.print(&self.policy, prefixes)?,
            printer.print(&self.request, prefixes)?,
            printer.print(&self.state_of_the_world, prefixes)?,
        ))
    }
}

/// Parsed index document.
#[derive(Debug, Clone)]
pub struct TestCaseIndex {
    store: TripleStore,
    namespace: String,
    cases: Vec<TestCaseSummary>,
}

impl TestCaseIndex {
    pub fn from_store(store: TripleStore, manifest_namespace: impl Into<String>) -> Self {
        let namespace = manifest_namespace.into();
        let class = Term::iri(manifest_iri(&namespace, "TestCase"));

        let mut cases: Vec<TestCaseSummary> = Vec::new();
        for node in store.subjects(rdf::TYPE, &class) {
            if cases.iter().any(|c| &c.node == node) {
                continue;
            }
            let identifier = first_value(&store, node, dct::IDENTIFIER)
                .unwrap_or_else(|| node.value().to_string());
            let title =
                first_value(&store, node, dct::TITLE).unwrap_or_else(|| identifier.clone());
            cases.push(TestCaseSummary {
                identifier,
                title,
                node: node.clone(),
            });
        }

        debug!(cases = cases.len(), "Indexed test cases");
        Self {
            store,
            namespace,
            cases,
        }
    }

    /// `(identifier, title)` listing in document order
    pub fn cases(&self) -> &[TestCaseSummary] {
        &self.cases
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    pub fn find(&self, identifier: &str) -> Option<&TestCaseSummary> {
        self.cases.iter().find(|c| c.identifier == identifier)
    }

    /// Extract the three graphs of one test case.
    pub fn load(&self, identifier: &str) -> Result<TestCase, TestCaseError> {
        let summary = self
            .find(identifier)
            .ok_or_else(|| TestCaseError::UnknownTestCase {
                identifier: identifier.to_string(),
            })?;

        Ok(TestCase {
            identifier: summary.identifier.clone(),
            title: summary.title.clone(),
            policy: self.part(summary, "policy")?,
            request: self.part(summary, "request")?,
            state_of_the_world: self.part(summary, "stateOfTheWorld")?,
        })
    }

    /// The statements about the node linked through `<manifest>{part}`.
    ///
    /// Named resources the graph mentions are not expanded, so facts about a
    /// resource shared by several graphs of the index do not leak into them.
    fn part(
        &self,
        summary: &TestCaseSummary,
        part: &'static str,
    ) -> Result<TripleStore, TestCaseError> {
        let predicate = manifest_iri(&self.namespace, part);
        let root = self
            .store
            .objects(&summary.node, &predicate)
            .into_iter()
            .find_map(Term::as_node)
            .ok_or_else(|| TestCaseError::MissingPart {
                identifier: summary.identifier.clone(),
                part,
            })?;
        Ok(self.store.subgraph(root))
    }
}

/// IRI of a local name in the index vocabulary
pub fn manifest_iri(namespace: &str, local: &str) -> String {
    format!("{}{}", namespace, local)
}

fn first_value(store: &TripleStore, node: &Node, predicate: &str) -> Option<String> {
    store
        .objects(node, predicate)
        .first()
        .map(|term| term.value().to_string())
}

/// Somewhere a test-case index can be fetched from.
#[async_trait]
pub trait TestCaseSource: Send + Sync {
    async fn fetch_index(&self) -> Result<TestCaseIndex, TestCaseError>;

    /// Fetch the index and extract one test case
    async fn load(&self, identifier: &str) -> Result<TestCase, TestCaseError> {
        self.fetch_index().await?.load(identifier)
    }
}

/// Fetches the index document over HTTP. No retry, no caching.
pub struct HttpTestCaseSource {
    client: Client,
    url: String,
    namespace: String,
    parser: Arc<dyn RdfParser>,
}

impl HttpTestCaseSource {
    pub fn from_config(
        config: &TestCaseConfig,
        parser: Arc<dyn RdfParser>,
    ) -> Result<Self, TestCaseError> {
        let url = config
            .index_url
            .clone()
            .ok_or(TestCaseError::NotConfigured)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| TestCaseError::Fetch {
                url: url.clone(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            url,
            namespace: config.manifest_namespace.clone(),
            parser,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn fetch_text(&self) -> Result<String, reqwest::Error> {
        self.client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await
    }
}

#[async_trait]
impl TestCaseSource for HttpTestCaseSource {
    async fn fetch_index(&self) -> Result<TestCaseIndex, TestCaseError> {
        let text = self.fetch_text().await.map_err(|e| TestCaseError::Fetch {
            url: self.url.clone(),
            reason: e.to_string(),
        })?;
        let store = self.parser.parse(&text)?;
        let index = TestCaseIndex::from_store(store, self.namespace.clone());
        info!(url = %self.url, cases = index.len(), "Fetched test-case index");
        Ok(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::PlainPrinter;
    use crate::config::default_prefixes;
    use odrl_rdf::ns::{ex, odrl};
    use odrl_rdf::Literal;

    const NS: &str = "http://example.com/test-case/";

    fn manifest(local: &str) -> String {
        manifest_iri(NS, local)
    }

    fn index_store() -> TripleStore {
        let mut store = TripleStore::new();
        let case = Node::iri(manifest("case-1"));
        let policy = Node::iri(format!("{}policy1", ex::NS));
        let perm = Node::blank("perm");
        let request = Node::iri(format!("{}request1", ex::NS));
        let sotw = Node::iri(format!("{}sotw1", ex::NS));

        store.add(case.clone(), rdf::TYPE, Term::iri(manifest("TestCase")));
        store.add(case.clone(), dct::IDENTIFIER, Literal::new("read-allowed"));
        store.add(case.clone(), dct::TITLE, Literal::new("Alice may read x"));
        store.add(case.clone(), manifest("policy"), policy.clone());
        store.add(case.clone(), manifest("request"), request.clone());
        store.add(case, manifest("stateOfTheWorld"), sotw.clone());

        store.add(policy.clone(), rdf::TYPE, Term::iri(odrl::SET));
        store.add(policy, odrl::PERMISSION, perm.clone());
        store.add(perm, odrl::ACTION, Term::iri(format!("{}read", odrl::NS)));
        store.add(request, rdf::TYPE, Term::iri(odrl::REQUEST));
        store.add(sotw, rdf::TYPE, Term::iri(format!("{}World", ex::NS)));

        let bare = Node::iri(manifest("case-2"));
        store.add(bare, rdf::TYPE, Term::iri(manifest("TestCase")));
        store
    }

    #[test]
    fn lists_cases_with_fallbacks() {
        let index = TestCaseIndex::from_store(index_store(), NS);
        let listing: Vec<_> = index
            .cases()
            .iter()
            .map(|c| (c.identifier.as_str(), c.title.as_str()))
            .collect();
        let bare = manifest("case-2");
        assert_eq!(
            listing,
            vec![("read-allowed", "Alice may read x"), (bare.as_str(), bare.as_str())]
        );
    }

    #[test]
    fn load_extracts_reachable_graphs() {
        let index = TestCaseIndex::from_store(index_store(), NS);
        let case = index.load("read-allowed").unwrap();
        assert_eq!(case.title, "Alice may read x");
        assert_eq!(case.policy.len(), 3);
        assert_eq!(case.request.len(), 1);
        assert_eq!(case.state_of_the_world.len(), 1);

        let inputs = case.to_inputs(&PlainPrinter, &default_prefixes()).unwrap();
        assert!(inputs.policy.contains("ex:policy1 a odrl:Set ."));
        assert!(inputs.request.contains("ex:request1 a odrl:Request ."));
    }

    #[test]
    fn unknown_and_incomplete_cases() {
        let index = TestCaseIndex::from_store(index_store(), NS);
        assert!(matches!(
            index.load("nope"),
            Err(TestCaseError::UnknownTestCase { .. })
        ));
        match index.load(&manifest("case-2")) {
            Err(TestCaseError::MissingPart { part, .. }) => assert_eq!(part, "policy"),
            other => panic!("expected MissingPart, got {:?}", other.map(|c| c.identifier)),
        }
    }

    #[test]
    fn shared_resources_stay_in_their_own_graph() {
        let mut store = TripleStore::new();
        let case = Node::iri(manifest("shared"));
        let policy = Node::iri(format!("{}policy2", ex::NS));
        let request = Node::iri(format!("{}request2", ex::NS));
        let sotw = Node::iri(format!("{}sotw2", ex::NS));
        let alice = Node::iri(format!("{}alice", ex::NS));

        store.add(case.clone(), rdf::TYPE, Term::iri(manifest("TestCase")));
        store.add(case.clone(), dct::IDENTIFIER, Literal::new("shared"));
        store.add(case.clone(), manifest("policy"), policy.clone());
        store.add(case.clone(), manifest("request"), request.clone());
        store.add(case, manifest("stateOfTheWorld"), sotw.clone());
        store.add(policy.clone(), odrl::ASSIGNEE, alice.clone());
        store.add(request.clone(), odrl::ASSIGNEE, alice.clone());
        store.add(sotw, rdf::TYPE, Term::iri(format!("{}World", ex::NS)));
        store.add(alice.clone(), "http://xmlns.com/foaf/0.1/age", Literal::new("30"));

        let case = TestCaseIndex::from_store(store, NS).load("shared").unwrap();
        assert_eq!(case.policy.len(), 1);
        assert_eq!(case.request.len(), 1);
        assert!(!case.policy.has_subject(&alice));
        assert!(!case.request.has_subject(&alice));
        assert_eq!(case.state_of_the_world.len(), 1);
    }

    struct FixedSource(TripleStore);

    #[async_trait]
    impl TestCaseSource for FixedSource {
        async fn fetch_index(&self) -> Result<TestCaseIndex, TestCaseError> {
            Ok(TestCaseIndex::from_store(self.0.clone(), NS))
        }
    }

    #[tokio::test]
    async fn source_load_goes_through_index() {
        let source = FixedSource(index_store());
        let case = source.load("read-allowed").await.unwrap();
        assert_eq!(case.identifier, "read-allowed");
    }

    struct NoParser;

    impl RdfParser for NoParser {
        fn parse(&self, _text: &str) -> Result<TripleStore, CodecError> {
            Ok(TripleStore::new())
        }
    }

    #[test]
    fn http_source_requires_url() {
        let config = TestCaseConfig::default();
        assert!(matches!(
            HttpTestCaseSource::from_config(&config, Arc::new(NoParser)),
            Err(TestCaseError::NotConfigured)
        ));

        let config = TestCaseConfig {
            index_url: Some("http://localhost:1/index.ttl".into()),
            ..TestCaseConfig::default()
        };
        let source = HttpTestCaseSource::from_config(&config, Arc::new(NoParser)).unwrap();
        assert_eq!(source.url(), "http://localhost:1/index.ttl");
    }
}
