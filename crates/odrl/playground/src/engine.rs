//! Policy evaluation engine boundary

use async_trait::async_trait;
use odrl_rdf::TripleStore;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors surfaced by an evaluation engine.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineError {
    /// The engine ran and gave up
    #[error("evaluation failed: {reason}")]
    Failed { reason: String },

    /// The engine could not be reached or started
    #[error("evaluation engine unavailable: {reason}")]
    Unavailable { reason: String },
}

/// Evaluates a policy against a request and a state of the world, producing
/// a compliance report graph.
///
/// Implementations may suspend (network, long reasoning); nothing else in
/// the playground does.
#[async_trait]
pub trait EvaluationEngine: Send + Sync {
    /// Name used in logs
    fn name(&self) -> &str {
        "evaluation-engine"
    }

    async fn evaluate(
        &self,
        policy: &TripleStore,
        request: &TripleStore,
        state_of_the_world: &TripleStore,
    ) -> Result<TripleStore, EngineError>;
}
