//! Extraction of the request's assignee, action and target

use crate::error::{Result, VerdictError};
use odrl_rdf::ns::odrl;
use odrl_rdf::{Term, TripleStore};
use serde::{Deserialize, Serialize};

/// Who asked to do what on which asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestTriple {
    pub assignee: Term,
    pub action: Term,
    pub target: Term,
}

impl RequestTriple {
    pub fn new(
        assignee: impl Into<Term>,
        action: impl Into<Term>,
        target: impl Into<Term>,
    ) -> Self {
        Self {
            assignee: assignee.into(),
            action: action.into(),
            target: target.into(),
        }
    }

    /// Pull the unique `odrl:assignee`, `odrl:action` and `odrl:target`
    /// values out of a request graph.
    pub fn extract(store: &TripleStore) -> Result<Self> {
        Ok(Self {
            assignee: unique_value(store, odrl::ASSIGNEE, "odrl:assignee")?,
            action: unique_value(store, odrl::ACTION, "odrl:action")?,
            target: unique_value(store, odrl::TARGET, "odrl:target")?,
        })
    }
}

/// The single distinct object of `predicate` anywhere in the store.
fn unique_value(store: &TripleStore, predicate: &str, property: &str) -> Result<Term> {
    let mut values: Vec<&Term> = Vec::new();
    for triple in store.matching(None, Some(predicate), None) {
        if !values.contains(&&triple.object) {
            values.push(&triple.object);
        }
    }
    match values.as_slice() {
        [only] => Ok((*only).clone()),
        other => Err(VerdictError::MalformedRequest {
            property: property.to_string(),
            found: other.len(),
        }),
    }
}
