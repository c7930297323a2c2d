//! Prefix ↔ namespace mapping used when showing IRIs to people

use crate::error::{RdfError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Ordered prefix table.
///
/// Compaction picks the longest namespace that is a prefix of the IRI and
/// only succeeds when the remaining local part is a plain name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrefixMap {
    entries: BTreeMap<String, String>,
}

impl PrefixMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `prefix` to `namespace`, replacing an existing binding
    pub fn bind(&mut self, prefix: impl Into<String>, namespace: impl Into<String>) {
        self.entries.insert(prefix.into(), namespace.into());
    }

    /// Builder-style [`bind`](Self::bind)
    pub fn with(mut self, prefix: impl Into<String>, namespace: impl Into<String>) -> Self {
        self.bind(prefix, namespace);
        self
    }

    pub fn namespace(&self, prefix: &str) -> Option<&str> {
        self.entries.get(prefix).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate bindings in prefix order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(p, ns)| (p.as_str(), ns.as_str()))
    }

    /// Compact `iri` to `prefix:local` if a binding covers it.
    pub fn compact(&self, iri: &str) -> Option<String> {
        self.entries
            .iter()
            .filter(|(_, ns)| !ns.is_empty() && iri.starts_with(ns.as_str()))
            .max_by_key(|(_, ns)| ns.len())
            .and_then(|(prefix, ns)| {
                let local = &iri[ns.len()..];
                is_plain_local(local).then(|| format!("{}:{}", prefix, local))
            })
    }

    /// Compact when possible, otherwise wrap in angle brackets.
    pub fn display(&self, iri: &str) -> String {
        self.compact(iri).unwrap_or_else(|| format!("<{}>", iri))
    }

    /// Expand `prefix:local` to a full IRI.
    pub fn expand(&self, curie: &str) -> Result<String> {
        let (prefix, local) = curie.split_once(':').ok_or_else(|| RdfError::NotCompact {
            value: curie.to_string(),
        })?;
        let ns = self
            .namespace(prefix)
            .ok_or_else(|| RdfError::UnknownPrefix {
                prefix: prefix.to_string(),
            })?;
        Ok(format!("{}{}", ns, local))
    }
}

impl<P: Into<String>, N: Into<String>> FromIterator<(P, N)> for PrefixMap {
    fn from_iter<I: IntoIterator<Item = (P, N)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (prefix, ns) in iter {
            map.bind(prefix, ns);
        }
        map
    }
}

fn is_plain_local(local: &str) -> bool {
    !local.is_empty()
        && !local.ends_with('.')
        && local
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
}
