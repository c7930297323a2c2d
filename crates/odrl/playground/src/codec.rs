//! Text ↔ triples collaborators
//!
//! The playground does not implement an RDF grammar. A host wires in a real
//! Turtle parser and pretty-printer through these traits; [`PlainPrinter`]
//! is the fallback listing used when none is provided.

use odrl_rdf::ns::rdf;
use odrl_rdf::{Literal, Node, PrefixMap, Term, TripleStore};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::Write;
use thiserror::Error;

/// Parse or print failures reported by a codec.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CodecError {
    /// Input text is not valid RDF
    #[error("parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    Parse {
        message: String,
        line: Option<usize>,
    },

    /// A graph could not be rendered
    #[error("print error: {message}")]
    Print { message: String },
}

impl CodecError {
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
            line: None,
        }
    }

    pub fn parse_at(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
            line: Some(line),
        }
    }
}

/// Turns RDF text into triples.
pub trait RdfParser: Send + Sync {
    fn parse(&self, text: &str) -> Result<TripleStore, CodecError>;
}

/// Turns triples into display text using the given prefixes.
pub trait RdfPrinter: Send + Sync {
    fn print(&self, store: &TripleStore, prefixes: &PrefixMap) -> Result<String, CodecError>;
}

/// One statement per line, prefix-compacted, `rdf:type` written as `a`.
///
/// Prefix declarations are emitted only for prefixes the graph uses.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainPrinter;

impl RdfPrinter for PlainPrinter {
    fn print(&self, store: &TripleStore, prefixes: &PrefixMap) -> Result<String, CodecError> {
        let mut body = String::new();
        let mut used = BTreeSet::new();

        for triple in store.iter() {
            let subject = node(&triple.subject, prefixes, &mut used);
            let predicate = if triple.predicate == rdf::TYPE {
                "a".to_string()
            } else {
                iri(&triple.predicate, prefixes, &mut used)
            };
            let object = match &triple.object {
                Term::Node(n) => node(n, prefixes, &mut used),
                Term::Literal(lit) => literal(lit, prefixes, &mut used),
            };
            writeln!(body, "{} {} {} .", subject, predicate, object).map_err(|e| {
                CodecError::Print {
                    message: e.to_string(),
                }
            })?;
        }

        let mut out = String::new();
        for (prefix, ns) in prefixes.iter().filter(|(p, _)| used.contains(*p)) {
            out.push_str(&format!("@prefix {}: <{}> .\n", prefix, ns));
        }
        if !out.is_empty() && !body.is_empty() {
            out.push('\n');
        }
        out.push_str(&body);
        Ok(out)
    }
}

fn iri(value: &str, prefixes: &PrefixMap, used: &mut BTreeSet<String>) -> String {
    match prefixes.compact(value) {
        Some(curie) => {
            if let Some((prefix, _)) = curie.split_once(':') {
                used.insert(prefix.to_string());
            }
            curie
        }
        None => format!("<{}>", value),
    }
}

fn node(n: &Node, prefixes: &PrefixMap, used: &mut BTreeSet<String>) -> String {
    match n {
        Node::Iri(value) => iri(value, prefixes, used),
        Node::Blank(label) => format!("_:{}", label),
    }
}

fn literal(lit: &Literal, prefixes: &PrefixMap, used: &mut BTreeSet<String>) -> String {
    let mut out = String::with_capacity(lit.value.len() + 2);
    out.push('"');
    for c in lit.value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('"');
    if let Some(lang) = &lit.language {
        out.push('@');
        out.push_str(lang);
    } else if let Some(dt) = &lit.datatype {
        out.push_str("^^");
        out.push_str(&iri(dt, prefixes, used));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use odrl_rdf::ns::{ex, odrl, xsd};

    fn prefixes() -> PrefixMap {
        PrefixMap::new()
            .with("odrl", odrl::NS)
            .with("ex", ex::NS)
            .with("xsd", xsd::NS)
            .with("foaf", "http://xmlns.com/foaf/0.1/")
    }

    #[test]
    fn prints_compact_statements() {
        let mut store = TripleStore::new();
        store.add(Node::iri("http://example.org/p"), rdf::TYPE, Term::iri(odrl::SET));
        store.add(
            Node::iri("http://example.org/p"),
            "http://example.org/created",
            Literal::typed("2024-01-01", "http://www.w3.org/2001/XMLSchema#date"),
        );
        let text = PlainPrinter.print(&store, &prefixes()).unwrap();
        assert_eq!(
            text,
            "@prefix ex: <http://example.org/> .\n\
             @prefix odrl: <http://www.w3.org/ns/odrl/2/> .\n\
             @prefix xsd: <http://www.w3.org/2001/XMLSchema#> .\n\
             \n\
             ex:p a odrl:Set .\n\
             ex:p ex:created \"2024-01-01\"^^xsd:date .\n"
        );
    }

    #[test]
    fn escapes_and_blank_nodes() {
        let mut store = TripleStore::new();
        store.add(Node::blank("b0"), "urn:p", Literal::lang("say \"hi\"\n", "en"));
        let text = PlainPrinter.print(&store, &prefixes()).unwrap();
        assert_eq!(text, "_:b0 <urn:p> \"say \\\"hi\\\"\\n\"@en .\n");
    }

    #[test]
    fn empty_store_prints_nothing() {
        assert_eq!(PlainPrinter.print(&TripleStore::new(), &prefixes()).unwrap(), "");
    }

    #[test]
    fn parse_error_display_includes_line() {
        assert_eq!(
            CodecError::parse_at(3, "unexpected token").to_string(),
            "parse error at line 3: unexpected token"
        );
        assert_eq!(CodecError::parse("eof").to_string(), "parse error: eof");
    }
}
