//! Evaluate-and-explain session
//!
//! One [`EvaluationSession::evaluate`] call is one pass:
//!
//! ```text
//! inputs ─parse→ triples ─engine→ report graph ─┬─print→ report text
//!                                              └─decode→ tree ─classify→ summary
//! ```
//!
//! Every call takes a sequence number before it awaits the engine. When the
//! engine returns, a call whose number is no longer the latest issued reports
//! [`EvaluationStatus::Superseded`] instead of an outcome, so overlapping
//! evaluations resolve to the last one started.

use crate::codec::{RdfParser, RdfPrinter};
use crate::config::PlaygroundConfig;
use crate::engine::EvaluationEngine;
use crate::error::{Result, SessionError};
use crate::inputs::{EvaluationInputs, InputBuffer};
use chrono::{DateTime, Utc};
use odrl_rdf::{PrefixMap, TripleStore};
use odrl_report::{decode_reports, PolicyReport};
use odrl_verdict::{RequestTriple, Verdict};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Result of one completed pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationOutcome {
    /// Sequence number issued to this pass
    pub sequence: u64,

    /// Rendered report graph; always present
    pub report_text: String,

    /// Verdict sentence, empty when the report or request could not be read
    pub summary: String,

    /// Verdict behind the summary, when there is one
    pub verdict: Option<Verdict>,

    /// Decoded reports, empty when decoding failed
    pub reports: Vec<PolicyReport>,

    pub completed_at: DateTime<Utc>,
}

impl EvaluationOutcome {
    pub fn has_summary(&self) -> bool {
        !self.summary.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// How a pass ended.
#[derive(Debug, Clone)]
pub enum EvaluationStatus {
    Completed(EvaluationOutcome),

    /// A newer pass was issued while this one awaited the engine
    Superseded { sequence: u64, latest: u64 },
}

impl EvaluationStatus {
    pub fn outcome(&self) -> Option<&EvaluationOutcome> {
        match self {
            Self::Completed(outcome) => Some(outcome),
            Self::Superseded { .. } => None,
        }
    }

    pub fn into_outcome(self) -> Option<EvaluationOutcome> {
        match self {
            Self::Completed(outcome) => Some(outcome),
            Self::Superseded { .. } => None,
        }
    }

    pub fn is_superseded(&self) -> bool {
        matches!(self, Self::Superseded { .. })
    }
}

/// Wires a parser, an engine and a printer together.
pub struct EvaluationSession {
    engine: Arc<dyn EvaluationEngine>,
    parser: Arc<dyn RdfParser>,
    printer: Arc<dyn RdfPrinter>,
    prefixes: PrefixMap,
    issued: AtomicU64,
}

impl EvaluationSession {
    pub fn new(
        engine: Arc<dyn EvaluationEngine>,
        parser: Arc<dyn RdfParser>,
        printer: Arc<dyn RdfPrinter>,
        prefixes: PrefixMap,
    ) -> Self {
        Self {
            engine,
            parser,
            printer,
            prefixes,
            issued: AtomicU64::new(0),
        }
    }

    pub fn from_config(
        config: &PlaygroundConfig,
        engine: Arc<dyn EvaluationEngine>,
        parser: Arc<dyn RdfParser>,
        printer: Arc<dyn RdfPrinter>,
    ) -> Self {
        Self::new(engine, parser, printer, config.prefixes.clone())
    }

    pub fn prefixes(&self) -> &PrefixMap {
        &self.prefixes
    }

    /// Sequence number of the most recently issued pass (0 before any)
    pub fn latest_sequence(&self) -> u64 {
        self.issued.load(Ordering::SeqCst)
    }

    /// Run one evaluate-and-explain pass.
    pub async fn evaluate(&self, inputs: &EvaluationInputs) -> Result<EvaluationStatus> {
        let sequence = self.issued.fetch_add(1, Ordering::SeqCst) + 1;

        let policy = self.parse(inputs, InputBuffer::Policy)?;
        let request = self.parse(inputs, InputBuffer::Request)?;
        let sotw = self.parse(inputs, InputBuffer::StateOfTheWorld)?;

        debug!(
            sequence,
            engine = self.engine.name(),
            policy_triples = policy.len(),
            request_triples = request.len(),
            sotw_triples = sotw.len(),
            "Starting evaluation"
        );

        let report = self.engine.evaluate(&policy, &request, &sotw).await?;

        let latest = self.latest_sequence();
        if latest != sequence {
            debug!(sequence, latest, "Discarding superseded evaluation");
            return Ok(EvaluationStatus::Superseded { sequence, latest });
        }

        let report_text = self
            .printer
            .print(&report, &self.prefixes)
            .map_err(SessionError::Render)?;
        let (reports, verdict, summary) = self.explain(&report, &request);

        info!(
            sequence,
            report_triples = report.len(),
            policy_reports = reports.len(),
            verdict = ?verdict,
            "Evaluation completed"
        );

        Ok(EvaluationStatus::Completed(EvaluationOutcome {
            sequence,
            report_text,
            summary,
            verdict,
            reports,
            completed_at: Utc::now(),
        }))
    }

    /// Decode a report graph and summarize it against the request graph.
    ///
    /// Never fails: a report that does not decode yields no trees and an
    /// empty summary; a request that does not name exactly one assignee,
    /// action and target keeps the trees but blanks the summary.
    pub fn explain(
        &self,
        report: &TripleStore,
        request: &TripleStore,
    ) -> (Vec<PolicyReport>, Option<Verdict>, String) {
        let reports = match decode_reports(report) {
            Ok(reports) => reports,
            Err(e) => {
                warn!(error = %e, "Report could not be decoded; summary suppressed");
                return (Vec::new(), None, String::new());
            }
        };

        let triple = match RequestTriple::extract(request) {
            Ok(triple) => triple,
            Err(e) => {
                warn!(error = %e, "Request could not be summarized; summary suppressed");
                return (reports, None, String::new());
            }
        };

        let verdict = Verdict::from_reports(&reports);
        let summary = verdict.sentence(&triple);
        (reports, Some(verdict), summary)
    }

    fn parse(&self, inputs: &EvaluationInputs, buffer: InputBuffer) -> Result<TripleStore> {
        self.parser
            .parse(inputs.get(buffer))
            .map_err(|source| {
                warn!(buffer = %buffer, error = %source, "Input does not parse");
                SessionError::InvalidInput { buffer, source }
            })
    }
}
