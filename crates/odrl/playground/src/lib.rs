#![deny(unsafe_code)]
//! # odrl-playground
//!
//! The evaluate-and-explain loop behind the ODRL playground page.
//!
//! Three text buffers (policy, request, state of the world) are parsed,
//! handed to an [`EvaluationEngine`], and the compliance report it returns
//! is rendered as text, decoded into a typed tree and summarized as a single
//! verdict sentence.
//!
//! Parsing, pretty-printing and the engine itself are collaborators behind
//! traits ([`RdfParser`], [`RdfPrinter`], [`EvaluationEngine`]); this crate
//! owns the sequencing between them and the degradation rules:
//!
//! - bad input never reaches the engine and offers a reset to the samples
//! - a report that cannot be decoded or classified still has its raw text
//!   shown, with an empty summary
//! - only the most recently issued evaluation is reported as completed
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use odrl_playground::{
//!     EvaluationInputs, EvaluationSession, EvaluationStatus, PlainPrinter, PlaygroundConfig,
//! };
//! # use odrl_playground::{EvaluationEngine, RdfParser};
//! # async fn example(engine: Arc<dyn EvaluationEngine>, parser: Arc<dyn RdfParser>) {
//! let config = PlaygroundConfig::load(None).unwrap();
//! let session = EvaluationSession::from_config(&config, engine, parser, Arc::new(PlainPrinter));
//!
//! match session.evaluate(&EvaluationInputs::samples()).await {
//!     Ok(EvaluationStatus::Completed(outcome)) => println!("{}", outcome.summary),
//!     Ok(EvaluationStatus::Superseded { .. }) => {}
//!     Err(e) if e.offers_reset() => println!("{} (reset to samples?)", e),
//!     Err(e) => println!("evaluation failed: {}", e),
//! }
//! # }
//! ```

pub mod codec;
pub mod config;
pub mod engine;
pub mod error;
pub mod inputs;
pub mod samples;
pub mod session;
pub mod telemetry;
pub mod test_cases;

pub use codec::{CodecError, PlainPrinter, RdfParser, RdfPrinter};
pub use config::{default_prefixes, LoggingConfig, PlaygroundConfig, TestCaseConfig};
pub use engine::{EngineError, EvaluationEngine};
pub use error::{Result, SessionError, TestCaseError};
pub use inputs::{EvaluationInputs, InputBuffer};
pub use session::{EvaluationOutcome, EvaluationSession, EvaluationStatus};
pub use telemetry::init_tracing;
pub use test_cases::{HttpTestCaseSource, TestCase, TestCaseIndex, TestCaseSource, TestCaseSummary};
