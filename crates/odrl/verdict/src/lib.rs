#![deny(unsafe_code)]
//! # odrl-verdict
//!
//! Turns a decoded compliance report into one sentence a person can read.
//!
//! The verdict is drawn from the first rule report of the first policy
//! report. Its `(kind, activation)` pair selects one of three outcomes:
//!
//! | kind        | activation | verdict        |
//! |-------------|------------|----------------|
//! | Permission  | Active     | `Allowed`      |
//! | Permission  | Inactive   | `NotAllowed`   |
//! | Prohibition | Active     | `NotAllowed`   |
//! | Prohibition | Inactive   | `Undetermined` |
//! | other / none | any       | `Undetermined` |
//!
//! The sentence names the request's assignee, action and target using the
//! raw values found in the request graph.

pub mod classifier;
pub mod error;
pub mod request;

pub use classifier::{summarize, Verdict};
pub use error::{Result, VerdictError};
pub use request::RequestTriple;
