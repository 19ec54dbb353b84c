//! Loading definitions from disk and reporting results.
//!
//! Both are thin wrappers: the loader produces ready-to-evaluate
//! [`HiddenMarkovModel`](crate::hmm::HiddenMarkovModel)s and an
//! [`ObservationSequence`](crate::hmm::ObservationSequence), and the report
//! only formats an [`Evaluation`](crate::hmm::Evaluation).

pub mod loader;
pub mod report;

pub use loader::{load_definitions, parse_definitions, parse_entries, Definitions};
pub use report::Report;
