//! Discrete Hidden Markov Models and Forward Algorithm model selection.
//!
//! - [`table`]: name-keyed probability tables with zero-default lookups
//! - [`model`]: [`HiddenMarkovModel`], its states and three tables
//! - [`observation`]: the non-empty [`ObservationSequence`]
//! - [`forward`]: the Forward Algorithm and its trellis
//! - [`selector`]: evaluating many models against one sequence
//! - [`validation`]: optional data-quality checks
//!
//! # Examples
//!
//! ```
//! use hmmeval::hmm::{HiddenMarkovModel, ModelSelector, ObservationSequence};
//!
//! let mut fair = HiddenMarkovModel::named("fair");
//! fair.add_state("F");
//! fair.set_initial("F", 1.0);
//! fair.set_transition("F", "F", 1.0);
//! fair.set_emission("F", "H", 0.5);
//! fair.set_emission("F", "T", 0.5);
//!
//! let mut loaded = HiddenMarkovModel::named("loaded");
//! loaded.add_state("L");
//! loaded.set_initial("L", 1.0);
//! loaded.set_transition("L", "L", 1.0);
//! loaded.set_emission("L", "H", 0.9);
//! loaded.set_emission("L", "T", 0.1);
//!
//! let observations = ObservationSequence::new(["H", "H", "H"]).unwrap();
//! let selector = ModelSelector::new(vec![fair, loaded], observations);
//!
//! let best = selector.select_best().unwrap();
//! assert_eq!(best.model.name(), Some("loaded"));
//! assert!((best.probability - 0.729).abs() < 1e-12);
//! ```

pub mod forward;
pub mod model;
pub mod observation;
pub mod selector;
pub mod table;
pub mod validation;

pub use forward::ForwardTrellis;
pub use model::{HiddenMarkovModel, State, Symbol};
pub use observation::ObservationSequence;
pub use selector::{Evaluation, ModelScore, ModelSelector};
pub use table::{ConditionalProbabilityTable, ProbabilityTable};
