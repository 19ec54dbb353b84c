//! Evaluate discrete Hidden Markov Models against an observation sequence
//! with the Forward Algorithm, and pick the model that explains it best.
//!
//! ```
//! use hmmeval::io::parse_definitions;
//!
//! let definitions = parse_definitions(r#"{
//!     "models": [
//!         {
//!             "name": "fair",
//!             "initialProbabilities": { "F": 1.0 },
//!             "stateTransitionProbabilities": "F->F->1.0",
//!             "emissionProbabilities": "F->H->0.5, F->T->0.5"
//!         },
//!         {
//!             "name": "loaded",
//!             "initialProbabilities": { "L": 1.0 },
//!             "stateTransitionProbabilities": "L->L->1.0",
//!             "emissionProbabilities": "L->H->0.9, L->T->0.1"
//!         }
//!     ],
//!     "observations": "T, T, H"
//! }"#).unwrap();
//!
//! let selector = definitions.into_selector();
//! let best = selector.select_best().unwrap();
//! assert_eq!(best.label(), "fair");
//! ```

pub mod error;
pub mod hmm;
pub mod io;

pub use error::{Error, Result, TableKind, ValidationError};
pub use hmm::{HiddenMarkovModel, ModelScore, ModelSelector, ObservationSequence};
