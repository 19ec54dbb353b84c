//! Reading model definitions and observations from a JSON document.
//!
//! ```json
//! {
//!   "models": [
//!     {
//!       "name": "weather",
//!       "initialProbabilities": { "Rain": 0.4, "Sunny": 0.6 },
//!       "stateTransitionProbabilities": "Rain->Rain->0.7, Rain->Sunny->0.3, ...",
//!       "emissionProbabilities": "Rain->Grumpy->0.9, Rain->Happy->0.1, ..."
//!     }
//!   ],
//!   "observations": "Happy, Grumpy"
//! }
//! ```
//!
//! The keys of `initialProbabilities` declare the model's states in document
//! order. `observations` may also be a JSON array of strings.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use log::debug;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::hmm::{HiddenMarkovModel, ModelSelector, ObservationSequence};

/// Models and observations read from one definition document.
#[derive(Debug, Clone)]
pub struct Definitions {
    pub models: Vec<HiddenMarkovModel>,
    pub observations: ObservationSequence,
}

impl Definitions {
    /// Hands the models and observations over to a selector.
    pub fn into_selector(self) -> ModelSelector {
        ModelSelector::new(self.models, self.observations)
    }
}

#[derive(Debug, Deserialize)]
struct Document {
    #[serde(default)]
    models: Vec<ModelDefinition>,
    observations: Option<ObservationsField>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ModelDefinition {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    initial_probabilities: Map<String, Value>,
    #[serde(default)]
    state_transition_probabilities: Option<String>,
    #[serde(default)]
    emission_probabilities: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ObservationsField {
    Joined(String),
    Symbols(Vec<String>),
}

/// Reads and parses a definition file.
///
/// # Errors
///
/// I/O failures, malformed JSON, malformed probability entries, and a missing
/// or empty observation sequence.
pub fn load_definitions(path: impl AsRef<Path>) -> Result<Definitions> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    debug!("read {} bytes from {}", text.len(), path.display());
    parse_definitions(&text)
}

/// Parses a definition document held in memory.
///
/// # Examples
///
/// ```
/// use hmmeval::io::parse_definitions;
///
/// let definitions = parse_definitions(r#"{
///     "models": [{
///         "initialProbabilities": { "s": 1.0 },
///         "stateTransitionProbabilities": "s->s->1.0",
///         "emissionProbabilities": "s->x->0.5, s->y->0.5"
///     }],
///     "observations": "x, y"
/// }"#).unwrap();
///
/// assert_eq!(definitions.models.len(), 1);
/// assert_eq!(definitions.observations.len(), 2);
/// ```
pub fn parse_definitions(json: &str) -> Result<Definitions> {
    let document: Document = serde_json::from_str(json)?;

    let observations = match document.observations {
        Some(ObservationsField::Joined(text)) => ObservationSequence::from_str(&text)?,
        Some(ObservationsField::Symbols(symbols)) => {
            ObservationSequence::from_raw_symbols(symbols)?
        }
        None => {
            return Err(Error::InvalidInput(
                "document has no `observations` field".to_string(),
            ))
        }
    };

    let models = document
        .models
        .into_iter()
        .map(build_model)
        .collect::<Result<Vec<_>>>()?;

    debug!(
        "parsed {} models and {} observations",
        models.len(),
        observations.len()
    );
    Ok(Definitions {
        models,
        observations,
    })
}

fn build_model(definition: ModelDefinition) -> Result<HiddenMarkovModel> {
    let mut model = match definition.name {
        Some(name) => HiddenMarkovModel::named(name),
        None => HiddenMarkovModel::new(),
    };

    for (state, value) in &definition.initial_probabilities {
        model.add_state(state.as_str());
        model.set_initial(state.as_str(), probability_value(state, value)?);
    }

    if let Some(text) = &definition.state_transition_probabilities {
        for (from, to, p) in parse_entries(text)? {
            model.set_transition(from, to, p);
        }
    }
    if let Some(text) = &definition.emission_probabilities {
        for (state, symbol, p) in parse_entries(text)? {
            model.set_emission(state, symbol, p);
        }
    }

    Ok(model)
}

/// Initial probabilities may be written as numbers or numeric strings.
fn probability_value(state: &str, value: &Value) -> Result<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| {
        Error::invalid_entry(
            &format!("{}: {}", state, value),
            "initial probability must be a number",
        )
    })
}

/// Parses a comma-separated list of `from->to->probability` entries.
///
/// Whitespace around each part is ignored, as are empty entries (a trailing
/// comma, or a blank string).
///
/// # Examples
///
/// ```
/// use hmmeval::io::parse_entries;
///
/// let entries = parse_entries("R->S->0.25,  S -> R -> 1").unwrap();
/// assert_eq!(entries[0], ("R".to_string(), "S".to_string(), 0.25));
/// assert_eq!(entries[1], ("S".to_string(), "R".to_string(), 1.0));
///
/// assert!(parse_entries("R->S").is_err());
/// ```
pub fn parse_entries(text: &str) -> Result<Vec<(String, String, f64)>> {
    text.split(',')
        .filter(|entry| !entry.trim().is_empty())
        .map(parse_entry)
        .collect()
}

fn parse_entry(entry: &str) -> Result<(String, String, f64)> {
    let parts: Vec<&str> = entry.split("->").map(str::trim).collect();
    let &[from, to, probability] = parts.as_slice() else {
        return Err(Error::invalid_entry(
            entry,
            format!("expected `from->to->probability`, found {} parts", parts.len()),
        ));
    };
    if from.is_empty() || to.is_empty() {
        return Err(Error::invalid_entry(entry, "empty label"));
    }
    let probability: f64 = probability
        .parse()
        .map_err(|e| Error::invalid_entry(entry, format!("bad probability: {}", e)))?;
    Ok((from.to_string(), to.to_string(), probability))
}
