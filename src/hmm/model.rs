use std::fmt;

use log::warn;

use crate::hmm::table::{ConditionalProbabilityTable, ProbabilityTable};

/// Label of one hidden state.
pub type State = String;

/// Label of one observable value.
pub type Symbol = String;

/// A discrete Hidden Markov Model keyed by state and symbol names, storing:
/// - `states`: the hidden states, distinct, in declaration order
/// - `initial`: probability of starting in each state
/// - `transition[(s1, s2)]`: probability of moving from `s1` to `s2`
/// - `emission[(s, o)]`: probability of observing `o` while in `s`
///
/// # Constraints
/// - Each distribution is expected to sum to 1, but this is not enforced.
///   Run [`validate`](Self::validate) to check it.
/// - Table entries naming undeclared states are tolerated and never read by
///   the Forward Algorithm, which only walks the declared states.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HiddenMarkovModel {
    name: Option<String>,
    states: Vec<State>,
    initial: ProbabilityTable,
    transition: ConditionalProbabilityTable,
    emission: ConditionalProbabilityTable,
}

impl HiddenMarkovModel {
    /// Creates an unnamed model with no states.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty model carrying a display name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    /// Declares a hidden state.
    ///
    /// Returns `false` and leaves the model unchanged if the state was already
    /// declared.
    pub fn add_state(&mut self, state: impl Into<State>) -> bool {
        let state = state.into();
        if self.has_state(&state) {
            warn!("state `{}` declared twice, keeping the first", state);
            return false;
        }
        self.states.push(state);
        true
    }

    /// The declared states, in declaration order.
    pub fn states(&self) -> &[State] {
        &self.states
    }

    pub fn has_state(&self, state: &str) -> bool {
        self.state_index(state).is_some()
    }

    /// Position of `state` in [`states`](Self::states).
    pub fn state_index(&self, state: &str) -> Option<usize> {
        self.states.iter().position(|s| s == state)
    }

    pub fn set_initial(&mut self, state: impl Into<State>, probability: f64) {
        self.initial.set(state, probability);
    }

    pub fn set_transition(&mut self, from: impl Into<State>, to: impl Into<State>, probability: f64) {
        self.transition.set(from, to, probability);
    }

    pub fn set_emission(
        &mut self,
        state: impl Into<State>,
        symbol: impl Into<Symbol>,
        probability: f64,
    ) {
        self.emission.set(state, symbol, probability);
    }

    /// `P(X_0 = state)`, zero when unset.
    pub fn initial_probability(&self, state: &str) -> f64 {
        self.initial.get(state)
    }

    /// `P(X_t = to | X_{t-1} = from)`, zero when unset.
    pub fn transition_probability(&self, from: &str, to: &str) -> f64 {
        self.transition.get(from, to)
    }

    /// `P(Y_t = symbol | X_t = state)`, zero when unset.
    pub fn emission_probability(&self, state: &str, symbol: &str) -> f64 {
        self.emission.get(state, symbol)
    }

    pub fn initial_probabilities(&self) -> &ProbabilityTable {
        &self.initial
    }

    pub fn transition_probabilities(&self) -> &ConditionalProbabilityTable {
        &self.transition
    }

    pub fn emission_probabilities(&self) -> &ConditionalProbabilityTable {
        &self.emission
    }
}

impl fmt::Display for HiddenMarkovModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{}", name)?,
            None => write!(f, "unnamed model")?,
        }
        write!(f, " [{}]", self.states.join(", "))
    }
}
