//! The Forward Algorithm.
//!
//! For a model with states `S` and an observation sequence `o_0 .. o_{T-1}`:
//!
//! - Initialization: `α(s, 0) = π(s) · b(s, o_0)`
//! - Recursion: `α(s, t) = [Σ_p α(p, t-1) · a(p, s)] · b(s, o_t)`
//! - Termination: `P(O | λ) = Σ_s α(s, T-1)`
//!
//! Runs in `O(T · |S|²)` time. The name-keyed tables are read once per
//! evaluation into dense vectors and a transition matrix indexed by the
//! model's state order.

use log::trace;
use ndarray::{Array1, Array2};

use crate::hmm::model::HiddenMarkovModel;
use crate::hmm::observation::ObservationSequence;

/// Every forward variable `α(s, t)` of one evaluation.
///
/// Rows are time steps and columns follow the model's state order.
#[derive(Debug, Clone, PartialEq)]
pub struct ForwardTrellis {
    alpha: Array2<f64>,
}

impl ForwardTrellis {
    /// `α(state, time)`, or `None` if either index is out of range.
    pub fn alpha(&self, time: usize, state: usize) -> Option<f64> {
        self.alpha.get((time, state)).copied()
    }

    /// The full `T × |S|` matrix.
    pub fn alphas(&self) -> &Array2<f64> {
        &self.alpha
    }

    /// Number of time steps.
    pub fn len(&self) -> usize {
        self.alpha.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.alpha.nrows() == 0
    }

    pub fn num_states(&self) -> usize {
        self.alpha.ncols()
    }

    /// Termination step: the sum of the last row.
    pub fn probability(&self) -> f64 {
        match self.alpha.nrows() {
            0 => 0.0,
            t => self.alpha.row(t - 1).sum(),
        }
    }
}

impl HiddenMarkovModel {
    /// Runs the Forward Algorithm and keeps every `α(s, t)`.
    ///
    /// Missing table entries count as zero, so a model whose tables do not
    /// cover the observed symbols simply produces zeros.
    pub fn forward_trellis(&self, observations: &ObservationSequence) -> ForwardTrellis {
        let n = self.states().len();
        let transition = self.transition_matrix();
        let mut alpha = Array2::<f64>::zeros((observations.len(), n));

        // Initialization step (time 0)
        let first = self.initial_vector() * &self.emission_vector(observations.first());
        alpha.row_mut(0).assign(&first);

        // Recursion: row vector α(·, t-1) times the transition matrix gives
        // Σ_p α(p, t-1) · a(p, s) for every s at once
        for (time, symbol) in observations.iter().enumerate().skip(1) {
            let predicted = alpha.row(time - 1).dot(&transition);
            let next = predicted * &self.emission_vector(symbol);
            alpha.row_mut(time).assign(&next);
        }

        trace!(
            "forward trellis for {}: {} steps x {} states",
            self,
            observations.len(),
            n
        );
        ForwardTrellis { alpha }
    }

    /// Total probability `P(O | λ)` that this model generates `observations`,
    /// summed over every hidden state path.
    ///
    /// # Examples
    ///
    /// ```
    /// use hmmeval::hmm::{HiddenMarkovModel, ObservationSequence};
    ///
    /// let mut hmm = HiddenMarkovModel::new();
    /// hmm.add_state("s");
    /// hmm.set_initial("s", 1.0);
    /// hmm.set_transition("s", "s", 1.0);
    /// hmm.set_emission("s", "x", 0.5);
    ///
    /// let observations = ObservationSequence::new(["x", "x", "x"]).unwrap();
    /// assert_eq!(hmm.forward_probability(&observations), 0.125);
    /// ```
    pub fn forward_probability(&self, observations: &ObservationSequence) -> f64 {
        self.forward_trellis(observations).probability()
    }

    /// Natural logarithm of [`forward_probability`](Self::forward_probability).
    ///
    /// Each time slice is rescaled to sum to one and the log of the scale
    /// factors is accumulated, so the result stays finite for sequences long
    /// enough that the plain probability underflows to zero. Returns
    /// `f64::NEG_INFINITY` when the probability is exactly zero.
    pub fn log_likelihood(&self, observations: &ObservationSequence) -> f64 {
        let transition = self.transition_matrix();
        let mut alpha = self.initial_vector() * &self.emission_vector(observations.first());
        let mut log_prob = 0.0;

        for (time, symbol) in observations.iter().enumerate() {
            if time > 0 {
                alpha = alpha.dot(&transition) * &self.emission_vector(symbol);
            }
            let scale = alpha.sum();
            if scale <= 0.0 {
                return f64::NEG_INFINITY;
            }
            alpha /= scale;
            log_prob += scale.ln();
        }

        log_prob
    }

    fn initial_vector(&self) -> Array1<f64> {
        self.states()
            .iter()
            .map(|s| self.initial_probability(s))
            .collect()
    }

    fn emission_vector(&self, symbol: &str) -> Array1<f64> {
        self.states()
            .iter()
            .map(|s| self.emission_probability(s, symbol))
            .collect()
    }

    fn transition_matrix(&self) -> Array2<f64> {
        let states = self.states();
        Array2::from_shape_fn((states.len(), states.len()), |(from, to)| {
            self.transition_probability(&states[from], &states[to])
        })
    }
}
