//! Choosing the model that best explains one observation sequence.

use std::fmt;

use log::{debug, warn};
use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::hmm::model::HiddenMarkovModel;
use crate::hmm::observation::ObservationSequence;

/// How well one registered model explains the observations.
#[derive(Debug, Clone, Copy)]
pub struct ModelScore<'a> {
    /// Registration index within the selector
    pub index: usize,
    pub model: &'a HiddenMarkovModel,
    /// `P(O | λ)` from the Forward Algorithm
    pub probability: f64,
    /// `ln P(O | λ)`; the scaled log-likelihood when `probability` has
    /// underflowed, `f64::NEG_INFINITY` when it is truly zero
    pub log_probability: f64,
}

impl ModelScore<'_> {
    /// The model's name, or `model #<index>` when it has none.
    pub fn label(&self) -> String {
        match self.model.name() {
            Some(name) => name.to_string(),
            None => format!("model #{}", self.index),
        }
    }

    /// Whether this score explains the observations at all.
    pub fn is_viable(&self) -> bool {
        self.probability > 0.0 || self.log_probability > f64::NEG_INFINITY
    }

    /// Strictly greater probability, so a tie keeps `other`. Only when both
    /// probabilities have underflowed to zero are the scaled log-likelihoods
    /// compared instead.
    fn beats(&self, other: &ModelScore<'_>) -> bool {
        if self.probability == 0.0 && other.probability == 0.0 {
            self.log_probability > other.log_probability
        } else {
            self.probability > other.probability
        }
    }
}

impl fmt::Display for ModelScore<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: probability {}, log-probability {}",
            self.label(),
            self.probability,
            self.log_probability
        )
    }
}

/// Every model's score plus the winner, if any.
#[derive(Debug, Clone)]
pub struct Evaluation<'a> {
    /// One score per model, in registration order
    pub scores: Vec<ModelScore<'a>>,
    /// `None` when no model assigns the observations a positive probability
    pub best: Option<ModelScore<'a>>,
}

impl<'a> Evaluation<'a> {
    fn from_scores(scores: Vec<ModelScore<'a>>) -> Self {
        let mut best: Option<ModelScore<'a>> = None;
        for score in &scores {
            debug!("{}", score);
            let improves = match &best {
                None => score.is_viable(),
                Some(current) => score.beats(current),
            };
            if improves {
                best = Some(*score);
            }
        }
        if best.is_none() {
            warn!(
                "none of {} models assigns the observations a positive probability",
                scores.len()
            );
        }
        Self { scores, best }
    }
}

/// A fixed set of models evaluated against one shared observation sequence.
///
/// Built once and never mutated afterwards; evaluation borrows the models and
/// the observations.
#[derive(Debug, Clone)]
pub struct ModelSelector {
    models: Vec<HiddenMarkovModel>,
    observations: ObservationSequence,
}

impl ModelSelector {
    pub fn new(models: Vec<HiddenMarkovModel>, observations: ObservationSequence) -> Self {
        Self {
            models,
            observations,
        }
    }

    pub fn models(&self) -> &[HiddenMarkovModel] {
        &self.models
    }

    pub fn observations(&self) -> &ObservationSequence {
        &self.observations
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Scores the model registered at `index`.
    pub fn score(&self, index: usize) -> Option<ModelScore<'_>> {
        self.models
            .get(index)
            .map(|model| score_model(index, model, &self.observations))
    }

    /// Scores every model in registration order and picks the winner.
    pub fn evaluate(&self) -> Evaluation<'_> {
        let scores = self
            .models
            .iter()
            .enumerate()
            .map(|(index, model)| score_model(index, model, &self.observations))
            .collect();
        Evaluation::from_scores(scores)
    }

    /// Same as [`evaluate`](Self::evaluate), but scores the models on the
    /// rayon thread pool.
    ///
    /// Scores are collected back in registration order before the winner is
    /// picked, so the result, tie-breaks included, matches `evaluate`.
    pub fn evaluate_parallel(&self) -> Evaluation<'_> {
        let scores = self
            .models
            .par_iter()
            .enumerate()
            .map(|(index, model)| score_model(index, model, &self.observations))
            .collect();
        Evaluation::from_scores(scores)
    }

    /// The model with the strictly greatest probability; the earliest one
    /// wins a tie.
    ///
    /// Returns `None` if there are no models or every model assigns the
    /// observations a probability of zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use hmmeval::hmm::{HiddenMarkovModel, ModelSelector, ObservationSequence};
    ///
    /// let selector = ModelSelector::new(
    ///     Vec::new(),
    ///     ObservationSequence::new(["x"]).unwrap(),
    /// );
    /// assert!(selector.select_best().is_none());
    /// ```
    pub fn select_best(&self) -> Option<ModelScore<'_>> {
        self.evaluate().best
    }

    /// [`select_best`](Self::select_best) with the models scored in parallel.
    pub fn select_best_parallel(&self) -> Option<ModelScore<'_>> {
        self.evaluate_parallel().best
    }

    /// Validates every model, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidModel`] naming the failing model's registration index.
    pub fn validate(&self, tolerance: f64) -> Result<()> {
        for (index, model) in self.models.iter().enumerate() {
            model
                .validate(tolerance)
                .map_err(|source| Error::InvalidModel { index, source })?;
        }
        Ok(())
    }
}

fn score_model<'a>(
    index: usize,
    model: &'a HiddenMarkovModel,
    observations: &ObservationSequence,
) -> ModelScore<'a> {
    let probability = model.forward_probability(observations);
    // The scaled recurrence is only needed once the probability underflows
    let log_probability = if probability > 0.0 {
        probability.ln()
    } else {
        model.log_likelihood(observations)
    };
    ModelScore {
        index,
        model,
        probability,
        log_probability,
    }
}
