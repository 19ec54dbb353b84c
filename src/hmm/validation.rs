//! Optional data-quality checks for a [`HiddenMarkovModel`].
//!
//! Evaluation never calls these. A model that fails validation still
//! evaluates; its probabilities are just meaningless.

use crate::error::{TableKind, ValidationError};
use crate::hmm::model::HiddenMarkovModel;

impl HiddenMarkovModel {
    /// Checks that the model describes proper probability distributions.
    ///
    /// Checks run in this order and the first failure is returned:
    /// 1. at least one state is declared
    /// 2. every stored probability lies in `[0, 1]`
    /// 3. every state named by a table key is declared
    /// 4. the initial probabilities sum to 1 within `tolerance`
    /// 5. each declared state's transition row sums to 1 within `tolerance`
    /// 6. each declared state's emission row sums to 1 within `tolerance`
    ///
    /// # Examples
    ///
    /// ```
    /// use hmmeval::hmm::HiddenMarkovModel;
    /// use hmmeval::ValidationError;
    ///
    /// let mut hmm = HiddenMarkovModel::new();
    /// hmm.add_state("s");
    /// hmm.set_initial("s", 0.9);
    ///
    /// assert!(matches!(
    ///     hmm.validate(1e-6),
    ///     Err(ValidationError::InitialNotNormalized { .. })
    /// ));
    /// ```
    pub fn validate(&self, tolerance: f64) -> Result<(), ValidationError> {
        if self.states().is_empty() {
            return Err(ValidationError::NoStates);
        }
        self.check_ranges()?;
        self.check_declared_states()?;

        let sum = self.initial_probabilities().sum();
        if (sum - 1.0).abs() > tolerance {
            return Err(ValidationError::InitialNotNormalized { sum });
        }

        for (table, kind) in [
            (self.transition_probabilities(), TableKind::Transition),
            (self.emission_probabilities(), TableKind::Emission),
        ] {
            for state in self.states() {
                let sum: f64 = table.row(state).map(|(_, p)| p).sum();
                if (sum - 1.0).abs() > tolerance {
                    return Err(ValidationError::RowNotNormalized {
                        table: kind,
                        state: state.clone(),
                        sum,
                    });
                }
            }
        }

        Ok(())
    }

    fn check_ranges(&self) -> Result<(), ValidationError> {
        let mut entries: Vec<(TableKind, String, f64)> = self
            .initial_probabilities()
            .iter()
            .map(|(state, p)| (TableKind::Initial, state.to_string(), p))
            .collect();
        entries.extend(
            self.transition_probabilities()
                .iter()
                .map(|(from, to, p)| (TableKind::Transition, format!("{}->{}", from, to), p)),
        );
        entries.extend(
            self.emission_probabilities()
                .iter()
                .map(|(state, symbol, p)| (TableKind::Emission, format!("{}->{}", state, symbol), p)),
        );
        // Hash order is arbitrary; sort so the reported entry is stable
        entries.sort_by(|a, b| (a.0, &a.1).cmp(&(b.0, &b.1)));

        match entries
            .into_iter()
            .find(|(_, _, p)| !(0.0..=1.0).contains(p))
        {
            Some((table, key, value)) => Err(ValidationError::OutOfRange { table, key, value }),
            None => Ok(()),
        }
    }

    fn check_declared_states(&self) -> Result<(), ValidationError> {
        let mut referenced: Vec<(TableKind, &str)> = self
            .initial_probabilities()
            .iter()
            .map(|(state, _)| (TableKind::Initial, state))
            .collect();
        for (from, to, _) in self.transition_probabilities().iter() {
            referenced.push((TableKind::Transition, from));
            referenced.push((TableKind::Transition, to));
        }
        referenced.extend(
            self.emission_probabilities()
                .givens()
                .map(|state| (TableKind::Emission, state)),
        );
        referenced.sort_unstable();

        match referenced
            .into_iter()
            .find(|(_, state)| !self.has_state(state))
        {
            Some((table, state)) => Err(ValidationError::UndeclaredState {
                table,
                state: state.to_string(),
            }),
            None => Ok(()),
        }
    }
}
