//! Plain-text rendering of an [`Evaluation`].

use std::fmt;

use crate::hmm::Evaluation;

const RULE: &str = "--------------------------------------------------------------------------------";

/// Report of one evaluation run, printed with `{}`.
///
/// ```text
/// --------------------------------------------------------------------------------
/// Evaluation of the best model of the file data/weather.json
///   moody: probability 0.2084, log-probability -1.568...
///   cheerful: probability 0.0916, log-probability -2.390...
/// Best Model: moody [Rain, Sunny, Cloudy]
/// Probability: 0.2084
/// Log-Probability: -1.568...
/// --------------------------------------------------------------------------------
/// ```
///
/// A zero probability has a log-probability of `-inf`.
#[derive(Debug)]
pub struct Report<'e, 'm> {
    source: String,
    evaluation: &'e Evaluation<'m>,
}

impl<'e, 'm> Report<'e, 'm> {
    pub fn new(source: impl Into<String>, evaluation: &'e Evaluation<'m>) -> Self {
        Self {
            source: source.into(),
            evaluation,
        }
    }
}

impl fmt::Display for Report<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", RULE)?;
        writeln!(f, "Evaluation of the best model of the file {}", self.source)?;
        for score in &self.evaluation.scores {
            writeln!(f, "  {}", score)?;
        }
        match &self.evaluation.best {
            Some(best) => {
                writeln!(
                    f,
                    "Best Model: {} [{}]",
                    best.label(),
                    best.model.states().join(", ")
                )?;
                writeln!(f, "Probability: {}", best.probability)?;
                writeln!(f, "Log-Probability: {}", best.log_probability)?;
            }
            None => writeln!(f, "No model explains the observations")?,
        }
        writeln!(f, "{}", RULE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hmm::{HiddenMarkovModel, ModelSelector, ObservationSequence};

    fn emitter(name: &str, p: f64) -> HiddenMarkovModel {
        let mut hmm = HiddenMarkovModel::named(name);
        hmm.add_state("s");
        hmm.set_initial("s", 1.0);
        hmm.set_emission("s", "o", p);
        hmm
    }

    #[test]
    fn test_report_names_winner() {
        let selector = ModelSelector::new(
            vec![emitter("low", 0.25), emitter("high", 0.5)],
            ObservationSequence::new(["o"]).unwrap(),
        );
        let evaluation = selector.evaluate();
        let text = Report::new("inline.json", &evaluation).to_string();

        assert!(text.starts_with(RULE));
        assert!(text.contains("Evaluation of the best model of the file inline.json"));
        assert!(text.contains("  low: probability 0.25, log-probability"));
        assert!(text.contains("Best Model: high [s]"));
        assert!(text.contains("Probability: 0.5\n"));
        assert!(text.contains(&format!("Log-Probability: {}\n", 0.5_f64.ln())));
    }

    #[test]
    fn test_unnamed_winner_uses_score_label() {
        let mut unnamed = HiddenMarkovModel::new();
        unnamed.add_state("s");
        unnamed.set_initial("s", 1.0);
        unnamed.set_emission("s", "o", 0.75);

        let selector = ModelSelector::new(
            vec![emitter("named", 0.25), unnamed],
            ObservationSequence::new(["o"]).unwrap(),
        );
        let evaluation = selector.evaluate();
        let text = Report::new("unnamed.json", &evaluation).to_string();

        assert!(text.contains("  model #1: probability 0.75"));
        assert!(text.contains("Best Model: model #1 [s]\n"));
        assert!(!text.contains("unnamed model"));
    }

    #[test]
    fn test_report_without_winner() {
        let selector = ModelSelector::new(
            vec![emitter("mute", 0.0)],
            ObservationSequence::new(["o"]).unwrap(),
        );
        let evaluation = selector.evaluate();
        let text = Report::new("mute.json", &evaluation).to_string();

        assert!(text.contains("mute: probability 0, log-probability -inf"));
        assert!(text.contains("No model explains the observations"));
        assert!(!text.contains("Best Model"));
    }
}
