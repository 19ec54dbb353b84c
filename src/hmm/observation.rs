use std::str::FromStr;

use crate::error::{Error, Result};
use crate::hmm::model::Symbol;

/// An ordered, non-empty sequence of observed symbols.
///
/// The sequence is read-only once built and is shared by every model during
/// one evaluation run.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObservationSequence {
    symbols: Vec<Symbol>,
}

impl ObservationSequence {
    /// Builds a sequence from any iterable of symbols.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyObservationSequence`] if `symbols` yields nothing.
    pub fn new<I, S>(symbols: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<Symbol>,
    {
        let symbols: Vec<Symbol> = symbols.into_iter().map(Into::into).collect();
        if symbols.is_empty() {
            return Err(Error::EmptyObservationSequence);
        }
        Ok(Self { symbols })
    }

    /// Builds a sequence from symbols as written in a definition file.
    ///
    /// Surrounding whitespace is trimmed from every symbol.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidInput`] for a symbol that is blank after trimming, and
    /// [`Error::EmptyObservationSequence`] if there are no symbols.
    pub fn from_raw_symbols<I, S>(symbols: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let symbols = symbols
            .into_iter()
            .enumerate()
            .map(|(position, symbol)| {
                let symbol = symbol.as_ref().trim();
                if symbol.is_empty() {
                    Err(Error::InvalidInput(format!(
                        "blank observation at position {}",
                        position
                    )))
                } else {
                    Ok(symbol.to_string())
                }
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(symbols)
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// The symbol observed at time step 0.
    pub fn first(&self) -> &str {
        // Non-empty by construction
        &self.symbols[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.symbols.iter().map(String::as_str)
    }

    /// Number of time steps, always at least 1.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl TryFrom<Vec<Symbol>> for ObservationSequence {
    type Error = Error;

    fn try_from(symbols: Vec<Symbol>) -> Result<Self> {
        Self::new(symbols)
    }
}

/// Parses a comma-separated list such as `"Happy, Grumpy, Happy"`.
///
/// Surrounding whitespace is trimmed from every symbol. A blank string is an
/// empty sequence; a blank symbol between two commas is rejected.
impl FromStr for ObservationSequence {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().is_empty() {
            return Err(Error::EmptyObservationSequence);
        }
        Self::from_raw_symbols(s.split(','))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sequence_is_rejected() {
        let empty: Vec<String> = vec![];
        assert!(matches!(
            ObservationSequence::new(empty),
            Err(Error::EmptyObservationSequence)
        ));
        assert!(matches!(
            "   ".parse::<ObservationSequence>(),
            Err(Error::EmptyObservationSequence)
        ));
    }

    #[test]
    fn test_parse_trims_symbols() {
        let seq: ObservationSequence = "Happy,  Grumpy ,Happy".parse().unwrap();
        assert_eq!(seq.len(), 3);
        assert_eq!(seq.first(), "Happy");
        assert_eq!(seq.iter().collect::<Vec<_>>(), vec!["Happy", "Grumpy", "Happy"]);
    }

    #[test]
    fn test_parse_rejects_blank_symbol() {
        let err = "Happy,,Grumpy".parse::<ObservationSequence>().unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_raw_symbols_are_trimmed_and_checked() {
        let seq = ObservationSequence::from_raw_symbols([" Happy", "Grumpy "]).unwrap();
        assert_eq!(seq.iter().collect::<Vec<_>>(), vec!["Happy", "Grumpy"]);

        assert!(matches!(
            ObservationSequence::from_raw_symbols(["", "x"]),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            ObservationSequence::from_raw_symbols(Vec::<String>::new()),
            Err(Error::EmptyObservationSequence)
        ));
    }

    #[test]
    fn test_try_from_vec() {
        let seq = ObservationSequence::try_from(vec!["x".to_string()]).unwrap();
        assert_eq!(seq.symbols(), &["x".to_string()]);
        assert!(!seq.is_empty());
    }
}
