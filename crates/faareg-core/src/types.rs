//! Shared types used across faareg.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Country prefix of US civil registrations.
const US_PREFIX: char = 'N';

/// Newtype for the identifier a lookup is made with.
///
/// The inner value is kept exactly as the caller supplied it; the registry
/// receives it unmodified as a query parameter. Normalization only happens in
/// [`TailNumber::registration`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TailNumber(String);

impl TailNumber {
    /// Wrap an identifier. No validation is performed.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The full registration mark: trimmed, upper-cased and carrying the
    /// `N` prefix exactly once (`265FT` and `n265ft` both become `N265FT`).
    #[must_use]
    pub fn registration(&self) -> String {
        let upper = self.0.trim().to_uppercase();
        if upper.starts_with(US_PREFIX) {
            upper
        } else {
            format!("{US_PREFIX}{upper}")
        }
    }
}

impl fmt::Display for TailNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TailNumber {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tail_number_keeps_input() {
        let tail = TailNumber::new(" 265ft ");
        assert_eq!(tail.as_str(), " 265ft ");
        assert_eq!(tail.to_string(), " 265ft ");
    }

    #[test]
    fn test_registration_adds_prefix() {
        assert_eq!(TailNumber::new("265FT").registration(), "N265FT");
        assert_eq!(TailNumber::new("265ft").registration(), "N265FT");
        assert_eq!(TailNumber::new(" 1A ").registration(), "N1A");
    }

    #[test]
    fn test_registration_keeps_existing_prefix() {
        assert_eq!(TailNumber::new("N265FT").registration(), "N265FT");
        assert_eq!(TailNumber::new("n265ft").registration(), "N265FT");
    }

    #[test]
    fn test_serialization_is_transparent() {
        let tail = TailNumber::from("265FT");
        let json = serde_json::to_string(&tail).expect("serialize tail number");
        assert_eq!(json, "\"265FT\"");

        let parsed: TailNumber = serde_json::from_str(&json).expect("parse tail number");
        assert_eq!(parsed, tail);
    }
}
