//! Error types and utilities for the waygraph toolkit
//!
//! Provides the shared error enum and fuzzy matching for travel mode names.

use strsim::{jaro_winkler, normalized_levenshtein};
use thiserror::Error;

/// Travel modes understood by the graph builder, in canonical spelling.
pub const TRAVEL_MODES: [&str; 3] = ["walking", "bicycling", "driving"];

/// Common short names people type instead of the canonical mode.
const MODE_ALIASES: [(&str, &str); 10] = [
    ("walk", "walking"),
    ("foot", "walking"),
    ("pedestrian", "walking"),
    ("bike", "bicycling"),
    ("bicycle", "bicycling"),
    ("cycling", "bicycling"),
    ("cycle", "bicycling"),
    ("car", "driving"),
    ("drive", "driving"),
    ("motorcar", "driving"),
];

/// Find the best fuzzy match for `input` among `candidates`.
///
/// Scores are 70% Jaro-Winkler + 30% normalized Levenshtein. Jaro-Winkler
/// rewards shared prefixes, which is how most mode typos look ("walkng",
/// "drivin"); Levenshtein catches dropped letters in the middle.
///
/// Minimum threshold: 0.65 similarity.
fn find_best_fuzzy_match(input: &str, candidates: &[&str]) -> Option<String> {
    let input_lower = input.to_lowercase();
    let min_threshold = 0.65;

    let mut best_match = None;
    let mut best_score = 0.0f64;

    for candidate in candidates {
        let jw_score = jaro_winkler(&input_lower, candidate);
        let lev_score = normalized_levenshtein(&input_lower, candidate);
        let score = (jw_score * 0.7) + (lev_score * 0.3);

        if score >= min_threshold && score > best_score {
            best_score = score;
            best_match = Some((*candidate).to_string());
        }
    }

    best_match
}

/// Suggest the canonical travel mode for a misspelled or aliased input.
///
/// Returns `None` when the input already is a canonical mode (in any case)
/// or when nothing is close enough to be a useful suggestion.
pub fn suggest_travel_mode(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if TRAVEL_MODES.iter().any(|m| m.eq_ignore_ascii_case(trimmed)) {
        return None;
    }

    if let Some((_, canonical)) = MODE_ALIASES
        .iter()
        .find(|(alias, _)| alias.eq_ignore_ascii_case(trimmed))
    {
        return Some((*canonical).to_string());
    }

    // Very short inputs match everything poorly and nothing usefully
    if trimmed.chars().count() < 3 {
        return None;
    }

    find_best_fuzzy_match(trimmed, &TRAVEL_MODES)
}

/// Main error type for waygraph operations
#[derive(Error, Debug)]
pub enum Error {
    /// Missing or out-of-domain arguments
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input document could not be decoded
    #[error("Parse error: {0}")]
    Parse(String),
}

impl Error {
    /// Build an `InvalidInput` error for an unrecognised travel mode,
    /// appending a suggestion when one is close enough.
    pub fn unknown_travel_mode(input: &str) -> Self {
        match suggest_travel_mode(input) {
            Some(suggestion) => Error::InvalidInput(format!(
                "unknown travel mode '{input}', did you mean '{suggestion}'?"
            )),
            None => Error::InvalidInput(format!(
                "unknown travel mode '{input}' (expected one of: {})",
                TRAVEL_MODES.join(", ")
            )),
        }
    }
}

/// Convenience result type for waygraph operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggest_travel_mode_typos() {
        assert_eq!(suggest_travel_mode("walkng"), Some("walking".to_string()));
        assert_eq!(suggest_travel_mode("drivng"), Some("driving".to_string()));
        assert_eq!(
            suggest_travel_mode("bicyling"),
            Some("bicycling".to_string())
        );
        assert_eq!(suggest_travel_mode("WALKNG"), Some("walking".to_string()));
    }

    #[test]
    fn test_suggest_travel_mode_aliases() {
        assert_eq!(suggest_travel_mode("car"), Some("driving".to_string()));
        assert_eq!(suggest_travel_mode("Bike"), Some("bicycling".to_string()));
        assert_eq!(suggest_travel_mode("foot"), Some("walking".to_string()));
    }

    #[test]
    fn test_suggest_travel_mode_no_match() {
        assert_eq!(suggest_travel_mode("walking"), None); // Correct spelling
        assert_eq!(suggest_travel_mode("Driving"), None); // Just wrong case
        assert_eq!(suggest_travel_mode("xq"), None);
        assert_eq!(suggest_travel_mode("helicopter"), None);
    }

    #[test]
    fn test_unknown_travel_mode_message() {
        let err = Error::unknown_travel_mode("walkng");
        assert_eq!(
            err.to_string(),
            "Invalid input: unknown travel mode 'walkng', did you mean 'walking'?"
        );

        let err = Error::unknown_travel_mode("helicopter");
        assert!(err.to_string().contains("expected one of: walking, bicycling, driving"));
    }
}
