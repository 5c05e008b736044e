//! Monetary amount extraction (limit of liability, deductible).

use regex::Regex;

use super::patterns::{DEDUCTIBLE, LIMIT_OF_LIABILITY};
use crate::extraction::FieldExtractor;
use crate::models::result::FieldValue;

/// Labeled whole-number amount extractor.
pub struct AmountExtractor {
    pattern: &'static Regex,
}

impl AmountExtractor {
    /// Extractor for "limit of liability: ..." lines.
    pub fn limit_of_liability() -> Self {
        Self {
            pattern: &LIMIT_OF_LIABILITY,
        }
    }

    /// Extractor for "deductible: ..." lines.
    pub fn deductible() -> Self {
        Self {
            pattern: &DEDUCTIBLE,
        }
    }
}

impl FieldExtractor for AmountExtractor {
    fn pattern(&self) -> &Regex {
        self.pattern
    }

    fn clean(&self, captured: &str) -> String {
        strip_amount_formatting(captured)
    }

    fn parse(&self, cleaned: &str) -> Option<FieldValue> {
        parse_amount(cleaned).map(FieldValue::Integer)
    }
}

/// Remove thousands separators and the currency symbol.
pub fn strip_amount_formatting(s: &str) -> String {
    s.chars().filter(|c| *c != ',' && *c != '$').collect()
}

/// Parse a whole-number amount such as "$5,000,000".
///
/// Returns `None` for empty input or values above `u64::MAX`.
pub fn parse_amount(s: &str) -> Option<u64> {
    let digits = strip_amount_formatting(s);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::ExtractionOutcome;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("$5,000,000"), Some(5_000_000));
        assert_eq!(parse_amount("250000"), Some(250_000));
        assert_eq!(parse_amount("1,0,0"), Some(100));
        assert_eq!(parse_amount(","), None);
        assert_eq!(parse_amount("$"), None);
        assert_eq!(parse_amount("99999999999999999999999"), None);
    }

    #[test]
    fn test_extract_limit() {
        let extractor = AmountExtractor::limit_of_liability();
        let outcome = extractor.extract(&lines(&["limit of liability : $5,000,000 usd"]));

        assert_eq!(outcome, ExtractionOutcome::Found(FieldValue::Integer(5_000_000)));
    }

    #[test]
    fn test_formatting_differences_collapse() {
        let extractor = AmountExtractor::deductible();
        let outcome = extractor.extract(&lines(&["deductible: $10,000", "deductible: 10000"]));

        assert_eq!(outcome, ExtractionOutcome::Found(FieldValue::Integer(10_000)));
    }

    #[test]
    fn test_conflicting_amounts_are_ambiguous() {
        let extractor = AmountExtractor::deductible();
        let outcome = extractor.extract(&lines(&["deductible: $500", "deductible: $1,000"]));

        assert_eq!(outcome, ExtractionOutcome::Ambiguous { candidates: 2 });
    }

    #[test]
    fn test_separator_only_capture_is_no_value() {
        let extractor = AmountExtractor::deductible();
        assert_eq!(
            extractor.extract(&lines(&["deductible: , see schedule"])),
            ExtractionOutcome::NoMatch
        );
    }

    #[test]
    fn test_unparseable_capture_still_counts_towards_ambiguity() {
        let extractor = AmountExtractor::deductible();
        let outcome = extractor.extract(&lines(&["deductible: ,", "deductible: 500"]));

        assert_eq!(outcome, ExtractionOutcome::Ambiguous { candidates: 2 });
    }
}
