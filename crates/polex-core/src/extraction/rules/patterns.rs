//! Labeled field patterns for policy correspondence.
//!
//! Every pattern exposes the captured value as the `value` group.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // "policy no: ...", "policy number: ...", "policy #: ..."
    pub static ref POLICY_NUMBER: Regex = Regex::new(
        r"(?i)policy\s(?:no|number|#)\s*:\s*(?P<value>[a-z0-9-]+)"
    ).unwrap();

    // "limit of liability: $5,000,000"
    pub static ref LIMIT_OF_LIABILITY: Regex = Regex::new(
        r"(?i)limit\s*of\s*liability\s*:\s*(?P<value>\$?[0-9,]+)"
    ).unwrap();

    // "deductible: $10,000"
    pub static ref DEDUCTIBLE: Regex = Regex::new(
        r"(?i)deductible\s*:\s*(?P<value>\$?[0-9,]+)"
    ).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_labels() {
        for line in ["policy no: a-1", "policy number : a-1", "policy #:a-1", "POLICY NO :   A-1"] {
            let caps = POLICY_NUMBER.captures(line).unwrap();
            assert_eq!(caps["value"].to_lowercase(), "a-1", "line: {}", line);
        }
        assert!(POLICY_NUMBER.captures("policyno: a-1").is_none());
        assert!(POLICY_NUMBER.captures("policy id: a-1").is_none());
    }

    #[test]
    fn test_amount_labels() {
        let caps = LIMIT_OF_LIABILITY.captures("limit of liability : $5,000,000 usd").unwrap();
        assert_eq!(&caps["value"], "$5,000,000");

        let caps = LIMIT_OF_LIABILITY.captures("limitofliability:250000").unwrap();
        assert_eq!(&caps["value"], "250000");

        let caps = DEDUCTIBLE.captures("excess / deductible: $2,500").unwrap();
        assert_eq!(&caps["value"], "$2,500");

        assert!(DEDUCTIBLE.captures("deductible: n/a").is_none());
    }
}
