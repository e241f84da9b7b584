//! Phone number validation rules and number lists

use once_cell::sync::Lazy;
use regex::Regex;
use sms_shared::phone::{is_numeric_phone, DEFAULT_NUMBER_PATTERN};

use crate::errors::{SmsError, SmsResult};

static DEFAULT_NUMBER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(DEFAULT_NUMBER_PATTERN).unwrap()
});

/// The rule a sender or recipient number has to satisfy
#[derive(Debug, Clone)]
pub enum NumberPattern {
    /// The whole number must match the regular expression
    Regex { source: String, regex: Regex },
    /// Non-empty string of ASCII digits
    Numeric,
}

impl NumberPattern {
    /// Compile a pattern. The match is anchored at both ends.
    pub fn new(pattern: &str) -> SmsResult<Self> {
        let regex = Regex::new(&format!("^(?:{})$", pattern))
            .map_err(|e| SmsError::invalid_config("number_pattern", e.to_string()))?;
        Ok(NumberPattern::Regex {
            source: pattern.to_string(),
            regex,
        })
    }

    /// Pattern from an optional source; `None` selects the numeric fallback
    pub fn from_option(pattern: Option<&str>) -> SmsResult<Self> {
        match pattern {
            Some(p) => Self::new(p),
            None => Ok(NumberPattern::Numeric),
        }
    }

    /// The pattern source, or `None` for the numeric fallback
    pub fn as_str(&self) -> Option<&str> {
        match self {
            NumberPattern::Regex { source, .. } => Some(source.as_str()),
            NumberPattern::Numeric => None,
        }
    }

    pub fn is_valid(&self, number: &str) -> bool {
        match self {
            NumberPattern::Regex { regex, .. } => regex.is_match(number),
            NumberPattern::Numeric => is_numeric_phone(number),
        }
    }

    pub fn validate(&self, number: &str) -> SmsResult<()> {
        if self.is_valid(number) {
            Ok(())
        } else {
            Err(SmsError::InvalidPhoneNumber {
                number: number.to_string(),
            })
        }
    }

    /// Validate every number, stopping at the first rejected one
    pub fn validate_all<S: AsRef<str>>(&self, numbers: &[S]) -> SmsResult<()> {
        numbers.iter().try_for_each(|n| self.validate(n.as_ref()))
    }
}

impl Default for NumberPattern {
    fn default() -> Self {
        NumberPattern::Regex {
            source: DEFAULT_NUMBER_PATTERN.to_string(),
            regex: DEFAULT_NUMBER_REGEX.clone(),
        }
    }
}

/// One or more phone numbers, in the order given
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhoneNumbers(Vec<String>);

impl PhoneNumbers {
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl From<&str> for PhoneNumbers {
    fn from(number: &str) -> Self {
        PhoneNumbers(vec![number.to_string()])
    }
}

impl From<String> for PhoneNumbers {
    fn from(number: String) -> Self {
        PhoneNumbers(vec![number])
    }
}

impl From<Vec<String>> for PhoneNumbers {
    fn from(numbers: Vec<String>) -> Self {
        PhoneNumbers(numbers)
    }
}

impl From<Vec<&str>> for PhoneNumbers {
    fn from(numbers: Vec<&str>) -> Self {
        PhoneNumbers(numbers.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for PhoneNumbers {
    fn from(numbers: &[&str]) -> Self {
        PhoneNumbers(numbers.iter().map(|n| n.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for PhoneNumbers {
    fn from(numbers: [&str; N]) -> Self {
        PhoneNumbers(numbers.iter().map(|n| n.to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pattern() {
        let pattern = NumberPattern::default();
        assert_eq!(pattern.as_str(), Some(r"^\+\d+$"));
        assert!(pattern.is_valid("+49123456789"));
        assert!(pattern.is_valid("+1"));
        assert!(!pattern.is_valid("123456789"));
        assert!(!pattern.is_valid("+49 123"));
        assert!(!pattern.is_valid(""));
    }

    #[test]
    fn test_custom_pattern_must_match_fully() {
        let pattern = NumberPattern::new(r"\+49\d{3}").unwrap();
        assert!(pattern.is_valid("+49123"));
        assert!(!pattern.is_valid("+491234"));
        assert!(!pattern.is_valid("x+49123"));
    }

    #[test]
    fn test_invalid_pattern_is_rejected() {
        let result = NumberPattern::new("(unclosed");
        assert!(matches!(result, Err(SmsError::InvalidConfiguration { .. })));
    }

    #[test]
    fn test_numeric_fallback() {
        let pattern = NumberPattern::from_option(None).unwrap();
        assert_eq!(pattern.as_str(), None);
        assert!(pattern.is_valid("123456789"));
        assert!(!pattern.is_valid("+49123456789"));
        assert!(!pattern.is_valid(""));
    }

    #[test]
    fn test_validate_reports_offending_number() {
        let pattern = NumberPattern::default();
        match pattern.validate_all(&["+49123", "0049123", "bad"]) {
            Err(SmsError::InvalidPhoneNumber { number }) => assert_eq!(number, "0049123"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_phone_numbers_conversions() {
        assert_eq!(PhoneNumbers::from("+1").into_vec(), vec!["+1"]);
        assert_eq!(PhoneNumbers::from(["+1", "+2"]).as_slice(), ["+1", "+2"]);
        assert_eq!(PhoneNumbers::from(vec!["+3".to_string()]).into_vec(), vec!["+3"]);
    }
}
