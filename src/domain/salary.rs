//! Salary in whole currency units.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Locale;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct Salary(i64);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("salary '{0}' is too large")]
pub struct SalaryOverflow(pub String);

impl Salary {
    pub fn new(amount: i64) -> Self {
        Self(amount)
    }

    pub fn amount(&self) -> i64 {
        self.0
    }

    /// Parse free-form input by keeping only its digits.
    ///
    /// `"$100,000"` becomes 100000; input without digits yields `None`.
    pub fn parse_input(input: &str) -> Result<Option<Self>, SalaryOverflow> {
        let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();
        if digits.is_empty() {
            return Ok(None);
        }
        digits
            .parse::<i64>()
            .map(|amount| Some(Self(amount)))
            .map_err(|_| SalaryOverflow(input.trim().to_string()))
    }

    /// Grouped amount with the locale's currency suffix, e.g. `100,000 บาท`.
    pub fn format(&self, locale: Locale) -> String {
        format!("{} {}", group_thousands(self.0), locale.currency_suffix())
    }
}

impl From<i64> for Salary {
    fn from(amount: i64) -> Self {
        Self(amount)
    }
}

fn group_thousands(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if amount < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sanitizes_formatting() {
        assert_eq!(Salary::parse_input("$100,000").unwrap(), Some(Salary::new(100_000)));
        assert_eq!(Salary::parse_input("70000").unwrap(), Some(Salary::new(70_000)));
    }

    #[test]
    fn test_parse_without_digits() {
        assert_eq!(Salary::parse_input("").unwrap(), None);
        assert_eq!(Salary::parse_input("negotiable").unwrap(), None);
    }

    #[test]
    fn test_parse_overflow() {
        assert!(Salary::parse_input("99999999999999999999999").is_err());
    }

    #[test]
    fn test_format() {
        assert_eq!(Salary::new(120_000).format(Locale::Th), "120,000 บาท");
        assert_eq!(Salary::new(950).format(Locale::En), "950 THB");
        assert_eq!(Salary::new(1_000_000).format(Locale::En), "1,000,000 THB");
    }

    #[test]
    fn test_group_negative() {
        assert_eq!(group_thousands(-12_345), "-12,345");
    }
}
