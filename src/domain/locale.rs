//! Display locales.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Locale used when rendering dates, salaries and status labels.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Th,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Th => "th",
        }
    }

    /// Suffix appended to formatted salaries.
    pub fn currency_suffix(&self) -> &'static str {
        match self {
            Locale::En => "THB",
            Locale::Th => "บาท",
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "en-us" | "en-gb" => Ok(Locale::En),
            "th" | "th-th" => Ok(Locale::Th),
            other => Err(format!("unsupported locale: {}", other)),
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
