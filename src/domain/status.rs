//! Application status and its shared presentation table.
//!
//! Every renderer (list, calendar, legend) looks labels and colours up here
//! rather than matching on status strings itself.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

use super::Locale;

/// Where an application currently stands.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum JobStatus {
    Applied,
    Interview,
    Offered,
    Rejected,
}

/// Presentation attributes for one status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusStyle {
    pub status: JobStatus,
    pub label_en: &'static str,
    pub label_th: &'static str,
    /// Hex colour, `#RRGGBB`
    pub color: &'static str,
    pub sort_order: u8,
}

/// Single mapping table, indexed in `JobStatus::ALL` order.
pub const STATUS_STYLES: [StatusStyle; 4] = [
    StatusStyle {
        status: JobStatus::Applied,
        label_en: "Applied",
        label_th: "สมัครแล้ว",
        color: "#2196F3",
        sort_order: 0,
    },
    StatusStyle {
        status: JobStatus::Interview,
        label_en: "Interview",
        label_th: "สัมภาษณ์",
        color: "#FF9800",
        sort_order: 1,
    },
    StatusStyle {
        status: JobStatus::Offered,
        label_en: "Offered",
        label_th: "ได้รับข้อเสนอ",
        color: "#4CAF50",
        sort_order: 2,
    },
    StatusStyle {
        status: JobStatus::Rejected,
        label_en: "Rejected",
        label_th: "ถูกปฏิเสธ",
        color: "#F44336",
        sort_order: 3,
    },
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown status '{0}' (expected Applied, Interview, Offered or Rejected)")]
pub struct ParseStatusError(pub String);

impl JobStatus {
    pub const ALL: [JobStatus; 4] = [
        JobStatus::Applied,
        JobStatus::Interview,
        JobStatus::Offered,
        JobStatus::Rejected,
    ];

    /// Name as stored in the `status` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Applied => "Applied",
            JobStatus::Interview => "Interview",
            JobStatus::Offered => "Offered",
            JobStatus::Rejected => "Rejected",
        }
    }

    pub fn style(&self) -> &'static StatusStyle {
        let index = match self {
            JobStatus::Applied => 0,
            JobStatus::Interview => 1,
            JobStatus::Offered => 2,
            JobStatus::Rejected => 3,
        };
        &STATUS_STYLES[index]
    }

    pub fn label(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.style().label_en,
            Locale::Th => self.style().label_th,
        }
    }

    pub fn color(&self) -> &'static str {
        self.style().color
    }

    pub fn sort_order(&self) -> u8 {
        self.style().sort_order
    }

    /// Colour as an RGB triple, for terminal rendering.
    pub fn rgb(&self) -> (u8, u8, u8) {
        let hex = self.color().trim_start_matches('#');
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or(0);
        (channel(0), channel(2), channel(4))
    }
}

impl FromStr for JobStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        JobStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseStatusError(wanted.to_string()))
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
