//! Gatekeeper configuration

use serde::{Deserialize, Serialize};

/// Configuration for validation rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Phrases marking a ready date as relative (case-insensitive substring match)
    #[serde(default = "default_relative_date_keywords")]
    pub relative_date_keywords: Vec<String>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            relative_date_keywords: default_relative_date_keywords(),
        }
    }
}

impl ValidationConfig {
    /// Whether a ready date contains any relative-date phrase
    pub fn is_relative_date(&self, value: &str) -> bool {
        let lower = value.to_lowercase();
        self.relative_date_keywords
            .iter()
            .any(|keyword| lower.contains(&keyword.to_lowercase()))
    }
}

fn default_relative_date_keywords() -> Vec<String> {
    [
        "next week",
        "next month",
        "tomorrow",
        "today",
        "next",
        "this week",
        "this month",
    ]
    .iter()
    .map(|k| k.to_string())
    .collect()
}
