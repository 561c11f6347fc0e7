//! Error categories and the static text attached to each of them

use crate::error::DebuggerError;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Description reported for messages that match no rule.
pub const UNRECOGNIZED_DESCRIPTION: &str = "An unrecognized error type";

/// Closed set of classification outcomes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum Category {
    /// GPT could not reach the tool endpoint
    Connector,
    /// Too many requests in a short window
    RateLimit,
    /// Content was blocked by moderation
    ContentFilter,
    /// Request did not match the expected shape
    Validation,
    /// Nothing matched
    Unknown,
}

impl Category {
    /// All categories, in rule-priority order
    pub const ALL: [Category; 5] = [
        Category::Connector,
        Category::RateLimit,
        Category::ContentFilter,
        Category::Validation,
        Category::Unknown,
    ];

    /// Wire tag, e.g. `rate_limit`
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Connector => "connector",
            Self::RateLimit => "rate_limit",
            Self::ContentFilter => "content_filter",
            Self::Validation => "validation",
            Self::Unknown => "unknown",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Connector => {
                "This error occurs when GPT cannot communicate with the tool endpoint properly."
            }
            Self::RateLimit => {
                "This error occurs when too many requests are made in a short period."
            }
            Self::ContentFilter => {
                "This error occurs when content is flagged by the content moderation system."
            }
            Self::Validation => {
                "This error occurs when the input doesn't match the expected format."
            }
            Self::Unknown => UNRECOGNIZED_DESCRIPTION,
        }
    }

    /// Remediation steps, most useful first
    pub fn suggestions(&self) -> &'static [&'static str; 4] {
        match self {
            Self::Connector => &[
                "Check if the server is running and accessible",
                "Verify that the endpoint URL is correct",
                "Check if any network issues are preventing communication",
                "Examine API key permissions and validity",
            ],
            Self::RateLimit => &[
                "Implement exponential backoff in your requests",
                "Reduce the frequency of API calls",
                "Consider upgrading your API tier for higher limits",
                "Cache results when possible to reduce duplicate calls",
            ],
            Self::ContentFilter => &[
                "Review your prompts for potentially sensitive content",
                "Adjust phrasing to be more neutral",
                "Use alternate terminology that avoids triggering the filter",
                "Break complex requests into smaller, safer segments",
            ],
            Self::Validation => &[
                "Check the API documentation for correct parameter formats",
                "Ensure all required parameters are provided",
                "Verify that parameter types match the expected format",
                "Review error messages for specific validation failures",
            ],
            Self::Unknown => &[
                "Examine the full error message for additional context",
                "Check API documentation for this specific error",
                "Look for recent changes to the system that might have caused this",
                "Enable verbose logging to gather more information",
            ],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DebuggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| DebuggerError::UnknownCategory(s.to_string()))
    }
}
