//! Shared fixtures for the gptdebug integration tests

use debugger::Category;
use serde_json::{Value, json};

/// Messages taken from real GPT action failures, with the category each should land in
pub const SAMPLE_MESSAGES: &[(&str, Category)] = &[
    ("Connector timeout to endpoint", Category::Connector),
    ("ClientResponseError: connector closed unexpectedly", Category::Connector),
    ("429 Too Many Requests", Category::RateLimit),
    ("Rate limit reached for gpt-4 in organization", Category::RateLimit),
    ("Response was flagged by moderation", Category::ContentFilter),
    ("Output blocked by Content Filter policy", Category::ContentFilter),
    ("Invalid schema for parameter X", Category::Validation),
    ("UnrecognizedKwargsError: unexpected PARAMETER 'units'", Category::Validation),
    ("OpenAPI schema could not be parsed", Category::Validation),
    ("Internal server error", Category::Unknown),
    ("ResponseTooLargeError", Category::Unknown),
];

/// Build the params mapping a tool runner would send
pub fn params(message: &str) -> Value {
    json!({ "error_message": message })
}
