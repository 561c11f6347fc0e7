//! Pure business logic for classifying GPT tool-call error messages
//! No presentation concerns - returns structured data only

use crate::category::Category;
use serde::{Deserialize, Serialize};

/// Structured result of classifying a single error message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Category the message was assigned to
    pub error_type: Category,
    /// Fixed description of the category
    pub description: String,
    /// Fixed remediation steps for the category
    pub suggestions: Vec<String>,
    /// The message exactly as supplied
    pub original_error: String,
}

impl ClassificationResult {
    fn new(error_type: Category, original_error: &str) -> Self {
        Self {
            error_type,
            description: error_type.description().to_string(),
            suggestions: error_type
                .suggestions()
                .iter()
                .map(|s| s.to_string())
                .collect(),
            original_error: original_error.to_string(),
        }
    }
}

/// A keyword set and the category it selects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub category: Category,
    /// Lowercase substrings; any one of them selects the rule
    pub keywords: &'static [&'static str],
}

/// Rules in priority order. The first rule with a matching keyword wins.
pub static RULES: &[Rule] = &[
    Rule {
        category: Category::Connector,
        keywords: &["connector"],
    },
    Rule {
        category: Category::RateLimit,
        keywords: &["rate limit", "too many requests"],
    },
    Rule {
        category: Category::ContentFilter,
        keywords: &["content filter", "flagged"],
    },
    Rule {
        category: Category::Validation,
        keywords: &["invalid", "schema", "parameter"],
    },
];

/// Trait for error classification - pure business logic
pub trait ErrorAnalyzer: Send + Sync {
    /// Find the first rule matching the message, with the keyword that hit
    fn find_match(&self, message: &str) -> Option<(&'static Rule, &'static str)>;

    /// Classify a message. Never fails; unmatched input is `Unknown`.
    fn classify(&self, message: &str) -> ClassificationResult {
        let error_type = self
            .find_match(message)
            .map_or(Category::Unknown, |(rule, _)| rule.category);
        ClassificationResult::new(error_type, message)
    }
}

/// Default implementation backed by [`RULES`]
pub struct GptErrorClassifier {
    rules: &'static [Rule],
}

impl GptErrorClassifier {
    pub fn new() -> Self {
        Self { rules: RULES }
    }

    pub fn rules(&self) -> &'static [Rule] {
        self.rules
    }
}

impl Default for GptErrorClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl ErrorAnalyzer for GptErrorClassifier {
    fn find_match(&self, message: &str) -> Option<(&'static Rule, &'static str)> {
        let normalized = message.to_lowercase();
        self.rules.iter().find_map(|rule| {
            rule.keywords
                .iter()
                .find(|keyword| normalized.contains(*keyword))
                .map(|keyword| (rule, *keyword))
        })
    }
}

/// Classify a message with the default rule table
pub fn classify(message: &str) -> ClassificationResult {
    GptErrorClassifier::new().classify(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_categories() {
        let cases = [
            ("Connector timeout to endpoint", Category::Connector),
            ("429 Too Many Requests", Category::RateLimit),
            ("You hit the RATE LIMIT for this model", Category::RateLimit),
            ("Blocked by content filter", Category::ContentFilter),
            ("Response was flagged by moderation", Category::ContentFilter),
            ("Invalid schema for parameter X", Category::Validation),
            ("Schema mismatch", Category::Validation),
            ("missing parameter: city", Category::Validation),
            ("Something exploded", Category::Unknown),
        ];

        for (message, expected) in cases {
            assert_eq!(classify(message).error_type, expected, "{message}");
        }
    }

    #[test]
    fn test_first_rule_wins() {
        let result = classify("Connector failed: rate limit exceeded");
        assert_eq!(result.error_type, Category::Connector);

        let result = classify("Too many requests with invalid parameter");
        assert_eq!(result.error_type, Category::RateLimit);

        let result = classify("flagged: invalid schema");
        assert_eq!(result.error_type, Category::ContentFilter);
    }

    #[test]
    fn test_original_error_is_preserved() {
        let message = "  CONNECTOR Error: ÜBER timeout\n";
        let result = classify(message);
        assert_eq!(result.original_error, message);
        assert_eq!(result.error_type, Category::Connector);
    }

    #[test]
    fn test_empty_message_is_unknown() {
        let result = classify("");
        assert_eq!(result.error_type, Category::Unknown);
        assert_eq!(result.description, "An unrecognized error type");
        assert_eq!(result.suggestions.len(), 4);
        assert_eq!(result.original_error, "");
    }

    #[test]
    fn test_keywords_must_be_contiguous() {
        // "rate" and "limit" apart do not form the keyword
        assert_eq!(classify("rate was over the limit").error_type, Category::Unknown);
        assert_eq!(classify("ratelimit").error_type, Category::Unknown);
    }

    #[test]
    fn test_find_match_reports_keyword() {
        let classifier = GptErrorClassifier::new();

        let (rule, keyword) = classifier.find_match("HTTP 429: Too Many Requests").unwrap();
        assert_eq!(rule.category, Category::RateLimit);
        assert_eq!(keyword, "too many requests");

        let (rule, keyword) = classifier.find_match("bad Parameter").unwrap();
        assert_eq!(rule.category, Category::Validation);
        assert_eq!(keyword, "parameter");

        assert!(classifier.find_match("all good").is_none());
    }

    #[test]
    fn test_result_carries_category_text() {
        let result = classify("request flagged");
        assert_eq!(result.description, Category::ContentFilter.description());
        assert_eq!(
            result.suggestions,
            vec![
                "Review your prompts for potentially sensitive content",
                "Adjust phrasing to be more neutral",
                "Use alternate terminology that avoids triggering the filter",
                "Break complex requests into smaller, safer segments",
            ]
        );
    }

    #[test]
    fn test_rule_keywords_are_lowercase() {
        for rule in GptErrorClassifier::new().rules() {
            assert_ne!(rule.category, Category::Unknown);
            for keyword in rule.keywords {
                assert_eq!(*keyword, keyword.to_lowercase());
            }
        }
    }
}
