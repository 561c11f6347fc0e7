//! GPT Debugger - classifies error messages reported by GPT tool calls
//!
//! Each message is matched against a fixed, ordered keyword table and mapped to
//! a category with a canned description and remediation steps.

pub mod category;
pub mod classifier;
pub mod envelope;
pub mod error;

pub use category::{Category, UNRECOGNIZED_DESCRIPTION};
pub use classifier::{ClassificationResult, ErrorAnalyzer, GptErrorClassifier, RULES, Rule, classify};
pub use envelope::{ERROR_MESSAGE_KEY, ResultEnvelope, run, run_json, run_with};
pub use error::{DebuggerError, MISSING_INPUT_MESSAGE, Result};
