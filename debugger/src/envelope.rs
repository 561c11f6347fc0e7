//! Request entry point: validates params and wraps the classification

use crate::classifier::{ClassificationResult, ErrorAnalyzer, GptErrorClassifier};
use crate::error::{DebuggerError, MISSING_INPUT_MESSAGE, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Key looked up in the params mapping
pub const ERROR_MESSAGE_KEY: &str = "error_message";

/// Outer `{status, ...}` shape returned to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ResultEnvelope {
    Success { analysis: ClassificationResult },
    Failed { error: String },
}

impl ResultEnvelope {
    pub fn missing_input() -> Self {
        Self::Failed {
            error: MISSING_INPUT_MESSAGE.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Convert into the analysis, or [`DebuggerError::MissingInput`]
    pub fn into_result(self) -> Result<ClassificationResult> {
        match self {
            Self::Success { analysis } => Ok(analysis),
            Self::Failed { .. } => Err(DebuggerError::MissingInput),
        }
    }
}

/// Run an analyzer against a params mapping.
///
/// Absent, empty and non-string `error_message` values are all treated as missing.
/// Params that are not a JSON object carry no fields at all.
pub fn run_with(analyzer: &dyn ErrorAnalyzer, params: &Value) -> ResultEnvelope {
    match params.get(ERROR_MESSAGE_KEY).and_then(Value::as_str) {
        Some(message) if !message.is_empty() => ResultEnvelope::Success {
            analysis: analyzer.classify(message),
        },
        _ => ResultEnvelope::missing_input(),
    }
}

/// Run the default classifier against a params mapping
pub fn run(params: &Value) -> ResultEnvelope {
    run_with(&GptErrorClassifier::new(), params)
}

/// Parse a JSON params document and run it
pub fn run_json(params: &str) -> Result<ResultEnvelope> {
    let value: Value = serde_json::from_str(params)?;
    Ok(run(&value))
}
