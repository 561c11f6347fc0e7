use std::result;
use thiserror::Error;

/// Literal reported when a request carries no usable `error_message`.
pub const MISSING_INPUT_MESSAGE: &str = "Missing error_message parameter";

#[derive(Error, Debug)]
pub enum DebuggerError {
    #[error("Missing error_message parameter")]
    MissingInput,

    #[error("Invalid params JSON: {0}")]
    InvalidParams(#[from] serde_json::Error),

    #[error("Unknown error category: {0}")]
    UnknownCategory(String),

    #[error("{0}: {1}")]
    WithContext(String, Box<DebuggerError>),
}

impl DebuggerError {
    /// Add context to an error
    pub fn with_context<C: Into<String>>(self, context: C) -> Self {
        DebuggerError::WithContext(context.into(), Box::new(self))
    }

    /// Get a user-friendly message for command line display
    pub fn user_message(&self) -> String {
        match self {
            DebuggerError::MissingInput => {
                "No error message supplied. Pass the message as an argument or pipe it on stdin"
                    .to_string()
            }
            DebuggerError::InvalidParams(e) => format!("Params must be a JSON object: {}", e),
            DebuggerError::UnknownCategory(name) => format!(
                "'{}' is not a known category. Expected one of: connector, rate_limit, content_filter, validation, unknown",
                name
            ),
            DebuggerError::WithContext(ctx, err) => format!("{}: {}", ctx, err.user_message()),
        }
    }
}

pub type Result<T> = result::Result<T, DebuggerError>;
