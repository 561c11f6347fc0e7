use std::fs;

use crate::error::{CliError, Result, ResultExt};
use crate::input;
use crate::ui;

pub fn execute(params: Option<String>, file: Option<String>, verbose: bool) -> Result<()> {
    let text = match (params, file) {
        (Some(params), _) => params,
        (None, Some(path)) => {
            if verbose {
                ui::info_message(&format!("Reading params from {}", path));
            }
            fs::read_to_string(&path)
                .with_context(|| format!("Failed to read params file {}", path))?
        }
        (None, None) => {
            if verbose {
                ui::info_message("Reading params from stdin");
            }
            input::read_stdin().with_context(|| "Failed to read params from stdin")?
        }
    };

    if text.trim().is_empty() {
        return Err(CliError::Other(
            "No params supplied. Use --params, --file or pipe a JSON object on stdin".to_string(),
        ));
    }

    let envelope = debugger::run_json(&text)?;

    if verbose {
        if envelope.is_success() {
            ui::info_message("Params accepted");
        } else {
            ui::warning_message("Params carry no usable error_message");
        }
    }

    println!("{}", serde_json::to_string_pretty(&envelope)?);
    Ok(())
}
