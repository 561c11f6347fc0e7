use debugger::{
    ClassificationResult, ERROR_MESSAGE_KEY, ErrorAnalyzer, GptErrorClassifier, ResultEnvelope,
};
use serde_json::{Map, Value};

use crate::error::{Result, ResultExt};
use crate::input;
use crate::ui;

pub fn execute(message: Option<String>, json: bool, verbose: bool) -> Result<()> {
    let message = match message {
        Some(message) => message,
        None => {
            if verbose {
                ui::info_message("Reading error message from stdin");
            }
            input::read_stdin().with_context(|| "Failed to read error message from stdin")?
        }
    };

    let mut params = Map::new();
    params.insert(ERROR_MESSAGE_KEY.to_string(), Value::String(message));

    let classifier = GptErrorClassifier::new();
    let analysis = debugger::run_with(&classifier, &Value::Object(params)).into_result()?;

    if verbose {
        report_match(&classifier, &analysis.original_error);
    }

    if json {
        let envelope = ResultEnvelope::Success { analysis };
        println!("{}", serde_json::to_string_pretty(&envelope)?);
    } else {
        print_report(&analysis);
    }

    Ok(())
}

fn report_match(classifier: &GptErrorClassifier, message: &str) {
    match classifier.find_match(message) {
        Some((rule, keyword)) => ui::info_message(&format!(
            "Matched keyword '{}' for category '{}'",
            keyword, rule.category
        )),
        None => ui::warning_message("No keyword matched, falling back to 'unknown'"),
    }
}

fn print_report(analysis: &ClassificationResult) {
    ui::section_header("GPT Error Analysis");
    ui::field("Error", &analysis.original_error);
    ui::field("Type", analysis.error_type.as_str());
    ui::field("Description", &analysis.description);

    ui::section_header("Suggestions");
    for (i, suggestion) in analysis.suggestions.iter().enumerate() {
        ui::step_message(i + 1, suggestion);
    }
}
