use colored::Colorize;
use excuses_lib::{ExcuseOutcome, FetchFailure};
use serde::Serialize;
use serde_json::Value;

const EXTRACTION_FAILED: &str = "Unable to extract the developer excuse.";

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// One finished line and where it goes.
#[derive(Debug)]
pub struct Rendered {
    pub stream: Stream,
    pub line: String,
}

#[derive(Serialize)]
struct ExcuseRow<'a> {
    excuse: Option<&'a str>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum FailureRow<'a> {
    Error { error: &'a str },
    Exception { exception: &'a Value },
}

pub fn render_outcome(outcome: &ExcuseOutcome, format: &OutputFormat) -> Rendered {
    let line = match format {
        OutputFormat::Text => match outcome {
            ExcuseOutcome::Excuse(text) => {
                format!("{}{}", "Excuse: ".bold().green(), text.yellow())
            }
            ExcuseOutcome::ExtractionFailed => EXTRACTION_FAILED.red().to_string(),
        },
        OutputFormat::Json => to_json(&ExcuseRow {
            excuse: outcome.excuse(),
        }),
    };
    Rendered {
        stream: Stream::Stdout,
        line,
    }
}

pub fn render_failure(failure: &FetchFailure, format: &OutputFormat) -> Rendered {
    let line = match format {
        OutputFormat::Text => {
            format!("{}{}", failure.prefix().red(), failure.detail().bold())
        }
        OutputFormat::Json => match failure {
            FetchFailure::Network { message } => to_json(&FailureRow::Error { error: message }),
            FetchFailure::Opaque { value } => to_json(&FailureRow::Exception { exception: value }),
        },
    };
    Rendered {
        stream: Stream::Stderr,
        line,
    }
}

pub fn emit(rendered: &Rendered) {
    match rendered.stream {
        Stream::Stdout => println!("{}", rendered.line),
        Stream::Stderr => eprintln!("{}", rendered.line),
    }
}

fn to_json<T: Serialize>(data: &T) -> String {
    match serde_json::to_string(data) {
        Ok(json) => json,
        Err(e) => format!("Failed to serialize to JSON: {}", e),
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
