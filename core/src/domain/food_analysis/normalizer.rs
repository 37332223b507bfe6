//! Turns free-form model output into a [`FoodReport`].
//!
//! Models are asked for bare JSON but regularly wrap it in markdown fences or
//! surround it with prose. The normalizer strips what it can and reports
//! [`NormalizedReport::Unparsed`] when the remainder is not a non-empty JSON
//! object. Missing fields are filled with placeholders and extra keys are kept.

use serde_json::Value;
use tracing::warn;

use crate::domain::food_analysis::entities::FoodReport;

const FENCE_MARKERS: [&str; 3] = ["```json", "```JSON", "```"];

#[derive(Debug, Clone, PartialEq)]
pub enum NormalizedReport {
    Parsed(FoodReport),
    Unparsed,
}

impl NormalizedReport {
    /// Returns the parsed report, or the canonical placeholder when parsing failed.
    pub fn into_report_or_default(self) -> FoodReport {
        match self {
            NormalizedReport::Parsed(report) => report,
            NormalizedReport::Unparsed => FoodReport::unrecognized(),
        }
    }

    pub fn is_parsed(&self) -> bool {
        matches!(self, NormalizedReport::Parsed(_))
    }
}

pub fn extract(raw_text: &str) -> NormalizedReport {
    let cleaned = strip_code_fences(raw_text);

    let parsed = serde_json::from_str::<Value>(&cleaned).or_else(|err| {
        match outermost_object(&cleaned) {
            Some(candidate) if candidate.len() < cleaned.len() => {
                serde_json::from_str::<Value>(candidate)
            }
            _ => Err(err),
        }
    });

    let object = match parsed {
        Ok(Value::Object(object)) if !object.is_empty() => object,
        Ok(other) => {
            warn!(
                json_type = json_type(&other),
                raw_output = %raw_text,
                "Model output is not a non-empty JSON object"
            );
            return NormalizedReport::Unparsed;
        }
        Err(e) => {
            warn!(error = %e, raw_output = %raw_text, "Could not parse model output as JSON");
            return NormalizedReport::Unparsed;
        }
    };

    match serde_json::from_value::<FoodReport>(Value::Object(object)) {
        Ok(report) => NormalizedReport::Parsed(report),
        Err(e) => {
            warn!(error = %e, raw_output = %raw_text, "Model output has mistyped report fields");
            NormalizedReport::Unparsed
        }
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "empty object",
    }
}

fn strip_code_fences(text: &str) -> String {
    FENCE_MARKERS
        .iter()
        .fold(text.to_string(), |acc, marker| acc.replace(marker, ""))
        .trim()
        .to_string()
}

fn outermost_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (start < end).then(|| &text[start..=end])
}
