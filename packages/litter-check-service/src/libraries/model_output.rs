//! Recovering the verdict JSON from free-form model output.
//!
//! Models wrap their answer in markdown fences or add commentary around it,
//! so decoding happens in two stages: slice out the outermost `{...}` from the
//! cleaned text, then parse that slice into a [`Verdict`].

use regex::Regex;
use std::sync::OnceLock;

use crate::models::Verdict;

/// Error type for model output decoding.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("no JSON object found in model response")]
    NoJsonObject,

    #[error("malformed JSON in model response: {0}")]
    Malformed(#[from] serde_json::Error),
}

fn fence_pattern() -> &'static Regex {
    static FENCE: OnceLock<Regex> = OnceLock::new();
    FENCE.get_or_init(|| Regex::new(r"```json|```").expect("fence pattern is valid"))
}

/// Remove every markdown fence marker and trim surrounding whitespace
pub fn strip_code_fences(raw: &str) -> String {
    fence_pattern().replace_all(raw, "").trim().to_string()
}

/// Slice from the first `{` to the last `}`, inclusive
pub fn extract_json_object(text: &str) -> Result<&str, ParseError> {
    let start = text.find('{').ok_or(ParseError::NoJsonObject)?;
    let end = text.rfind('}').ok_or(ParseError::NoJsonObject)?;

    if end < start {
        return Err(ParseError::NoJsonObject);
    }

    Ok(&text[start..=end])
}

/// Full decode: strip fences, extract the object, parse it
pub fn parse_verdict(raw: &str) -> Result<Verdict, ParseError> {
    let cleaned = strip_code_fences(raw);
    let object = extract_json_object(&cleaned)?;
    Ok(serde_json::from_str(object)?)
}
