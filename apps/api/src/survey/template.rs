//! `{key}` placeholder handling for prompt templates.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::survey::collector::ResponseSet;

/// Rendered in place of a key the response set does not carry.
pub const MISSING_VALUE: &str = "Not provided";

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([a-z][a-z0-9_]*)\}").expect("placeholder regex is valid"));

/// Any brace token without whitespace, quotes or nested braces. JSON snippets
/// in prompts never match; a misspelt key always does.
static KEY_LIKE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"\{([^{}\s"]+)\}"#).expect("key-like regex is valid"));

static KEY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z][a-z0-9_]*$").expect("key regex is valid"));

/// Whether `id` can appear as a `{key}` placeholder.
pub fn is_valid_key(id: &str) -> bool {
    KEY.is_match(id)
}

/// Returns every distinct placeholder key in order of first appearance.
pub fn placeholders(template: &str) -> Vec<String> {
    let mut keys: Vec<String> = Vec::new();
    for caps in PLACEHOLDER.captures_iter(template) {
        let key = &caps[1];
        if !keys.iter().any(|k| k == key) {
            keys.push(key.to_string());
        }
    }
    keys
}

/// Brace tokens that look like keys but can never be substituted,
/// such as `{Visa_status}` or `{visa-status}`.
pub fn malformed_placeholders(template: &str) -> Vec<String> {
    KEY_LIKE
        .captures_iter(template)
        .map(|caps| caps[1].to_string())
        .filter(|token| !is_valid_key(token))
        .collect()
}

/// Substitutes each `{key}` with its answer. Never fails.
pub fn render(template: &str, responses: &ResponseSet) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| {
            match responses.get(&caps[1]) {
                Some(value) if !value.trim().is_empty() => value.to_string(),
                _ => MISSING_VALUE.to_string(),
            }
        })
        .into_owned()
}
