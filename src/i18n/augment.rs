//! Bulk label augmentation across a survey definition tree.
//!
//! Enabling a language for a whole survey must reach every translatable
//! label buried in the definition (questions, choices, matrix rows, card
//! texts, …). Rather than enumerating field paths, the walk treats any JSON
//! object with a string `"default"` entry as a localized label and adds
//! empty slots for the requested languages. Unlike reconciliation this is
//! additive only: nothing is ever removed.

use serde_json::{
    Map,
    Value,
};

use super::store::DEFAULT_LANGUAGE_KEY;

/// Returns a copy of the survey definition tree where every localized label
/// has an entry for each of `language_codes`.
///
/// A sub-object is a localized label when it holds a string under
/// `"default"`. Existing translations are preserved, already-present codes
/// are not overwritten, and keys for other languages stay untouched. The
/// input is never mutated; the augmented tree is returned as a new value.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use survey_i18n_core::i18n::add_multi_language_labels;
///
/// let survey = json!({
///     "questions": [
///         { "headline": { "default": "How satisfied are you?" } }
///     ]
/// });
///
/// let augmented = add_multi_language_labels(&survey, &["ar-IQ".to_string()]);
///
/// assert_eq!(
///     augmented,
///     json!({
///         "questions": [
///             { "headline": { "default": "How satisfied are you?", "ar-IQ": "" } }
///         ]
///     })
/// );
/// ```
#[must_use]
pub fn add_multi_language_labels(value: &Value, language_codes: &[String]) -> Value {
    match value {
        Value::Array(items) => Value::Array(
            items.iter().map(|item| add_multi_language_labels(item, language_codes)).collect(),
        ),
        Value::Object(entries) => augment_object(entries, language_codes),
        other => other.clone(),
    }
}

/// Copies one object, recursing into nested values and adding empty language
/// slots when the object is a localized label.
fn augment_object(entries: &Map<String, Value>, language_codes: &[String]) -> Value {
    let is_label = entries.get(DEFAULT_LANGUAGE_KEY).is_some_and(Value::is_string);

    let mut result = Map::new();
    for (key, entry) in entries {
        if is_label && key == DEFAULT_LANGUAGE_KEY {
            result.insert(key.clone(), entry.clone());
        } else {
            result.insert(key.clone(), add_multi_language_labels(entry, language_codes));
        }
    }

    if is_label {
        for code in language_codes {
            if !result.contains_key(code) {
                result.insert(code.clone(), Value::String(String::new()));
            }
        }
    }

    Value::Object(result)
}
