//! Reconciliation of localized strings against the enabled language set.
//!
//! Enabling or disabling a survey language must touch every translatable
//! field of the survey: new languages get empty slots the editor can fill,
//! and slots for removed languages are dropped. Reconciliation is the single
//! place that key set is adjusted.

use super::store::{
    DEFAULT_LANGUAGE_KEY,
    LocalizedString,
    TranslationText,
};

/// Invisible characters the in-context translation editor injects into
/// rendered strings (zero width non-joiner and zero width joiner).
const INVISIBLE_CHARACTERS: [char; 2] = ['\u{200C}', '\u{200D}'];

/// The editor encodes its markers in groups of nine invisible characters.
const INVISIBLE_GROUP_LEN: usize = 9;

/// Builds a localized string whose keys are exactly the designated default
/// key plus the given language codes.
///
/// For [`TranslationText::Plain`] input, the text is written under the
/// default key (with invisible editor markers stripped) and every other
/// language gets an empty slot. For [`TranslationText::Localized`] input,
/// existing translations are preserved, missing languages get empty slots,
/// and keys outside the target set are dropped.
///
/// `target_language_code` overrides the reserved `"default"` slot; it is
/// used when seeding translations directly under a concrete language (the
/// import path). With an override in place the literal `"default"` key is
/// kept only if it appears in `languages`.
///
/// # Examples
/// ```
/// use survey_i18n_core::i18n::{
///     LocalizedString,
///     create_i18n_string,
/// };
///
/// let languages = vec!["fr".to_string(), "de".to_string()];
/// let created = create_i18n_string("Hello", &languages, None);
/// let expected: LocalizedString =
///     [("default", "Hello"), ("fr", ""), ("de", "")].into_iter().collect();
/// assert_eq!(created, expected);
///
/// let existing: LocalizedString =
///     [("default", "Hi"), ("fr", "Bonjour"), ("es", "Hola")].into_iter().collect();
/// let reduced = create_i18n_string(existing, &["fr".to_string()], None);
/// let expected: LocalizedString =
///     [("default", "Hi"), ("fr", "Bonjour")].into_iter().collect();
/// assert_eq!(reduced, expected);
/// ```
#[must_use]
pub fn create_i18n_string(
    text: impl Into<TranslationText>,
    languages: &[String],
    target_language_code: Option<&str>,
) -> LocalizedString {
    let default_key = target_language_code.unwrap_or(DEFAULT_LANGUAGE_KEY);

    match text.into() {
        TranslationText::Localized(mut store) => {
            for language in languages {
                if !store.contains_key(language) {
                    store.set(language.as_str(), "");
                }
            }

            // Drop slots for languages no longer enabled.
            store.retain(|key, _| {
                key == default_key || languages.iter().any(|language| language == key)
            });

            store
        }
        TranslationText::Plain(text) => {
            let mut store = LocalizedString::new();
            store.set(default_key, strip_invisible_marks(&text));

            for language in languages {
                if language != default_key {
                    store.set(language.as_str(), "");
                }
            }

            store
        }
    }
}

/// Removes invisible editor markers from text.
///
/// The in-context editor encodes metadata as runs of zero width joiner and
/// non-joiner characters in groups of nine. Stripping removes whole groups
/// from each run; a trailing partial group is kept untouched, since it was
/// not produced by the encoder.
#[must_use]
pub fn strip_invisible_marks(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut run: Vec<char> = Vec::new();

    for ch in text.chars() {
        if INVISIBLE_CHARACTERS.contains(&ch) {
            run.push(ch);
        } else {
            flush_invisible_run(&mut result, &run);
            run.clear();
            result.push(ch);
        }
    }
    flush_invisible_run(&mut result, &run);

    result
}

/// Appends the part of an invisible-character run that survives stripping.
fn flush_invisible_run(result: &mut String, run: &[char]) {
    let stripped = (run.len() / INVISIBLE_GROUP_LEN) * INVISIBLE_GROUP_LEN;
    for ch in run.iter().skip(stripped) {
        result.push(*ch);
    }
}
