//! Localized string store.
//!
//! Every piece of translatable survey content (question headline, choice
//! label, placeholder, button text) is stored as a map from language code to
//! translated text with one reserved `"default"` slot. The accessor never
//! fails: missing stores, malformed stores, and missing keys all resolve to
//! the empty string so rendering can degrade instead of erroring.

use std::collections::BTreeMap;

use serde::{
    Deserialize,
    Serialize,
};

/// Reserved key for the survey's default language slot.
///
/// Stores never look the default language up dynamically; the slot is always
/// written under this literal key.
pub const DEFAULT_LANGUAGE_KEY: &str = "default";

/// A mapping from language code to translated text.
///
/// Serializes as the plain JSON object the platform stores
/// (e.g. `{"default": "Hello", "ar-IQ": "مرحبا"}`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalizedString {
    /// Language code → translated text. `"default"` is the reserved slot.
    values: BTreeMap<String, String>,
}

impl LocalizedString {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self { values: BTreeMap::new() }
    }

    /// Creates a store seeded with text under the `"default"` key.
    #[must_use]
    pub fn from_default(text: impl Into<String>) -> Self {
        let mut values = BTreeMap::new();
        values.insert(DEFAULT_LANGUAGE_KEY.to_string(), text.into());
        Self { values }
    }

    /// Returns the translation stored under `language_code`, if any.
    #[must_use]
    pub fn get(&self, language_code: &str) -> Option<&str> {
        self.values.get(language_code).map(String::as_str)
    }

    /// Writes a single translation.
    pub fn set(&mut self, language_code: impl Into<String>, text: impl Into<String>) {
        self.values.insert(language_code.into(), text.into());
    }

    /// Removes a translation, returning the previous text if present.
    pub fn remove(&mut self, language_code: &str) -> Option<String> {
        self.values.remove(language_code)
    }

    /// Returns true if a translation exists under `language_code`.
    #[must_use]
    pub fn contains_key(&self, language_code: &str) -> bool {
        self.values.contains_key(language_code)
    }

    /// Keeps only the entries for which `keep` returns true.
    pub fn retain(&mut self, mut keep: impl FnMut(&str, &str) -> bool) {
        self.values.retain(|code, text| keep(code, text.as_str()));
    }

    /// Iterates over stored language codes in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Iterates over (language code, text) pairs in sorted key order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(code, text)| (code.as_str(), text.as_str()))
    }

    /// Number of stored translations (the `"default"` slot included).
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no translation is stored at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Structural check: a store is well formed only if the reserved
    /// `"default"` key exists.
    ///
    /// Data that reaches us through untyped channels (stored survey JSON,
    /// imports) can lack the slot; the accessor treats such stores as empty
    /// rather than failing, and strict callers can check this upfront.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.values.contains_key(DEFAULT_LANGUAGE_KEY)
    }

    /// Resolves the translation for `language_code`.
    ///
    /// Returns the empty string when the store is malformed (no `"default"`
    /// key) or the requested code is absent. Never panics.
    #[must_use]
    pub fn resolve(&self, language_code: &str) -> &str {
        if !self.is_well_formed() {
            return "";
        }
        self.values.get(language_code).map_or("", String::as_str)
    }
}

impl From<BTreeMap<String, String>> for LocalizedString {
    fn from(values: BTreeMap<String, String>) -> Self {
        Self { values }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LocalizedString {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self { values: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }
}

/// Resolves a translation from an optional store.
///
/// The store side of survey content is frequently optional (subheaders,
/// placeholders); `None`, a malformed store and a missing key all resolve to
/// the empty string.
///
/// # Examples
/// ```
/// use survey_i18n_core::i18n::{
///     LocalizedString,
///     localized_value,
/// };
///
/// let store: LocalizedString =
///     [("default", "Hi"), ("fr", "Bonjour")].into_iter().collect();
///
/// assert_eq!(localized_value(Some(&store), "fr"), "Bonjour");
/// assert_eq!(localized_value(Some(&store), "de"), "");
/// assert_eq!(localized_value(None, "fr"), "");
/// ```
#[must_use]
pub fn localized_value<'a>(value: Option<&'a LocalizedString>, language_code: &str) -> &'a str {
    value.map_or("", |store| store.resolve(language_code))
}

/// Returns true if the label has non-blank text for every given language.
///
/// Used by the editor before publishing a multi-language survey: whitespace
/// only translations count as missing.
#[must_use]
pub fn is_label_valid_for_all_languages(label: &LocalizedString, languages: &[String]) -> bool {
    languages.iter().all(|code| label.get(code).is_some_and(|text| !text.trim().is_empty()))
}

/// Translatable text as authored: either raw text that still needs a store
/// built around it, or an already localized store.
///
/// The platform's JSON uses both shapes interchangeably, so this
/// deserializes untagged; callers resolve the variant explicitly instead of
/// probing for a `"default"` key at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TranslationText {
    /// Raw text that has not been localized yet.
    Plain(String),
    /// An existing language-code → text store.
    Localized(LocalizedString),
}

impl From<&str> for TranslationText {
    fn from(text: &str) -> Self {
        Self::Plain(text.to_string())
    }
}

impl From<String> for TranslationText {
    fn from(text: String) -> Self {
        Self::Plain(text)
    }
}

impl From<LocalizedString> for TranslationText {
    fn from(store: LocalizedString) -> Self {
        Self::Localized(store)
    }
}
