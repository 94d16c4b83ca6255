//! Multi-language survey text.
//!
//! Survey content stores every human-visible text as a map from language
//! code to translation, with a reserved key for the default language. This
//! module owns that store type and the three operations the platform builds
//! on: reconciling a store against the enabled language set, total lookup
//! that never fails mid-interview, and tree-wide augmentation when a new
//! language is enabled for an existing survey.

/// Tree-wide label augmentation
mod augment;
/// Survey language rows and language-code tables
mod language;
/// Reconciliation against the enabled language set
mod reconcile;
/// The localized string store and lookup
mod store;

pub use augment::add_multi_language_labels;
pub use language::{
    RTL_LANGUAGE_CODES,
    SurveyLanguage,
    TextDirection,
    enabled_languages,
    extract_language_codes,
    is_known_language_code,
    is_rtl_language,
    normalize_language_code,
    resolve_language_code,
    text_direction,
};
pub use reconcile::{
    create_i18n_string,
    strip_invisible_marks,
};
pub use store::{
    DEFAULT_LANGUAGE_KEY,
    LocalizedString,
    TranslationText,
    is_label_valid_for_all_languages,
    localized_value,
};
