//! Survey language rows and language-code helpers.
//!
//! A survey aggregate carries one [`SurveyLanguage`] row per language it was
//! translated into. The row marked `default` is the one whose texts live
//! under the reserved default key of every [`super::LocalizedString`], so
//! helpers here translate between row lists and store keys. The module also
//! hosts the known-code table used by configuration validation and the
//! right-to-left support the Arabic-first UI needs.

use std::collections::HashSet;
use std::sync::LazyLock;

use serde::{
    Deserialize,
    Serialize,
};

use super::store::DEFAULT_LANGUAGE_KEY;

/// One language row of a survey.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyLanguage {
    /// Language code of the row (`"ar-IQ"`, `"en"`, ...).
    pub code: String,
    /// Marks the row whose texts live under the reserved default key.
    #[serde(default)]
    pub default: bool,
    /// Disabled rows keep their translations but take no new responses.
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

/// Serde default for [`SurveyLanguage::enabled`].
const fn enabled_by_default() -> bool {
    true
}

impl SurveyLanguage {
    /// Creates an enabled, non-default row for `code`.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into(), default: false, enabled: true }
    }
}

/// Store keys for a list of survey language rows.
///
/// The default row maps to the reserved default key instead of its own code,
/// matching how its texts are stored.
#[must_use]
pub fn extract_language_codes(survey_languages: &[SurveyLanguage]) -> Vec<String> {
    survey_languages
        .iter()
        .map(|language| {
            if language.default {
                DEFAULT_LANGUAGE_KEY.to_string()
            } else {
                language.code.clone()
            }
        })
        .collect()
}

/// Rows currently accepting responses.
#[must_use]
pub fn enabled_languages(survey_languages: &[SurveyLanguage]) -> Vec<&SurveyLanguage> {
    survey_languages.iter().filter(|language| language.enabled).collect()
}

/// Maps a requested response language to the store key to read.
///
/// Unknown, empty or absent codes resolve to the reserved default key, as
/// does the code of the default row itself.
#[must_use]
pub fn resolve_language_code<'a>(
    survey_languages: &'a [SurveyLanguage],
    language_code: Option<&str>,
) -> &'a str {
    let Some(requested) = language_code.filter(|code| !code.is_empty()) else {
        return DEFAULT_LANGUAGE_KEY;
    };
    match survey_languages.iter().find(|language| language.code == requested) {
        Some(language) if language.default => DEFAULT_LANGUAGE_KEY,
        Some(language) => &language.code,
        None => DEFAULT_LANGUAGE_KEY,
    }
}

/// RFC 5646 language codes
/// Based on <http://tools.ietf.org/html/rfc5646>
static KNOWN_LANGUAGE_CODES: LazyLock<HashSet<String>> = LazyLock::new(|| {
    [
        "af",
        "af-ZA",
        "ar",
        "ar-AE",
        "ar-BH",
        "ar-DZ",
        "ar-EG",
        "ar-IQ",
        "ar-JO",
        "ar-KW",
        "ar-LB",
        "ar-LY",
        "ar-MA",
        "ar-OM",
        "ar-QA",
        "ar-SA",
        "ar-SY",
        "ar-TN",
        "ar-YE",
        "az",
        "az-AZ",
        "be",
        "be-BY",
        "bg",
        "bg-BG",
        "bs-BA",
        "ca",
        "ca-ES",
        "cs",
        "cs-CZ",
        "cy",
        "cy-GB",
        "da",
        "da-DK",
        "de",
        "de-AT",
        "de-CH",
        "de-DE",
        "de-LI",
        "de-LU",
        "dv",
        "dv-MV",
        "el",
        "el-GR",
        "en",
        "en-AU",
        "en-BZ",
        "en-CA",
        "en-GB",
        "en-IE",
        "en-JM",
        "en-NZ",
        "en-PH",
        "en-TT",
        "en-US",
        "en-ZA",
        "en-ZW",
        "eo",
        "es",
        "es-AR",
        "es-BO",
        "es-CL",
        "es-CO",
        "es-CR",
        "es-DO",
        "es-EC",
        "es-ES",
        "es-GT",
        "es-HN",
        "es-MX",
        "es-NI",
        "es-PA",
        "es-PE",
        "es-PR",
        "es-PY",
        "es-SV",
        "es-UY",
        "es-VE",
        "et",
        "et-EE",
        "eu",
        "eu-ES",
        "fa",
        "fa-IR",
        "fi",
        "fi-FI",
        "fo",
        "fo-FO",
        "fr",
        "fr-BE",
        "fr-CA",
        "fr-CH",
        "fr-FR",
        "fr-LU",
        "fr-MC",
        "gl",
        "gl-ES",
        "gu",
        "gu-IN",
        "he",
        "he-IL",
        "hi",
        "hi-IN",
        "hr",
        "hr-BA",
        "hr-HR",
        "hu",
        "hu-HU",
        "hy",
        "hy-AM",
        "id",
        "id-ID",
        "is",
        "is-IS",
        "it",
        "it-CH",
        "it-IT",
        "ja",
        "ja-JP",
        "ka",
        "ka-GE",
        "kk",
        "kk-KZ",
        "kn",
        "kn-IN",
        "ko",
        "ko-KR",
        "kok",
        "kok-IN",
        "ky",
        "ky-KG",
        "lt",
        "lt-LT",
        "lv",
        "lv-LV",
        "mi",
        "mi-NZ",
        "mk",
        "mk-MK",
        "mn",
        "mn-MN",
        "mr",
        "mr-IN",
        "ms",
        "ms-BN",
        "ms-MY",
        "mt",
        "mt-MT",
        "nb",
        "nb-NO",
        "nl",
        "nl-BE",
        "nl-NL",
        "nn-NO",
        "ns",
        "ns-ZA",
        "pa",
        "pa-IN",
        "pl",
        "pl-PL",
        "ps",
        "ps-AR",
        "pt",
        "pt-BR",
        "pt-PT",
        "qu",
        "qu-BO",
        "qu-EC",
        "qu-PE",
        "ro",
        "ro-RO",
        "ru",
        "ru-RU",
        "sa",
        "sa-IN",
        "se",
        "se-FI",
        "se-NO",
        "se-SE",
        "sk",
        "sk-SK",
        "sl",
        "sl-SI",
        "sq",
        "sq-AL",
        "sr-BA",
        "sr-SP",
        "sv",
        "sv-FI",
        "sv-SE",
        "sw",
        "sw-KE",
        "syr",
        "syr-SY",
        "ta",
        "ta-IN",
        "te",
        "te-IN",
        "th",
        "th-TH",
        "tl",
        "tl-PH",
        "tn",
        "tn-ZA",
        "tr",
        "tr-TR",
        "tt",
        "tt-RU",
        "ts",
        "uk",
        "uk-UA",
        "ur",
        "ur-PK",
        "uz",
        "uz-UZ",
        "vi",
        "vi-VN",
        "xh",
        "xh-ZA",
        "zh",
        "zh-CN",
        "zh-HK",
        "zh-MO",
        "zh-SG",
        "zh-TW",
        "zu",
        "zu-ZA",
    ]
    .iter()
    .flat_map(|code| {
        let code = (*code).to_string();
        let normalized = normalize_language_code(&code);
        vec![code, normalized]
    })
    .collect()
});

/// Normalize language code (lowercase and replace - with _)
#[must_use]
pub fn normalize_language_code(code: &str) -> String {
    code.to_lowercase().replace('-', "_")
}

/// Whether `code` is on the RFC 5646 list, in either `-` or `_` spelling.
#[must_use]
pub fn is_known_language_code(code: &str) -> bool {
    KNOWN_LANGUAGE_CODES.contains(code)
        || KNOWN_LANGUAGE_CODES.contains(&normalize_language_code(code))
}

/// Languages rendered right-to-left. The platform ships Arabic-first, so the
/// Iraq locale leads the list.
pub const RTL_LANGUAGE_CODES: [&str; 5] = ["ar-IQ", "ar", "he", "fa", "ur"];

/// Script direction of a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDirection {
    /// Right-to-left scripts (Arabic, Hebrew, ...).
    Rtl,
    /// Everything else.
    Ltr,
}

impl TextDirection {
    /// Value for an HTML `dir` attribute.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rtl => "rtl",
            Self::Ltr => "ltr",
        }
    }
}

/// Whether `code` names a right-to-left language.
///
/// Region variants count through their primary subtag, so `ar-SA` is RTL
/// even though only `ar-IQ` is spelled out.
#[must_use]
pub fn is_rtl_language(code: &str) -> bool {
    let primary = code.split(['-', '_']).next().unwrap_or(code);
    RTL_LANGUAGE_CODES.contains(&code) || RTL_LANGUAGE_CODES.contains(&primary)
}

/// Script direction for `code`.
#[must_use]
pub fn text_direction(code: &str) -> TextDirection {
    if is_rtl_language(code) { TextDirection::Rtl } else { TextDirection::Ltr }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    fn rows() -> Vec<SurveyLanguage> {
        vec![
            SurveyLanguage { code: "ar-IQ".to_string(), default: true, enabled: true },
            SurveyLanguage::new("en"),
            SurveyLanguage { code: "fr".to_string(), default: false, enabled: false },
        ]
    }

    #[googletest::test]
    fn test_extract_language_codes_maps_default_row_to_reserved_key() {
        let codes = extract_language_codes(&rows());

        assert_eq!(codes, ["default", "en", "fr"]);
    }

    #[googletest::test]
    fn test_extract_language_codes_on_empty_list() {
        expect_that!(extract_language_codes(&[]), is_empty());
    }

    #[googletest::test]
    fn test_enabled_languages_filters_disabled_rows() {
        let rows = rows();

        let enabled = enabled_languages(&rows);

        expect_that!(enabled, len(eq(2)));
        let codes: Vec<&str> = enabled.iter().map(|language| language.code.as_str()).collect();
        assert_eq!(codes, ["ar-IQ", "en"]);
    }

    #[rstest]
    #[case::absent(None, "default")]
    #[case::empty(Some(""), "default")]
    #[case::unknown(Some("de"), "default")]
    #[case::enabled_match(Some("en"), "en")]
    #[case::default_row_code(Some("ar-IQ"), "default")]
    fn test_resolve_language_code(#[case] requested: Option<&str>, #[case] expected: &str) {
        let rows = rows();

        assert_eq!(resolve_language_code(&rows, requested), expected);
    }

    #[test]
    fn test_resolve_language_code_without_rows() {
        assert_eq!(resolve_language_code(&[], Some("en")), "default");
    }

    #[rstest]
    #[case::iraq_locale("ar-IQ", true)]
    #[case::plain_arabic("ar", true)]
    #[case::region_variant_by_primary_subtag("ar-SA", true)]
    #[case::underscore_spelling("ar_SA", true)]
    #[case::hebrew("he", true)]
    #[case::persian("fa", true)]
    #[case::urdu("ur", true)]
    #[case::english("en", false)]
    #[case::english_region("en-US", false)]
    fn test_is_rtl_language(#[case] code: &str, #[case] expected: bool) {
        assert_eq!(is_rtl_language(code), expected);
    }

    #[googletest::test]
    fn test_text_direction_as_str() {
        expect_that!(text_direction("ar-IQ").as_str(), eq("rtl"));
        expect_that!(text_direction("en").as_str(), eq("ltr"));
    }

    #[rstest]
    #[case::hyphen_spelling("ar-IQ", true)]
    #[case::underscore_spelling("ar_IQ", true)]
    #[case::lowercase("ar_iq", true)]
    #[case::bare_primary("en", true)]
    #[case::unassigned("xx-XX", false)]
    #[case::empty("", false)]
    fn test_is_known_language_code(#[case] code: &str, #[case] expected: bool) {
        assert_eq!(is_known_language_code(code), expected);
    }

    #[googletest::test]
    fn test_survey_language_deserializes_with_defaults() {
        let row: SurveyLanguage = serde_json::from_str(r#"{ "code": "en" }"#).unwrap();

        assert_eq!(row, SurveyLanguage::new("en"));
        expect_that!(row.enabled, eq(true));
        expect_that!(row.default, eq(false));
    }

    #[googletest::test]
    fn test_survey_language_serializes_camel_case() {
        let row = SurveyLanguage { code: "ar-IQ".to_string(), default: true, enabled: true };

        let json = serde_json::to_value(&row).unwrap();

        assert_eq!(json, serde_json::json!({ "code": "ar-IQ", "default": true, "enabled": true }));
    }
}
