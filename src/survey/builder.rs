//! Builds typed questions from imported question bank rows.
//!
//! One spreadsheet row arrives as a JSON object whose column headers may be
//! Arabic or English. The builder resolves the cells across both header
//! sets, maps the Arabic type labels, and produces a [`SurveyQuestion`] with
//! generated ids and Arabic navigation buttons.

use serde_json::{
    Map,
    Value,
};
use thiserror::Error;
use uuid::Uuid;

use super::question::{
    AddressQuestion,
    CalQuestion,
    CharLimit,
    Choice,
    ConsentQuestion,
    ContactInfoQuestion,
    CtaQuestion,
    DEFAULT_RATING_RANGE,
    DateFormat,
    DateQuestion,
    FieldSetting,
    FileUploadQuestion,
    MatrixQuestion,
    MultipleChoiceQuestion,
    NpsQuestion,
    OpenTextInputType,
    OpenTextQuestion,
    PictureChoice,
    PictureSelectionQuestion,
    QuestionBase,
    RankingQuestion,
    RatingQuestion,
    RatingScale,
    ShuffleOption,
    SurveyQuestion,
};
use crate::i18n::{
    LocalizedString,
    create_i18n_string,
};

/// Arabic default for the forward navigation button.
const NEXT_BUTTON_LABEL: &str = "التالي";
/// Arabic default for the backward navigation button.
const BACK_BUTTON_LABEL: &str = "رجوع";

/// Errors raised while turning an import row into a question.
#[derive(Debug, Error)]
pub enum QuestionBuildError {
    /// The row's type label matched no supported question type.
    #[error("unsupported question type: {0}")]
    UnsupportedType(String),
}

/// Converts one imported spreadsheet row into a typed question.
///
/// Cells are matched against both the English and the Arabic column
/// headers. Generated labels carry empty translation slots for each code in
/// `languages`, ready for in-editor translation.
///
/// # Errors
///
/// Returns [`QuestionBuildError::UnsupportedType`] when the row's type label
/// is not one the platform knows.
pub fn question_from_import_row(
    row: &Map<String, Value>,
    languages: &[String],
) -> Result<SurveyQuestion, QuestionBuildError> {
    let type_label = get_string(row, &["type", "النوع"]);
    let type_name = question_type_name(&type_label);

    let headline = get_string(row, &["headline", "السؤال", "العنوان"]);
    let subheader = get_string(row, &["subheader", "وصف"]);
    let required = get_bool(row, &["required", "إجباري"]);
    let base = build_base(headline, subheader, required, languages);

    let question = match type_name {
        "openText" => build_open_text(row, base, languages),
        "multipleChoiceSingle" => {
            build_multiple_choice(row, base, languages, SurveyQuestion::MultipleChoiceSingle)
        }
        "multipleChoiceMulti" => {
            build_multiple_choice(row, base, languages, SurveyQuestion::MultipleChoiceMulti)
        }
        "pictureSelection" => build_picture_selection(row, base),
        "rating" => build_rating(row, base, languages),
        "nps" => build_nps(row, base, languages),
        "ranking" => build_ranking(row, base, languages),
        "matrix" => build_matrix(row, base, languages),
        "cta" => build_cta(row, base, languages),
        "consent" => build_consent(row, base, languages),
        "fileUpload" => build_file_upload(row, base),
        "date" => SurveyQuestion::Date(DateQuestion { base, format: DateFormat::MonthDayYear }),
        "cal" => SurveyQuestion::Cal(CalQuestion {
            base,
            cal_user_name: get_string(row, &["calUserName", "اسم المستخدم Cal"]),
        }),
        "contactInfo" => build_contact_info(base, languages),
        "address" => build_address(base, languages),
        unsupported => {
            return Err(QuestionBuildError::UnsupportedType(unsupported.to_string()));
        }
    };
    Ok(question)
}

/// Maps the importer's Arabic type labels to the platform's type names.
/// English labels pass through untouched.
fn question_type_name(label: &str) -> &str {
    match label {
        "نص حر" => "openText",
        "اختيار واحد" => "multipleChoiceSingle",
        "اختيار متعدد" => "multipleChoiceMulti",
        "اختيار الصور" => "pictureSelection",
        "التقييم" => "rating",
        "NPS" => "nps",
        "الترتيب" => "ranking",
        "المصفوفة" => "matrix",
        "بيان" => "cta",
        "الموافقة" => "consent",
        "رفع الملفات" => "fileUpload",
        "التاريخ" => "date",
        "جدولة اجتماع" => "cal",
        "العنوان" => "address",
        "معلومات الاتصال" => "contactInfo",
        other => other,
    }
}

/// Shared fields every imported question starts from.
fn build_base(
    headline: String,
    subheader: String,
    required: bool,
    languages: &[String],
) -> QuestionBase {
    QuestionBase {
        id: generate_id(),
        headline: create_i18n_string(headline, languages, None),
        subheader: optional_label(subheader, languages),
        required,
        button_label: Some(create_i18n_string(NEXT_BUTTON_LABEL, languages, None)),
        back_button_label: Some(create_i18n_string(BACK_BUTTON_LABEL, languages, None)),
        image_url: None,
        video_url: None,
    }
}

/// Open text question with its input kind and placeholder.
fn build_open_text(
    row: &Map<String, Value>,
    base: QuestionBase,
    languages: &[String],
) -> SurveyQuestion {
    let placeholder = get_string(row, &["placeholder", "النص التوضيحي"]);

    SurveyQuestion::OpenText(OpenTextQuestion {
        base,
        input_type: input_type_from_label(&get_string(row, &["inputType", "نوع الإدخال"])),
        long_answer: get_bool(row, &["longAnswer", "إجابة طويلة"]),
        placeholder: optional_label(placeholder, languages),
        char_limit: CharLimit::default(),
    })
}

/// Single or multi select question; `wrap` picks the variant.
fn build_multiple_choice(
    row: &Map<String, Value>,
    base: QuestionBase,
    languages: &[String],
    wrap: fn(MultipleChoiceQuestion) -> SurveyQuestion,
) -> SurveyQuestion {
    let cell = get_string(row, &["choices", "الخيارات"]);

    wrap(MultipleChoiceQuestion {
        base,
        choices: localized_choices(&cell, languages),
        shuffle_option: ShuffleOption::None,
    })
}

/// Image choice question from a comma separated list of URLs.
fn build_picture_selection(row: &Map<String, Value>, base: QuestionBase) -> SurveyQuestion {
    let cell = get_string(row, &["choices", "الخيارات"]);

    SurveyQuestion::PictureSelection(PictureSelectionQuestion {
        base,
        allow_multi: get_bool(row, &["allowMultiple", "اختيار متعدد"]),
        choices: split_cell_list(&cell)
            .map(|url| PictureChoice { id: generate_id(), image_url: url.to_string() })
            .collect(),
    })
}

/// Rating question; blank cells fall back to a five step star scale.
fn build_rating(
    row: &Map<String, Value>,
    base: QuestionBase,
    languages: &[String],
) -> SurveyQuestion {
    let range = get_number(row, &["range", "النطاق"])
        .filter(|range| *range != 0)
        .and_then(|range| u8::try_from(range).ok())
        .unwrap_or(DEFAULT_RATING_RANGE);
    let lower = get_string(row, &["lowerLabel", "التسمية السفلى"]);
    let upper = get_string(row, &["upperLabel", "التسمية العليا"]);

    SurveyQuestion::Rating(RatingQuestion {
        base,
        scale: rating_scale_from_label(&get_string(row, &["scale", "المقياس"])),
        range,
        lower_label: Some(label_or(lower, "ليس جيداً", languages)),
        upper_label: Some(label_or(upper, "جيد جداً", languages)),
        is_color_coding_enabled: false,
    })
}

/// Likelihood question with color coding on.
fn build_nps(row: &Map<String, Value>, base: QuestionBase, languages: &[String]) -> SurveyQuestion {
    let lower = get_string(row, &["lowerLabel", "التسمية السفلى"]);
    let upper = get_string(row, &["upperLabel", "التسمية العليا"]);

    SurveyQuestion::Nps(NpsQuestion {
        base,
        lower_label: Some(label_or(lower, "غير محتمل", languages)),
        upper_label: Some(label_or(upper, "محتمل جداً", languages)),
        is_color_coding_enabled: true,
    })
}

/// Ranking question from a comma separated option list.
fn build_ranking(
    row: &Map<String, Value>,
    base: QuestionBase,
    languages: &[String],
) -> SurveyQuestion {
    let cell = get_string(row, &["choices", "الخيارات"]);

    SurveyQuestion::Ranking(RankingQuestion { base, choices: localized_choices(&cell, languages) })
}

/// Matrix question with localized row and column headers.
fn build_matrix(
    row: &Map<String, Value>,
    base: QuestionBase,
    languages: &[String],
) -> SurveyQuestion {
    let rows_cell = get_string(row, &["rows", "الصفوف"]);
    let columns_cell = get_string(row, &["columns", "الأعمدة"]);

    SurveyQuestion::Matrix(MatrixQuestion {
        base,
        rows: localized_choices(&rows_cell, languages),
        columns: localized_choices(&columns_cell, languages),
        shuffle_option: ShuffleOption::None,
    })
}

/// Call to action slide; the body lives in `html`, not in a subheader.
fn build_cta(row: &Map<String, Value>, base: QuestionBase, languages: &[String]) -> SurveyQuestion {
    let html = get_string(row, &["html", "محتوى HTML"]);
    let button_url = get_string(row, &["buttonUrl", "رابط الزر"]);
    let button_label = get_string(row, &["buttonLabel", "نص الزر"]);
    let dismiss_label = get_string(row, &["dismissButtonLabel"]);

    let mut base = base;
    base.subheader = None;
    base.button_label = Some(label_or(button_label, "اضغط هنا", languages));

    SurveyQuestion::Cta(CtaQuestion {
        base,
        html: optional_label(html, languages),
        button_url: (!button_url.is_empty()).then_some(button_url),
        button_external: true,
        dismiss_button_label: optional_label(dismiss_label, languages),
    })
}

/// Consent question; the checkbox label defaults to Arabic "I agree".
fn build_consent(
    row: &Map<String, Value>,
    base: QuestionBase,
    languages: &[String],
) -> SurveyQuestion {
    let label = get_string(row, &["label", "التسمية"]);

    SurveyQuestion::Consent(ConsentQuestion { base, label: label_or(label, "أوافق", languages) })
}

/// File upload question.
fn build_file_upload(row: &Map<String, Value>, base: QuestionBase) -> SurveyQuestion {
    SurveyQuestion::FileUpload(FileUploadQuestion {
        base,
        allow_multiple_files: get_bool(row, &["allowMultipleFiles", "ملفات متعددة"]),
    })
}

/// Contact question with the importer's fixed field layout.
fn build_contact_info(base: QuestionBase, languages: &[String]) -> SurveyQuestion {
    SurveyQuestion::ContactInfo(ContactInfoQuestion {
        base,
        first_name: field_setting(true, false, "الاسم الأول", languages),
        last_name: field_setting(true, false, "الاسم الأخير", languages),
        email: field_setting(true, true, "البريد الإلكتروني", languages),
        phone: field_setting(false, false, "رقم الهاتف", languages),
        company: field_setting(false, false, "الشركة", languages),
    })
}

/// Address question with the importer's fixed field layout.
fn build_address(base: QuestionBase, languages: &[String]) -> SurveyQuestion {
    SurveyQuestion::Address(AddressQuestion {
        base,
        address_line1: field_setting(true, true, "العنوان 1", languages),
        address_line2: field_setting(true, false, "العنوان 2", languages),
        city: field_setting(true, true, "المدينة", languages),
        state: field_setting(true, false, "المحافظة", languages),
        zip: field_setting(true, false, "الرمز البريدي", languages),
        country: field_setting(true, true, "البلد", languages),
    })
}

/// Maps Arabic or English input type labels; unknown labels fall back to
/// plain text.
fn input_type_from_label(label: &str) -> OpenTextInputType {
    match label {
        "بريد إلكتروني" | "email" => OpenTextInputType::Email,
        "رابط" | "url" => OpenTextInputType::Url,
        "رقم" | "number" => OpenTextInputType::Number,
        "هاتف" | "phone" => OpenTextInputType::Phone,
        _ => OpenTextInputType::Text,
    }
}

/// Maps Arabic or English scale labels; unknown labels fall back to stars.
fn rating_scale_from_label(label: &str) -> RatingScale {
    match label {
        "رقم" | "أرقام" | "number" => RatingScale::Number,
        "وجه" | "وجوه" | "smiley" => RatingScale::Smiley,
        _ => RatingScale::Star,
    }
}

/// Generated id for an imported question or choice.
fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

/// Localizes `text`, or the fallback when the cell was blank.
fn label_or(text: String, fallback: &str, languages: &[String]) -> LocalizedString {
    if text.is_empty() {
        create_i18n_string(fallback, languages, None)
    } else {
        create_i18n_string(text, languages, None)
    }
}

/// Wraps non-blank text in a localized store.
fn optional_label(text: String, languages: &[String]) -> Option<LocalizedString> {
    (!text.is_empty()).then(|| create_i18n_string(text, languages, None))
}

/// Comma separated cell into generated-id choices.
fn localized_choices(cell: &str, languages: &[String]) -> Vec<Choice> {
    split_cell_list(cell)
        .map(|label| Choice {
            id: generate_id(),
            label: create_i18n_string(label, languages, None),
        })
        .collect()
}

/// Splits a comma separated cell into trimmed, non-empty entries.
fn split_cell_list(cell: &str) -> impl Iterator<Item = &str> {
    cell.split(',').map(str::trim).filter(|entry| !entry.is_empty())
}

/// Visibility, requirement and localized placeholder for one contact or
/// address input.
fn field_setting(
    show: bool,
    required: bool,
    placeholder: &str,
    languages: &[String],
) -> FieldSetting {
    FieldSetting { show, required, placeholder: create_i18n_string(placeholder, languages, None) }
}

/// First truthy value among the candidate column headers, rendered as text.
///
/// Mirrors how spreadsheet cells are read: empty strings, zero and false
/// all count as blank and fall through to the next candidate.
fn get_string(row: &Map<String, Value>, keys: &[&str]) -> String {
    keys.iter().filter_map(|key| row.get(*key)).find_map(cell_text).unwrap_or_default()
}

/// Non-blank text form of one cell.
fn cell_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) if !text.is_empty() => Some(text.clone()),
        Value::Number(number) if number.as_i64() != Some(0) => Some(number.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

/// First yes/no cell among the candidates; `نعم`, `yes` and `true` count
/// as yes.
fn get_bool(row: &Map<String, Value>, keys: &[&str]) -> bool {
    for key in keys {
        match row.get(*key) {
            Some(Value::Bool(flag)) => return *flag,
            Some(Value::String(text)) => {
                return text == "true" || text == "نعم" || text == "yes";
            }
            _ => {}
        }
    }
    false
}

/// First numeric cell among the candidates; numeric strings count too.
fn get_number(row: &Map<String, Value>, keys: &[&str]) -> Option<u64> {
    for key in keys {
        match row.get(*key) {
            Some(Value::Number(number)) => {
                if let Some(number) = number.as_u64() {
                    return Some(number);
                }
            }
            Some(Value::String(text)) => {
                if let Ok(number) = text.trim().parse::<u64>() {
                    return Some(number);
                }
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::panic)]
mod tests {
    use googletest::prelude::*;
    use serde_json::json;

    use super::*;

    fn row(value: Value) -> Map<String, Value> {
        let Value::Object(map) = value else {
            panic!("expected an object row");
        };
        map
    }

    #[googletest::test]
    fn test_arabic_open_text_row() {
        let languages = vec!["en".to_string()];
        let imported = row(json!({
            "النوع": "نص حر",
            "السؤال": "ما اسمك؟",
            "إجباري": "نعم",
            "نوع الإدخال": "بريد إلكتروني",
            "النص التوضيحي": "اكتب هنا"
        }));

        let question = question_from_import_row(&imported, &languages).unwrap();

        let SurveyQuestion::OpenText(open_text) = question else {
            panic!("expected an open text question");
        };
        expect_that!(open_text.base.required, eq(true));
        expect_that!(open_text.base.headline.resolve("default"), eq("ما اسمك؟"));
        // Every label gets an empty slot per enabled language.
        expect_that!(open_text.base.headline.resolve("en"), eq(""));
        expect_that!(open_text.input_type, eq(OpenTextInputType::Email));
        expect_that!(
            open_text.placeholder.as_ref().map(|label| label.resolve("default")),
            some(eq("اكتب هنا"))
        );
        expect_that!(
            open_text.base.button_label.as_ref().map(|label| label.resolve("default")),
            some(eq("التالي"))
        );
        expect_that!(
            open_text.base.back_button_label.as_ref().map(|label| label.resolve("default")),
            some(eq("رجوع"))
        );
    }

    #[googletest::test]
    fn test_english_headers_pass_through() {
        let imported = row(json!({
            "type": "openText",
            "headline": "What is your name?",
            "required": true,
            "longAnswer": true
        }));

        let question = question_from_import_row(&imported, &[]).unwrap();

        let SurveyQuestion::OpenText(open_text) = question else {
            panic!("expected an open text question");
        };
        expect_that!(open_text.base.required, eq(true));
        expect_that!(open_text.long_answer, eq(true));
        expect_that!(open_text.input_type, eq(OpenTextInputType::Text));
        expect_that!(open_text.placeholder, none());
    }

    #[googletest::test]
    fn test_choice_cells_split_and_trim() {
        let imported = row(json!({
            "النوع": "اختيار واحد",
            "السؤال": "اختر لوناً",
            "الخيارات": "أحمر , أخضر,, أزرق "
        }));

        let question = question_from_import_row(&imported, &[]).unwrap();

        let SurveyQuestion::MultipleChoiceSingle(choice) = question else {
            panic!("expected a single choice question");
        };
        let labels: Vec<&str> = choice
            .choices
            .iter()
            .map(|entry| entry.label.resolve("default"))
            .collect();
        assert_eq!(labels, ["أحمر", "أخضر", "أزرق"]);
        expect_that!(choice.shuffle_option, eq(ShuffleOption::None));
        // Generated choice ids are unique.
        expect_that!(choice.choices[0].id.as_str(), not(eq(choice.choices[1].id.as_str())));
    }

    #[googletest::test]
    fn test_rating_defaults_to_five_stars() {
        let imported = row(json!({ "النوع": "التقييم", "السؤال": "قيمنا" }));

        let question = question_from_import_row(&imported, &[]).unwrap();

        let SurveyQuestion::Rating(rating) = question else {
            panic!("expected a rating question");
        };
        expect_that!(rating.scale, eq(RatingScale::Star));
        expect_that!(rating.range, eq(DEFAULT_RATING_RANGE));
        expect_that!(
            rating.lower_label.as_ref().map(|label| label.resolve("default")),
            some(eq("ليس جيداً"))
        );
        expect_that!(
            rating.upper_label.as_ref().map(|label| label.resolve("default")),
            some(eq("جيد جداً"))
        );
        expect_that!(rating.is_color_coding_enabled, eq(false));
    }

    #[googletest::test]
    fn test_rating_reads_arabic_scale_and_numeric_string_range() {
        let imported = row(json!({
            "النوع": "التقييم",
            "السؤال": "قيمنا",
            "المقياس": "وجوه",
            "النطاق": "7"
        }));

        let question = question_from_import_row(&imported, &[]).unwrap();

        let SurveyQuestion::Rating(rating) = question else {
            panic!("expected a rating question");
        };
        expect_that!(rating.scale, eq(RatingScale::Smiley));
        expect_that!(rating.range, eq(7));
    }

    #[googletest::test]
    fn test_rating_range_zero_falls_back() {
        let imported = row(json!({ "النوع": "التقييم", "السؤال": "قيمنا", "النطاق": 0 }));

        let question = question_from_import_row(&imported, &[]).unwrap();

        let SurveyQuestion::Rating(rating) = question else {
            panic!("expected a rating question");
        };
        expect_that!(rating.range, eq(DEFAULT_RATING_RANGE));
    }

    #[googletest::test]
    fn test_nps_defaults() {
        let imported = row(json!({ "النوع": "NPS", "السؤال": "هل تنصح بنا؟" }));

        let question = question_from_import_row(&imported, &[]).unwrap();

        let SurveyQuestion::Nps(nps) = question else {
            panic!("expected an NPS question");
        };
        expect_that!(nps.is_color_coding_enabled, eq(true));
        expect_that!(
            nps.lower_label.as_ref().map(|label| label.resolve("default")),
            some(eq("غير محتمل"))
        );
        expect_that!(
            nps.upper_label.as_ref().map(|label| label.resolve("default")),
            some(eq("محتمل جداً"))
        );
    }

    #[googletest::test]
    fn test_cta_row_has_no_subheader_and_defaults_its_button() {
        let imported = row(json!({
            "النوع": "بيان",
            "السؤال": "مرحباً",
            "وصف": "هذا لا يظهر",
            "محتوى HTML": "<p>أهلاً</p>",
            "رابط الزر": "https://example.com"
        }));

        let question = question_from_import_row(&imported, &[]).unwrap();

        let SurveyQuestion::Cta(cta) = question else {
            panic!("expected a CTA question");
        };
        expect_that!(cta.base.subheader, none());
        expect_that!(
            cta.base.button_label.as_ref().map(|label| label.resolve("default")),
            some(eq("اضغط هنا"))
        );
        expect_that!(cta.button_url.as_deref(), some(eq("https://example.com")));
        expect_that!(cta.button_external, eq(true));
        expect_that!(cta.dismiss_button_label, none());
    }

    #[googletest::test]
    fn test_contact_info_field_layout() {
        let imported = row(json!({ "النوع": "معلومات الاتصال", "السؤال": "بياناتك" }));

        let question = question_from_import_row(&imported, &[]).unwrap();

        let SurveyQuestion::ContactInfo(contact) = question else {
            panic!("expected a contact info question");
        };
        expect_that!(contact.email.show, eq(true));
        expect_that!(contact.email.required, eq(true));
        expect_that!(contact.phone.show, eq(false));
        expect_that!(contact.first_name.placeholder.resolve("default"), eq("الاسم الأول"));
    }

    #[googletest::test]
    fn test_matrix_rows_and_columns() {
        let imported = row(json!({
            "النوع": "المصفوفة",
            "السؤال": "قيم الخدمات",
            "الصفوف": "السرعة, الجودة",
            "الأعمدة": "ضعيف, جيد, ممتاز"
        }));

        let question = question_from_import_row(&imported, &[]).unwrap();

        let SurveyQuestion::Matrix(matrix) = question else {
            panic!("expected a matrix question");
        };
        expect_that!(matrix.rows, len(eq(2)));
        expect_that!(matrix.columns, len(eq(3)));
        expect_that!(matrix.columns[2].label.resolve("default"), eq("ممتاز"));
    }

    #[googletest::test]
    fn test_unsupported_type_label_errors() {
        let imported = row(json!({ "النوع": "سؤال سحري", "السؤال": "؟" }));

        let error = question_from_import_row(&imported, &[]).unwrap_err();

        assert_that!(
            error.to_string(),
            eq("unsupported question type: سؤال سحري")
        );
    }

    #[googletest::test]
    fn test_numeric_required_cell_is_not_a_flag() {
        // A number under the required header is skipped, not coerced.
        let imported = row(json!({ "type": "openText", "headline": "hi", "required": 1 }));

        let question = question_from_import_row(&imported, &[]).unwrap();

        expect_that!(question.base().required, eq(false));
    }

    #[googletest::test]
    fn test_languages_flow_into_every_generated_label() {
        let languages = vec!["en".to_string(), "ku".to_string()];
        let imported = row(json!({ "النوع": "الموافقة", "السؤال": "الشروط" }));

        let question = question_from_import_row(&imported, &languages).unwrap();

        let SurveyQuestion::Consent(consent) = question else {
            panic!("expected a consent question");
        };
        expect_that!(consent.label.resolve("default"), eq("أوافق"));
        expect_that!(consent.label.get("en"), some(eq("")));
        expect_that!(consent.label.get("ku"), some(eq("")));
        expect_that!(consent.base.headline.get("ku"), some(eq("")));
    }

    #[googletest::test]
    fn test_date_and_cal_rows() {
        let date = question_from_import_row(
            &row(json!({ "النوع": "التاريخ", "السؤال": "متى؟" })),
            &[],
        )
        .unwrap();
        expect_that!(date.type_name(), eq("date"));

        let cal = question_from_import_row(
            &row(json!({
                "النوع": "جدولة اجتماع",
                "السؤال": "احجز موعداً",
                "اسم المستخدم Cal": "team-iraq"
            })),
            &[],
        )
        .unwrap();
        let SurveyQuestion::Cal(cal) = cal else {
            panic!("expected a cal question");
        };
        expect_that!(cal.cal_user_name.as_str(), eq("team-iraq"));
    }
}
