//! Typed survey question model.
//!
//! Mirrors the JSON the platform stores per question: a `type` tag, the
//! shared authoring fields, and a per-type payload. Every piece of
//! human-visible text is a [`LocalizedString`] so it can be translated in
//! place.

use serde::{
    Deserialize,
    Serialize,
};

use crate::i18n::{
    LocalizedString,
    create_i18n_string,
};

/// One survey question, tagged by the platform's `type` string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SurveyQuestion {
    OpenText(OpenTextQuestion),
    MultipleChoiceSingle(MultipleChoiceQuestion),
    MultipleChoiceMulti(MultipleChoiceQuestion),
    PictureSelection(PictureSelectionQuestion),
    Rating(RatingQuestion),
    Nps(NpsQuestion),
    Ranking(RankingQuestion),
    Matrix(MatrixQuestion),
    Cta(CtaQuestion),
    Consent(ConsentQuestion),
    FileUpload(FileUploadQuestion),
    Date(DateQuestion),
    Cal(CalQuestion),
    ContactInfo(ContactInfoQuestion),
    Address(AddressQuestion),
    IraqLocation(IraqLocationQuestion),
}

impl SurveyQuestion {
    /// Fields shared by every question type.
    #[must_use]
    pub const fn base(&self) -> &QuestionBase {
        match self {
            Self::OpenText(question) => &question.base,
            Self::MultipleChoiceSingle(question) | Self::MultipleChoiceMulti(question) => {
                &question.base
            }
            Self::PictureSelection(question) => &question.base,
            Self::Rating(question) => &question.base,
            Self::Nps(question) => &question.base,
            Self::Ranking(question) => &question.base,
            Self::Matrix(question) => &question.base,
            Self::Cta(question) => &question.base,
            Self::Consent(question) => &question.base,
            Self::FileUpload(question) => &question.base,
            Self::Date(question) => &question.base,
            Self::Cal(question) => &question.base,
            Self::ContactInfo(question) => &question.base,
            Self::Address(question) => &question.base,
            Self::IraqLocation(question) => &question.base,
        }
    }

    /// The `type` string the variant serializes under.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::OpenText(_) => "openText",
            Self::MultipleChoiceSingle(_) => "multipleChoiceSingle",
            Self::MultipleChoiceMulti(_) => "multipleChoiceMulti",
            Self::PictureSelection(_) => "pictureSelection",
            Self::Rating(_) => "rating",
            Self::Nps(_) => "nps",
            Self::Ranking(_) => "ranking",
            Self::Matrix(_) => "matrix",
            Self::Cta(_) => "cta",
            Self::Consent(_) => "consent",
            Self::FileUpload(_) => "fileUpload",
            Self::Date(_) => "date",
            Self::Cal(_) => "cal",
            Self::ContactInfo(_) => "contactInfo",
            Self::Address(_) => "address",
            Self::IraqLocation(_) => "iraqLocation",
        }
    }
}

/// Authoring fields common to all question types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionBase {
    pub id: String,
    pub headline: LocalizedString,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subheader: Option<LocalizedString>,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_label: Option<LocalizedString>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub back_button_label: Option<LocalizedString>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
}

/// Free text answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenTextQuestion {
    #[serde(flatten)]
    pub base: QuestionBase,
    #[serde(default)]
    pub input_type: OpenTextInputType,
    #[serde(default)]
    pub long_answer: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<LocalizedString>,
    #[serde(default)]
    pub char_limit: CharLimit,
}

/// Accepted input kind for an open text answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OpenTextInputType {
    #[default]
    Text,
    Email,
    Url,
    Number,
    Phone,
}

/// Answer length limits for open text questions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CharLimit {
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
}

/// Single or multi select from a fixed list; also the matrix axes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Choice {
    pub id: String,
    pub label: LocalizedString,
}

/// Payload shared by the single and multi choice variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultipleChoiceQuestion {
    #[serde(flatten)]
    pub base: QuestionBase,
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub shuffle_option: ShuffleOption,
}

/// Choice shuffling applied when the question renders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ShuffleOption {
    #[default]
    None,
    All,
    ExceptLast,
}

/// Pick one or more images.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PictureSelectionQuestion {
    #[serde(flatten)]
    pub base: QuestionBase,
    #[serde(default)]
    pub allow_multi: bool,
    pub choices: Vec<PictureChoice>,
}

/// One selectable image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PictureChoice {
    pub id: String,
    pub image_url: String,
}

/// Star, number or smiley scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingQuestion {
    #[serde(flatten)]
    pub base: QuestionBase,
    #[serde(default)]
    pub scale: RatingScale,
    /// Number of steps on the scale.
    #[serde(default = "default_rating_range")]
    pub range: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lower_label: Option<LocalizedString>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upper_label: Option<LocalizedString>,
    #[serde(default)]
    pub is_color_coding_enabled: bool,
}

/// Visual style of a rating scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RatingScale {
    #[default]
    Star,
    Number,
    Smiley,
}

/// Rating steps used when the author does not pick a range.
pub const DEFAULT_RATING_RANGE: u8 = 5;

/// Serde default for [`RatingQuestion::range`].
const fn default_rating_range() -> u8 {
    DEFAULT_RATING_RANGE
}

/// Zero to ten likelihood scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NpsQuestion {
    #[serde(flatten)]
    pub base: QuestionBase,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lower_label: Option<LocalizedString>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upper_label: Option<LocalizedString>,
    #[serde(default)]
    pub is_color_coding_enabled: bool,
}

/// Order a list of options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingQuestion {
    #[serde(flatten)]
    pub base: QuestionBase,
    pub choices: Vec<Choice>,
}

/// Grid of rows rated against columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatrixQuestion {
    #[serde(flatten)]
    pub base: QuestionBase,
    pub rows: Vec<Choice>,
    pub columns: Vec<Choice>,
    #[serde(default)]
    pub shuffle_option: ShuffleOption,
}

/// Call to action slide; the button can open an external URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CtaQuestion {
    #[serde(flatten)]
    pub base: QuestionBase,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<LocalizedString>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_url: Option<String>,
    #[serde(default)]
    pub button_external: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dismiss_button_label: Option<LocalizedString>,
}

/// Checkbox the respondent has to tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsentQuestion {
    #[serde(flatten)]
    pub base: QuestionBase,
    pub label: LocalizedString,
}

/// File upload slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileUploadQuestion {
    #[serde(flatten)]
    pub base: QuestionBase,
    #[serde(default)]
    pub allow_multiple_files: bool,
}

/// Date picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateQuestion {
    #[serde(flatten)]
    pub base: QuestionBase,
    #[serde(default)]
    pub format: DateFormat,
}

/// Display format for date answers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateFormat {
    #[default]
    #[serde(rename = "M-d-y")]
    MonthDayYear,
    #[serde(rename = "d-M-y")]
    DayMonthYear,
    #[serde(rename = "y-M-d")]
    YearMonthDay,
}

/// Embedded Cal.com scheduling slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalQuestion {
    #[serde(flatten)]
    pub base: QuestionBase,
    pub cal_user_name: String,
}

/// Visibility and requirement settings for one input of a composite
/// question.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldSetting {
    pub show: bool,
    pub required: bool,
    pub placeholder: LocalizedString,
}

/// Name, email, phone and company inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfoQuestion {
    #[serde(flatten)]
    pub base: QuestionBase,
    #[serde(default)]
    pub first_name: FieldSetting,
    #[serde(default)]
    pub last_name: FieldSetting,
    #[serde(default)]
    pub email: FieldSetting,
    #[serde(default)]
    pub phone: FieldSetting,
    #[serde(default)]
    pub company: FieldSetting,
}

/// Postal address inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressQuestion {
    #[serde(flatten)]
    pub base: QuestionBase,
    #[serde(default)]
    pub address_line1: FieldSetting,
    #[serde(default)]
    pub address_line2: FieldSetting,
    #[serde(default)]
    pub city: FieldSetting,
    #[serde(default)]
    pub state: FieldSetting,
    #[serde(default)]
    pub zip: FieldSetting,
    #[serde(default)]
    pub country: FieldSetting,
}

/// Cascading province, judiciary and area picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IraqLocationQuestion {
    #[serde(flatten)]
    pub base: QuestionBase,
    #[serde(default)]
    pub province: LocationFieldSettings,
    #[serde(default)]
    pub judiciary: LocationFieldSettings,
    #[serde(default)]
    pub area: LocationFieldSettings,
}

impl IraqLocationQuestion {
    /// Builds a location question with the platform's Arabic field labels.
    #[must_use]
    pub fn with_default_labels(base: QuestionBase, languages: &[String]) -> Self {
        let field = |label: &str, placeholder: &str| LocationFieldSettings {
            label: create_i18n_string(label, languages, None),
            placeholder: create_i18n_string(placeholder, languages, None),
            required: true,
        };

        Self {
            base,
            province: field("المحافظة", "اختر المحافظة"),
            judiciary: field("القضاء", "اختر القضاء"),
            area: field("المنطقة", "اختر المنطقة"),
        }
    }
}

/// Label, placeholder and requirement for one level of the location picker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocationFieldSettings {
    pub label: LocalizedString,
    pub placeholder: LocalizedString,
    pub required: bool,
}
