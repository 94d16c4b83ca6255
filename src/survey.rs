//! Survey question model and the question bank import builder.

mod builder;
mod question;

pub use builder::{
    QuestionBuildError,
    question_from_import_row,
};
pub use question::{
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
    IraqLocationQuestion,
    LocationFieldSettings,
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
