//! survey-i18n-core
//!
//! Localization core of the Arabic-first survey platform: localized string
//! stores and their reconciliation against enabled languages, platform
//! localization settings, the typed question model with the question bank
//! importer, and the cascading Iraq location picker with its response
//! aggregation.

pub mod config;
pub mod i18n;
pub mod location;
pub mod survey;

pub use i18n::{
    DEFAULT_LANGUAGE_KEY,
    LocalizedString,
    create_i18n_string,
};
