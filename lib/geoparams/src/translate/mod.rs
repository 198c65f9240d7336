//! Translation API requests.

mod language;
mod languages;

pub use language::Language;
pub use languages::{LanguagesRequest, TranslationModel};
