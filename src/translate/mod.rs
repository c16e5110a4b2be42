pub mod interface;
pub mod languages;
pub mod prompt;
pub mod service;

pub use interface::*;
pub use languages::{Language, SUPPORTED_LANGUAGES};
pub use prompt::build_translation_prompt;
pub use service::translate_text;
