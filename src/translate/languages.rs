use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
}

/// Languages advertised to the frontend
pub const SUPPORTED_LANGUAGES: [Language; 12] = [
    Language {
        code: "en",
        name: "English",
    },
    Language {
        code: "es",
        name: "Spanish",
    },
    Language {
        code: "fr",
        name: "French",
    },
    Language {
        code: "de",
        name: "German",
    },
    Language {
        code: "it",
        name: "Italian",
    },
    Language {
        code: "pt",
        name: "Portuguese",
    },
    Language {
        code: "ru",
        name: "Russian",
    },
    Language {
        code: "ja",
        name: "Japanese",
    },
    Language {
        code: "ko",
        name: "Korean",
    },
    Language {
        code: "zh",
        name: "Chinese (Mandarin)",
    },
    Language {
        code: "ar",
        name: "Arabic",
    },
    Language {
        code: "hi",
        name: "Hindi",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_supported_language_codes() {
        let codes: Vec<&str> = SUPPORTED_LANGUAGES.iter().map(|l| l.code).collect();
        assert_eq!(
            codes,
            vec!["en", "es", "fr", "de", "it", "pt", "ru", "ja", "ko", "zh", "ar", "hi"]
        );
    }

    #[test]
    fn test_codes_are_unique() {
        let codes: HashSet<&str> = SUPPORTED_LANGUAGES.iter().map(|l| l.code).collect();
        assert_eq!(codes.len(), SUPPORTED_LANGUAGES.len());
    }

    #[test]
    fn test_language_serialization() {
        let json = serde_json::to_value(SUPPORTED_LANGUAGES[9]).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "code": "zh", "name": "Chinese (Mandarin)" })
        );
    }
}
