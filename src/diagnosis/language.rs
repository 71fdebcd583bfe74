use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Languages the UI and the diagnosis text can be shown in
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
    Pt,
}

impl Language {
    /// All languages, in the order the selector lists them
    pub const ALL: [Language; 3] = [Language::En, Language::Es, Language::Pt];

    /// ISO 639-1 code
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
            Language::Pt => "pt",
        }
    }

    /// Name of the language written in that language
    pub fn native_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Es => "Español",
            Language::Pt => "Português",
        }
    }

    /// English name, used inside the (English) instruction
    pub fn english_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Es => "Spanish",
            Language::Pt => "Portuguese",
        }
    }

    /// How the language is named inside the instruction text, e.g. `Spanish ("es")`
    pub fn prompt_token(self) -> String {
        format!("{} (\"{}\")", self.english_name(), self.code())
    }
}

// pick_list shows whatever Display produces
impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.native_name())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "es" => Ok(Language::Es),
            "pt" => Ok(Language::Pt),
            other => Err(format!("unsupported language: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_english() {
        assert_eq!(Language::default(), Language::En);
    }

    #[test]
    fn test_parse_codes() {
        assert_eq!("es".parse::<Language>(), Ok(Language::Es));
        assert_eq!(" PT ".parse::<Language>(), Ok(Language::Pt));
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn test_prompt_token() {
        assert_eq!(Language::Es.prompt_token(), "Spanish (\"es\")");
        assert_eq!(Language::Pt.to_string(), "Português");
    }
}
