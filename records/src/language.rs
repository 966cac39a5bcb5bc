//! The closed set of interface languages.

#[cfg(test)]
#[path = "language_test.rs"]
mod language_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when a language code is outside the supported set.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unsupported language code: {0:?}")]
pub struct UnknownLanguage(pub String);

/// A supported interface language.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Zh,
    Es,
    Fr,
    De,
    Ja,
    Ko,
}

impl Language {
    /// Every supported language, in selector order.
    pub const ALL: [Language; 7] = [
        Language::En,
        Language::Zh,
        Language::Es,
        Language::Fr,
        Language::De,
        Language::Ja,
        Language::Ko,
    ];

    /// Two-letter code used in storage and language-file names.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Zh => "zh",
            Self::Es => "es",
            Self::Fr => "fr",
            Self::De => "de",
            Self::Ja => "ja",
            Self::Ko => "ko",
        }
    }

    /// Parse a code, returning `None` for anything unsupported.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.code() == code.trim())
    }

    /// Name of the language written in that language.
    #[must_use]
    pub fn native_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Zh => "中文",
            Self::Es => "Español",
            Self::Fr => "Français",
            Self::De => "Deutsch",
            Self::Ja => "日本語",
            Self::Ko => "한국어",
        }
    }

    /// Label for the "current language" display, e.g. `中文 (Chinese)`.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Zh => "中文 (Chinese)",
            Self::Es => "Español (Spanish)",
            Self::Fr => "Français (French)",
            Self::De => "Deutsch (German)",
            Self::Ja => "日本語 (Japanese)",
            Self::Ko => "한국어 (Korean)",
        }
    }

    /// Display label for a raw code; unknown codes show as English.
    #[must_use]
    pub fn display_name_for_code(code: &str) -> &'static str {
        Self::from_code(code).unwrap_or_default().display_name()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| UnknownLanguage(s.to_owned()))
    }
}
