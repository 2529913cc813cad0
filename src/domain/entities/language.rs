use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// The two resume languages the editor supports. Any other code is
/// rejected at the parse boundary, both client- and server-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Pt,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Pt];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Pt => "pt",
        }
    }

    /// On-disk file name for this language's resume.
    pub fn file_name(&self) -> String {
        format!("{}.json", self.as_str())
    }
}

impl FromStr for Language {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Language::En),
            "pt" => Ok(Language::Pt),
            other => Err(AppError::InvalidLanguage(other.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_supported_codes() {
        assert_eq!("en".parse::<Language>().unwrap(), Language::En);
        assert_eq!("pt".parse::<Language>().unwrap(), Language::Pt);
    }

    #[test]
    fn rejects_unknown_codes() {
        for code in ["fr", "EN", "", "../secrets"] {
            assert!(code.parse::<Language>().is_err(), "accepted {code:?}");
        }
    }

    #[test]
    fn file_names_match_data_layout() {
        assert_eq!(Language::En.file_name(), "en.json");
        assert_eq!(Language::Pt.file_name(), "pt.json");
    }
}
