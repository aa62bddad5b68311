use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One side of the Burushaski/English pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Burushaski,
    English,
}

impl Language {
    /// The other language of the pair
    pub fn opposite(self) -> Self {
        match self {
            Language::Burushaski => Language::English,
            Language::English => Language::Burushaski,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Burushaski => "burushaski",
            Language::English => "english",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source language as requested by the caller
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceLanguage {
    #[default]
    Auto,
    Burushaski,
    English,
}

impl SourceLanguage {
    /// Declared language, or `None` when it must be detected
    pub fn declared(self) -> Option<Language> {
        match self {
            SourceLanguage::Auto => None,
            SourceLanguage::Burushaski => Some(Language::Burushaski),
            SourceLanguage::English => Some(Language::English),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLanguageError(pub String);

impl fmt::Display for ParseLanguageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unsupported language '{}', expected auto, burushaski or english",
            self.0
        )
    }
}

impl std::error::Error for ParseLanguageError {}

impl FromStr for SourceLanguage {
    type Err = ParseLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(SourceLanguage::Auto),
            "burushaski" => Ok(SourceLanguage::Burushaski),
            "english" => Ok(SourceLanguage::English),
            _ => Err(ParseLanguageError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_toggles() {
        assert_eq!(Language::Burushaski.opposite(), Language::English);
        assert_eq!(Language::English.opposite(), Language::Burushaski);
    }

    #[test]
    fn test_parse_source_language() {
        assert_eq!("auto".parse(), Ok(SourceLanguage::Auto));
        assert_eq!("Burushaski".parse(), Ok(SourceLanguage::Burushaski));
        assert_eq!(" english ".parse(), Ok(SourceLanguage::English));
        assert!("urdu".parse::<SourceLanguage>().is_err());
    }

    #[test]
    fn test_declared() {
        assert_eq!(SourceLanguage::Auto.declared(), None);
        assert_eq!(
            SourceLanguage::English.declared(),
            Some(Language::English)
        );
    }
}
