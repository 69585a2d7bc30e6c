//! Export configuration captured once per export call.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// How dates are rendered in exported Markdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateFormat {
    /// `YYYY-MM-DD`
    Iso,
    /// `DD/MM/YYYY`
    #[default]
    French,
    /// `M/D/YYYY`
    Us,
}

impl DateFormat {
    /// Returns the canonical name used on the command line and in config.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Iso => "iso",
            Self::French => "french",
            Self::Us => "us",
        }
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown date format name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDateFormatError {
    value: String,
}

impl fmt::Display for ParseDateFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid date format '{}': expected one of iso, french, us",
            self.value
        )
    }
}

impl std::error::Error for ParseDateFormatError {}

impl FromStr for DateFormat {
    type Err = ParseDateFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "iso" => Ok(Self::Iso),
            "french" | "fr" => Ok(Self::French),
            "us" | "en" => Ok(Self::Us),
            _ => Err(ParseDateFormatError {
                value: s.to_string(),
            }),
        }
    }
}

/// Options controlling a single export.
///
/// `separate_files` only affects whole-forest exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    pub include_metadata: bool,
    pub include_table_of_contents: bool,
    pub date_format: DateFormat,
    pub separate_files: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            include_metadata: true,
            include_table_of_contents: true,
            date_format: DateFormat::French,
            separate_files: false,
        }
    }
}
