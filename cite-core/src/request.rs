//! Format request model
//!
//! A [`FormatRequest`] is built once per invocation from the resolved
//! command-line flags and consumed by the output resolver and the formatter.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Default output language tag (RFC 5646)
pub const DEFAULT_LANGUAGE: &str = "en-US";

/// Requested structure of the formatted output
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum SourceType {
    /// Plain string output
    String,
    /// HTML fragment output
    Html,
    /// JSON document output
    #[default]
    Json,
    /// Any other value, passed to the formatter untouched
    Other(String),
}

impl SourceType {
    /// Flag spelling of the type
    pub fn as_str(&self) -> &str {
        match self {
            SourceType::String => "string",
            SourceType::Html => "html",
            SourceType::Json => "json",
            SourceType::Other(value) => value,
        }
    }
}

impl From<&str> for SourceType {
    fn from(value: &str) -> Self {
        match value {
            "string" => SourceType::String,
            "html" => SourceType::Html,
            "json" => SourceType::Json,
            other => SourceType::Other(other.to_string()),
        }
    }
}

impl FromStr for SourceType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output scheme the formatter renders into
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum OutputStyle {
    /// Citation Style Language JSON
    #[default]
    Csl,
    /// BibTeX
    Bibtex,
    /// A named citation style, e.g. `citation-apa` holds `apa`
    Citation(String),
    /// Anything else; validation is left to the formatter
    Other(String),
}

impl OutputStyle {
    const CITATION_PREFIX: &'static str = "citation-";

    /// Flag spelling of the style
    pub fn to_flag(&self) -> String {
        match self {
            OutputStyle::Csl => "csl".to_string(),
            OutputStyle::Bibtex => "bibtex".to_string(),
            OutputStyle::Citation(template) => format!("{}{template}", Self::CITATION_PREFIX),
            OutputStyle::Other(value) => value.clone(),
        }
    }

    pub fn is_bibtex(&self) -> bool {
        matches!(self, OutputStyle::Bibtex)
    }
}

impl From<&str> for OutputStyle {
    fn from(value: &str) -> Self {
        match value {
            "csl" => OutputStyle::Csl,
            "bibtex" => OutputStyle::Bibtex,
            other => match other.strip_prefix(Self::CITATION_PREFIX) {
                Some(template) => OutputStyle::Citation(template.to_string()),
                None => OutputStyle::Other(other.to_string()),
            },
        }
    }
}

impl FromStr for OutputStyle {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for OutputStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_flag())
    }
}

/// Everything the resolver and the formatter need to know about one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatRequest {
    /// Requested output structure
    pub source_type: SourceType,
    /// Output scheme
    pub style: OutputStyle,
    /// RFC 5646 language tag
    pub language: String,
    /// Force plain-text treatment regardless of `source_type`
    pub wrap_as_plain_text: bool,
}

impl Default for FormatRequest {
    fn default() -> Self {
        Self {
            source_type: SourceType::default(),
            style: OutputStyle::default(),
            language: DEFAULT_LANGUAGE.to_string(),
            wrap_as_plain_text: false,
        }
    }
}

impl FormatRequest {
    /// Create a request with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output structure type
    pub fn source_type(mut self, source_type: impl Into<SourceType>) -> Self {
        self.source_type = source_type.into();
        self
    }

    /// Set the output style
    pub fn style(mut self, style: impl Into<OutputStyle>) -> Self {
        self.style = style.into();
        self
    }

    /// Set the output language
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Force plain-text output
    pub fn plain_text(mut self, wrap_as_plain_text: bool) -> Self {
        self.wrap_as_plain_text = wrap_as_plain_text;
        self
    }

    /// The structural subset handed to the formatter
    pub fn options(&self) -> FormatOptions {
        FormatOptions {
            format: FormatOptions::FORMAT.to_string(),
            source_type: self.source_type.as_str().to_string(),
            style: self.style.to_flag(),
            lang: self.language.clone(),
        }
    }
}

/// Options object passed to the formatter, keyed the way formatters expect
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatOptions {
    /// Always `"string"`
    pub format: String,
    /// Output structure type
    #[serde(rename = "type")]
    pub source_type: String,
    /// Output style
    pub style: String,
    /// Output language
    pub lang: String,
}

impl FormatOptions {
    const FORMAT: &'static str = "string";
}
