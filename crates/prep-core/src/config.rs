//! Configuration structures for the preprocessing pipeline.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

use crate::error::PrepError;

/// How fenced code blocks are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodeBlockMode {
    /// Read the block contents (identifiers, operators, literals).
    #[default]
    Full,
    /// Replace the block with a one-sentence summary.
    Brief,
}

impl FromStr for CodeBlockMode {
    type Err = PrepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "full" => Ok(Self::Full),
            "brief" => Ok(Self::Brief),
            _ => Err(PrepError::config(format!("unknown code block mode: {s}"))),
        }
    }
}

/// How much of a URL is spoken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UrlDetail {
    /// Scheme, host, port, path, query, and fragment.
    #[default]
    Full,
    /// Scheme and host only.
    DomainOnly,
    /// First host segment plus the spoken TLD.
    Minimal,
}

impl FromStr for UrlDetail {
    type Err = PrepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "full" => Ok(Self::Full),
            "domain_only" | "domain-only" => Ok(Self::DomainOnly),
            "minimal" => Ok(Self::Minimal),
            _ => Err(PrepError::config(format!("unknown URL detail level: {s}"))),
        }
    }
}

/// How IPv4 octets are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IpReadMode {
    /// Each octet as a whole cardinal (192 -> "сто девяносто два").
    #[default]
    Numbers,
    /// Each octet digit by digit (192 -> "один девять два").
    Digits,
}

impl FromStr for IpReadMode {
    type Err = PrepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "numbers" => Ok(Self::Numbers),
            "digits" => Ok(Self::Digits),
            _ => Err(PrepError::config(format!("unknown IP read mode: {s}"))),
        }
    }
}

/// Pipeline configuration.
///
/// User-supplied dictionary extensions are merged into the built-in tables
/// once at construction and then frozen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Fenced code block handling.
    #[serde(default)]
    pub code_block_mode: CodeBlockMode,

    /// URL verbosity.
    #[serde(default)]
    pub url_detail_level: UrlDetail,

    /// IPv4 octet reading.
    #[serde(default)]
    pub ip_read_mode: IpReadMode,

    /// Whether multi-character operators are spoken.
    #[serde(default = "default_read_operators")]
    pub read_operators: bool,

    /// Extra Latin-to-Cyrillic entries for the English dictionary.
    #[serde(default)]
    pub custom_english_terms: BTreeMap<String, String>,

    /// Extra entries for the pronounce-as-word abbreviation dictionary.
    #[serde(default)]
    pub custom_abbreviations: BTreeMap<String, String>,

    /// Phrase inserted in place of diagram blocks.
    #[serde(default = "default_diagram_sentinel")]
    pub diagram_sentinel: String,

    /// Fence language tags treated as diagrams.
    #[serde(default = "default_diagram_languages")]
    pub diagram_languages: Vec<String>,

    /// Collect fallback transliterations into the diagnostics.
    #[serde(default)]
    pub collect_unknown_words: bool,
}

fn default_read_operators() -> bool {
    true
}

fn default_diagram_sentinel() -> String {
    "Тут диаграмма".to_string()
}

fn default_diagram_languages() -> Vec<String> {
    vec!["mermaid".to_string()]
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            code_block_mode: CodeBlockMode::default(),
            url_detail_level: UrlDetail::default(),
            ip_read_mode: IpReadMode::default(),
            read_operators: default_read_operators(),
            custom_english_terms: BTreeMap::new(),
            custom_abbreviations: BTreeMap::new(),
            diagram_sentinel: default_diagram_sentinel(),
            diagram_languages: default_diagram_languages(),
            collect_unknown_words: false,
        }
    }
}
