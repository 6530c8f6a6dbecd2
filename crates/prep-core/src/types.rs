//! Core data types for the preprocessing pipeline.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Token classification for the scanner battery.
///
/// Kinds are listed highest priority first; when two kinds could claim the
/// same span, the scanner pass with the smaller [`priority`] value runs
/// earlier and wins.
///
/// [`priority`]: TokenKind::priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// Triple-backtick block with optional language tag.
    FencedCode,
    /// Fenced block whose language tag names a diagram language.
    DiagramBlock,
    /// Text between single backticks.
    InlineCode,
    /// scheme://host with optional port, path, query, fragment.
    Url,
    /// local@domain.
    Email,
    /// Four dot-separated octets 0..=255.
    Ipv4,
    /// Leading `/`, `~/`, `./`, `../`, or drive letter plus separator.
    FilePath,
    /// Optional `v`, digits separated by dots.
    Version,
    /// Digits (optional fraction) followed by a known unit suffix.
    SizeUnit,
    /// Digits (optional fraction) followed by `%`.
    Percentage,
    /// ISO `YYYY-MM-DD` or European `DD.MM.YYYY`.
    Date,
    /// `HH:MM` with valid hours and minutes.
    Time,
    /// digits-hyphen-digits bounded by word boundaries.
    Range,
    /// Run of uppercase Latin letters, optionally mixed with digits.
    Abbreviation,
    /// Latin identifier with an internal case boundary.
    CamelIdent,
    /// Latin identifier containing `_`.
    SnakeIdent,
    /// Latin identifier with `-` between letter runs.
    KebabIdent,
    /// digits, `.` or `,`, digits.
    Float,
    /// Run of digits.
    Integer,
    /// Operator or symbol string from the symbol table.
    Operator,
    /// Run of Latin letters.
    EnglishWord,
    /// Run of Cyrillic letters (left untouched).
    RussianWord,
    /// Whitespace and residual punctuation.
    Other,
}

impl TokenKind {
    /// Scanner priority, 1 is highest.
    pub const fn priority(self) -> u8 {
        match self {
            TokenKind::FencedCode => 1,
            TokenKind::DiagramBlock => 2,
            TokenKind::InlineCode => 3,
            TokenKind::Url => 4,
            TokenKind::Email => 5,
            TokenKind::Ipv4 => 6,
            TokenKind::FilePath => 7,
            TokenKind::Version => 8,
            TokenKind::SizeUnit => 9,
            TokenKind::Percentage => 10,
            TokenKind::Date => 11,
            TokenKind::Time => 12,
            TokenKind::Range => 13,
            TokenKind::Abbreviation => 14,
            TokenKind::CamelIdent => 15,
            TokenKind::SnakeIdent => 16,
            TokenKind::KebabIdent => 17,
            TokenKind::Float => 18,
            TokenKind::Integer => 19,
            TokenKind::Operator => 20,
            TokenKind::EnglishWord => 21,
            TokenKind::RussianWord => 22,
            TokenKind::Other => 23,
        }
    }
}

/// Per-call diagnostics channel.
///
/// Recoverable failures never abort processing; they are counted here. The
/// unknown-word map is only populated when the pipeline is configured with
/// `collect_unknown_words`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Diagnostics {
    /// Substitutions dropped because they touched an earlier rewrite.
    pub overlaps_dropped: usize,
    /// Number tokens that failed to parse and were re-read another way.
    pub malformed_numbers: usize,
    /// Size-unit matches whose suffix was not in the unit table.
    pub unknown_units: usize,
    /// User dictionary entries rejected at configure time.
    pub rejected_dictionary_entries: usize,
    /// Words rewritten by the letter-level fallback, with their spoken form.
    pub unknown_words: BTreeMap<String, String>,
}

impl Diagnostics {
    /// Record a word that went through the letter-level fallback.
    pub fn record_unknown_word(&mut self, original: &str, spoken: &str) {
        self.unknown_words
            .entry(original.to_lowercase())
            .or_insert_with(|| spoken.to_string());
    }

    /// Human-readable report about fallback transliterations.
    pub fn unknown_word_report(&self) -> Vec<String> {
        if self.unknown_words.is_empty() {
            return Vec::new();
        }
        let mut lines = vec!["Следующие слова были транслитерированы автоматически:".to_string()];
        for (original, spoken) in &self.unknown_words {
            lines.push(format!("  {original} → {spoken}"));
        }
        lines.push("Добавьте их в словарь терминов для точного произношения.".to_string());
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_order_is_strict() {
        let kinds = [
            TokenKind::FencedCode,
            TokenKind::DiagramBlock,
            TokenKind::InlineCode,
            TokenKind::Url,
            TokenKind::Email,
            TokenKind::Ipv4,
            TokenKind::FilePath,
            TokenKind::Version,
            TokenKind::SizeUnit,
            TokenKind::Percentage,
            TokenKind::Date,
            TokenKind::Time,
            TokenKind::Range,
            TokenKind::Abbreviation,
            TokenKind::CamelIdent,
            TokenKind::SnakeIdent,
            TokenKind::KebabIdent,
            TokenKind::Float,
            TokenKind::Integer,
            TokenKind::Operator,
            TokenKind::EnglishWord,
            TokenKind::RussianWord,
            TokenKind::Other,
        ];
        for pair in kinds.windows(2) {
            assert!(pair[0].priority() < pair[1].priority());
        }
    }

    #[test]
    fn test_unknown_word_report() {
        let mut diag = Diagnostics::default();
        assert!(diag.unknown_word_report().is_empty());

        diag.record_unknown_word("Frobnicate", "фробникате");
        diag.record_unknown_word("frobnicate", "другое");
        assert_eq!(diag.unknown_words.len(), 1);
        assert_eq!(diag.unknown_words["frobnicate"], "фробникате");

        let report = diag.unknown_word_report();
        assert_eq!(report.len(), 3);
        assert!(report[1].contains("frobnicate"));
    }
}
