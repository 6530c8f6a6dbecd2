//! Abbreviations to speakable text.
//!
//! Two-level lookup: a case-insensitive set of acronyms pronounced as words,
//! then the 26-letter Latin speech table. Digits embedded in an abbreviation
//! are spoken one by one.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::numbers::spell_digits;

/// The Latin alphabet in Russian.
const LETTER_MAP: &[(&str, &str)] = &[
    ("a", "эй"),
    ("b", "би"),
    ("c", "си"),
    ("d", "ди"),
    ("e", "и"),
    ("f", "эф"),
    ("g", "джи"),
    ("h", "эйч"),
    ("i", "ай"),
    ("j", "джей"),
    ("k", "кей"),
    ("l", "эл"),
    ("m", "эм"),
    ("n", "эн"),
    ("o", "о"),
    ("p", "пи"),
    ("q", "кью"),
    ("r", "ар"),
    ("s", "эс"),
    ("t", "ти"),
    ("u", "ю"),
    ("v", "ви"),
    ("w", "дабл ю"),
    ("x", "экс"),
    ("y", "уай"),
    ("z", "зед"),
];

/// Acronyms pronounced as words rather than spelled out.
const AS_WORD: &[(&str, &str)] = &[
    ("json", "джейсон"),
    ("yaml", "ямл"),
    ("toml", "томл"),
    ("rest", "рест"),
    ("ajax", "эйджакс"),
    ("crud", "крад"),
    ("cors", "корс"),
    ("oauth", "о ауз"),
    ("gif", "гиф"),
    ("jpeg", "джейпег"),
    ("ram", "рам"),
    ("rom", "ром"),
    ("lan", "лан"),
    ("wan", "ван"),
    ("spa", "спа"),
    ("dom", "дом"),
    ("gui", "гуи"),
    ("imap", "ай мап"),
    ("pop", "поп"),
    ("devops", "девопс"),
];

/// Mixed-case abbreviations with a fixed reading.
const SPECIAL_CASES: &[(&str, &str)] = &[
    ("ios", "ай оу эс"),
    ("macos", "мак оу эс"),
    ("graphql", "граф кью эл"),
    ("iot", "ай о ти"),
];

static LETTERS: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| LETTER_MAP.iter().copied().collect());

/// Normalizes abbreviations to speakable text.
#[derive(Debug, Default)]
pub struct AbbreviationNormalizer {
    as_word: HashMap<String, String>,
}

impl AbbreviationNormalizer {
    pub fn new() -> Self {
        Self::with_custom_words(std::iter::empty())
    }

    /// Build with user-supplied pronounce-as-word entries merged over the
    /// built-in set.
    pub fn with_custom_words(custom: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut as_word: HashMap<String, String> = AS_WORD
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        for (k, v) in custom {
            as_word.insert(k.to_lowercase(), v);
        }
        Self { as_word }
    }

    /// Convert an abbreviation to its spoken form.
    pub fn normalize(&self, abbrev: &str) -> String {
        if abbrev.is_empty() {
            return String::new();
        }

        let lower = abbrev.to_lowercase();

        for (key, spoken) in SPECIAL_CASES {
            if lower == *key {
                return (*spoken).to_string();
            }
        }
        if let Some(spoken) = self.as_word.get(&lower) {
            return spoken.clone();
        }

        self.spell_out(&lower)
    }

    /// Speak a single Latin letter.
    pub fn letter(&self, letter: char) -> Option<&'static str> {
        let lower = letter.to_ascii_lowercase().to_string();
        LETTERS.get(lower.as_str()).copied()
    }

    /// Letter-by-letter spelling; embedded digit runs are spoken digit by
    /// digit (H264 -> эйч два шесть четыре).
    fn spell_out(&self, lower: &str) -> String {
        let mut parts: Vec<String> = Vec::new();
        for c in lower.chars() {
            if let Some(d) = c.to_digit(10) {
                parts.push(spell_digits(&d.to_string()));
            } else if let Some(spoken) = LETTERS.get(c.to_string().as_str()) {
                parts.push((*spoken).to_string());
            } else {
                parts.push(c.to_string());
            }
        }
        parts.join(" ")
    }
}
