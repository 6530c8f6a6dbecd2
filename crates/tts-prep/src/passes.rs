//! Stages 2-3: the priority-ordered scanner battery.
//!
//! Each pass owns the regex for one token kind and rewrites its matches via
//! the type-specific normalizer. Passes run in taxonomy priority order; a
//! span claimed by an earlier pass is protected by the tracked buffer, so
//! later passes cannot re-edit it.

use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::{Captures, Match, Regex};

use prep_core::{Diagnostics, IpReadMode, PipelineConfig, TokenKind, UrlDetail};
use text_normalizer::english::MULTI_WORD_PHRASES;
use text_normalizer::numbers::{spell_digits, NumberNormalizer};
use text_normalizer::symbols::{
    ARROW_SYMBOLS, BRACKETS, GREEK_LETTERS, MATH_SYMBOLS, MULTI_CHAR_OPERATORS,
    SINGLE_CHAR_SYMBOLS,
};
use text_normalizer::{
    AbbreviationNormalizer, EnglishNormalizer, IdentifierSplitter, UrlPathNormalizer,
};
use tracked_text::TrackedText;

/// One scanner pass of the battery.
pub trait TokenPass: Send + Sync {
    /// The token kind this pass claims.
    fn kind(&self) -> TokenKind;

    /// Scan the buffer and rewrite this pass's matches.
    fn apply(&self, text: &mut TrackedText, diag: &mut Diagnostics);
}

/// Build the battery for a configuration, in execution order.
///
/// The order follows the taxonomy priorities; dates scan before ranges, so
/// an ISO date keeps its dashes instead of being read as «от … до …». The
/// compound language names (C++, C#) are the one early step: their symbols
/// must survive the number and operator passes.
pub fn battery(
    config: &PipelineConfig,
    urls: Arc<UrlPathNormalizer>,
    abbreviations: Arc<AbbreviationNormalizer>,
    idents: Arc<IdentifierSplitter>,
    english: Arc<EnglishNormalizer>,
) -> Vec<Box<dyn TokenPass>> {
    vec![
        Box::new(UrlPass {
            urls: urls.clone(),
            detail: config.url_detail_level,
        }),
        Box::new(EmailPass { urls: urls.clone() }),
        Box::new(Ipv4Pass {
            urls: urls.clone(),
            mode: config.ip_read_mode,
        }),
        Box::new(FilePathPass { urls }),
        Box::new(VersionPass {
            numbers: NumberNormalizer::new(),
        }),
        Box::new(SizeUnitPass {
            numbers: NumberNormalizer::new(),
        }),
        Box::new(PercentagePass {
            numbers: NumberNormalizer::new(),
        }),
        Box::new(DatePass {
            numbers: NumberNormalizer::new(),
        }),
        Box::new(TimePass {
            numbers: NumberNormalizer::new(),
        }),
        Box::new(RangePass {
            numbers: NumberNormalizer::new(),
        }),
        Box::new(AbbreviationPass {
            abbreviations: abbreviations.clone(),
        }),
        Box::new(CamelPass {
            idents: idents.clone(),
        }),
        Box::new(SnakePass {
            idents: idents.clone(),
        }),
        Box::new(KebabPass { idents }),
        Box::new(SpecialTermsPass),
        Box::new(FloatPass {
            numbers: NumberNormalizer::new(),
        }),
        Box::new(IntegerPass {
            numbers: NumberNormalizer::new(),
        }),
        Box::new(OperatorPass {
            read_operators: config.read_operators,
        }),
        Box::new(EnglishPhrasePass {
            english: english.clone(),
        }),
        Box::new(EnglishWordPass {
            english,
            abbreviations,
            collect_unknown: config.collect_unknown_words,
        }),
    ]
}

/// Pad a spoken replacement so it never glues to neighboring words: a space
/// on the left when the match hugs text, and on the right when a letter or
/// digit follows.
fn pad(snapshot: &str, m: &Match<'_>, spoken: &str) -> String {
    let before = snapshot[..m.start()].chars().next_back();
    let after = snapshot[m.end()..].chars().next();
    let left = before.is_some_and(|c| !c.is_whitespace());
    let right = after.is_some_and(|c| c.is_alphanumeric());
    format!(
        "{}{}{}",
        if left { " " } else { "" },
        spoken,
        if right { " " } else { "" }
    )
}

// ---------------------------------------------------------------------------
// Structured formats
// ---------------------------------------------------------------------------

static URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"\b[A-Za-z][A-Za-z0-9+.-]*://[^\s<>"')]*[^\s<>"').,:;!?]"#).expect("url pattern")
});

struct UrlPass {
    urls: Arc<UrlPathNormalizer>,
    detail: UrlDetail,
}

impl TokenPass for UrlPass {
    fn kind(&self) -> TokenKind {
        TokenKind::Url
    }

    fn apply(&self, text: &mut TrackedText, _diag: &mut Diagnostics) {
        text.sub_regex(&URL, |caps: &Captures<'_>| {
            Some(self.urls.url(&caps[0], self.detail))
        });
    }
}

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("email pattern")
});

struct EmailPass {
    urls: Arc<UrlPathNormalizer>,
}

impl TokenPass for EmailPass {
    fn kind(&self) -> TokenKind {
        TokenKind::Email
    }

    fn apply(&self, text: &mut TrackedText, _diag: &mut Diagnostics) {
        text.sub_regex(&EMAIL, |caps: &Captures<'_>| Some(self.urls.email(&caps[0])));
    }
}

static IPV4: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}\b").expect("ipv4 pattern"));

struct Ipv4Pass {
    urls: Arc<UrlPathNormalizer>,
    mode: IpReadMode,
}

impl TokenPass for Ipv4Pass {
    fn kind(&self) -> TokenKind {
        TokenKind::Ipv4
    }

    fn apply(&self, text: &mut TrackedText, _diag: &mut Diagnostics) {
        // Out-of-range octets yield None and fall through to the number
        // passes.
        text.sub_regex(&IPV4, |caps: &Captures<'_>| {
            self.urls.ipv4(&caps[0], self.mode)
        });
    }
}

static FILE_PATH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?:^|[\s"'(\[=:,;])((?:\.\.?/|~/|/)[A-Za-z0-9_][A-Za-z0-9_.\-/]*[A-Za-z0-9_/]|[A-Za-z]:\\[A-Za-z0-9_.\-\\]+)"#,
    )
    .expect("file path pattern")
});

struct FilePathPass {
    urls: Arc<UrlPathNormalizer>,
}

impl TokenPass for FilePathPass {
    fn kind(&self) -> TokenKind {
        TokenKind::FilePath
    }

    fn apply(&self, text: &mut TrackedText, _diag: &mut Diagnostics) {
        text.sub_regex_group(&FILE_PATH, 1, |caps: &Captures<'_>| {
            Some(self.urls.filepath(&caps[1]))
        });
    }
}

// ---------------------------------------------------------------------------
// Numeric formats
// ---------------------------------------------------------------------------

// A bare `1.2` is a Float; Version needs a `v` prefix or three components.
static VERSION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:[vV]\d+(?:\.\d+)+|\d+(?:\.\d+){2,})(?:-[A-Za-z]+\d*)?\b")
        .expect("version pattern")
});
static EUROPEAN_DATE_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{1,2}\.\d{1,2}\.\d{4}$").expect("date shape pattern"));

struct VersionPass {
    numbers: NumberNormalizer,
}

impl TokenPass for VersionPass {
    fn kind(&self) -> TokenKind {
        TokenKind::Version
    }

    fn apply(&self, text: &mut TrackedText, diag: &mut Diagnostics) {
        text.sub_regex(&VERSION, |caps: &Captures<'_>| {
            let matched = &caps[0];
            if EUROPEAN_DATE_SHAPE.is_match(matched) {
                // Leave DD.MM.YYYY for the date pass.
                return None;
            }
            // Without a `v` prefix only the three-component shape is a
            // version; longer dotted runs (a rejected IPv4, 3.1.4.5) decay
            // to floats and integers.
            let has_prefix = matched.starts_with(['v', 'V']);
            if !has_prefix && matched.split('.').count() != 3 {
                return None;
            }
            match self.numbers.version(matched) {
                Ok(spoken) => Some(spoken),
                Err(_) => {
                    diag.malformed_numbers += 1;
                    None
                }
            }
        });
    }
}

static SIZE_UNIT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(\d+(?:[.,]\d+)?)\s*(kb|mb|gb|tb|ms|sec|min|hr|px|em|rem|vh|vw|кб|мб|гб|тб)\b")
        .expect("size unit pattern")
});

struct SizeUnitPass {
    numbers: NumberNormalizer,
}

impl TokenPass for SizeUnitPass {
    fn kind(&self) -> TokenKind {
        TokenKind::SizeUnit
    }

    fn apply(&self, text: &mut TrackedText, diag: &mut Diagnostics) {
        text.sub_regex(&SIZE_UNIT, |caps: &Captures<'_>| {
            match self.numbers.size(&caps[1], &caps[2]) {
                Ok(spoken) => Some(spoken),
                Err(_) => {
                    diag.unknown_units += 1;
                    None
                }
            }
        });
    }
}

static PERCENTAGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d+(?:[.,]\d+)?)\s*%").expect("percentage pattern"));

struct PercentagePass {
    numbers: NumberNormalizer,
}

impl TokenPass for PercentagePass {
    fn kind(&self) -> TokenKind {
        TokenKind::Percentage
    }

    fn apply(&self, text: &mut TrackedText, diag: &mut Diagnostics) {
        text.sub_regex(&PERCENTAGE, |caps: &Captures<'_>| {
            let number = &caps[1];
            let is_float = number.contains('.') || number.contains(',');
            match self.numbers.percentage(number, is_float) {
                Ok(spoken) => Some(spoken),
                Err(_) => {
                    diag.malformed_numbers += 1;
                    None
                }
            }
        });
    }
}

static ISO_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d{4})-(\d{2})-(\d{2})\b").expect("iso date pattern"));
static EUROPEAN_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d{1,2})\.(\d{1,2})\.(\d{4})\b").expect("eu date pattern"));

struct DatePass {
    numbers: NumberNormalizer,
}

impl DatePass {
    fn rewrite(
        &self,
        diag: &mut Diagnostics,
        day: &str,
        month: &str,
        year: &str,
    ) -> Option<String> {
        let day: u32 = day.parse().ok()?;
        let month: u32 = month.parse().ok()?;
        let year: i64 = year.parse().ok()?;
        match self.numbers.date(day, month, year) {
            Ok(spoken) => Some(spoken),
            Err(_) => {
                diag.malformed_numbers += 1;
                None
            }
        }
    }
}

impl TokenPass for DatePass {
    fn kind(&self) -> TokenKind {
        TokenKind::Date
    }

    fn apply(&self, text: &mut TrackedText, diag: &mut Diagnostics) {
        text.sub_regex(&ISO_DATE, |caps: &Captures<'_>| {
            self.rewrite(diag, &caps[3], &caps[2], &caps[1])
        });
        text.sub_regex(&EUROPEAN_DATE, |caps: &Captures<'_>| {
            self.rewrite(diag, &caps[1], &caps[2], &caps[3])
        });
    }
}

static TIME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d{1,2}):(\d{2})(?::(\d{2}))?\b").expect("time pattern"));

struct TimePass {
    numbers: NumberNormalizer,
}

impl TokenPass for TimePass {
    fn kind(&self) -> TokenKind {
        TokenKind::Time
    }

    fn apply(&self, text: &mut TrackedText, _diag: &mut Diagnostics) {
        text.sub_regex(&TIME, |caps: &Captures<'_>| {
            let hours: i64 = caps[1].parse().ok()?;
            let minutes: i64 = caps[2].parse().ok()?;
            let seconds: Option<i64> = caps.get(3).and_then(|m| m.as_str().parse().ok());
            // Invalid times (25:70) fall through to the number passes.
            self.numbers.time(hours, minutes, seconds).ok()
        });
    }
}

static RANGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d+)\s*-\s*(\d+)\b").expect("range pattern"));

struct RangePass {
    numbers: NumberNormalizer,
}

impl TokenPass for RangePass {
    fn kind(&self) -> TokenKind {
        TokenKind::Range
    }

    fn apply(&self, text: &mut TrackedText, diag: &mut Diagnostics) {
        text.sub_regex(&RANGE, |caps: &Captures<'_>| {
            match self.numbers.range(&caps[1], &caps[2]) {
                Ok(spoken) => Some(spoken),
                Err(_) => {
                    diag.malformed_numbers += 1;
                    None
                }
            }
        });
    }
}

// ---------------------------------------------------------------------------
// Abbreviations and identifiers
// ---------------------------------------------------------------------------

static ABBREVIATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Z][A-Z0-9]+\b").expect("abbreviation pattern"));

struct AbbreviationPass {
    abbreviations: Arc<AbbreviationNormalizer>,
}

impl TokenPass for AbbreviationPass {
    fn kind(&self) -> TokenKind {
        TokenKind::Abbreviation
    }

    fn apply(&self, text: &mut TrackedText, _diag: &mut Diagnostics) {
        text.sub_regex(&ABBREVIATION, |caps: &Captures<'_>| {
            Some(self.abbreviations.normalize(&caps[0]))
        });
    }
}

static LATIN_WORD_CANDIDATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Za-z][A-Za-z0-9]*\b").expect("latin word pattern"));

struct CamelPass {
    idents: Arc<IdentifierSplitter>,
}

impl TokenPass for CamelPass {
    fn kind(&self) -> TokenKind {
        TokenKind::CamelIdent
    }

    fn apply(&self, text: &mut TrackedText, _diag: &mut Diagnostics) {
        text.sub_regex(&LATIN_WORD_CANDIDATE, |caps: &Captures<'_>| {
            let ident = &caps[0];
            // Only identifiers with an internal case boundary; plain words
            // fall through to the English pass.
            let has_upper = ident.chars().any(|c| c.is_ascii_uppercase());
            if !has_upper || text_normalizer::idents::split_camel(ident).len() < 2 {
                return None;
            }
            Some(self.idents.camel(ident))
        });
    }
}

static SNAKE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b_*[A-Za-z][A-Za-z0-9_]*\b").expect("snake pattern"));

struct SnakePass {
    idents: Arc<IdentifierSplitter>,
}

impl TokenPass for SnakePass {
    fn kind(&self) -> TokenKind {
        TokenKind::SnakeIdent
    }

    fn apply(&self, text: &mut TrackedText, _diag: &mut Diagnostics) {
        text.sub_regex(&SNAKE, |caps: &Captures<'_>| {
            let ident = &caps[0];
            if !ident.contains('_') {
                return None;
            }
            Some(self.idents.snake(ident))
        });
    }
}

static KEBAB: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z][A-Za-z0-9]*(?:-[A-Za-z][A-Za-z0-9]*)+\b").expect("kebab pattern")
});

struct KebabPass {
    idents: Arc<IdentifierSplitter>,
}

impl TokenPass for KebabPass {
    fn kind(&self) -> TokenKind {
        TokenKind::KebabIdent
    }

    fn apply(&self, text: &mut TrackedText, _diag: &mut Diagnostics) {
        text.sub_regex(&KEBAB, |caps: &Captures<'_>| Some(self.idents.kebab(&caps[0])));
    }
}

/// Compound language names whose symbols must survive the operator pass.
const SPECIAL_TERMS: &[(&str, &str)] = &[
    ("C++", "си плюс плюс"),
    ("c++", "си плюс плюс"),
    ("C#", "си шарп"),
    ("c#", "си шарп"),
    ("F#", "эф шарп"),
    ("f#", "эф шарп"),
];

struct SpecialTermsPass;

impl TokenPass for SpecialTermsPass {
    fn kind(&self) -> TokenKind {
        TokenKind::EnglishWord
    }

    fn apply(&self, text: &mut TrackedText, _diag: &mut Diagnostics) {
        for (term, spoken) in SPECIAL_TERMS {
            text.replace_literal(term, spoken, 0);
        }
    }
}

// ---------------------------------------------------------------------------
// Bare numbers
// ---------------------------------------------------------------------------

static FLOAT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d+[.,]\d+\b").expect("float pattern"));

struct FloatPass {
    numbers: NumberNormalizer,
}

impl TokenPass for FloatPass {
    fn kind(&self) -> TokenKind {
        TokenKind::Float
    }

    fn apply(&self, text: &mut TrackedText, diag: &mut Diagnostics) {
        text.sub_regex(&FLOAT, |caps: &Captures<'_>| {
            match self.numbers.float(&caps[0]) {
                Ok(spoken) => Some(spoken),
                Err(_) => {
                    diag.malformed_numbers += 1;
                    None
                }
            }
        });
    }
}

static INTEGER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d+\b").expect("integer pattern"));

struct IntegerPass {
    numbers: NumberNormalizer,
}

impl TokenPass for IntegerPass {
    fn kind(&self) -> TokenKind {
        TokenKind::Integer
    }

    fn apply(&self, text: &mut TrackedText, diag: &mut Diagnostics) {
        text.sub_regex(&INTEGER, |caps: &Captures<'_>| {
            match self.numbers.integer(&caps[0]) {
                Ok(spoken) => Some(spoken),
                Err(_) => {
                    // Too long for a cardinal; read digit by digit.
                    diag.malformed_numbers += 1;
                    Some(spell_digits(&caps[0]))
                }
            }
        });
    }
}

// ---------------------------------------------------------------------------
// Operators, symbols, English words
// ---------------------------------------------------------------------------

static MULTI_OPS: Lazy<Regex> = Lazy::new(|| {
    let alternation = MULTI_CHAR_OPERATORS
        .iter()
        .map(|(op, _)| regex::escape(op))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&alternation).expect("operator pattern")
});

static SINGLE_SYMBOLS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[()\[\]{}<>@#&$*/\\~]").expect("single symbol pattern"));

// Silent variants absorb one adjacent space so dropped operators do not
// leave a doubled gap behind.
static MULTI_OPS_SILENT: Lazy<Regex> = Lazy::new(|| {
    let alternation = MULTI_CHAR_OPERATORS
        .iter()
        .map(|(op, _)| regex::escape(op))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(" ?(?:{alternation}) ?")).expect("silent operator pattern")
});
static SINGLES_SILENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r" ?[@#&$*/\\~] ?").expect("silent symbol pattern"));
static BRACKETS_ONLY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[()\[\]{}<>]").expect("bracket pattern"));

static SPECIAL_SIGNS: Lazy<Regex> = Lazy::new(|| {
    let alternation = GREEK_LETTERS
        .iter()
        .chain(MATH_SYMBOLS)
        .chain(ARROW_SYMBOLS)
        .map(|(sym, _)| regex::escape(sym))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&alternation).expect("special sign pattern")
});

fn lookup(tables: &[&[(&'static str, &'static str)]], key: &str) -> Option<&'static str> {
    tables
        .iter()
        .flat_map(|table| table.iter())
        .find(|(sym, _)| *sym == key)
        .map(|(_, spoken)| *spoken)
}

struct OperatorPass {
    read_operators: bool,
}

impl TokenPass for OperatorPass {
    fn kind(&self) -> TokenKind {
        TokenKind::Operator
    }

    fn apply(&self, text: &mut TrackedText, _diag: &mut Diagnostics) {
        if self.read_operators {
            // Multi-character operators before any single-character entry.
            let snapshot = text.current_text().to_string();
            text.sub_regex(&MULTI_OPS, |caps: &Captures<'_>| {
                let m = caps.get(0).expect("whole match");
                lookup(&[MULTI_CHAR_OPERATORS], m.as_str())
                    .map(|spoken| pad(&snapshot, &m, spoken))
            });

            let snapshot = text.current_text().to_string();
            text.sub_regex(&SINGLE_SYMBOLS, |caps: &Captures<'_>| {
                let m = caps.get(0).expect("whole match");
                lookup(&[BRACKETS, SINGLE_CHAR_SYMBOLS], m.as_str())
                    .map(|spoken| pad(&snapshot, &m, spoken))
            });
        } else {
            // Operators collapse to a space; only brackets stay spoken.
            text.sub_regex(&MULTI_OPS_SILENT, |_| Some(" ".to_string()));
            text.sub_regex(&SINGLES_SILENT, |_| Some(" ".to_string()));

            let snapshot = text.current_text().to_string();
            text.sub_regex(&BRACKETS_ONLY, |caps: &Captures<'_>| {
                let m = caps.get(0).expect("whole match");
                lookup(&[BRACKETS, SINGLE_CHAR_SYMBOLS], m.as_str())
                    .map(|spoken| pad(&snapshot, &m, spoken))
            });
        }

        // Greek letters, math signs, arrows are always spoken.
        let snapshot = text.current_text().to_string();
        text.sub_regex(&SPECIAL_SIGNS, |caps: &Captures<'_>| {
            let m = caps.get(0).expect("whole match");
            lookup(&[GREEK_LETTERS, MATH_SYMBOLS, ARROW_SYMBOLS], m.as_str())
                .map(|spoken| pad(&snapshot, &m, spoken))
        });
    }
}

static PHRASES: Lazy<Regex> = Lazy::new(|| {
    let mut keys: Vec<&str> = MULTI_WORD_PHRASES.iter().map(|(k, _)| *k).collect();
    keys.sort_by_key(|k| std::cmp::Reverse(k.len()));
    let alternation = keys
        .iter()
        .map(|k| regex::escape(k))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\b(?:{alternation})\b")).expect("phrase pattern")
});

struct EnglishPhrasePass {
    english: Arc<EnglishNormalizer>,
}

impl TokenPass for EnglishPhrasePass {
    fn kind(&self) -> TokenKind {
        TokenKind::EnglishWord
    }

    fn apply(&self, text: &mut TrackedText, _diag: &mut Diagnostics) {
        text.sub_regex(&PHRASES, |caps: &Captures<'_>| {
            Some(self.english.normalize(&caps[0]).0)
        });
    }
}

static ENGLISH_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Za-z]+\b").expect("english word pattern"));

struct EnglishWordPass {
    english: Arc<EnglishNormalizer>,
    abbreviations: Arc<AbbreviationNormalizer>,
    collect_unknown: bool,
}

impl TokenPass for EnglishWordPass {
    fn kind(&self) -> TokenKind {
        TokenKind::EnglishWord
    }

    fn apply(&self, text: &mut TrackedText, diag: &mut Diagnostics) {
        text.sub_regex(&ENGLISH_WORD, |caps: &Captures<'_>| {
            let word = &caps[0];
            // A single Latin letter is spoken via the letter table.
            if word.chars().count() == 1 {
                return Some(self.abbreviations.normalize(word));
            }
            let (spoken, unknown) = self.english.normalize(word);
            if unknown && self.collect_unknown {
                diag.record_unknown_word(word, &spoken);
            }
            Some(spoken)
        });
    }
}
