//! Stage 1: fenced code blocks, diagrams, inline code, markdown structure.

use once_cell::sync::Lazy;
use regex::Regex;
use tracked_text::TrackedText;

use prep_core::{CodeBlockMode, PipelineConfig};
use text_normalizer::numbers::{ordinal, spell_digits, OrdinalForm};
use text_normalizer::symbols::{ARROW_SYMBOLS, GREEK_LETTERS, MATH_SYMBOLS};
use text_normalizer::{CodeBlockHandler, IdentifierSplitter};

static FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```([A-Za-z0-9+#]*)[ \t]*\n(.*?)```").expect("fence pattern"));
static INLINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`([^`\n]+)`").expect("inline pattern"));
static HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^#{1,6}[ \t]+").expect("heading pattern"));
static BULLET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*[-*+][ \t]+").expect("bullet pattern"));
static HORIZONTAL_RULE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^(?:-{3,}|={3,}|\*{3,})[ \t]*$").expect("rule pattern"));
static LINK_OPEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\[)[^\]\n]+\]\([^)\n]+\)").expect("link open pattern"));
static LINK_TAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\]\([^)\n]+\)").expect("link tail pattern"));
static LIST_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^(\d{1,3})\.[ \t]+").expect("list number pattern"));

/// Replace fenced code blocks. Diagram blocks always become the sentinel;
/// other blocks become a summary sentence (brief) or a spoken reading of
/// the interior (full).
pub fn fenced_blocks(
    tracked: &mut TrackedText,
    config: &PipelineConfig,
    handler: &CodeBlockHandler,
) {
    tracked.sub_regex(&FENCE, |caps| {
        let language = caps.get(1).map(|m| m.as_str()).unwrap_or("");
        let code = caps.get(2).map(|m| m.as_str()).unwrap_or("");

        let lang_lower = language.to_lowercase();
        if config
            .diagram_languages
            .iter()
            .any(|d| d.to_lowercase() == lang_lower && !lang_lower.is_empty())
        {
            return Some(config.diagram_sentinel.clone());
        }

        match config.code_block_mode {
            CodeBlockMode::Brief => {
                let tag = (!language.is_empty()).then_some(language);
                Some(handler.brief_description(tag))
            }
            CodeBlockMode::Full => Some(handler.full_normalize(code.trim())),
        }
    });
}

/// Unwrap single-backtick spans and speak their content through the
/// identifier splitter.
pub fn inline_code(tracked: &mut TrackedText, idents: &IdentifierSplitter) {
    tracked.sub_regex(&INLINE, |caps| {
        let code = caps.get(1).map(|m| m.as_str()).unwrap_or("");
        Some(spoken_inline(code, idents))
    });
}

fn special_sign(c: char) -> Option<&'static str> {
    let mut buf = [0u8; 4];
    let key: &str = c.encode_utf8(&mut buf);
    GREEK_LETTERS
        .iter()
        .chain(MATH_SYMBOLS)
        .chain(ARROW_SYMBOLS)
        .find(|(sym, _)| *sym == key)
        .map(|(_, spoken)| *spoken)
}

/// Inline code content: Greek and math signs first, then shape detection.
fn spoken_inline(code: &str, idents: &IdentifierSplitter) -> String {
    let mut expanded = String::with_capacity(code.len());
    let mut has_special = false;
    for c in code.chars() {
        match special_sign(c) {
            Some(spoken) => {
                has_special = true;
                expanded.push(' ');
                expanded.push_str(spoken);
                expanded.push(' ');
            }
            None => expanded.push(c),
        }
    }
    let code = expanded.split_whitespace().collect::<Vec<_>>().join(" ");

    if has_special {
        return word_by_word(&code, idents);
    }
    if code.contains('_') {
        return idents.snake(&code);
    }
    if code.contains('-') && !code.starts_with('-') {
        return idents.kebab(&code);
    }
    let has_upper = code.chars().skip(1).any(|c| c.is_ascii_uppercase());
    let has_lower = code.chars().any(|c| c.is_ascii_lowercase());
    if has_upper && has_lower {
        return idents.camel(&code);
    }
    word_by_word(&code, idents)
}

fn word_by_word(code: &str, idents: &IdentifierSplitter) -> String {
    code.split_whitespace()
        .map(|word| idents.word(word))
        .filter(|w| !w.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Markdown structure: headings, list bullets, links, numbered lists.
///
/// Links lose the `[` and the `](url)` separately so the link text keeps
/// its original characters and stays rewritable by later passes.
pub fn markdown(tracked: &mut TrackedText) {
    tracked.sub_regex(&HEADING, |_| Some(String::new()));
    tracked.sub_regex(&HORIZONTAL_RULE, |_| Some(String::new()));
    tracked.sub_regex(&BULLET, |_| Some(String::new()));

    tracked.sub_regex_group(&LINK_OPEN, 1, |_| Some(String::new()));
    tracked.sub_regex(&LINK_TAIL, |_| Some(String::new()));

    tracked.sub_regex(&LIST_NUMBER, |caps| {
        let number = caps.get(1)?.as_str();
        let spoken = number
            .parse::<i64>()
            .map(|n| ordinal(n, OrdinalForm::Neuter))
            .unwrap_or_else(|_| spell_digits(number));
        Some(format!("{spoken}: "))
    });
}
