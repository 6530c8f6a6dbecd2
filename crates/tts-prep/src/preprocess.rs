//! Stage 0: byte-order mark, quote and dash unification, whitespace.

use once_cell::sync::Lazy;
use regex::Regex;
use tracked_text::TrackedText;

static BOM: Lazy<Regex> = Lazy::new(|| Regex::new("^\u{FEFF}").expect("BOM pattern"));
static MANY_NEWLINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").expect("newline pattern"));
static BLANKS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]{2,}|\t").expect("blank pattern"));

/// Remove a leading byte-order mark.
pub fn strip_bom(tracked: &mut TrackedText) {
    tracked.sub_regex(&BOM, |_| Some(String::new()));
}

/// Unify quotes and dashes, collapse whitespace runs. Single newlines stay
/// for the structural parser.
pub fn unify(tracked: &mut TrackedText) {
    tracked.replace_literal("«", "\"", 0);
    tracked.replace_literal("»", "\"", 0);
    tracked.replace_literal("\u{201C}", "\"", 0);
    tracked.replace_literal("\u{201D}", "\"", 0);
    tracked.replace_literal("\u{2018}", "'", 0);
    tracked.replace_literal("\u{2019}", "'", 0);

    tracked.replace_literal("\u{2014}", "-", 0);
    tracked.replace_literal("\u{2013}", "-", 0);

    tracked.sub_regex(&MANY_NEWLINES, |_| Some("\n\n".to_string()));
    tracked.sub_regex(&BLANKS, |_| Some(" ".to_string()));
}
