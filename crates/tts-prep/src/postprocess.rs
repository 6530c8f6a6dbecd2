//! Stage 4: whitespace and punctuation tidy-up.

use once_cell::sync::Lazy;
use regex::Regex;
use tracked_text::TrackedText;

static MANY_SPACES: Lazy<Regex> = Lazy::new(|| Regex::new(r" {2,}").expect("spaces pattern"));
static SPACE_BEFORE_PUNCT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r" +([.,!?;:])").expect("punct pattern"));
static SPACE_AFTER_NEWLINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n +").expect("newline pattern"));
static SPACE_BEFORE_NEWLINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r" +\n").expect("newline pattern"));
// The backtick takes one adjacent space with it, so its removal never
// leaves a doubled gap.
static STRAY_BACKTICK: Lazy<Regex> = Lazy::new(|| Regex::new(" ?` ?").expect("backtick pattern"));

/// Collapse duplicate separators, strip residual markup, tidy punctuation
/// spacing. Leading/trailing whitespace is trimmed later, when the map is
/// built.
pub fn apply(tracked: &mut TrackedText) {
    // Backticks with no pair survived the structural parser; they carry no
    // spoken form.
    tracked.sub_regex(&STRAY_BACKTICK, |_| Some(" ".to_string()));

    tracked.sub_regex(&MANY_SPACES, |_| Some(" ".to_string()));
    tracked.sub_regex(&SPACE_BEFORE_PUNCT, |caps| Some(caps[1].to_string()));
    tracked.sub_regex(&SPACE_AFTER_NEWLINE, |_| Some("\n".to_string()));
    tracked.sub_regex(&SPACE_BEFORE_NEWLINE, |_| Some("\n".to_string()));
}
