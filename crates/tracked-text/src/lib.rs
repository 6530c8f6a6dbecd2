//! # tracked-text
//!
//! Position-tracked text rewriting.
//!
//! [`TrackedText`] wraps an input string and logs every substitution against
//! coordinates in the *original* input. After an arbitrary number of rewrite
//! passes it can produce the final string together with a character-level
//! map ([`CharMap`]) from every output code point back to the source range
//! that produced it.
//!
//! All offsets in the public API are Unicode code points, never bytes.
//!
//! # Example
//!
//! ```
//! use tracked_text::TrackedText;
//!
//! let mut tracked = TrackedText::new("Вызови getUserData");
//! tracked.replace_literal("getUserData", "гет юзер дата", 0);
//! let map = tracked.build_mapping();
//! assert_eq!(map.transformed(), "Вызови гет юзер дата");
//! assert_eq!(map.original_range_for(7, 20), (7, 18));
//! ```

mod mapping;

pub use mapping::CharMap;

use regex::{Captures, Regex};
use tracing::debug;

/// A single logged substitution, in original code-point coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    /// Start of the replaced range in the original input.
    pub orig_start: usize,
    /// End (exclusive) of the replaced range in the original input.
    pub orig_end: usize,
    /// The text spliced in.
    pub text: String,
    new_chars: usize,
}

impl Replacement {
    /// Code-point length of the replacement text.
    pub fn new_len(&self) -> usize {
        self.new_chars
    }
}

/// Which end of a range a position represents when translating coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bound {
    Start,
    End,
}

/// Snapshot of one record for coordinate arithmetic: (orig_start, orig_end,
/// replacement length), sorted by orig_start.
type SortedSpans = Vec<(usize, usize, usize)>;

/// Text wrapper that records all modifications for position mapping.
///
/// Replacement ranges in the log are pairwise disjoint: a substitution that
/// would touch an already-rewritten region is silently skipped and counted
/// in [`overlaps_dropped`](TrackedText::overlaps_dropped).
#[derive(Debug, Clone)]
pub struct TrackedText {
    original: String,
    current: String,
    records: Vec<Replacement>,
    overlaps_dropped: usize,
}

impl TrackedText {
    /// Wrap an input string.
    pub fn new(input: impl Into<String>) -> Self {
        let original = input.into();
        let current = original.clone();
        Self {
            original,
            current,
            records: Vec::new(),
            overlaps_dropped: 0,
        }
    }

    /// The untouched original input.
    pub fn original(&self) -> &str {
        &self.original
    }

    /// The text after all substitutions so far.
    pub fn current_text(&self) -> &str {
        &self.current
    }

    /// Number of substitutions skipped to preserve disjointness.
    pub fn overlaps_dropped(&self) -> usize {
        self.overlaps_dropped
    }

    /// The substitution log, in application order.
    pub fn records(&self) -> &[Replacement] {
        &self.records
    }

    /// Regex substitution over the whole match.
    ///
    /// `rewrite` returns the replacement text, or `None` to leave the match
    /// untouched (used by passes that validate after matching, e.g. IPv4
    /// octet range checks).
    pub fn sub_regex<F>(&mut self, re: &Regex, rewrite: F) -> &mut Self
    where
        F: FnMut(&Captures<'_>) -> Option<String>,
    {
        self.sub_regex_group(re, 0, rewrite)
    }

    /// Regex substitution replacing only capture group `group`.
    ///
    /// Lets a pattern carry context (the `regex` crate has no lookaround)
    /// while logging a record that covers just the interesting span.
    pub fn sub_regex_group<F>(&mut self, re: &Regex, group: usize, mut rewrite: F) -> &mut Self
    where
        F: FnMut(&Captures<'_>) -> Option<String>,
    {
        let mut planned: Vec<(usize, usize, String)> = Vec::new();
        for caps in re.captures_iter(&self.current) {
            let Some(m) = caps.get(group) else { continue };
            if m.is_empty() {
                continue;
            }
            if let Some(replacement) = rewrite(&caps) {
                planned.push((m.start(), m.end(), replacement));
            }
        }
        // Right to left, so earlier splices don't shift pending byte ranges.
        for (start, end, replacement) in planned.into_iter().rev() {
            self.apply(start, end, replacement);
        }
        self
    }

    /// Literal substring replacement; `max_count == 0` means unlimited.
    pub fn replace_literal(&mut self, old: &str, new: &str, max_count: usize) -> &mut Self {
        if old.is_empty() {
            return self;
        }
        let mut planned: Vec<(usize, usize)> = Vec::new();
        let mut from = 0;
        while let Some(offset) = self.current[from..].find(old) {
            let start = from + offset;
            planned.push((start, start + old.len()));
            from = start + old.len();
            if max_count != 0 && planned.len() == max_count {
                break;
            }
        }
        for (start, end) in planned.into_iter().rev() {
            self.apply(start, end, new.to_string());
        }
        self
    }

    /// Produce the character map for the current state.
    pub fn build_mapping(&self) -> CharMap {
        CharMap::build(&self.original, &self.current, &self.records)
    }

    /// Splice `replacement` over the byte range `start..end` of the current
    /// text, logging the substitution against original coordinates.
    fn apply(&mut self, start: usize, end: usize, replacement: String) {
        // Identity rewrites change nothing; logging them would only make the
        // region immutable for later passes.
        if self.current[start..end] == replacement {
            return;
        }
        let c0 = self.current[..start].chars().count();
        let c1 = c0 + self.current[start..end].chars().count();

        let sorted = self.sorted_spans();

        // A match that covers text produced by an earlier substitution must
        // not be re-edited; dropping it keeps the log disjoint.
        if intersects_current(&sorted, c0, c1) {
            self.overlaps_dropped += 1;
            debug!(start = c0, end = c1, "dropped substitution inside an earlier rewrite");
            return;
        }

        let orig_start = translate(&sorted, c0, Bound::Start);
        let orig_end = translate(&sorted, c1, Bound::End);

        // Checked again in original coordinates: current positions shift as
        // the log grows, original positions are the stable reference.
        if overlaps_original(&sorted, orig_start, orig_end) {
            self.overlaps_dropped += 1;
            debug!(
                orig_start,
                orig_end, "dropped substitution overlapping a logged record"
            );
            return;
        }

        self.current.replace_range(start..end, &replacement);
        let new_chars = replacement.chars().count();
        self.records.push(Replacement {
            orig_start,
            orig_end,
            text: replacement,
            new_chars,
        });
    }

    fn sorted_spans(&self) -> SortedSpans {
        let mut spans: SortedSpans = self
            .records
            .iter()
            .map(|r| (r.orig_start, r.orig_end, r.new_chars))
            .collect();
        spans.sort_unstable_by_key(|&(start, _, _)| start);
        spans
    }
}

/// Does the current-text range `[c0, c1)` intersect any logged replacement?
fn intersects_current(sorted: &SortedSpans, c0: usize, c1: usize) -> bool {
    let mut delta: isize = 0;
    for &(orig_start, orig_end, new_len) in sorted {
        let cur_start = (orig_start as isize + delta) as usize;
        let cur_end = cur_start + new_len;
        if c0 < cur_end && cur_start < c1 {
            return true;
        }
        if c1 <= cur_start {
            return false;
        }
        delta += new_len as isize - (orig_end - orig_start) as isize;
    }
    false
}

/// Translate a current-text position to original coordinates.
///
/// Positions strictly inside a replacement clamp to the record's start or
/// end depending on which bound of a range they represent.
fn translate(sorted: &SortedSpans, pos: usize, bound: Bound) -> usize {
    let mut delta: isize = 0;
    for &(orig_start, orig_end, new_len) in sorted {
        let cur_start = (orig_start as isize + delta) as usize;
        let cur_end = cur_start + new_len;
        // An exclusive end that touches a record's start lies before it.
        let before = match bound {
            Bound::Start => pos < cur_start,
            Bound::End => pos <= cur_start,
        };
        if before {
            break;
        }
        if pos < cur_end {
            return match bound {
                Bound::Start => orig_start,
                Bound::End => orig_end,
            };
        }
        delta += new_len as isize - (orig_end - orig_start) as isize;
    }
    (pos as isize - delta) as usize
}

/// Does the original-coordinate range overlap any logged record?
fn overlaps_original(sorted: &SortedSpans, orig_start: usize, orig_end: usize) -> bool {
    sorted.iter().any(|&(start, end, _)| {
        if orig_start == orig_end {
            start <= orig_start && orig_start < end
        } else {
            orig_start < end && start < orig_end
        }
    })
}
