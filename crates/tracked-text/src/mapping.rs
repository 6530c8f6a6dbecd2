//! Character-level mapping from rewritten text back to its source.

use serde::Serialize;

use crate::Replacement;

/// Map from every code point of a rewritten string to the range of the
/// original input responsible for it.
///
/// Entry `i` holds the half-open original range for the `i`-th code point of
/// the transformed text. A code point that came through untouched carries a
/// single-point range; every code point produced by one substitution carries
/// that substitution's full range.
#[derive(Debug, Clone, Serialize)]
pub struct CharMap {
    original: String,
    transformed: String,
    map: Vec<(usize, usize)>,
    #[serde(skip)]
    original_chars: Vec<char>,
}

impl CharMap {
    /// Build the map from a substitution log.
    pub(crate) fn build(original: &str, transformed: &str, records: &[Replacement]) -> Self {
        let original_chars: Vec<char> = original.chars().collect();
        let mut sorted: Vec<&Replacement> = records.iter().collect();
        sorted.sort_unstable_by_key(|r| r.orig_start);

        let mut map = Vec::with_capacity(transformed.chars().count());
        let mut orig_idx = 0;
        for record in sorted {
            while orig_idx < record.orig_start {
                map.push((orig_idx, orig_idx + 1));
                orig_idx += 1;
            }
            for _ in 0..record.new_len() {
                map.push((record.orig_start, record.orig_end));
            }
            orig_idx = record.orig_end;
        }
        while orig_idx < original_chars.len() {
            map.push((orig_idx, orig_idx + 1));
            orig_idx += 1;
        }

        Self {
            original: original.to_string(),
            transformed: transformed.to_string(),
            map,
            original_chars,
        }
    }

    /// The original input.
    pub fn original(&self) -> &str {
        &self.original
    }

    /// The rewritten text this map describes.
    pub fn transformed(&self) -> &str {
        &self.transformed
    }

    /// Number of entries; equals the code-point length of the transformed
    /// text.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// True when the transformed text is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Raw entries, one per transformed code point.
    pub fn entries(&self) -> &[(usize, usize)] {
        &self.map
    }

    /// Union of the original ranges behind the output range
    /// `[out_start, out_end)`.
    pub fn original_range_for(&self, out_start: usize, out_end: usize) -> (usize, usize) {
        if self.map.is_empty() {
            return (out_start, out_end);
        }
        let start = out_start.min(self.map.len() - 1);
        let end = out_end.min(self.map.len());

        let (mut lo, mut hi) = self.map[start];
        for &(a, b) in self.map.iter().take(end).skip(start + 1) {
            lo = lo.min(a);
            hi = hi.max(b);
        }
        (lo, hi)
    }

    /// Original word boundaries around the source of the output code point at
    /// `out_offset`: the mapped range expanded to the nearest whitespace.
    pub fn original_word_range_for(&self, out_offset: usize) -> (usize, usize) {
        let (start, end) = self.original_range_for(out_offset, out_offset + 1);
        let chars = &self.original_chars;

        let mut word_start = start.min(chars.len());
        while word_start > 0 && !chars[word_start - 1].is_whitespace() {
            word_start -= 1;
        }
        let mut word_end = end.min(chars.len());
        while word_end < chars.len() && !chars[word_end].is_whitespace() {
            word_end += 1;
        }
        (word_start, word_end)
    }

    /// Drop leading and trailing whitespace from the transformed text,
    /// keeping the map aligned. Used by the pipeline's final tidy step.
    pub fn trimmed(self) -> Self {
        let chars: Vec<char> = self.transformed.chars().collect();
        let leading = chars.iter().take_while(|c| c.is_whitespace()).count();
        let trailing = chars[leading..]
            .iter()
            .rev()
            .take_while(|c| c.is_whitespace())
            .count();
        if leading == 0 && trailing == 0 {
            return self;
        }

        let transformed: String = chars[leading..chars.len() - trailing].iter().collect();
        let map = self.map[leading..self.map.len() - trailing].to_vec();
        Self {
            original: self.original,
            transformed,
            map,
            original_chars: self.original_chars,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::TrackedText;

    #[test]
    fn test_get_original_range_unchanged() {
        let tracked = TrackedText::new("Hello world");
        let map = tracked.build_mapping();
        assert_eq!(map.original_range_for(0, 5), (0, 5));
    }

    #[test]
    fn test_get_original_range_replaced() {
        let mut tracked = TrackedText::new("Hello world");
        tracked.replace_literal("world", "мир", 0);
        let map = tracked.build_mapping();
        assert_eq!(map.original_range_for(6, 9), (6, 11));
    }

    #[test]
    fn test_range_spanning_replacement_boundary() {
        let mut tracked = TrackedText::new("Hello world");
        tracked.replace_literal("world", "мир", 0);
        let map = tracked.build_mapping();

        let (start, end) = map.original_range_for(4, 7);
        assert_eq!(start, 4);
        assert_eq!(end, 11);
    }

    #[test]
    fn test_range_contains_every_entry() {
        let mut tracked = TrackedText::new("Test 123 API");
        let re = regex::Regex::new(r"\d+").unwrap();
        tracked.sub_regex(&re, |_| Some("сто двадцать три".to_string()));
        let map = tracked.build_mapping();

        let (lo, hi) = map.original_range_for(0, map.len());
        for &(a, b) in map.entries() {
            assert!(lo <= a && b <= hi);
        }
    }

    #[test]
    fn test_position_past_end_clamps() {
        let tracked = TrackedText::new("Hello");
        let map = tracked.build_mapping();
        assert_eq!(map.original_range_for(10, 15), (4, 5));
    }

    #[test]
    fn test_word_range_plain() {
        let tracked = TrackedText::new("Hello world test");
        let map = tracked.build_mapping();
        assert_eq!(map.original_word_range_for(6), (6, 11));
    }

    #[test]
    fn test_word_range_after_replacement() {
        let mut tracked = TrackedText::new("Hello world");
        tracked.replace_literal("world", "мир", 0);
        let map = tracked.build_mapping();
        assert_eq!(map.original_word_range_for(7), (6, 11));
    }

    #[test]
    fn test_trimmed_keeps_alignment() {
        let mut tracked = TrackedText::new("  мир  ");
        tracked.replace_literal("мир", "world", 0);
        let map = tracked.build_mapping().trimmed();

        assert_eq!(map.transformed(), "world");
        assert_eq!(map.len(), 5);
        for i in 0..5 {
            assert_eq!(map.entries()[i], (2, 5));
        }
    }

    #[test]
    fn test_serializes_to_json() {
        let mut tracked = TrackedText::new("AB");
        tracked.replace_literal("A", "1", 0);
        let map = tracked.build_mapping();

        let json = serde_json::to_value(&map).unwrap();
        assert_eq!(json["transformed"], "1B");
        assert_eq!(json["map"][0][0], 0);
    }
}
