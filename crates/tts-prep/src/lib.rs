//! # tts-prep
//!
//! Text preprocessing pipeline for a Russian speech synthesizer.
//!
//! Turns technical prose containing Latin words, identifiers, numbers,
//! URLs, operators, and markup into a fully Cyrillic surface, and produces a
//! character-level map from every output code point back to the input
//! fragment that produced it, so a player can highlight the original text
//! while speaking.
//!
//! # Example
//!
//! ```
//! use tts_prep::Pipeline;
//!
//! let pipeline = Pipeline::default();
//! assert_eq!(pipeline.process("50%"), "пятьдесят процентов");
//!
//! let (spoken, map) = pipeline.process_with_map("Вызови getUserData");
//! assert_eq!(spoken, "Вызови гет юзер дата");
//! assert_eq!(map.original_range_for(7, 20), (7, 18));
//! ```

mod passes;
mod postprocess;
mod preprocess;
mod structure;

pub use prep_core::{
    CodeBlockMode, Diagnostics, IpReadMode, PipelineConfig, PrepError, PrepResult, TokenKind,
    UrlDetail,
};
pub use tracked_text::{CharMap, TrackedText};

use std::sync::Arc;

use tracing::{debug, instrument, warn};

use text_normalizer::{
    AbbreviationNormalizer, CodeBlockHandler, EnglishNormalizer, IdentifierSplitter,
    UrlPathNormalizer,
};

use passes::TokenPass;

/// The preprocessing pipeline.
///
/// Dictionaries are merged and frozen at construction; a `Pipeline` is
/// immutable afterwards and can be shared freely across threads. All state
/// of a single `process` call lives in that call.
pub struct Pipeline {
    config: PipelineConfig,
    idents: Arc<IdentifierSplitter>,
    code_blocks: CodeBlockHandler,
    passes: Vec<Box<dyn TokenPass>>,
    rejected_entries: usize,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(PipelineConfig::default())
    }
}

impl Pipeline {
    /// Build a pipeline, merging user dictionaries into the built-in
    /// tables. Invalid entries (empty or non-ASCII keys) are rejected here
    /// and reported once.
    pub fn new(config: PipelineConfig) -> Self {
        let mut rejected_entries = 0;

        let english_terms = filter_dictionary(
            &config.custom_english_terms,
            "custom_english_terms",
            &mut rejected_entries,
        );
        let abbreviation_words = filter_dictionary(
            &config.custom_abbreviations,
            "custom_abbreviations",
            &mut rejected_entries,
        );

        let english = Arc::new(EnglishNormalizer::with_custom_terms(english_terms));
        let abbreviations = Arc::new(AbbreviationNormalizer::with_custom_words(
            abbreviation_words,
        ));
        let idents = Arc::new(IdentifierSplitter::new(
            abbreviations.clone(),
            english.clone(),
        ));
        let urls = Arc::new(UrlPathNormalizer::new(abbreviations.clone()));
        let code_blocks = CodeBlockHandler::new(idents.clone());

        let passes = passes::battery(&config, urls, abbreviations, idents.clone(), english);

        Self {
            config,
            idents,
            code_blocks,
            passes,
            rejected_entries,
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Rewrite text for speech, dropping the map.
    pub fn process(&self, text: &str) -> String {
        self.process_with_report(text).0
    }

    /// Rewrite text and return the character map.
    pub fn process_with_map(&self, text: &str) -> (String, CharMap) {
        let (spoken, map, _) = self.process_with_report(text);
        (spoken, map)
    }

    /// Rewrite text and return the map plus the per-call diagnostics.
    #[instrument(skip_all, fields(input_len = text.len()))]
    pub fn process_with_report(&self, text: &str) -> (String, CharMap, Diagnostics) {
        let mut diag = Diagnostics {
            rejected_dictionary_entries: self.rejected_entries,
            ..Diagnostics::default()
        };

        let mut tracked = TrackedText::new(text);
        if text.is_empty() {
            let map = tracked.build_mapping();
            return (String::new(), map, diag);
        }

        preprocess::strip_bom(&mut tracked);

        // Fences are isolated before quote/dash/whitespace unification:
        // records created inside a block would invalidate the fence match.
        structure::fenced_blocks(&mut tracked, &self.config, &self.code_blocks);

        preprocess::unify(&mut tracked);

        if tracked.current_text().trim().is_empty() {
            diag.overlaps_dropped += tracked.overlaps_dropped();
            let map = tracked.build_mapping().trimmed();
            return (map.transformed().to_string(), map, diag);
        }

        structure::inline_code(&mut tracked, &self.idents);
        structure::markdown(&mut tracked);

        for pass in &self.passes {
            pass.apply(&mut tracked, &mut diag);
        }

        postprocess::apply(&mut tracked);

        diag.overlaps_dropped += tracked.overlaps_dropped();
        if diag.overlaps_dropped > 0 {
            let err = PrepError::overlap_dropped(diag.overlaps_dropped);
            debug!(%err, "rewrite log kept disjoint");
        }

        let map = tracked.build_mapping().trimmed();
        (map.transformed().to_string(), map, diag)
    }
}

/// Drop invalid user dictionary entries, warning once per entry.
fn filter_dictionary(
    entries: &std::collections::BTreeMap<String, String>,
    which: &str,
    rejected: &mut usize,
) -> Vec<(String, String)> {
    let mut kept = Vec::with_capacity(entries.len());
    for (key, value) in entries {
        let reason = if key.is_empty() {
            Some("key is empty")
        } else if !key.is_ascii() {
            Some("key must be ASCII")
        } else if value.trim().is_empty() {
            Some("replacement is empty")
        } else {
            None
        };
        match reason {
            Some(reason) => {
                *rejected += 1;
                let err = PrepError::dictionary_merge(key.clone(), reason);
                warn!(dictionary = which, %err, "dictionary entry rejected");
            }
            None => kept.push((key.clone(), value.clone())),
        }
    }
    kept
}
