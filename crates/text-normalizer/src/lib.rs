//! # text-normalizer
//!
//! The normalizer battery for the TTS text preprocessor.
//!
//! Every module is a free-standing leaf that rewrites one shape of
//! speaker-unreadable text into spoken Russian:
//!
//! - Numbers with Russian declension (cardinals, ordinals, units, dates)
//! - English words via dictionary plus letter-level fallback
//! - Abbreviations spelled with the Latin letter table
//! - Operators, brackets, Greek letters, and math symbols
//! - Latin identifiers (camelCase, snake_case, kebab-case)
//! - URLs, emails, IPv4 addresses, and file paths
//! - Fenced code blocks in brief or full mode
//!
//! All lookup tables are immutable after construction; user extensions are
//! merged once and frozen, so a normalizer can be shared behind `Arc` by any
//! number of concurrent pipeline calls.
//!
//! # Example
//!
//! ```
//! use text_normalizer::NumberNormalizer;
//!
//! let numbers = NumberNormalizer::new();
//! assert_eq!(numbers.integer("42").unwrap(), "сорок два");
//! assert_eq!(numbers.percentage("21", false).unwrap(), "двадцать один процент");
//! ```

pub mod abbreviations;
pub mod codeblocks;
pub mod english;
pub mod idents;
pub mod numbers;
pub mod symbols;
pub mod urls;

pub use abbreviations::AbbreviationNormalizer;
pub use codeblocks::CodeBlockHandler;
pub use english::EnglishNormalizer;
pub use idents::IdentifierSplitter;
pub use numbers::{Gender, NumberNormalizer, OrdinalForm};
pub use symbols::SymbolNormalizer;
pub use urls::UrlPathNormalizer;
