//! Fenced code block handling.
//!
//! Brief mode replaces a block with a one-sentence summary naming the
//! language; full mode reads the interior token by token: identifiers
//! through the splitter, numbers as cardinals, operators and brackets
//! through the symbol table, string literals by their content.

use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::idents::IdentifierSplitter;
use crate::numbers::{spell_digits, NumberNormalizer};
use crate::symbols::SymbolNormalizer;

/// Fence language tags by Russian pronunciation.
const LANGUAGE_NAMES: &[(&str, &str)] = &[
    ("python", "пайтон"),
    ("py", "пайтон"),
    ("javascript", "джаваскрипт"),
    ("js", "джаваскрипт"),
    ("typescript", "тайпскрипт"),
    ("ts", "тайпскрипт"),
    ("bash", "баш"),
    ("sh", "шелл"),
    ("shell", "шелл"),
    ("zsh", "зи шелл"),
    ("sql", "эс кью эл"),
    ("json", "джейсон"),
    ("yaml", "ямл"),
    ("yml", "ямл"),
    ("html", "эйч ти эм эл"),
    ("css", "си эс эс"),
    ("go", "го"),
    ("golang", "голанг"),
    ("rust", "раст"),
    ("java", "джава"),
    ("kotlin", "котлин"),
    ("swift", "свифт"),
    ("ruby", "руби"),
    ("php", "пи эйч пи"),
    ("c", "си"),
    ("cpp", "си плюс плюс"),
    ("c++", "си плюс плюс"),
    ("cs", "си шарп"),
    ("csharp", "си шарп"),
    ("c#", "си шарп"),
    ("markdown", "маркдаун"),
    ("md", "маркдаун"),
    ("xml", "икс эм эл"),
    ("toml", "томл"),
    ("dockerfile", "докерфайл"),
    ("makefile", "мейкфайл"),
    ("graphql", "граф кью эл"),
    ("scss", "эс си эс эс"),
    ("sass", "сасс"),
    ("less", "лесс"),
    ("vue", "вью"),
    ("jsx", "джей эс икс"),
    ("tsx", "ти эс икс"),
    ("r", "ар"),
    ("perl", "перл"),
    ("lua", "луа"),
    ("elixir", "эликсир"),
    ("erlang", "эрланг"),
    ("haskell", "хаскелл"),
    ("scala", "скала"),
    ("clojure", "кложур"),
    ("dart", "дарт"),
    ("lean", "лин"),
    ("nginx", "энджинкс"),
    ("terraform", "терраформ"),
    ("powershell", "пауэршелл"),
    ("mermaid", "мёрмэйд"),
];

// Identifiers, numbers, string literals, brackets, operator runs, then any
// other single non-space character (Greek letters, arrows, math signs).
static CODE_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"[A-Za-z_][A-Za-z0-9_]*|\d+|"[^"\n]*"|'[^'\n]*'|[()\[\]{}]|[-+*/=<>!&|?:.;,^~%\\#@$]+|\S"#,
    )
    .expect("code token pattern")
});

/// Handles fenced code block interiors.
#[derive(Debug)]
pub struct CodeBlockHandler {
    idents: Arc<IdentifierSplitter>,
    numbers: NumberNormalizer,
    symbols: SymbolNormalizer,
}

impl CodeBlockHandler {
    pub fn new(idents: Arc<IdentifierSplitter>) -> Self {
        Self {
            idents,
            numbers: NumberNormalizer::new(),
            symbols: SymbolNormalizer::new(),
        }
    }

    /// Spoken name of a fence language tag.
    pub fn spoken_language(language: &str) -> Option<&'static str> {
        let lower = language.to_lowercase();
        LANGUAGE_NAMES
            .iter()
            .find(|(key, _)| *key == lower)
            .map(|(_, spoken)| *spoken)
    }

    /// One-sentence summary used in brief mode.
    pub fn brief_description(&self, language: Option<&str>) -> String {
        match language.filter(|l| !l.is_empty()) {
            Some(language) => {
                let spoken =
                    Self::spoken_language(language).map(str::to_string).unwrap_or_else(|| {
                        language.to_lowercase()
                    });
                format!("далее следует пример кода на {spoken}")
            }
            None => "далее следует блок кода".to_string(),
        }
    }

    /// Token-by-token reading of a block interior, used in full mode.
    pub fn full_normalize(&self, code: &str) -> String {
        let mut words: Vec<String> = Vec::new();
        for token in CODE_TOKEN.find_iter(code) {
            let spoken = self.spoken_token(token.as_str());
            if !spoken.is_empty() {
                words.push(spoken);
            }
        }
        words.join(" ")
    }

    fn spoken_token(&self, token: &str) -> String {
        let first = match token.chars().next() {
            Some(c) => c,
            None => return String::new(),
        };

        // String literal: speak the content.
        if (first == '"' || first == '\'') && token.len() >= 2 && token.ends_with(first) {
            let content = &token[1..token.len() - 1];
            return content
                .split_whitespace()
                .map(|w| self.idents.word(w))
                .collect::<Vec<_>>()
                .join(" ");
        }

        if token.chars().all(|c| c.is_ascii_digit()) {
            return self
                .numbers
                .integer(token)
                .unwrap_or_else(|_| spell_digits(token));
        }

        if first.is_ascii_alphabetic() || first == '_' {
            if token.contains('_') {
                return self.idents.snake(token);
            }
            if token.chars().skip(1).any(|c| c.is_ascii_uppercase()) {
                return self.idents.camel(token);
            }
            return self.idents.word(token);
        }

        // Operators, brackets, Greek letters, arrows: longest match first,
        // unknown characters stay silent.
        let mut words: Vec<&str> = Vec::new();
        let mut rest = token;
        while !rest.is_empty() {
            match self.symbols.match_prefix(rest) {
                Some((matched, spoken)) => {
                    words.push(spoken);
                    rest = &rest[matched.len()..];
                }
                None => {
                    let mut chars = rest.chars();
                    chars.next();
                    rest = chars.as_str();
                }
            }
        }
        words.join(" ")
    }
}
