//! Operators, punctuation, brackets, and special signs.
//!
//! A longest-match dictionary from symbol strings to spoken Russian, split
//! into three categories: multi-character operators, single-character
//! symbols, and brackets. Greek letters, math signs, and arrows live in
//! their own tables and are spoken both in prose and inside code blocks.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Multi-character operators, longest first.
pub const MULTI_CHAR_OPERATORS: &[(&str, &str)] = &[
    ("===", "строго равно"),
    ("!==", "строго не равно"),
    ("<->", "двунаправленная стрелка"),
    ("...", "троеточие"),
    ("->", "стрелка"),
    ("=>", "толстая стрелка"),
    ("<-", "стрелка влево"),
    (">=", "больше или равно"),
    ("<=", "меньше или равно"),
    ("!=", "не равно"),
    ("==", "равно равно"),
    ("&&", "и"),
    ("||", "или"),
    ("??", "нулевое слияние"),
    ("?.", "опциональная цепочка"),
    ("**", "степень"),
    ("//", "целочисленное деление"),
    ("++", "плюс плюс"),
    ("--", "минус минус"),
    ("+=", "плюс равно"),
    ("-=", "минус равно"),
    ("*=", "умножить равно"),
    ("/=", "делить равно"),
    (":=", "присваивание"),
    ("::", "двойное двоеточие"),
    ("<<", "сдвиг влево"),
    (">>", "сдвиг вправо"),
];

/// Single-character symbols.
pub const SINGLE_CHAR_SYMBOLS: &[(&str, &str)] = &[
    ("+", "плюс"),
    ("-", "минус"),
    ("*", "умножить"),
    ("/", "делить"),
    ("%", "процент"),
    ("<", "меньше"),
    (">", "больше"),
    ("=", "равно"),
    ("!", "восклицательный знак"),
    ("?", "вопросительный знак"),
    ("&", "амперсанд"),
    ("|", "пайп"),
    ("^", "каретка"),
    ("~", "тильда"),
    ("@", "собака"),
    ("#", "решётка"),
    ("$", "доллар"),
    ("_", "нижнее подчёркивание"),
    ("\\", "бэкслэш"),
    (".", "точка"),
    (",", "запятая"),
    (":", "двоеточие"),
    (";", "точка с запятой"),
    ("\"", "кавычка"),
    ("'", "апостроф"),
    ("`", "обратная кавычка"),
    ("«", "открывающая кавычка"),
    ("»", "закрывающая кавычка"),
];

/// Bracket pairs.
pub const BRACKETS: &[(&str, &str)] = &[
    ("(", "открывающая скобка"),
    (")", "закрывающая скобка"),
    ("[", "открывающая квадратная скобка"),
    ("]", "закрывающая квадратная скобка"),
    ("{", "открывающая фигурная скобка"),
    ("}", "закрывающая фигурная скобка"),
];

/// Greek letters, both cases, by Russian name.
pub const GREEK_LETTERS: &[(&str, &str)] = &[
    ("α", "альфа"),
    ("β", "бета"),
    ("γ", "гамма"),
    ("δ", "дельта"),
    ("ε", "эпсилон"),
    ("ζ", "дзета"),
    ("η", "эта"),
    ("θ", "тета"),
    ("ι", "йота"),
    ("κ", "каппа"),
    ("λ", "лямбда"),
    ("μ", "мю"),
    ("ν", "ню"),
    ("ξ", "кси"),
    ("π", "пи"),
    ("ρ", "ро"),
    ("σ", "сигма"),
    ("τ", "тау"),
    ("υ", "ипсилон"),
    ("φ", "фи"),
    ("χ", "хи"),
    ("ψ", "пси"),
    ("ω", "омега"),
    ("Α", "альфа"),
    ("Β", "бета"),
    ("Γ", "гамма"),
    ("Δ", "дельта"),
    ("Ε", "эпсилон"),
    ("Θ", "тета"),
    ("Λ", "лямбда"),
    ("Ξ", "кси"),
    ("Π", "пи"),
    ("Σ", "сигма"),
    ("Φ", "фи"),
    ("Ψ", "пси"),
    ("Ω", "омега"),
];

/// Mathematical signs.
pub const MATH_SYMBOLS: &[(&str, &str)] = &[
    ("∞", "бесконечность"),
    ("∈", "принадлежит"),
    ("∉", "не принадлежит"),
    ("∀", "для любого"),
    ("∃", "существует"),
    ("≠", "не равно"),
    ("≤", "меньше или равно"),
    ("≥", "больше или равно"),
    ("≈", "приблизительно равно"),
    ("±", "плюс минус"),
    ("×", "умножить"),
    ("÷", "делить"),
    ("√", "корень"),
    ("∑", "сумма"),
    ("∏", "произведение"),
    ("°", "градус"),
    ("©", "копирайт"),
    ("®", "зарегистрировано"),
    ("™", "торговая марка"),
];

/// Arrow characters.
pub const ARROW_SYMBOLS: &[(&str, &str)] = &[
    ("→", "стрелка"),
    ("←", "стрелка влево"),
    ("↔", "двунаправленная стрелка"),
    ("⇒", "толстая стрелка"),
    ("⇐", "толстая стрелка влево"),
    ("⟶", "стрелка"),
    ("↑", "стрелка вверх"),
    ("↓", "стрелка вниз"),
];

static SYMBOL_MAP: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    MULTI_CHAR_OPERATORS
        .iter()
        .chain(SINGLE_CHAR_SYMBOLS)
        .chain(BRACKETS)
        .chain(GREEK_LETTERS)
        .chain(MATH_SYMBOLS)
        .chain(ARROW_SYMBOLS)
        .copied()
        .collect()
});

/// Longest-match symbol lookup.
#[derive(Debug, Default)]
pub struct SymbolNormalizer;

impl SymbolNormalizer {
    pub fn new() -> Self {
        Self
    }

    /// Spoken form of an exact symbol string, multi-character entries
    /// matching before any single-character entry.
    pub fn normalize(&self, symbol: &str) -> Option<&'static str> {
        for (op, spoken) in MULTI_CHAR_OPERATORS {
            if symbol == *op {
                return Some(spoken);
            }
        }
        SYMBOL_MAP.get(symbol).copied()
    }

    /// Longest symbol matching a prefix of `text`, with its spoken form.
    /// Used by the code-block tokenizer.
    pub fn match_prefix(&self, text: &str) -> Option<(&'static str, &'static str)> {
        for (op, spoken) in MULTI_CHAR_OPERATORS {
            if text.starts_with(op) {
                return Some((op, spoken));
            }
        }
        SYMBOL_MAP
            .iter()
            .filter(|(key, _)| key.chars().count() == 1 && text.starts_with(**key))
            .map(|(key, spoken)| (*key, *spoken))
            .next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_operators() {
        let symbols = SymbolNormalizer::new();
        assert_eq!(symbols.normalize("->"), Some("стрелка"));
        assert_eq!(symbols.normalize("=>"), Some("толстая стрелка"));
        assert_eq!(symbols.normalize("<-"), Some("стрелка влево"));
        assert_eq!(symbols.normalize("<->"), Some("двунаправленная стрелка"));
    }

    #[test]
    fn test_comparison_operators() {
        let symbols = SymbolNormalizer::new();
        assert_eq!(symbols.normalize(">="), Some("больше или равно"));
        assert_eq!(symbols.normalize("<="), Some("меньше или равно"));
        assert_eq!(symbols.normalize("!="), Some("не равно"));
        assert_eq!(symbols.normalize("=="), Some("равно равно"));
        assert_eq!(symbols.normalize("==="), Some("строго равно"));
        assert_eq!(symbols.normalize("!=="), Some("строго не равно"));
        assert_eq!(symbols.normalize("<"), Some("меньше"));
        assert_eq!(symbols.normalize(">"), Some("больше"));
        assert_eq!(symbols.normalize("="), Some("равно"));
    }

    #[test]
    fn test_logical_and_bitwise() {
        let symbols = SymbolNormalizer::new();
        assert_eq!(symbols.normalize("&&"), Some("и"));
        assert_eq!(symbols.normalize("||"), Some("или"));
        assert_eq!(symbols.normalize("??"), Some("нулевое слияние"));
        assert_eq!(symbols.normalize("?."), Some("опциональная цепочка"));
        assert_eq!(symbols.normalize("&"), Some("амперсанд"));
        assert_eq!(symbols.normalize("|"), Some("пайп"));
        assert_eq!(symbols.normalize("^"), Some("каретка"));
        assert_eq!(symbols.normalize("<<"), Some("сдвиг влево"));
        assert_eq!(symbols.normalize(">>"), Some("сдвиг вправо"));
    }

    #[test]
    fn test_arithmetic_and_assignment() {
        let symbols = SymbolNormalizer::new();
        assert_eq!(symbols.normalize("+"), Some("плюс"));
        assert_eq!(symbols.normalize("**"), Some("степень"));
        assert_eq!(symbols.normalize("//"), Some("целочисленное деление"));
        assert_eq!(symbols.normalize("+="), Some("плюс равно"));
        assert_eq!(symbols.normalize(":="), Some("присваивание"));
        assert_eq!(symbols.normalize("::"), Some("двойное двоеточие"));
    }

    #[test]
    fn test_brackets() {
        let symbols = SymbolNormalizer::new();
        assert_eq!(symbols.normalize("("), Some("открывающая скобка"));
        assert_eq!(symbols.normalize(")"), Some("закрывающая скобка"));
        assert_eq!(symbols.normalize("["), Some("открывающая квадратная скобка"));
        assert_eq!(symbols.normalize("]"), Some("закрывающая квадратная скобка"));
        assert_eq!(symbols.normalize("{"), Some("открывающая фигурная скобка"));
        assert_eq!(symbols.normalize("}"), Some("закрывающая фигурная скобка"));
    }

    #[test]
    fn test_special_characters() {
        let symbols = SymbolNormalizer::new();
        assert_eq!(symbols.normalize("@"), Some("собака"));
        assert_eq!(symbols.normalize("#"), Some("решётка"));
        assert_eq!(symbols.normalize("$"), Some("доллар"));
        assert_eq!(symbols.normalize("..."), Some("троеточие"));
        assert_eq!(symbols.normalize("_"), Some("нижнее подчёркивание"));
        assert_eq!(symbols.normalize("\\"), Some("бэкслэш"));
    }

    #[test]
    fn test_greek_letters() {
        let symbols = SymbolNormalizer::new();
        assert_eq!(symbols.normalize("α"), Some("альфа"));
        assert_eq!(symbols.normalize("λ"), Some("лямбда"));
        assert_eq!(symbols.normalize("Ω"), Some("омега"));
        assert_eq!(symbols.normalize("Σ"), Some("сигма"));
    }

    #[test]
    fn test_math_and_unicode_signs() {
        let symbols = SymbolNormalizer::new();
        assert_eq!(symbols.normalize("≥"), Some("больше или равно"));
        assert_eq!(symbols.normalize("≤"), Some("меньше или равно"));
        assert_eq!(symbols.normalize("©"), Some("копирайт"));
        assert_eq!(symbols.normalize("®"), Some("зарегистрировано"));
        assert_eq!(symbols.normalize("™"), Some("торговая марка"));
        assert_eq!(symbols.normalize("°"), Some("градус"));
        assert_eq!(symbols.normalize("±"), Some("плюс минус"));
    }

    #[test]
    fn test_longest_match_prefix() {
        let symbols = SymbolNormalizer::new();
        assert_eq!(symbols.match_prefix("===x"), Some(("===", "строго равно")));
        assert_eq!(symbols.match_prefix("==x"), Some(("==", "равно равно")));
        assert_eq!(symbols.match_prefix("=x"), Some(("=", "равно")));
        assert_eq!(symbols.match_prefix("->rest"), Some(("->", "стрелка")));
        assert_eq!(symbols.match_prefix("слово"), None);
    }
}
