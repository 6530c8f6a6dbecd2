//! English words to Russian phonetic spelling.
//!
//! Three layers, queried in order: multi-word phrases (longest first), the
//! IT-term dictionary merged with user additions, and a deterministic
//! letter-level transliteration with greedy digraph matching. Words that
//! reach the fallback can be reported through the diagnostics so users can
//! extend the dictionary.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use tracing::debug;

/// IT-domain words whose pronunciation differs from the letter fallback.
const IT_TERMS: &[(&str, &str)] = &[
    // Programming languages
    ("haskell", "хаскелл"),
    ("ocaml", "окамл"),
    ("erlang", "эрланг"),
    ("elixir", "эликсир"),
    ("clojure", "кложур"),
    ("prolog", "пролог"),
    ("fortran", "фортран"),
    ("cobol", "кобол"),
    ("pascal", "паскаль"),
    ("delphi", "делфи"),
    ("php", "пи эйч пи"),
    ("sql", "эс кью эль"),
    ("html", "эйч ти эм эль"),
    ("css", "си эс эс"),
    ("xml", "икс эм эль"),
    ("json", "джейсон"),
    ("yaml", "ямл"),
    ("toml", "томл"),
    ("js", "джи эс"),
    ("ts", "ти эс"),
    ("python", "пайтон"),
    ("typescript", "тайпскрипт"),
    ("rust", "раст"),
    ("golang", "голанг"),
    ("kotlin", "котлин"),
    // Common code terms
    ("eval", "эвал"),
    ("plus", "плас"),
    ("float", "флоат"),
    ("double", "дабл"),
    ("trait", "трейт"),
    ("traits", "трейтс"),
    ("impl", "импл"),
    ("async", "асинк"),
    ("await", "эвейт"),
    ("const", "конст"),
    ("static", "статик"),
    ("override", "оверрайд"),
    ("virtual", "виртуал"),
    ("abstract", "абстракт"),
    ("private", "прайвит"),
    ("protected", "протектед"),
    ("generic", "дженерик"),
    ("template", "темплейт"),
    // Git and process
    ("feature", "фича"),
    ("branch", "бранч"),
    ("merge", "мёрдж"),
    ("commit", "коммит"),
    ("pull", "пулл"),
    ("checkout", "чекаут"),
    ("rebase", "рибейз"),
    ("stash", "стэш"),
    ("review", "ревью"),
    ("deploy", "деплой"),
    ("release", "релиз"),
    ("debug", "дебаг"),
    ("bug", "баг"),
    ("refactor", "рефакторинг"),
    ("agile", "эджайл"),
    ("scrum", "скрам"),
    // Architecture
    ("framework", "фреймворк"),
    ("library", "лайбрари"),
    ("package", "пакет"),
    ("module", "модуль"),
    ("function", "функция"),
    ("method", "метод"),
    ("class", "класс"),
    ("object", "объект"),
    ("interface", "интерфейс"),
    ("callback", "коллбэк"),
    ("promise", "промис"),
    ("handler", "хендлер"),
    ("listener", "листенер"),
    ("middleware", "мидлвэр"),
    ("endpoint", "эндпоинт"),
    ("router", "роутер"),
    ("controller", "контроллер"),
    ("service", "сервис"),
    ("repository", "репозиторий"),
    // Data
    ("cache", "кэш"),
    ("queue", "кью"),
    ("array", "массив"),
    ("string", "строка"),
    ("boolean", "булеан"),
    ("null", "налл"),
    ("undefined", "андефайнд"),
    ("default", "дефолт"),
    ("index", "индекс"),
    ("query", "квери"),
    // Infrastructure
    ("docker", "докер"),
    ("container", "контейнер"),
    ("kubernetes", "кубернетис"),
    ("cluster", "кластер"),
    ("node", "нода"),
    ("pod", "под"),
    ("nginx", "энджинкс"),
    ("backup", "бэкап"),
    ("client", "клиент"),
    // Testing and build
    ("test", "тест"),
    ("mock", "мок"),
    ("stub", "стаб"),
    ("spec", "спек"),
    ("build", "билд"),
    ("bundle", "бандл"),
    ("compile", "компайл"),
    ("webpack", "вебпак"),
    // Frameworks and tools
    ("react", "риакт"),
    ("angular", "ангуляр"),
    ("vue", "вью"),
    ("svelte", "свелт"),
    ("next", "некст"),
    ("express", "экспресс"),
    ("django", "джанго"),
    ("flask", "фласк"),
    ("fastapi", "фаст эй пи ай"),
    ("laravel", "ларавел"),
    ("redis", "редис"),
    ("mongo", "монго"),
    ("postgres", "постгрес"),
    ("github", "гитхаб"),
    ("jira", "джира"),
    ("slack", "слэк"),
    ("postman", "постман"),
    // Day-to-day vocabulary
    ("request", "реквест"),
    ("trace", "трейс"),
    ("daily", "дейли"),
    ("standup", "стендап"),
    ("hot", "хот"),
    ("reload", "релоуд"),
    ("tech", "тек"),
    ("debt", "дет"),
    ("code", "код"),
    ("smell", "смелл"),
    ("best", "бест"),
    ("practice", "практис"),
    ("use", "юз"),
    ("case", "кейс"),
    // Path and URL vocabulary
    ("home", "хоум"),
    ("docs", "докс"),
    ("user", "юзер"),
    ("users", "юзерс"),
    ("admin", "админ"),
    ("support", "саппорт"),
    ("config", "конфиг"),
    ("data", "дата"),
    ("files", "файлс"),
    ("download", "даунлоад"),
    ("upload", "аплоад"),
    ("report", "репорт"),
    ("documents", "документс"),
    ("localhost", "локалхост"),
    ("api", "эй пи ай"),
    ("app", "апп"),
    ("web", "веб"),
    ("src", "сорс"),
    ("tmp", "темп"),
    ("etc", "етс"),
    ("opt", "опт"),
    // File formats
    ("pdf", "пдф"),
    ("doc", "док"),
    ("txt", "тэкст"),
    ("csv", "си эс ви"),
    ("png", "пнг"),
    ("jpg", "джэйпег"),
    ("svg", "эс ви джи"),
    // Misc
    ("hello", "хеллоу"),
    ("world", "ворлд"),
    ("example", "экзампл"),
    ("tutorial", "тьюториал"),
    ("company", "компани"),
    ("repo", "репо"),
];

/// Multi-word phrases, matched before single-word lookup.
pub const MULTI_WORD_PHRASES: &[(&str, &str)] = &[
    ("daily standup", "дейли стендап"),
    ("pull request", "пулл реквест"),
    ("merge request", "мёрдж реквест"),
    ("best practice", "бест практис"),
    ("code review", "код ревью"),
    ("feature branch", "фича бранч"),
    ("stack trace", "стэк трейс"),
    ("live reload", "лайв релоуд"),
    ("code smell", "код смелл"),
    ("hot reload", "хот релоуд"),
    ("tech debt", "тек дет"),
    ("edge case", "эдж кейс"),
    ("hot fix", "хот фикс"),
    ("dry run", "драй ран"),
    ("use case", "юз кейс"),
];

/// Letter-level transliteration. Digraphs and longer clusters come first;
/// matching is greedy left to right.
const TRANSLIT_MAP: &[(&str, &str)] = &[
    ("tion", "шн"),
    ("sion", "жн"),
    ("sh", "ш"),
    ("ch", "ч"),
    ("th", "с"),
    ("ph", "ф"),
    ("wh", "в"),
    ("ck", "к"),
    ("gh", "г"),
    ("ng", "нг"),
    ("qu", "кв"),
    ("ee", "и"),
    ("oo", "у"),
    ("ea", "и"),
    ("ou", "ау"),
    ("ow", "оу"),
    ("ai", "эй"),
    ("ay", "эй"),
    ("ey", "эй"),
    ("ei", "эй"),
    ("ie", "и"),
    ("oa", "оу"),
    ("oi", "ой"),
    ("oy", "ой"),
    ("au", "о"),
    ("aw", "о"),
    ("ew", "ью"),
    ("a", "а"),
    ("b", "б"),
    ("c", "к"),
    ("d", "д"),
    ("e", "е"),
    ("f", "ф"),
    ("g", "г"),
    ("h", "х"),
    ("i", "и"),
    ("j", "дж"),
    ("k", "к"),
    ("l", "л"),
    ("m", "м"),
    ("n", "н"),
    ("o", "о"),
    ("p", "п"),
    ("q", "к"),
    ("r", "р"),
    ("s", "с"),
    ("t", "т"),
    ("u", "у"),
    ("v", "в"),
    ("w", "в"),
    ("x", "кс"),
    ("y", "и"),
    ("z", "з"),
];

static IT_TERMS_MAP: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| IT_TERMS.iter().copied().collect());

/// Transliterates English words to Russian phonetic spelling.
#[derive(Debug, Default)]
pub struct EnglishNormalizer {
    custom_terms: HashMap<String, String>,
}

impl EnglishNormalizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build with user-supplied terms layered over the built-in dictionary.
    /// Keys are lowercased; validation happens at configure time.
    pub fn with_custom_terms(custom: impl IntoIterator<Item = (String, String)>) -> Self {
        let custom_terms = custom
            .into_iter()
            .map(|(k, v)| (k.to_lowercase(), v))
            .collect();
        Self { custom_terms }
    }

    /// Dictionary-only lookup; `None` when the word would need the fallback.
    pub fn lookup(&self, word: &str) -> Option<&str> {
        let lower = word.to_lowercase();
        if let Some(spoken) = self.custom_terms.get(&lower) {
            return Some(spoken);
        }
        IT_TERMS_MAP.get(lower.as_str()).copied()
    }

    /// Spoken form of a word: phrase table, custom terms, IT terms, then
    /// the letter-level fallback. Returns the text and whether the fallback
    /// produced it.
    pub fn normalize(&self, word: &str) -> (String, bool) {
        if word.is_empty() {
            return (String::new(), false);
        }

        let lower = word.to_lowercase();
        for (phrase, spoken) in MULTI_WORD_PHRASES {
            if lower == *phrase {
                return ((*spoken).to_string(), false);
            }
        }
        if let Some(spoken) = self.lookup(&lower) {
            return (spoken.to_string(), false);
        }
        debug!(word = %lower, "no dictionary entry, using letter fallback");
        (transliterate(&lower), true)
    }
}

/// Deterministic letter-level fallback with greedy digraph matching.
pub fn transliterate(word: &str) -> String {
    let lower = word.to_lowercase();
    let mut result = String::with_capacity(lower.len() * 2);
    let mut rest = lower.as_str();

    'outer: while !rest.is_empty() {
        for (pattern, spoken) in TRANSLIT_MAP {
            if let Some(tail) = rest.strip_prefix(pattern) {
                result.push_str(spoken);
                rest = tail;
                continue 'outer;
            }
        }
        // Not a Latin letter (digit, punctuation); keep as-is.
        let mut chars = rest.chars();
        if let Some(c) = chars.next() {
            result.push(c);
        }
        rest = chars.as_str();
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dictionary_lookup() {
        let english = EnglishNormalizer::new();
        assert_eq!(english.normalize("docker"), ("докер".to_string(), false));
        assert_eq!(english.normalize("Docker"), ("докер".to_string(), false));
        assert_eq!(english.normalize("DOCKER"), ("докер".to_string(), false));
        assert_eq!(english.normalize("test"), ("тест".to_string(), false));
    }

    #[test]
    fn test_phrases_before_words() {
        let english = EnglishNormalizer::new();
        assert_eq!(
            english.normalize("pull request"),
            ("пулл реквест".to_string(), false)
        );
        assert_eq!(
            english.normalize("Code Review"),
            ("код ревью".to_string(), false)
        );
    }

    #[test]
    fn test_custom_terms_win() {
        let english = EnglishNormalizer::with_custom_terms([(
            "Docker".to_string(),
            "докир".to_string(),
        )]);
        assert_eq!(english.normalize("docker"), ("докир".to_string(), false));
        // Built-in entries still resolve.
        assert_eq!(english.normalize("redis"), ("редис".to_string(), false));
    }

    #[test]
    fn test_fallback_is_flagged() {
        let english = EnglishNormalizer::new();
        let (spoken, unknown) = english.normalize("frobnicate");
        assert!(unknown);
        assert!(!spoken.is_empty());
        assert!(spoken.chars().all(|c| !c.is_ascii_alphabetic()));
    }

    #[test]
    fn test_transliterate_digraphs() {
        assert_eq!(transliterate("the"), "се");
        assert_eq!(transliterate("shell"), "шелл");
        assert_eq!(transliterate("check"), "чек");
        assert_eq!(transliterate("phone"), "фоне");
        assert_eq!(transliterate("get"), "гет");
        assert_eq!(transliterate("my"), "ми");
        assert_eq!(transliterate("quick"), "квик");
    }

    #[test]
    fn test_transliterate_keeps_non_letters() {
        assert_eq!(transliterate("a1b"), "а1б");
    }

    #[test]
    fn test_transliterate_is_deterministic() {
        assert_eq!(transliterate("Hello"), transliterate("hello"));
    }
}
