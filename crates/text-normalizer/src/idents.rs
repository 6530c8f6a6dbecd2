//! Latin identifier splitting and pronunciation.
//!
//! Detects the identifier shape (camelCase, PascalCase, snake_case,
//! kebab-case), splits it into segments, and routes each segment: digit runs
//! to the number engine, all-uppercase segments to the abbreviation
//! normalizer, everything else through the code-word dictionary and the
//! English engine.

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::abbreviations::AbbreviationNormalizer;
use crate::english::EnglishNormalizer;
use crate::numbers::{spell_digits, NumberNormalizer};

/// Spoken forms for words common in identifiers, checked before the English
/// dictionary.
const CODE_WORDS: &[(&str, &str)] = &[
    // Verbs
    ("get", "гет"),
    ("set", "сет"),
    ("is", "из"),
    ("has", "хэз"),
    ("can", "кэн"),
    ("on", "он"),
    ("off", "офф"),
    ("add", "адд"),
    ("remove", "ремув"),
    ("delete", "делит"),
    ("create", "криейт"),
    ("update", "апдейт"),
    ("find", "файнд"),
    ("search", "сёрч"),
    ("load", "лоуд"),
    ("save", "сейв"),
    ("read", "рид"),
    ("write", "райт"),
    ("send", "сенд"),
    ("receive", "ресив"),
    ("fetch", "фетч"),
    ("parse", "парс"),
    ("format", "формат"),
    ("convert", "конверт"),
    ("transform", "трансформ"),
    ("validate", "валидейт"),
    ("check", "чек"),
    ("handle", "хендл"),
    ("process", "процесс"),
    ("execute", "экзекьют"),
    ("run", "ран"),
    ("start", "старт"),
    ("stop", "стоп"),
    ("init", "инит"),
    ("close", "клоуз"),
    ("open", "оупен"),
    ("click", "клик"),
    ("change", "чейндж"),
    ("submit", "сабмит"),
    ("reset", "ризет"),
    ("clear", "клир"),
    ("show", "шоу"),
    ("hide", "хайд"),
    ("toggle", "тоггл"),
    ("enable", "энейбл"),
    ("disable", "дизейбл"),
    ("render", "рендер"),
    ("mount", "маунт"),
    ("dispatch", "диспатч"),
    ("emit", "эмит"),
    ("listen", "лисен"),
    ("subscribe", "сабскрайб"),
    ("connect", "коннект"),
    ("disconnect", "дисконнект"),
    ("encode", "энкоуд"),
    ("decode", "декоуд"),
    ("install", "инсталл"),
    ("print", "принт"),
    ("return", "ретёрн"),
    ("import", "импорт"),
    ("export", "экспорт"),
    // Nouns
    ("user", "юзер"),
    ("data", "дата"),
    ("item", "айтем"),
    ("list", "лист"),
    ("array", "эррей"),
    ("object", "обджект"),
    ("value", "вэлью"),
    ("key", "кей"),
    ("name", "нейм"),
    ("id", "ай ди"),
    ("type", "тайп"),
    ("size", "сайз"),
    ("count", "каунт"),
    ("index", "индекс"),
    ("length", "ленгс"),
    ("status", "статус"),
    ("state", "стейт"),
    ("error", "эррор"),
    ("message", "мессадж"),
    ("result", "резалт"),
    ("response", "респонс"),
    ("request", "реквест"),
    ("event", "ивент"),
    ("action", "экшн"),
    ("handler", "хендлер"),
    ("callback", "коллбэк"),
    ("promise", "промис"),
    ("function", "функшн"),
    ("method", "метод"),
    ("class", "класс"),
    ("instance", "инстанс"),
    ("module", "модуль"),
    ("component", "компонент"),
    ("element", "элемент"),
    ("node", "ноуд"),
    ("child", "чайлд"),
    ("parent", "парент"),
    ("root", "рут"),
    ("path", "пас"),
    ("url", "ю ар эл"),
    ("file", "файл"),
    ("folder", "фолдер"),
    ("directory", "директори"),
    ("config", "конфиг"),
    ("settings", "сеттингс"),
    ("options", "опшнс"),
    ("params", "парамс"),
    ("args", "аргс"),
    ("props", "пропс"),
    ("context", "контекст"),
    ("session", "сешн"),
    ("token", "токен"),
    ("cache", "кэш"),
    ("store", "стор"),
    ("service", "сервис"),
    ("client", "клиент"),
    ("server", "сервер"),
    ("database", "датабейз"),
    ("connection", "коннекшн"),
    ("query", "квери"),
    ("table", "тейбл"),
    ("row", "роу"),
    ("record", "рекорд"),
    ("field", "филд"),
    ("form", "форм"),
    ("input", "инпут"),
    ("output", "аутпут"),
    ("button", "баттон"),
    ("link", "линк"),
    ("image", "имадж"),
    ("text", "текст"),
    ("content", "контент"),
    ("body", "боди"),
    ("header", "хедер"),
    ("footer", "футер"),
    ("menu", "меню"),
    ("modal", "модал"),
    ("icon", "айкон"),
    ("label", "лейбл"),
    ("title", "тайтл"),
    ("info", "инфо"),
    ("total", "тотал"),
    ("date", "дейт"),
    ("time", "тайм"),
    ("timestamp", "таймстэмп"),
    ("version", "вёршн"),
    ("hash", "хэш"),
    ("string", "стринг"),
    ("number", "намбер"),
    ("boolean", "булеан"),
    ("null", "налл"),
    ("undefined", "андефайнд"),
    ("true", "тру"),
    ("false", "фолс"),
    ("const", "конст"),
    ("var", "вар"),
    ("let", "лет"),
    ("def", "деф"),
    ("from", "фром"),
    ("async", "эсинк"),
    ("await", "эвейт"),
    ("try", "трай"),
    ("catch", "кэтч"),
    ("throw", "сроу"),
    ("new", "нью"),
    ("this", "зис"),
    ("self", "селф"),
    ("super", "супер"),
    ("interface", "интерфейс"),
    ("static", "статик"),
    ("public", "паблик"),
    ("private", "прайвит"),
    ("protected", "протектед"),
    ("final", "файнал"),
    // Adjectives and particles
    ("valid", "вэлид"),
    ("invalid", "инвэлид"),
    ("active", "эктив"),
    ("enabled", "энейблд"),
    ("disabled", "дизейблд"),
    ("visible", "визибл"),
    ("hidden", "хидден"),
    ("selected", "селектед"),
    ("loading", "лоудинг"),
    ("loaded", "лоудед"),
    ("pending", "пендинг"),
    ("success", "саксесс"),
    ("failed", "фейлд"),
    ("empty", "эмпти"),
    ("full", "фулл"),
    ("old", "олд"),
    ("first", "фёрст"),
    ("last", "ласт"),
    ("next", "некст"),
    ("prev", "прев"),
    ("previous", "привиас"),
    ("current", "каррент"),
    ("default", "дефолт"),
    ("custom", "кастом"),
    ("primary", "праймари"),
    ("secondary", "секондари"),
    ("main", "мейн"),
    ("base", "бейз"),
    ("max", "макс"),
    ("min", "мин"),
    ("all", "олл"),
    ("none", "нан"),
    ("any", "эни"),
    ("my", "май"),
    ("your", "юр"),
    ("to", "ту"),
    ("by", "бай"),
    ("with", "виз"),
    ("for", "фор"),
    ("of", "оф"),
    ("in", "ин"),
    ("out", "аут"),
    ("up", "ап"),
    ("down", "даун"),
    ("no", "ноу"),
    ("not", "нот"),
    ("or", "ор"),
    ("and", "энд"),
    ("if", "иф"),
    ("else", "элс"),
    ("when", "вен"),
    ("while", "вайл"),
    ("do", "ду"),
    ("case", "кейс"),
    ("switch", "свитч"),
    ("break", "брейк"),
    ("continue", "континью"),
    // Patterns
    ("timeout", "таймаут"),
    ("repository", "репозитори"),
    ("controller", "контроллер"),
    ("manager", "менеджер"),
    ("factory", "фэктори"),
    ("builder", "билдер"),
    ("adapter", "адаптер"),
    ("wrapper", "врэппер"),
    ("helper", "хелпер"),
    ("util", "утил"),
    ("utils", "утилз"),
    ("common", "коммон"),
    ("shared", "шэрд"),
    ("global", "глобал"),
    ("local", "локал"),
    ("dir", "дир"),
    ("package", "пакет"),
    ("dom", "дом"),
    ("router", "роутер"),
    ("react", "риакт"),
    ("vue", "вью"),
    ("variable", "вэриабл"),
    ("side", "сайд"),
    ("dry", "драй"),
    ("pip", "пип"),
    // Python builtins
    ("str", "стр"),
    ("repr", "репр"),
    ("len", "лен"),
    ("dict", "дикт"),
    ("int", "инт"),
    ("float", "флоат"),
    ("bool", "бул"),
    // Spelled specially
    ("api", "эй пи ай"),
    ("html", "эйч ти эм эл"),
    ("http", "эйч ти ти пи"),
    ("sql", "эс кью эл"),
    ("utf", "ю ти эф"),
    ("sha", "ша"),
    ("json", "джейсон"),
    // Placeholder names
    ("hello", "хелло"),
    ("world", "ворлд"),
    ("plus", "плас"),
    ("foo", "фу"),
    ("bar", "бар"),
    ("baz", "баз"),
    ("test", "тест"),
    ("example", "экзампл"),
    ("demo", "демо"),
    ("sample", "сэмпл"),
    // Single letters common in code
    ("x", "икс"),
    ("y", "игрек"),
    ("z", "зет"),
    ("a", "эй"),
    ("b", "би"),
    ("i", "ай"),
    ("j", "джей"),
    ("k", "кей"),
    ("n", "эн"),
    ("m", "эм"),
];

static CODE_WORDS_MAP: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| CODE_WORDS.iter().copied().collect());

/// Splits identifiers into words and speaks them.
#[derive(Debug)]
pub struct IdentifierSplitter {
    numbers: NumberNormalizer,
    abbreviations: Arc<AbbreviationNormalizer>,
    english: Arc<EnglishNormalizer>,
}

impl IdentifierSplitter {
    pub fn new(
        abbreviations: Arc<AbbreviationNormalizer>,
        english: Arc<EnglishNormalizer>,
    ) -> Self {
        Self {
            numbers: NumberNormalizer::new(),
            abbreviations,
            english,
        }
    }

    /// camelCase / PascalCase.
    pub fn camel(&self, ident: &str) -> String {
        self.speak_segments(split_camel(ident))
    }

    /// snake_case; leading/trailing underscores (dunders) are dropped.
    pub fn snake(&self, ident: &str) -> String {
        let segments = ident
            .split('_')
            .filter(|s| !s.is_empty())
            .flat_map(split_camel)
            .collect::<Vec<_>>();
        self.speak_segments(segments)
    }

    /// kebab-case.
    pub fn kebab(&self, ident: &str) -> String {
        let segments = ident
            .split('-')
            .filter(|s| !s.is_empty())
            .flat_map(split_camel)
            .collect::<Vec<_>>();
        self.speak_segments(segments)
    }

    /// A single segment: digits to the number engine, all-caps to the
    /// abbreviation table, otherwise dictionary plus English fallback.
    pub fn word(&self, segment: &str) -> String {
        if segment.is_empty() {
            return String::new();
        }
        if segment.chars().all(|c| c.is_ascii_digit()) {
            return self
                .numbers
                .integer(segment)
                .unwrap_or_else(|_| spell_digits(segment));
        }
        let lower = segment.to_lowercase();
        if let Some(spoken) = CODE_WORDS_MAP.get(lower.as_str()) {
            return (*spoken).to_string();
        }
        if segment.chars().count() >= 2
            && segment.chars().all(|c| c.is_ascii_uppercase())
        {
            return self.abbreviations.normalize(segment);
        }
        self.english.normalize(segment).0
    }

    fn speak_segments(&self, segments: Vec<&str>) -> String {
        segments
            .iter()
            .map(|s| self.word(s))
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Upper,
    Lower,
    Digit,
    Other,
}

fn classify(c: char) -> CharClass {
    if c.is_ascii_uppercase() {
        CharClass::Upper
    } else if c.is_ascii_lowercase() {
        CharClass::Lower
    } else if c.is_ascii_digit() {
        CharClass::Digit
    } else {
        CharClass::Other
    }
}

/// Split a camel/Pascal identifier on case and digit boundaries:
/// lowercase to uppercase, end of an uppercase run before a lowercase
/// letter (`XMLHttp` -> `XML`, `Http`), and letter/digit transitions.
pub fn split_camel(ident: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = ident.char_indices().collect();
    let mut segments = Vec::new();
    let mut seg_start: Option<usize> = None;

    for i in 0..chars.len() {
        let (byte_idx, c) = chars[i];
        let class = classify(c);

        if class == CharClass::Other {
            if let Some(start) = seg_start.take() {
                segments.push(&ident[start..byte_idx]);
            }
            continue;
        }

        let boundary = match seg_start {
            None => true,
            Some(_) => {
                let prev = classify(chars[i - 1].1);
                let next = chars.get(i + 1).map(|&(_, n)| classify(n));
                match (prev, class) {
                    (CharClass::Lower, CharClass::Upper) => true,
                    (CharClass::Upper, CharClass::Upper) => next == Some(CharClass::Lower),
                    (CharClass::Digit, CharClass::Upper | CharClass::Lower) => true,
                    (CharClass::Upper | CharClass::Lower, CharClass::Digit) => true,
                    _ => false,
                }
            }
        };

        if boundary {
            if let Some(start) = seg_start {
                segments.push(&ident[start..byte_idx]);
            }
            seg_start = Some(byte_idx);
        }
    }

    if let Some(start) = seg_start {
        segments.push(&ident[start..]);
    }
    segments
}
