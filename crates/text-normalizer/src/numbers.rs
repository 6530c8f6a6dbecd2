//! Number to words conversion with Russian declension.
//!
//! Covers cardinals with grammatical gender, genitive cardinals and ordinals
//! (for ranges and dates), the numeral agreement rule for unit nouns, and
//! the spoken forms of floats, percentages, size units, versions, dates, and
//! times.

use prep_core::{PrepError, PrepResult};

/// Grammatical gender for the final digit words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gender {
    /// один, два.
    #[default]
    Masculine,
    /// одна, две.
    Feminine,
    /// одно, два.
    Neuter,
}

/// Which inflected form of an ordinal to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrdinalForm {
    /// первый.
    Masculine,
    /// первая.
    Feminine,
    /// первое.
    Neuter,
    /// первого.
    GenitiveMasculine,
}

const RU_ONES: [&str; 20] = [
    "",
    "один",
    "два",
    "три",
    "четыре",
    "пять",
    "шесть",
    "семь",
    "восемь",
    "девять",
    "десять",
    "одиннадцать",
    "двенадцать",
    "тринадцать",
    "четырнадцать",
    "пятнадцать",
    "шестнадцать",
    "семнадцать",
    "восемнадцать",
    "девятнадцать",
];

const RU_ONES_FEM: [&str; 3] = ["", "одна", "две"];
const RU_ONES_NEUT: [&str; 3] = ["", "одно", "два"];

const RU_TENS: [&str; 10] = [
    "",
    "",
    "двадцать",
    "тридцать",
    "сорок",
    "пятьдесят",
    "шестьдесят",
    "семьдесят",
    "восемьдесят",
    "девяносто",
];

const RU_HUNDREDS: [&str; 10] = [
    "",
    "сто",
    "двести",
    "триста",
    "четыреста",
    "пятьсот",
    "шестьсот",
    "семьсот",
    "восемьсот",
    "девятьсот",
];

const RU_ONES_GEN: [&str; 20] = [
    "",
    "одного",
    "двух",
    "трёх",
    "четырёх",
    "пяти",
    "шести",
    "семи",
    "восьми",
    "девяти",
    "десяти",
    "одиннадцати",
    "двенадцати",
    "тринадцати",
    "четырнадцати",
    "пятнадцати",
    "шестнадцати",
    "семнадцати",
    "восемнадцати",
    "девятнадцати",
];

const RU_TENS_GEN: [&str; 10] = [
    "",
    "",
    "двадцати",
    "тридцати",
    "сорока",
    "пятидесяти",
    "шестидесяти",
    "семидесяти",
    "восьмидесяти",
    "девяноста",
];

const RU_HUNDREDS_GEN: [&str; 10] = [
    "",
    "ста",
    "двухсот",
    "трёхсот",
    "четырёхсот",
    "пятисот",
    "шестисот",
    "семисот",
    "восьмисот",
    "девятисот",
];

/// Ordinals in masculine nominative; other forms derive from these.
const RU_ORD_ONES: [&str; 20] = [
    "нулевой",
    "первый",
    "второй",
    "третий",
    "четвёртый",
    "пятый",
    "шестой",
    "седьмой",
    "восьмой",
    "девятый",
    "десятый",
    "одиннадцатый",
    "двенадцатый",
    "тринадцатый",
    "четырнадцатый",
    "пятнадцатый",
    "шестнадцатый",
    "семнадцатый",
    "восемнадцатый",
    "девятнадцатый",
];

const RU_ORD_TENS: [&str; 10] = [
    "",
    "",
    "двадцатый",
    "тридцатый",
    "сороковой",
    "пятидесятый",
    "шестидесятый",
    "семидесятый",
    "восьмидесятый",
    "девяностый",
];

const RU_ORD_HUNDREDS: [&str; 10] = [
    "",
    "сотый",
    "двухсотый",
    "трёхсотый",
    "четырёхсотый",
    "пятисотый",
    "шестисотый",
    "семисотый",
    "восьмисотый",
    "девятисотый",
];

/// Numeral prefixes for round-thousand ordinals (двухтысячный, ...).
const RU_THOUSAND_PREFIX: [&str; 10] = [
    "", "", "двух", "трёх", "четырёх", "пяти", "шести", "семи", "восьми", "девяти",
];

const DIGITS: [&str; 10] = [
    "ноль",
    "один",
    "два",
    "три",
    "четыре",
    "пять",
    "шесть",
    "семь",
    "восемь",
    "девять",
];

/// Month names in genitive case, 1-indexed.
const MONTHS_GENITIVE: [&str; 13] = [
    "",
    "января",
    "февраля",
    "марта",
    "апреля",
    "мая",
    "июня",
    "июля",
    "августа",
    "сентября",
    "октября",
    "ноября",
    "декабря",
];

/// Size units: key, (nominative, genitive singular, genitive plural), gender.
const SIZE_UNITS: &[(&str, [&str; 3], Gender)] = &[
    ("kb", ["килобайт", "килобайта", "килобайт"], Gender::Masculine),
    ("mb", ["мегабайт", "мегабайта", "мегабайт"], Gender::Masculine),
    ("gb", ["гигабайт", "гигабайта", "гигабайт"], Gender::Masculine),
    ("tb", ["терабайт", "терабайта", "терабайт"], Gender::Masculine),
    ("кб", ["килобайт", "килобайта", "килобайт"], Gender::Masculine),
    ("мб", ["мегабайт", "мегабайта", "мегабайт"], Gender::Masculine),
    ("гб", ["гигабайт", "гигабайта", "гигабайт"], Gender::Masculine),
    ("тб", ["терабайт", "терабайта", "терабайт"], Gender::Masculine),
    (
        "ms",
        ["миллисекунда", "миллисекунды", "миллисекунд"],
        Gender::Feminine,
    ),
    ("sec", ["секунда", "секунды", "секунд"], Gender::Feminine),
    ("min", ["минута", "минуты", "минут"], Gender::Feminine),
    ("hr", ["час", "часа", "часов"], Gender::Masculine),
    ("px", ["пиксель", "пикселя", "пикселей"], Gender::Masculine),
    ("em", ["эм", "эм", "эм"], Gender::Masculine),
    ("rem", ["рэм", "рэм", "рэм"], Gender::Masculine),
    ("vh", ["ви эйч", "ви эйч", "ви эйч"], Gender::Masculine),
    (
        "vw",
        ["ви дабл ю", "ви дабл ю", "ви дабл ю"],
        Gender::Masculine,
    ),
];

/// Pre-release suffixes in version strings.
const VERSION_SUFFIXES: &[(&str, &str)] = &[
    ("alpha", "альфа"),
    ("beta", "бета"),
    ("rc", "эр си"),
    ("dev", "дев"),
    ("stable", "стейбл"),
    ("release", "релиз"),
];

/// Russian plural selection for a numeral: (nominative singular,
/// genitive singular, genitive plural).
pub fn pluralize<'a>(n: i64, forms: [&'a str; 3]) -> &'a str {
    let n = n.abs();
    let last_two = n % 100;
    if (11..=19).contains(&last_two) {
        return forms[2];
    }
    match n % 10 {
        1 => forms[0],
        2..=4 => forms[1],
        _ => forms[2],
    }
}

/// Convert the 0-999 block to words, with gender applied to the trailing
/// one/two.
fn hundreds_to_words(n: i64, gender: Gender) -> String {
    let n = n.unsigned_abs() as usize;
    if n == 0 {
        return String::new();
    }

    let mut parts = Vec::new();

    let h = n / 100;
    if h > 0 {
        parts.push(RU_HUNDREDS[h].to_string());
    }

    let remainder = n % 100;
    if remainder > 0 {
        if remainder < 20 {
            parts.push(gendered_one(remainder, gender));
        } else {
            let tens = remainder / 10;
            let ones = remainder % 10;
            parts.push(RU_TENS[tens].to_string());
            if ones > 0 {
                parts.push(gendered_one(ones, gender));
            }
        }
    }

    parts.join(" ")
}

fn gendered_one(n: usize, gender: Gender) -> String {
    match gender {
        Gender::Feminine if n <= 2 => RU_ONES_FEM[n].to_string(),
        Gender::Neuter if n <= 2 => RU_ONES_NEUT[n].to_string(),
        _ => RU_ONES[n].to_string(),
    }
}

/// Cardinal reading of a number, up to the billions.
pub fn cardinal(num: i64, gender: Gender) -> String {
    if num == 0 {
        return "ноль".to_string();
    }

    let mut parts = Vec::new();
    let mut n = num;

    if n < 0 {
        parts.push("минус".to_string());
        n = -n;
    }

    let billions = n / 1_000_000_000;
    if billions > 0 {
        parts.push(hundreds_to_words(billions, Gender::Masculine));
        parts.push(
            pluralize(billions, ["миллиард", "миллиарда", "миллиардов"]).to_string(),
        );
    }
    n %= 1_000_000_000;

    let millions = n / 1_000_000;
    if millions > 0 {
        parts.push(hundreds_to_words(millions, Gender::Masculine));
        parts.push(pluralize(millions, ["миллион", "миллиона", "миллионов"]).to_string());
    }
    n %= 1_000_000;

    // Thousands are feminine in Russian.
    let thousands = n / 1_000;
    if thousands > 0 {
        parts.push(hundreds_to_words(thousands, Gender::Feminine));
        parts.push(pluralize(thousands, ["тысяча", "тысячи", "тысяч"]).to_string());
    }
    n %= 1_000;

    if n > 0 || parts.is_empty() {
        parts.push(hundreds_to_words(n, gender));
    }

    parts
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn hundreds_to_words_genitive(n: i64) -> String {
    let n = n.unsigned_abs() as usize;
    if n == 0 {
        return String::new();
    }

    let mut parts = Vec::new();

    let h = n / 100;
    if h > 0 {
        parts.push(RU_HUNDREDS_GEN[h]);
    }

    let remainder = n % 100;
    if remainder > 0 {
        if remainder < 20 {
            parts.push(RU_ONES_GEN[remainder]);
        } else {
            parts.push(RU_TENS_GEN[remainder / 10]);
            if remainder % 10 > 0 {
                parts.push(RU_ONES_GEN[remainder % 10]);
            }
        }
    }

    parts.join(" ")
}

/// Genitive cardinal, as required after «от» and «до».
pub fn cardinal_genitive(num: i64) -> String {
    if num == 0 {
        return "нуля".to_string();
    }

    let mut parts = Vec::new();
    let mut n = num;

    if n < 0 {
        parts.push("минус".to_string());
        n = -n;
    }

    let millions = n / 1_000_000;
    if millions > 0 {
        parts.push(hundreds_to_words_genitive(millions));
        parts.push(pluralize(millions, ["миллиона", "миллионов", "миллионов"]).to_string());
    }
    n %= 1_000_000;

    let thousands = n / 1_000;
    if thousands > 0 {
        if thousands == 1 {
            parts.push("одной тысячи".to_string());
        } else {
            parts.push(hundreds_to_words_genitive(thousands));
            parts.push(pluralize(thousands, ["тысячи", "тысяч", "тысяч"]).to_string());
        }
    }
    n %= 1_000;

    if n > 0 {
        parts.push(hundreds_to_words_genitive(n));
    }

    parts
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Inflect a masculine-nominative ordinal word into the requested form.
fn inflect_ordinal(word: &str, form: OrdinalForm) -> String {
    if word == "третий" {
        return match form {
            OrdinalForm::Masculine => "третий".to_string(),
            OrdinalForm::Feminine => "третья".to_string(),
            OrdinalForm::Neuter => "третье".to_string(),
            OrdinalForm::GenitiveMasculine => "третьего".to_string(),
        };
    }
    let stem = word
        .strip_suffix("ый")
        .or_else(|| word.strip_suffix("ой"))
        .or_else(|| word.strip_suffix("ий"))
        .unwrap_or(word);
    let ending = match form {
        OrdinalForm::Masculine => return word.to_string(),
        OrdinalForm::Feminine => "ая",
        OrdinalForm::Neuter => "ое",
        OrdinalForm::GenitiveMasculine => "ого",
    };
    format!("{stem}{ending}")
}

/// Ordinal reading: cardinal prefix plus one inflected final word
/// (две тысячи двадцать четвёртый).
pub fn ordinal(num: i64, form: OrdinalForm) -> String {
    let n = num.abs();

    // Round thousands collapse into a single compound word.
    if n >= 1_000 && n % 1_000 == 0 && n / 1_000 <= 9 {
        let word = format!("{}тысячный", RU_THOUSAND_PREFIX[(n / 1_000) as usize]);
        return inflect_ordinal(&word, form);
    }

    let (prefix_value, last_word) = if n == 0 {
        (0, RU_ORD_ONES[0].to_string())
    } else if (1..=19).contains(&(n % 100)) {
        (n - n % 100, RU_ORD_ONES[(n % 100) as usize].to_string())
    } else if n % 100 != 0 {
        // Tens position: n % 10 == 0 here, teens handled above.
        (n - n % 100, RU_ORD_TENS[((n % 100) / 10) as usize].to_string())
    } else if n % 1_000 != 0 {
        (
            n - n % 1_000,
            RU_ORD_HUNDREDS[((n % 1_000) / 100) as usize].to_string(),
        )
    } else {
        // Rare beyond the shapes above; read the bulk as a cardinal.
        return format!("{} {}", cardinal(n, Gender::Masculine), inflect_ordinal("нулевой", form));
    };

    let inflected = inflect_ordinal(&last_word, form);
    if prefix_value == 0 {
        inflected
    } else {
        format!("{} {}", cardinal(prefix_value, Gender::Masculine), inflected)
    }
}

/// Spell a digit string one digit at a time.
pub fn spell_digits(digits: &str) -> String {
    digits
        .chars()
        .filter_map(|c| c.to_digit(10).map(|d| DIGITS[d as usize]))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Normalizes numbers, dates, times, percentages, sizes, and versions.
#[derive(Debug, Default)]
pub struct NumberNormalizer;

impl NumberNormalizer {
    pub fn new() -> Self {
        Self
    }

    fn parse(&self, num_str: &str) -> PrepResult<i64> {
        num_str
            .parse::<i64>()
            .map_err(|_| PrepError::malformed_number(num_str))
    }

    /// Cardinal reading of an integer literal.
    pub fn integer(&self, num_str: &str) -> PrepResult<String> {
        Ok(cardinal(self.parse(num_str)?, Gender::Masculine))
    }

    /// Float: integer part, separator word, then fraction digits one by one.
    ///
    /// The separator is «точка» for a dot and «запятая» for a comma.
    pub fn float(&self, float_str: &str) -> PrepResult<String> {
        let comma = float_str.contains(',');
        let normalized = float_str.replace(',', ".");

        let Some((int_part, frac_part)) = normalized.split_once('.') else {
            return self.integer(&normalized);
        };

        let int_words = self.integer(int_part)?;
        let frac_words = spell_digits(frac_part);
        let separator = if comma { "запятая" } else { "точка" };
        Ok(format!("{int_words} {separator} {frac_words}"))
    }

    /// Percentage with «процент» agreement.
    pub fn percentage(&self, num_str: &str, is_float: bool) -> PrepResult<String> {
        if is_float {
            let words = self.float(num_str)?;
            return Ok(format!("{words} процентов"));
        }
        let n = self.parse(num_str)?;
        let suffix = pluralize(n, ["процент", "процента", "процентов"]);
        Ok(format!("{} {}", cardinal(n, Gender::Masculine), suffix))
    }

    /// Range as «от X до Y» with genitive endpoints; year-shaped endpoints
    /// (1000-9999) read as genitive ordinals.
    pub fn range(&self, start_str: &str, end_str: &str) -> PrepResult<String> {
        let start = self.parse(start_str)?;
        let end = self.parse(end_str)?;
        Ok(format!(
            "от {} до {}",
            Self::range_endpoint(start),
            Self::range_endpoint(end)
        ))
    }

    fn range_endpoint(n: i64) -> String {
        if (1_000..=9_999).contains(&n) {
            ordinal(n, OrdinalForm::GenitiveMasculine)
        } else {
            cardinal_genitive(n)
        }
    }

    /// Number plus a size-unit suffix, declined by the numeral rule.
    pub fn size(&self, num_str: &str, unit: &str) -> PrepResult<String> {
        let unit_lower = unit.to_lowercase();
        let (_, forms, gender) = SIZE_UNITS
            .iter()
            .find(|(key, _, _)| *key == unit_lower)
            .ok_or_else(|| PrepError::unknown_unit(unit))?;

        if num_str.contains('.') || num_str.contains(',') {
            let words = self.float(num_str)?;
            return Ok(format!("{} {}", words, forms[2]));
        }

        let n = self.parse(num_str)?;
        Ok(format!(
            "{} {}",
            cardinal(n, *gender),
            pluralize(n, *forms)
        ))
    }

    /// Version string: components as cardinals joined by «точка»; a leading
    /// `v` is silent; pre-release suffixes use the suffix table.
    pub fn version(&self, ver_str: &str) -> PrepResult<String> {
        let trimmed = ver_str.trim_start_matches(['v', 'V']);
        let mut words = Vec::new();

        for (i, component) in trimmed.split('.').enumerate() {
            if i > 0 {
                words.push("точка".to_string());
            }
            // A dash introduces a suffix like "rc1"; the dash itself is silent.
            for piece in component.split('-').filter(|p| !p.is_empty()) {
                words.push(self.version_piece(piece)?);
            }
        }

        Ok(words.join(" "))
    }

    fn version_piece(&self, piece: &str) -> PrepResult<String> {
        if piece.chars().all(|c| c.is_ascii_digit()) {
            return self.integer(piece);
        }
        let split = piece
            .find(|c: char| c.is_ascii_digit())
            .unwrap_or(piece.len());
        let (name, digits) = piece.split_at(split);
        let name_lower = name.to_lowercase();
        let spoken = VERSION_SUFFIXES
            .iter()
            .find(|(key, _)| *key == name_lower)
            .map(|(_, v)| (*v).to_string())
            .unwrap_or_else(|| name.to_string());
        if digits.is_empty() {
            Ok(spoken)
        } else {
            Ok(format!("{} {}", spoken, self.integer(digits)?))
        }
    }

    /// Date as «<day ordinal, feminine> <month genitive> <year cardinal>
    /// года».
    pub fn date(&self, day: u32, month: u32, year: i64) -> PrepResult<String> {
        if !(1..=12).contains(&month) || !(1..=31).contains(&day) || year <= 0 {
            return Err(PrepError::malformed_number(format!(
                "{day:02}.{month:02}.{year}"
            )));
        }
        Ok(format!(
            "{} {} {} года",
            ordinal(day as i64, OrdinalForm::Feminine),
            MONTHS_GENITIVE[month as usize],
            cardinal(year, Gender::Masculine)
        ))
    }

    /// Time of day with «час»/«минута»/«секунда» agreement.
    pub fn time(&self, hours: i64, minutes: i64, seconds: Option<i64>) -> PrepResult<String> {
        if !(0..=23).contains(&hours) || !(0..=59).contains(&minutes) {
            return Err(PrepError::malformed_number(format!("{hours}:{minutes:02}")));
        }

        let mut parts = vec![format!(
            "{} {}",
            cardinal(hours, Gender::Masculine),
            pluralize(hours, ["час", "часа", "часов"])
        )];

        let seconds = seconds.filter(|s| (1..=59).contains(s));
        if minutes > 0 || seconds.is_some() {
            parts.push(format!(
                "{} {}",
                cardinal(minutes, Gender::Feminine),
                pluralize(minutes, ["минута", "минуты", "минут"])
            ));
        }
        if let Some(s) = seconds {
            parts.push(format!(
                "{} {}",
                cardinal(s, Gender::Feminine),
                pluralize(s, ["секунда", "секунды", "секунд"])
            ));
        }

        Ok(parts.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cardinal_basic() {
        assert_eq!(cardinal(0, Gender::Masculine), "ноль");
        assert_eq!(cardinal(1, Gender::Masculine), "один");
        assert_eq!(cardinal(11, Gender::Masculine), "одиннадцать");
        assert_eq!(cardinal(20, Gender::Masculine), "двадцать");
        assert_eq!(cardinal(21, Gender::Masculine), "двадцать один");
        assert_eq!(cardinal(42, Gender::Masculine), "сорок два");
        assert_eq!(cardinal(100, Gender::Masculine), "сто");
        assert_eq!(cardinal(123, Gender::Masculine), "сто двадцать три");
        assert_eq!(
            cardinal(999, Gender::Masculine),
            "девятьсот девяносто девять"
        );
    }

    #[test]
    fn test_cardinal_thousands() {
        assert_eq!(cardinal(1_000, Gender::Masculine), "одна тысяча");
        assert_eq!(cardinal(2_000, Gender::Masculine), "две тысячи");
        assert_eq!(cardinal(5_000, Gender::Masculine), "пять тысяч");
        assert_eq!(cardinal(11_000, Gender::Masculine), "одиннадцать тысяч");
        assert_eq!(cardinal(21_000, Gender::Masculine), "двадцать одна тысяча");
        assert_eq!(
            cardinal(2_345, Gender::Masculine),
            "две тысячи триста сорок пять"
        );
        assert_eq!(
            cardinal(8_080, Gender::Masculine),
            "восемь тысяч восемьдесят"
        );
    }

    #[test]
    fn test_cardinal_millions() {
        assert_eq!(cardinal(1_000_000, Gender::Masculine), "один миллион");
        assert_eq!(cardinal(2_000_000, Gender::Masculine), "два миллиона");
        assert_eq!(cardinal(5_000_000, Gender::Masculine), "пять миллионов");
        assert_eq!(
            cardinal(1_000_000_000, Gender::Masculine),
            "один миллиард"
        );
    }

    #[test]
    fn test_cardinal_gender() {
        assert_eq!(cardinal(1, Gender::Feminine), "одна");
        assert_eq!(cardinal(2, Gender::Feminine), "две");
        assert_eq!(cardinal(1, Gender::Neuter), "одно");
        assert_eq!(cardinal(22, Gender::Feminine), "двадцать две");
        assert_eq!(cardinal(21, Gender::Feminine), "двадцать одна");
    }

    #[test]
    fn test_cardinal_negative() {
        assert_eq!(cardinal(-1, Gender::Masculine), "минус один");
        assert_eq!(cardinal(-100, Gender::Masculine), "минус сто");
    }

    #[test]
    fn test_genitive_cardinal() {
        assert_eq!(cardinal_genitive(1), "одного");
        assert_eq!(cardinal_genitive(10), "десяти");
        assert_eq!(cardinal_genitive(20), "двадцати");
        assert_eq!(cardinal_genitive(100), "ста");
        assert_eq!(cardinal_genitive(200), "двухсот");
        assert_eq!(cardinal_genitive(45), "сорока пяти");
    }

    #[test]
    fn test_ordinal_forms() {
        assert_eq!(ordinal(1, OrdinalForm::Masculine), "первый");
        assert_eq!(ordinal(1, OrdinalForm::Feminine), "первая");
        assert_eq!(ordinal(3, OrdinalForm::Neuter), "третье");
        assert_eq!(ordinal(3, OrdinalForm::GenitiveMasculine), "третьего");
        assert_eq!(ordinal(8, OrdinalForm::Neuter), "восьмое");
        assert_eq!(ordinal(15, OrdinalForm::Feminine), "пятнадцатая");
        assert_eq!(ordinal(20, OrdinalForm::GenitiveMasculine), "двадцатого");
        assert_eq!(ordinal(21, OrdinalForm::Masculine), "двадцать первый");
        assert_eq!(
            ordinal(2024, OrdinalForm::GenitiveMasculine),
            "две тысячи двадцать четвёртого"
        );
        assert_eq!(
            ordinal(2020, OrdinalForm::GenitiveMasculine),
            "две тысячи двадцатого"
        );
        assert_eq!(ordinal(2000, OrdinalForm::GenitiveMasculine), "двухтысячного");
    }

    #[test]
    fn test_integer() {
        let n = NumberNormalizer::new();
        assert_eq!(n.integer("0").unwrap(), "ноль");
        assert_eq!(n.integer("123").unwrap(), "сто двадцать три");
        assert!(n.integer("99999999999999999999").is_err());
        assert!(n.integer("abc").is_err());
    }

    #[test]
    fn test_float() {
        let n = NumberNormalizer::new();
        assert_eq!(n.float("3.14").unwrap(), "три точка один четыре");
        assert_eq!(n.float("0.5").unwrap(), "ноль точка пять");
        assert_eq!(n.float("2.0").unwrap(), "два точка ноль");
        assert_eq!(n.float("10.25").unwrap(), "десять точка два пять");
        assert_eq!(n.float("0.001").unwrap(), "ноль точка ноль ноль один");
        assert_eq!(n.float("3,14").unwrap(), "три запятая один четыре");
    }

    #[test]
    fn test_percentage_declension() {
        let n = NumberNormalizer::new();
        assert_eq!(n.percentage("50", false).unwrap(), "пятьдесят процентов");
        assert_eq!(n.percentage("1", false).unwrap(), "один процент");
        assert_eq!(n.percentage("2", false).unwrap(), "два процента");
        assert_eq!(n.percentage("11", false).unwrap(), "одиннадцать процентов");
        assert_eq!(n.percentage("12", false).unwrap(), "двенадцать процентов");
        assert_eq!(n.percentage("13", false).unwrap(), "тринадцать процентов");
        assert_eq!(n.percentage("14", false).unwrap(), "четырнадцать процентов");
        assert_eq!(
            n.percentage("21", false).unwrap(),
            "двадцать один процент"
        );
        assert_eq!(
            n.percentage("22", false).unwrap(),
            "двадцать два процента"
        );
        assert_eq!(
            n.percentage("25", false).unwrap(),
            "двадцать пять процентов"
        );
        assert_eq!(
            n.percentage("31", false).unwrap(),
            "тридцать один процент"
        );
        assert_eq!(
            n.percentage("0.5", true).unwrap(),
            "ноль точка пять процентов"
        );
    }

    #[test]
    fn test_range() {
        let n = NumberNormalizer::new();
        assert_eq!(n.range("1", "10").unwrap(), "от одного до десяти");
        assert_eq!(n.range("10", "20").unwrap(), "от десяти до двадцати");
        assert_eq!(n.range("100", "200").unwrap(), "от ста до двухсот");
        assert_eq!(n.range("5", "6").unwrap(), "от пяти до шести");
        assert_eq!(
            n.range("2020", "2024").unwrap(),
            "от две тысячи двадцатого до две тысячи двадцать четвёртого"
        );
    }

    #[test]
    fn test_size_units() {
        let n = NumberNormalizer::new();
        assert_eq!(n.size("100", "KB").unwrap(), "сто килобайт");
        assert_eq!(n.size("1", "MB").unwrap(), "один мегабайт");
        assert_eq!(n.size("2", "MB").unwrap(), "два мегабайта");
        assert_eq!(n.size("5", "MB").unwrap(), "пять мегабайт");
        assert_eq!(n.size("16", "GB").unwrap(), "шестнадцать гигабайт");
        assert_eq!(n.size("1", "TB").unwrap(), "один терабайт");
        assert_eq!(n.size("50", "ms").unwrap(), "пятьдесят миллисекунд");
        assert_eq!(n.size("1", "sec").unwrap(), "одна секунда");
        assert_eq!(n.size("2", "min").unwrap(), "две минуты");
        assert_eq!(n.size("10", "px").unwrap(), "десять пикселей");
        assert!(n.size("3", "flops").is_err());
    }

    #[test]
    fn test_version() {
        let n = NumberNormalizer::new();
        assert_eq!(n.version("1.2.3").unwrap(), "один точка два точка три");
        assert_eq!(
            n.version("v2.0.0").unwrap(),
            "два точка ноль точка ноль"
        );
        assert_eq!(
            n.version("20.10.0").unwrap(),
            "двадцать точка десять точка ноль"
        );
        assert_eq!(
            n.version("1.0.0-rc1").unwrap(),
            "один точка ноль точка ноль эр си один"
        );
        assert_eq!(
            n.version("2.0-beta").unwrap(),
            "два точка ноль бета"
        );
    }

    #[test]
    fn test_date() {
        let n = NumberNormalizer::new();
        assert_eq!(
            n.date(15, 3, 2024).unwrap(),
            "пятнадцатая марта две тысячи двадцать четыре года"
        );
        assert_eq!(
            n.date(1, 1, 2025).unwrap(),
            "первая января две тысячи двадцать пять года"
        );
        assert!(n.date(32, 1, 2024).is_err());
        assert!(n.date(1, 13, 2024).is_err());
    }

    #[test]
    fn test_time() {
        let n = NumberNormalizer::new();
        assert_eq!(
            n.time(14, 30, None).unwrap(),
            "четырнадцать часов тридцать минут"
        );
        assert_eq!(n.time(1, 0, None).unwrap(), "один час");
        assert_eq!(
            n.time(9, 5, Some(30)).unwrap(),
            "девять часов пять минут тридцать секунд"
        );
        assert_eq!(
            n.time(21, 1, None).unwrap(),
            "двадцать один час одна минута"
        );
        assert!(n.time(24, 0, None).is_err());
    }

    #[test]
    fn test_spell_digits() {
        assert_eq!(spell_digits("264"), "два шесть четыре");
        assert_eq!(spell_digits("07"), "ноль семь");
    }
}
