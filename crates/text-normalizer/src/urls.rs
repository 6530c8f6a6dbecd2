//! URLs, emails, IPv4 addresses, and file paths.
//!
//! Structural characters are spoken («двоеточие слэш слэш», «собака»,
//! «точка»); the scheme is spelled via the protocol table; a known TLD or
//! file extension uses its table entry and anything else is spelled letter
//! by letter. Name segments stay verbatim.

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;

use prep_core::{IpReadMode, UrlDetail};

use crate::abbreviations::AbbreviationNormalizer;
use crate::numbers::{spell_digits, NumberNormalizer};

/// Scheme pronunciations.
const PROTOCOLS: &[(&str, &str)] = &[
    ("https", "эйч ти ти пи эс"),
    ("http", "эйч ти ти пи"),
    ("ftp", "эф ти пи"),
    ("ssh", "эс эс эйч"),
    ("git", "гит"),
    ("file", "файл"),
    ("sftp", "эс эф ти пи"),
    ("ws", "веб сокет"),
    ("wss", "веб сокет секьюр"),
];

/// Top-level domain pronunciations.
const TLD_MAP: &[(&str, &str)] = &[
    ("com", "ком"),
    ("org", "орг"),
    ("net", "нет"),
    ("ru", "ру"),
    ("io", "ай оу"),
    ("dev", "дев"),
    ("app", "апп"),
    ("ai", "эй ай"),
    ("co", "ко"),
    ("me", "ми"),
    ("uk", "ю кей"),
    ("edu", "еду"),
    ("gov", "гов"),
    ("info", "инфо"),
    ("biz", "биз"),
];

/// File extension pronunciations.
const EXTENSIONS: &[(&str, &str)] = &[
    ("py", "пай"),
    ("rs", "ар эс"),
    ("js", "джей эс"),
    ("ts", "ти эс"),
    ("go", "гоу"),
    ("md", "эм ди"),
    ("txt", "тэкст"),
    ("json", "джейсон"),
    ("yaml", "ямл"),
    ("yml", "ямл"),
    ("toml", "томл"),
    ("html", "эйч ти эм эл"),
    ("css", "си эс эс"),
    ("xml", "икс эм эл"),
    ("pdf", "пдф"),
    ("doc", "док"),
    ("png", "пнг"),
    ("jpg", "джэйпег"),
    ("svg", "эс ви джи"),
    ("csv", "си эс ви"),
    ("log", "лог"),
    ("sh", "шелл"),
    ("sql", "эс кью эл"),
    ("zip", "зип"),
    ("gz", "джи зет"),
];

static TLDS: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| TLD_MAP.iter().copied().collect());
static EXTS: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| EXTENSIONS.iter().copied().collect());

/// Normalizes URLs, emails, IPs, and file paths.
#[derive(Debug)]
pub struct UrlPathNormalizer {
    numbers: NumberNormalizer,
    abbreviations: Arc<AbbreviationNormalizer>,
}

impl UrlPathNormalizer {
    pub fn new(abbreviations: Arc<AbbreviationNormalizer>) -> Self {
        Self {
            numbers: NumberNormalizer::new(),
            abbreviations,
        }
    }

    fn spell_letters(&self, word: &str) -> String {
        word.chars()
            .map(|c| match self.abbreviations.letter(c) {
                Some(spoken) => spoken.to_string(),
                None => c.to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn spoken_tld(&self, segment: &str) -> String {
        let lower = segment.to_lowercase();
        match TLDS.get(lower.as_str()) {
            Some(spoken) => (*spoken).to_string(),
            None => self.spell_letters(&lower),
        }
    }

    /// Host segments joined by «точка», numeric segments as cardinals, the
    /// final segment through the TLD table.
    fn spoken_host(&self, host: &str) -> String {
        let segments: Vec<&str> = host.split('.').collect();
        let mut words = Vec::new();
        for (i, segment) in segments.iter().enumerate() {
            if i > 0 {
                words.push("точка".to_string());
            }
            if i == segments.len() - 1 && segments.len() > 1 {
                words.push(self.spoken_tld(segment));
            } else if segment.chars().all(|c| c.is_ascii_digit()) && !segment.is_empty() {
                words.push(
                    self.numbers
                        .integer(segment)
                        .unwrap_or_else(|_| spell_digits(segment)),
                );
            } else {
                words.push((*segment).to_string());
            }
        }
        words.join(" ")
    }

    /// Spoken form of a URL at the given detail level.
    pub fn url(&self, url: &str, detail: UrlDetail) -> String {
        let (scheme, rest) = match url.split_once("://") {
            Some(parts) => parts,
            None => return url.to_string(),
        };

        let (authority, tail) = match rest.find(['/', '?', '#']) {
            Some(idx) => rest.split_at(idx),
            None => (rest, ""),
        };
        let (host, port) = match authority.rsplit_once(':') {
            Some((h, p)) if p.chars().all(|c| c.is_ascii_digit()) && !p.is_empty() => {
                (h, Some(p))
            }
            _ => (authority, None),
        };

        if detail == UrlDetail::Minimal {
            let mut segments = host.split('.');
            let first = segments.next().unwrap_or(host);
            let tld = host.rsplit('.').next().filter(|t| *t != first);
            return match tld {
                Some(tld) => format!("{} {}", first, self.spoken_tld(tld)),
                None => first.to_string(),
            };
        }

        let scheme_lower = scheme.to_lowercase();
        let spoken_scheme = PROTOCOLS
            .iter()
            .find(|(key, _)| *key == scheme_lower)
            .map(|(_, spoken)| (*spoken).to_string())
            .unwrap_or_else(|| self.spell_letters(&scheme_lower));

        let mut parts = vec![spoken_scheme, "двоеточие слэш слэш".to_string()];
        if !host.is_empty() {
            parts.push(self.spoken_host(host));
        }

        if detail == UrlDetail::DomainOnly {
            return parts.join(" ");
        }

        if let Some(port) = port {
            parts.push("двоеточие".to_string());
            parts.push(
                self.numbers
                    .integer(port)
                    .unwrap_or_else(|_| spell_digits(port)),
            );
        }

        let (path_and_query, fragment) = match tail.split_once('#') {
            Some((p, f)) => (p, Some(f)),
            None => (tail, None),
        };
        let (path, query) = match path_and_query.split_once('?') {
            Some((p, q)) => (p, Some(q)),
            None => (path_and_query, None),
        };

        for segment in path.split('/').filter(|s| !s.is_empty()) {
            parts.push("слэш".to_string());
            parts.push(self.spoken_path_segment(segment));
        }

        if let Some(query) = query {
            parts.push("вопрос".to_string());
            for (i, pair) in query.split('&').enumerate() {
                if i > 0 {
                    parts.push("амперсанд".to_string());
                }
                match pair.split_once('=') {
                    Some((key, value)) => {
                        parts.push(key.to_string());
                        parts.push("равно".to_string());
                        parts.push(value.to_string());
                    }
                    None => parts.push(pair.to_string()),
                }
            }
        }

        if let Some(fragment) = fragment {
            parts.push("решётка".to_string());
            parts.push(fragment.to_string());
        }

        parts.join(" ")
    }

    /// Dotted path segment with numeric pieces as cardinals
    /// (3.11 -> «три точка одиннадцать»).
    fn spoken_path_segment(&self, segment: &str) -> String {
        if !segment.contains('.') {
            return segment.to_string();
        }
        segment
            .split('.')
            .map(|piece| {
                if piece.chars().all(|c| c.is_ascii_digit()) && !piece.is_empty() {
                    self.numbers
                        .integer(piece)
                        .unwrap_or_else(|_| spell_digits(piece))
                } else {
                    piece.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" точка ")
    }

    /// Email: local part, «собака», domain.
    pub fn email(&self, email: &str) -> String {
        let Some((local, domain)) = email.rsplit_once('@') else {
            return email.to_string();
        };
        format!(
            "{} собака {}",
            self.spoken_local_part(local),
            self.spoken_host(domain)
        )
    }

    /// Local part with «точка»/«андерскор»/«дефис» for separators and digit
    /// runs as cardinals.
    fn spoken_local_part(&self, local: &str) -> String {
        let mut parts: Vec<String> = Vec::new();
        let mut word = String::new();
        let mut digits = String::new();

        fn flush_word(parts: &mut Vec<String>, word: &mut String) {
            if !word.is_empty() {
                parts.push(std::mem::take(word));
            }
        }
        fn flush_digits(numbers: &NumberNormalizer, parts: &mut Vec<String>, digits: &mut String) {
            if !digits.is_empty() {
                let spoken = numbers
                    .integer(digits)
                    .unwrap_or_else(|_| spell_digits(digits));
                parts.push(spoken);
                digits.clear();
            }
        }

        for c in local.chars() {
            match c {
                '.' | '_' | '-' | '+' => {
                    flush_word(&mut parts, &mut word);
                    flush_digits(&self.numbers, &mut parts, &mut digits);
                    parts.push(
                        match c {
                            '.' => "точка",
                            '_' => "андерскор",
                            '-' => "дефис",
                            _ => "плюс",
                        }
                        .to_string(),
                    );
                }
                c if c.is_ascii_digit() => {
                    flush_word(&mut parts, &mut word);
                    digits.push(c);
                }
                c => {
                    flush_digits(&self.numbers, &mut parts, &mut digits);
                    word.push(c);
                }
            }
        }
        flush_word(&mut parts, &mut word);
        flush_digits(&self.numbers, &mut parts, &mut digits);

        parts.join(" ")
    }

    /// IPv4: octets joined by «точка». `None` when an octet is out of range,
    /// so the match falls through to the later number passes.
    pub fn ipv4(&self, ip: &str, mode: IpReadMode) -> Option<String> {
        let octets: Vec<&str> = ip.split('.').collect();
        if octets.len() != 4 {
            return None;
        }
        let mut words = Vec::new();
        for octet in octets {
            let value: u32 = octet.parse().ok()?;
            if value > 255 {
                return None;
            }
            words.push(match mode {
                IpReadMode::Numbers => self
                    .numbers
                    .integer(&value.to_string())
                    .unwrap_or_else(|_| spell_digits(octet)),
                IpReadMode::Digits => spell_digits(octet),
            });
        }
        Some(words.join(" точка "))
    }

    /// File path with spoken separators; the final extension uses the
    /// extension table or letter spelling.
    pub fn filepath(&self, path: &str) -> String {
        let windows = path.contains('\\');
        let separator = if windows { "бэкслэш" } else { "слэш" };
        let segments: Vec<&str> = if windows {
            path.split('\\').collect()
        } else {
            path.split('/').collect()
        };
        let last_index = segments.len() - 1;

        let mut parts: Vec<String> = Vec::new();
        for (i, segment) in segments.iter().enumerate() {
            if i > 0 {
                parts.push(separator.to_string());
            }
            if segment.is_empty() {
                continue;
            }
            match *segment {
                "~" => parts.push("тильда".to_string()),
                "." => parts.push("точка".to_string()),
                ".." => parts.push("две точки".to_string()),
                seg if seg.len() == 2
                    && seg.ends_with(':')
                    && seg.chars().next().is_some_and(|c| c.is_ascii_alphabetic()) =>
                {
                    let drive = seg.chars().next().unwrap();
                    parts.push(match self.abbreviations.letter(drive) {
                        Some(spoken) => spoken.to_string(),
                        None => drive.to_string(),
                    });
                    parts.push("двоеточие".to_string());
                }
                seg => parts.push(self.spoken_file_segment(seg, i == last_index)),
            }
        }

        parts.join(" ")
    }

    fn spoken_file_segment(&self, segment: &str, is_last: bool) -> String {
        let (hidden, segment) = match segment.strip_prefix('.') {
            Some(rest) => (true, rest),
            None => (false, segment),
        };

        let mut words: Vec<String> = Vec::new();
        if hidden {
            words.push("точка".to_string());
        }

        match segment.rsplit_once('.') {
            Some((name, ext)) if is_last && !name.is_empty() => {
                words.push(self.spoken_file_name(name));
                words.push("точка".to_string());
                let ext_lower = ext.to_lowercase();
                words.push(match EXTS.get(ext_lower.as_str()) {
                    Some(spoken) => (*spoken).to_string(),
                    None => self.spell_letters(&ext_lower),
                });
            }
            _ => words.push(self.spoken_file_name(segment)),
        }

        words.join(" ")
    }

    /// Inner dots and dashes in a name are spoken, pieces stay verbatim.
    fn spoken_file_name(&self, name: &str) -> String {
        name.split('.')
            .map(|piece| piece.split('-').collect::<Vec<_>>().join(" дефис "))
            .collect::<Vec<_>>()
            .join(" точка ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer() -> UrlPathNormalizer {
        UrlPathNormalizer::new(Arc::new(AbbreviationNormalizer::new()))
    }

    #[test]
    fn test_simple_urls() {
        let n = normalizer();
        assert_eq!(
            n.url("https://example.com", UrlDetail::Full),
            "эйч ти ти пи эс двоеточие слэш слэш example точка ком"
        );
        assert_eq!(
            n.url("http://test.org", UrlDetail::Full),
            "эйч ти ти пи двоеточие слэш слэш test точка орг"
        );
    }

    #[test]
    fn test_url_with_path() {
        let n = normalizer();
        assert_eq!(
            n.url("https://github.com/user/repo", UrlDetail::Full),
            "эйч ти ти пи эс двоеточие слэш слэш github точка ком слэш user слэш repo"
        );
        assert_eq!(
            n.url("https://docs.python.org/3.11/tutorial", UrlDetail::Full),
            "эйч ти ти пи эс двоеточие слэш слэш docs точка python точка орг \
             слэш три точка одиннадцать слэш tutorial"
        );
    }

    #[test]
    fn test_url_with_port() {
        let n = normalizer();
        assert_eq!(
            n.url("http://localhost:8080", UrlDetail::Full),
            "эйч ти ти пи двоеточие слэш слэш localhost двоеточие восемь тысяч восемьдесят"
        );
        assert_eq!(
            n.url("http://localhost:3000/api", UrlDetail::Full),
            "эйч ти ти пи двоеточие слэш слэш localhost двоеточие три тысячи слэш api"
        );
    }

    #[test]
    fn test_url_query_and_fragment() {
        let n = normalizer();
        assert_eq!(
            n.url("https://example.com/search?q=rust&page=2#results", UrlDetail::Full),
            "эйч ти ти пи эс двоеточие слэш слэш example точка ком слэш search \
             вопрос q равно rust амперсанд page равно 2 решётка results"
        );
    }

    #[test]
    fn test_url_detail_levels() {
        let n = normalizer();
        assert_eq!(
            n.url("https://docs.python.org/3.11/tutorial", UrlDetail::DomainOnly),
            "эйч ти ти пи эс двоеточие слэш слэш docs точка python точка орг"
        );
        assert_eq!(
            n.url("https://docs.python.org/3.11/tutorial", UrlDetail::Minimal),
            "docs орг"
        );
    }

    #[test]
    fn test_unknown_scheme_and_tld_spelled() {
        let n = normalizer();
        assert!(n
            .url("svn://host.xyz", UrlDetail::Full)
            .starts_with("эс ви эн двоеточие слэш слэш"));
        assert!(n.url("https://host.xyz", UrlDetail::Full).ends_with("экс уай зед"));
    }

    #[test]
    fn test_emails() {
        let n = normalizer();
        assert_eq!(
            n.email("user@example.com"),
            "user собака example точка ком"
        );
        assert_eq!(
            n.email("john.doe@company.org"),
            "john точка doe собака company точка орг"
        );
        assert_eq!(n.email("admin@localhost"), "admin собака localhost");
        assert_eq!(
            n.email("name_123@test.io"),
            "name андерскор сто двадцать три собака test точка ай оу"
        );
        assert_eq!(
            n.email("info-team@company.co"),
            "info дефис team собака company точка ко"
        );
    }

    #[test]
    fn test_ipv4_modes() {
        let n = normalizer();
        assert_eq!(
            n.ipv4("192.168.1.1", IpReadMode::Numbers).unwrap(),
            "сто девяносто два точка сто шестьдесят восемь точка один точка один"
        );
        assert_eq!(
            n.ipv4("8.8.8.8", IpReadMode::Numbers).unwrap(),
            "восемь точка восемь точка восемь точка восемь"
        );
        assert_eq!(
            n.ipv4("192.168.1.1", IpReadMode::Digits).unwrap(),
            "один девять два точка один шесть восемь точка один точка один"
        );
    }

    #[test]
    fn test_ipv4_rejects_bad_octets() {
        let n = normalizer();
        assert!(n.ipv4("999.1.1.1", IpReadMode::Numbers).is_none());
        assert!(n.ipv4("1.2.3", IpReadMode::Numbers).is_none());
    }

    #[test]
    fn test_unix_paths() {
        let n = normalizer();
        assert_eq!(
            n.filepath("/home/user/config.yaml"),
            "слэш home слэш user слэш config точка ямл"
        );
        assert_eq!(
            n.filepath("~/Documents/report.pdf"),
            "тильда слэш Documents слэш report точка пдф"
        );
        assert_eq!(
            n.filepath("./src/main.rs"),
            "точка слэш src слэш main точка ар эс"
        );
        assert_eq!(
            n.filepath("../lib/utils.py"),
            "две точки слэш lib слэш utils точка пай"
        );
    }

    #[test]
    fn test_windows_paths() {
        let n = normalizer();
        assert_eq!(
            n.filepath("C:\\Users\\admin"),
            "си двоеточие бэкслэш Users бэкслэш admin"
        );
    }

    #[test]
    fn test_hidden_and_dotted_names() {
        let n = normalizer();
        assert_eq!(n.filepath("/app/.env"), "слэш app слэш точка env");
        assert_eq!(
            n.filepath("/srv/test.spec.ts"),
            "слэш srv слэш test точка spec точка ти эс"
        );
        assert_eq!(
            n.filepath("/opt/my-app/run.sh"),
            "слэш opt слэш my дефис app слэш run точка шелл"
        );
    }
}
