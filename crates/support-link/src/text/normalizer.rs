use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Characters that survive normalization, besides whitespace which is
/// stripped in a separate pass.
const DISALLOWED: &str = r"[^a-z0-9ğüşöçı\s]";

fn disallowed() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(DISALLOWED).expect("allowlist pattern compiles"))
}

fn whitespace() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\s+").expect("whitespace pattern compiles"))
}

/// Lowercases with Turkish casing rules for the dotted and dotless `I`.
fn turkish_lowercase(value: &str) -> String {
    let mut folded = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            'İ' => folded.push('i'),
            'I' if chars.peek() == Some(&'\u{0307}') => {
                chars.next();
                folded.push('i');
            }
            'I' => folded.push('ı'),
            other => folded.push(other),
        }
    }
    folded.to_lowercase()
}

/// Canonical comparable form of a human-entered name.
///
/// Lowercases (Turkish casing), drops anything outside `a-z`, `0-9` and
/// `ğüşöçı`, then removes every whitespace character. Never fails.
pub fn normalize(text: &str) -> String {
    let lowered = turkish_lowercase(text);
    let allowed = disallowed().replace_all(&lowered, "");
    let compact = whitespace().replace_all(&allowed, "");
    // No-op while the pass above strips all whitespace.
    compact.trim().to_string()
}

/// A name after [`normalize`], used for fuzzy comparisons.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NormalizedText(String);

impl NormalizedText {
    pub fn new(raw: &str) -> Self {
        Self(normalize(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NormalizedText {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}
