//! Segment normalization: the canonical key used for quantity parsing,
//! matching and the unknown-food list.

use once_cell::sync::Lazy;
use regex::Regex;

static PUNCTUATION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.,;:!?]").unwrap());
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Lowercase, turn `. , ; : ! ?` into spaces, collapse whitespace runs and
/// trim. Never fails; empty input gives an empty string.
pub fn normalize(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let spaced = PUNCTUATION_RE.replace_all(&lowered, " ");
    let collapsed = WHITESPACE_RE.replace_all(&spaced, " ");
    collapsed.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_and_punctuation() {
        assert_eq!(normalize("2 Oeufs, Pain!"), "2 oeufs pain");
        assert_eq!(normalize("Café; thé? lait."), "café thé lait");
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(normalize("  riz \t\t et   poulet  "), "riz et poulet");
    }

    #[test]
    fn test_keeps_other_symbols() {
        assert_eq!(normalize("1/2 pomme"), "1/2 pomme");
        assert_eq!(normalize("flocons d'avoine"), "flocons d'avoine");
        assert_eq!(normalize("fromage_blanc"), "fromage_blanc");
    }

    #[test]
    fn test_empty_and_punctuation_only() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" ...!? "), "");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "",
            "  Tartine de CONFITURE.. ",
            "2x Yaourts;nature",
            "Demi-baguette !!",
            "ÉCLAIR\u{a0}au café",
            "a\nb\r\nc",
        ];
        for s in samples {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "not idempotent for {:?}", s);
        }
    }
}
