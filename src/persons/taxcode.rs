use regex::Regex;
use std::sync::OnceLock;

/// Positional pattern: 6 letters, 2 digits, 1 letter, 2 digits, 1 letter,
/// 3 letters-or-digits, 1 letter.
const TAX_CODE_PATTERN: &str = r"^[A-Z]{6}[0-9]{2}[A-Z][0-9]{2}[A-Z][0-9A-Z]{3}[A-Z]$";

const TAX_CODE_LEN: usize = 16;

fn tax_code_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(TAX_CODE_PATTERN).expect("pattern is a valid regex"))
}

/// Checks whether `code` is a well-formed tax code.
///
/// Pure and deterministic: exact length, every character uppercase ASCII
/// alphanumeric, and the fixed letter/digit positional pattern above.
pub fn is_valid_tax_code(code: &str) -> bool {
    if code.len() != TAX_CODE_LEN {
        return false;
    }
    if !code
        .chars()
        .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase())
    {
        return false;
    }
    tax_code_regex().is_match(code)
}
