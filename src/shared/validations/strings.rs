//! String classifiers used by the password policy.

/// Characters accepted as "special" by [`has_special_char`].
pub const SPECIAL_CHARS: [char; 8] = ['!', '@', '#', '$', '%', '^', '&', '*'];

/// True if `s` has at least one upper-case and one lower-case letter.
pub fn has_mixed_case(s: &str) -> bool {
    let mut has_lower = false;
    let mut has_upper = false;

    for c in s.chars().filter(|c| c.is_alphabetic()) {
        has_lower |= c.is_lowercase();
        has_upper |= c.is_uppercase();
        if has_lower && has_upper {
            return true;
        }
    }
    false
}

/// True if `s` contains any of [`SPECIAL_CHARS`].
pub fn has_special_char(s: &str) -> bool {
    s.chars().any(|c| SPECIAL_CHARS.contains(&c))
}

/// True if `s` has at least one letter and one digit.
pub fn has_alpha_num(s: &str) -> bool {
    let mut has_alpha = false;
    let mut has_number = false;

    for c in s.chars() {
        has_alpha |= c.is_alphabetic();
        has_number |= c.is_numeric();
        if has_alpha && has_number {
            return true;
        }
    }
    false
}
