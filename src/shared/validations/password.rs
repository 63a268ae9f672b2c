//! Password complexity policy

use super::strings::{has_alpha_num, has_mixed_case, has_special_char};
use crate::shared::errors::{DomainError, DomainResult};

pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Check a plain-text password against the account password policy.
///
/// Reports the first rule that fails.
pub fn validate_password_strength(password: &str) -> DomainResult<()> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(DomainError::Validation(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        )));
    }
    if !has_mixed_case(password) {
        return Err(DomainError::Validation(
            "Password must contain both upper and lower case letters".into(),
        ));
    }
    if !has_alpha_num(password) {
        return Err(DomainError::Validation(
            "Password must contain both letters and digits".into(),
        ));
    }
    if !has_special_char(password) {
        return Err(DomainError::Validation(
            "Password must contain one of !@#$%^&*".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strong_password_passes() {
        assert!(validate_password_strength("Sup3r$ecret").is_ok());
    }

    #[test]
    fn each_rule_is_enforced() {
        let cases = [
            ("Ab1!", "at least 8"),
            ("password1!", "upper and lower"),
            ("Password!!", "letters and digits"),
            ("Password12", "!@#$%^&*"),
        ];
        for (pw, expected) in cases {
            let err = validate_password_strength(pw).unwrap_err();
            assert!(
                err.to_string().contains(expected),
                "{pw}: unexpected error {err}"
            );
        }
    }
}
