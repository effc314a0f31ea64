//! Password complexity rules.

use crate::error::{CharClass, ValidationError};

/// Default and lowest permitted minimum password length.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Characters that satisfy the "special character" requirement.
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*()_+-=[]{}|;:'\",.<>?/~`";

/// Password complexity policy.
///
/// A password passes when it is at least `min_length` characters long and
/// contains at least one character of every [`CharClass`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordPolicy {
    pub min_length: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: MIN_PASSWORD_LENGTH,
        }
    }
}

impl PasswordPolicy {
    /// Lists the character classes `value` does not contain, in a fixed
    /// order: uppercase, lowercase, digit, special.
    pub fn missing_classes(&self, value: &str) -> Vec<CharClass> {
        let mut upper = false;
        let mut lower = false;
        let mut digit = false;
        let mut special = false;

        for c in value.chars() {
            upper |= c.is_uppercase();
            lower |= c.is_lowercase();
            digit |= c.is_numeric();
            special |= SPECIAL_CHARACTERS.contains(c);
        }

        [
            (upper, CharClass::Uppercase),
            (lower, CharClass::Lowercase),
            (digit, CharClass::Digit),
            (special, CharClass::Special),
        ]
        .into_iter()
        .filter(|(present, _)| !present)
        .map(|(_, class)| class)
        .collect()
    }

    /// # Errors
    ///
    /// Returns [`ValidationError::WeakPassword`] naming every rule the value
    /// breaks, so callers can show one precise message.
    pub fn validate(&self, value: &str) -> Result<(), ValidationError> {
        let too_short = value.chars().count() < self.min_length;
        let missing = self.missing_classes(value);

        if too_short || !missing.is_empty() {
            return Err(ValidationError::WeakPassword {
                too_short,
                min_length: self.min_length,
                missing,
            });
        }

        Ok(())
    }
}
