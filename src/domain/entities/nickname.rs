//! Nickname value type and the policy that produces it.

use crate::domain::repositories::NicknameRepository;
use crate::error::ValidationError;
use serde::Serialize;
use std::fmt;
use unicode_properties::{GeneralCategoryGroup, UnicodeGeneralCategory};

/// Minimum nickname length in characters. Not configurable.
pub const MIN_NICKNAME_LENGTH: usize = 3;

/// Default maximum nickname length in characters.
pub const DEFAULT_MAX_NICKNAME_LENGTH: usize = 30;

/// How nicknames are compared when checking uniqueness.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CaseSensitivity {
    #[default]
    Sensitive,
    Insensitive,
}

impl CaseSensitivity {
    /// Returns true if `a` and `b` name the same nickname under this policy.
    pub fn matches(self, a: &str, b: &str) -> bool {
        match self {
            CaseSensitivity::Sensitive => a == b,
            CaseSensitivity::Insensitive => {
                a.chars().flat_map(char::to_lowercase).eq(b.chars().flat_map(char::to_lowercase))
            }
        }
    }

    /// Key under which a nickname is stored so that matching keys collide.
    pub fn fold(self, nickname: &str) -> String {
        match self {
            CaseSensitivity::Sensitive => nickname.to_string(),
            CaseSensitivity::Insensitive => {
                nickname.chars().flat_map(char::to_lowercase).collect()
            }
        }
    }
}

/// A nickname that passed every format rule and the uniqueness check
/// against the snapshot it was validated with.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Nickname(String);

impl Nickname {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Nickname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Nickname {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Returns true for characters a nickname may contain: letters and numbers
/// from any script, `_` and `-`.
///
/// Letters and numbers are taken by general category (`L*`, `N*`), so
/// alphabetic symbols such as `ⓐ` or `🅰` are rejected.
pub fn is_nickname_char(c: char) -> bool {
    if c == '_' || c == '-' {
        return true;
    }

    matches!(
        c.general_category_group(),
        GeneralCategoryGroup::Letter | GeneralCategoryGroup::Number
    )
}

/// Tunable nickname rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NicknamePolicy {
    pub max_length: usize,
    pub case: CaseSensitivity,
}

impl Default for NicknamePolicy {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_NICKNAME_LENGTH,
            case: CaseSensitivity::Sensitive,
        }
    }
}

impl NicknamePolicy {
    /// Checks length and character rules only, without looking at existing
    /// nicknames.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::ShortNickname`] below [`MIN_NICKNAME_LENGTH`]
    /// - [`ValidationError::NicknameTooLong`] above `max_length`
    /// - [`ValidationError::InvalidNicknameCharacter`] for whitespace, symbols
    ///   and emoji
    pub fn check_format(&self, value: &str) -> Result<(), ValidationError> {
        let length = value.chars().count();

        if length < MIN_NICKNAME_LENGTH {
            return Err(ValidationError::ShortNickname {
                min: MIN_NICKNAME_LENGTH,
                actual: length,
            });
        }

        if length > self.max_length {
            return Err(ValidationError::NicknameTooLong {
                max: self.max_length,
                actual: length,
            });
        }

        if let Some((position, character)) =
            value.chars().enumerate().find(|(_, c)| !is_nickname_char(*c))
        {
            return Err(ValidationError::InvalidNicknameCharacter {
                character,
                position,
            });
        }

        Ok(())
    }

    /// Full nickname validation: format rules, then uniqueness against
    /// `existing`.
    ///
    /// # Errors
    ///
    /// Any error from [`Self::check_format`], or
    /// [`ValidationError::DuplicateNickname`] if `existing` already holds the
    /// value under this policy's case rule.
    pub fn validate<R>(&self, value: &str, existing: &R) -> Result<Nickname, ValidationError>
    where
        R: NicknameRepository + ?Sized,
    {
        self.check_format(value)?;

        if existing.exists(value, self.case) {
            return Err(ValidationError::DuplicateNickname {
                nickname: value.to_string(),
            });
        }

        Ok(Nickname(value.to_string()))
    }
}
