//! Validated value types and the policies that produce them.
//!
//! Each value type can only be constructed through its validation routine, so
//! holding a [`Nickname`], [`ProfileUrl`] or [`Email`] proves the check ran.
//!
//! # Types
//!
//! - [`Nickname`] / [`NicknamePolicy`] - display identifier rules and uniqueness
//! - [`PasswordPolicy`] - password complexity
//! - [`ProfileUrl`] - `http`/`https` profile links
//! - [`Email`] - email address syntax
//! - [`UpdatePayload`] - raw update body and its emptiness pre-check

pub mod email;
pub mod nickname;
pub mod password;
pub mod profile_url;
pub mod update_payload;

pub use email::Email;
pub use nickname::{
    CaseSensitivity, DEFAULT_MAX_NICKNAME_LENGTH, MIN_NICKNAME_LENGTH, Nickname, NicknamePolicy,
};
pub use password::{MIN_PASSWORD_LENGTH, PasswordPolicy, SPECIAL_CHARACTERS};
pub use profile_url::ProfileUrl;
pub use update_payload::UpdatePayload;
