//! Random nickname suggestions.
//!
//! Produces `adjective_animal_NNN` nicknames such as `clever_otter_42`. Every
//! word is lowercase ASCII, so suggestions always satisfy the nickname
//! character rules and stay well under the default length limit. Under a
//! tighter limit, [`generate_nickname_within`] falls back to a compact
//! `animalNNN` form cut to fit.

use rand::Rng;
use rand::seq::IndexedRandom;

const ADJECTIVES: &[&str] = &[
    "brave", "calm", "clever", "cosmic", "eager", "fuzzy", "gentle", "happy", "jolly", "keen",
    "lucky", "mighty", "nimble", "proud", "quick", "quiet", "shiny", "swift", "witty", "zesty",
];

const ANIMALS: &[&str] = &[
    "badger", "beaver", "bison", "falcon", "ferret", "fox", "gecko", "heron", "koala", "lemur",
    "lynx", "marten", "otter", "panda", "puffin", "raven", "seal", "tiger", "walrus", "wombat",
];

/// Exclusive upper bound of the numeric suffix.
const SUFFIX_BOUND: u32 = 1000;

/// Generates a random nickname suggestion.
///
/// # Examples
///
/// ```ignore
/// let nickname = generate_nickname();
/// assert_eq!(nickname.split('_').count(), 3);
/// ```
pub fn generate_nickname() -> String {
    let mut rng = rand::rng();

    let adjective = ADJECTIVES.choose(&mut rng).copied().unwrap_or("happy");
    let animal = ANIMALS.choose(&mut rng).copied().unwrap_or("otter");
    let number = rng.random_range(0..SUFFIX_BOUND);

    format!("{adjective}_{animal}_{number}")
}

/// Generates a suggestion no longer than `max_length` characters.
///
/// For any `max_length` of at least 3 the result is between 3 and
/// `max_length` characters long.
pub fn generate_nickname_within(max_length: usize) -> String {
    let nickname = generate_nickname();
    if nickname.len() <= max_length {
        return nickname;
    }

    let mut rng = rand::rng();
    let animal = ANIMALS.choose(&mut rng).copied().unwrap_or("otter");
    let number = rng.random_range(0..SUFFIX_BOUND);

    let mut compact = format!("{animal}{number}");
    if compact.len() > max_length {
        // Keep the digits, shorten the word.
        let digits = number.to_string();
        let keep = max_length.saturating_sub(digits.len()).max(1).min(animal.len());
        compact = format!("{}{digits}", &animal[..keep]);
        compact.truncate(max_length);
    }
    compact
}
