//! Input sanitization for the duration and weight fields.
//!
//! Users often type with an IME active, so full-width digits (`０`–`９`) and
//! the full-width comma (`，`) are folded to their ASCII forms before
//! filtering. Everything outside the allowed character class is then dropped.
//!
//! The normalizer never fails. Garbage input yields an empty or short string
//! that the parser rejects later.
//!
//! ```rust
//! use timeshare::libs::normalizer::{normalize, CharacterClass};
//!
//! assert_eq!(normalize("０１２３", CharacterClass::Duration), "0123");
//! assert_eq!(normalize("1h 23m 45", CharacterClass::Duration), "1234");
//! assert_eq!(normalize("５０，３０，２０", CharacterClass::Weights), "50,30,20");
//! ```

/// Maximum length of a sanitized duration code (`HHMM`).
pub const DURATION_CODE_LEN: usize = 4;

const FULLWIDTH_ZERO: u32 = 0xFF10;
const FULLWIDTH_NINE: u32 = 0xFF19;
const FULLWIDTH_COMMA: char = '\u{FF0C}';

/// The set of characters a field may keep after normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterClass {
    /// ASCII digits only, capped at [`DURATION_CODE_LEN`] characters.
    Duration,
    /// ASCII digits, `.` and `,`. Full-width commas are folded too.
    Weights,
}

impl CharacterClass {
    fn allows(self, c: char) -> bool {
        match self {
            CharacterClass::Duration => c.is_ascii_digit(),
            CharacterClass::Weights => c.is_ascii_digit() || c == '.' || c == ',',
        }
    }

    fn max_len(self) -> Option<usize> {
        match self {
            CharacterClass::Duration => Some(DURATION_CODE_LEN),
            CharacterClass::Weights => None,
        }
    }
}

/// Folds a single full-width character to half-width where the class wants it.
pub fn to_halfwidth(c: char, class: CharacterClass) -> char {
    let code = c as u32;
    if (FULLWIDTH_ZERO..=FULLWIDTH_NINE).contains(&code) {
        // Offset within the block maps straight onto '0'..='9'
        return char::from(b'0' + (code - FULLWIDTH_ZERO) as u8);
    }
    if c == FULLWIDTH_COMMA && class == CharacterClass::Weights {
        return ',';
    }
    c
}

/// Sanitizes a raw field value for the given character class.
pub fn normalize(raw: &str, allowed: CharacterClass) -> String {
    let kept = raw.chars().map(|c| to_halfwidth(c, allowed)).filter(|&c| allowed.allows(c));

    match allowed.max_len() {
        Some(limit) => kept.take(limit).collect(),
        None => kept.collect(),
    }
}
