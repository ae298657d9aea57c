/// Minimum number of characters in a login handle.
pub const LOGIN_MIN_LEN: usize = 5;

/// Punctuation and symbols a password may contain besides letters and digits.
pub const PASSWORD_SYMBOLS: &str = "~!?@#$%^&*_-+()[]{}<>/\\|\"',.:;";

/// The fixed password policy.
///
/// The rules are compile-time constants; the only instance is
/// [`PasswordPolicy::STANDARD`]. Rules are evaluated in the order they are
/// listed in [`PasswordError`](crate::PasswordError).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordPolicy {
    min_len: usize,
    max_len: usize,
    symbols: &'static str,
}

impl PasswordPolicy {
    /// 8 to 128 characters, at least one ASCII uppercase letter, one ASCII
    /// lowercase letter and one digit, no whitespace, and only Latin or
    /// Cyrillic letters, digits and [`PASSWORD_SYMBOLS`].
    pub const STANDARD: PasswordPolicy = PasswordPolicy {
        min_len: 8,
        max_len: 128,
        symbols: PASSWORD_SYMBOLS,
    };

    /// Minimum length in characters.
    pub fn min_len(&self) -> usize {
        self.min_len
    }

    /// Maximum length in characters.
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Returns `true` if `len` characters is within bounds.
    pub fn length_ok(&self, len: usize) -> bool {
        (self.min_len..=self.max_len).contains(&len)
    }

    /// Returns `true` if `c` may appear in a password.
    pub fn allows_char(&self, c: char) -> bool {
        c.is_ascii_alphanumeric() || is_cyrillic_letter(c) || self.symbols.contains(c)
    }
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self::STANDARD
    }
}

// The contiguous `А`..`я` block only. `Ё`/`ё` sit outside it and are rejected.
fn is_cyrillic_letter(c: char) -> bool {
    matches!(c, 'А'..='я')
}
