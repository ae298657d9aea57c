//! Phone number normalization.
//!
//! Free-form phone input is reduced to the domestic canonical form
//! `8-XXX-XXX-XX-XX`. The checks run in a fixed order:
//!
//! 1. Empty input is a wrong digit count.
//! 2. Every character must be a digit, whitespace, or one of `( ) - . +`.
//! 3. Separators are stripped and the remaining digits counted. Ten digits are
//!    used as-is; eleven are accepted only with a leading `7` or `8`, which is
//!    dropped.
//!
//! Character validation always precedes the digit count, so input that has
//! both problems reports [`PhoneError::InvalidCharacters`].

use std::fmt;

use crate::{PhoneError, Sanitizer, Tainted, Verified};

/// Number of significant digits in a canonical phone number.
pub const SIGNIFICANT_DIGITS: usize = 10;

/// A phone number in canonical `8-XXX-XXX-XX-XX` form.
///
/// Always holds exactly ten significant digits behind the leading `8`.
/// Only [`normalize`] can build one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalPhone(String);

impl CanonicalPhone {
    /// Returns the canonical string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the ten significant digits without separators or the `8` prefix.
    pub fn significant_digits(&self) -> String {
        self.0[2..].chars().filter(char::is_ascii_digit).collect()
    }
}

impl fmt::Display for CanonicalPhone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalPhone {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

fn is_allowed_char(c: char) -> bool {
    c.is_ascii_digit() || c.is_whitespace() || matches!(c, '(' | ')' | '-' | '.' | '+')
}

/// Normalizes raw phone text into a [`CanonicalPhone`].
///
/// # Errors
///
/// - [`PhoneError::InvalidCharacters`] if any character is outside the
///   permitted set.
/// - [`PhoneError::WrongDigitCount`] if the input is empty, the digit count is
///   not 10 or 11, or an 11-digit number does not start with `7` or `8`.
///
/// # Examples
///
/// ```
/// use form_policy::{normalize, PhoneError};
///
/// assert_eq!(normalize("+7 (123) 456-75-90").unwrap().as_str(), "8-123-456-75-90");
/// assert_eq!(normalize("8(123)4567590").unwrap().as_str(), "8-123-456-75-90");
/// assert_eq!(normalize("123@456-75-90"), Err(PhoneError::InvalidCharacters));
/// assert_eq!(normalize("91234567890"), Err(PhoneError::WrongDigitCount));
/// ```
pub fn normalize(raw: &str) -> Result<CanonicalPhone, PhoneError> {
    if raw.is_empty() {
        return Err(PhoneError::WrongDigitCount);
    }

    if !raw.chars().all(is_allowed_char) {
        return Err(PhoneError::InvalidCharacters);
    }

    let digits: Vec<u8> = raw.bytes().filter(u8::is_ascii_digit).collect();

    let significant = match digits.as_slice() {
        [b'7' | b'8', rest @ ..] if digits.len() == SIGNIFICANT_DIGITS + 1 => rest,
        all if all.len() == SIGNIFICANT_DIGITS => all,
        _ => return Err(PhoneError::WrongDigitCount),
    };

    Ok(CanonicalPhone(format_canonical(significant)))
}

/// Formats ten ASCII digits as `8-ddd-ddd-dd-dd`.
fn format_canonical(digits: &[u8]) -> String {
    let mut out = String::with_capacity(15);
    out.push('8');
    for group in [&digits[0..3], &digits[3..6], &digits[6..8], &digits[8..10]] {
        out.push('-');
        out.extend(group.iter().map(|&b| char::from(b)));
    }
    out
}

/// [`Sanitizer`] adapter over [`normalize`].
///
/// # Examples
///
/// ```
/// use form_policy::{Sanitizer, Tainted, PhoneNormalizer};
///
/// let verified = PhoneNormalizer
///     .sanitize(Tainted::new("123.456.75.90".to_string()))
///     .expect("valid phone");
/// assert_eq!(verified.into_inner().as_str(), "8-123-456-75-90");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PhoneNormalizer;

impl Sanitizer<String> for PhoneNormalizer {
    type Output = CanonicalPhone;
    type Error = PhoneError;

    fn sanitize(&self, input: Tainted<String>) -> Result<Verified<CanonicalPhone>, PhoneError> {
        let raw = input.into_inner();
        match normalize(&raw) {
            Ok(phone) => Ok(Verified::new_unchecked(phone)),
            Err(reason) => {
                tracing::debug!(reason = ?reason, "phone input rejected");
                Err(reason)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_international_prefix_with_separators() {
        let phone = normalize("+7 (123) 456-75-90").expect("valid phone");
        assert_eq!(phone.as_str(), "8-123-456-75-90");
    }

    #[test]
    fn accepts_domestic_prefix_without_spaces() {
        let phone = normalize("8(123)4567590").expect("valid phone");
        assert_eq!(phone.as_str(), "8-123-456-75-90");
    }

    #[test]
    fn accepts_ten_digits_with_dots() {
        let phone = normalize("123.456.75.90").expect("valid phone");
        assert_eq!(phone.as_str(), "8-123-456-75-90");
    }

    #[test]
    fn accepts_ten_digits_with_spaces() {
        let phone = normalize("123 456 75 90").expect("valid phone");
        assert_eq!(phone.as_str(), "8-123-456-75-90");
    }

    #[test]
    fn accepts_mixed_separators() {
        let phone = normalize("123-456.75(90)").expect("valid phone");
        assert_eq!(phone.as_str(), "8-123-456-75-90");
    }

    #[test]
    fn accepts_bare_eleven_digits_starting_with_seven() {
        let phone = normalize("79991234567").expect("valid phone");
        assert_eq!(phone.as_str(), "8-999-123-45-67");
    }

    #[test]
    fn rejects_empty_input_as_wrong_digit_count() {
        assert_eq!(normalize(""), Err(PhoneError::WrongDigitCount));
    }

    #[test]
    fn rejects_separator_only_input_as_wrong_digit_count() {
        assert_eq!(normalize(" ( ) - "), Err(PhoneError::WrongDigitCount));
    }

    #[test]
    fn rejects_nine_digits() {
        assert_eq!(normalize("123456789"), Err(PhoneError::WrongDigitCount));
    }

    #[test]
    fn rejects_twelve_digits() {
        assert_eq!(normalize("+7 123 456 75 901"), Err(PhoneError::WrongDigitCount));
    }

    #[test]
    fn rejects_eleven_digits_with_foreign_prefix() {
        assert_eq!(normalize("91234567890"), Err(PhoneError::WrongDigitCount));
    }

    #[test]
    fn rejects_invalid_symbol() {
        assert_eq!(normalize("123@456-75-90"), Err(PhoneError::InvalidCharacters));
    }

    #[test]
    fn rejects_letters() {
        assert_eq!(normalize("8-800-CALL-NOW"), Err(PhoneError::InvalidCharacters));
    }

    #[test]
    fn rejects_non_ascii_digits() {
        assert_eq!(normalize("١٢٣٤٥٦٧٨٩٠"), Err(PhoneError::InvalidCharacters));
    }

    #[test]
    fn invalid_characters_win_over_digit_count() {
        // Three digits and a letter: both rules fail, characters are reported.
        assert_eq!(normalize("12a3"), Err(PhoneError::InvalidCharacters));
    }

    #[test]
    fn separators_do_not_count_toward_length() {
        assert_eq!(
            normalize("((((1234567890))))----...."),
            Ok(normalize("1234567890").expect("valid phone"))
        );
    }

    #[test]
    fn canonical_form_is_a_fixed_point() {
        let phone = normalize("+7 (123) 456-75-90").expect("valid phone");
        let again = normalize(phone.as_str()).expect("canonical form is valid input");
        assert_eq!(phone, again);
    }

    #[test]
    fn significant_digits_strip_prefix_and_separators() {
        let phone = normalize("+7 (123) 456-75-90").expect("valid phone");
        assert_eq!(phone.significant_digits(), "1234567590");
    }

    #[test]
    fn sanitizer_wraps_canonical_value() {
        let verified = PhoneNormalizer
            .sanitize(Tainted::new("8(123)4567590".to_string()))
            .expect("valid phone");

        assert_eq!(verified.as_ref().to_string(), "8-123-456-75-90");
    }

    #[test]
    fn sanitizer_reports_reason() {
        let result = PhoneNormalizer.sanitize(Tainted::new("123456789".to_string()));
        assert_eq!(result.unwrap_err(), PhoneError::WrongDigitCount);
    }

    mod proptests {
        use super::*;
        use crate::test_utils::{arb_formatted_phone, arb_phone_digits};
        use proptest::prelude::*;

        proptest! {
            /// Property: every accepted phone has the canonical shape
            #[test]
            fn proptest_accepted_phone_has_canonical_shape(input in arb_formatted_phone()) {
                let phone = normalize(&input).expect("formatted phone should pass");
                let bytes = phone.as_str().as_bytes();

                prop_assert_eq!(bytes.len(), 15);
                prop_assert_eq!(bytes[0], b'8');
                for (i, b) in bytes.iter().enumerate() {
                    if matches!(i, 1 | 5 | 9 | 12) {
                        prop_assert_eq!(*b, b'-');
                    } else {
                        prop_assert!(b.is_ascii_digit());
                    }
                }
            }

            /// Property: normalizing the digit-only form of a canonical phone is a no-op
            #[test]
            fn proptest_normalize_is_idempotent(digits in arb_phone_digits()) {
                let first = normalize(&digits).expect("ten digits should pass");
                let digit_only: String = first.as_str().chars().filter(char::is_ascii_digit).collect();
                let second = normalize(&digit_only).expect("canonical digits should pass");

                prop_assert_eq!(first, second);
            }

            /// Property: any input outside the allowed set reports invalid characters
            #[test]
            fn proptest_forbidden_char_always_reported(
                digits in arb_phone_digits(),
                bad in prop::char::any().prop_filter("forbidden", |c| !is_allowed_char(*c)),
                pos in 0usize..=10,
            ) {
                let mut input = digits;
                input.insert(pos, bad);

                prop_assert_eq!(normalize(&input), Err(PhoneError::InvalidCharacters));
            }

            /// Property: digit counts other than 10 and 11 are rejected
            #[test]
            fn proptest_wrong_length_rejected(
                digits in prop::string::string_regex("[0-9]{0,9}|[0-9]{12,20}").unwrap()
            ) {
                prop_assert_eq!(normalize(&digits), Err(PhoneError::WrongDigitCount));
            }
        }
    }
}
