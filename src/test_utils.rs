//! Shared proptest strategies for unit tests.

use proptest::prelude::*;

use crate::policy::PASSWORD_SYMBOLS;

/// Exactly ten ASCII digits.
pub(crate) fn arb_phone_digits() -> impl Strategy<Value = String> {
    prop::string::string_regex("[0-9]{10}").unwrap()
}

/// Ten significant digits with an optional country prefix and arbitrary
/// permitted separators between the digits.
pub(crate) fn arb_formatted_phone() -> impl Strategy<Value = String> {
    let prefix = prop::sample::select(vec!["", "7", "8", "+7", "+7 ", "8 ("]);
    let separator = prop::sample::select(vec!["", "", " ", "-", ".", "(", ")", " - "]);

    (
        prefix,
        arb_phone_digits(),
        prop::collection::vec(separator, 11),
    )
        .prop_map(|(prefix, digits, seps)| {
            let mut out = String::from(prefix);
            for (digit, sep) in digits.chars().zip(seps.iter()) {
                out.push(digit);
                out.push_str(sep);
            }
            out
        })
}

/// Logins made of 5 to 40 ASCII letters and digits.
pub(crate) fn arb_valid_login() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9]{5,40}").unwrap()
}

/// Passwords satisfying every rule of the standard policy.
pub(crate) fn arb_valid_password() -> impl Strategy<Value = String> {
    let mut allowed: Vec<char> = ('a'..='z')
        .chain('A'..='Z')
        .chain('0'..='9')
        .chain('А'..='я')
        .collect();
    allowed.extend(PASSWORD_SYMBOLS.chars());

    (
        prop::char::range('A', 'Z'),
        prop::char::range('a', 'z'),
        prop::char::range('0', '9'),
        prop::collection::vec(prop::sample::select(allowed), 5..100),
    )
        .prop_map(|(upper, lower, digit, mut rest)| {
            rest.extend([upper, lower, digit]);
            rest
        })
        .prop_shuffle()
        .prop_map(|chars| chars.into_iter().collect::<String>())
}
