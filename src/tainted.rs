use std::fmt;

/// Raw form input that has not been through a validator yet.
///
/// `Tainted<T>` marks values submitted by a client (form fields, query
/// strings) and keeps them away from code that expects checked data. The
/// inner value can only be reached through a [`Sanitizer`](crate::Sanitizer).
///
/// # Examples
///
/// ```
/// use form_policy::Tainted;
///
/// let phone = Tainted::new("+7 (123) 456-75-90".to_string());
///
/// // Debug output is allowed for development
/// println!("{:?}", phone);
///
/// // But the value cannot be used as a String directly:
/// // let s: String = phone; // Won't compile!
/// ```
// Do NOT remove Clone: the same raw field may be fed to more than one validator.
#[derive(Clone)]
pub struct Tainted<T> {
    // Must stay private. A public field would let callers skip validation.
    inner: T,
}

impl<T> Tainted<T> {
    /// Wraps an unchecked value in `Tainted`.
    pub fn new(value: T) -> Self {
        Self { inner: value }
    }

    /// Extracts the inner value for validation.
    ///
    /// Restricted to the crate: only validators may unwrap raw input, and
    /// they must check it before wrapping the result in `Verified<T>`.
    pub(crate) fn into_inner(self) -> T {
        self.inner
    }

    /// Transforms the raw value without releasing it from taint.
    pub(crate) fn map<U>(self, f: impl FnOnce(T) -> U) -> Tainted<U> {
        Tainted { inner: f(self.inner) }
    }
}

// Do NOT add Deref, AsRef, Borrow, From<T> or Into<T> here; any of them
// would let raw input bypass the validators.

impl<T: fmt::Debug> fmt::Debug for Tainted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tainted")
            .field("inner", &self.inner)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Secret;

    #[test]
    fn tainted_debug_marks_the_value() {
        let phone = Tainted::new("8(123)4567590".to_string());
        let debug_output = format!("{:?}", phone);

        assert!(debug_output.contains("Tainted"));
        assert!(debug_output.contains("8(123)4567590"));
    }

    #[test]
    fn tainted_secret_stays_redacted_in_debug() {
        let password = Tainted::new(Secret::new("Hunter2Hunter2".to_string()));
        let debug_output = format!("{:?}", password);

        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("Hunter2"));
    }

    #[test]
    fn map_keeps_value_tainted() {
        let raw = Tainted::new("Passw0rd!".to_string());
        let wrapped: Tainted<Secret<String>> = raw.map(Secret::new);

        assert_eq!(wrapped.into_inner().expose_secret(), "Passw0rd!");
    }

    mod proptests {
        use super::*;
        use crate::{phone::PhoneNormalizer, test_utils::arb_formatted_phone, Sanitizer};
        use proptest::prelude::*;

        proptest! {
            /// Property: a cloned raw value validates to the same canonical phone
            #[test]
            fn proptest_tainted_clone_preserves_outcome(input in arb_formatted_phone()) {
                let normalizer = PhoneNormalizer;

                let tainted1 = Tainted::new(input);
                let tainted2 = tainted1.clone();

                let verified1 = normalizer.sanitize(tainted1).expect("formatted phone should pass");
                let verified2 = normalizer.sanitize(tainted2).expect("formatted phone should pass");

                prop_assert_eq!(verified1, verified2);
            }
        }
    }
}
