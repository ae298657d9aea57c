/// A value that passed validation.
///
/// `Verified<T>` is the accepted side of every validation outcome. It can only
/// be produced by the validators in this crate, so holding one proves the value
/// went through the relevant checks.
///
/// # Construction Invariants
///
/// There is no public constructor and no `From<T>` implementation. The only
/// constructor is the crate-private `new_unchecked`, which validators call
/// after their checks pass.
///
/// ```compile_fail
/// use form_policy::Verified;
///
/// // This will not compile - no public constructor:
/// let verified = Verified::new("8-123-456-75-90".to_string());
/// ```
///
/// # Access
///
/// - [`AsRef::as_ref`]: borrow the checked value
/// - [`into_inner`](Self::into_inner): consume and extract it
///
/// ```
/// use form_policy::{Sanitizer, Tainted, PhoneNormalizer};
///
/// let verified = PhoneNormalizer
///     .sanitize(Tainted::new("8(123)4567590".to_string()))
///     .expect("valid phone");
///
/// assert_eq!(verified.as_ref().as_str(), "8-123-456-75-90");
/// let phone = verified.into_inner();
/// assert_eq!(phone.to_string(), "8-123-456-75-90");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verified<T> {
    inner: T,
}

impl<T> Verified<T> {
    /// Wraps a value without checking it.
    ///
    /// Only validators may call this, and only after every rule passed.
    pub(crate) fn new_unchecked(value: T) -> Self {
        Self { inner: value }
    }

    /// Consumes the `Verified<T>` and returns the checked value.
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T> AsRef<T> for Verified<T> {
    fn as_ref(&self) -> &T {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verified_as_ref_does_not_consume() {
        let verified = Verified::new_unchecked("alice".to_string());

        let ref1 = verified.as_ref();
        let ref2 = verified.as_ref();
        assert_eq!(ref1, ref2);

        assert_eq!(verified.into_inner(), "alice");
    }

    #[test]
    fn verified_derives_work() {
        let v1 = Verified::new_unchecked("8-123-456-75-90".to_string());
        let v2 = v1.clone();

        assert_eq!(v1, v2);
        assert!(format!("{:?}", v1).contains("Verified"));
    }

    mod proptests {
        use super::*;
        use crate::{credentials::LoginValidator, test_utils::arb_valid_login, Sanitizer, Tainted};
        use proptest::prelude::*;

        proptest! {
            /// Property: an accepted login comes back unchanged
            #[test]
            fn proptest_accepted_login_is_unchanged(login in arb_valid_login()) {
                let verified = LoginValidator
                    .sanitize(Tainted::new(login.clone()))
                    .expect("valid login should pass");

                prop_assert_eq!(verified.as_ref(), &login);
                prop_assert_eq!(verified.into_inner(), login);
            }
        }
    }
}
