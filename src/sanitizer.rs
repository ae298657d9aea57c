use crate::{Tainted, Verified};

/// Converts raw input into checked input.
///
/// A `Sanitizer<T>` takes a `Tainted<T>`, applies its rules, and either
/// returns the accepted value wrapped in [`Verified`] or the reason the input
/// was rejected. Every validator in this crate is exposed through this trait so
/// that the form layer can treat them uniformly.
///
/// # Invariants
///
/// Implementations MUST:
/// - Check the input against all of their rules before producing `Verified`
/// - Return the first failing rule as `Err`
/// - Be pure: the same input always yields the same outcome
/// - Not echo the rejected input in the error
///
/// # Examples
///
/// ```
/// use form_policy::{Sanitizer, Tainted, PhoneNormalizer, PhoneError};
///
/// let accepted = PhoneNormalizer.sanitize(Tainted::new("+7 (123) 456-75-90".to_string()));
/// assert_eq!(accepted.unwrap().as_ref().as_str(), "8-123-456-75-90");
///
/// let rejected = PhoneNormalizer.sanitize(Tainted::new("123@456-75-90".to_string()));
/// assert_eq!(rejected.unwrap_err(), PhoneError::InvalidCharacters);
/// ```
pub trait Sanitizer<T> {
    /// The canonical value produced on acceptance.
    type Output;
    /// The rejection reason.
    type Error;

    /// Validates a tainted value, returning a verified value on success.
    ///
    /// # Errors
    ///
    /// Returns `Self::Error` naming the first rule the input violates.
    fn sanitize(&self, input: Tainted<T>) -> Result<Verified<Self::Output>, Self::Error>;
}
