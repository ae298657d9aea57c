//! Login and password validation.
//!
//! Both validators are stateless check chains. The password rules run in a
//! fixed order and the first failing rule is reported; see
//! [`PasswordError`] for that order.

use crate::policy::LOGIN_MIN_LEN;
use crate::{
    Error, FormError, LoginError, PasswordError, PasswordPolicy, Sanitizer, Secret, Tainted,
    Verified,
};

/// Validates a login handle.
///
/// A login must be at least [`LOGIN_MIN_LEN`] characters, all ASCII letters or
/// digits. There is no upper bound.
///
/// # Examples
///
/// ```
/// use form_policy::{validate_login, LoginError};
///
/// assert_eq!(validate_login("alice42"), Ok(()));
/// assert_eq!(validate_login(""), Err(LoginError::Empty));
/// assert_eq!(validate_login("a"), Err(LoginError::InvalidFormat));
/// ```
pub fn validate_login(login: &str) -> Result<(), LoginError> {
    if login.is_empty() {
        return Err(LoginError::Empty);
    }

    // All-ASCII, so the byte length is the character count.
    if login.len() < LOGIN_MIN_LEN || !login.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return Err(LoginError::InvalidFormat);
    }

    Ok(())
}

/// Validates a password against [`PasswordPolicy::STANDARD`].
///
/// # Examples
///
/// ```
/// use form_policy::{validate_password, PasswordError};
///
/// assert_eq!(validate_password("Passw0rd!"), Ok(()));
/// assert_eq!(validate_password("weak"), Err(PasswordError::InvalidLength));
/// assert_eq!(validate_password("password1"), Err(PasswordError::MissingUppercase));
/// ```
pub fn validate_password(password: &str) -> Result<(), PasswordError> {
    check_password(&PasswordPolicy::STANDARD, password)
}

fn check_password(policy: &PasswordPolicy, password: &str) -> Result<(), PasswordError> {
    if password.is_empty() {
        return Err(PasswordError::Empty);
    }
    if !policy.length_ok(password.chars().count()) {
        return Err(PasswordError::InvalidLength);
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(PasswordError::MissingUppercase);
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Err(PasswordError::MissingLowercase);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(PasswordError::MissingDigit);
    }
    if password.chars().any(char::is_whitespace) {
        return Err(PasswordError::ContainsWhitespace);
    }
    if !password.chars().all(|c| policy.allows_char(c)) {
        return Err(PasswordError::InvalidCharacters);
    }
    Ok(())
}

/// Validates a login and a password together, reporting every failure.
///
/// Login errors come before password errors. Each validator still contributes
/// only its first failing rule, so the result holds at most two errors.
///
/// # Examples
///
/// ```
/// use form_policy::{validate_credentials, Error, LoginError, PasswordError};
///
/// let errors = validate_credentials("", "weak").unwrap_err();
/// assert_eq!(
///     errors,
///     vec![
///         Error::Login(LoginError::Empty),
///         Error::Password(PasswordError::InvalidLength),
///     ]
/// );
/// ```
pub fn validate_credentials(login: &str, password: &str) -> Result<(), Vec<Error>> {
    let errors: Vec<Error> = [
        validate_login(login).map_err(Error::from),
        validate_password(password).map_err(Error::from),
    ]
    .into_iter()
    .filter_map(Result::err)
    .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a new password and its confirmation.
///
/// The new password is checked against the policy first; the confirmation is
/// compared only once the password itself is acceptable.
///
/// # Errors
///
/// - [`Error::Password`] with the first failing policy rule.
/// - [`Error::Form`] with [`FormError::PasswordMismatch`] if the two differ.
pub fn validate_password_change(new_password: &str, confirmation: &str) -> Result<(), Error> {
    validate_password(new_password)?;

    if new_password != confirmation {
        return Err(FormError::PasswordMismatch.into());
    }

    Ok(())
}

/// [`Sanitizer`] adapter over [`validate_login`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LoginValidator;

impl Sanitizer<String> for LoginValidator {
    type Output = String;
    type Error = LoginError;

    fn sanitize(&self, input: Tainted<String>) -> Result<Verified<String>, LoginError> {
        let login = input.into_inner();
        if let Err(reason) = validate_login(&login) {
            tracing::debug!(reason = ?reason, "login input rejected");
            return Err(reason);
        }
        Ok(Verified::new_unchecked(login))
    }
}

/// [`Sanitizer`] adapter over the password policy.
///
/// Takes the password already wrapped in [`Secret`] and hands it back still
/// wrapped, so the value is never exposed to `Debug` output.
///
/// # Examples
///
/// ```
/// use form_policy::{PasswordValidator, PasswordError, Sanitizer, Secret, Tainted};
///
/// let input = Tainted::new(Secret::new("Passw0rd!".to_string()));
/// let verified = PasswordValidator::default().sanitize(input).expect("valid password");
/// assert_eq!(format!("{:?}", verified.as_ref()), "[REDACTED]");
///
/// let input = Tainted::new(Secret::new("Pass word1".to_string()));
/// let result = PasswordValidator::default().sanitize(input);
/// assert_eq!(result.unwrap_err(), PasswordError::ContainsWhitespace);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordValidator {
    policy: PasswordPolicy,
}

impl PasswordValidator {
    /// Returns the policy this validator enforces.
    pub fn policy(&self) -> &PasswordPolicy {
        &self.policy
    }
}

impl Sanitizer<Secret<String>> for PasswordValidator {
    type Output = Secret<String>;
    type Error = PasswordError;

    fn sanitize(
        &self,
        input: Tainted<Secret<String>>,
    ) -> Result<Verified<Secret<String>>, PasswordError> {
        let password = input.into_inner();
        if let Err(reason) = check_password(&self.policy, password.expose_secret()) {
            tracing::debug!(reason = ?reason, "password input rejected");
            return Err(reason);
        }
        Ok(Verified::new_unchecked(password))
    }
}
