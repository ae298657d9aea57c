//! Typed validation for web form input.
//!
//! This crate holds the validation rules shared by a set of form-driven web
//! pages:
//! - **Phone normalization**: free-form phone text to canonical `8-XXX-XXX-XX-XX`
//! - **Credential validation**: login format and an ordered password policy
//! - **Taint tracking**: raw form values stay wrapped until a validator accepts them
//!
//! Every validator is a pure function returning `Result<_, Reason>` where the
//! reason is a closed enum whose `Display` is the user-facing message.
//!
//! # Core Types
//!
//! - [`Tainted<T>`]: Raw, unchecked input from a form
//! - [`Verified<T>`]: A value that passed validation
//! - [`Secret<T>`]: Wrapper that redacts passwords in logs/output
//! - [`Sanitizer`]: Trait every validator implements
//! - [`CanonicalPhone`]: A normalized phone number
//! - [`PasswordPolicy`]: The fixed password rules
//!
//! # Examples
//!
//! ```
//! use form_policy::{normalize, validate_login, validate_password, PasswordError, PhoneError};
//!
//! assert_eq!(normalize("+7 (123) 456-75-90").unwrap().as_str(), "8-123-456-75-90");
//! assert_eq!(normalize("123@456-75-90"), Err(PhoneError::InvalidCharacters));
//!
//! assert!(validate_login("alice").is_ok());
//! assert_eq!(validate_password("weak"), Err(PasswordError::InvalidLength));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod credentials;
mod error;
mod logging;
mod phone;
mod policy;
mod sanitizer;
mod secret;
mod tainted;
mod verified;

pub mod web;

#[cfg(test)]
mod test_utils;

pub use credentials::{
    validate_credentials, validate_login, validate_password, validate_password_change,
    LoginValidator, PasswordValidator,
};
pub use error::{Error, FormError, LoginError, PasswordError, PhoneError};
pub use logging::ValidationLog;
pub use phone::{normalize, CanonicalPhone, PhoneNormalizer, SIGNIFICANT_DIGITS};
pub use policy::{PasswordPolicy, LOGIN_MIN_LEN, PASSWORD_SYMBOLS};
pub use sanitizer::Sanitizer;
pub use secret::Secret;
pub use tainted::Tainted;
pub use verified::Verified;
