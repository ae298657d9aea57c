//! Form handlers that run submitted fields through the validators.
//!
//! Each handler reads the fields it needs from a [`FormAdapter`], validates
//! them, logs the outcome against the request ID, and returns a typed result
//! that a rendering layer can turn into a page. A field that was not
//! submitted at all is validated as an empty string.

use crate::logging::ValidationLog;
use crate::{
    CanonicalPhone, Error, FormError, LoginValidator, PasswordValidator, PhoneError,
    PhoneNormalizer, Sanitizer, Secret, Tainted, Verified,
};

use super::{ExtractFormFields, FormAdapter, FormInputs};

fn field_or_empty(inputs: &FormInputs, key: &str) -> Tainted<String> {
    inputs
        .field(key)
        .unwrap_or_else(|| Tainted::new(String::new()))
}

fn secret_field_or_empty(inputs: &FormInputs, key: &str) -> Tainted<Secret<String>> {
    inputs
        .secret_field(key)
        .unwrap_or_else(|| Tainted::new(Secret::new(String::new())))
}

/// Result of the phone form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneFormResult {
    /// Request ID for tracing
    pub request_id: String,
    /// Canonical phone, or why the input was rejected
    pub outcome: Result<CanonicalPhone, PhoneError>,
}

impl PhoneFormResult {
    /// Returns `true` if the form should be re-rendered with an error.
    pub fn is_invalid(&self) -> bool {
        self.outcome.is_err()
    }

    /// Text to render: the canonical number, or the error message.
    pub fn message(&self) -> String {
        match &self.outcome {
            Ok(phone) => phone.to_string(),
            Err(reason) => reason.to_string(),
        }
    }
}

/// Handles the phone form (`phone` field).
///
/// # Examples
///
/// ```
/// use form_policy::web::{FormAdapter, handle_phone};
///
/// let mut adapter = FormAdapter::new("req-phone-001".to_string());
/// adapter.add_field("phone".to_string(), "+7 (123) 456-75-90".to_string());
///
/// let result = handle_phone(&adapter);
/// assert!(!result.is_invalid());
/// assert_eq!(result.message(), "8-123-456-75-90");
/// ```
pub fn handle_phone(adapter: &FormAdapter) -> PhoneFormResult {
    let log = ValidationLog::new(adapter.request_id());
    let inputs = adapter.extract_form_fields();

    let outcome = match PhoneNormalizer.sanitize(field_or_empty(&inputs, "phone")) {
        Ok(phone) => {
            log.accepted("phone");
            Ok(phone.into_inner())
        }
        Err(reason) => {
            log.rejected("phone", &reason);
            Err(reason)
        }
    };

    PhoneFormResult {
        request_id: adapter.request_id().to_string(),
        outcome,
    }
}

/// Non-sensitive fields of the user form, passed through unvalidated.
///
/// Missing name fields are empty strings. An empty or missing `role_id`
/// means no role.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserProfile {
    /// `first_name` field
    pub first_name: String,
    /// `last_name` field
    pub last_name: String,
    /// `middle_name` field
    pub middle_name: String,
    /// `role_id` field
    pub role_id: Option<String>,
}

impl UserProfile {
    fn from_form(adapter: &FormAdapter) -> Self {
        let text = |key: &str| adapter.raw_field(key).unwrap_or_default().to_string();
        Self {
            first_name: text("first_name"),
            last_name: text("last_name"),
            middle_name: text("middle_name"),
            role_id: adapter
                .raw_field("role_id")
                .filter(|id| !id.is_empty())
                .map(str::to_string),
        }
    }
}

/// Credentials accepted by the user creation form.
#[derive(Debug)]
pub struct NewCredentials {
    /// Request ID for tracing
    pub request_id: String,
    /// Accepted login
    pub login: Verified<String>,
    /// Accepted password, still redacted
    pub password: Verified<Secret<String>>,
    /// Name and role fields
    pub profile: UserProfile,
}

/// A rejected user creation form.
///
/// Carries everything needed to re-fill the form except the password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedCredentials {
    /// Request ID for tracing
    pub request_id: String,
    /// The submitted login, as typed
    pub login: String,
    /// Name and role fields, as typed
    pub profile: UserProfile,
    /// Every failure, login first
    pub errors: Vec<Error>,
}

impl RejectedCredentials {
    /// Messages to flash, in order.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

/// Handles the user creation form (`login` and `password` fields).
///
/// Both fields are always validated so the user sees every problem at once.
///
/// # Examples
///
/// ```
/// use form_policy::web::{FormAdapter, handle_create_user};
///
/// let mut adapter = FormAdapter::new("req-user-001".to_string());
/// adapter.add_field("login".to_string(), "ab".to_string());
/// adapter.add_field("password".to_string(), "weak".to_string());
/// adapter.add_field("first_name".to_string(), "Anna".to_string());
///
/// let rejected = handle_create_user(&adapter).unwrap_err();
/// assert_eq!(rejected.login, "ab");
/// assert_eq!(rejected.profile.first_name, "Anna");
/// assert_eq!(
///     rejected.messages(),
///     vec![
///         "Login must contain only Latin letters and numbers, minimum 5 characters",
///         "Password must be between 8 and 128 characters",
///     ]
/// );
/// ```
pub fn handle_create_user(adapter: &FormAdapter) -> Result<NewCredentials, RejectedCredentials> {
    let log = ValidationLog::new(adapter.request_id());
    let inputs = adapter.extract_form_fields();

    let login = LoginValidator.sanitize(field_or_empty(&inputs, "login"));
    let password =
        PasswordValidator::default().sanitize(secret_field_or_empty(&inputs, "password"));

    match (login, password) {
        (Ok(login), Ok(password)) => {
            log.accepted("login");
            log.accepted("password");
            Ok(NewCredentials {
                request_id: adapter.request_id().to_string(),
                login,
                password,
                profile: UserProfile::from_form(adapter),
            })
        }
        (login, password) => {
            let mut errors = Vec::with_capacity(2);
            if let Err(reason) = login {
                log.rejected("login", &reason);
                errors.push(Error::from(reason));
            }
            if let Err(reason) = password {
                log.rejected("password", &reason);
                errors.push(Error::from(reason));
            }
            Err(RejectedCredentials {
                request_id: adapter.request_id().to_string(),
                login: adapter.raw_field("login").unwrap_or_default().to_string(),
                profile: UserProfile::from_form(adapter),
                errors,
            })
        }
    }
}

/// Handles the password change form (`new_password` and `confirm_password`).
///
/// Checking the current password belongs to the authentication layer and
/// must happen before this is called.
///
/// # Errors
///
/// The first failing password rule, or [`FormError::PasswordMismatch`].
///
/// # Examples
///
/// ```
/// use form_policy::web::{FormAdapter, handle_change_password};
/// use form_policy::{Error, FormError};
///
/// let mut adapter = FormAdapter::new("req-pw-001".to_string());
/// adapter.add_field("new_password".to_string(), "NewPass1!".to_string());
/// adapter.add_field("confirm_password".to_string(), "NewPass2!".to_string());
///
/// let result = handle_change_password(&adapter);
/// assert_eq!(result.unwrap_err(), Error::Form(FormError::PasswordMismatch));
/// ```
pub fn handle_change_password(adapter: &FormAdapter) -> Result<Verified<Secret<String>>, Error> {
    let log = ValidationLog::new(adapter.request_id());
    let inputs = adapter.extract_form_fields();

    let new_password = PasswordValidator::default()
        .sanitize(secret_field_or_empty(&inputs, "new_password"))
        .map_err(|reason| {
            log.rejected("new_password", &reason);
            Error::from(reason)
        })?;

    let confirmation = secret_field_or_empty(&inputs, "confirm_password").into_inner();
    if new_password.as_ref().expose_secret() != confirmation.expose_secret() {
        let reason = FormError::PasswordMismatch;
        log.rejected("confirm_password", &reason);
        return Err(reason.into());
    }

    log.accepted("new_password");
    Ok(new_password)
}

/// A role form that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleForm {
    /// Request ID for tracing
    pub request_id: String,
    /// Role name, never empty
    pub name: String,
    /// Optional description; an empty submission becomes `None`
    pub description: Option<String>,
}

/// Handles the role create/edit form (`name` and `description`).
///
/// # Errors
///
/// [`FormError::EmptyRoleName`] if the name is missing or empty.
///
/// # Examples
///
/// ```
/// use form_policy::web::{FormAdapter, handle_role_form};
///
/// let mut adapter = FormAdapter::new("req-role-001".to_string());
/// adapter.add_field("name".to_string(), "admin".to_string());
///
/// let role = handle_role_form(&adapter).expect("valid role");
/// assert_eq!(role.name, "admin");
/// assert_eq!(role.description, None);
/// ```
pub fn handle_role_form(adapter: &FormAdapter) -> Result<RoleForm, Error> {
    let log = ValidationLog::new(adapter.request_id());
    let inputs = adapter.extract_form_fields();

    let name = field_or_empty(&inputs, "name").into_inner();
    if name.is_empty() {
        let reason = FormError::EmptyRoleName;
        log.rejected("name", &reason);
        return Err(reason.into());
    }
    log.accepted("name");

    let description = inputs
        .field("description")
        .map(Tainted::into_inner)
        .filter(|d| !d.is_empty());

    Ok(RoleForm {
        request_id: adapter.request_id().to_string(),
        name,
        description,
    })
}
