use std::fmt;

/// Errors that can occur while validating form input.
///
/// Each variant wraps the reason reported by one validator. The `Display`
/// output is the user-facing message for that reason and never contains the
/// rejected input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The phone normalizer rejected the input
    Phone(PhoneError),
    /// The login validator rejected the input
    Login(LoginError),
    /// The password validator rejected the input
    Password(PasswordError),
    /// A form-level check failed
    Form(FormError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Phone(e) => write!(f, "{}", e),
            Error::Login(e) => write!(f, "{}", e),
            Error::Password(e) => write!(f, "{}", e),
            Error::Form(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<PhoneError> for Error {
    fn from(e: PhoneError) -> Self {
        Error::Phone(e)
    }
}

impl From<LoginError> for Error {
    fn from(e: LoginError) -> Self {
        Error::Login(e)
    }
}

impl From<PasswordError> for Error {
    fn from(e: PasswordError) -> Self {
        Error::Password(e)
    }
}

impl From<FormError> for Error {
    fn from(e: FormError) -> Self {
        Error::Form(e)
    }
}

/// Why a phone number was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneError {
    /// Empty input, a digit count other than 10 or 11, or an 11-digit
    /// number that does not start with 7 or 8.
    WrongDigitCount,
    /// A character outside digits, whitespace and `( ) - . +`.
    InvalidCharacters,
}

impl fmt::Display for PhoneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // The 11-digit wrong-prefix case shares this message.
            Self::WrongDigitCount => write!(f, "Недопустимый ввод. Неверное количество цифр."),
            Self::InvalidCharacters => write!(
                f,
                "Недопустимый ввод. В номере телефона встречаются недопустимые символы."
            ),
        }
    }
}

impl std::error::Error for PhoneError {}

/// Why a login handle was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginError {
    /// The login is empty.
    Empty,
    /// The login is not at least 5 ASCII letters or digits.
    InvalidFormat,
}

impl fmt::Display for LoginError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Login cannot be empty"),
            Self::InvalidFormat => write!(
                f,
                "Login must contain only Latin letters and numbers, minimum 5 characters"
            ),
        }
    }
}

impl std::error::Error for LoginError {}

/// Why a password was rejected.
///
/// Variants are listed in the order the rules are checked. Only the first
/// failing rule is ever reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordError {
    /// The password is empty.
    Empty,
    /// The password is shorter than 8 or longer than 128 characters.
    InvalidLength,
    /// No ASCII uppercase letter.
    MissingUppercase,
    /// No ASCII lowercase letter.
    MissingLowercase,
    /// No ASCII digit.
    MissingDigit,
    /// The password contains whitespace.
    ContainsWhitespace,
    /// A character outside letters, digits and the allowed symbol set.
    InvalidCharacters,
}

impl fmt::Display for PasswordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Password cannot be empty"),
            Self::InvalidLength => write!(f, "Password must be between 8 and 128 characters"),
            Self::MissingUppercase => {
                write!(f, "Password must contain at least one uppercase letter")
            }
            Self::MissingLowercase => {
                write!(f, "Password must contain at least one lowercase letter")
            }
            Self::MissingDigit => write!(f, "Password must contain at least one number"),
            Self::ContainsWhitespace => write!(f, "Password must not contain spaces"),
            Self::InvalidCharacters => write!(f, "Password contains invalid characters"),
        }
    }
}

impl std::error::Error for PasswordError {}

/// Form-level failures that are not tied to a single validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    /// The new password and its confirmation differ.
    PasswordMismatch,
    /// A role was submitted without a name.
    EmptyRoleName,
    /// The form body could not be percent-decoded as UTF-8.
    MalformedEncoding,
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PasswordMismatch => write!(f, "New passwords do not match"),
            Self::EmptyRoleName => write!(f, "Role name cannot be empty"),
            Self::MalformedEncoding => write!(f, "Form body is not valid URL-encoded UTF-8"),
        }
    }
}

impl std::error::Error for FormError {}
