//! Request adapter for mapping submitted forms to tainted inputs.

use std::collections::HashMap;

use crate::{FormError, Secret, Tainted};

use super::ExtractFormFields;

/// Adapter for converting a framework-specific form submission into tainted
/// inputs.
///
/// Holds plain owned data so it does not depend on any web framework.
/// Integrations either fill it field by field or parse a URL-encoded body
/// with [`from_urlencoded`](Self::from_urlencoded).
///
/// # Examples
///
/// ```
/// use form_policy::web::{FormAdapter, ExtractFormFields};
///
/// let mut adapter = FormAdapter::new("req-12345".to_string());
/// adapter.add_field("phone".to_string(), "+7 (123) 456-75-90".to_string());
///
/// let inputs = adapter.extract_form_fields();
/// assert!(inputs.field("phone").is_some());
/// assert!(inputs.field("email").is_none());
/// ```
///
/// Raw field values are not readable from outside the crate. They only leave
/// through the validators:
///
/// ```compile_fail
/// use form_policy::web::FormAdapter;
///
/// let adapter = FormAdapter::from_urlencoded("req-1".to_string(), "password=Hunter2Hunter2")
///     .expect("well-formed body");
/// let _leak: Option<&str> = adapter.raw_field("password");
/// ```
#[derive(Debug, Clone)]
pub struct FormAdapter {
    /// Unique request identifier (required)
    request_id: String,
    /// Submitted form fields (all tainted on extraction)
    fields: HashMap<String, String>,
}

impl FormAdapter {
    /// Creates an adapter with no fields.
    pub fn new(request_id: String) -> Self {
        Self {
            request_id,
            fields: HashMap::new(),
        }
    }

    /// Parses an `application/x-www-form-urlencoded` body.
    ///
    /// `+` decodes to a space and `%XX` escapes are percent-decoded. A pair
    /// without `=` is a field with an empty value. When a key repeats, the
    /// last value wins.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::MalformedEncoding`] if a key or value does not
    /// decode to valid UTF-8.
    ///
    /// # Examples
    ///
    /// ```
    /// use form_policy::web::{handle_phone, ExtractFormFields, FormAdapter};
    ///
    /// let adapter = FormAdapter::from_urlencoded(
    ///     "req-1".to_string(),
    ///     "phone=%2B7+%28123%29+456-75-90&login=alice",
    /// )
    /// .expect("well-formed body");
    ///
    /// let inputs = adapter.extract_form_fields();
    /// assert!(inputs.contains("phone"));
    /// assert!(inputs.contains("login"));
    /// assert_eq!(handle_phone(&adapter).message(), "8-123-456-75-90");
    /// ```
    pub fn from_urlencoded(request_id: String, body: &str) -> Result<Self, FormError> {
        let mut adapter = Self::new(request_id);

        for pair in body.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            adapter.add_field(decode_component(key)?, decode_component(value)?);
        }

        Ok(adapter)
    }

    /// Adds a form field, replacing any earlier value for the same key.
    pub fn add_field(&mut self, key: String, value: String) {
        self.fields.insert(key, value);
    }

    /// Returns a reference to the request ID.
    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    // Only for echoing non-sensitive fields into a re-rendered form.
    pub(crate) fn raw_field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }
}

fn decode_component(raw: &str) -> Result<String, FormError> {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|decoded| decoded.into_owned())
        .map_err(|_| FormError::MalformedEncoding)
}

impl ExtractFormFields for FormAdapter {
    fn extract_form_fields(&self) -> FormInputs {
        FormInputs {
            fields: self
                .fields
                .iter()
                .map(|(k, v)| (k.clone(), Tainted::new(v.clone())))
                .collect(),
        }
    }
}

/// Collection of tainted form fields.
///
/// Read-only. Lookups are explicit: a missing field is `None`, never a
/// default.
#[derive(Debug, Clone)]
pub struct FormInputs {
    fields: HashMap<String, Tainted<String>>,
}

impl FormInputs {
    /// Returns the tainted value of a field, if it was submitted.
    pub fn field(&self, key: &str) -> Option<Tainted<String>> {
        self.fields.get(key).cloned()
    }

    /// Returns a field as a tainted secret, if it was submitted.
    pub fn secret_field(&self, key: &str) -> Option<Tainted<Secret<String>>> {
        self.field(key).map(|value| value.map(Secret::new))
    }

    /// Returns `true` if the field was submitted.
    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Number of submitted fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if nothing was submitted.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
