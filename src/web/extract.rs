//! Extraction boundary trait for web integration.

use super::FormInputs;

/// Extracts submitted form fields from a framework-specific request.
///
/// Framework integrations implement this to hand raw field values to the
/// validators. Every extracted value MUST be wrapped in `Tainted<T>`.
///
/// This trait does not validate anything; that is the handlers' job.
///
/// # Examples
///
/// ```
/// use form_policy::web::{ExtractFormFields, FormAdapter, FormInputs};
/// use std::collections::HashMap;
///
/// struct MyFrameworkRequest {
///     body: HashMap<String, String>,
/// }
///
/// impl ExtractFormFields for MyFrameworkRequest {
///     fn extract_form_fields(&self) -> FormInputs {
///         let mut adapter = FormAdapter::new("req-1".to_string());
///         for (k, v) in &self.body {
///             adapter.add_field(k.clone(), v.clone());
///         }
///         adapter.extract_form_fields()
///     }
/// }
///
/// let mut body = HashMap::new();
/// body.insert("phone".to_string(), "8(123)4567590".to_string());
/// let inputs = MyFrameworkRequest { body }.extract_form_fields();
/// assert!(inputs.contains("phone"));
/// ```
pub trait ExtractFormFields {
    /// Extracts every submitted field as a tainted value.
    fn extract_form_fields(&self) -> FormInputs;
}
