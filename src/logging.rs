use std::fmt;

/// Request-scoped logging for form validation.
///
/// `ValidationLog` is created by the form handlers for each submission and
/// tags every event with the request ID. It records which field was accepted
/// or rejected and why; field values are never logged.
#[derive(Debug, Clone, Copy)]
pub struct ValidationLog<'a> {
    request_id: &'a str,
}

impl<'a> ValidationLog<'a> {
    /// Creates a logger bound to a request ID.
    pub(crate) fn new(request_id: &'a str) -> Self {
        Self { request_id }
    }

    /// Returns the request ID associated with this logger.
    pub fn request_id(&self) -> &str {
        self.request_id
    }

    /// Records that a field passed validation.
    pub fn accepted(&self, field: &str) {
        tracing::info!(request_id = %self.request_id, field, "form field accepted");
    }

    /// Records that a field failed validation.
    pub fn rejected(&self, field: &str, reason: &dyn fmt::Display) {
        tracing::warn!(
            request_id = %self.request_id,
            field,
            reason = %reason,
            "form field rejected"
        );
    }
}
