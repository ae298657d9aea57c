//! Web framework integration surface.
//!
//! This module is the boundary between an HTTP framework and the validators.
//! It handles:
//! - Reading submitted form fields (field by field or from a URL-encoded body)
//! - Introducing taint at the boundary (every field becomes `Tainted<T>`)
//! - Running the form handlers and logging outcomes against the request ID
//!
//! It contains no framework-specific code, no sessions and no rendering.
//! Handlers return typed results; turning them into HTML is the caller's job.
//!
//! # Example Flow
//!
//! ```
//! use form_policy::web::{FormAdapter, handle_phone};
//!
//! // 1. Build an adapter from the request body
//! let adapter = FormAdapter::from_urlencoded(
//!     "req-001".to_string(),
//!     "phone=8%28123%294567590",
//! )
//! .expect("well-formed body");
//!
//! // 2. Run the handler
//! let result = handle_phone(&adapter);
//!
//! // 3. Render
//! assert_eq!(result.message(), "8-123-456-75-90");
//! ```

mod adapter;
mod extract;
mod handlers;

pub use adapter::{FormAdapter, FormInputs};
pub use extract::ExtractFormFields;
pub use handlers::{
    handle_change_password, handle_create_user, handle_phone, handle_role_form, NewCredentials,
    PhoneFormResult, RejectedCredentials, RoleForm, UserProfile,
};
