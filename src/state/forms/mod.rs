//! Form domain layer
//!
//! Type-safe handling of the lead registration form: field data, validation,
//! the dialing code table and the submission lifecycle controller.

mod controller;
mod country;
mod field;
mod form_state;
mod registration;
mod validation;

pub use controller::LeadCaptureForm;
pub use country::{find_country, DEFAULT_COUNTRY_CODE};
pub use field::{FieldName, FormStop};
pub use form_state::{Form, SubmissionRequest, SubmissionState, SubmitOutcome};
pub use registration::RegistrationFormData;
