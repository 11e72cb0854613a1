//! Contact section with client-side validation.
//!
//! The form checks its four fields locally, then posts them once to a
//! third-party relay. Success clears the form and shows a banner for a few
//! seconds; failure keeps the entered values and explains what went wrong.

mod component;
mod form;
mod relay;

pub use component::ContactSection;
pub use form::{
	ContactForm, ContactMessage, Field, FieldErrors, FormStatus, SUBMITTED_DISPLAY_MS,
	is_valid_email, validate,
};
pub use relay::{DEFAULT_ENDPOINT, FetchRelay, FormRelay, SubmitError};
