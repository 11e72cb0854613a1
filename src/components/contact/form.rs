//! Contact form values, validation and submission status.
//!
//! The form is plain data so the component can keep it in a signal and the
//! submission flow can be exercised without a browser. Status moves
//! `Idle -> Submitting -> Submitted | Failed`; a successful submission reverts
//! to `Idle` once [`SUBMITTED_DISPLAY_MS`] have passed.

use std::collections::BTreeMap;

use serde::Serialize;

use super::relay::SubmitError;

/// How long the "message sent" banner stays up.
pub const SUBMITTED_DISPLAY_MS: f64 = 5000.0;

/// One of the four form inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
	/// Sender name.
	Name,
	/// Reply-to address.
	Email,
	/// Subject line.
	Subject,
	/// Message body.
	Message,
}

impl Field {
	/// Every field in form order.
	pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

	/// Input `name` attribute.
	pub fn key(self) -> &'static str {
		match self {
			Field::Name => "name",
			Field::Email => "email",
			Field::Subject => "subject",
			Field::Message => "message",
		}
	}

	fn required_message(self) -> &'static str {
		match self {
			Field::Name => "Le nom est requis",
			Field::Email => "L'email est requis",
			Field::Subject => "Le sujet est requis",
			Field::Message => "Le message est requis",
		}
	}
}

/// Payload posted to the relay.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
	/// Sender name.
	pub name: String,
	/// Reply-to address.
	pub email: String,
	/// Subject line.
	pub subject: String,
	/// Message body.
	pub message: String,
}

impl ContactMessage {
	/// Value of one field.
	pub fn get(&self, field: Field) -> &str {
		match field {
			Field::Name => &self.name,
			Field::Email => &self.email,
			Field::Subject => &self.subject,
			Field::Message => &self.message,
		}
	}

	fn slot(&mut self, field: Field) -> &mut String {
		match field {
			Field::Name => &mut self.name,
			Field::Email => &mut self.email,
			Field::Subject => &mut self.subject,
			Field::Message => &mut self.message,
		}
	}
}

/// Inline validation messages keyed by field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, &'static str>);

impl FieldErrors {
	/// Message for `field`, if it failed.
	pub fn get(&self, field: Field) -> Option<&'static str> {
		self.0.get(&field).copied()
	}

	/// Whether `field` failed validation.
	pub fn contains(&self, field: Field) -> bool {
		self.0.contains_key(&field)
	}

	/// Whether every field passed.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Number of failing fields.
	pub fn len(&self) -> usize {
		self.0.len()
	}
}

/// `local@domain.tld` shape: no whitespace, a single `@`, and a dot inside
/// the domain with at least one character on each side.
pub fn is_valid_email(email: &str) -> bool {
	if email.chars().any(char::is_whitespace) {
		return false;
	}
	let Some((local, domain)) = email.split_once('@') else {
		return false;
	};
	if local.is_empty() || domain.contains('@') {
		return false;
	}
	domain
		.char_indices()
		.any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Check every field and collect messages for the ones that fail.
pub fn validate(values: &ContactMessage) -> FieldErrors {
	let mut errors = BTreeMap::new();

	for field in Field::ALL {
		if values.get(field).trim().is_empty() {
			errors.insert(field, field.required_message());
		}
	}
	if !errors.contains_key(&Field::Email) && !is_valid_email(&values.email) {
		errors.insert(Field::Email, "Email invalide");
	}

	FieldErrors(errors)
}

/// Where the form is in its submit cycle.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum FormStatus {
	/// Nothing in flight.
	#[default]
	Idle,
	/// Waiting on the relay.
	Submitting,
	/// Accepted by the relay at the given timestamp (ms).
	Submitted {
		/// `Date.now()` when the relay answered.
		at: f64,
	},
	/// The relay or network refused the message.
	Failed(SubmitError),
}

/// Complete form state owned by the contact section.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
	values: ContactMessage,
	errors: FieldErrors,
	status: FormStatus,
}

impl ContactForm {
	/// Current input values.
	pub fn values(&self) -> &ContactMessage {
		&self.values
	}

	/// Messages from the last validation.
	pub fn errors(&self) -> &FieldErrors {
		&self.errors
	}

	/// Where the submit cycle stands.
	pub fn status(&self) -> &FormStatus {
		&self.status
	}

	/// Whether a send is in flight.
	pub fn is_submitting(&self) -> bool {
		matches!(self.status, FormStatus::Submitting)
	}

	/// User-facing banner text for a failed submission.
	pub fn failure_message(&self) -> Option<&'static str> {
		match &self.status {
			FormStatus::Failed(err) => Some(err.user_message()),
			_ => None,
		}
	}

	/// Update a field; its error, if any, goes away.
	pub fn set(&mut self, field: Field, value: impl Into<String>) {
		*self.values.slot(field) = value.into();
		self.errors.0.remove(&field);
	}

	/// Validate and, if everything passes, enter `Submitting`.
	///
	/// Returns the payload to send, or `None` when validation failed or a
	/// submission is already in flight.
	pub fn begin_submit(&mut self) -> Option<ContactMessage> {
		if self.is_submitting() {
			return None;
		}
		self.errors = validate(&self.values);
		if !self.errors.is_empty() {
			return None;
		}
		self.status = FormStatus::Submitting;
		Some(self.values.clone())
	}

	/// Apply the relay's answer. Success clears the fields; failure keeps them
	/// so the user can retry.
	pub fn complete(&mut self, outcome: Result<(), SubmitError>, now: f64) {
		match outcome {
			Ok(()) => {
				self.values = ContactMessage::default();
				self.status = FormStatus::Submitted { at: now };
			}
			Err(err) => {
				self.status = FormStatus::Failed(err);
			}
		}
	}

	/// Drop the "submitted" state once its display time has passed.
	pub fn expire(&mut self, now: f64) {
		if let FormStatus::Submitted { at } = self.status {
			if now - at >= SUBMITTED_DISPLAY_MS {
				self.status = FormStatus::Idle;
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;

	use super::super::relay::FormRelay;
	use super::*;

	/// Records every message instead of sending it.
	struct RecordingRelay {
		sent: RefCell<Vec<ContactMessage>>,
		answer: Result<(), SubmitError>,
	}

	impl RecordingRelay {
		fn answering(answer: Result<(), SubmitError>) -> Self {
			Self {
				sent: RefCell::new(Vec::new()),
				answer,
			}
		}
	}

	impl FormRelay for RecordingRelay {
		async fn send(&self, message: &ContactMessage) -> Result<(), SubmitError> {
			self.sent.borrow_mut().push(message.clone());
			self.answer.clone()
		}
	}

	fn filled() -> ContactForm {
		let mut form = ContactForm::default();
		form.set(Field::Name, "Ada Lovelace");
		form.set(Field::Email, "ada@example.org");
		form.set(Field::Subject, "Hello");
		form.set(Field::Message, "Let's talk about engines.");
		form
	}

	/// Mirrors the component: validate, send once, apply the answer.
	fn submit(form: &mut ContactForm, relay: &RecordingRelay, now: f64) {
		if let Some(message) = form.begin_submit() {
			let outcome = pollster::block_on(relay.send(&message));
			form.complete(outcome, now);
		}
	}

	#[test]
	fn email_shapes() {
		assert!(is_valid_email("a@b.co"));
		assert!(is_valid_email("first.last@sub.example.org"));
		assert!(!is_valid_email("not-an-email"));
		assert!(!is_valid_email("a@b"));
		assert!(!is_valid_email("a@.b"));
		assert!(!is_valid_email("a@b."));
		assert!(!is_valid_email("@b.co"));
		assert!(!is_valid_email("a@@b.co"));
		assert!(!is_valid_email("a@b@c.co"));
		assert!(!is_valid_email("a b@c.co"));
		assert!(!is_valid_email(" a@b.co"));
	}

	#[test]
	fn empty_name_blocks_submission() {
		let mut form = filled();
		form.set(Field::Name, "   ");
		let relay = RecordingRelay::answering(Ok(()));

		submit(&mut form, &relay, 0.0);

		assert_eq!(form.errors().get(Field::Name), Some("Le nom est requis"));
		assert!(relay.sent.borrow().is_empty());
		assert_eq!(form.status(), &FormStatus::Idle);
	}

	#[test]
	fn malformed_email_is_reported() {
		let mut form = filled();
		form.set(Field::Email, "not-an-email");
		let relay = RecordingRelay::answering(Ok(()));

		submit(&mut form, &relay, 0.0);

		assert_eq!(form.errors().get(Field::Email), Some("Email invalide"));
		assert_eq!(form.errors().len(), 1);
		assert!(relay.sent.borrow().is_empty());
	}

	#[test]
	fn every_empty_field_gets_its_own_error() {
		let errors = validate(&ContactMessage::default());
		assert_eq!(errors.len(), 4);
		for field in Field::ALL {
			assert!(errors.contains(field), "missing error for {}", field.key());
		}
		assert_eq!(errors.get(Field::Email), Some("L'email est requis"));
	}

	#[test]
	fn editing_clears_only_that_error() {
		let mut form = ContactForm::default();
		assert!(form.begin_submit().is_none());
		assert_eq!(form.errors().len(), 4);

		form.set(Field::Subject, "x");
		assert!(!form.errors().contains(Field::Subject));
		assert!(form.errors().contains(Field::Name));
		assert_eq!(form.errors().len(), 3);
	}

	#[test]
	fn valid_form_sends_once_with_values() {
		let mut form = filled();
		let expected = form.values().clone();
		let relay = RecordingRelay::answering(Ok(()));

		submit(&mut form, &relay, 1000.0);

		assert_eq!(relay.sent.borrow().as_slice(), &[expected]);
	}

	#[test]
	fn success_clears_fields_and_expires() {
		let mut form = filled();
		let relay = RecordingRelay::answering(Ok(()));

		submit(&mut form, &relay, 1000.0);

		assert_eq!(form.status(), &FormStatus::Submitted { at: 1000.0 });
		assert_eq!(form.values(), &ContactMessage::default());

		form.expire(5999.0);
		assert!(matches!(form.status(), FormStatus::Submitted { .. }));
		form.expire(6000.0);
		assert_eq!(form.status(), &FormStatus::Idle);
	}

	#[test]
	fn failure_keeps_values_and_reports() {
		let mut form = filled();
		let before = form.values().clone();
		let relay = RecordingRelay::answering(Err(SubmitError::Rejected { status: 500 }));

		submit(&mut form, &relay, 0.0);

		assert_eq!(form.values(), &before);
		assert_eq!(
			form.failure_message(),
			Some(SubmitError::Rejected { status: 500 }.user_message())
		);

		form.expire(1e9);
		assert!(matches!(form.status(), FormStatus::Failed(_)));
	}

	#[test]
	fn network_failure_has_its_own_message() {
		let mut form = filled();
		let relay = RecordingRelay::answering(Err(SubmitError::Network("offline".into())));

		submit(&mut form, &relay, 0.0);

		let msg = form.failure_message().unwrap();
		assert_ne!(msg, SubmitError::Rejected { status: 400 }.user_message());
	}

	#[test]
	fn retry_after_failure_clears_banner() {
		let mut form = filled();
		form.complete(Err(SubmitError::Rejected { status: 502 }), 0.0);

		assert!(form.begin_submit().is_some());
		assert!(form.is_submitting());
		assert_eq!(form.failure_message(), None);
	}

	#[test]
	fn no_double_submit_while_in_flight() {
		let mut form = filled();
		assert!(form.begin_submit().is_some());
		assert!(form.begin_submit().is_none());
	}

	#[test]
	fn payload_serializes_four_fields() {
		let json = serde_json::to_value(filled().values()).unwrap();
		assert_eq!(json["name"], "Ada Lovelace");
		assert_eq!(json["email"], "ada@example.org");
		assert_eq!(json["subject"], "Hello");
		assert_eq!(json.as_object().unwrap().len(), 4);
	}
}
