//! Delivery of contact messages to a third-party form relay.

use std::future::Future;

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

use super::form::ContactMessage;

/// Endpoint used when the site configuration does not name one.
pub const DEFAULT_ENDPOINT: &str = "https://formspree.io/f/xkgrlwel";

/// Errors that can occur while handing a message to the relay
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
	/// The relay answered with a non-success status
	#[error("relay rejected the message with status {status}")]
	Rejected {
		/// HTTP status code
		status: u16,
	},

	/// The request never completed
	#[error("network error: {0}")]
	Network(String),

	/// The payload could not be encoded
	#[error("encode error: {0}")]
	Encode(String),
}

impl From<serde_json::Error> for SubmitError {
	fn from(err: serde_json::Error) -> Self {
		SubmitError::Encode(err.to_string())
	}
}

impl SubmitError {
	/// Banner text shown under the form.
	pub fn user_message(&self) -> &'static str {
		match self {
			SubmitError::Rejected { .. } | SubmitError::Encode(_) => {
				"Une erreur est survenue lors de l'envoi. Veuillez réessayer."
			}
			SubmitError::Network(_) => {
				"Problème de connexion. Veuillez vérifier votre connexion internet et réessayer."
			}
		}
	}
}

/// Something that can deliver a contact message.
///
/// Only the outcome matters: `Ok` for any success status, an error otherwise.
/// Implementations never retry.
pub trait FormRelay {
	/// Deliver `message` once.
	fn send(&self, message: &ContactMessage) -> impl Future<Output = Result<(), SubmitError>>;
}

/// Posts JSON to an HTTP endpoint with the browser's `fetch`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchRelay {
	endpoint: String,
}

impl FetchRelay {
	/// Relay posting to `endpoint`.
	pub fn new(endpoint: impl Into<String>) -> Self {
		Self {
			endpoint: endpoint.into(),
		}
	}

	/// Target URL.
	pub fn endpoint(&self) -> &str {
		&self.endpoint
	}

	fn request(&self, body: &str) -> Result<Request, SubmitError> {
		let headers = Headers::new().map_err(js_error)?;
		headers
			.set("Content-Type", "application/json")
			.map_err(js_error)?;
		headers.set("Accept", "application/json").map_err(js_error)?;

		let init = RequestInit::new();
		init.set_method("POST");
		init.set_headers(&headers);
		init.set_body(&JsValue::from_str(body));

		Request::new_with_str_and_init(&self.endpoint, &init).map_err(js_error)
	}
}

impl Default for FetchRelay {
	fn default() -> Self {
		Self::new(DEFAULT_ENDPOINT)
	}
}

impl FormRelay for FetchRelay {
	async fn send(&self, message: &ContactMessage) -> Result<(), SubmitError> {
		let body = serde_json::to_string(message)?;
		let request = self.request(&body)?;
		let window =
			web_sys::window().ok_or_else(|| SubmitError::Network("no window".to_string()))?;

		let response = JsFuture::from(window.fetch_with_request(&request))
			.await
			.map_err(js_error)?;
		let response: Response = response.dyn_into().map_err(js_error)?;

		if response.ok() {
			Ok(())
		} else {
			Err(SubmitError::Rejected {
				status: response.status(),
			})
		}
	}
}

fn js_error(value: JsValue) -> SubmitError {
	SubmitError::Network(
		value
			.as_string()
			.unwrap_or_else(|| format!("{:?}", value)),
	)
}
