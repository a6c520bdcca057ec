use crate::api::Response;

use gitlab::api::{ApiError, BodyError};
use http::{
	header::{InvalidHeaderName, InvalidHeaderValue},
	StatusCode,
};
use serde_json::Value;
use thiserror::Error;

/// The request could not be built, nothing has been sent
#[derive(Debug, Error)]
pub enum RequestError {
	#[error("invalid header name: {source}")]
	HeaderName {
		#[from]
		source: InvalidHeaderName,
	},
	#[error("invalid header value: {source}")]
	HeaderValue {
		#[from]
		source: InvalidHeaderValue,
	},
	#[error("unable to encode the request body: {source}")]
	Body {
		#[from]
		source: BodyError,
	},
	#[error("unable to build the endpoint url: {source}")]
	Url {
		source: Box<dyn std::error::Error + Send + Sync + 'static>,
	},
}

/// Errors returned by the personal access tokens operations
///
/// `E` is the error type of the [`gitlab::api::Client`] the request went through.
#[derive(Debug, Error)]
pub enum Error<E>
where
	E: std::error::Error + Send + Sync + 'static,
{
	#[error("failed to build request: {source}")]
	Request {
		#[from]
		source: RequestError,
	},
	#[error("gitlab client error: {source}")]
	Client { source: ApiError<E> },
	#[error("gitlab returned {response}: {message}")]
	Status { response: Response, message: String },
	#[error("unable to decode the response ({response}): {source}")]
	Decode {
		response: Response,
		source: serde_json::Error,
	},
}

impl<E> Error<E>
where
	E: std::error::Error + Send + Sync + 'static,
{
	/// The response descriptor, if the server replied at all
	pub fn response(&self) -> Option<&Response> {
		match self {
			Self::Status { response, .. } | Self::Decode { response, .. } => Some(response),
			Self::Request { .. } | Self::Client { .. } => None,
		}
	}

	/// The HTTP status of the reply, if any
	pub fn status(&self) -> Option<StatusCode> {
		self.response().map(|response| response.status)
	}
}

/// Extract a readable message from a Gitlab error body.
///
/// Gitlab answers with `{"message": ...}` (a string or an object of field errors)
/// or with `{"error": ..., "error_description": ...}` for authentication failures.
pub(crate) fn error_message(status: StatusCode, body: &[u8]) -> String {
	let message = match serde_json::from_slice::<Value>(body) {
		Ok(Value::Object(object)) => object
			.get("message")
			.or_else(|| object.get("error_description"))
			.or_else(|| object.get("error"))
			.map(|value| match value {
				Value::String(s) => s.clone(),
				other => other.to_string(),
			}),
		_ => Some(String::from_utf8_lossy(body).trim().to_owned()),
	};
	message
		.filter(|message| !message.is_empty())
		.unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown error").to_owned())
}
