use bytes::Bytes;
use gitlab::api::{ApiError, Client, RestClient};
use http::{request::Builder, HeaderMap, Method, Response, StatusCode};
use std::sync::Mutex;
use thiserror::Error;
use url::Url;

pub const API_ROOT: &str = "https://gitlab.test/api/v4/";

#[derive(Debug, Error)]
#[error("test client error: {0}")]
pub struct TestClientError(pub String);

/// A request as it reached the client
#[derive(Debug, Clone)]
pub struct SentRequest {
	pub method: Method,
	pub url: Url,
	pub headers: HeaderMap,
}

impl SentRequest {
	pub fn path(&self) -> &str {
		self.url.path()
	}

	pub fn query(&self) -> Vec<(String, String)> {
		self.url.query_pairs().into_owned().collect()
	}

	pub fn query_param(&self, key: &str) -> Option<String> {
		self.query()
			.into_iter()
			.find(|(k, _)| k == key)
			.map(|(_, v)| v)
	}
}

/// In memory client answering every request with the same canned reply
pub struct TestClient {
	status: StatusCode,
	headers: Vec<(&'static str, &'static str)>,
	body: &'static str,
	unreachable: bool,
	bad_root: bool,
	sent: Mutex<Vec<SentRequest>>,
}

impl TestClient {
	pub fn new(status: StatusCode, body: &'static str) -> Self {
		Self {
			status,
			headers: Vec::new(),
			body,
			unreachable: false,
			bad_root: false,
			sent: Mutex::new(Vec::new()),
		}
	}

	/// A client whose transport always fails
	pub fn unreachable() -> Self {
		Self {
			unreachable: true,
			..Self::new(StatusCode::OK, "")
		}
	}

	/// A client unable to produce endpoint urls
	pub fn bad_root() -> Self {
		Self {
			bad_root: true,
			..Self::new(StatusCode::OK, "")
		}
	}

	pub fn with_header(mut self, name: &'static str, value: &'static str) -> Self {
		self.headers.push((name, value));
		self
	}

	pub fn sent(&self) -> Vec<SentRequest> {
		self.sent.lock().unwrap().clone()
	}

	/// The single request that was sent
	pub fn request(&self) -> SentRequest {
		let sent = self.sent();
		assert_eq!(sent.len(), 1, "expected exactly one request, got {:?}", sent);
		sent.into_iter().next().unwrap()
	}
}

impl RestClient for TestClient {
	type Error = TestClientError;

	fn rest_endpoint(&self, endpoint: &str) -> Result<Url, ApiError<Self::Error>> {
		if self.bad_root {
			return Ok(Url::parse("not a url")?.join(endpoint)?);
		}
		Ok(Url::parse(API_ROOT)?.join(endpoint)?)
	}
}

impl Client for TestClient {
	fn rest(&self, request: Builder, body: Vec<u8>) -> Result<Response<Bytes>, ApiError<Self::Error>> {
		let request = request
			.body(body)
			.map_err(|err| ApiError::client(TestClientError(err.to_string())))?;
		let url = Url::parse(&request.uri().to_string())?;
		self.sent.lock().unwrap().push(SentRequest {
			method: request.method().clone(),
			url,
			headers: request.headers().clone(),
		});

		if self.unreachable {
			return Err(ApiError::client(TestClientError(
				"connection refused".to_owned(),
			)));
		}

		let mut response = Response::builder().status(self.status);
		for (name, value) in &self.headers {
			response = response.header(*name, *value);
		}
		response
			.body(Bytes::from_static(self.body.as_bytes()))
			.map_err(|err| ApiError::client(TestClientError(err.to_string())))
	}
}
