use crate::{
	api::response::Response,
	error::{error_message, Error, RequestError},
};

use bytes::Bytes;
use gitlab::api::{Client, Endpoint};
use http::{header, HeaderMap, HeaderName, HeaderValue, Request};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

/// Per call modifier of a request
///
/// Modifiers are applied in order after the endpoint parameters, so a later
/// `Page` or `PerPage` overrides both the endpoint options and earlier modifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestOption {
	/// Set a header (replaces a previous value)
	Header(String, String),
	/// Run the request as another user (requires an admin token)
	Sudo(String),
	/// Append a query parameter
	Query(String, String),
	/// Override the requested page
	Page(u64),
	/// Override the page size
	PerPage(u64),
}

impl RequestOption {
	fn apply(&self, url: &mut Url, headers: &mut HeaderMap) -> Result<(), RequestError> {
		match self {
			Self::Header(name, value) => {
				let name = HeaderName::from_bytes(name.as_bytes())?;
				headers.insert(name, HeaderValue::from_str(value)?);
			}
			Self::Sudo(user) => {
				headers.insert("sudo", HeaderValue::from_str(user)?);
			}
			Self::Query(key, value) => {
				url.query_pairs_mut().append_pair(key, value);
			}
			Self::Page(page) => replace_query(url, "page", &page.to_string()),
			Self::PerPage(per_page) => replace_query(url, "per_page", &per_page.to_string()),
		}
		Ok(())
	}
}

fn replace_query(url: &mut Url, key: &str, value: &str) {
	let pairs: Vec<(String, String)> = url
		.query_pairs()
		.filter(|(k, _)| k != key)
		.map(|(k, v)| (k.into_owned(), v.into_owned()))
		.collect();
	url.query_pairs_mut()
		.clear()
		.extend_pairs(pairs)
		.append_pair(key, value);
}

/// Build the request described by the endpoint, send it and check the status.
fn send<E, C>(
	endpoint: &E,
	client: &C,
	options: &[RequestOption],
) -> Result<(Response, Bytes), Error<C::Error>>
where
	E: Endpoint,
	C: Client,
{
	let mut url = client
		.rest_endpoint(&endpoint.endpoint())
		.map_err(|source| RequestError::Url {
			source: Box::new(source),
		})?;
	endpoint.parameters().add_to_url(&mut url);

	let mut headers = HeaderMap::new();
	for option in options {
		option.apply(&mut url, &mut headers)?;
	}
	if url.query() == Some("") {
		url.set_query(None);
	}

	let data = match endpoint.body().map_err(RequestError::from)? {
		Some((mime, data)) => {
			headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(mime));
			data
		}
		None => Vec::new(),
	};

	let method = endpoint.method();
	debug!(%method, %url, "sending request");
	let mut request = Request::builder().method(method).uri(url.as_str());
	if let Some(map) = request.headers_mut() {
		map.extend(headers);
	}

	let rsp = client
		.rest(request, data)
		.map_err(|source| Error::Client { source })?;
	let response = Response::new(rsp.status(), rsp.headers().clone());
	debug!(status = %response.status, "received response");

	let body = rsp.into_body();
	if !response.status.is_success() {
		let message = error_message(response.status, &body);
		return Err(Error::Status { response, message });
	}
	Ok((response, body))
}

/// Send the request and decode the JSON body of the reply
pub fn query<T, E, C>(
	endpoint: &E,
	client: &C,
	options: &[RequestOption],
) -> Result<(T, Response), Error<C::Error>>
where
	T: DeserializeOwned,
	E: Endpoint,
	C: Client,
{
	let (response, body) = send(endpoint, client, options)?;
	match serde_json::from_slice(&body) {
		Ok(value) => Ok((value, response)),
		Err(source) => Err(Error::Decode { response, source }),
	}
}

/// Send the request and discard the body of the reply
pub fn ignore<E, C>(
	endpoint: &E,
	client: &C,
	options: &[RequestOption],
) -> Result<Response, Error<C::Error>>
where
	E: Endpoint,
	C: Client,
{
	send(endpoint, client, options).map(|(response, _)| response)
}
