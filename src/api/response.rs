use std::{fmt, str::FromStr};

use chrono::{DateTime, TimeZone, Utc};
use http::{HeaderMap, StatusCode};

/// What the Gitlab API answered, independently of the decoded body
#[derive(Debug, Clone)]
pub struct Response {
	/// The HTTP status of the reply
	pub status: StatusCode,
	/// Every header of the reply
	pub headers: HeaderMap,
	/// Pagination metadata (x-page, x-total...)
	pub pagination: Pagination,
	/// Rate limiting metadata when the instance sends it
	pub rate_limit: Option<RateLimit>,
}

impl Response {
	pub fn new(status: StatusCode, headers: HeaderMap) -> Self {
		let pagination = Pagination::from_headers(&headers);
		let rate_limit = RateLimit::from_headers(&headers);
		Self {
			status,
			headers,
			pagination,
			rate_limit,
		}
	}
}

impl fmt::Display for Response {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "HTTP {}", self.status)
	}
}

/// Offset pagination headers sent by Gitlab on list endpoints
///
/// Gitlab omits `x-total` and `x-total-pages` on large collections, and sends an
/// empty `x-next-page` on the last page, both of which end up as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pagination {
	pub page: Option<u64>,
	pub per_page: Option<u64>,
	pub next_page: Option<u64>,
	pub prev_page: Option<u64>,
	pub total: Option<u64>,
	pub total_pages: Option<u64>,
}

impl Pagination {
	pub fn from_headers(headers: &HeaderMap) -> Self {
		Self {
			page: header_value(headers, "x-page"),
			per_page: header_value(headers, "x-per-page"),
			next_page: header_value(headers, "x-next-page"),
			prev_page: header_value(headers, "x-prev-page"),
			total: header_value(headers, "x-total"),
			total_pages: header_value(headers, "x-total-pages"),
		}
	}

	/// Returns true if another page follows this one
	pub fn has_next(&self) -> bool {
		self.next_page.is_some()
	}
}

/// Rate limiting headers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimit {
	pub limit: u64,
	pub remaining: u64,
	pub reset: DateTime<Utc>,
}

impl RateLimit {
	/// Only returns something if the three headers are present and valid
	pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
		let limit = header_value(headers, "ratelimit-limit")?;
		let remaining = header_value(headers, "ratelimit-remaining")?;
		let reset = header_value::<i64>(headers, "ratelimit-reset")?;
		let reset = Utc.timestamp_opt(reset, 0).single()?;
		Some(Self {
			limit,
			remaining,
			reset,
		})
	}
}

fn header_value<T: FromStr>(headers: &HeaderMap, name: &str) -> Option<T> {
	headers
		.get(name)
		.and_then(|value| value.to_str().ok())
		.map(str::trim)
		.filter(|value| !value.is_empty())
		.and_then(|value| value.parse().ok())
}

#[cfg(test)]
mod tests {
	use super::*;
	use http::HeaderValue;
	use pretty_assertions::assert_eq;

	fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
		let mut map = HeaderMap::new();
		for (name, value) in pairs {
			map.insert(*name, HeaderValue::from_static(value));
		}
		map
	}

	#[test]
	fn pagination_reads_gitlab_headers() {
		let map = headers(&[
			("x-page", "2"),
			("x-per-page", "20"),
			("x-next-page", "3"),
			("x-prev-page", "1"),
			("x-total", "45"),
			("x-total-pages", "3"),
		]);
		assert_eq!(
			Pagination::from_headers(&map),
			Pagination {
				page: Some(2),
				per_page: Some(20),
				next_page: Some(3),
				prev_page: Some(1),
				total: Some(45),
				total_pages: Some(3),
			}
		);
	}

	#[test]
	fn empty_next_page_means_last_page() {
		let map = headers(&[("x-page", "3"), ("x-next-page", ""), ("x-prev-page", "2")]);
		let pagination = Pagination::from_headers(&map);
		assert!(!pagination.has_next());
		assert_eq!(pagination.prev_page, Some(2));
		assert_eq!(pagination.total, None);
	}

	#[test]
	fn rate_limit_needs_every_header() {
		let partial = headers(&[("ratelimit-limit", "600"), ("ratelimit-remaining", "599")]);
		assert_eq!(RateLimit::from_headers(&partial), None);

		let full = headers(&[
			("ratelimit-limit", "600"),
			("ratelimit-remaining", "599"),
			("ratelimit-reset", "1595514707"),
		]);
		let rate_limit = RateLimit::from_headers(&full).unwrap();
		assert_eq!(rate_limit.limit, 600);
		assert_eq!(rate_limit.remaining, 599);
		assert_eq!(
			rate_limit.reset,
			Utc.with_ymd_and_hms(2020, 7, 23, 14, 31, 47).unwrap()
		);
	}

	#[test]
	fn response_displays_status() {
		let response = Response::new(StatusCode::NOT_FOUND, HeaderMap::new());
		assert_eq!(response.to_string(), "HTTP 404 Not Found");
		assert_eq!(response.pagination, Pagination::default());
	}
}
