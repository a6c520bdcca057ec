use crate::api::options::ListPersonalAccessTokensOptions;

use gitlab::api::{Endpoint, QueryParams};
use reqwest::Method;
use std::borrow::Cow;

/// Get a list of personal access tokens
///
/// Without options, Gitlab lists the tokens of the authenticated user with its
/// default pagination.
#[derive(Debug, Default, Clone, Copy)]
pub struct PersonalAccessTokens<'a> {
	options: Option<&'a ListPersonalAccessTokensOptions>,
}

impl<'a> PersonalAccessTokens<'a> {
	pub fn new(options: Option<&'a ListPersonalAccessTokensOptions>) -> Self {
		Self { options }
	}
}

impl<'a> From<&'a ListPersonalAccessTokensOptions> for PersonalAccessTokens<'a> {
	fn from(options: &'a ListPersonalAccessTokensOptions) -> Self {
		Self::new(Some(options))
	}
}

impl<'a> Endpoint for PersonalAccessTokens<'a> {
	fn method(&self) -> Method {
		Method::GET
	}

	fn endpoint(&self) -> Cow<'static, str> {
		"personal_access_tokens".into()
	}

	fn parameters(&self) -> QueryParams {
		let mut params = QueryParams::default();
		if let Some(options) = self.options {
			options.push_params(&mut params);
		}

		params
	}
}
