use std::borrow::Cow;

use derive_builder::Builder;
use gitlab::api::{ParamValue, QueryParams};

/// Generic pagination parameters shared by list requests
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ListOptions {
	/// The page to retrieve (starts at 1)
	pub page: Option<u64>,
	/// The number of items per page
	pub per_page: Option<u64>,
}

impl ListOptions {
	pub(crate) fn push_params(&self, params: &mut QueryParams) {
		params.push_opt("page", self.page);
		params.push_opt("per_page", self.per_page);
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonalAccessTokenState {
	Active,
	Inactive,
}

impl PersonalAccessTokenState {
	pub(crate) fn as_str(&self) -> &'static str {
		match self {
			PersonalAccessTokenState::Active => "active",
			PersonalAccessTokenState::Inactive => "inactive",
		}
	}
}

impl ParamValue<'static> for PersonalAccessTokenState {
	fn as_value(&self) -> Cow<'static, str> {
		self.as_str().into()
	}
}

/// Filters and pagination for listing personal access tokens
///
/// Every field is optional and only serialized as a query parameter when set.
#[derive(Debug, Default, Clone, PartialEq, Eq, Builder)]
#[builder(default)]
pub struct ListPersonalAccessTokensOptions {
	/// Pagination parameters
	pub list_options: ListOptions,
	/// Only the tokens owned by this user (admin only for other users)
	#[builder(setter(strip_option))]
	pub user_id: Option<u64>,
	/// Only revoked (true) or non revoked (false) tokens
	#[builder(setter(strip_option))]
	pub revoked: Option<bool>,
	#[builder(setter(strip_option))]
	pub state: Option<PersonalAccessTokenState>,
	/// Only the tokens whose name contains this pattern
	#[builder(setter(into, strip_option))]
	pub search: Option<String>,
}

impl ListPersonalAccessTokensOptionsBuilder {
	/// Set the page without building a separate ListOptions
	pub fn page(&mut self, page: u64) -> &mut Self {
		self.list_options
			.get_or_insert_with(ListOptions::default)
			.page = Some(page);
		self
	}

	/// Set the page size without building a separate ListOptions
	pub fn per_page(&mut self, per_page: u64) -> &mut Self {
		self.list_options
			.get_or_insert_with(ListOptions::default)
			.per_page = Some(per_page);
		self
	}
}

impl ListPersonalAccessTokensOptions {
	/// Create a builder for the options.
	pub fn builder() -> ListPersonalAccessTokensOptionsBuilder {
		ListPersonalAccessTokensOptionsBuilder::default()
	}

	pub(crate) fn push_params<'a>(&'a self, params: &mut QueryParams<'a>) {
		self.list_options.push_params(params);
		params.push_opt("user_id", self.user_id);
		params.push_opt("revoked", self.revoked);
		params.push_opt("state", self.state);
		params.push_opt("search", self.search.as_deref());
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn builder_leaves_unset_filters_empty() {
		let options = ListPersonalAccessTokensOptions::builder().build().unwrap();
		assert_eq!(options, ListPersonalAccessTokensOptions::default());
		assert_eq!(options.user_id, None);
		assert_eq!(options.list_options, ListOptions::default());
	}

	#[test]
	fn builder_sets_pagination_inline() {
		let options = ListPersonalAccessTokensOptions::builder()
			.user_id(4)
			.page(2)
			.per_page(50)
			.search("ci")
			.build()
			.unwrap();
		assert_eq!(options.user_id, Some(4));
		assert_eq!(options.search.as_deref(), Some("ci"));
		assert_eq!(
			options.list_options,
			ListOptions {
				page: Some(2),
				per_page: Some(50)
			}
		);
	}
}
