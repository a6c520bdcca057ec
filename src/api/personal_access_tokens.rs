pub mod list;
pub mod revoke;

pub use self::list::PersonalAccessTokens;
pub use self::revoke::RevokePersonalAccessToken;

use crate::{
	api::{
		options::ListPersonalAccessTokensOptions,
		request::{self, RequestOption},
		response::Response,
	},
	error::Error,
	types::PersonalAccessToken,
};

use gitlab::api::Client;

/// Operations on the personal_access_tokens resource
///
/// The service only borrows the client: connection, authentication and
/// transport are the client's business.
/// <https://docs.gitlab.com/ee/api/personal_access_tokens.html>
pub struct PersonalAccessTokensService<'a, C> {
	client: &'a C,
}

impl<'a, C> PersonalAccessTokensService<'a, C>
where
	C: Client,
{
	pub fn new(client: &'a C) -> Self {
		Self { client }
	}

	/// List personal access tokens, optionally filtered and paginated.
	///
	/// The returned response carries the pagination headers; walking the pages
	/// is left to the caller.
	pub fn list(
		&self,
		options: Option<&ListPersonalAccessTokensOptions>,
		modifiers: &[RequestOption],
	) -> Result<(Vec<PersonalAccessToken>, Response), Error<C::Error>> {
		let endpoint = PersonalAccessTokens::new(options);
		request::query(&endpoint, self.client, modifiers)
	}

	/// Revoke the personal access token with the given id.
	///
	/// Gitlab answers 204 on success and an error status when the token does not
	/// exist, is not visible, or was already revoked.
	pub fn revoke(
		&self,
		token_id: u64,
		modifiers: &[RequestOption],
	) -> Result<Response, Error<C::Error>> {
		let endpoint = RevokePersonalAccessToken::new(token_id);
		request::ignore(&endpoint, self.client, modifiers)
	}
}
