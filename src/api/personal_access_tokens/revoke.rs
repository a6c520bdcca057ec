use std::borrow::Cow;

use gitlab::api::{endpoint_prelude::Method, Endpoint};

/// Revoke a personal access token
#[derive(Debug, Clone, Copy)]
pub struct RevokePersonalAccessToken {
	/// The token_id to revoke
	token_id: u64,
}

impl RevokePersonalAccessToken {
	pub fn new(token_id: u64) -> Self {
		Self { token_id }
	}
}

impl Endpoint for RevokePersonalAccessToken {
	fn method(&self) -> Method {
		Method::DELETE
	}

	fn endpoint(&self) -> Cow<'static, str> {
		format!("personal_access_tokens/{}", self.token_id).into()
	}
}
