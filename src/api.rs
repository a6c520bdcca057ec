pub mod options;
pub mod personal_access_tokens;
pub mod request;
pub mod response;

pub use self::options::{ListOptions, ListPersonalAccessTokensOptions, PersonalAccessTokenState};
pub use self::personal_access_tokens::{
	PersonalAccessTokens, PersonalAccessTokensService, RevokePersonalAccessToken,
};
pub use self::request::RequestOption;
pub use self::response::{Pagination, RateLimit, Response};
