use crate::{
	args::{ColorChoice, Opts, TokenRef},
	config::Config,
};

use anyhow::{anyhow, Context, Result};
use gitlab::{api::Client, Gitlab};
use glpat::{
	api::{
		ListPersonalAccessTokensOptions, PersonalAccessTokenState, PersonalAccessTokensService,
		RequestOption,
	},
	PersonalAccessToken,
};
use tracing::debug;

/// Structure to pass around functions containing informations
/// about execution context
pub struct CliContext {
	/// verbose mode
	pub verbose: bool,
	/// open links automatically
	pub open: bool,
	/// color mode
	pub color: ColorChoice,
	/// the gitlab connexion
	pub gitlab: Gitlab,
	/// the configuration file
	pub config: Config,
}

impl CliContext {
	/// Inializer from cli arguments
	pub fn from_args(opts: &Opts) -> Result<Self> {
		// read yaml config
		let config = Config::read(opts.config.as_ref())?;

		// connect to gitlab
		let gitlab = Gitlab::new(&config.host, config.token()?)
			.with_context(|| format!("Can't connect to {}", &config.host))?;

		Ok(Self {
			verbose: opts.verbose,
			open: opts.open,
			color: opts.color(),
			gitlab,
			config,
		})
	}

	pub fn tokens(&self) -> PersonalAccessTokensService<'_, Gitlab> {
		PersonalAccessTokensService::new(&self.gitlab)
	}

	/// Returns the tokens matching the options, walking every page unless one is requested
	pub fn list_tokens(
		&self,
		options: &ListPersonalAccessTokensOptions,
		modifiers: &[RequestOption],
	) -> Result<Vec<PersonalAccessToken>> {
		list_tokens(&self.tokens(), options, modifiers)
	}

	/// Returns the id of the designated token
	pub fn token_id(&self, token: &TokenRef, modifiers: &[RequestOption]) -> Result<u64> {
		token_id(&self.tokens(), token, modifiers)
	}
}

/// Returns the tokens matching the options. Unless a page is explicitly
/// requested, follows x-next-page until the last page.
pub fn list_tokens<C: Client>(
	service: &PersonalAccessTokensService<'_, C>,
	options: &ListPersonalAccessTokensOptions,
	modifiers: &[RequestOption],
) -> Result<Vec<PersonalAccessToken>> {
	let single_page = options.list_options.page.is_some();
	let mut options = options.clone();
	let mut tokens = Vec::new();
	loop {
		let (page, response) = service
			.list(Some(&options), modifiers)
			.context("Failed to list personal access tokens")?;
		debug!(
			page = ?response.pagination.page,
			total = ?response.pagination.total,
			count = page.len(),
			"tokens page received"
		);
		tokens.extend(page);
		match response.pagination.next_page {
			Some(next) if !single_page => options.list_options.page = Some(next),
			_ => break,
		}
	}
	Ok(tokens)
}

/// Returns the id of the designated token. A name is resolved to the active token
/// having exactly that name (the search filter also matches substrings).
pub fn token_id<C: Client>(
	service: &PersonalAccessTokensService<'_, C>,
	token: &TokenRef,
	modifiers: &[RequestOption],
) -> Result<u64> {
	match token {
		TokenRef::Id(id) => Ok(*id),
		TokenRef::Name(name) => {
			let options = ListPersonalAccessTokensOptions::builder()
				.search(name.as_str())
				.state(PersonalAccessTokenState::Active)
				.build()?;
			list_tokens(service, &options, modifiers)?
				.into_iter()
				.find(|token| &token.name == name)
				.map(|token| token.id)
				.ok_or_else(|| anyhow!("Can't find an active token named {}", name))
		}
	}
}
