use crate::{
	args::{self, TokenCmd},
	color::print_line,
	context::CliContext,
	fmt::{describe, TokenState},
};

use anyhow::{bail, Context, Result};
use chrono::Utc;
use glpat::api::{ListPersonalAccessTokensOptions, PersonalAccessTokenState, RequestOption};
use tracing::warn;

fn sudo(user: Option<&String>) -> Vec<RequestOption> {
	user.map(|user| RequestOption::Sudo(user.to_owned()))
		.into_iter()
		.collect()
}

pub fn cmd(context: &CliContext, args: &args::Token) -> Result<()> {
	match &args.cmd {
		TokenCmd::Revoke(args) => {
			let modifiers = sudo(args.sudo.as_ref());
			let id = context.token_id(&args.token, &modifiers)?;
			context
				.tokens()
				.revoke(id, &modifiers)
				.with_context(|| format!("Failed to revoke token {}", args.token))?;
			match &args.token {
				args::TokenRef::Id(_) => println!("token #{} has been revoked", id),
				args::TokenRef::Name(name) => println!("token {}(#{}) has been revoked", name, id),
			}
		}

		TokenCmd::List(args) => {
			let mut builder = ListPersonalAccessTokensOptions::builder();
			if let Some(user_id) = args.user_id {
				builder.user_id(user_id);
			}
			if let Some(search) = &args.search {
				builder.search(search.as_str());
			}
			if let Some(page) = args.page {
				builder.page(page);
			}
			if let Some(per_page) = args.per_page {
				builder.per_page(per_page);
			}
			if args.revoked {
				builder.revoked(true);
			}
			if !args.revoked && !args.all {
				builder.state(PersonalAccessTokenState::Active);
			}
			let options = builder.build()?;
			let tokens = context.list_tokens(&options, &sudo(args.sudo.as_ref()))?;
			if tokens.is_empty() {
				bail!("No token found matching criterias");
			}
			let now = Utc::now();
			for token in &tokens {
				print_line(
					context.color,
					TokenState::of(token, now),
					&describe(token, now, context.verbose),
				)?;
			}
		}
	}
	if context.open {
		let url = settings_url(&context.config.host);
		if let Err(err) = open::that(&url) {
			warn!(%url, %err, "unable to open the browser");
		}
	}
	Ok(())
}

/// Page of the user settings listing the personal access tokens
fn settings_url(host: &str) -> String {
	format!("https://{}/-/user_settings/personal_access_tokens", host)
}
