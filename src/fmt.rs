use chrono::{DateTime, Utc};
use glpat::PersonalAccessToken;

/// State of a token as shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenState {
	Active,
	Expired,
	Revoked,
	Inactive,
}

impl TokenState {
	pub fn of(token: &PersonalAccessToken, now: DateTime<Utc>) -> Self {
		if token.revoked {
			Self::Revoked
		} else if token.expires_at.map(|d| now > d).unwrap_or(false) {
			Self::Expired
		} else if token.active {
			Self::Active
		} else {
			Self::Inactive
		}
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Active => "active",
			Self::Expired => "expired",
			Self::Revoked => "revoked",
			Self::Inactive => "inactive",
		}
	}
}

/// One line description of a token, without its state
pub fn describe(token: &PersonalAccessToken, now: DateTime<Utc>, verbose: bool) -> String {
	let formatter = timeago::Formatter::new();
	let mut line = format!("#{} {} [{}]", token.id, token.name, token.scopes.join(","));
	if let Some(created_at) = token.created_at {
		line.push_str(&format!(
			" created {}",
			formatter.convert_chrono(created_at, now)
		));
	}
	match token.expires_at {
		Some(expires_at) => line.push_str(&format!(" expires {}", expires_at.date_naive())),
		None => line.push_str(" never expires"),
	}
	if verbose {
		line.push_str(&format!(" user={}", token.user_id));
		if let Some(last_used_at) = token.last_used_at {
			line.push_str(&format!(
				" last used {}",
				formatter.convert_chrono(last_used_at, now)
			));
		}
	}
	line
}
