use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A personal access token as returned by the Gitlab API
///
/// Tokens are never built locally: the only way to get one is to decode a
/// reply of the personal_access_tokens endpoints.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PersonalAccessToken {
	pub id: u64,
	pub name: String,
	pub revoked: bool,
	#[serde(default, deserialize_with = "timestamp::deserialize")]
	pub created_at: Option<DateTime<Utc>>,
	pub scopes: Vec<String>,
	pub active: bool,
	pub user_id: u64,
	#[serde(default, deserialize_with = "timestamp::deserialize")]
	pub last_used_at: Option<DateTime<Utc>>,
	/// Expiry day (Gitlab sends 2020-10-14), held as midnight UTC and written back as a date
	#[serde(
		default,
		deserialize_with = "timestamp::deserialize",
		serialize_with = "timestamp::serialize_date"
	)]
	pub expires_at: Option<DateTime<Utc>>,
}

impl PersonalAccessToken {
	pub fn expired(&self) -> bool {
		if let Some(d) = self.expires_at {
			Utc::now() > d
		} else {
			false
		}
	}
}

impl fmt::Display for PersonalAccessToken {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}({}) [{}]", self.name, self.id, self.scopes.join(", "))
	}
}

/// Nullable timestamps accepting either RFC 3339 or a bare date (midnight UTC)
mod timestamp {
	use super::*;
	use chrono::TimeZone;
	use serde::{de, Deserializer, Serializer};

	pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
	where
		D: Deserializer<'de>,
	{
		Option::<String>::deserialize(deserializer)?
			.map(|s| parse(&s).map_err(de::Error::custom))
			.transpose()
	}

	pub fn serialize_date<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		match value {
			Some(datetime) => serializer.collect_str(&datetime.date_naive().format("%Y-%m-%d")),
			None => serializer.serialize_none(),
		}
	}

	pub(super) fn parse(s: &str) -> Result<DateTime<Utc>, String> {
		if let Ok(datetime) = DateTime::parse_from_rfc3339(s) {
			return Ok(datetime.with_timezone(&Utc));
		}
		NaiveDate::parse_from_str(s, "%Y-%m-%d")
			.ok()
			.and_then(|date| date.and_hms_opt(0, 0, 0))
			.map(|naive| Utc.from_utc_datetime(&naive))
			.ok_or_else(|| format!("invalid timestamp or date: {}", s))
	}
}
