use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{env, fs::File, path::PathBuf};
use tracing::debug;

#[derive(Deserialize, Debug, PartialEq)]
pub struct Config {
	/// gitlab host name (without scheme)
	pub host: String,
	pub token: Option<String>,
	#[serde(skip)]
	pub path: PathBuf,
}

impl Config {
	pub fn read(config: Option<&String>) -> Result<Self> {
		let config_path = if let Some(config) = config {
			PathBuf::from(config)
		} else {
			// returns the first configuration path that exists from that order
			// - GLPAT_CONFIG
			// - ~/.config/glpat/config.yaml
			// - .glpat.yaml
			//
			// first test from env var
			env::var("GLPAT_CONFIG")
				.ok()
				.map(PathBuf::from)
				.filter(|path| path.exists())
				// then test from project dir
				.or(ProjectDirs::from("me", "IT Sufficient", "GlPat")
					.map(|path| path.config_dir().join("config.yaml"))
					.filter(|path| path.exists()))
				// then test in current directory
				.or(Some(PathBuf::from(".glpat.yaml")))
				.filter(|path| path.exists())
				.ok_or(anyhow!("Unable to find a suitable configuration file"))?
		};

		debug!("Reading configuration from {:?}", &config_path);
		// open configuration file
		let file =
			File::open(&config_path).with_context(|| format!("Can't open {:?}", &config_path))?;
		// deserialize configuration
		let mut config: Self = serde_yaml::from_reader(file)
			.with_context(|| format!("Can't read {:?}", &config_path))?;

		// save the choosen path
		config.path = config_path;
		Ok(config)
	}

	/// Returns the token to connect with. GITLAB_TOKEN takes precedence over the file.
	pub fn token(&self) -> Result<String> {
		self.resolve_token(env::var("GITLAB_TOKEN").ok())
	}

	fn resolve_token(&self, from_env: Option<String>) -> Result<String> {
		from_env
			.filter(|token| !token.is_empty())
			.or_else(|| self.token.clone())
			.ok_or_else(|| {
				anyhow!(
					"No token found in {:?}. Add one or set GITLAB_TOKEN",
					&self.path
				)
			})
	}
}
