mod args;
mod cmd;
mod color;
mod config;
mod context;
mod fmt;

use crate::{
	args::{Opts, SubCommand},
	cmd::token::cmd as token,
	context::CliContext,
};

use anyhow::Result;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
		EnvFilter::new(if verbose {
			"warn,glpat=debug"
		} else {
			"warn"
		})
	});
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.init();
}

fn main() -> Result<()> {
	let opts: Opts = args::from_env();
	init_tracing(opts.verbose);
	let context = CliContext::from_args(&opts)?;

	match &opts.cmd {
		SubCommand::Token(args) => token(&context, args),
	}
}
