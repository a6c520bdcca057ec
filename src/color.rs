use crate::{args::ColorChoice, fmt::TokenState};

use std::io::{self, Write};

#[cfg(feature = "color")]
use termcolor::{Color, ColorSpec, StandardStream, WriteColor};

#[cfg(feature = "color")]
fn color_choice(choice: ColorChoice) -> termcolor::ColorChoice {
	match choice {
		ColorChoice::Always => termcolor::ColorChoice::Always,
		ColorChoice::Never => termcolor::ColorChoice::Never,
		ColorChoice::Auto if atty::is(atty::Stream::Stdout) => termcolor::ColorChoice::Auto,
		ColorChoice::Auto => termcolor::ColorChoice::Never,
	}
}

#[cfg(feature = "color")]
fn state_color(state: TokenState) -> Color {
	match state {
		TokenState::Active => Color::Green,
		TokenState::Expired => Color::Yellow,
		TokenState::Revoked => Color::Red,
		TokenState::Inactive => Color::Magenta,
	}
}

/// Print a line prefixed by the state of the token
#[cfg(feature = "color")]
pub fn print_line(choice: ColorChoice, state: TokenState, line: &str) -> io::Result<()> {
	let mut stdout = StandardStream::stdout(color_choice(choice));
	stdout.set_color(ColorSpec::new().set_fg(Some(state_color(state))).set_bold(true))?;
	write!(&mut stdout, "{:<8}", state.as_str())?;
	stdout.reset()?;
	writeln!(&mut stdout, " {}", line)
}

#[cfg(not(feature = "color"))]
pub fn print_line(_choice: ColorChoice, state: TokenState, line: &str) -> io::Result<()> {
	let mut stdout = io::stdout().lock();
	writeln!(&mut stdout, "{:<8} {}", state.as_str(), line)
}
