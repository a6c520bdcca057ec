use anyhow::Error;
#[cfg(feature = "color")]
use argh::FromArgValue;
use argh::{FromArgs, TopLevelCommand};
use std::{fmt::Display, path::Path, str::FromStr};

/// Color mode
#[allow(dead_code)]
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

#[cfg(feature = "color")]
impl FromArgValue for ColorChoice {
    fn from_arg_value(value: &str) -> Result<Self, String> {
        if value == "auto" {
            Ok(Self::Auto)
        } else if value == "always" {
            Ok(Self::Always)
        } else if value == "never" {
            Ok(Self::Never)
        } else {
            Err(format!(
                "{} not supported for --color. Use either \"auto\", \"always\" or \"never\"",
                value
            ))
        }
    }
}

/// Manage Gitlab personal access tokens
#[derive(FromArgs)]
pub struct Opts {
    /// configuration file containing gitlab connection parameters
    #[argh(option, short = 'c')]
    pub config: Option<String>,

    /// more detailed output
    #[argh(switch, short = 'v')]
    pub verbose: bool,

    /// open the tokens page of the profile in a browser
    #[argh(switch, short = 'o')]
    pub open: bool,

    #[cfg(feature = "color")]
    /// color mode: auto (default), always or never
    #[argh(option, default = "ColorChoice::Auto")]
    pub color: ColorChoice,

    #[argh(subcommand)]
    pub cmd: SubCommand,
}

impl Opts {
    #[cfg(feature = "color")]
    pub fn color(&self) -> ColorChoice {
        self.color
    }

    #[cfg(not(feature = "color"))]
    pub fn color(&self) -> ColorChoice {
        ColorChoice::Never
    }
}

#[derive(FromArgs)]
#[argh(subcommand)]
pub enum SubCommand {
    Token(Token),
}

/// copy of argh::from_env to insert command name and version in help text
pub fn from_env<T: TopLevelCommand>() -> T {
    let args: Vec<String> = std::env::args().collect();
    let cmd = Path::new(&args[0])
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or(&args[0]);
    let args_str: Vec<&str> = args.iter().map(|s| s.as_str()).collect();
    T::from_args(&[cmd], &args_str[1..]).unwrap_or_else(|early_exit| {
        println!("{} {}\n", env!("CARGO_BIN_NAME"), env!("CARGO_PKG_VERSION"));
        println!("{}", early_exit.output);
        std::process::exit(match early_exit.status {
            Ok(()) => 0,
            Err(()) => 1,
        })
    })
}

/// Manage personal access tokens
#[derive(FromArgs)]
#[argh(subcommand, name = "token")]
pub struct Token {
    #[argh(subcommand)]
    /// operate on tokens
    pub cmd: TokenCmd,
}

#[derive(FromArgs)]
#[argh(subcommand)]
pub enum TokenCmd {
    List(TokenList),
    Revoke(TokenRevoke),
}

/// A token designated by its id or by its name
#[derive(Debug, PartialEq)]
pub enum TokenRef {
    Id(u64),
    Name(String),
}

/// Try to parse an u64 and fallback to a name
impl FromStr for TokenRef {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(if let Ok(id) = s.parse::<u64>() {
            Self::Id(id)
        } else {
            Self::Name(s.to_owned())
        })
    }
}

impl Display for TokenRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Id(id) => write!(f, "#{}", id),
            Self::Name(name) => write!(f, "{}", name),
        }
    }
}

/// List tokens
#[derive(FromArgs)]
#[argh(subcommand, name = "list")]
pub struct TokenList {
    /// the user id to list the tokens that belong to (only for admin and by default current user)
    #[argh(option, short = 'u')]
    pub user_id: Option<u64>,

    /// list revoked tokens (implies --all)
    #[argh(switch, short = 'r')]
    pub revoked: bool,

    /// list all tokens (only active ones per default)
    #[argh(switch, short = 'a')]
    pub all: bool,

    /// only fetch this page (all pages are fetched per default)
    #[argh(option, short = 'p')]
    pub page: Option<u64>,

    /// number of tokens per page
    #[argh(option)]
    pub per_page: Option<u64>,

    /// run the request as another user (admin only)
    #[argh(option)]
    pub sudo: Option<String>,

    /// the pattern of token to search names for
    #[argh(positional)]
    pub search: Option<String>,
}

/// Revoke a token
#[derive(FromArgs)]
#[argh(subcommand, name = "revoke")]
pub struct TokenRevoke {
    /// run the request as another user (admin only)
    #[argh(option)]
    pub sudo: Option<String>,

    /// the token id or name
    #[argh(positional)]
    pub token: TokenRef,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(args: &[&str]) -> Opts {
        Opts::from_args(&["glpat"], args).unwrap()
    }

    #[test]
    fn token_ref_prefers_ids() {
        assert_eq!("42".parse::<TokenRef>().unwrap(), TokenRef::Id(42));
        assert_eq!(
            "ci-deploy".parse::<TokenRef>().unwrap(),
            TokenRef::Name("ci-deploy".to_owned())
        );
        assert_eq!(TokenRef::Id(42).to_string(), "#42");
    }

    #[test]
    fn parses_list_filters() {
        let opts = parse(&["-v", "token", "list", "-u", "4", "--per-page", "50", "deploy"]);
        assert!(opts.verbose);
        let SubCommand::Token(Token {
            cmd: TokenCmd::List(list),
        }) = opts.cmd
        else {
            panic!("expected token list");
        };
        assert_eq!(list.user_id, Some(4));
        assert_eq!(list.per_page, Some(50));
        assert_eq!(list.page, None);
        assert_eq!(list.search.as_deref(), Some("deploy"));
        assert!(!list.revoked && !list.all);
    }

    #[test]
    fn parses_revoke() {
        let opts = parse(&["token", "revoke", "--sudo", "root", "4"]);
        let SubCommand::Token(Token {
            cmd: TokenCmd::Revoke(revoke),
        }) = opts.cmd
        else {
            panic!("expected token revoke");
        };
        assert_eq!(revoke.token, TokenRef::Id(4));
        assert_eq!(revoke.sudo.as_deref(), Some("root"));
    }
}
