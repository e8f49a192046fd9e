//! # Command-Line Arguments
//!
//! ## Usage
//! ```bash
//! # Everything
//! palengke-storefront
//!
//! # Fresh Catch or Dried Seafood, sold by anyone named "mark"
//! palengke-storefront --category "Fresh Catch" --type "Dried Seafood" --search mark
//!
//! # Quick filter, JSON output
//! palengke-storefront --exclusive --json
//! ```
//!
//! Flags are applied in the order a user would click them: selectors, then
//! the quick filter, then search. `--exclusive` therefore wins over
//! `--category`/`--type`, exactly as clicking the toggle would.

use std::path::PathBuf;

use crate::error::ApiError;

pub const USAGE: &str = "\
Usage: palengke-storefront [OPTIONS]

Options:
  -c, --category <LABEL>  Select a value in the Categories selector
  -t, --type <LABEL>      Select a value in the Types selector
  -x, --exclusive         Turn on the quick filter
  -s, --search <TEXT>     Search product and seller names
      --json              Print results as JSON
      --config <PATH>     Read configuration from PATH
  -h, --help              Print this help
";

/// Parsed command-line flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub facet_a: Option<String>,
    pub facet_b: Option<String>,
    pub exclusive: bool,
    pub search: Option<String>,
    pub json: bool,
    pub config: Option<PathBuf>,
    pub help: bool,
}

impl CliArgs {
    /// Parses flags (without the program name).
    pub fn parse<I>(args: I) -> Result<Self, ApiError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut parsed = CliArgs::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            let mut value = |flag: &str| {
                args.next()
                    .ok_or_else(|| ApiError::validation(format!("{} requires a value", flag)))
            };

            match arg.as_str() {
                "--category" | "-c" => parsed.facet_a = Some(value(arg.as_str())?),
                "--type" | "-t" => parsed.facet_b = Some(value(arg.as_str())?),
                "--search" | "-s" => parsed.search = Some(value(arg.as_str())?),
                "--config" => parsed.config = Some(PathBuf::from(value(arg.as_str())?)),
                "--exclusive" | "-x" => parsed.exclusive = true,
                "--json" => parsed.json = true,
                "--help" | "-h" => parsed.help = true,
                other => {
                    return Err(ApiError::validation(format!(
                        "Unknown argument: '{}'",
                        other
                    )))
                }
            }
        }

        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliArgs, ApiError> {
        CliArgs::parse(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_no_args() {
        assert_eq!(parse(&[]).unwrap(), CliArgs::default());
    }

    #[test]
    fn test_all_flags() {
        let args = parse(&[
            "--category", "Fresh Catch", "-t", "Souvenirs", "-x", "-s", "mark", "--json",
            "--config", "/etc/storefront.toml",
        ])
        .unwrap();

        assert_eq!(args.facet_a.as_deref(), Some("Fresh Catch"));
        assert_eq!(args.facet_b.as_deref(), Some("Souvenirs"));
        assert!(args.exclusive);
        assert_eq!(args.search.as_deref(), Some("mark"));
        assert!(args.json);
        assert_eq!(args.config, Some(PathBuf::from("/etc/storefront.toml")));
    }

    #[test]
    fn test_missing_value() {
        let err = parse(&["--search"]).unwrap_err();
        assert_eq!(err.message, "--search requires a value");
    }

    #[test]
    fn test_unknown_flag() {
        assert!(parse(&["--sort", "price"]).is_err());
    }
}
