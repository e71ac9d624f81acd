//! Command-line plumbing shared by the binaries.

use getopts::{Matches, Options};
use tracing_subscriber::EnvFilter;

use crate::error::{Error, Result};

pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

pub fn usage(program: &str, opts: &Options) -> String {
    let brief = format!("Usage: {program} [options]");
    opts.usage(&brief)
}

/// Parses `args` (without the program name). Positional arguments are
/// rejected since neither command takes any.
pub fn parse_args(opts: &Options, args: &[String]) -> Result<Matches> {
    let matches = opts.parse(args)?;
    if let Some(extra) = matches.free.first() {
        return Err(Error::Usage(format!("Unexpected argument: {extra}")));
    }
    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn options() -> Options {
        let mut opts = Options::new();
        opts.optflag("h", "help", "print this help menu");
        opts.optopt("f", "file", "tinydns data file", "PATH");
        opts
    }

    fn args(a: &[&str]) -> Vec<String> {
        a.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_file_option() {
        let m = parse_args(&options(), &args(&["--file", "/etc/tinydns/data"])).unwrap();
        assert_eq!(m.opt_str("f").as_deref(), Some("/etc/tinydns/data"));
        let m = parse_args(&options(), &args(&["-f", "data"])).unwrap();
        assert_eq!(m.opt_str("file").as_deref(), Some("data"));
    }

    #[test]
    fn test_unknown_option_is_usage_error() {
        assert_matches!(
            parse_args(&options(), &args(&["--zone", "x"])),
            Err(Error::Usage(_))
        );
    }

    #[test]
    fn test_missing_value_is_usage_error() {
        assert_matches!(parse_args(&options(), &args(&["--file"])), Err(Error::Usage(_)));
    }

    #[test]
    fn test_positional_rejected() {
        assert_matches!(parse_args(&options(), &args(&["data"])), Err(Error::Usage(_)));
    }

    #[test]
    fn test_usage_lists_options() {
        let text = usage("update-zone", &options());
        assert!(text.starts_with("Usage: update-zone [options]"));
        assert!(text.contains("--file"));
    }
}
