use crate::level::Level;
use clap::Parser;

/// liblog demo - emit one message per severity through a namespace
#[derive(Parser, Debug, Clone, Default)]
#[clap(version, about, long_about = None)]
pub struct Args {
    /// Namespace to log into (empty for the root namespace)
    #[clap(short = 'n', long, default_value = "")]
    pub namespace: String,

    /// Threshold for the namespace (0-7 or a name such as "warning")
    #[clap(short = 'l', long, value_parser = parse_level)]
    pub level: Option<Level>,

    /// Backend URI, e.g. "color:" or "file:///tmp/demo.log"
    #[clap(short = 'u', long)]
    pub uri: Option<String>,

    /// Also emit an emergency message (aborts the process)
    #[clap(long, default_value_t = false)]
    pub emerg: bool,

    /// Print the registered plugin names and exit
    #[clap(long, default_value_t = false)]
    pub list_plugins: bool,
}

/// Parse a level from a number or a name
fn parse_level(s: &str) -> Result<Level, String> {
    s.parse::<Level>().map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("7").unwrap(), Level::Debug);
        assert_eq!(parse_level("crit").unwrap(), Level::Crit);
        assert!(parse_level("").is_err());
        assert!(parse_level("11").is_err());
    }

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["liblog-demo"]);
        assert_eq!(args.namespace, "");
        assert!(args.level.is_none());
        assert!(args.uri.is_none());
        assert!(!args.emerg);
    }

    #[test]
    fn test_args_full() {
        let args = Args::parse_from([
            "liblog-demo",
            "-n",
            "NET",
            "--level",
            "warning",
            "--uri",
            "color:",
        ]);
        assert_eq!(args.namespace, "NET");
        assert_eq!(args.level, Some(Level::Warning));
        assert_eq!(args.uri.as_deref(), Some("color:"));
    }
}
