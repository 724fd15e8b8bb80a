use clap::Parser;

/// Convert GitHub Security Advisory exports into STIX 2.1 bundles
#[derive(Parser, Debug)]
#[command(name = "ghsa-stix")]
#[command(version)]
#[command(about = "Convert GitHub Security Advisory exports into STIX 2.1 bundles", long_about = None)]
pub struct Args {
    /// Path to the config file (defaults to ./config.yml when present)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Run a single cycle and exit instead of scheduling daily runs
    #[arg(long)]
    pub once: bool,

    /// Write the assembled bundle to a file ("-" for stdout) instead of
    /// publishing it; implies a single run and records no checkpoint
    #[arg(short, long)]
    pub output: Option<String>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["ghsa-stix"]).unwrap();
        assert!(args.config.is_none());
        assert!(!args.once);
        assert!(args.output.is_none());
    }

    #[test]
    fn test_config_and_once() {
        let args = Args::try_parse_from(["ghsa-stix", "-c", "alt.yml", "--once"]).unwrap();
        assert_eq!(args.config.as_deref(), Some("alt.yml"));
        assert!(args.once);
    }

    #[test]
    fn test_output_stdout_marker() {
        let args = Args::try_parse_from(["ghsa-stix", "-o", "-"]).unwrap();
        assert_eq!(args.output.as_deref(), Some("-"));
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        assert!(Args::try_parse_from(["ghsa-stix", "--invalid-option"]).is_err());
    }
}
