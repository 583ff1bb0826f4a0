use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Concurrent HTTP load prober for authorized rate-limiter and WAF testing - randomized browser fingerprints, human-like pacing, session rotation, and aggregate block-rate reporting."
)]
pub struct ProbeArgs {
    /// Target host or IP address
    #[arg(long, short = 'H', env = "WAFPROBE_HOST")]
    pub host: Option<String>,

    /// Target port (1-65535)
    #[arg(long, short = 'p')]
    pub port: Option<u16>,

    /// Use HTTPS instead of HTTP
    #[arg(long)]
    pub tls: bool,

    /// Number of request workers (clamped to 10-250)
    #[arg(long, short = 'w')]
    pub workers: Option<usize>,

    /// Path to a TOML config file (defaults to wafprobe.toml when present)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Confirm you are authorized to test the target, skipping the prompt
    #[arg(long, env = "WAFPROBE_AUTHORIZED")]
    pub authorized: bool,

    /// Path of the append-only authorization log
    #[arg(long = "usage-log")]
    pub usage_log: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_invocation() {
        let args = ProbeArgs::parse_from([
            "wafprobe",
            "--host",
            "10.0.0.5",
            "--port",
            "8080",
            "--tls",
            "--workers",
            "50",
            "--authorized",
        ]);
        assert_eq!(args.host.as_deref(), Some("10.0.0.5"));
        assert_eq!(args.port, Some(8080));
        assert!(args.tls);
        assert_eq!(args.workers, Some(50));
        assert!(args.authorized);
        assert!(!args.verbose);
    }

    #[test]
    fn short_flags_match_long_flags() {
        let args = ProbeArgs::parse_from(["wafprobe", "-H", "a.test", "-p", "81", "-w", "12"]);
        assert_eq!(args.host.as_deref(), Some("a.test"));
        assert_eq!(args.port, Some(81));
        assert_eq!(args.workers, Some(12));
    }

    #[test]
    fn help_and_version_are_display_requests_not_failures() {
        let help = ProbeArgs::try_parse_from(["wafprobe", "--help"]).unwrap_err();
        assert_eq!(help.kind(), clap::error::ErrorKind::DisplayHelp);

        let version = ProbeArgs::try_parse_from(["wafprobe", "--version"]).unwrap_err();
        assert_eq!(version.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn everything_is_optional_at_parse_time() {
        let args = ProbeArgs::parse_from(["wafprobe"]);
        assert!(args.host.is_none());
        assert!(args.config.is_none());
    }
}
