use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Checked in order; the first variable that is set wins.
const FILTER_ENV_VARS: [&str; 2] = ["WAFPROBE_LOG", "RUST_LOG"];
const DEFAULT_DIRECTIVE: &str = "info";
const VERBOSE_DIRECTIVE: &str = "debug";

pub fn init_logging(verbose: bool) {
    let fallback = if verbose {
        VERBOSE_DIRECTIVE
    } else {
        DEFAULT_DIRECTIVE
    };

    // An unset or unparsable env value falls back to the CLI-selected level.
    let filter = FILTER_ENV_VARS
        .iter()
        .find_map(|var| std::env::var(var).ok())
        .and_then(|value| EnvFilter::try_new(value).ok())
        .unwrap_or_else(|| EnvFilter::new(fallback));

    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set global default subscriber: {}", err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_logging_is_idempotent() {
        init_logging(false);
        init_logging(false);
    }

    #[test]
    fn builtin_directives_parse_as_filters() {
        assert!(EnvFilter::try_new(DEFAULT_DIRECTIVE).is_ok());
        assert!(EnvFilter::try_new(VERBOSE_DIRECTIVE).is_ok());
    }
}
