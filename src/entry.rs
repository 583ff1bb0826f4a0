use std::path::Path;

use clap::{CommandFactory, FromArgMatches};
use tracing::info;

use crate::args::ProbeArgs;
use crate::config::{self, ConfigFile, DEFAULT_CONFIG_FILE, Settings};
use crate::error::AppResult;
use crate::http::WorkerPool;
use crate::shutdown_handlers::{setup_signal_shutdown_handler, shutdown_channel};
use crate::{gate, logger, report};

pub fn run() -> AppResult<()> {
    let args = parse_args()?;

    logger::init_logging(args.verbose);

    let file = load_config_file(&args)?;
    let settings = config::resolve(&args, &file)?;
    gate::confirm_authorization(settings.authorized, &settings.usage_log)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run_async(&settings))
}

/// `get_matches` renders help, version, and usage errors itself and exits,
/// so those never reach the error chain.
fn parse_args() -> AppResult<ProbeArgs> {
    let matches = ProbeArgs::command().get_matches();
    let args = ProbeArgs::from_arg_matches(&matches)?;
    Ok(args)
}

fn load_config_file(args: &ProbeArgs) -> AppResult<ConfigFile> {
    if let Some(path) = args.config.as_deref() {
        return ConfigFile::load(path);
    }
    let default = Path::new(DEFAULT_CONFIG_FILE);
    if default.exists() {
        return ConfigFile::load(default);
    }
    Ok(ConfigFile::default())
}

async fn run_async(settings: &Settings) -> AppResult<()> {
    let pool = WorkerPool::new(&settings.run)?;

    let (shutdown_tx, _shutdown_rx) = shutdown_channel();
    let signal_handle = setup_signal_shutdown_handler(&shutdown_tx);

    info!("press ctrl-c to stop");
    let snapshot = pool.run(&shutdown_tx).await?;

    // The handler may still be parked on the signal future when the run
    // ended for another reason; nudge it so the join below cannot hang.
    let _ = shutdown_tx.send(true);
    signal_handle.await?;

    report::print_final_report(pool.target(), &snapshot);
    Ok(())
}
