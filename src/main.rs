use clap::Parser;
use users_api::cli::{run_cli, Cli};
use users_api::logging::{init_logging, LogConfig};
use users_api::runtime_config::RuntimeConfig;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _log_guard = init_logging(&LogConfig::from_env())?;
    RuntimeConfig::from_env().apply();
    run_cli(cli)
}
