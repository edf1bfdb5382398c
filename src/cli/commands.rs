use crate::config::{ConfigOverrides, ServiceConfig};
use crate::dispatcher::Dispatcher;
use crate::model::UserId;
use crate::server::{self, AppService};
use crate::store::UserStore;
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "users-api")]
#[command(about = "In-memory user CRUD service", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP service
    Serve(ConfigArgs),
    /// Print the effective configuration as YAML
    Config(ConfigArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// YAML configuration file
    #[arg(short, long, env = "USERS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Listen address
    #[arg(long, env = "USERS_ADDR")]
    pub addr: Option<SocketAddr>,

    /// Listen port, replacing the port of the address
    #[arg(short, long, env = "USERS_PORT")]
    pub port: Option<u16>,

    /// First id the store assigns
    #[arg(long, env = "USERS_FIRST_ID")]
    pub first_id: Option<UserId>,
}

impl ConfigArgs {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            addr: self.addr,
            port: self.port,
            first_id: self.first_id,
        }
    }

    pub fn load(&self) -> Result<ServiceConfig> {
        ServiceConfig::load(self.config.as_deref(), &self.overrides())
    }
}

/// Store, dispatcher and service for `config`, ready to hand to [`server::serve`].
pub fn build_service(config: &ServiceConfig) -> AppService {
    let store = Arc::new(UserStore::new(&config.store));
    AppService::new(Arc::new(Dispatcher::new(store)))
}

pub fn run_cli(cli: Cli) -> Result<()> {
    match &cli.command {
        Commands::Config(args) => {
            let config = args.load()?;
            print!("{}", config.to_yaml()?);
            Ok(())
        }
        Commands::Serve(args) => {
            let config = args.load()?;
            let service = build_service(&config);
            let running = server::serve(service, &config.http)
                .with_context(|| format!("failed to bind {}", config.http.addr))?;
            info!(
                addr = %running.local_addr(),
                first_id = config.store.first_id,
                seeded = config.store.seed_admin.is_some(),
                "users-api listening"
            );
            running.wait().context("server stopped")
        }
    }
}
