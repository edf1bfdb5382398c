//! # CLI Module
//!
//! Command-line entry points for the `users-api` binary.
//!
//! ## Commands
//!
//! ### `serve`
//!
//! Start the service and block until the server stops:
//!
//! ```bash
//! users-api serve --config config/config.yaml --port 9000
//! ```
//!
//! ### `config`
//!
//! Print the effective configuration (defaults, file, flags and environment
//! merged) as YAML without starting anything:
//!
//! ```bash
//! USERS_FIRST_ID=1 users-api config --config config/config.yaml
//! ```
//!
//! Both commands accept:
//! - `--config <FILE>` / `USERS_CONFIG` - YAML config file
//! - `--addr <ADDR>` / `USERS_ADDR` - listen address, e.g. `127.0.0.1:8080`
//! - `--port <PORT>` / `USERS_PORT` - replaces the port of the address
//! - `--first-id <N>` / `USERS_FIRST_ID` - first id handed out by the store

mod commands;


pub use commands::{build_service, run_cli, Cli, Commands, ConfigArgs};
