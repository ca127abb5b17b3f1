//! prodcli
//!
//! Command-line client for the products REST API. The binary in `main.rs`
//! only parses arguments and sets up logging; everything else lives here so
//! it can be driven from integration tests.

pub mod api;
pub mod app;
pub mod cli;
pub mod command;
pub mod config;
pub mod logging;
pub mod output;

pub use app::run;
pub use cli::Cli;
