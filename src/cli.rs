//! Command-line arguments

use crate::command::Invocation;
use clap::{Parser, ValueEnum};
use tracing::level_filters::LevelFilter;

/// Default products API
pub const DEFAULT_BASE_URL: &str = "https://fakestoreapi.com";

/// Products manager for the command line
///
/// Examples:
///   prodcli GET products
///   prodcli GET products/15
///   prodcli POST products T-Shirt-Rex 300 remeras
///   prodcli DELETE products/7
#[derive(Parser, Debug)]
#[command(name = "prodcli", version, about, long_about = None)]
pub struct Cli {
    /// HTTP method: GET, POST or DELETE (case-insensitive)
    pub method: Option<String>,

    /// Resource path: products or products/<id>
    pub resource: Option<String>,

    /// Extra parameters (POST: <title> <price> <category>)
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub params: Vec<String>,

    /// Base URL of the products API
    #[arg(long, value_name = "URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Log level for debugging
    #[arg(long, value_enum, default_value = "off")]
    pub log_level: LogLevel,
}

impl Cli {
    /// Positional part of the command line
    pub fn invocation(&self) -> Invocation {
        Invocation {
            method: self.method.clone(),
            resource: self.resource.clone(),
            params: self.params.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::OFF,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_arguments() {
        let cli = Cli::parse_from(["prodcli", "post", "products", "Widget", "9.99", "toys"]);
        let inv = cli.invocation();

        assert_eq!(inv.method.as_deref(), Some("post"));
        assert_eq!(inv.resource.as_deref(), Some("products"));
        assert_eq!(inv.params, vec!["Widget", "9.99", "toys"]);
        assert_eq!(cli.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_no_arguments_is_accepted() {
        let cli = Cli::parse_from(["prodcli"]);
        assert!(cli.method.is_none());
        assert!(cli.resource.is_none());
        assert!(cli.params.is_empty());
        assert_eq!(LevelFilter::from(cli.log_level), LevelFilter::OFF);
    }

    #[test]
    fn test_negative_price_is_kept_as_parameter() {
        let cli = Cli::parse_from(["prodcli", "POST", "products", "Widget", "-3", "toys"]);
        assert_eq!(cli.params, vec!["Widget", "-3", "toys"]);
    }

    #[test]
    fn test_options_before_positionals() {
        let cli = Cli::parse_from([
            "prodcli",
            "--base-url",
            "http://localhost:8080",
            "--log-level",
            "debug",
            "GET",
            "products/1",
        ]);
        assert_eq!(cli.base_url, "http://localhost:8080");
        assert_eq!(LevelFilter::from(cli.log_level), LevelFilter::DEBUG);
        assert_eq!(cli.resource.as_deref(), Some("products/1"));
    }
}
