//! Command Dispatcher
//!
//! Runs one parsed [`Command`] against the products API and renders the
//! result. Errors are returned, never acted on; [`run`] is the single place
//! that turns them into an exit code.

use crate::api::http::ApiError;
use crate::api::products::NewProduct;
use crate::api::ProductsClient;
use crate::cli::Cli;
use crate::command::Command;
use crate::config::Config;
use crate::output;
use anyhow::Result;
use std::io::Write;

/// Exit code for successful runs, help, usage and validation errors
pub const EXIT_OK: i32 = 0;
/// Exit code for network, HTTP and unexpected failures
pub const EXIT_FAILURE: i32 = 1;

/// Dispatcher for one invocation. The API client is built only by the
/// commands that reach the network.
pub struct App {
    base_url: String,
}

impl App {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
        }
    }

    pub fn from_cli(cli: &Cli) -> Self {
        Self::new(&cli.base_url)
    }

    fn client(&self) -> Result<ProductsClient> {
        let config = Config::new(&self.base_url)?;
        Ok(ProductsClient::new(&config)?)
    }

    /// Execute a command. Usage errors are reported and count as success.
    pub async fn dispatch<W: Write, E: Write>(
        &self,
        command: Command,
        out: &mut W,
        err: &mut E,
    ) -> Result<()> {
        match command {
            Command::Help => output::help(out)?,
            Command::Usage(error) => {
                tracing::warn!("Rejected command line: {:?}", error);
                output::usage_error(out, err, &error)?;
            }
            Command::List => {
                output::fetching_all(out)?;
                let products = self.client()?.list_products().await?;
                tracing::info!("Loaded {} products", products.len());
                output::product_list(out, &products)?;
            }
            Command::GetOne(id) => {
                output::fetching_one(out, id)?;
                let product = self.client()?.get_product(id).await?;
                output::product_detail(out, &product)?;
            }
            Command::Create {
                title,
                price,
                category,
            } => {
                output::creating(out)?;
                let payload = NewProduct::new(&title, price, &category);
                let created = self.client()?.create_product(&payload).await?;
                tracing::info!("Created product {:?}", created.id);
                output::product_created(out, &created, &payload)?;
            }
            Command::Delete(id) => {
                output::deleting(out, id)?;
                let response = self.client()?.delete_product(id).await?;
                tracing::info!("Deleted product {}", id);
                output::product_deleted(out, id, &response)?;
            }
        }
        Ok(())
    }
}

/// Run one invocation and return the process exit code
pub async fn run<W: Write, E: Write>(cli: &Cli, out: &mut W, err: &mut E) -> i32 {
    match execute(cli, out, err).await {
        Ok(()) => EXIT_OK,
        Err(error) => {
            report_error(err, &error);
            EXIT_FAILURE
        }
    }
}

async fn execute<W: Write, E: Write>(cli: &Cli, out: &mut W, err: &mut E) -> Result<()> {
    output::banner(out)?;

    let command = Command::parse(&cli.invocation());
    tracing::debug!("Parsed command: {:?}", command);

    App::from_cli(cli).dispatch(command, out, err).await
}

fn report_error(err: &mut impl Write, error: &anyhow::Error) {
    let line = match error.downcast_ref::<ApiError>() {
        Some(api_error) => format!("Error en la petición: {}", api_error),
        None => format!("Error inesperado: {:#}", error),
    };
    tracing::error!("{}", line);
    // Nothing left to report to if stderr itself is gone.
    let _ = writeln!(err, "{}", line);
}
