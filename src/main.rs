use clap::Parser;
use prodcli::{logging, Cli};
use std::io;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_guard = logging::init(cli.log_level).unwrap_or_else(|err| {
        eprintln!("Logging disabled: {:#}", err);
        None
    });

    let code = prodcli::run(&cli, &mut io::stdout(), &mut io::stderr()).await;

    // Flush the log writer before exiting.
    drop(log_guard);
    std::process::exit(code);
}
