use clap::Parser;
use dotenv::dotenv;
use phonebook::prelude::{command::Cli, run_app};
use std::process::exit;
use tracing_subscriber::{EnvFilter, fmt};

fn main() {
    // .env may provide PHONEBOOK_FILE / PHONEBOOK_SAVE_MODE / RUST_LOG
    dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run_app(cli) {
        eprintln!("Error: {e}");
        exit(1);
    }
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
