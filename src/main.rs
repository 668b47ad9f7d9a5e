/// main.rs — dnamass entry point

mod cli;
mod error;
mod strand;

use clap::Parser;
use cli::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> error::Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .parse_default_env()
        .init();

    strand::process(&cli.input, &cli.output)?;

    Ok(())
}
