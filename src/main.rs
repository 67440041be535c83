use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use zoo_excursion::{AppConfig, Catalog, Session, TerminalConsole};

fn main() -> Result<()> {
    let config = AppConfig::parse();

    // Logs go to stderr so they never mix with the menu
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let table = config
        .catalog_config()
        .context("Failed to load the enclosure catalog")?;

    let mut rng = config.rng();
    let catalog = Catalog::build(&table, &mut rng);
    tracing::info!(
        version = zoo_excursion::VERSION,
        enclosures = catalog.len(),
        seed = ?config.seed,
        "starting excursion"
    );

    let mut session = Session::new(&catalog, TerminalConsole::new());
    session.run().context("Excursion aborted")?;

    Ok(())
}
