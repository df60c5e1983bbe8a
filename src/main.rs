use std::error::Error;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use track_store::{
    cli::{self, Cli},
    config::Settings,
    Database,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let settings = Settings::load()?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.logging.filter))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let db = Database::connect(&settings.database).await?;
    cli::execute(db, &cli.action).await?;
    Ok(())
}
