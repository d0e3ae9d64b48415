//! ngefilm server binary

use clap::Parser;
use ngefilm_core::NgefilmScraper;
use ngefilm_server::{AppState, ServerArgs, router};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = ServerArgs::parse();
    let scraper = NgefilmScraper::with_config(args.scraper_config())?;
    let app = router(AppState::new(scraper), &args.static_dir);

    let address = args.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!(%address, static_dir = %args.static_dir.display(), "ngefilm server listening");

    axum::serve(listener, app).await?;
    Ok(())
}
