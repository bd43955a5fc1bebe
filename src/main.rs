use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bookshelf_web::infrastructure::AppState;
use bookshelf_web::{config, db, seed, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before the filter reads RUST_LOG
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bookshelf_web=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = config::Config::from_env();

    // Initialize database
    let db = db::init_db(&config.database_url)
        .await
        .with_context(|| format!("Failed to initialize database at {}", config.database_url))?;
    let state = AppState::new(db);

    // Sample data goes in before the first request is accepted
    tracing::info!("Seeding sample data...");
    seed::seed_sample_data(&state)
        .await
        .context("Failed to seed sample data")?;

    server::serve(state, config.port)
        .await
        .context("HTTP server failed")?;

    Ok(())
}
