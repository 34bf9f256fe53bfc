//! Customer API server.
//!
//! ```bash
//! DATABASE_URL=sqlite://customers.db?mode=rwc RUST_LOG=customer_api=debug cargo run
//! ```
//!
//! Then visit <http://localhost:8080/customers/v1/all>.

use customer_api::{config::Config, db, router};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;
    let db = db::connect(&config.database_url).await?;
    db::ensure_schema(&db).await?;

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "customer API listening");
    axum::serve(listener, router(db)).await?;
    Ok(())
}
