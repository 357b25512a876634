use std::sync::Arc;

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hotel_booking::config::Config;
use hotel_booking::db::{BookingStore, MemoryBookingStore, PgBookingStore};
use hotel_booking::{app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hotel_booking=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;

    let store: Arc<dyn BookingStore> = match &config.database_url {
        Some(url) => {
            info!("Using Postgres booking store");
            Arc::new(
                PgBookingStore::connect_lazy(url, config.database_max_connections)
                    .context("Invalid DATABASE_URL")?,
            )
        }
        None => {
            warn!("DATABASE_URL not set, bookings will only be kept in memory");
            Arc::new(MemoryBookingStore::new())
        }
    };

    let router = app(AppState::new(store));

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Booking form listening on http://{}", addr);

    axum::serve(listener, router).await.context("Server error")?;

    Ok(())
}
