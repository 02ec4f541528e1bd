use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use clinic_booking::config::AppConfig;
use clinic_booking::db::{self, SqliteAppointmentStore};
use clinic_booking::handlers;
use clinic_booking::services::booking::BookingService;
use clinic_booking::services::notify::log::LogRelay;
use clinic_booking::services::notify::web3forms::Web3FormsRelay;
use clinic_booking::services::notify::NotificationRelay;
use clinic_booking::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();
    let offset = config.clinic_offset()?;

    let conn = db::init_db(&config.database_url)?;

    let relay: Arc<dyn NotificationRelay> = if config.web3forms_access_key.is_empty() {
        tracing::warn!("WEB3FORMS_ACCESS_KEY not set, booking notifications will only be logged");
        Arc::new(LogRelay)
    } else {
        tracing::info!("using Web3Forms relay (url: {})", config.web3forms_url);
        Arc::new(Web3FormsRelay::new(
            config.web3forms_access_key.clone(),
            config.web3forms_url.clone(),
        ))
    };

    let booking = BookingService::new(
        Arc::new(SqliteAppointmentStore::new(conn)),
        relay,
        config.clinic_name.clone(),
        offset,
    );

    let app = handlers::router(Arc::new(AppState { booking }));

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr} for {}", config.clinic_name);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
