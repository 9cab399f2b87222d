use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod controller;
mod data;
mod error;
mod model;
mod recurrence;
mod router;
mod scheduler;
mod service;
mod startup;
mod state;
mod util;

use crate::{
    config::Config,
    error::AppError,
    router::ApiDoc,
    scheduler::training_reminders,
    service::notification::{LoggingDispatch, NotificationDispatch},
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=debug", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    tracing::info!("Starting server");

    let dispatch: Arc<dyn NotificationDispatch> = Arc::new(LoggingDispatch);

    // Start training reminder scheduler
    let scheduler_db = db.clone();
    let scheduler_dispatch = dispatch.clone();
    let lead_minutes = config.reminder_lead_minutes;
    tokio::spawn(async move {
        if let Err(e) =
            training_reminders::start_scheduler(scheduler_db, scheduler_dispatch, lead_minutes)
                .await
        {
            tracing::error!("Training reminder scheduler error: {}", e);
        }
    });

    let app = router::router()
        .with_state(AppState::new(db))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive());

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
