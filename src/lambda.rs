#[cfg(feature = "lambda")]
use dss_website::{config::Config, models::AppState, routes};
#[cfg(feature = "lambda")]
use lambda_http::{run, Error};
#[cfg(feature = "lambda")]
use std::sync::Arc;

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    // CloudWatch supplies its own timestamps.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .without_time()
        .init();

    let config = Config::load()?;
    let state = AppState {
        config: Arc::new(config),
    };
    let app = routes::create_router(state);

    tracing::info!("Lambda handler initialized");
    run(app).await
}
