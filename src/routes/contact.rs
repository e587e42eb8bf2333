use axum::{routing::post, Json, Router};
use tracing::info;

use crate::{
    error::AppError,
    models::{AppState, ContactAck, ContactSubmission},
};

pub const CONFIRMATION_MESSAGE: &str =
    "Thank you for reaching out. We will contact you within 24 hours.";

pub fn create_router() -> Router<AppState> {
    Router::new().route("/api/contact", post(submit_contact_handler))
}

async fn submit_contact_handler(
    Json(submission): Json<ContactSubmission>,
) -> Result<Json<ContactAck>, AppError> {
    submission.validate()?;

    info!("New contact form submission: {}", submission.summary());

    // TODO: forward the inquiry to info@dssgroup.in via SES once the
    // sending identity is verified.

    Ok(Json(ContactAck {
        success: true,
        message: CONFIRMATION_MESSAGE,
    }))
}
