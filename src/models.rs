use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{config::Config, error::AppError};

// --- Data Structures ---

/// A contact-form inquiry. Transient: validated, logged, discarded.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub phone: String,
    pub service: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

impl ContactSubmission {
    /// Required fields must be non-empty. The `service` value is accepted
    /// as-is, it is not checked against the services catalog.
    pub fn validate(&self) -> Result<(), AppError> {
        for (field, value) in [
            ("name", &self.name),
            ("phone", &self.phone),
            ("service", &self.service),
        ] {
            if value.is_empty() {
                return Err(AppError::Validation(format!(
                    "field '{}' must not be empty",
                    field
                )));
            }
        }
        Ok(())
    }

    /// What gets logged for a submission. Deliberately excludes the free-text
    /// message and the email address.
    pub fn summary(&self) -> String {
        format!(
            "name={}, service={}, phone={}",
            self.name, self.service, self.phone
        )
    }
}

#[derive(Debug, Serialize)]
pub struct ContactAck {
    pub success: bool,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub service: &'static str,
}

/// One entry of the compiled-in services catalog.
#[derive(Debug, Clone, Serialize)]
pub struct Service {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub short: &'static str,
}

// --- Application State ---

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}
