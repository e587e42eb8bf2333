pub mod config;
pub mod error;
pub mod models;
pub mod routes;

pub use config::Config;
pub use error::AppError;
pub use models::AppState;
