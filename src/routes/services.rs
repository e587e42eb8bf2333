use axum::{routing::get, Json, Router};

use crate::models::{AppState, Service};

/// The services catalog shown on the website. Compiled in, read-only.
pub const SERVICES: [Service; 4] = [
    Service {
        id: "security",
        name: "Security Personnel Services",
        icon: "🛡️",
        short: "Well-trained, background-verified security personnel for industrial, commercial, and residential premises.",
    },
    Service {
        id: "manpower",
        name: "Manpower & Labour Supply",
        icon: "👷",
        short: "Reliable and flexible manpower solutions for industrial, manufacturing, and commercial operations.",
    },
    Service {
        id: "housekeeping",
        name: "Housekeeping Services",
        icon: "🧹",
        short: "Professional housekeeping staff trained in systematic cleaning procedures and hygiene standards.",
    },
    Service {
        id: "fabrication",
        name: "Fabrication Services",
        icon: "⚙️",
        short: "High-quality B2B fabrication — structural, metal, and precision work to exact specifications.",
    },
];

pub fn create_router() -> Router<AppState> {
    Router::new().route("/api/services", get(list_services_handler))
}

/// Services list (useful for SEO or dynamic rendering).
async fn list_services_handler() -> Json<Vec<Service>> {
    Json(SERVICES.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_four_stable_ids_in_order() {
        let ids: Vec<&str> = SERVICES.iter().map(|s| s.id).collect();
        assert_eq!(ids, ["security", "manpower", "housekeeping", "fabrication"]);
    }

    #[test]
    fn catalog_serializes_with_expected_fields() {
        let json = serde_json::to_value(&SERVICES[0]).unwrap();
        assert_eq!(json["id"], "security");
        assert_eq!(json["name"], "Security Personnel Services");
        assert!(json["icon"].is_string());
        assert!(json["short"].is_string());
    }
}
