use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub hero: String,
    pub city: String,
    pub environment: String,
    pub version: String,
    pub hostname: String,
    pub timestamp: DateTime<Utc>,
}
