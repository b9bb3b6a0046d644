use serde::Serialize;

/// Static deployment-pipeline description served by `/api/status`.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub hero: String,
    pub city: String,
    pub status: &'static str,
    pub environment: String,
    pub version: String,
    pub deployment: &'static str,
    pub container_orchestration: &'static str,
    pub configuration_management: &'static str,
    pub ci_cd: &'static str,
}
