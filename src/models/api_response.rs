use serde::Serialize;

use crate::errors::ApiError;

// Generic envelope used for error payloads (unmatched routes, startup failures).
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub status: String,
    pub code: u16,
    pub result: Option<T>,
    pub error: Option<ApiError>,
}
