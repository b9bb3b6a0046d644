use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

use crate::models::api_response::ApiResponse;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Resource not found")]
    RouteNotFound,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    code: u16,
    message: String,
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let api_error = ApiError {
            code: match self {
                AppError::RouteNotFound => 404,
                AppError::InvalidConfig(_) => 500,
            },
            message: self.to_string(),
        };

        let response = ApiResponse {
            status: "FAILURE".to_string(),
            code: api_error.code,
            result: None::<()>,
            error: Some(api_error),
        };

        match self {
            AppError::RouteNotFound => HttpResponse::NotFound().json(response),
            AppError::InvalidConfig(_) => HttpResponse::InternalServerError().json(response),
        }
    }
}
