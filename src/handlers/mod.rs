pub mod content;

use axum::{
    http::header,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::error::{AppError, AppResult};

pub const JSON_UTF8: &str = "application/json; charset=utf-8";

/// Pre-serialized JSON body sent with an explicit UTF-8 content type.
#[derive(Debug, Clone)]
pub struct JsonBody(pub Vec<u8>);

impl JsonBody {
    pub fn encode<T: Serialize + ?Sized>(value: &T) -> AppResult<Self> {
        Ok(Self(serde_json::to_vec(value)?))
    }
}

impl IntoResponse for JsonBody {
    fn into_response(self) -> Response {
        ([(header::CONTENT_TYPE, JSON_UTF8)], self.0).into_response()
    }
}

/// Router fallback for unmatched paths.
pub async fn not_found() -> AppError {
    AppError::NotFound
}
