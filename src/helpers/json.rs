use actix_web::{error, http::StatusCode, HttpResponse};
use serde::Serialize;
use std::fmt;

/// Envelope of every error body the service writes.
#[derive(Debug, Serialize)]
pub struct JsonResponse {
    pub status: String,
    pub message: String,
    pub code: u16,
}

#[derive(Debug, Default)]
pub struct JsonResponseBuilder {
    message: String,
}

impl JsonResponse {
    pub fn build() -> JsonResponseBuilder {
        JsonResponseBuilder::default()
    }
}

impl fmt::Display for JsonResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string(self) {
            Ok(body) => write!(f, "{}", body),
            Err(_) => write!(f, "{}", self.message),
        }
    }
}

impl JsonResponseBuilder {
    pub fn set_msg<M: Into<String>>(mut self, message: M) -> Self {
        self.message = message.into();
        self
    }

    fn into_json_response(self, code: StatusCode, fallback: &str) -> JsonResponse {
        let message = if self.message.trim().is_empty() {
            fallback.to_string()
        } else {
            self.message
        };

        JsonResponse {
            status: "Error".to_string(),
            message,
            code: code.as_u16(),
        }
    }

    fn into_error(self, code: StatusCode, fallback: &str) -> actix_web::Error {
        let body = self.into_json_response(code, fallback);
        let response = HttpResponse::build(code).json(&body);
        error::InternalError::from_response(body, response).into()
    }

    pub fn bad_request<M: Into<String>>(self, message: M) -> actix_web::Error {
        self.set_msg(message)
            .into_error(StatusCode::BAD_REQUEST, "Validation error")
    }

    pub fn internal_server_error<M: Into<String>>(self, message: M) -> actix_web::Error {
        self.set_msg(message)
            .into_error(StatusCode::INTERNAL_SERVER_ERROR, "Internal error")
    }
}
