use axum::{
    response::{IntoResponse, Response},
    Json,
};
use http::StatusCode;
use serde::Serialize;
use thiserror::Error;

use crate::contact::ValidationError;
use crate::mail::MailError;

const GENERIC_DELIVERY_ERROR: &str = "Error interno del servidor";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Configuración del servidor incompleta")]
    MissingCredentials,

    /// `expose` controls whether the underlying error reaches the client.
    #[error("Error enviando el email")]
    Delivery {
        #[source]
        source: MailError,
        expose: bool,
    },
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::MissingCredentials | ApiError::Delivery { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = match &self {
            ApiError::Delivery { source, expose } => Some(if *expose {
                source.to_string()
            } else {
                GENERIC_DELIVERY_ERROR.to_string()
            }),
            _ => None,
        };
        let body = ErrorBody {
            message: self.to_string(),
            error,
        };
        (status, Json(body)).into_response()
    }
}
