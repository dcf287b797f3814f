//! HTTP error responses.

use salvo::{
    http::StatusCode,
    oapi::{self, Components, EndpointOutRegister, Operation, ToSchema},
    prelude::{Json, Response},
    writing::Scribe,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::validation::FieldError;

/// Message returned whenever a well-formed id references no product.
pub(crate) const NOT_FOUND_MESSAGE: &str = "ID de producto inválido. El producto no existe";

const INVALID_DATA_MESSAGE: &str = "Datos de producto inválidos";

const INTERNAL_ERROR_MESSAGE: &str = "Hubo un error al procesar la solicitud";

/// Itemised validation failures.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ValidationErrorResponse {
    /// One entry per failed rule, in declaration order
    pub errors: Vec<FieldError>,
}

/// Single error message.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}

#[derive(Debug, Error)]
pub(crate) enum ApiError {
    #[error("request validation failed with {} error(s)", .0.len())]
    Validation(Vec<FieldError>),

    #[error("product not found")]
    NotFound,

    #[error("invalid product data")]
    InvalidData,

    #[error("internal server error")]
    Internal,
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::InvalidData => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl Scribe for ApiError {
    fn render(self, res: &mut Response) {
        res.status_code(self.status_code());

        let error = match self {
            Self::Validation(errors) => {
                res.render(Json(ValidationErrorResponse { errors }));

                return;
            }
            Self::NotFound => NOT_FOUND_MESSAGE,
            Self::InvalidData => INVALID_DATA_MESSAGE,
            Self::Internal => INTERNAL_ERROR_MESSAGE,
        };

        res.render(Json(ErrorResponse {
            error: error.to_string(),
        }));
    }
}

impl EndpointOutRegister for ApiError {
    fn register(components: &mut Components, operation: &mut Operation) {
        operation.responses.insert(
            StatusCode::BAD_REQUEST.as_str(),
            oapi::Response::new("Invalid id or invalid input data").add_content(
                "application/json",
                ValidationErrorResponse::to_schema(components),
            ),
        );
        operation.responses.insert(
            StatusCode::NOT_FOUND.as_str(),
            oapi::Response::new("Product not found")
                .add_content("application/json", ErrorResponse::to_schema(components)),
        );
        operation.responses.insert(
            StatusCode::INTERNAL_SERVER_ERROR.as_str(),
            oapi::Response::new("Internal Server Error")
                .add_content("application/json", ErrorResponse::to_schema(components)),
        );
    }
}
