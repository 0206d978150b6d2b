//! HTTP mapping for everything that can go wrong while serving a request.
//!
//! Handlers return [`ApiError`]; its `ResponseError` impl picks the status
//! code and renders a `common::responses::ErrorResponse` JSON body. The
//! remaining functions plug into actix's extractor configs, the default
//! service, and the last-resort middleware so that every failure leaves the
//! server as a JSON body.

use actix_web::body::{BoxBody, MessageBody};
use actix_web::dev::ServiceResponse;
use actix_web::error::{BlockingError, JsonPayloadError, PathError};
use actix_web::http::header;
use actix_web::http::StatusCode;
use actix_web::middleware::{ErrorHandlerResponse, ErrorHandlers};
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use common::responses::ErrorResponse;
use log::error;
use thiserror::Error;

use crate::store::StoreError;

pub const ALL_FIELDS_REQUIRED: &str = "All fields are required";
pub const EMPLOYEE_NOT_FOUND: &str = "Employee not found";
pub const ROUTE_NOT_FOUND: &str = "Route not found";
pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";

#[derive(Debug, Error)]
pub enum ApiError {
    /// A required field is missing or cannot be converted.
    #[error("{0}")]
    Validation(String),
    /// An update or delete touched no rows.
    #[error("Employee not found")]
    NotFound,
    /// The store failed; `message` names the operation.
    #[error("{message}: {source}")]
    Store {
        message: &'static str,
        #[source]
        source: StoreError,
    },
    /// The blocking pool could not run the store call.
    #[error("Internal server error")]
    Internal,
}

impl ApiError {
    pub fn missing_fields() -> Self {
        ApiError::Validation(ALL_FIELDS_REQUIRED.to_string())
    }

    /// Builds a `map_err` adapter tagging a store failure with the operation message.
    pub fn store(message: &'static str) -> impl FnOnce(StoreError) -> ApiError {
        move |source| ApiError::Store { message, source }
    }
}

impl From<BlockingError> for ApiError {
    fn from(err: BlockingError) -> Self {
        error!("Blocking pool failure: {}", err);
        ApiError::Internal
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Store { .. } | ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            ApiError::Validation(message) => ErrorResponse::new(message.clone()),
            ApiError::NotFound => ErrorResponse::new(EMPLOYEE_NOT_FOUND),
            ApiError::Store { message, source } => {
                error!("{}: {}", message, source);
                ErrorResponse::with_detail(*message, source.to_string())
            }
            ApiError::Internal => ErrorResponse::new(INTERNAL_SERVER_ERROR),
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}

/// Malformed or non-JSON bodies are reported like any other bad input.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::Validation(format!("Invalid request body: {}", err)).into()
}

/// A path id that is not an integer cannot name any row.
pub fn path_error_handler(_err: PathError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::NotFound.into()
}

pub fn route_not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(ROUTE_NOT_FOUND))
}

/// Default service for API resources hit with the wrong method.
pub async fn unmatched_route() -> HttpResponse {
    route_not_found()
}

/// Last-resort handler: any 5xx that did not come out of [`ApiError`] is
/// replaced by a generic JSON body after logging what actually happened.
pub fn internal_error_handlers<B: MessageBody + 'static>() -> ErrorHandlers<B> {
    ErrorHandlers::new().default_handler_server(render_internal_error)
}

fn render_internal_error<B: MessageBody + 'static>(
    res: ServiceResponse<B>,
) -> actix_web::Result<ErrorHandlerResponse<B>> {
    let is_json = res
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|ct| ct.to_str().ok())
        .map_or(false, |ct| ct.starts_with("application/json"));
    if is_json {
        return Ok(ErrorHandlerResponse::Response(res.map_into_left_body()));
    }

    match res.response().error() {
        Some(err) => error!("Unhandled error on {}: {}", res.request().path(), err),
        None => error!("Unhandled {} on {}", res.status(), res.request().path()),
    }

    let (req, _) = res.into_parts();
    let response: HttpResponse<BoxBody> =
        HttpResponse::InternalServerError().json(ErrorResponse::new(INTERNAL_SERVER_ERROR));
    Ok(ErrorHandlerResponse::Response(
        ServiceResponse::new(req, response).map_into_right_body(),
    ))
}
