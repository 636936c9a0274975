use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;
use sea_orm::DbErr;
use tracing::{error, warn};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(&'static str),
    // the detail is for logs only, the client always gets the generic body
    #[error("validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Db(DbErr),
}

impl From<DbErr> for AppError {
    fn from(e: DbErr) -> Self {
        AppError::Db(e)
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

#[derive(Serialize)]
struct ValidationBody<'a> {
    errors: [&'a str; 1],
}

pub const VALIDATION_ERRORS: &str = "validation errors";
pub const INTERNAL_ERROR: &str = "Internal server error";

impl AppError {
    /// Folds any storage failure on a write path into a validation error.
    pub fn into_validation(self) -> Self {
        match self {
            AppError::Db(e) => AppError::Validation(e.to_string()),
            other => other,
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut res = HttpResponse::build(self.status_code());
        match self {
            Self::NotFound(message) => res.json(ErrorBody { error: message }),
            Self::Validation(detail) => {
                warn!("Rejected request: {}", detail);
                res.json(ValidationBody { errors: [VALIDATION_ERRORS] })
            }
            Self::Db(e) => {
                error!("Database error: {}", e);
                res.json(ErrorBody { error: INTERNAL_ERROR })
            }
        }
    }
}
