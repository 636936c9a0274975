use actix_web::{HttpResponse, Responder};
use serde::Serialize;

use crate::types::error::AppError;

/// Successful handler outcomes. JSON variants serialize their payload,
/// `Text` is sent as `text/plain`.
pub enum ApiResponse<T> {
    Ok(T),
    Created(T),
    Text(&'static str),
}

impl<T: Serialize> Responder for ApiResponse<T> {
    type Body = actix_web::body::BoxBody;

    fn respond_to(self, _: &actix_web::HttpRequest) -> HttpResponse {
        match self {
            ApiResponse::Ok(payload) => HttpResponse::Ok().json(payload),
            ApiResponse::Created(payload) => HttpResponse::Created().json(payload),
            ApiResponse::Text(text) => HttpResponse::Ok()
                .content_type("text/plain; charset=utf-8")
                .body(text),
        }
    }
}

pub type ApiResult<T> = Result<ApiResponse<T>, AppError>;
