use actix_web::get;

use crate::types::response::{ApiResponse, ApiResult};

pub const BANNER: &str = "Superheroes API";

#[get("/")]
pub async fn home(_req: actix_web::HttpRequest) -> ApiResult<()> {
    Ok(ApiResponse::Text(BANNER))
}
