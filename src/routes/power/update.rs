use actix_web::{patch, web};
use std::sync::Arc;

use crate::db::database_service::DatabaseService;
use crate::db::power::POWER_NOT_FOUND;
use crate::routes::parse_id;
use crate::types::power::{PowerRes, RPowerUpdate};
use crate::types::response::{ApiResponse, ApiResult};

#[patch("/{id}")]
pub async fn update_power(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DatabaseService>>,
    path: web::Path<String>,
    // unreadable bodies are treated like a missing description, so the 404 check still runs first
    body: Option<web::Json<RPowerUpdate>>,
) -> ApiResult<PowerRes> {
    let id = parse_id(&path, POWER_NOT_FOUND)?;
    let description = body.and_then(|b| b.into_inner().description);

    let power = db.update_power_description(id, description).await?;

    Ok(ApiResponse::Ok(power.into()))
}
