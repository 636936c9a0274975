use actix_web::{get, web};
use std::sync::Arc;

use crate::db::database_service::DatabaseService;
use crate::db::power::POWER_NOT_FOUND;
use crate::routes::parse_id;
use crate::types::power::PowerRes;
use crate::types::response::{ApiResponse, ApiResult};

#[get("/{id}")]
pub async fn get_power(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DatabaseService>>,
    path: web::Path<String>,
) -> ApiResult<PowerRes> {
    let id = parse_id(&path, POWER_NOT_FOUND)?;
    let power = db.get_power(id).await?;

    Ok(ApiResponse::Ok(power.into()))
}
