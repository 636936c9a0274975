use actix_web::{get, web};
use std::sync::Arc;

use crate::db::database_service::DatabaseService;
use crate::types::power::PowerRes;
use crate::types::response::{ApiResponse, ApiResult};

#[get("")]
pub async fn list_powers(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DatabaseService>>,
) -> ApiResult<Vec<PowerRes>> {
    let powers = db.list_powers().await?;

    Ok(ApiResponse::Ok(powers.into_iter().map(PowerRes::from).collect()))
}
