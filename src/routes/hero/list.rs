use actix_web::{get, web};
use std::sync::Arc;

use crate::db::database_service::DatabaseService;
use crate::types::hero::HeroRes;
use crate::types::response::{ApiResponse, ApiResult};

#[get("")]
pub async fn list_heroes(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DatabaseService>>,
) -> ApiResult<Vec<HeroRes>> {
    let heroes = db.list_heroes().await?;

    Ok(ApiResponse::Ok(heroes.into_iter().map(HeroRes::from).collect()))
}
