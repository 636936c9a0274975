use actix_web::{post, web};
use std::sync::Arc;

use crate::db::database_service::DatabaseService;
use crate::types::hero_power::{HeroPowerCreateRes, RHeroPowerCreate};
use crate::types::response::{ApiResponse, ApiResult};

#[post("")]
pub async fn create_hero_power(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DatabaseService>>,
    data: web::Json<RHeroPowerCreate>,
) -> ApiResult<HeroPowerCreateRes> {
    let created = db.create_hero_power(data.into_inner()).await?;

    Ok(ApiResponse::Created(created))
}
