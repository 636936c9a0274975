use actix_web::{get, web};
use std::sync::Arc;

use crate::db::database_service::DatabaseService;
use crate::db::hero::HERO_NOT_FOUND;
use crate::routes::parse_id;
use crate::types::hero::HeroDetailRes;
use crate::types::response::{ApiResponse, ApiResult};

#[get("/{id}")]
pub async fn get_hero(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DatabaseService>>,
    path: web::Path<String>,
) -> ApiResult<HeroDetailRes> {
    let id = parse_id(&path, HERO_NOT_FOUND)?;
    let hero = db.get_hero_detail(id).await?;

    Ok(ApiResponse::Ok(hero))
}
