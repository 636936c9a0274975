use actix_web::{error::JsonPayloadError, web, HttpRequest};

use crate::types::error::AppError;

pub mod hero;
pub mod hero_power;
pub mod home;
pub mod power;

/// Parses an `{id}` path segment. A segment that can't name a stored row,
/// including integers past the key column's range, is that entity's 404.
pub(crate) fn parse_id(raw: &str, not_found: &'static str) -> Result<i32, AppError> {
    raw.parse::<i32>().map_err(|_| AppError::NotFound(not_found))
}

/// Malformed or incomplete JSON bodies get the same generic 400 as any other
/// validation failure.
fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::Validation(err.to_string()).into()
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler));

    cfg.service(home::home);
    cfg.service(
        web::scope("/heroes")
            .service(hero::list::list_heroes)
            .service(hero::get::get_hero),
    );
    cfg.service(
        web::scope("/powers")
            .service(power::list::list_powers)
            .service(power::get::get_power)
            .service(power::update::update_power),
    );
    cfg.service(
        web::scope("/hero_powers")
            .service(hero_power::create::create_hero_power),
    );
}
