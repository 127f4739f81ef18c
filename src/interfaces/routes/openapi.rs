use actix_web::web;

use crate::handlers::openapi;

pub const OPENAPI_PATH: &str = "/openapi/v1.json";

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(OPENAPI_PATH, web::get().to(openapi::openapi_json));
}
