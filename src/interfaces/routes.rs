use actix_web::web;

mod json_error;
mod openapi;
mod students;

pub use json_error::JsonError;
pub use openapi::OPENAPI_PATH;

/// Every route the service exposes, as `(method, path)`.
pub const ROUTE_TABLE: &[(&str, &str)] = &[
    ("GET", "/records"),
    ("POST", "/records"),
    ("GET", "/records/{id}"),
    ("PUT", "/records/{id}"),
    ("DELETE", "/records/{id}"),
];

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(json_error::config_routes);
    cfg.configure(students::config_routes);
}

/// Serves the OpenAPI document at [`OPENAPI_PATH`]. Not mounted in production.
pub fn configure_openapi(cfg: &mut web::ServiceConfig) {
    cfg.configure(openapi::config_routes);
}

pub fn log_route_table() {
    tracing::info!("Mapped routes:");
    for (method, path) in ROUTE_TABLE {
        tracing::info!("  {:<6} {}", method, path);
    }
}
