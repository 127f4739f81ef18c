use actix_cors::Cors;

/// Allows the configured origins to call with any header and method.
/// A `*` entry allows every origin.
pub fn build_cors(origins: &[String]) -> Cors {
    if origins.iter().any(|o| o == "*") {
        return Cors::default()
            .allow_any_origin()
            .allow_any_header()
            .allow_any_method();
    }

    origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allow_any_header()
        .allow_any_method()
}
