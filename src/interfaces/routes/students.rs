use actix_web::web;

use crate::handlers::students::{self, STUDENT_RESOURCE};

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/records")
            .service(
                web::resource("")
                    .route(web::get().to(students::list_students))
                    .route(web::post().to(students::create_student))
            )
            .service(
                web::resource("/{student_id}")
                    .name(STUDENT_RESOURCE)
                    .route(web::get().to(students::get_student))
                    .route(web::put().to(students::update_student))
                    .route(web::delete().to(students::delete_student))
            )
    );
}
