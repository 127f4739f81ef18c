use actix_web::HttpResponse;
use utoipa::OpenApi;

use crate::{entities::student::{NewStudent, Student}, handlers::students};

#[derive(OpenApi)]
#[openapi(
    info(title = "Student Records API", description = "CRUD over student records"),
    paths(
        students::list_students,
        students::get_student,
        students::create_student,
        students::update_student,
        students::delete_student,
    ),
    components(schemas(Student, NewStudent)),
    tags((name = "records", description = "Student record management"))
)]
pub struct ApiDoc;

pub async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
