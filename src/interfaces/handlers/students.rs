use actix_web::{http::header, web, HttpRequest, HttpResponse};

use crate::{entities::student::{NewStudent, Student}, errors::AppError, AppState};

/// Resource name of `GET /records/{id}`, used to build `Location` headers.
pub const STUDENT_RESOURCE: &str = "student_by_id";

#[utoipa::path(
    get,
    path = "/records",
    tag = "records",
    responses(
        (status = 200, description = "Every stored student", body = [Student])
    )
)]
pub async fn list_students(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let students = state.student_handler.list_students().await?;

    Ok(HttpResponse::Ok().json(students))
}

#[utoipa::path(
    get,
    path = "/records/{id}",
    tag = "records",
    params(("id" = i32, Path, description = "Student id")),
    responses(
        (status = 200, description = "The student", body = Student),
        (status = 404, description = "No student with this id")
    )
)]
pub async fn get_student(
    state: web::Data<AppState>,
    student_id: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let student = state.student_handler.get_student(student_id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(student))
}

#[utoipa::path(
    post,
    path = "/records",
    tag = "records",
    request_body = NewStudent,
    responses(
        (status = 201, description = "Student stored", body = Student,
            headers(("Location" = String, description = "URL of the new student"))),
        (status = 400, description = "Malformed or incomplete payload")
    )
)]
pub async fn create_student(
    req: HttpRequest,
    state: web::Data<AppState>,
    payload: web::Json<NewStudent>,
) -> Result<HttpResponse, AppError> {
    let student = state.student_handler.create_student(payload.into_inner()).await?;

    let location = req
        .url_for(STUDENT_RESOURCE, [student.id.to_string()])
        .map_err(|e| AppError::InternalError(format!("Failed to build location: {}", e)))?;

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, location.as_str()))
        .json(student))
}

#[utoipa::path(
    put,
    path = "/records/{id}",
    tag = "records",
    params(("id" = i32, Path, description = "Student id")),
    request_body = NewStudent,
    responses(
        (status = 204, description = "Every field but the id overwritten"),
        (status = 400, description = "Malformed or incomplete payload"),
        (status = 404, description = "No student with this id")
    )
)]
pub async fn update_student(
    state: web::Data<AppState>,
    student_id: web::Path<i32>,
    payload: web::Json<NewStudent>,
) -> Result<HttpResponse, AppError> {
    state.student_handler
        .update_student(student_id.into_inner(), payload.into_inner())
        .await?;

    Ok(HttpResponse::NoContent().finish())
}

#[utoipa::path(
    delete,
    path = "/records/{id}",
    tag = "records",
    params(("id" = i32, Path, description = "Student id")),
    responses(
        (status = 204, description = "Student removed"),
        (status = 404, description = "No student with this id")
    )
)]
pub async fn delete_student(
    state: web::Data<AppState>,
    student_id: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    state.student_handler.delete_student(student_id.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}
