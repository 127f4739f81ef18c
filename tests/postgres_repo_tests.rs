//! Runs against a real database. Set `TEST_DATABASE_URL` and run with
//! `cargo test -- --ignored`.

use chrono::NaiveDate;
use student_records::{
    db::postgres::{create_pool, run_migrations},
    entities::student::NewStudent,
    repositories::{sqlx_repo::SqlxStudentRepo, student::StudentRepository},
    use_cases::student::StudentHandler,
};

async fn test_repo() -> Option<SqlxStudentRepo> {
    let url = std::env::var("TEST_DATABASE_URL").ok()?;
    let pool = create_pool(&url, 2).await.expect("Failed to create test DB pool");
    run_migrations(&pool).await.expect("Failed to run migrations");

    sqlx::query("TRUNCATE TABLE students RESTART IDENTITY")
        .execute(&pool)
        .await
        .expect("Failed to truncate students");

    Some(SqlxStudentRepo::new(pool))
}

fn ana() -> NewStudent {
    NewStudent::new("Ana", "Diaz", "a@x.com", NaiveDate::from_ymd_opt(2000, 1, 1).unwrap())
}

#[tokio::test]
#[ignore = "requires a running Postgres (TEST_DATABASE_URL)"]
async fn sqlx_repo_supports_full_lifecycle() {
    let Some(repo) = test_repo().await else {
        return;
    };

    let created = repo.create_student(&ana()).await.unwrap();
    assert_eq!(created.id, 1);
    assert!(repo.student_exists(created.id).await.unwrap());

    let replacement = NewStudent::new("Ana", "Ruiz", "r@x.com", NaiveDate::from_ymd_opt(2001, 5, 6).unwrap());
    assert!(repo.update_student(created.id, &replacement).await.unwrap());
    assert_eq!(
        repo.get_student_by_id(created.id).await.unwrap(),
        Some(replacement.clone().into_student(created.id))
    );

    assert!(repo.delete_student(created.id).await.unwrap());
    assert!(!repo.delete_student(created.id).await.unwrap());
    assert!(!repo.update_student(created.id, &replacement).await.unwrap());
    assert!(repo.list_students().await.unwrap().is_empty());
}

#[tokio::test]
#[ignore = "requires a running Postgres (TEST_DATABASE_URL)"]
async fn handler_over_sqlx_reports_not_found() {
    let Some(repo) = test_repo().await else {
        return;
    };
    let handler = StudentHandler::new(repo);

    assert!(handler.get_student(404).await.unwrap_err().is_not_found());
    assert!(handler.update_student(404, ana()).await.unwrap_err().is_not_found());
    assert!(handler.delete_student(404).await.unwrap_err().is_not_found());
    assert!(handler.list_students().await.unwrap().is_empty());
}
