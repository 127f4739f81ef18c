use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    entities::student::{NewStudent, Student},
    errors::AppError,
    repositories::sqlx_repo::SqlxStudentRepo,
};

const STUDENT_COLUMNS: &str = "id, first_name, last_name, email, birth_date";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Lists every stored student
    async fn list_students(&self) -> Result<Vec<Student>, AppError>;

    /// Retrieves a student by id, `None` when absent
    async fn get_student_by_id(&self, id: i32) -> Result<Option<Student>, AppError>;

    /// Checks whether a student with this id is stored
    async fn student_exists(&self, id: i32) -> Result<bool, AppError>;

    /// Inserts a student and returns it with its assigned id
    async fn create_student(&self, student: &NewStudent) -> Result<Student, AppError>;

    /// Overwrites every field but the id. Returns false when no row was written.
    async fn update_student(&self, id: i32, student: &NewStudent) -> Result<bool, AppError>;

    /// Removes a student. Returns false when no row was removed.
    async fn delete_student(&self, id: i32) -> Result<bool, AppError>;
}

#[async_trait]
impl<T> StudentRepository for Arc<T>
where
    T: StudentRepository + ?Sized,
{
    async fn list_students(&self) -> Result<Vec<Student>, AppError> {
        (**self).list_students().await
    }

    async fn get_student_by_id(&self, id: i32) -> Result<Option<Student>, AppError> {
        (**self).get_student_by_id(id).await
    }

    async fn student_exists(&self, id: i32) -> Result<bool, AppError> {
        (**self).student_exists(id).await
    }

    async fn create_student(&self, student: &NewStudent) -> Result<Student, AppError> {
        (**self).create_student(student).await
    }

    async fn update_student(&self, id: i32, student: &NewStudent) -> Result<bool, AppError> {
        (**self).update_student(id, student).await
    }

    async fn delete_student(&self, id: i32) -> Result<bool, AppError> {
        (**self).delete_student(id).await
    }
}

impl SqlxStudentRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxStudentRepo { pool }
    }
}

#[async_trait]
impl StudentRepository for SqlxStudentRepo {
    async fn list_students(&self) -> Result<Vec<Student>, AppError> {
        let students = sqlx::query_as::<_, Student>(
            &format!("SELECT {STUDENT_COLUMNS} FROM students ORDER BY id")
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(students)
    }

    async fn get_student_by_id(&self, id: i32) -> Result<Option<Student>, AppError> {
        let student = sqlx::query_as::<_, Student>(
            &format!("SELECT {STUDENT_COLUMNS} FROM students WHERE id = $1")
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(student)
    }

    async fn student_exists(&self, id: i32) -> Result<bool, AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM students WHERE id = $1)"
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn create_student(&self, student: &NewStudent) -> Result<Student, AppError> {
        let created = sqlx::query_as::<_, Student>(
            &format!(
                r#"
                INSERT INTO students (first_name, last_name, email, birth_date)
                VALUES ($1, $2, $3, $4)
                RETURNING {STUDENT_COLUMNS}
                "#
            )
        )
        .bind(&student.first_name)
        .bind(&student.last_name)
        .bind(&student.email)
        .bind(student.birth_date)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn update_student(&self, id: i32, student: &NewStudent) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE students
            SET
                first_name = $1,
                last_name = $2,
                email = $3,
                birth_date = $4
            WHERE id = $5
            "#
        )
        .bind(&student.first_name)
        .bind(&student.last_name)
        .bind(&student.email)
        .bind(student.birth_date)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_student(&self, id: i32) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
