use crate::{
    entities::student::{NewStudent, Student},
    errors::AppError,
    repositories::student::StudentRepository,
};

pub struct StudentHandler<R>
where
    R: StudentRepository,
{
    pub student_repo: R,
}

impl<R> StudentHandler<R>
where
    R: StudentRepository,
{
    pub fn new(student_repo: R) -> Self {
        StudentHandler { student_repo }
    }

    /// Lists every stored student
    pub async fn list_students(&self) -> Result<Vec<Student>, AppError> {
        self.student_repo.list_students().await
    }

    /// Retrieves a student by its ID
    pub async fn get_student(&self, id: i32) -> Result<Student, AppError> {
        self.student_repo
            .get_student_by_id(id)
            .await?
            .ok_or_else(|| AppError::student_not_found(id))
    }

    /// Stores a new student; the store assigns the ID
    pub async fn create_student(&self, request: NewStudent) -> Result<Student, AppError> {
        let student = self.student_repo.create_student(&request).await?;

        tracing::info!("Created student {}", student.id);
        Ok(student)
    }

    /// Overwrites every field of an existing student except its ID.
    ///
    /// A write that lands on no row, or that the store rejects as a conflict,
    /// is followed by an existence check: a vanished student is reported as
    /// not found, otherwise the write is attempted once more.
    pub async fn update_student(&self, id: i32, request: NewStudent) -> Result<(), AppError> {
        if !self.student_repo.student_exists(id).await? {
            return Err(AppError::student_not_found(id));
        }

        let mut retried = false;
        loop {
            let failure = match self.student_repo.update_student(id, &request).await {
                Ok(true) => return Ok(()),
                Ok(false) => format!("update of student {} wrote no row", id),
                Err(AppError::Conflict(msg)) => msg,
                Err(e) => return Err(e),
            };

            if !self.student_repo.student_exists(id).await? {
                return Err(AppError::student_not_found(id));
            }

            if retried {
                return Err(AppError::InternalError(format!(
                    "update of student {} failed after retry: {}",
                    id, failure
                )));
            }

            tracing::warn!("Retrying update of student {}: {}", id, failure);
            retried = true;
        }
    }

    /// Deletes a student by its ID
    pub async fn delete_student(&self, id: i32) -> Result<(), AppError> {
        if !self.student_repo.delete_student(id).await? {
            return Err(AppError::student_not_found(id));
        }

        tracing::info!("Deleted student {}", id);
        Ok(())
    }
}
