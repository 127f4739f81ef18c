use std::sync::Arc;

mod domain;
mod interfaces;
mod infrastructure;
pub mod client;
pub mod errors;
pub mod settings;
pub mod graceful_shutdown;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, repositories, routes};
pub use infrastructure::{db, telemetry, web};

use repositories::{sqlx_repo::SqlxStudentRepo, student::StudentRepository};
use use_cases::student::StudentHandler;

pub struct AppState {
    pub student_handler: AppStudentHandler,
}

pub type AppStudentHandler = StudentHandler<Arc<dyn StudentRepository>>;

impl AppState {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self::with_repository(Arc::new(SqlxStudentRepo::new(pool)))
    }

    pub fn with_repository(student_repo: Arc<dyn StudentRepository>) -> Self {
        AppState {
            student_handler: StudentHandler::new(student_repo),
        }
    }
}
