use sqlx::PgPool;

#[derive(Clone)]
pub struct SqlxStudentRepo {
    pub pool: PgPool,
}
