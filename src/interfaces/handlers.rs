pub mod openapi;
pub mod students;
