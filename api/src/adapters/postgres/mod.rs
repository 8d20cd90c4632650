//! PostgreSQL adapters
//!
//! SeaORM-backed implementations of the repository ports.

pub mod project_repo;
pub mod task_repo;

pub use project_repo::PostgresProjectRepository;
pub use task_repo::PostgresTaskRepository;
