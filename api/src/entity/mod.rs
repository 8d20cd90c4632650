//! SeaORM entity models
//!
//! Table models backing the PostgreSQL adapters. Domain entities live in
//! `domain::entities`; the adapters convert between the two.

pub mod projects;
pub mod tasks;
