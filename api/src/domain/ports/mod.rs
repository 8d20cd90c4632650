//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod directory;
pub mod repositories;

pub use directory::{DirectoryUser, UserDirectory, DIRECTORY_PAGE_LIMIT};
pub use repositories::{ProjectRepository, TaskRepository};
