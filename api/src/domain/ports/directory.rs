//! User directory port trait
//!
//! Defines the interface for the hosted identity provider that owns user
//! records. The directory is paginated by a fixed page size and this service
//! only ever reads the first page.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::entities::UserId;
use crate::error::DirectoryError;

/// Page size used when listing users. Directories larger than this are
/// silently truncated; no cursor follow-up is issued.
pub const DIRECTORY_PAGE_LIMIT: i64 = 1000;

/// A user record as the directory reports it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryUser {
    pub id: UserId,
    pub full_name: String,
}

/// Port trait for the user directory
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// List user identities, a single page of up to `limit` records.
    /// The directory offers no cursor; anything beyond the page is unseen.
    async fn list_users(&self, limit: i64) -> Result<Vec<DirectoryUser>, DirectoryError>;
}
