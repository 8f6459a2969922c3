//! In-process user store

use crate::domain::registration::StoredUser;
use crate::shared::error::AppResult;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Abstraction for persisting registered users
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Append a user record
    async fn append(&self, user: StoredUser) -> AppResult<()>;

    /// Snapshot of every stored record, in insertion order
    async fn list(&self) -> AppResult<Vec<StoredUser>>;

    /// Number of stored records
    async fn count(&self) -> AppResult<usize> {
        Ok(self.list().await?.len())
    }
}

/// Process-wide list standing in for a database. Appends are serialized by the write lock.
#[derive(Clone, Default)]
pub struct InMemoryUserStore {
    users: Arc<RwLock<Vec<StoredUser>>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn append(&self, user: StoredUser) -> AppResult<()> {
        self.users.write().await.push(user);
        Ok(())
    }

    async fn list(&self) -> AppResult<Vec<StoredUser>> {
        Ok(self.users.read().await.clone())
    }

    async fn count(&self) -> AppResult<usize> {
        Ok(self.users.read().await.len())
    }
}
