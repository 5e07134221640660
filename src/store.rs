//! Storage collaborator for todos.
//!
//! Handlers only see [`TodoStore`]. Every method commits on its own, so there
//! is no pending state to flush after a write.

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use async_trait::async_trait;
use thiserror::Error;

use crate::{model::Todo, schema::TodoInput};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[async_trait]
pub trait TodoStore: Send + Sync + 'static {
    async fn find_by_id(&self, id: i64) -> Result<Option<Todo>, StoreError>;

    /// All todos, ordered by id.
    async fn list_all(&self) -> Result<Vec<Todo>, StoreError>;

    /// Todos whose status is exactly `status`.
    async fn list_by_status(&self, status: &str) -> Result<Vec<Todo>, StoreError>;

    /// Inserts a todo and returns it with the id the store assigned.
    async fn add(&self, input: TodoInput) -> Result<Todo, StoreError>;

    /// Overwrites title, description and status. Returns `false` if `id` is absent.
    async fn update(&self, id: i64, input: TodoInput) -> Result<bool, StoreError>;

    /// Returns `false` if `id` is absent.
    async fn remove(&self, id: i64) -> Result<bool, StoreError>;
}
