use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{StoreError, TodoStore};
use crate::{model::Todo, schema::TodoInput};

#[derive(Debug, Default)]
struct Inner {
    todos: BTreeMap<i64, Todo>,
    last_id: i64,
}

/// In-process store. Ids start at 1 and are never reused.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoStore for MemoryStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<Todo>, StoreError> {
        Ok(self.inner.read().await.todos.get(&id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Todo>, StoreError> {
        Ok(self.inner.read().await.todos.values().cloned().collect())
    }

    async fn list_by_status(&self, status: &str) -> Result<Vec<Todo>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .todos
            .values()
            .filter(|todo| todo.status == status)
            .cloned()
            .collect())
    }

    async fn add(&self, input: TodoInput) -> Result<Todo, StoreError> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let todo = Todo {
            id: inner.last_id,
            title: input.title,
            description: input.description,
            status: input.status,
        };
        inner.todos.insert(todo.id, todo.clone());
        Ok(todo)
    }

    async fn update(&self, id: i64, input: TodoInput) -> Result<bool, StoreError> {
        let mut inner = self.inner.write().await;
        let Some(todo) = inner.todos.get_mut(&id) else {
            return Ok(false);
        };
        todo.title = input.title;
        todo.description = input.description;
        todo.status = input.status;
        Ok(true)
    }

    async fn remove(&self, id: i64) -> Result<bool, StoreError> {
        Ok(self.inner.write().await.todos.remove(&id).is_some())
    }
}
