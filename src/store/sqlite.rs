use async_trait::async_trait;
use sqlx::{migrate::MigrateDatabase, query, query_as, sqlite::SqlitePoolOptions, Pool, Sqlite};

use super::{StoreError, TodoStore};
use crate::{model::Todo, schema::TodoInput};

const CREATE_TODOS: &str = r#"CREATE TABLE IF NOT EXISTS todos (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    description TEXT NOT NULL,
    status TEXT NOT NULL
);"#;

/// SQLite-backed store, file-backed by default.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    db: Pool<Sqlite>,
}

impl SqliteStore {
    /// Opens `url`, creating the database file and the `todos` table if needed.
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let in_memory = is_in_memory(url);

        if !in_memory && !Sqlite::database_exists(url).await.unwrap_or(false) {
            tracing::info!(url, "creating database");
            Sqlite::create_database(url).await?;
        }

        // every connection to an in-memory url gets its own database
        let options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(10)
        };
        let db = options.connect(url).await?;

        query(CREATE_TODOS).execute(&db).await?;
        tracing::debug!(url, "todos table ready");

        Ok(Self { db })
    }
}

// `sqlite::memory:`, `sqlite://:memory:` and `sqlite://file:x?mode=memory`
fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

#[async_trait]
impl TodoStore for SqliteStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<Todo>, StoreError> {
        let todo = query_as::<_, Todo>(
            "SELECT id, title, description, status FROM todos WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;
        Ok(todo)
    }

    async fn list_all(&self) -> Result<Vec<Todo>, StoreError> {
        let todos =
            query_as::<_, Todo>("SELECT id, title, description, status FROM todos ORDER BY id")
                .fetch_all(&self.db)
                .await?;
        Ok(todos)
    }

    async fn list_by_status(&self, status: &str) -> Result<Vec<Todo>, StoreError> {
        let todos = query_as::<_, Todo>(
            "SELECT id, title, description, status FROM todos WHERE status = ? ORDER BY id",
        )
        .bind(status)
        .fetch_all(&self.db)
        .await?;
        Ok(todos)
    }

    async fn add(&self, input: TodoInput) -> Result<Todo, StoreError> {
        let todo = query_as::<_, Todo>(
            "INSERT INTO todos (title, description, status) VALUES (?, ?, ?) \
             RETURNING id, title, description, status",
        )
        .bind(input.title)
        .bind(input.description)
        .bind(input.status)
        .fetch_one(&self.db)
        .await?;
        Ok(todo)
    }

    async fn update(&self, id: i64, input: TodoInput) -> Result<bool, StoreError> {
        let rows_affected =
            query("UPDATE todos SET title = ?, description = ?, status = ? WHERE id = ?")
                .bind(input.title)
                .bind(input.description)
                .bind(input.status)
                .bind(id)
                .execute(&self.db)
                .await?
                .rows_affected();
        Ok(rows_affected > 0)
    }

    async fn remove(&self, id: i64) -> Result<bool, StoreError> {
        let rows_affected = query("DELETE FROM todos WHERE id = ?")
            .bind(id)
            .execute(&self.db)
            .await?
            .rows_affected();
        Ok(rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(title: &str, status: &str) -> TodoInput {
        TodoInput {
            title: title.to_string(),
            description: format!("{title} details"),
            status: status.to_string(),
        }
    }

    #[test]
    fn recognises_in_memory_urls() {
        assert!(is_in_memory("sqlite::memory:"));
        assert!(is_in_memory("sqlite://:memory:"));
        assert!(is_in_memory("sqlite://file:todos?mode=memory&cache=shared"));
        assert!(!is_in_memory("sqlite://todo.db"));
        assert!(!is_in_memory("sqlite:///var/lib/todo/todo.db?mode=rwc"));
    }

    #[tokio::test]
    async fn mode_memory_url_shares_one_database() {
        let store = SqliteStore::connect("sqlite://file:todos_shared?mode=memory")
            .await
            .unwrap();
        assert_eq!(store.db.options().get_max_connections(), 1);

        let created = store.add(input("a", "completed")).await.unwrap();
        assert_eq!(store.find_by_id(created.id).await.unwrap(), Some(created));
    }

    #[tokio::test]
    async fn file_database_is_created_and_survives_reconnect() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("todo.db");
        let url = format!("sqlite://{}", path.display());

        let store = SqliteStore::connect(&url).await.unwrap();
        assert!(path.exists());
        let kept = store.add(input("kept", "in progress")).await.unwrap();
        let removed = store.add(input("removed", "completed")).await.unwrap();
        assert!(store.remove(removed.id).await.unwrap());
        store.db.close().await;
        drop(store);

        let store = SqliteStore::connect(&url).await.unwrap();
        assert_eq!(store.find_by_id(kept.id).await.unwrap(), Some(kept.clone()));
        assert_eq!(store.find_by_id(removed.id).await.unwrap(), None);

        let added = store.add(input("new", "not started")).await.unwrap();
        assert!(added.id > removed.id);
        assert_eq!(store.list_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn in_memory_store_keeps_rows_across_calls() {
        let store = SqliteStore::connect("sqlite::memory:").await.unwrap();
        let created = store.add(input("Buy milk", "not started")).await.unwrap();

        let found = store.find_by_id(created.id).await.unwrap();
        assert_eq!(found, Some(created));
    }

    #[tokio::test]
    async fn update_overwrites_fields_and_keeps_id() {
        let store = SqliteStore::connect("sqlite::memory:").await.unwrap();
        let created = store.add(input("a", "not started")).await.unwrap();

        assert!(store.update(created.id, input("b", "completed")).await.unwrap());

        let found = store.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(found.id, created.id);
        assert_eq!(found.title, "b");
        assert_eq!(found.description, "b details");
        assert_eq!(found.status, "completed");
    }

    #[tokio::test]
    async fn missing_ids_report_false() {
        let store = SqliteStore::connect("sqlite::memory:").await.unwrap();
        assert_eq!(store.find_by_id(1).await.unwrap(), None);
        assert!(!store.update(1, input("a", "completed")).await.unwrap());
        assert!(!store.remove(1).await.unwrap());
    }

    #[tokio::test]
    async fn list_by_status_filters_exactly() {
        let store = SqliteStore::connect("sqlite::memory:").await.unwrap();
        store.add(input("a", "in progress")).await.unwrap();
        store.add(input("b", "In Progress")).await.unwrap();
        store.add(input("c", "completed")).await.unwrap();

        let in_progress = store.list_by_status("in progress").await.unwrap();
        assert_eq!(in_progress.len(), 1);
        assert_eq!(in_progress[0].title, "a");
        assert_eq!(store.list_all().await.unwrap().len(), 3);
    }
}
