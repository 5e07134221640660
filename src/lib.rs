//! JSON API over a single `Todo` resource, backed by SQLite.

pub mod config;
pub mod error;
pub mod handler;
pub mod middleware;
pub mod model;
pub mod route;
pub mod schema;
pub mod store;

use store::TodoStore;

// Struct representing the application state
pub struct AppState {
    pub store: Box<dyn TodoStore>,
}

impl AppState {
    pub fn new(store: impl TodoStore) -> Self {
        Self {
            store: Box::new(store),
        }
    }
}
