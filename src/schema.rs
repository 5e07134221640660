use serde::{Deserialize, Serialize};

// Request body for creating or replacing a Todo. Any `id` sent by the client
// is dropped; the store owns ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoInput {
    pub title: String,
    pub description: String,
    pub status: String,
}
