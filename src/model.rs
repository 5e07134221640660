use serde::{Deserialize, Serialize};

// Data model representing a Todo item
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub status: String,
}

/// The three status labels the filter routes match on.
///
/// Writes are not checked against these; a todo with any other status is
/// stored as-is and only shows up in the unfiltered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    NotStarted,
    InProgress,
    Completed,
}

impl Status {
    pub fn label(self) -> &'static str {
        match self {
            Status::NotStarted => "not started",
            Status::InProgress => "in progress",
            Status::Completed => "completed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_distinct() {
        let labels: Vec<_> = [Status::NotStarted, Status::InProgress, Status::Completed]
            .iter()
            .map(|s| s.label())
            .collect();
        assert_eq!(labels, ["not started", "in progress", "completed"]);
    }

    #[test]
    fn todo_serializes_with_plain_field_names() {
        let todo = Todo {
            id: 7,
            title: "Buy milk".to_string(),
            description: "2%".to_string(),
            status: Status::NotStarted.label().to_string(),
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["title"], "Buy milk");
        assert_eq!(json["description"], "2%");
        assert_eq!(json["status"], "not started");
    }
}
