use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// A single task on the list. Only `done` is mutable after creation.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub text: String,
    pub done: bool,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
}

impl Task {
    pub fn new(text: String, created_by: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text,
            done: false,
            created_at: Utc::now(),
            created_by,
        }
    }
}
