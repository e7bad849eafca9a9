use std::sync::Arc;

use tokio::sync::RwLock;

use crate::errors::{ApiError, AppResult};
use crate::models::Task;

// Process-owned task list. The runtime serves requests concurrently, so
// the single-writer discipline comes from the lock around the list.
#[derive(Clone, Default)]
pub struct TaskStore {
    tasks: Arc<RwLock<Vec<Task>>>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    // Newest first; create prepends.
    pub async fn list(&self) -> Vec<Task> {
        self.tasks.read().await.clone()
    }

    pub async fn create(&self, text: String, created_by: String) -> Task {
        let task = Task::new(text, created_by);
        self.tasks.write().await.insert(0, task.clone());
        task
    }

    pub async fn toggle(&self, id: &str, done: bool) -> AppResult<Task> {
        let mut tasks = self.tasks.write().await;
        let task = tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| ApiError::NotFound(id.to_string()))?;

        task.done = done;
        Ok(task.clone())
    }

    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let mut tasks = self.tasks.write().await;
        let before = tasks.len();
        tasks.retain(|t| t.id != id);

        if tasks.len() == before {
            return Err(ApiError::NotFound(id.to_string()));
        }
        Ok(())
    }
}
