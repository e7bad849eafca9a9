mod auth;
mod task;

pub use auth::{current_user, login, LoginResponse};
pub use task::{create_task, delete_task, list_tasks, toggle_task};
