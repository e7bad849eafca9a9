mod forms;
mod task;
mod user;

pub use forms::{CreateTaskForm, LoginForm, ToggleTaskForm};
pub use task::Task;
pub use user::{Role, UserInfo, UserRecord};
