mod task_store;
mod user_registry;

pub use task_store::TaskStore;
pub use user_registry::UserRegistry;
