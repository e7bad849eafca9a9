use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateTaskForm {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct ToggleTaskForm {
    pub done: bool,
}
