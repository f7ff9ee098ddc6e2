use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("User {0} doesn't exist.")]
    UserNotFound(String),

    #[error("User already exists.")]
    UserExists(String),

    #[error("Todo {id} doesn't exist for user {username}.")]
    TodoNotFound { username: String, id: String },

    #[error("Storage error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
