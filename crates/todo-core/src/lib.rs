pub mod error;
pub mod storage;
pub mod todo;

pub use error::StoreError;
pub use storage::{JsonFileStore, MemoryStore, TodoStore, UserSummary};
pub use todo::{NewTodo, TodoItem, TodoList, TodoUpdate};

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
