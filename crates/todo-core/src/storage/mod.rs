mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use crate::error::StoreError;
use crate::todo::{NewTodo, TodoItem, TodoList, TodoUpdate};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;

pub type Result<T, E = StoreError> = std::result::Result<T, E>;

/// One row of the user listing
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct UserSummary {
    pub name: String,
    pub todos: usize,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&TodoList> for UserSummary {
    fn from(list: &TodoList) -> Self {
        Self {
            name: list.username.clone(),
            todos: list.items.len(),
            created_at: list.created_at,
            updated_at: list.updated_at,
        }
    }
}

#[async_trait::async_trait]
pub trait TodoStore: Send + Sync {
    /// Items of a user's list, in insertion order
    async fn get_list(&self, username: &str) -> Result<Vec<TodoItem>>;
    /// Register a user with an empty list
    async fn create_list(&self, username: &str) -> Result<()>;
    /// Replace the whole list; returns the number of items saved
    async fn replace_list(&self, username: &str, items: Vec<NewTodo>) -> Result<usize>;
    async fn delete_list(&self, username: &str) -> Result<()>;
    /// All users sorted by name
    async fn list_users(&self) -> Result<Vec<UserSummary>>;
    async fn add_todo(&self, username: &str, todo: NewTodo) -> Result<TodoItem>;
    async fn update_todo(&self, username: &str, id: &str, update: TodoUpdate) -> Result<TodoItem>;
    async fn delete_todo(&self, username: &str, id: &str) -> Result<()>;
}

/// Map operations shared by every backend. Callers hold the lock.
pub(crate) type Lists = HashMap<String, TodoList>;

pub(crate) fn get_list(lists: &Lists, username: &str) -> Result<Vec<TodoItem>> {
    lists
        .get(username)
        .map(|list| list.items.clone())
        .ok_or_else(|| StoreError::UserNotFound(username.to_string()))
}

pub(crate) fn create_list(lists: &mut Lists, username: &str) -> Result<()> {
    if lists.contains_key(username) {
        return Err(StoreError::UserExists(username.to_string()));
    }
    lists.insert(username.to_string(), TodoList::new(username));
    Ok(())
}

pub(crate) fn replace_list(lists: &mut Lists, username: &str, items: Vec<NewTodo>) -> Result<usize> {
    Ok(list_mut(lists, username)?.replace(items))
}

pub(crate) fn delete_list(lists: &mut Lists, username: &str) -> Result<()> {
    lists
        .remove(username)
        .map(|_| ())
        .ok_or_else(|| StoreError::UserNotFound(username.to_string()))
}

pub(crate) fn list_users(lists: &Lists) -> Vec<UserSummary> {
    let mut users: Vec<UserSummary> = lists.values().map(UserSummary::from).collect();
    users.sort_by(|a, b| a.name.cmp(&b.name));
    users
}

pub(crate) fn add_todo(lists: &mut Lists, username: &str, todo: NewTodo) -> Result<TodoItem> {
    Ok(list_mut(lists, username)?.push(todo))
}

pub(crate) fn update_todo(
    lists: &mut Lists,
    username: &str,
    id: &str,
    update: TodoUpdate,
) -> Result<TodoItem> {
    list_mut(lists, username)?
        .update_item(id, update)
        .ok_or_else(|| todo_not_found(username, id))
}

pub(crate) fn delete_todo(lists: &mut Lists, username: &str, id: &str) -> Result<()> {
    if list_mut(lists, username)?.remove_item(id) {
        Ok(())
    } else {
        Err(todo_not_found(username, id))
    }
}

fn list_mut<'a>(lists: &'a mut Lists, username: &str) -> Result<&'a mut TodoList> {
    lists
        .get_mut(username)
        .ok_or_else(|| StoreError::UserNotFound(username.to_string()))
}

fn todo_not_found(username: &str, id: &str) -> StoreError {
    StoreError::TodoNotFound {
        username: username.to_string(),
        id: id.to_string(),
    }
}
