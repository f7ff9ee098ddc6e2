//! Todo list types owned by the store

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Todo item as returned to clients
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TodoItem {
    pub id: String,
    pub label: String,
    pub done: bool,
}

impl TodoItem {
    /// Build an item from client input. The id is always generated here;
    /// an id carried by the request body never reaches this point.
    pub fn from_new(new: NewTodo) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            label: new.label,
            done: new.done,
        }
    }
}

/// Item shape accepted on list replacement and item creation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTodo {
    pub label: String,
    #[serde(default)]
    pub done: bool,
}

impl NewTodo {
    pub fn new(label: impl Into<String>, done: bool) -> Self {
        Self {
            label: label.into(),
            done,
        }
    }
}

/// Partial update of a single item; `None` leaves the field untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TodoUpdate {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub done: Option<bool>,
}

/// Ordered todo items belonging to one user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoList {
    pub username: String,
    pub items: Vec<TodoItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TodoList {
    pub fn new(username: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            username: username.into(),
            items: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace every item, assigning fresh ids. Returns the new item count.
    pub fn replace(&mut self, items: Vec<NewTodo>) -> usize {
        self.items = items.into_iter().map(TodoItem::from_new).collect();
        self.updated_at = Utc::now();
        self.items.len()
    }

    /// Append one item and return it
    pub fn push(&mut self, new: NewTodo) -> TodoItem {
        let item = TodoItem::from_new(new);
        self.items.push(item.clone());
        self.updated_at = Utc::now();
        item
    }

    pub fn update_item(&mut self, item_id: &str, update: TodoUpdate) -> Option<TodoItem> {
        let item = self.items.iter_mut().find(|i| i.id == item_id)?;
        if let Some(label) = update.label {
            item.label = label;
        }
        if let Some(done) = update.done {
            item.done = done;
        }
        let updated = item.clone();
        self.updated_at = Utc::now();
        Some(updated)
    }

    pub fn remove_item(&mut self, item_id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.id != item_id);
        let removed = self.items.len() != before;
        if removed {
            self.updated_at = Utc::now();
        }
        removed
    }
}
