use super::{Lists, Result, TodoStore, UserSummary};
use crate::todo::{NewTodo, TodoItem, TodoUpdate};
use tokio::sync::RwLock;

/// Process-lifetime store; everything is lost on shutdown
#[derive(Debug, Default)]
pub struct MemoryStore {
    lists: RwLock<Lists>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl TodoStore for MemoryStore {
    async fn get_list(&self, username: &str) -> Result<Vec<TodoItem>> {
        let lists = self.lists.read().await;
        super::get_list(&lists, username)
    }

    async fn create_list(&self, username: &str) -> Result<()> {
        let mut lists = self.lists.write().await;
        super::create_list(&mut lists, username)?;
        tracing::debug!("[{}] Created empty todo list", username);
        Ok(())
    }

    async fn replace_list(&self, username: &str, items: Vec<NewTodo>) -> Result<usize> {
        let mut lists = self.lists.write().await;
        super::replace_list(&mut lists, username, items)
    }

    async fn delete_list(&self, username: &str) -> Result<()> {
        let mut lists = self.lists.write().await;
        super::delete_list(&mut lists, username)
    }

    async fn list_users(&self) -> Result<Vec<UserSummary>> {
        let lists = self.lists.read().await;
        Ok(super::list_users(&lists))
    }

    async fn add_todo(&self, username: &str, todo: NewTodo) -> Result<TodoItem> {
        let mut lists = self.lists.write().await;
        super::add_todo(&mut lists, username, todo)
    }

    async fn update_todo(&self, username: &str, id: &str, update: TodoUpdate) -> Result<TodoItem> {
        let mut lists = self.lists.write().await;
        super::update_todo(&mut lists, username, id, update)
    }

    async fn delete_todo(&self, username: &str, id: &str) -> Result<()> {
        let mut lists = self.lists.write().await;
        super::delete_todo(&mut lists, username, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;

    #[tokio::test]
    async fn test_create_then_get_is_empty() {
        let store = MemoryStore::new();
        store.create_list("grizelle").await.unwrap();

        let items = store.get_list("grizelle").await.unwrap();
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_create_twice_is_rejected() {
        let store = MemoryStore::new();
        store.create_list("grizelle").await.unwrap();

        let err = store.create_list("grizelle").await.unwrap_err();
        assert!(matches!(err, StoreError::UserExists(name) if name == "grizelle"));
    }

    #[tokio::test]
    async fn test_replace_regenerates_ids() {
        let store = MemoryStore::new();
        store.create_list("sombra").await.unwrap();

        let items = vec![NewTodo::new("Nap", false), NewTodo::new("Eat", true)];
        assert_eq!(store.replace_list("sombra", items.clone()).await.unwrap(), 2);
        let first = store.get_list("sombra").await.unwrap();

        store.replace_list("sombra", items).await.unwrap();
        let second = store.get_list("sombra").await.unwrap();

        assert_eq!(first.len(), 2);
        assert_eq!(first[0].label, "Nap");
        assert_eq!(first[1].label, "Eat");
        assert!(first.iter().all(|a| second.iter().all(|b| a.id != b.id)));
    }

    #[tokio::test]
    async fn test_replace_unknown_user_fails() {
        let store = MemoryStore::new();
        let err = store
            .replace_list("nobody", vec![NewTodo::new("x", false)])
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::UserNotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_list_removes_user() {
        let store = MemoryStore::new();
        store.create_list("sombra").await.unwrap();
        store
            .add_todo("sombra", NewTodo::new("Meow", false))
            .await
            .unwrap();

        store.delete_list("sombra").await.unwrap();

        assert!(matches!(
            store.get_list("sombra").await,
            Err(StoreError::UserNotFound(_))
        ));
        assert!(matches!(
            store.delete_list("sombra").await,
            Err(StoreError::UserNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_list_users_sorted_with_counts() {
        let store = MemoryStore::new();
        store.create_list("sombra").await.unwrap();
        store.create_list("grizelle").await.unwrap();
        store
            .add_todo("sombra", NewTodo::new("Meow", false))
            .await
            .unwrap();

        let users = store.list_users().await.unwrap();
        let names: Vec<&str> = users.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["grizelle", "sombra"]);
        assert_eq!(users[0].todos, 0);
        assert_eq!(users[1].todos, 1);
    }

    #[tokio::test]
    async fn test_item_operations() {
        let store = MemoryStore::new();
        store.create_list("sombra").await.unwrap();
        let item = store
            .add_todo("sombra", NewTodo::new("Hello, world!", false))
            .await
            .unwrap();

        let updated = store
            .update_todo(
                "sombra",
                &item.id,
                TodoUpdate {
                    label: Some("Meow for food at 6 AM".to_string()),
                    done: Some(true),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.id, item.id);
        assert_eq!(updated.label, "Meow for food at 6 AM");
        assert!(updated.done);

        store.delete_todo("sombra", &item.id).await.unwrap();
        assert!(store.get_list("sombra").await.unwrap().is_empty());

        let err = store.delete_todo("sombra", &item.id).await.unwrap_err();
        assert!(matches!(err, StoreError::TodoNotFound { .. }));
    }
}
