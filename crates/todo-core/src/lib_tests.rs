#[cfg(test)]
mod tests {
    use crate::*;
    use std::sync::Arc;

    #[test]
    fn test_item_serializes_to_wire_shape() {
        let item = TodoItem {
            id: "1".to_string(),
            label: "Hello".to_string(),
            done: false,
        };
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"id": "1", "label": "Hello", "done": false})
        );
    }

    #[test]
    fn test_store_error_messages() {
        assert_eq!(
            StoreError::UserExists("sombra".to_string()).to_string(),
            "User already exists."
        );
        assert_eq!(
            StoreError::UserNotFound("sombra".to_string()).to_string(),
            "User sombra doesn't exist."
        );
    }

    #[tokio::test]
    async fn test_store_usable_as_trait_object() {
        let store: Arc<dyn TodoStore> = Arc::new(MemoryStore::new());
        store.create_list("grizelle").await.unwrap();
        let saved = store
            .replace_list("grizelle", vec![NewTodo::new("Water plants", false)])
            .await
            .unwrap();

        assert_eq!(saved, 1);
        assert_eq!(store.get_list("grizelle").await.unwrap().len(), 1);
    }
}
