use std::sync::Arc;
use todo_core::{JsonFileStore, MemoryStore, StoreError, TodoStore};

use crate::config::ServerConfig;

pub struct AppState {
    pub store: Arc<dyn TodoStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn TodoStore>) -> Self {
        Self { store }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// Pick the storage backend from configuration
    pub async fn from_config(config: &ServerConfig) -> Result<Self, StoreError> {
        match &config.data_file {
            Some(path) => {
                let store = JsonFileStore::open(path).await?;
                tracing::info!(
                    "Using JSON file storage at: {}",
                    store.storage_path().display()
                );
                Ok(Self::new(Arc::new(store)))
            }
            None => {
                tracing::info!("Using in-memory storage; lists are dropped on shutdown");
                Ok(Self::in_memory())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_default_config_uses_memory_store() {
        let state = AppState::from_config(&ServerConfig::default()).await.unwrap();
        state.store.create_list("grizelle").await.unwrap();
        assert!(state.store.get_list("grizelle").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_data_file_selects_json_store() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("todos.json");
        let config = ServerConfig {
            data_file: Some(path.clone()),
            ..ServerConfig::default()
        };

        let state = AppState::from_config(&config).await.unwrap();
        state.store.create_list("grizelle").await.unwrap();

        assert!(path.exists());
    }
}
