use super::{Lists, Result, TodoStore, UserSummary};
use crate::error::StoreError;
use crate::todo::{NewTodo, TodoItem, TodoList, TodoUpdate};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::{fs, sync::RwLock};

/// In-memory store mirrored to a single JSON snapshot file.
///
/// The file is read once on [`JsonFileStore::open`]. Every mutation runs on a
/// copy of the map, the copy is written to disk, and only then does it replace
/// the live map, so a failed write leaves both memory and disk untouched.
#[derive(Debug)]
pub struct JsonFileStore {
    storage_path: PathBuf,
    lists: RwLock<Lists>,
}

impl JsonFileStore {
    pub async fn open(storage_path: impl AsRef<Path>) -> Result<Self> {
        let storage_path = storage_path.as_ref().to_path_buf();

        let lists = match fs::read(&storage_path).await {
            Ok(content) => {
                let snapshot: BTreeMap<String, TodoList> = serde_json::from_slice(&content)?;
                snapshot.into_iter().collect()
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Lists::new(),
            Err(err) => return Err(StoreError::Io(err)),
        };

        tracing::info!(
            "Loaded {} todo list(s) from {}",
            lists.len(),
            storage_path.display()
        );

        Ok(Self {
            storage_path,
            lists: RwLock::new(lists),
        })
    }

    pub fn storage_path(&self) -> &Path {
        &self.storage_path
    }

    /// Apply `op` to a staged copy and commit it once the snapshot is on disk.
    /// The write lock is held throughout, so concurrent mutations serialize.
    async fn commit<T, F>(&self, op: F) -> Result<T>
    where
        F: FnOnce(&mut Lists) -> Result<T> + Send,
        T: Send,
    {
        let mut lists = self.lists.write().await;
        let mut staged = lists.clone();
        let value = op(&mut staged)?;

        if let Err(err) = self.persist(&staged).await {
            tracing::error!(
                "Failed to write {}; change discarded: {}",
                self.storage_path.display(),
                err
            );
            return Err(err);
        }

        *lists = staged;
        Ok(value)
    }

    async fn persist(&self, lists: &Lists) -> Result<()> {
        if let Some(parent) = self.storage_path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let snapshot: BTreeMap<&String, &TodoList> = lists.iter().collect();
        let json = serde_json::to_vec_pretty(&snapshot)?;
        fs::write(&self.storage_path, json).await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl TodoStore for JsonFileStore {
    async fn get_list(&self, username: &str) -> Result<Vec<TodoItem>> {
        let lists = self.lists.read().await;
        super::get_list(&lists, username)
    }

    async fn create_list(&self, username: &str) -> Result<()> {
        self.commit(|lists| super::create_list(lists, username)).await
    }

    async fn replace_list(&self, username: &str, items: Vec<NewTodo>) -> Result<usize> {
        self.commit(|lists| super::replace_list(lists, username, items)).await
    }

    async fn delete_list(&self, username: &str) -> Result<()> {
        self.commit(|lists| super::delete_list(lists, username)).await
    }

    async fn list_users(&self) -> Result<Vec<UserSummary>> {
        let lists = self.lists.read().await;
        Ok(super::list_users(&lists))
    }

    async fn add_todo(&self, username: &str, todo: NewTodo) -> Result<TodoItem> {
        self.commit(|lists| super::add_todo(lists, username, todo)).await
    }

    async fn update_todo(&self, username: &str, id: &str, update: TodoUpdate) -> Result<TodoItem> {
        self.commit(|lists| super::update_todo(lists, username, id, update)).await
    }

    async fn delete_todo(&self, username: &str, id: &str) -> Result<()> {
        self.commit(|lists| super::delete_todo(lists, username, id)).await
    }
}
