use std::path::PathBuf;

use tokio::sync::Mutex;

use nova_core::store::MemoryStore;
use nova_types::error::StoreError;
use nova_types::memory::MemoryBook;

use crate::filesystem::{read_json, read_json_or_default, write_json_atomic};

/// `memory.json` as a [`MemoryStore`].
pub struct JsonMemoryStore {
    path: PathBuf,
    write_guard: Mutex<()>,
}

impl JsonMemoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_guard: Mutex::new(()),
        }
    }
}

impl MemoryStore for JsonMemoryStore {
    async fn load(&self) -> MemoryBook {
        read_json_or_default(&self.path).await
    }

    async fn save(&self, book: &MemoryBook) -> Result<(), StoreError> {
        let _guard = self.write_guard.lock().await;
        write_json_atomic(&self.path, book).await
    }

    async fn append_fact(&self, fact: &str) -> Result<usize, StoreError> {
        let _guard = self.write_guard.lock().await;
        // An unreadable book is left on disk as-is.
        let mut book = read_json::<MemoryBook>(&self.path).await?.unwrap_or_default();
        book.remember(fact);
        write_json_atomic(&self.path, &book).await?;
        Ok(book.facts().len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_missing_file_loads_empty() {
        let tmp = TempDir::new().unwrap();
        let store = JsonMemoryStore::new(tmp.path().join("memory.json"));
        assert_eq!(store.load().await, MemoryBook::default());
    }

    #[tokio::test]
    async fn test_corrupt_file_loads_empty() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("memory.json");
        tokio::fs::write(&path, "[[[").await.unwrap();

        let store = JsonMemoryStore::new(&path);
        assert!(store.load().await.facts().is_empty());
    }

    #[tokio::test]
    async fn test_append_fact_persists_in_original_shape() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("memory.json");
        let store = JsonMemoryStore::new(&path);

        assert_eq!(store.append_fact("remember that I like jazz").await.unwrap(), 1);
        assert_eq!(store.append_fact("remember that I live in Graz").await.unwrap(), 2);

        let raw: serde_json::Value =
            serde_json::from_str(&tokio::fs::read_to_string(&path).await.unwrap()).unwrap();
        assert_eq!(
            raw,
            serde_json::json!({
                "memories": ["remember that I like jazz", "remember that I live in Graz"]
            })
        );
    }

    #[tokio::test]
    async fn test_append_keeps_operator_fields() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("memory.json");
        tokio::fs::write(&path, r#"{"memories": ["old"], "note": "hand edited"}"#)
            .await
            .unwrap();

        let store = JsonMemoryStore::new(&path);
        store.append_fact("new").await.unwrap();

        let book = store.load().await;
        assert_eq!(book.memories, vec!["old".to_string(), "new".to_string()]);
        assert_eq!(book.extra["note"], "hand edited");
    }

    #[tokio::test]
    async fn test_mistyped_book_aborts_append_and_keeps_content() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("memory.json");
        let original = r#"{"memories": ["remember that I like tea", 42], "owner": "franz"}"#;
        tokio::fs::write(&path, original).await.unwrap();

        let store = JsonMemoryStore::new(&path);
        let err = store.append_fact("remember that it rains").await.unwrap_err();

        assert!(matches!(err, StoreError::Serialization(_)));
        assert_eq!(tokio::fs::read_to_string(&path).await.unwrap(), original);
    }

    #[tokio::test]
    async fn test_corrupt_book_aborts_append() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("memory.json");
        tokio::fs::write(&path, "[[[").await.unwrap();

        let store = JsonMemoryStore::new(&path);
        assert!(store.append_fact("remember that x").await.is_err());
        assert_eq!(tokio::fs::read_to_string(&path).await.unwrap(), "[[[");
    }

    #[tokio::test]
    async fn test_concurrent_appends_are_all_kept() {
        let tmp = TempDir::new().unwrap();
        let store = Arc::new(JsonMemoryStore::new(tmp.path().join("memory.json")));

        let mut tasks = Vec::new();
        for i in 0..25 {
            let store = store.clone();
            tasks.push(tokio::spawn(async move {
                store.append_fact(&format!("fact {i}")).await.unwrap();
            }));
        }
        for task in tasks {
            task.await.unwrap();
        }

        assert_eq!(store.load().await.facts().len(), 25);
    }
}
