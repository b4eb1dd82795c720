//! Data directory layout and JSON file helpers.
//!
//! Every collection lives in its own pretty-printed JSON file under the data
//! directory. Writes go to a temp file in the same directory and are renamed
//! into place, so a reader never sees a half-written file.

use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use nova_types::error::StoreError;

/// File names of the three collections inside the data directory.
#[derive(Debug, Clone)]
pub struct DataLayout {
    root: PathBuf,
}

impl DataLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn memory_path(&self) -> PathBuf {
        self.root.join("memory.json")
    }

    pub fn history_path(&self) -> PathBuf {
        self.root.join("chat_history.json")
    }

    pub fn journal_path(&self) -> PathBuf {
        self.root.join("journal.json")
    }

    pub fn config_path(&self) -> PathBuf {
        self.root.join("config.toml")
    }
}

/// Resolve the data directory.
///
/// Priority:
/// 1. Explicit path (the `--data-dir` flag)
/// 2. `NOVA_DATA_DIR` environment variable
/// 3. `~/.nova`
/// 4. `.nova` in the current directory
pub fn resolve_data_dir(explicit: Option<&Path>) -> PathBuf {
    if let Some(dir) = explicit {
        return dir.to_path_buf();
    }

    if let Ok(dir) = std::env::var("NOVA_DATA_DIR") {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".nova");
    }

    PathBuf::from(".nova")
}

fn io_error(path: &Path, err: impl std::fmt::Display) -> StoreError {
    StoreError::Io {
        path: path.display().to_string(),
        message: err.to_string(),
    }
}

/// Read and parse a JSON file.
///
/// `Ok(None)` means the file does not exist. Any other read failure or a
/// parse failure is an error.
pub async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, StoreError> {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(io_error(path, err)),
    };

    serde_json::from_str(&content)
        .map(Some)
        .map_err(|err| StoreError::Serialization(format!("{}: {err}", path.display())))
}

/// Read a JSON file, falling back to `T::default()` on any failure.
///
/// A missing file is expected on first run and only logged at debug level;
/// unreadable or corrupt files are logged as warnings.
pub async fn read_json_or_default<T: DeserializeOwned + Default>(path: &Path) -> T {
    match read_json(path).await {
        Ok(Some(value)) => value,
        Ok(None) => {
            tracing::debug!("No {} yet, starting empty", path.display());
            T::default()
        }
        Err(err) => {
            tracing::warn!("Failed to load {}: {err}, starting empty", path.display());
            T::default()
        }
    }
}

/// Serialize `value` as pretty JSON and atomically replace `path` with it.
pub async fn write_json_atomic<T: Serialize + ?Sized>(
    path: &Path,
    value: &T,
) -> Result<(), StoreError> {
    let body = serde_json::to_string_pretty(value)
        .map_err(|err| StoreError::Serialization(err.to_string()))?;
    let target = path.to_path_buf();

    tokio::task::spawn_blocking(move || persist_atomically(&target, body.as_bytes()))
        .await
        .map_err(|err| io_error(path, err))?
}

fn persist_atomically(path: &Path, bytes: &[u8]) -> Result<(), StoreError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir).map_err(|err| io_error(dir, err))?;

    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|err| io_error(dir, err))?;
    tmp.write_all(bytes).map_err(|err| io_error(path, err))?;
    tmp.as_file().sync_all().map_err(|err| io_error(path, err))?;
    tmp.persist(path).map_err(|err| io_error(path, err.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_write_then_read_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("list.json");

        write_json_atomic(&path, &vec!["a", "b"]).await.unwrap();
        let back: Option<Vec<String>> = read_json(&path).await.unwrap();
        assert_eq!(back, Some(vec!["a".to_string(), "b".to_string()]));
    }

    #[tokio::test]
    async fn test_write_is_pretty_printed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("obj.json");

        write_json_atomic(&path, &serde_json::json!({"memories": ["x"]}))
            .await
            .unwrap();
        let raw = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(raw, "{\n  \"memories\": [\n    \"x\"\n  ]\n}");
    }

    #[tokio::test]
    async fn test_write_creates_parent_dirs_and_leaves_no_temp_files() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("deep").join("er");
        let path = nested.join("journal.json");

        write_json_atomic(&path, &Vec::<u8>::new()).await.unwrap();
        let names: Vec<_> = std::fs::read_dir(&nested)
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("journal.json")]);
    }

    #[tokio::test]
    async fn test_read_missing_is_none() {
        let dir = tempdir().unwrap();
        let back: Option<Vec<String>> = read_json(&dir.path().join("nope.json")).await.unwrap();
        assert!(back.is_none());
    }

    #[tokio::test]
    async fn test_read_corrupt_is_error_and_default_is_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        tokio::fs::write(&path, "{not json").await.unwrap();

        assert!(read_json::<Vec<String>>(&path).await.is_err());
        let fallback: Vec<String> = read_json_or_default(&path).await;
        assert!(fallback.is_empty());
    }

    #[test]
    fn test_layout_paths() {
        let layout = DataLayout::new("/home/user/.nova");
        assert_eq!(layout.memory_path(), PathBuf::from("/home/user/.nova/memory.json"));
        assert_eq!(
            layout.history_path(),
            PathBuf::from("/home/user/.nova/chat_history.json")
        );
        assert_eq!(layout.journal_path(), PathBuf::from("/home/user/.nova/journal.json"));
        assert_eq!(layout.config_path(), PathBuf::from("/home/user/.nova/config.toml"));
    }

    #[test]
    fn test_resolve_data_dir_prefers_explicit() {
        let explicit = PathBuf::from("/srv/nova");
        assert_eq!(resolve_data_dir(Some(&explicit)), explicit);
    }

    #[test]
    fn test_resolve_data_dir_from_env() {
        // SAFETY: This test is single-threaded and restores the env var immediately.
        unsafe {
            std::env::set_var("NOVA_DATA_DIR", "/tmp/test-nova");
        }
        let dir = resolve_data_dir(None);
        assert_eq!(dir, PathBuf::from("/tmp/test-nova"));
        unsafe {
            std::env::remove_var("NOVA_DATA_DIR");
        }
    }
}
