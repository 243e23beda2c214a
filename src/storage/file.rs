use crate::storage::traits::KeyValueStorage;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// One JSON file per key inside a data directory
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Open (and create if needed) the data directory
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        tokio::fs::create_dir_all(&dir)
            .await
            .with_context(|| format!("Failed to create data directory {}", dir.display()))?;

        debug!("Opened file storage at {}", dir.display());
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let safe: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '_' || c == '-' { c } else { '_' })
            .collect();
        self.dir.join(format!("{}.json", safe))
    }
}

#[async_trait]
impl KeyValueStorage for FileStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        match tokio::fs::read_to_string(&path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("Failed to read {}", path.display())),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");

        // readers never see a half-written file
        tokio::fs::write(&tmp, value)
            .await
            .with_context(|| format!("Failed to write {}", tmp.display()))?;
        tokio::fs::rename(&tmp, &path)
            .await
            .with_context(|| format!("Failed to replace {}", path.display()))?;

        debug!("Wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let path = self.path_for(key);
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("Failed to remove {}", path.display())),
        }
    }

    fn backend_name(&self) -> &'static str {
        "file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "gethome-{}-{}-{}",
            name,
            std::process::id(),
            rand::random::<u32>()
        ))
    }

    #[tokio::test]
    async fn missing_key_reads_as_none() {
        let dir = scratch_dir("missing");
        let storage = FileStorage::open(&dir).await.unwrap();

        assert!(storage.get("gethome_user").await.unwrap().is_none());
        storage.remove("gethome_user").await.unwrap();

        tokio::fs::remove_dir_all(dir).await.unwrap();
    }

    #[tokio::test]
    async fn values_survive_reopen() {
        let dir = scratch_dir("reopen");
        let storage = FileStorage::open(&dir).await.unwrap();
        storage.set("gethome_auth", "true").await.unwrap();
        storage.set("gethome_auth", "false").await.unwrap();
        drop(storage);

        let reopened = FileStorage::open(&dir).await.unwrap();
        assert_eq!(reopened.get("gethome_auth").await.unwrap().as_deref(), Some("false"));
        assert!(!dir.join("gethome_auth.json.tmp").exists());

        tokio::fs::remove_dir_all(dir).await.unwrap();
    }

    #[test]
    fn keys_cannot_escape_the_directory() {
        let storage = FileStorage { dir: PathBuf::from("/data") };
        assert_eq!(storage.path_for("../etc/passwd"), PathBuf::from("/data/___etc_passwd.json"));
    }
}
