use anyhow::Result;
use async_trait::async_trait;

/// Durable string key-value storage backing the listing store
/// Any local backend (files, an embedded db, browser storage) can sit behind this
#[async_trait]
pub trait KeyValueStorage: Send + Sync {
    /// Read the raw value stored under `key`, `None` if never written
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the value stored under `key`
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Forget `key`; missing keys are not an error
    async fn remove(&self, key: &str) -> Result<()>;

    /// Name of the backend, for logs
    fn backend_name(&self) -> &'static str;
}
