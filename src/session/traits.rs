use anyhow::Result;
use async_trait::async_trait;

/// A durable key-value slot the session survives reloads in
#[async_trait]
pub trait SessionStorage: Send + Sync {
    /// Read a slot, `None` when it has never been written or was removed
    async fn get(&self, key: &str) -> Result<Option<String>>;

    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removing a missing slot is not an error
    async fn remove(&self, key: &str) -> Result<()>;

    fn backend_name(&self) -> &'static str;
}
