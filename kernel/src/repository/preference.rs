use async_trait::async_trait;
use shared::error::AppResult;

/// Key under which the simulated session keeps the selected role.
pub const ROLE_PREFERENCE_KEY: &str = "userRole";

/// String key/value storage standing in for the browser's local storage.
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    async fn get(&self, key: &str) -> AppResult<Option<String>>;
    async fn set(&self, key: &str, value: &str) -> AppResult<()>;
    async fn remove(&self, key: &str) -> AppResult<()>;
}
