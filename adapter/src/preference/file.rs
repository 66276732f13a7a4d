use std::{collections::BTreeMap, io::ErrorKind, path::PathBuf};

use async_trait::async_trait;
use kernel::repository::preference::PreferenceStore;
use shared::error::{AppError, AppResult};
use tokio::sync::Mutex;

type Preferences = BTreeMap<String, String>;

/// Preferences kept as one JSON object on disk.
///
/// A missing file is an empty store. A file that cannot be read or parsed is
/// treated the same way; a parse failure gets overwritten on the next write.
pub struct FilePreferenceStore {
    path: PathBuf,
    // 読み込みから書き込みまでを直列化する
    lock: Mutex<()>,
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    async fn load(&self) -> AppResult<Preferences> {
        let raw = match tokio::fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Preferences::new()),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "preference file cannot be read, treating it as empty"
                );
                return Ok(Preferences::new());
            }
        };
        match serde_json::from_slice(&raw) {
            Ok(prefs) => Ok(prefs),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "preference file cannot be parsed, treating it as empty"
                );
                Ok(Preferences::new())
            }
        }
    }

    async fn save(&self, prefs: &Preferences) -> AppResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(AppError::PreferenceStoreError)?;
        }
        let body = serde_json::to_vec_pretty(prefs)?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, body)
            .await
            .map_err(AppError::PreferenceStoreError)?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(AppError::PreferenceStoreError)
    }
}

#[async_trait]
impl PreferenceStore for FilePreferenceStore {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        let _guard = self.lock.lock().await;
        Ok(self.load().await?.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let _guard = self.lock.lock().await;
        let mut prefs = self.load().await?;
        prefs.insert(key.to_string(), value.to_string());
        self.save(&prefs).await
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        let _guard = self.lock.lock().await;
        let mut prefs = self.load().await?;
        if prefs.remove(key).is_some() {
            self.save(&prefs).await?;
        }
        Ok(())
    }
}
