use crate::error::AppError;
use crate::storage::CredentialStore;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tokio::sync::RwLock;
use tracing::debug;

/// Permissions of the token file: readable and writable by the owner only
#[cfg(unix)]
const TOKEN_FILE_MODE: u32 = 0o600;

/// Credential store persisted as a JSON object in a single file
///
/// The file is read on first access and rewritten after every mutation. A
/// missing file is an empty store; the file and its parent directory are
/// created on the first write.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    cache: RwLock<Option<BTreeMap<String, String>>>,
}

impl FileStore {
    /// Creates a store backed by `path`. Nothing is read until first use.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: RwLock::new(None),
        }
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<BTreeMap<String, String>, AppError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) if bytes.is_empty() => Ok(BTreeMap::new()),
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Credential file {} not found, starting empty", self.path.display());
                Ok(BTreeMap::new())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Sibling file the entries are written to before being renamed into place
    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    async fn persist(&self, entries: &BTreeMap<String, String>) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }
        let bytes = serde_json::to_vec_pretty(entries)?;
        let tmp = self.tmp_path();

        let mut options = tokio::fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        options.mode(TOKEN_FILE_MODE);

        let mut file = options.open(&tmp).await?;
        // The mode only applies on creation; a leftover temp file keeps its own
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            file.set_permissions(std::fs::Permissions::from_mode(TOKEN_FILE_MODE))
                .await?;
        }
        file.write_all(&bytes).await?;
        file.sync_all().await?;
        drop(file);

        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }

    /// Applies `f` to a copy of the entries, loading them first if needed
    ///
    /// The cache is only replaced once the copy has been written to disk, so a
    /// failed write leaves memory and file in agreement.
    async fn update<F>(&self, f: F) -> Result<(), AppError>
    where
        F: FnOnce(&mut BTreeMap<String, String>) -> bool,
    {
        let mut cache = self.cache.write().await;
        let mut entries = match cache.as_ref() {
            Some(entries) => entries.clone(),
            None => self.load().await?,
        };
        if f(&mut entries) {
            self.persist(&entries).await?;
        }
        *cache = Some(entries);
        Ok(())
    }
}

#[async_trait]
impl CredentialStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        {
            let cache = self.cache.read().await;
            if let Some(entries) = cache.as_ref() {
                return Ok(entries.get(key).cloned());
            }
        }

        let mut cache = self.cache.write().await;
        if cache.is_none() {
            *cache = Some(self.load().await?);
        }
        Ok(cache.as_ref().and_then(|entries| entries.get(key).cloned()))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.update(|entries| {
            entries.insert(key.to_string(), value.to_string());
            true
        })
        .await
    }

    async fn remove(&self, key: &str) -> Result<(), AppError> {
        self.update(|entries| entries.remove(key).is_some()).await
    }
}
