use std::path::PathBuf;

use anyhow::Context;
use async_trait::async_trait;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, warn};

use crate::auth::repo_types::StoredUser;

/// Key-value store holding at most one user record.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn save(&self, user: &StoredUser) -> anyhow::Result<()>;
    async fn load(&self) -> anyhow::Result<Option<StoredUser>>;
    async fn clear(&self) -> anyhow::Result<()>;
}

/// Persists the record as a JSON document at `path`.
pub struct FileProfileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileProfileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }
}

#[async_trait]
impl ProfileStore for FileProfileStore {
    async fn save(&self, user: &StoredUser) -> anyhow::Result<()> {
        let body = serde_json::to_vec_pretty(user).context("encode profile record")?;
        let _guard = self.write_lock.lock().await;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("create {}", parent.display()))?;
        }
        tokio::fs::write(&self.path, body)
            .await
            .with_context(|| format!("write {}", self.path.display()))?;
        debug!(path = %self.path.display(), user_id = %user.id, "profile record saved");
        Ok(())
    }

    async fn load(&self) -> anyhow::Result<Option<StoredUser>> {
        let raw = match tokio::fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).with_context(|| format!("read {}", self.path.display()));
            }
        };
        match serde_json::from_slice::<StoredUser>(&raw) {
            Ok(user) => Ok(Some(user)),
            Err(e) => {
                // A record we cannot decode is treated like no record at all.
                warn!(error = %e, path = %self.path.display(), "discarding unreadable profile record");
                Ok(None)
            }
        }
    }

    async fn clear(&self) -> anyhow::Result<()> {
        let _guard = self.write_lock.lock().await;
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("remove {}", self.path.display())),
        }
    }
}

#[derive(Default)]
pub struct MemoryProfileStore {
    record: RwLock<Option<StoredUser>>,
}

#[async_trait]
impl ProfileStore for MemoryProfileStore {
    async fn save(&self, user: &StoredUser) -> anyhow::Result<()> {
        *self.record.write().await = Some(user.clone());
        Ok(())
    }

    async fn load(&self) -> anyhow::Result<Option<StoredUser>> {
        Ok(self.record.read().await.clone())
    }

    async fn clear(&self) -> anyhow::Result<()> {
        *self.record.write().await = None;
        Ok(())
    }
}

#[cfg(test)]
mod storage_tests {
    use super::*;
    use crate::profile::{Objective, UserProfile};
    use time::OffsetDateTime;
    use uuid::Uuid;

    fn sample_user(email: &str) -> StoredUser {
        StoredUser {
            id: Uuid::new_v4(),
            name: "Ana Souza".into(),
            email: email.into(),
            password_hash: "$argon2id$fake".into(),
            profile: UserProfile::new(70.0, 1.75, Objective::WeightLoss),
            registered_at: OffsetDateTime::now_utc().replace_nanosecond(0).unwrap(),
        }
    }

    fn temp_path() -> PathBuf {
        std::env::temp_dir()
            .join(format!("fitfood-test-{}", Uuid::new_v4()))
            .join("fitfood_user.json")
    }

    #[tokio::test]
    async fn file_store_round_trip_and_clear() {
        let path = temp_path();
        let store = FileProfileStore::new(&path);
        assert!(store.load().await.unwrap().is_none());

        let user = sample_user("ana@example.com");
        store.save(&user).await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some(user));

        store.clear().await.unwrap();
        assert!(store.load().await.unwrap().is_none());
        // clearing an absent record is fine
        store.clear().await.unwrap();

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[tokio::test]
    async fn file_store_keeps_only_the_latest_record() {
        let path = temp_path();
        let store = FileProfileStore::new(&path);
        store.save(&sample_user("first@example.com")).await.unwrap();
        store.save(&sample_user("second@example.com")).await.unwrap();

        let loaded = store.load().await.unwrap().unwrap();
        assert_eq!(loaded.email, "second@example.com");

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[tokio::test]
    async fn file_store_treats_garbage_as_absent() {
        let path = temp_path();
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, b"{not json").unwrap();

        let store = FileProfileStore::new(&path);
        assert!(store.load().await.unwrap().is_none());

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[tokio::test]
    async fn memory_store_round_trip() {
        let store = MemoryProfileStore::default();
        assert!(store.load().await.unwrap().is_none());
        let user = sample_user("ana@example.com");
        store.save(&user).await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some(user));
        store.clear().await.unwrap();
        assert!(store.load().await.unwrap().is_none());
    }
}
