use crate::catalog::Catalog;
use crate::config::AppConfig;
use crate::storage::{FileProfileStore, MemoryProfileStore, ProfileStore};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub catalog: Arc<Catalog>,
    pub profiles: Arc<dyn ProfileStore>,
}

impl AppState {
    pub fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);

        let profiles = match &config.profile_store_path {
            Some(path) => {
                info!(path = %path.display(), "using file profile store");
                Arc::new(FileProfileStore::new(path.clone())) as Arc<dyn ProfileStore>
            }
            None => {
                info!("PROFILE_STORE_PATH not set; profile record kept in memory");
                Arc::new(MemoryProfileStore::default()) as Arc<dyn ProfileStore>
            }
        };

        Ok(Self::from_parts(config, Arc::new(Catalog::builtin()), profiles))
    }

    pub fn from_parts(
        config: Arc<AppConfig>,
        catalog: Arc<Catalog>,
        profiles: Arc<dyn ProfileStore>,
    ) -> Self {
        Self {
            config,
            catalog,
            profiles,
        }
    }

    /// Built-in catalog, default config and an empty in-memory store.
    pub fn fake() -> Self {
        Self::from_parts(
            Arc::new(AppConfig::default()),
            Arc::new(Catalog::builtin()),
            Arc::new(MemoryProfileStore::default()),
        )
    }
}
