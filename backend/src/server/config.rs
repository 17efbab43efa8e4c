//! HTTP server configuration object.

use std::net::SocketAddr;
use std::path::PathBuf;

use actix_web::cookie::{Key, SameSite};
use scholar::inbound::http::session_config::SessionSettings;
use scholar::settings::{AppSettings, SettingsError, StorageBackend};

/// Everything `create_server` needs, resolved ahead of time.
pub struct ServerConfig {
    pub(crate) key: Key,
    pub(crate) cookie_secure: bool,
    pub(crate) same_site: SameSite,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) storage: StorageBackend,
    pub(crate) data_dir: PathBuf,
}

impl ServerConfig {
    /// Cookie and listener settings with in-memory storage.
    #[must_use]
    pub const fn new(
        key: Key,
        cookie_secure: bool,
        same_site: SameSite,
        bind_addr: SocketAddr,
    ) -> Self {
        Self {
            key,
            cookie_secure,
            same_site,
            bind_addr,
            storage: StorageBackend::Memory,
            data_dir: PathBuf::new(),
        }
    }

    /// Combine application settings with resolved session settings.
    ///
    /// JSON file storage keeps its files under the configured data
    /// directory; memory storage ignores it.
    pub fn from_settings(
        settings: &AppSettings,
        session: SessionSettings,
    ) -> Result<Self, SettingsError> {
        let bind_addr = settings.bind_addr()?;
        let config = Self::new(
            session.key,
            session.cookie_secure,
            session.same_site,
            bind_addr,
        );
        Ok(match settings.storage()? {
            StorageBackend::JsonFile => config.with_json_files(settings.data_dir().to_path_buf()),
            StorageBackend::Memory => config,
        })
    }

    /// Keep collections as JSON files under `data_dir`.
    #[must_use]
    pub fn with_json_files(mut self, data_dir: PathBuf) -> Self {
        self.storage = StorageBackend::JsonFile;
        self.data_dir = data_dir;
        self
    }

    /// Listener address.
    #[must_use]
    pub const fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
