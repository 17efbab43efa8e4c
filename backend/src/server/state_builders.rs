//! Builds handler state for the configured storage backend.

use std::sync::Arc;

use actix_web::web;
use tracing::info;

use scholar::domain::{Destination, Program, User};
use scholar::inbound::http::state::HttpState;
use scholar::outbound::persistence::{
    JsonFileCollectionRepository, KeyValueCollectionRepository, KeyValueStore,
};
use scholar::settings::StorageBackend;

use super::ServerConfig;

/// Handler state over JSON files or the in-process store.
pub fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let state = match config.storage {
        StorageBackend::JsonFile => {
            info!(data_dir = %config.data_dir.display(), "using JSON file storage");
            HttpState::from_repositories(
                Arc::new(JsonFileCollectionRepository::<Destination>::new(
                    config.data_dir.clone(),
                )),
                Arc::new(JsonFileCollectionRepository::<Program>::new(
                    config.data_dir.clone(),
                )),
                Arc::new(JsonFileCollectionRepository::<User>::new(
                    config.data_dir.clone(),
                )),
            )
        }
        StorageBackend::Memory => {
            info!("using in-memory storage; data is lost on restart");
            let store = Arc::new(KeyValueStore::new());
            HttpState::from_repositories(
                Arc::new(KeyValueCollectionRepository::<Destination>::new(
                    Arc::clone(&store),
                )),
                Arc::new(KeyValueCollectionRepository::<Program>::new(Arc::clone(
                    &store,
                ))),
                Arc::new(KeyValueCollectionRepository::<User>::new(store)),
            )
        }
    };
    web::Data::new(state)
}
