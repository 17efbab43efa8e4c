//! Settings resolution through to the storage backend the server builds.

use std::ffi::OsString;

use actix_web::cookie::{Key, SameSite};
use env_lock::lock_env;
use ortho_config::OrthoConfig;
use rstest::{fixture, rstest};
use scholar::domain::{DestinationFields, DestinationFilter, ProgramFilter};
use scholar::inbound::http::session_config::SessionSettings;
use scholar::settings::{AppSettings, SettingsError};
use tempfile::TempDir;

#[allow(dead_code)]
#[path = "../src/server/config.rs"]
mod server_config;
pub use server_config::ServerConfig;

#[path = "../src/server/state_builders.rs"]
mod state_builders;

#[fixture]
fn data_dir() -> TempDir {
    TempDir::new().expect("temp data dir")
}

fn session() -> SessionSettings {
    SessionSettings {
        key: Key::generate(),
        cookie_secure: false,
        same_site: SameSite::Lax,
    }
}

fn settings_with(storage: Option<&str>, data_dir: &TempDir) -> AppSettings {
    let _guard = lock_env([
        ("SCHOLAR_BIND_ADDR", Some("127.0.0.1:0".to_owned())),
        (
            "SCHOLAR_DATA_DIR",
            Some(data_dir.path().display().to_string()),
        ),
        ("SCHOLAR_STORAGE", storage.map(str::to_owned)),
    ]);
    AppSettings::load_from_iter([OsString::from("scholar")]).expect("settings should load")
}

fn new_destination() -> DestinationFields {
    DestinationFields {
        country: Some("Japan".to_owned()),
        study_level: Some("Postgraduate".to_owned()),
        ..DestinationFields::default()
    }
}

#[rstest]
#[actix_web::test]
async fn memory_storage_serves_seeds_and_writes_no_files(data_dir: TempDir) {
    let settings = settings_with(Some("memory"), &data_dir);
    let config = ServerConfig::from_settings(&settings, session()).expect("valid settings");
    let state = state_builders::build_http_state(&config);

    let programs = state
        .programs
        .list(&ProgramFilter::default())
        .await
        .expect("programs listed");
    assert_eq!(programs.len(), 8);

    let created = state
        .destinations_command
        .create(new_destination())
        .await
        .expect("destination created");
    let listed = state
        .destinations
        .list(&DestinationFilter::default())
        .await
        .expect("destinations listed");
    assert_eq!(listed, vec![created]);

    let entries = std::fs::read_dir(data_dir.path())
        .expect("data dir readable")
        .count();
    assert_eq!(entries, 0);
}

#[rstest]
#[actix_web::test]
async fn default_storage_writes_json_files(data_dir: TempDir) {
    let settings = settings_with(None, &data_dir);
    let config = ServerConfig::from_settings(&settings, session()).expect("valid settings");
    let state = state_builders::build_http_state(&config);

    state
        .destinations_command
        .create(new_destination())
        .await
        .expect("destination created");

    let raw = std::fs::read_to_string(data_dir.path().join("destinations.json"))
        .expect("destinations file written");
    let stored: serde_json::Value = serde_json::from_str(&raw).expect("stored JSON");
    assert_eq!(stored.as_array().map(Vec::len), Some(1));
}

#[rstest]
fn unknown_storage_is_rejected(data_dir: TempDir) {
    let settings = settings_with(Some("postgres"), &data_dir);
    let outcome = ServerConfig::from_settings(&settings, session());
    assert!(matches!(
        outcome,
        Err(SettingsError::UnknownStorage { value }) if value == "postgres"
    ));
}
