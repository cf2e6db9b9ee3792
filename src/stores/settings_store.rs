/// App settings persisted in LocalStorage
use dioxus::prelude::*;
use gloo_storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::services::{MockProfileReader, MockResponse};

/// User-tunable configuration for the profile dApp
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppSettings {
    /// Restore the last connected wallet on startup
    pub remember_wallet: bool,
    /// Simulated round trip of the placeholder profile reader
    pub mock_latency_ms: u64,
    /// What the placeholder profile reader answers with
    pub mock_response: MockResponse,
    pub version: u32, // Settings schema version
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            remember_wallet: true,
            mock_latency_ms: 400,
            mock_response: MockResponse::Demo,
            version: 1,
        }
    }
}

impl AppSettings {
    /// Build the profile reader these settings describe
    pub fn profile_reader(&self) -> MockProfileReader {
        MockProfileReader::with_response(self.mock_response.clone())
            .latency(Duration::from_millis(self.mock_latency_ms))
    }
}

const STORAGE_KEY: &str = "gamer_profile_settings";

/// Global settings state
pub static SETTINGS: GlobalSignal<AppSettings> = Signal::global(AppSettings::default);

/// Load settings from localStorage, falling back to defaults
pub fn init_settings() {
    match LocalStorage::get::<AppSettings>(STORAGE_KEY) {
        Ok(settings) => {
            log::info!("Loaded settings from storage (v{})", settings.version);
            *SETTINGS.write() = settings;
        }
        Err(gloo_storage::errors::StorageError::KeyNotFound(_)) => {
            log::info!("No stored settings, using defaults");
        }
        Err(e) => {
            log::warn!("Ignoring unreadable settings: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let settings: AppSettings = serde_json::from_str(r#"{"mock_latency_ms": 0}"#).unwrap();
        assert_eq!(settings.mock_latency_ms, 0);
        assert!(settings.remember_wallet);
        assert_eq!(settings.mock_response, MockResponse::Demo);
    }

    #[test]
    fn test_mock_response_serde() {
        let settings: AppSettings = serde_json::from_str(
            r#"{"mock_response": {"kind": "fail", "value": "rpc down"}}"#,
        )
        .unwrap();
        assert_eq!(settings.mock_response, MockResponse::Fail("rpc down".to_string()));

        let settings: AppSettings =
            serde_json::from_str(r#"{"mock_response": {"kind": "not_found"}}"#).unwrap();
        assert_eq!(settings.mock_response, MockResponse::NotFound);
    }

    #[test]
    fn test_profile_reader_from_settings() {
        let settings = AppSettings {
            mock_latency_ms: 25,
            mock_response: MockResponse::NotFound,
            ..AppSettings::default()
        };
        let reader = settings.profile_reader();
        assert_eq!(reader.latency, Duration::from_millis(25));
        assert_eq!(reader.response, MockResponse::NotFound);
    }
}
