use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::api::client::DEFAULT_API_BASE;

/// Runtime settings, loaded from tuning.ron.
#[derive(Debug, Clone, Resource, Serialize, Deserialize)]
pub struct Tuning {
    pub window_width: u32,
    pub window_height: u32,
    /// Base address of the promotions backend.
    pub api_base: String,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            window_width: 960,
            window_height: 720,
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}

impl Tuning {
    /// Get the data directory for tuning files.
    pub fn data_dir() -> PathBuf {
        let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        base.join("promo_board")
    }

    /// Path to the tuning file.
    pub fn file_path() -> PathBuf {
        Self::data_dir().join("tuning.ron")
    }

    /// Load from file, or create default if not found.
    pub fn load_or_default() -> Self {
        let path = Self::file_path();
        if path.exists() {
            match std::fs::read_to_string(&path) {
                Ok(contents) => match ron::from_str(&contents) {
                    Ok(tuning) => return tuning,
                    Err(e) => {
                        warn!("Failed to parse tuning.ron: {e}, using defaults");
                    }
                },
                Err(e) => {
                    warn!("Failed to read tuning.ron: {e}, using defaults");
                }
            }
        }
        let tuning = Self::default();
        tuning.save();
        tuning
    }

    /// Save current tuning to file.
    pub fn save(&self) {
        let path = Self::file_path();
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let pretty = ron::ser::PrettyConfig::default();
        match ron::ser::to_string_pretty(self, pretty) {
            Ok(s) => {
                if let Err(e) = std::fs::write(&path, s) {
                    warn!("Failed to write tuning.ron: {e}");
                }
            }
            Err(e) => {
                warn!("Failed to serialize tuning: {e}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_backend() {
        let tuning = Tuning::default();
        assert_eq!(tuning.api_base, "http://localhost:5000");
        assert!(tuning.window_width > 0);
        assert!(tuning.window_height > 0);
    }

    #[test]
    fn round_trips_through_ron() {
        let tuning = Tuning {
            window_width: 1280,
            window_height: 800,
            api_base: "http://promo.internal:8080".into(),
        };
        let text = ron::ser::to_string_pretty(&tuning, ron::ser::PrettyConfig::default())
            .expect("serialize");
        let back: Tuning = ron::from_str(&text).expect("parse");
        assert_eq!(back.window_width, 1280);
        assert_eq!(back.window_height, 800);
        assert_eq!(back.api_base, "http://promo.internal:8080");
    }
}
