//! Timing tunables for the scene schedule
//!
//! Loaded from an optional JSON file so the choreography delays can be
//! adjusted without a rebuild. Missing or malformed files fall back to the
//! fixed defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{FIRECRACKER_DELAY, MISSILE_DELAY, SECOND_MISSILE_DELAY};

/// Schedule tunables (all in seconds)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tunables {
    /// Countdown length before the first missile launches
    pub missile_delay: f32,
    /// Cooldown between the first hit and the second launch
    pub second_missile_delay: f32,
    /// Pause between destruction and the firecracker celebration
    pub firecracker_delay: f32,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            missile_delay: MISSILE_DELAY,
            second_missile_delay: SECOND_MISSILE_DELAY,
            firecracker_delay: FIRECRACKER_DELAY,
        }
    }
}

impl Tunables {
    /// Load tunables from a JSON file, falling back to defaults if the file
    /// is absent or unreadable.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(tunables) => {
                    log::info!("Loaded tunables from {}", path.display());
                    tunables
                }
                Err(e) => {
                    log::warn!("Ignoring malformed tunables file {}: {e}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default tunables");
                Self::default()
            }
        }
    }

    /// Write the current tunables to a JSON file.
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(path, json)
    }
}
