//! Spawn constraints
//!
//! Creation-time configuration for the body factory, persisted separately
//! from any runtime state in LocalStorage. The simulation never reads these
//! after spawn.

use serde::{Deserialize, Serialize};

/// Bounds used by the body factory when populating the viewport.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpawnConstraints {
    /// Number of bodies to create
    pub count: usize,
    /// Radius range (pixels)
    pub min_radius: f32,
    pub max_radius: f32,
    /// Horizontal velocity range (pixels per frame)
    pub min_velocity_x: f32,
    pub max_velocity_x: f32,
    /// Vertical velocity range (pixels per frame)
    pub min_velocity_y: f32,
    pub max_velocity_y: f32,
    /// Mass shared by every body
    pub mass: f32,
}

impl Default for SpawnConstraints {
    fn default() -> Self {
        Self {
            count: 60,
            min_radius: 5.0,
            max_radius: 30.0,
            min_velocity_x: 3.0,
            max_velocity_x: 5.0,
            min_velocity_y: 3.0,
            max_velocity_y: 5.0,
            mass: 1.0,
        }
    }
}

impl SpawnConstraints {
    /// LocalStorage key
    const STORAGE_KEY: &'static str = "bounce_field_constraints";

    /// Load constraints from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(constraints) = serde_json::from_str(&json) {
                    log::info!("Loaded spawn constraints from LocalStorage");
                    return constraints;
                }
            }
        }

        log::info!("Using default spawn constraints");
        Self::default()
    }

    /// Save constraints to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Spawn constraints saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
