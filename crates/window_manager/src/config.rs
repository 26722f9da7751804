//! Window-manager tuning and the launcher manifest consumed by the desktop entry point.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{
    error::ConfigError,
    geometry::WindowOptions,
    model::{WindowId, DEFAULT_BASE_Z_INDEX},
};

pub const LAUNCHER_MANIFEST_SCHEMA_VERSION: u32 = 1;
pub const DEFAULT_SPAWN_DELAY_MS: u32 = 50;
pub const DEFAULT_SPAWN_DURATION_MS: u32 = 300;
pub const DEFAULT_SPAWN_SCALE: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowManagerConfig {
    /// Stack order given to the first registered window.
    pub base_z_index: u32,
    /// Delay before a spawning window starts moving toward its resting position.
    pub spawn_delay_ms: u32,
    pub spawn_duration_ms: u32,
    /// Scale a spawning window is rendered at before it settles.
    pub spawn_scale: f64,
}

impl Default for WindowManagerConfig {
    fn default() -> Self {
        Self {
            base_z_index: DEFAULT_BASE_Z_INDEX,
            spawn_delay_ms: DEFAULT_SPAWN_DELAY_MS,
            spawn_duration_ms: DEFAULT_SPAWN_DURATION_MS,
            spawn_scale: DEFAULT_SPAWN_SCALE,
        }
    }
}

impl WindowManagerConfig {
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when the spawn scale is outside `(0, 1]`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.spawn_scale > 0.0 && self.spawn_scale <= 1.0) {
            return Err(ConfigError::InvalidValue {
                field: "spawn_scale",
                reason: format!("expected a value in (0, 1], found {}", self.spawn_scale),
            });
        }
        Ok(())
    }
}

/// One desktop icon that opens a window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LauncherEntry {
    pub id: String,
    pub label: String,
    pub icon: String,
    #[serde(default)]
    pub window_title: Option<String>,
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub x: Option<f64>,
    #[serde(default)]
    pub y: Option<f64>,
    #[serde(default)]
    pub z_index: Option<u32>,
    #[serde(default)]
    pub body: String,
}

impl LauncherEntry {
    pub fn window_id(&self) -> WindowId {
        WindowId::new(self.id.clone())
    }

    pub fn title(&self) -> &str {
        self.window_title.as_deref().unwrap_or(&self.label)
    }

    pub fn window_options(&self) -> WindowOptions {
        WindowOptions {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
            z_index: self.z_index,
            spawn_point: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LauncherManifest {
    pub schema_version: u32,
    #[serde(default)]
    pub window_manager: WindowManagerConfig,
    #[serde(default)]
    pub launchers: Vec<LauncherEntry>,
}

impl LauncherManifest {
    /// Decodes and validates a manifest from its embedded JSON form.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the payload is malformed or fails [`Self::validate`].
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let manifest: Self =
            serde_json::from_str(raw).map_err(|err| ConfigError::Parse(err.to_string()))?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Checks schema version, launcher id uniqueness, requested geometry, and tuning values.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.schema_version != LAUNCHER_MANIFEST_SCHEMA_VERSION {
            return Err(ConfigError::SchemaVersion {
                expected: LAUNCHER_MANIFEST_SCHEMA_VERSION,
                found: self.schema_version,
            });
        }
        self.window_manager.validate()?;

        let mut seen = HashSet::new();
        for entry in &self.launchers {
            if !seen.insert(entry.id.as_str()) {
                return Err(ConfigError::DuplicateLauncher(entry.id.clone()));
            }
            entry
                .window_options()
                .validate()
                .map_err(|source| ConfigError::InvalidGeometry {
                    launcher: entry.id.clone(),
                    source,
                })?;
        }
        Ok(())
    }
}
