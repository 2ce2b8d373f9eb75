use serde::{Deserialize, Serialize};

use crate::api::scene::SceneConfig;

/// Host-supplied overrides for a scene's configuration, parsed from the
/// JSON string passed at init. Every field is optional; missing fields
/// keep the scene's own defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerOptions {
    pub seed: Option<u64>,
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub max_commands: Option<usize>,
    pub max_events: Option<usize>,
}

impl RunnerOptions {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Lay the present fields over a scene-provided config.
    pub fn apply(&self, config: &mut SceneConfig) {
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(width) = self.width {
            config.surface_width = width;
        }
        if let Some(height) = self.height {
            config.surface_height = height;
        }
        if let Some(max_commands) = self.max_commands {
            config.max_commands = max_commands;
        }
        if let Some(max_events) = self.max_events {
            config.max_events = max_events;
        }
    }
}
