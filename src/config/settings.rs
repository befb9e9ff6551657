use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::input::KeyCode;

/// One key-to-pad association, the rows the kit is assembled from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PadBinding {
    /// Physical key code ("KeyA", "Slash", ...).
    pub key: KeyCode,
    /// Caption painted on the pad.
    pub label: String,
    /// Sample file the key re-triggers.
    pub sample: PathBuf,
}

/// Startup ping settings. Nothing is ever sent when disabled or when no
/// endpoint is configured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InsightsConfig {
    pub enabled: bool,
    pub endpoint: String,
}

impl Default for InsightsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: String::new(),
        }
    }
}

/// Kit configuration (drumkit.json).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KitConfig {
    pub window_width: u32,
    pub window_height: u32,
    pub insights: InsightsConfig,
    pub pads: Vec<PadBinding>,
}

impl Default for KitConfig {
    fn default() -> Self {
        Self {
            window_width: 1080,
            window_height: 400,
            insights: InsightsConfig::default(),
            pads: default_pads(),
        }
    }
}

/// The classic nine-pad kit on the home row, KeyA through KeyL.
fn default_pads() -> Vec<PadBinding> {
    const KIT: [(&str, &str, &str); 9] = [
        ("KeyA", "clap", "clap.wav"),
        ("KeyS", "hihat", "hihat.wav"),
        ("KeyD", "kick", "kick.wav"),
        ("KeyF", "openhat", "openhat.wav"),
        ("KeyG", "boom", "boom.wav"),
        ("KeyH", "ride", "ride.wav"),
        ("KeyJ", "snare", "snare.wav"),
        ("KeyK", "tom", "tom.wav"),
        ("KeyL", "tink", "tink.wav"),
    ];
    KIT.iter()
        .map(|(key, label, file)| PadBinding {
            key: KeyCode::new(*key),
            label: (*label).to_string(),
            sample: Path::new("assets/sounds").join(file),
        })
        .collect()
}

impl KitConfig {
    /// Read configuration from a JSON file.
    pub fn read(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let mut config: KitConfig = serde_json::from_str(&data)?;
        config.validate();
        Ok(config)
    }

    /// Write configuration to a JSON file, pretty-printed for hand editing.
    pub fn write(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn validate(&mut self) {
        // Window dimensions clamp
        self.window_width = self.window_width.clamp(320, 7680);
        self.window_height = self.window_height.clamp(200, 4320);

        // Remove rows that could never fire
        self.pads
            .retain(|p| !p.key.as_str().is_empty() && !p.sample.as_os_str().is_empty());
    }
}
