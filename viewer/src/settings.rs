use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{error::Result, geometry::DEFAULT_CELL_SIZE, palette::Theme};

const MIN_CELL_SIZE: u32 = 4;
const MAX_CELL_SIZE: u32 = 64;
const MIN_TICK_MS: u64 = 1;
const MAX_TICK_MS: u64 = 10_000;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewerSettings {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default = "default_cell_size")]
    pub cell_size: u32,
    /// Minimum time between model advances.
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    #[serde(default = "default_vsync")]
    pub vsync: bool,
    #[serde(default)]
    pub replay_path: Option<PathBuf>,
    #[serde(default)]
    pub theme: Option<Theme>,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            version: default_version(),
            cell_size: default_cell_size(),
            tick_ms: default_tick_ms(),
            vsync: default_vsync(),
            replay_path: None,
            theme: None,
        }
    }
}

impl ViewerSettings {
    pub fn sanitized(mut self) -> Self {
        self.version = default_version();
        self.cell_size = self.cell_size.clamp(MIN_CELL_SIZE, MAX_CELL_SIZE);
        self.tick_ms = self.tick_ms.clamp(MIN_TICK_MS, MAX_TICK_MS);
        self
    }

    /// Applies `BLOCKVIEW_TICK_MS` / `BLOCKVIEW_CELL_SIZE` when they parse.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(env_parse("BLOCKVIEW_TICK_MS"), env_parse("BLOCKVIEW_CELL_SIZE"))
    }

    pub fn with_overrides(mut self, tick_ms: Option<u64>, cell_size: Option<u32>) -> Self {
        if let Some(tick_ms) = tick_ms {
            self.tick_ms = tick_ms;
        }
        if let Some(cell_size) = cell_size {
            self.cell_size = cell_size;
        }
        self.sanitized()
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn theme(&self) -> Theme {
        self.theme.unwrap_or_default()
    }
}

fn default_version() -> u32 {
    1
}

fn default_cell_size() -> u32 {
    DEFAULT_CELL_SIZE
}

fn default_tick_ms() -> u64 {
    60
}

fn default_vsync() -> bool {
    true
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_env() -> Self {
        if let Some(explicit) = std::env::var_os("BLOCKVIEW_SETTINGS_PATH") {
            return Self {
                path: PathBuf::from(explicit),
            };
        }

        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| {
                std::env::var_os("HOME").map(|home| {
                    let mut p = PathBuf::from(home);
                    p.push(".config");
                    p
                })
            })
            .unwrap_or_else(|| PathBuf::from("."));

        let mut path = base;
        path.push("blockview");
        path.push("settings.json");
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    pub fn load(&self) -> ViewerSettings {
        let Ok(bytes) = fs::read(&self.path) else {
            tracing::debug!(path = %self.path.display(), "no settings file; using defaults");
            return ViewerSettings::default();
        };
        match serde_json::from_slice::<ViewerSettings>(&bytes) {
            Ok(settings) => settings.sanitized(),
            Err(err) => {
                tracing::warn!(path = %self.path.display(), %err, "ignoring malformed settings");
                ViewerSettings::default()
            }
        }
    }

    pub fn save(&self, settings: &ViewerSettings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let text = serde_json::to_string_pretty(settings)?;
        fs::write(&self.path, text)?;
        Ok(())
    }
}
