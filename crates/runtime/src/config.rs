//! Save configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use tilemap_content::SaveSettings;
use tilemap_core::ScanBounds;

use crate::error::{Result, RuntimeError};

/// On-disk encoding of a snapshot document.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SnapshotFormat {
    /// Human-readable JSON array of grid snapshots.
    #[default]
    Json,
    /// Compact bincode encoding of the same document.
    Bincode,
}

impl SnapshotFormat {
    pub const fn default_filename(self) -> &'static str {
        match self {
            SnapshotFormat::Json => SaveConfig::DEFAULT_FILENAME,
            SnapshotFormat::Bincode => SaveConfig::DEFAULT_BINARY_FILENAME,
        }
    }

    /// Guesses the format from a file extension, defaulting to JSON.
    pub fn from_path(path: &std::path::Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("bin") => SnapshotFormat::Bincode,
            _ => SnapshotFormat::Json,
        }
    }
}

/// Where and how snapshots are saved.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SaveConfig {
    /// Directory holding the snapshot file. `None` uses [`default_save_dir`].
    pub save_dir: Option<PathBuf>,
    /// Snapshot file name. `None` uses the format's default name.
    pub filename: Option<String>,
    pub format: SnapshotFormat,
    pub bounds: ScanBounds,
}

impl SaveConfig {
    pub const DEFAULT_FILENAME: &'static str = "tilemapData.json";
    pub const DEFAULT_BINARY_FILENAME: &'static str = "tilemapData.bin";

    pub fn new() -> Self {
        Self::default()
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `TILEMAP_SAVE_DIR` - Directory for the snapshot file (default: platform-specific)
    /// - `TILEMAP_SAVE_FILE` - Snapshot file name (default: `tilemapData.json`)
    /// - `TILEMAP_SAVE_FORMAT` - `json` or `bincode` (default: json)
    /// - `TILEMAP_SCAN_BOUNDS` - `per-grid` or `x_min,y_min,x_max,y_max` (default: per-grid)
    ///
    /// Unparseable values are ignored with a warning.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.save_dir = env::var("TILEMAP_SAVE_DIR").ok().map(PathBuf::from);
        config.filename = env::var("TILEMAP_SAVE_FILE").ok();

        if let Some(format) = read_env::<SnapshotFormat>("TILEMAP_SAVE_FORMAT") {
            config.format = format;
        }

        if let Some(bounds) = read_env::<ScanBounds>("TILEMAP_SCAN_BOUNDS") {
            config.bounds = bounds;
        }

        config
    }

    /// Applies authored settings on top of this configuration.
    ///
    /// Unlike [`SaveConfig::from_env`], invalid authored values are errors.
    pub fn with_settings(mut self, settings: &SaveSettings) -> Result<Self> {
        if let Some(dir) = &settings.save_dir {
            self.save_dir = Some(dir.clone());
        }

        if let Some(filename) = &settings.filename {
            if filename.trim().is_empty() {
                return Err(RuntimeError::InvalidConfig(
                    "filename must not be empty".to_string(),
                ));
            }
            self.filename = Some(filename.clone());
        }

        if let Some(format) = &settings.format {
            self.format = format.parse().map_err(|_| {
                RuntimeError::InvalidConfig(format!(
                    "unknown snapshot format '{}' (expected 'json' or 'bincode')",
                    format
                ))
            })?;
        }

        if let Some(bounds) = &settings.bounds {
            self.bounds = bounds.parse()?;
        }

        Ok(self)
    }

    pub fn save_dir(&self) -> PathBuf {
        self.save_dir.clone().unwrap_or_else(default_save_dir)
    }

    pub fn filename(&self) -> &str {
        self.filename
            .as_deref()
            .unwrap_or_else(|| self.format.default_filename())
    }

    /// Full path of the snapshot file.
    pub fn snapshot_path(&self) -> PathBuf {
        self.save_dir().join(self.filename())
    }
}

/// Get the platform-specific data directory for tilemap snapshots
///
/// Follows platform conventions:
/// - macOS: `~/Library/Application Support/tilemap`
/// - Linux: `~/.local/share/tilemap` (or `$XDG_DATA_HOME/tilemap`)
/// - Windows: `%APPDATA%\tilemap`
/// - Fallback: `./save_data`
pub fn default_save_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "tilemap")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./save_data"))
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    let raw = env::var(key).ok()?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("Ignoring invalid {}={:?}", key, raw);
            None
        }
    }
}
