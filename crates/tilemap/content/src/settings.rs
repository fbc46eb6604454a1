//! Authored save settings.
use std::path::PathBuf;

/// Optional overrides for where and how snapshots are saved.
///
/// Every field is optional; unset fields keep the runtime defaults. Values
/// are kept as text here and validated by the runtime when applied.
///
/// ```toml
/// save_dir = "saves"
/// filename = "world.json"
/// format = "json"          # or "bincode"
/// bounds = "per-grid"      # or "x_min,y_min,x_max,y_max"
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SaveSettings {
    pub save_dir: Option<PathBuf>,
    pub filename: Option<String>,
    pub format: Option<String>,
    pub bounds: Option<String>,
}
