//! Grid-wide settings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default column count, matching the client grid library.
pub const DEFAULT_COLUMNS: u32 = 12;

/// Default row height in pixels.
pub const DEFAULT_ROW_HEIGHT: u32 = 30;

/// Direction in which the client compacts items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompactType {
    #[default]
    Vertical,
    Horizontal,
    None,
}

impl CompactType {
    /// Wire representation; `None` travels as JSON `null`.
    pub fn as_wire(&self) -> Option<&'static str> {
        match self {
            Self::Vertical => Some("vertical"),
            Self::Horizontal => Some("horizontal"),
            Self::None => None,
        }
    }

    /// Case-insensitive parse. Returns `None` for unrecognised input so
    /// callers can choose their own fallback.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vertical" => Some(Self::Vertical),
            "horizontal" => Some(Self::Horizontal),
            "none" | "null" | "" => Some(Self::None),
            _ => None,
        }
    }
}

impl fmt::Display for CompactType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire().unwrap_or("none"))
    }
}

/// A grid setting outside its allowed range.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid setting {name}: {value}")]
pub struct SettingsError {
    pub name: &'static str,
    pub value: u32,
}

/// Column count, row height and compaction mode of a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridSettings {
    pub columns: u32,
    pub row_height: u32,
    pub compact: bool,
    pub compact_type: CompactType,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            row_height: DEFAULT_ROW_HEIGHT,
            compact: true,
            compact_type: CompactType::Vertical,
        }
    }
}

impl GridSettings {
    /// Settings with custom dimensions and default compaction.
    pub fn new(columns: u32, row_height: u32) -> Self {
        Self {
            columns,
            row_height,
            ..Self::default()
        }
    }

    /// Rejects zero columns or zero row height.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.columns == 0 {
            return Err(SettingsError {
                name: "columns",
                value: self.columns,
            });
        }
        if self.row_height == 0 {
            return Err(SettingsError {
                name: "rowHeight",
                value: self.row_height,
            });
        }
        Ok(())
    }
}
