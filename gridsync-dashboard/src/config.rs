//! Dashboard configuration.

use crate::error::{DashboardError, DashboardResult};
use gridsync_model::PlacementConfig;
use gridsync_sync::SyncConfig;
use gridsync_types::{GridItem, GridSettings};
use serde::{Deserialize, Serialize};

/// Configuration for a [`DashboardGrid`](crate::DashboardGrid).
///
/// Every field has a default, so a partial JSON object such as
/// `{"settings": {"columns": 24}}` is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardConfig {
    /// Initial grid settings.
    pub settings: GridSettings,
    /// Bounds for automatic placement.
    pub placement: PlacementConfig,
    /// Width used by `add_item_default`.
    pub default_item_width: u32,
    /// Height used by `add_item_default`.
    pub default_item_height: u32,
    pub sync: SyncConfig,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            settings: GridSettings::default(),
            placement: PlacementConfig::default(),
            default_item_width: GridItem::DEFAULT_WIDTH,
            default_item_height: GridItem::DEFAULT_HEIGHT,
            sync: SyncConfig::default(),
        }
    }
}

impl DashboardConfig {
    /// Parses and validates a JSON configuration.
    pub fn from_json(json: &str) -> DashboardResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| DashboardError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> DashboardResult<()> {
        self.settings
            .validate()
            .map_err(|e| DashboardError::InvalidConfig(e.to_string()))?;
        if self.default_item_width == 0 || self.default_item_height == 0 {
            return Err(DashboardError::InvalidConfig(format!(
                "default item size must be at least 1x1, got {}x{}",
                self.default_item_width, self.default_item_height
            )));
        }
        Ok(())
    }
}
