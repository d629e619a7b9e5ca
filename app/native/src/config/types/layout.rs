//! Layout configuration types.
//!
//! Configuration for the target tile shape and the default container size
//! used when the CLI is not given explicit dimensions.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::grid::DEFAULT_ASPECT_RATIO;

/// Default container width in pixels.
pub const DEFAULT_CONTAINER_WIDTH: u32 = 1280;

/// Default container height in pixels.
pub const DEFAULT_CONTAINER_HEIGHT: u32 = 720;

/// Tile layout configuration.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    /// Target tile aspect ratio expressed as height ÷ width.
    ///
    /// Every tile shares this shape. Use 0.75 for 4:3 feeds or 0.5625 for 16:9.
    /// Default: 0.75
    pub aspect_ratio: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self { Self { aspect_ratio: DEFAULT_ASPECT_RATIO } }
}

impl LayoutConfig {
    /// Returns the configured aspect ratio, or the default when it is not a
    /// positive finite number.
    #[must_use]
    pub fn resolved_aspect_ratio(&self) -> f64 {
        if self.aspect_ratio.is_finite() && self.aspect_ratio > 0.0 {
            self.aspect_ratio
        } else {
            tracing::warn!(
                aspect_ratio = self.aspect_ratio,
                "invalid aspect ratio in configuration, using default"
            );
            DEFAULT_ASPECT_RATIO
        }
    }
}

/// Default container dimensions.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ContainerConfig {
    /// Container width in pixels.
    /// Default: 1280
    pub width: u32,

    /// Container height in pixels.
    /// Default: 720
    pub height: u32,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_CONTAINER_WIDTH,
            height: DEFAULT_CONTAINER_HEIGHT,
        }
    }
}
