//! Shared types for CLI commands.

use std::str::FromStr;

use clap::Args;

use crate::config::TileGridConfig;

/// A tile aspect ratio given on the command line.
///
/// Accepts either a decimal height ÷ width ratio (`0.75`) or a
/// `width:height` shape (`4:3`, `16:9`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AspectRatio(f64);

impl AspectRatio {
    /// Returns the ratio as height ÷ width.
    #[must_use]
    pub const fn get(self) -> f64 { self.0 }
}

impl FromStr for AspectRatio {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let ratio = if let Some((width, height)) = s.split_once(':') {
            let width: f64 = width.trim().parse().map_err(|_| format!("invalid width in '{s}'"))?;
            let height: f64 =
                height.trim().parse().map_err(|_| format!("invalid height in '{s}'"))?;
            height / width
        } else {
            s.parse().map_err(|_| format!("invalid aspect ratio '{s}'"))?
        };

        if ratio.is_finite() && ratio > 0.0 {
            Ok(Self(ratio))
        } else {
            Err(format!("aspect ratio '{s}' must be positive"))
        }
    }
}

/// Container and tile shape arguments shared by layout commands.
///
/// Unset values fall back to the configuration file.
#[derive(Args, Debug, Clone, Default)]
pub struct ContainerArgs {
    /// Container width in pixels.
    #[arg(long, short = 'W', value_name = "PIXELS")]
    pub width: Option<u32>,

    /// Container height in pixels.
    #[arg(long, short = 'H', value_name = "PIXELS")]
    pub height: Option<u32>,

    /// Target tile aspect ratio, as height/width (0.75) or width:height (4:3).
    #[arg(long, short = 'r', value_name = "RATIO")]
    pub aspect_ratio: Option<AspectRatio>,

    /// Output in JSON format instead of a table.
    #[arg(long, short = 'j')]
    pub json: bool,
}

impl ContainerArgs {
    /// Resolves the container width, height, and tile ratio against the configuration.
    #[must_use]
    pub fn resolve(&self, config: &TileGridConfig) -> (u32, u32, f64) {
        (
            self.width.unwrap_or(config.container.width),
            self.height.unwrap_or(config.container.height),
            self.aspect_ratio
                .map_or_else(|| config.layout.resolved_aspect_ratio(), AspectRatio::get),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aspect_ratio_decimal() {
        assert_eq!("0.75".parse::<AspectRatio>(), Ok(AspectRatio(0.75)));
    }

    #[test]
    fn test_aspect_ratio_shape() {
        assert_eq!("4:3".parse::<AspectRatio>(), Ok(AspectRatio(0.75)));
        assert_eq!("16:9".parse::<AspectRatio>(), Ok(AspectRatio(0.5625)));
        assert_eq!(" 1 : 1 ".parse::<AspectRatio>(), Ok(AspectRatio(1.0)));
    }

    #[test]
    fn test_aspect_ratio_rejects_invalid() {
        assert!("abc".parse::<AspectRatio>().is_err());
        assert!("0".parse::<AspectRatio>().is_err());
        assert!("-1".parse::<AspectRatio>().is_err());
        assert!("0:3".parse::<AspectRatio>().is_err());
        assert!("4:x".parse::<AspectRatio>().is_err());
    }

    #[test]
    fn test_resolve_falls_back_to_config() {
        let config = TileGridConfig::default();
        let args = ContainerArgs { width: Some(400), ..ContainerArgs::default() };
        assert_eq!(args.resolve(&config), (400, 720, 0.75));
    }
}
