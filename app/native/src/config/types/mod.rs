//! Configuration types for tilegrid.
//!
//! The configuration file supports JSONC format (JSON with comments).
//! Both single-line (`//`) and multi-line (`/* */`) comments are allowed.

pub mod layout;
pub mod root;

pub use layout::{
    ContainerConfig, DEFAULT_CONTAINER_HEIGHT, DEFAULT_CONTAINER_WIDTH, LayoutConfig,
};
pub use root::{ConfigError, TileGridConfig, config_paths, load_config, load_config_from_path};
