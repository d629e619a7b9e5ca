//! tilegrid - automatic grid arrangement of uniform tiles.
//!
//! Given a container size, a target tile aspect ratio, and a tile count,
//! tilegrid picks the row/column partition that best matches the container,
//! sizes every tile identically, and centers the grid (and any partial last
//! row) inside the container.
//!
//! The [`grid`] module is the library proper. The remaining modules back the
//! `tilegrid` command-line tool.

pub mod cli;
pub mod config;
pub mod error;
pub mod grid;
pub mod logging;
pub mod schema;
