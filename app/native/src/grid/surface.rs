//! Rendering surface abstraction.
//!
//! The engine never draws anything itself. It calls into a [`RenderSurface`]
//! to create and remove tile elements and to apply the geometry it computed.
//! [`RecordingSurface`] keeps everything in memory and is used for headless
//! layout (CLI output, tests).

use std::collections::HashMap;

use thiserror::Error;

use super::state::{TileGeometry, TileId};

/// Errors reported by a rendering surface.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurfaceError {
    /// The surface has no element with the given identifier.
    #[error("Element '{0}' does not exist on the surface")]
    MissingElement(TileId),
    /// The surface already has an element with the given identifier.
    #[error("Element '{0}' already exists on the surface")]
    ElementExists(TileId),
    /// Any other surface-specific failure.
    #[error("{0}")]
    Other(String),
}

/// Capabilities the engine needs from the environment that renders tiles.
///
/// Calls are synchronous; implementations should not retain references to
/// the engine between calls.
pub trait RenderSurface {
    /// Sizes the container and makes it the positioning parent of its tiles.
    fn prepare_container(&mut self, width: u32, height: u32);

    /// Creates a placeholder element for a tile as a child of the container.
    ///
    /// # Errors
    ///
    /// Returns an error if the element cannot be created.
    fn create_element(&mut self, id: &TileId) -> Result<(), SurfaceError>;

    /// Removes a tile element and its wrapper from the container.
    ///
    /// # Errors
    ///
    /// Returns an error if the element cannot be removed.
    fn remove_element(&mut self, id: &TileId) -> Result<(), SurfaceError>;

    /// Sets the absolute position and size of a tile element.
    ///
    /// # Errors
    ///
    /// Returns an error if the element does not exist or cannot be moved.
    fn set_frame(&mut self, id: &TileId, geometry: &TileGeometry) -> Result<(), SurfaceError>;

    /// Reports the current container size, if the surface knows it.
    fn container_size(&self) -> Option<(u32, u32)>;

    /// Lists the attached tile elements in insertion order.
    fn elements(&self) -> Vec<TileId>;
}

/// An in-memory surface that records every element and the last frame applied to it.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    size: Option<(u32, u32)>,
    elements: Vec<TileId>,
    frames: HashMap<TileId, TileGeometry>,
    frame_updates: usize,
}

impl RecordingSurface {
    /// Creates an empty surface with no known size.
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Creates an empty surface that already reports a container size.
    #[must_use]
    pub fn with_size(width: u32, height: u32) -> Self {
        Self {
            size: Some((width, height)),
            ..Self::default()
        }
    }

    /// Returns the last frame applied to an element.
    #[must_use]
    pub fn frame(&self, id: &TileId) -> Option<&TileGeometry> { self.frames.get(id) }

    /// Returns how many times `set_frame` succeeded.
    #[must_use]
    pub const fn frame_updates(&self) -> usize { self.frame_updates }
}

impl RenderSurface for RecordingSurface {
    fn prepare_container(&mut self, width: u32, height: u32) { self.size = Some((width, height)); }

    fn create_element(&mut self, id: &TileId) -> Result<(), SurfaceError> {
        if self.elements.contains(id) {
            return Err(SurfaceError::ElementExists(id.clone()));
        }
        self.elements.push(id.clone());
        Ok(())
    }

    fn remove_element(&mut self, id: &TileId) -> Result<(), SurfaceError> {
        let Some(position) = self.elements.iter().position(|e| e == id) else {
            return Err(SurfaceError::MissingElement(id.clone()));
        };
        self.elements.remove(position);
        self.frames.remove(id);
        Ok(())
    }

    fn set_frame(&mut self, id: &TileId, geometry: &TileGeometry) -> Result<(), SurfaceError> {
        if !self.elements.contains(id) {
            return Err(SurfaceError::MissingElement(id.clone()));
        }
        self.frames.insert(id.clone(), *geometry);
        self.frame_updates += 1;
        Ok(())
    }

    fn container_size(&self) -> Option<(u32, u32)> { self.size }

    fn elements(&self) -> Vec<TileId> { self.elements.clone() }
}
