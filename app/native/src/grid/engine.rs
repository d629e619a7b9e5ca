//! The grid layout engine.
//!
//! [`GridLayoutEngine`] tracks the container dimensions and the ordered set of
//! tiles for one container. Adding or removing a tile only updates that set
//! and the surface elements; callers run [`GridLayoutEngine::layout`] when they
//! want the arrangement recomputed and applied.
//!
//! Each engine owns its state, so any number of engines (one per container)
//! can coexist.

use super::error::{GridError, GridResult};
use super::layout::GridPlan;
use super::state::{Container, DEFAULT_ASPECT_RATIO, TileFrame, TileId};
use super::surface::RenderSurface;

/// Arranges a variable number of uniform tiles inside one container.
#[derive(Debug)]
pub struct GridLayoutEngine<S: RenderSurface> {
    surface: S,
    container: Option<Container>,
    tiles: Vec<TileId>,
    aspect_ratio: f64,
}

impl<S: RenderSurface> GridLayoutEngine<S> {
    /// Creates an uninitialized engine using the default 4:3 tile ratio.
    #[must_use]
    pub const fn new(surface: S) -> Self {
        Self {
            surface,
            container: None,
            tiles: Vec::new(),
            aspect_ratio: DEFAULT_ASPECT_RATIO,
        }
    }

    /// Creates an uninitialized engine with a custom tile ratio (height ÷ width).
    ///
    /// # Errors
    ///
    /// Returns `GridError::InvalidAspectRatio` if the ratio is not a positive
    /// finite number.
    pub fn with_aspect_ratio(surface: S, aspect_ratio: f64) -> GridResult<Self> {
        if !aspect_ratio.is_finite() || aspect_ratio <= 0.0 {
            return Err(GridError::InvalidAspectRatio(aspect_ratio));
        }

        Ok(Self { aspect_ratio, ..Self::new(surface) })
    }

    /// Records the container dimensions and prepares the container on the surface.
    ///
    /// Calling it again replaces the dimensions; tracked tiles are kept.
    ///
    /// # Errors
    ///
    /// Returns `GridError::InvalidDimension` if either dimension is zero.
    pub fn initialize(&mut self, width: u32, height: u32) -> GridResult<()> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimension { width, height });
        }

        self.container = Some(Container::new(width, height));
        self.surface.prepare_container(width, height);
        tracing::debug!(width, height, "grid: container initialized");
        Ok(())
    }

    /// Initializes the engine with the size the surface reports for its container.
    ///
    /// # Errors
    ///
    /// Returns `GridError::NotInitialized` if the surface does not know its
    /// size, or `GridError::InvalidDimension` if the reported size is empty.
    pub fn initialize_from_surface(&mut self) -> GridResult<()> {
        let (width, height) = self.surface.container_size().ok_or(GridError::NotInitialized)?;
        self.initialize(width, height)
    }

    /// Appends a tile and creates its placeholder element on the surface.
    ///
    /// The layout is not recomputed.
    ///
    /// # Errors
    ///
    /// Returns `GridError::NotInitialized` before `initialize`,
    /// `GridError::DuplicateTile` if the identifier is already tracked, or a
    /// surface error if the element could not be created.
    pub fn add_tile(&mut self, id: impl Into<TileId>) -> GridResult<()> {
        self.container()?;
        let id = id.into();

        if self.contains(&id) {
            return Err(GridError::DuplicateTile(id));
        }

        self.surface.create_element(&id)?;
        tracing::debug!(tile = %id, count = self.tiles.len() + 1, "grid: tile added");
        self.tiles.push(id);
        Ok(())
    }

    /// Removes a tile and its element from the surface.
    ///
    /// The layout is not recomputed.
    ///
    /// # Errors
    ///
    /// Returns `GridError::NotInitialized` before `initialize`,
    /// `GridError::TileNotFound` if the identifier is not tracked, or a
    /// surface error if the element could not be removed.
    pub fn remove_tile(&mut self, id: impl Into<TileId>) -> GridResult<()> {
        self.container()?;
        let id = id.into();

        let Some(position) = self.tiles.iter().position(|t| *t == id) else {
            return Err(GridError::TileNotFound(id));
        };

        self.surface.remove_element(&id)?;
        self.tiles.remove(position);
        tracing::debug!(tile = %id, count = self.tiles.len(), "grid: tile removed");
        Ok(())
    }

    /// Computes the plan for the current tiles without touching the surface.
    ///
    /// Returns `None` when no tiles are tracked.
    ///
    /// # Errors
    ///
    /// Returns `GridError::NotInitialized` before `initialize`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn plan(&self) -> GridResult<Option<GridPlan>> {
        let container = self.container()?;
        Ok(GridPlan::new(&container, self.tiles.len() as u32, self.aspect_ratio))
    }

    /// Recomputes the arrangement and applies it to every tile on the surface.
    ///
    /// Returns the frame assigned to each tile in placement order. With no
    /// tiles this returns an empty list and makes no surface calls.
    ///
    /// # Errors
    ///
    /// Returns `GridError::NotInitialized` before `initialize`, or a surface
    /// error if a frame could not be applied.
    pub fn layout(&mut self) -> GridResult<Vec<TileFrame>> {
        let Some(plan) = self.plan()? else {
            tracing::trace!("grid: no tiles to lay out");
            return Ok(Vec::new());
        };

        tracing::debug!(
            count = plan.count,
            columns = plan.partition.columns,
            rows = plan.partition.rows,
            tile_width = plan.tile_size.width,
            tile_height = plan.tile_size.height,
            "grid: layout computed"
        );

        let mut frames = Vec::with_capacity(self.tiles.len());
        for (id, geometry) in self.tiles.iter().zip(plan.geometries()) {
            self.surface.set_frame(id, &geometry)?;
            frames.push(TileFrame { id: id.clone(), geometry });
        }

        Ok(frames)
    }

    /// Returns the container dimensions.
    ///
    /// # Errors
    ///
    /// Returns `GridError::NotInitialized` before `initialize`.
    pub fn container(&self) -> GridResult<Container> {
        self.container.ok_or(GridError::NotInitialized)
    }

    /// Returns the tracked tiles in placement order.
    #[must_use]
    pub fn tiles(&self) -> &[TileId] { &self.tiles }

    /// Returns the number of tracked tiles.
    #[must_use]
    pub fn len(&self) -> usize { self.tiles.len() }

    /// Returns true if no tiles are tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.tiles.is_empty() }

    /// Returns true if a tile with the given identifier is tracked.
    #[must_use]
    pub fn contains(&self, id: &TileId) -> bool { self.tiles.contains(id) }

    /// Returns the target tile aspect ratio.
    #[must_use]
    pub const fn aspect_ratio(&self) -> f64 { self.aspect_ratio }

    /// Returns the rendering surface.
    #[must_use]
    pub const fn surface(&self) -> &S { &self.surface }

    /// Returns the rendering surface mutably.
    pub const fn surface_mut(&mut self) -> &mut S { &mut self.surface }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::state::Partition;
    use crate::grid::surface::{RecordingSurface, SurfaceError};

    fn engine(width: u32, height: u32) -> GridLayoutEngine<RecordingSurface> {
        let mut engine = GridLayoutEngine::new(RecordingSurface::new());
        engine.initialize(width, height).unwrap();
        engine
    }

    #[test]
    fn test_operations_require_initialize() {
        let mut engine = GridLayoutEngine::new(RecordingSurface::new());

        assert_eq!(engine.add_tile("a"), Err(GridError::NotInitialized));
        assert_eq!(engine.remove_tile("a"), Err(GridError::NotInitialized));
        assert_eq!(engine.layout(), Err(GridError::NotInitialized));
        assert_eq!(engine.container(), Err(GridError::NotInitialized));
    }

    #[test]
    fn test_initialize_rejects_zero_dimensions() {
        let mut engine = GridLayoutEngine::new(RecordingSurface::new());

        assert_eq!(
            engine.initialize(0, 300),
            Err(GridError::InvalidDimension { width: 0, height: 300 })
        );
        assert_eq!(
            engine.initialize(400, 0),
            Err(GridError::InvalidDimension { width: 400, height: 0 })
        );
        assert!(engine.container().is_err());
    }

    #[test]
    fn test_initialize_prepares_surface() {
        let engine = engine(400, 300);
        assert_eq!(engine.surface().container_size(), Some((400, 300)));
        assert_eq!(engine.container(), Ok(Container::new(400, 300)));
    }

    #[test]
    fn test_initialize_from_surface() {
        let mut engine = GridLayoutEngine::new(RecordingSurface::with_size(640, 480));
        engine.initialize_from_surface().unwrap();
        assert_eq!(engine.container(), Ok(Container::new(640, 480)));

        let mut unsized_engine = GridLayoutEngine::new(RecordingSurface::new());
        assert_eq!(unsized_engine.initialize_from_surface(), Err(GridError::NotInitialized));
    }

    #[test]
    fn test_reinitialize_keeps_tiles() {
        let mut engine = engine(400, 300);
        engine.add_tile("a").unwrap();
        engine.initialize(800, 600).unwrap();

        assert_eq!(engine.len(), 1);
        assert_eq!(engine.container(), Ok(Container::new(800, 600)));
    }

    #[test]
    fn test_aspect_ratio_validation() {
        assert!(GridLayoutEngine::with_aspect_ratio(RecordingSurface::new(), 0.5625).is_ok());
        assert_eq!(
            GridLayoutEngine::with_aspect_ratio(RecordingSurface::new(), 0.0).unwrap_err(),
            GridError::InvalidAspectRatio(0.0)
        );
        assert!(GridLayoutEngine::with_aspect_ratio(RecordingSurface::new(), f64::NAN).is_err());
        assert!(GridLayoutEngine::with_aspect_ratio(RecordingSurface::new(), -1.0).is_err());
    }

    #[test]
    fn test_add_tile_tracks_order_and_creates_element() {
        let mut engine = engine(400, 300);
        engine.add_tile("b").unwrap();
        engine.add_tile("a").unwrap();

        let expected = vec![TileId::new("b"), TileId::new("a")];
        assert_eq!(engine.tiles(), expected.as_slice());
        assert_eq!(engine.surface().elements(), expected);
    }

    #[test]
    fn test_add_duplicate_tile_fails() {
        let mut engine = engine(400, 300);
        engine.add_tile("a").unwrap();

        assert_eq!(engine.add_tile("a"), Err(GridError::DuplicateTile("a".into())));
        assert_eq!(engine.len(), 1);
        assert_eq!(engine.surface().elements().len(), 1);
    }

    #[test]
    fn test_add_tile_surface_failure_leaves_state_untouched() {
        let mut engine = engine(400, 300);
        engine.surface_mut().create_element(&"a".into()).unwrap();

        assert_eq!(
            engine.add_tile("a"),
            Err(GridError::Surface(SurfaceError::ElementExists("a".into())))
        );
        assert!(engine.is_empty());
    }

    #[test]
    fn test_remove_tile() {
        let mut engine = engine(400, 300);
        engine.add_tile("a").unwrap();
        engine.add_tile("b").unwrap();
        engine.remove_tile("a").unwrap();

        assert_eq!(engine.tiles(), &[TileId::new("b")]);
        assert_eq!(engine.surface().elements(), vec![TileId::new("b")]);
    }

    #[test]
    fn test_remove_unknown_tile_fails() {
        let mut engine = engine(400, 300);
        engine.add_tile("a").unwrap();

        let err = engine.remove_tile("z").unwrap_err();
        assert_eq!(err, GridError::TileNotFound("z".into()));
        assert!(err.is_not_found());
        assert_eq!(engine.len(), 1);
    }

    #[test]
    fn test_layout_without_tiles_is_noop() {
        let mut engine = engine(400, 300);
        assert_eq!(engine.layout(), Ok(Vec::new()));
        assert_eq!(engine.plan(), Ok(None));
        assert_eq!(engine.surface().frame_updates(), 0);
    }

    #[test]
    fn test_add_does_not_relayout() {
        let mut engine = engine(400, 300);
        engine.add_tile("a").unwrap();
        assert_eq!(engine.surface().frame_updates(), 0);
        assert!(engine.surface().frame(&"a".into()).is_none());
    }

    #[test]
    fn test_layout_applies_frames_to_surface() {
        let mut engine = engine(400, 300);
        for id in ["a", "b", "c"] {
            engine.add_tile(id).unwrap();
        }

        let frames = engine.layout().unwrap();
        assert_eq!(frames.len(), 3);
        for frame in &frames {
            assert_eq!(engine.surface().frame(&frame.id), Some(&frame.geometry));
        }
        assert_eq!(frames[2].id, TileId::new("c"));
        assert_eq!((frames[2].geometry.x, frames[2].geometry.y), (100, 150));
    }

    #[test]
    fn test_layout_is_idempotent() {
        let mut engine = engine(1280, 720);
        for i in 0..7 {
            engine.add_tile(format!("feed-{i}")).unwrap();
        }

        let first = engine.layout().unwrap();
        let second = engine.layout().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_remove_changes_partition() {
        let mut engine = engine(400, 300);
        for id in ["a", "b", "c", "d"] {
            engine.add_tile(id).unwrap();
        }
        assert_eq!(engine.plan().unwrap().unwrap().partition, Partition::new(2, 2));

        engine.remove_tile("d").unwrap();
        engine.remove_tile("c").unwrap();
        let frames = engine.layout().unwrap();

        assert_eq!(frames.len(), 2);
        // Two tiles in a 4:3 container: side by side scores 0.375, stacked 0.75
        assert_eq!(engine.plan().unwrap().unwrap().partition, Partition::new(2, 1));
    }

    #[test]
    fn test_custom_aspect_ratio_changes_tile_shape() {
        let mut engine = GridLayoutEngine::with_aspect_ratio(RecordingSurface::new(), 0.5625)
            .unwrap();
        engine.initialize(1600, 900).unwrap();
        engine.add_tile("a").unwrap();

        let frames = engine.layout().unwrap();
        assert_eq!((frames[0].geometry.width, frames[0].geometry.height), (1600, 900));
    }

    #[test]
    fn test_engines_are_independent() {
        let mut left = engine(400, 300);
        let mut right = engine(800, 600);
        left.add_tile("a").unwrap();
        right.add_tile("a").unwrap();
        right.add_tile("b").unwrap();

        assert_eq!(left.layout().unwrap().len(), 1);
        assert_eq!(right.layout().unwrap().len(), 2);
    }
}
