//! Pure geometry rules for a single window: initial sizing, resting position, drag clamping, and
//! anchor-preserving resize.

use serde::{Deserialize, Serialize};

use crate::{
    error::GeometryError,
    model::{
        Coordinates, Dimensions, ResizeDirection, Viewport, WindowGeometry, DEFAULT_ASPECT_RATIO,
        MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH,
    },
};

/// Resolves the starting size from the caller's requested dimensions.
///
/// A single dimension is completed with [`DEFAULT_ASPECT_RATIO`], never below the minimum size;
/// no dimension yields the default size.
///
/// # Errors
///
/// Returns a [`GeometryError`] when an explicitly requested dimension is below its minimum.
/// Requested sizes are never silently clamped.
pub fn initial_dimensions(
    width: Option<f64>,
    height: Option<f64>,
) -> Result<Dimensions, GeometryError> {
    if let Some(width) = width {
        if width < MIN_WINDOW_WIDTH {
            return Err(GeometryError::WidthBelowMinimum {
                requested: width,
                minimum: MIN_WINDOW_WIDTH,
            });
        }
    }
    if let Some(height) = height {
        if height < MIN_WINDOW_HEIGHT {
            return Err(GeometryError::HeightBelowMinimum {
                requested: height,
                minimum: MIN_WINDOW_HEIGHT,
            });
        }
    }

    let size = match (width, height) {
        (Some(width), Some(height)) => Dimensions { width, height },
        (Some(width), None) => Dimensions {
            width,
            height: width / DEFAULT_ASPECT_RATIO,
        },
        (None, Some(height)) => Dimensions {
            width: height * DEFAULT_ASPECT_RATIO,
            height,
        }
        .clamped_min(),
        (None, None) => Dimensions::default(),
    };
    Ok(size)
}

/// Resting top-left corner: explicit coordinates where given, otherwise centered on the viewport.
///
/// A centered window larger than the viewport rests at the origin on that axis. Derived from the
/// live size on every call, never cached.
pub fn target_coordinates(
    x: Option<f64>,
    y: Option<f64>,
    viewport: Viewport,
    size: Dimensions,
) -> Coordinates {
    let center = viewport.center();
    Coordinates {
        x: x.unwrap_or_else(|| (center.x - size.width / 2.0).max(0.0)),
        y: y.unwrap_or_else(|| (center.y - size.height / 2.0).max(0.0)),
    }
}

/// Top-left corner for a drag step, kept fully inside the viewport.
///
/// When the window is larger than the viewport the origin edge wins.
pub fn drag_position(
    pointer: Coordinates,
    press_offset: Coordinates,
    size: Dimensions,
    viewport: Viewport,
) -> Coordinates {
    Coordinates {
        x: clamp_origin(pointer.x - press_offset.x, viewport.width - size.width),
        y: clamp_origin(pointer.y - press_offset.y, viewport.height - size.height),
    }
}

/// Recomputes geometry for one resize step with the pointer at `pointer`.
///
/// Edges opposite the active handle stay in place unless that would take the window below its
/// minimum size. Each axis is handled independently, so the corner handles are the combination of
/// their two edges.
pub fn resize_geometry(
    current: WindowGeometry,
    direction: ResizeDirection,
    pointer: Coordinates,
    viewport: Viewport,
) -> WindowGeometry {
    let mut next = current;

    if direction.moves_left_edge() {
        let (x, width) = resize_leading_edge(current.right(), pointer.x, MIN_WINDOW_WIDTH);
        next.position.x = x;
        next.size.width = width;
    } else if direction.moves_right_edge() {
        next.size.width = resize_trailing_edge(
            current.position.x,
            pointer.x,
            viewport.width,
            MIN_WINDOW_WIDTH,
        );
    }

    if direction.moves_top_edge() {
        let (y, height) = resize_leading_edge(current.bottom(), pointer.y, MIN_WINDOW_HEIGHT);
        next.position.y = y;
        next.size.height = height;
    } else if direction.moves_bottom_edge() {
        next.size.height = resize_trailing_edge(
            current.position.y,
            pointer.y,
            viewport.height,
            MIN_WINDOW_HEIGHT,
        );
    }

    next
}

/// Options a launcher supplies when opening a window.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WindowOptions {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    /// Fixed stacking order; when absent the registry order is used.
    #[serde(default)]
    pub z_index: Option<u32>,
    /// Launch point the window animates out of, typically the launcher icon center.
    pub spawn_point: Option<Coordinates>,
}

impl WindowOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_position(mut self, x: f64, y: f64) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_z_index(mut self, z_index: u32) -> Self {
        self.z_index = Some(z_index);
        self
    }

    pub fn with_spawn_point(mut self, spawn_point: Coordinates) -> Self {
        self.spawn_point = Some(spawn_point);
        self
    }

    /// # Errors
    ///
    /// See [`initial_dimensions`].
    pub fn dimensions(&self) -> Result<Dimensions, GeometryError> {
        initial_dimensions(self.width, self.height)
    }

    /// Checks the requested position and size without a viewport.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NegativePosition`] for an explicit coordinate left of or above the
    /// viewport origin, otherwise see [`initial_dimensions`].
    pub fn validate(&self) -> Result<Dimensions, GeometryError> {
        for (axis, value) in [("x", self.x), ("y", self.y)] {
            if let Some(requested) = value.filter(|value| *value < 0.0) {
                return Err(GeometryError::NegativePosition { axis, requested });
            }
        }
        self.dimensions()
    }

    pub fn target(&self, viewport: Viewport, size: Dimensions) -> Coordinates {
        target_coordinates(self.x, self.y, viewport, size)
    }

    /// Geometry at mount time: the spawn point if one was given, else the resting target.
    ///
    /// # Errors
    ///
    /// See [`Self::validate`].
    pub fn initial_geometry(&self, viewport: Viewport) -> Result<WindowGeometry, GeometryError> {
        let size = self.validate()?;
        let position = self
            .spawn_point
            .unwrap_or_else(|| self.target(viewport, size));
        Ok(WindowGeometry { position, size })
    }
}

fn clamp_origin(value: f64, max: f64) -> f64 {
    value.min(max).max(0.0)
}

/// Moves a top or left edge while `anchor` (the opposite edge) stays fixed.
///
/// The origin never passes the viewport origin. The minimum extent is applied last, so an anchor
/// closer to the origin than `minimum` is pushed out instead of shrinking the window.
fn resize_leading_edge(anchor: f64, pointer: f64, minimum: f64) -> (f64, f64) {
    let extent = (anchor - pointer).max(minimum);
    let origin = (anchor - extent).max(0.0);
    (origin, (anchor - origin).max(minimum))
}

fn resize_trailing_edge(origin: f64, pointer: f64, limit: f64, minimum: f64) -> f64 {
    (pointer - origin).min(limit - origin).max(minimum)
}
