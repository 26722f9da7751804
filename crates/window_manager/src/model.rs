use std::{fmt, rc::Rc};

use serde::{Deserialize, Serialize};

/// Minimum allowed window width.
pub const MIN_WINDOW_WIDTH: f64 = 300.0;
/// Minimum allowed window height.
pub const MIN_WINDOW_HEIGHT: f64 = 200.0;
pub const DEFAULT_WINDOW_WIDTH: f64 = 600.0;
pub const DEFAULT_WINDOW_HEIGHT: f64 = 500.0;
/// Ratio used to derive the missing dimension when only one is supplied.
pub const DEFAULT_ASPECT_RATIO: f64 = DEFAULT_WINDOW_WIDTH / DEFAULT_WINDOW_HEIGHT;
pub const DEFAULT_BASE_Z_INDEX: u32 = 1000;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WindowId(pub String);

impl WindowId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WindowId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for WindowId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinates {
    pub x: f64,
    pub y: f64,
}

impl Coordinates {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset_from(self, origin: Coordinates) -> Self {
        Self {
            x: self.x - origin.x,
            y: self.y - origin.y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn clamped_min(self) -> Self {
        Self {
            width: self.width.max(MIN_WINDOW_WIDTH),
            height: self.height.max(MIN_WINDOW_HEIGHT),
        }
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

/// Visible desktop area that window geometry is clamped against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Center point, rounded down to whole pixels.
    pub fn center(self) -> Coordinates {
        Coordinates {
            x: (self.width / 2.0).floor(),
            y: (self.height / 2.0).floor(),
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowGeometry {
    pub position: Coordinates,
    pub size: Dimensions,
}

impl WindowGeometry {
    pub fn new(position: Coordinates, size: Dimensions) -> Self {
        Self { position, size }
    }

    pub fn right(&self) -> f64 {
        self.position.x + self.size.width
    }

    pub fn bottom(&self) -> f64 {
        self.position.y + self.size.height
    }
}

/// Handler invoked once when the user dismisses a window.
pub type CloseHandler = Rc<dyn Fn()>;

/// Registry-owned stacking and visibility metadata for one open window.
#[derive(Clone)]
pub struct WindowRecord {
    pub id: WindowId,
    pub stack_order: u32,
    pub title: Option<String>,
    pub minimized: bool,
    pub maximized: bool,
    pub on_close: Option<CloseHandler>,
}

impl WindowRecord {
    /// Label shown in chrome and taskbar tooltips.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("Window")
    }

    /// Runs the creator-supplied close handler, if any.
    pub fn notify_closed(&self) {
        if let Some(on_close) = self.on_close.as_ref() {
            on_close();
        }
    }
}

impl fmt::Debug for WindowRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WindowRecord")
            .field("id", &self.id)
            .field("stack_order", &self.stack_order)
            .field("title", &self.title)
            .field("minimized", &self.minimized)
            .field("maximized", &self.maximized)
            .field("has_on_close", &self.on_close.is_some())
            .finish()
    }
}

impl PartialEq for WindowRecord {
    fn eq(&self, other: &Self) -> bool {
        let same_handler = match (&self.on_close, &other.on_close) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        };
        self.id == other.id
            && self.stack_order == other.stack_order
            && self.title == other.title
            && self.minimized == other.minimized
            && self.maximized == other.maximized
            && same_handler
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResizeDirection {
    Top,
    Right,
    Bottom,
    Left,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl ResizeDirection {
    pub const ALL: [ResizeDirection; 8] = [
        Self::Top,
        Self::Right,
        Self::Bottom,
        Self::Left,
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
    ];

    pub fn token(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::TopLeft => "top-left",
            Self::TopRight => "top-right",
            Self::BottomLeft => "bottom-left",
            Self::BottomRight => "bottom-right",
        }
    }

    pub fn cursor(self) -> &'static str {
        match self {
            Self::Top | Self::Bottom => "ns-resize",
            Self::Left | Self::Right => "ew-resize",
            Self::TopLeft | Self::BottomRight => "nwse-resize",
            Self::TopRight | Self::BottomLeft => "nesw-resize",
        }
    }

    pub fn moves_top_edge(self) -> bool {
        matches!(self, Self::Top | Self::TopLeft | Self::TopRight)
    }

    pub fn moves_bottom_edge(self) -> bool {
        matches!(self, Self::Bottom | Self::BottomLeft | Self::BottomRight)
    }

    pub fn moves_left_edge(self) -> bool {
        matches!(self, Self::Left | Self::TopLeft | Self::BottomLeft)
    }

    pub fn moves_right_edge(self) -> bool {
        matches!(self, Self::Right | Self::TopRight | Self::BottomRight)
    }
}

/// Lifecycle notifications emitted by registry transitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowEvent {
    Opened(WindowId),
    Closed(WindowId),
    Focused(WindowId),
    Minimized(WindowId),
    Restored(WindowId),
    Maximized(WindowId),
    Unmaximized(WindowId),
}
