//! Host-independent window-manager core.
//!
//! [`WindowRegistry`] is the single source of truth for stacking order, focus, and the
//! minimized/maximized flags of every open window. Each window owns its own geometry through a
//! [`WindowInstance`], which applies drag and anchor-preserving resize rules against the
//! viewport. Nothing in this crate touches the DOM; the Leptos runtime wires it to pointer
//! events and animation frames.

pub mod animation;
pub mod config;
pub mod error;
pub mod geometry;
pub mod interaction;
pub mod model;
pub mod registry;

pub use animation::{ease_in_log, AnimationFrame, SpawnAnimation};
pub use config::{LauncherEntry, LauncherManifest, WindowManagerConfig};
pub use error::{ConfigError, GeometryError};
pub use geometry::{
    drag_position, initial_dimensions, resize_geometry, target_coordinates, WindowOptions,
};
pub use interaction::{GlobalPointerEvent, InteractionMode, WindowInstance};
pub use model::*;
pub use registry::{WindowAction, WindowRegistry};
