//! Leptos runtime for the in-browser window manager.
//!
//! [`WindowManagerProvider`] scopes one window registry to a subtree. [`DesktopWindow`] renders a
//! draggable, resizable window inside it, [`Taskbar`] lists minimized windows, and
//! [`AppLauncher`] turns a desktop icon into a window opener.

pub mod components;
pub mod host;
pub mod runtime_context;

pub use components::{AppLauncher, DesktopWindow, Taskbar};
pub use runtime_context::{
    try_use_window_manager, use_window_manager, RuntimeError, WindowManagerContext,
    WindowManagerProvider,
};
pub use window_manager::{
    Coordinates, Dimensions, WindowEvent, WindowId, WindowManagerConfig, WindowOptions,
};
