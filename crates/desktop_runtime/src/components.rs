//! Window-manager UI composition: windows, the minimized-window taskbar, and desktop launchers.

mod launcher;
mod taskbar;
mod window;

use std::{rc::Rc, time::Duration};

use leptos::ev::MouseEvent;
use leptos::*;
use system_ui::{
    DesktopIconButton, ResizeHandle, TaskbarButton, WindowBody, WindowControlButton,
    WindowControlKind, WindowControls, WindowFrame, WindowTitle, WindowTitleBar,
};
use window_manager::{
    CloseHandler, Coordinates, GlobalPointerEvent, ResizeDirection, SpawnAnimation, WindowAction,
    WindowGeometry, WindowId, WindowInstance, WindowOptions, WindowRecord,
};

pub use launcher::AppLauncher;
pub use taskbar::Taskbar;
pub use window::DesktopWindow;

use crate::{
    host::{self, FrameTask},
    runtime_context::use_window_manager,
};

fn window_frame_style(
    geometry: WindowGeometry,
    z_index: u32,
    maximized: bool,
    spawn_scale: Option<f64>,
) -> String {
    let bounds = if maximized {
        "left:0px;top:0px;width:100vw;height:100vh;".to_string()
    } else {
        format!(
            "left:{}px;top:{}px;width:{}px;height:{}px;",
            geometry.position.x, geometry.position.y, geometry.size.width, geometry.size.height
        )
    };
    let transform = match spawn_scale {
        Some(scale) => format!("transform:scale({scale});"),
        None => "transform:none;".to_string(),
    };
    format!("{bounds}z-index:{z_index};{transform}")
}

fn taskbar_label(record: &WindowRecord) -> String {
    record.display_title().to_string()
}

fn taskbar_tooltip(record: &WindowRecord) -> Option<String> {
    record.title.clone().filter(|title| !title.is_empty())
}

fn taskbar_glyph(record: &WindowRecord) -> String {
    record
        .display_title()
        .chars()
        .next()
        .map(|first| first.to_uppercase().collect())
        .unwrap_or_default()
}

fn spawn_options(options: WindowOptions, spawn_point: Option<Coordinates>) -> WindowOptions {
    match spawn_point {
        Some(spawn_point) => options.with_spawn_point(spawn_point),
        None => options,
    }
}

/// An explicit `z_index` option pins the window; otherwise it follows the registry.
fn frame_z_index(record: Option<&WindowRecord>, pinned: Option<u32>, base_z_index: u32) -> u32 {
    pinned.unwrap_or_else(|| record.map_or(base_z_index, |record| record.stack_order))
}
