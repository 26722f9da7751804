//! Shared desktop, window, and dock primitives.

use leptos::ev::MouseEvent;
use leptos::*;

mod controls;
mod shell;

pub use controls::{WindowControlButton, WindowControlKind};
pub use shell::{
    DesktopIconButton, DesktopSurface, LauncherGrid, ResizeHandle, Taskbar, TaskbarButton,
    WindowBody, WindowControls, WindowFrame, WindowStack, WindowTitle, WindowTitleBar,
};

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
