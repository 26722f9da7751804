//! Window-chrome primitive library for the desktop window manager.
//!
//! The crate owns the Leptos primitives that draw desktops, windows, and the minimized-window
//! dock, together with the stable `data-ui-*` DOM contract consumed by the desktop CSS layers.
//! Primitives are stateless: the runtime passes geometry, stacking, and handlers in as props.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod primitives;

pub use primitives::{
    DesktopIconButton, DesktopSurface, LauncherGrid, ResizeHandle, Taskbar, TaskbarButton,
    WindowBody, WindowControlButton, WindowControlKind, WindowControls, WindowFrame, WindowStack,
    WindowTitle, WindowTitleBar,
};
