use super::*;

fn surface_mode(test_bench: bool) -> &'static str {
    if test_bench {
        "test-bench"
    } else {
        "desktop"
    }
}

#[component]
/// Full-viewport desktop surface with its wallpaper layer.
///
/// Windows, launchers, and the minimized-window dock all position against this surface.
pub fn DesktopSurface(
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    /// Lays the surface out for manual testing, with room for the event log.
    #[prop(optional)]
    test_bench: bool,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            id=id
            class=merge_layout_class("ui-desktop-surface", layout_class)
            role="application"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="desktop-surface"
            data-ui-mode=surface_mode(test_bench)
        >
            <div class="ui-desktop-wallpaper" aria-hidden="true" data-ui-slot="wallpaper"></div>
            {children()}
        </div>
    }
}

#[component]
/// Launcher icon column pinned to the top-left corner of the desktop.
pub fn LauncherGrid(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <nav
            class=merge_layout_class("ui-launcher-grid", layout_class)
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="launcher-grid"
        >
            {children()}
        </nav>
    }
}

#[component]
/// Desktop icon launcher button.
pub fn DesktopIconButton(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_dblclick: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=merge_layout_class("ui-desktop-icon-button", layout_class)
            title=title
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="desktop-icon-button"
            data-ui-selected=move || bool_token(selected.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
            on:dblclick=move |ev| {
                if let Some(on_dblclick) = on_dblclick.as_ref() {
                    on_dblclick.call(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

#[component]
/// Host for free-standing windows that are not opened from a launcher.
///
/// Windows keep their own stacking order; the stack adds no z-index of its own.
pub fn WindowStack(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-window-stack", layout_class)
            data-ui-primitive="true"
            data-ui-kind="window-stack"
        >
            {children()}
        </div>
    }
}

#[component]
/// Absolutely positioned window frame.
///
/// `style` carries position, size, stacking, and spawn scale; the frame itself stays stateless.
pub fn WindowFrame(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] style: MaybeSignal<String>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] focused: MaybeSignal<bool>,
    #[prop(optional, into)] maximized: MaybeSignal<bool>,
    #[prop(optional, into)] spawning: MaybeSignal<bool>,
    #[prop(optional, into)] interacting: MaybeSignal<bool>,
    #[prop(optional)] on_pointerdown: Option<Callback<web_sys::PointerEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <section
            class=merge_layout_class("ui-window-frame", layout_class)
            style=move || style.get()
            role="dialog"
            aria-label=move || aria_label.get()
            data-ui-primitive="true"
            data-ui-kind="window-frame"
            data-ui-focused=move || bool_token(focused.get())
            data-ui-maximized=move || bool_token(maximized.get())
            data-ui-spawning=move || bool_token(spawning.get())
            data-ui-interacting=move || bool_token(interacting.get())
            on:pointerdown=move |ev| {
                if let Some(on_pointerdown) = on_pointerdown.as_ref() {
                    on_pointerdown.call(ev);
                }
            }
        >
            {children()}
        </section>
    }
}

#[component]
/// Window title bar and drag surface.
pub fn WindowTitleBar(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] draggable: MaybeSignal<bool>,
    #[prop(optional)] on_pointerdown: Option<Callback<web_sys::PointerEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <header
            class=merge_layout_class("ui-window-titlebar", layout_class)
            data-ui-primitive="true"
            data-ui-kind="window-titlebar"
            data-ui-draggable=move || bool_token(draggable.get())
            on:pointerdown=move |ev| {
                if let Some(on_pointerdown) = on_pointerdown.as_ref() {
                    on_pointerdown.call(ev);
                }
            }
        >
            {children()}
        </header>
    }
}

#[component]
/// Centered window title; never intercepts title-bar presses.
pub fn WindowTitle(
    #[prop(into)] text: MaybeSignal<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-window-title", layout_class)
            data-ui-primitive="true"
            data-ui-kind="window-title"
        >
            {move || text.get()}
        </div>
    }
}

#[component]
/// Title-bar control row.
pub fn WindowControls(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-window-controls", layout_class)
            role="group"
            aria-label="Window controls"
            data-ui-primitive="true"
            data-ui-kind="window-controls"
        >
            {children()}
        </div>
    }
}

#[component]
/// Scrollable window content area.
pub fn WindowBody(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-window-body", layout_class)
            data-ui-primitive="true"
            data-ui-kind="window-body"
        >
            {children()}
        </div>
    }
}

#[component]
/// Edge or corner resize grip.
pub fn ResizeHandle(
    edge: &'static str,
    cursor: &'static str,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_pointerdown: Option<Callback<web_sys::PointerEvent>>,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-resize-handle", layout_class)
            style=format!("cursor:{cursor};")
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="resize-handle"
            data-ui-slot=edge
            on:pointerdown=move |ev| {
                if let Some(on_pointerdown) = on_pointerdown.as_ref() {
                    on_pointerdown.call(ev);
                }
            }
        ></div>
    }
}

#[component]
/// Floating dock anchored to the bottom center of the desktop.
pub fn Taskbar(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <footer
            class=merge_layout_class("ui-taskbar", layout_class)
            role="toolbar"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="taskbar"
        >
            {children()}
        </footer>
    }
}

#[component]
/// Round dock entry with an optional hover tooltip.
pub fn TaskbarButton(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(default = None)] tooltip: Option<String>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=merge_layout_class("ui-taskbar-button", layout_class)
            aria-label=move || aria_label.get()
            data-ui-primitive="true"
            data-ui-kind="taskbar-button"
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {children()}
            {tooltip.map(|tooltip| {
                view! {
                    <span class="ui-taskbar-tooltip" role="tooltip" data-ui-slot="tooltip">
                        {tooltip}
                    </span>
                }
            })}
        </button>
    }
}
