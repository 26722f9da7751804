use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Title-bar control roles, drawn as colored dots in a fixed order.
pub enum WindowControlKind {
    /// Red dot; closes the window.
    Close,
    /// Yellow dot; minimizes or restores the window.
    Minimize,
    /// Green dot; toggles maximization.
    Maximize,
}

impl WindowControlKind {
    /// Left-to-right order of the title-bar controls.
    pub const ORDER: [Self; 3] = [Self::Close, Self::Minimize, Self::Maximize];

    fn token(self) -> &'static str {
        match self {
            Self::Close => "close",
            Self::Minimize => "minimize",
            Self::Maximize => "maximize",
        }
    }

    fn tone(self) -> &'static str {
        match self {
            Self::Close => "red",
            Self::Minimize => "yellow",
            Self::Maximize => "green",
        }
    }
}

#[component]
/// Title-bar control dot.
///
/// Presses and double-clicks never bubble out of the control, so pressing a dot does not start a
/// title-bar drag or a frame focus, and rapid clicks reach only the dot's own handler.
pub fn WindowControlButton(
    kind: WindowControlKind,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=merge_layout_class("ui-window-control", layout_class)
            aria-label=move || aria_label.get()
            data-ui-primitive="true"
            data-ui-kind="window-control"
            data-ui-slot=kind.token()
            data-ui-tone=kind.tone()
            on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
            on:mousedown=move |ev: MouseEvent| ev.stop_propagation()
            on:dblclick=move |ev: MouseEvent| ev.stop_propagation()
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            <span class="ui-window-control-dot" aria-hidden="true"></span>
        </button>
    }
}
