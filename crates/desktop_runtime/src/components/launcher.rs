use super::*;

#[component]
/// Desktop icon that opens a single window on double-click.
///
/// Opening a closed launcher spawns its window out of the icon center. Double-clicking while the
/// window is open brings it forward instead, restoring it first when minimized. Closing the window
/// returns the launcher to its closed state.
pub fn AppLauncher(
    #[prop(into)] id: WindowId,
    #[prop(into)] label: String,
    #[prop(into)] icon: String,
    /// Window title; defaults to `label`.
    #[prop(optional, into)]
    window_title: Option<String>,
    #[prop(optional)] options: WindowOptions,
    children: ChildrenFn,
) -> impl IntoView {
    let manager = use_window_manager();
    let open = create_rw_signal(false);
    let spawn_point = create_rw_signal(None::<Coordinates>);
    let icon_ref = create_node_ref::<html::Div>();

    let icon_title = label.clone();
    let icon_aria_label = format!("Open {label}");
    let window_title = store_value(window_title.unwrap_or_else(|| label.clone()));
    let id = store_value(id);
    let children = store_value(children);

    let activate = move |_: MouseEvent| {
        if open.get_untracked() {
            id.with_value(|id| {
                if manager
                    .registry
                    .with_untracked(|registry| registry.is_minimized(id))
                {
                    manager.restore(id);
                } else {
                    manager.focus(id);
                }
            });
            return;
        }

        let center = host::element_center(icon_ref);
        if center.is_none() {
            id.with_value(|id| {
                logging::warn!("launcher `{id}` icon is not mounted; opening without spawn motion")
            });
        }
        spawn_point.set(center);
        open.set(true);
    };

    view! {
        <div class="app-launcher" node_ref=icon_ref>
            <DesktopIconButton
                title=icon_title
                aria_label=icon_aria_label
                selected=open
                on_dblclick=Callback::new(activate)
            >
                <span class="app-launcher-icon" aria-hidden="true">{icon}</span>
                <span class="app-launcher-label">{label}</span>
            </DesktopIconButton>
        </div>
        <Show when=move || open.get() fallback=|| ()>
            <DesktopWindow
                id=id.get_value()
                title=window_title.get_value()
                options=spawn_options(options, spawn_point.get_untracked())
                on_close=Callback::new(move |_| open.set(false))
            >
                {children.with_value(|children| children())}
            </DesktopWindow>
        </Show>
    }
}
