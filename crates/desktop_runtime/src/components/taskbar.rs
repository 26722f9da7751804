use super::*;
use system_ui::Taskbar as TaskbarDock;

#[component]
/// Dock of minimized windows; clicking an entry restores its window.
///
/// Renders nothing while no window is minimized.
pub fn Taskbar() -> impl IntoView {
    let manager = use_window_manager();
    let minimized = create_memo(move |_| manager.minimized_windows());

    view! {
        <Show when=move || minimized.with(|windows| !windows.is_empty()) fallback=|| ()>
            <TaskbarDock layout_class="window-manager-taskbar" aria_label="Minimized windows">
                <For
                    each=move || minimized.get()
                    key={|record: &Rc<WindowRecord>| record.id.clone()}
                    let:record
                >
                    {
                        let id = record.id.clone();
                        view! {
                            <TaskbarButton
                                aria_label=taskbar_label(&record)
                                tooltip=taskbar_tooltip(&record)
                                on_click=Callback::new(move |_| manager.restore(&id))
                            >
                                <span class="ui-taskbar-glyph" aria-hidden="true">
                                    {taskbar_glyph(&record)}
                                </span>
                            </TaskbarButton>
                        }
                    }
                </For>
            </TaskbarDock>
        </Show>
    }
}
