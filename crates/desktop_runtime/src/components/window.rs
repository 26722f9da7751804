use super::*;

fn route_pointer(instance: RwSignal<WindowInstance>, event: GlobalPointerEvent) {
    let Some(mut window) = instance.try_get_untracked() else {
        return;
    };
    if window.is_idle() {
        return;
    }
    if window.handle_pointer(event, host::desktop_viewport()) {
        instance.set(window);
    }
}

fn animate_spawn(frames: &FrameTask, instance: RwSignal<WindowInstance>, animation: SpawnAnimation) {
    let animation = std::cell::Cell::new(animation);
    frames.run(move |now_ms| {
        let mut current = animation.get();
        let Some(frame) = current.sample(now_ms) else {
            return false;
        };
        animation.set(current);

        // A drag or resize started mid-flight takes over the position.
        let moved = instance
            .try_update(|window| {
                if window.is_idle() {
                    window.set_position(frame.position);
                    true
                } else {
                    false
                }
            })
            .unwrap_or(false);
        moved && !frame.finished
    });
}

#[component]
/// A draggable, resizable window registered with the surrounding window manager.
///
/// The window registers itself on mount and unregisters on cleanup. Position and size live in
/// the component, while stacking, minimized, and maximized state come from the registry.
///
/// # Panics
///
/// Panics when rendered outside a [`crate::WindowManagerProvider`] or when `options` asks for a
/// width or height below the minimum window size.
pub fn DesktopWindow(
    #[prop(into)] id: WindowId,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional)] options: WindowOptions,
    /// Runs once when the close control is pressed, after the window has been unregistered.
    #[prop(optional)]
    on_close: Option<Callback<()>>,
    children: ChildrenFn,
) -> impl IntoView {
    let manager = use_window_manager();
    let config = manager.config.get_value();
    let viewport = host::desktop_viewport();
    let initial = options
        .initial_geometry(viewport)
        .unwrap_or_else(|err| panic!("window `{id}` rejected: {err}"));

    let instance = create_rw_signal(WindowInstance::new(initial));
    let spawning = create_rw_signal(
        SpawnAnimation::between(
            options.spawn_point,
            options.target(viewport, initial.size),
            f64::from(config.spawn_duration_ms),
        )
        .is_some(),
    );

    let close_handler =
        on_close.map(|on_close| Rc::new(move || on_close.call(())) as CloseHandler);
    manager.register(id.clone(), title.clone(), close_handler);
    {
        let id = id.clone();
        on_cleanup(move || manager.unregister(&id));
    }

    let pointer_move = window_event_listener(ev::pointermove, move |ev| {
        route_pointer(
            instance,
            GlobalPointerEvent::Move(host::pointer_from_pointer_event(&ev)),
        );
    });
    let pointer_up = window_event_listener(ev::pointerup, move |_| {
        route_pointer(instance, GlobalPointerEvent::Up);
    });
    let pointer_cancel = window_event_listener(ev::pointercancel, move |_| {
        route_pointer(instance, GlobalPointerEvent::Up);
    });
    on_cleanup(move || {
        pointer_move.remove();
        pointer_up.remove();
        pointer_cancel.remove();
    });

    let frames = FrameTask::new();
    if spawning.get_untracked() {
        let frames = frames.clone();
        let delay = set_timeout_with_handle(
            move || {
                spawning.set(false);
                // Target follows the live size, in case the window was resized while scaled.
                let size = instance.get_untracked().geometry().size;
                if let Some(animation) = SpawnAnimation::between(
                    options.spawn_point,
                    options.target(viewport, size),
                    f64::from(config.spawn_duration_ms),
                ) {
                    animate_spawn(&frames, instance, animation);
                }
            },
            Duration::from_millis(u64::from(config.spawn_delay_ms)),
        );
        match delay {
            Ok(handle) => on_cleanup(move || handle.clear()),
            Err(err) => {
                logging::warn!("spawn delay for window `{id}` could not be scheduled: {err:?}");
                spawning.set(false);
                let target = options.target(viewport, initial.size);
                instance.update(|window| window.set_position(target));
            }
        }
    }
    on_cleanup(move || frames.cancel());

    let id = store_value(id);
    let title = store_value(title.unwrap_or_default());
    let children = store_value(children);

    let record = create_memo(move |_| {
        id.with_value(|id| manager.registry.with(|registry| registry.get(id)))
    });
    let visible = Signal::derive(move || {
        record.with(|record| record.as_ref().is_some_and(|record| !record.minimized))
    });
    let maximized = Signal::derive(move || {
        record.with(|record| record.as_ref().is_some_and(|record| record.maximized))
    });
    let focused = Signal::derive(move || id.with_value(|id| manager.is_focused(id)));
    let aria_label = Signal::derive(move || {
        record.with(|record| {
            record
                .as_ref()
                .map(|record| record.display_title().to_string())
                .unwrap_or_default()
        })
    });
    let frame_style = Signal::derive(move || {
        let z_index = record.with(|record| {
            frame_z_index(record.as_deref(), options.z_index, config.base_z_index)
        });
        window_frame_style(
            instance.with(|window| window.geometry()),
            z_index,
            maximized.get(),
            spawning.get().then_some(config.spawn_scale),
        )
    });
    let interacting = Signal::derive(move || !instance.with(|window| window.is_idle()));

    let focus = move |_: web_sys::PointerEvent| {
        id.with_value(|id| {
            if !manager.registry.with_untracked(|registry| registry.is_focused(id)) {
                manager.focus(id);
            }
        });
    };
    let begin_move = move |ev: web_sys::PointerEvent| {
        if !host::is_primary_press(&ev) {
            return;
        }
        let maximized = id.with_value(|id| {
            manager
                .registry
                .with_untracked(|registry| registry.is_maximized(id))
        });
        let mut window = instance.get_untracked();
        if window.begin_drag(host::pointer_from_pointer_event(&ev), maximized) {
            ev.prevent_default();
            host::try_set_pointer_capture(&ev);
            instance.set(window);
        }
    };
    let close = move |_: MouseEvent| id.with_value(|id| manager.close(id));
    let minimize = move |_: MouseEvent| {
        manager.dispatch_action(WindowAction::ToggleMinimize(id.get_value()));
    };
    let maximize = move |_: MouseEvent| id.with_value(|id| manager.maximize(id));

    view! {
        <Show when=move || visible.get() fallback=|| ()>
            <WindowFrame
                layout_class="desktop-window"
                style=frame_style
                aria_label=aria_label
                focused=focused
                maximized=maximized
                spawning=spawning
                interacting=interacting
                on_pointerdown=Callback::new(focus)
            >
                <WindowTitleBar
                    draggable=Signal::derive(move || !maximized.get())
                    on_pointerdown=Callback::new(begin_move)
                >
                    <WindowControls>
                        <WindowControlButton
                            kind=WindowControlKind::Close
                            aria_label="Close window"
                            on_click=Callback::new(close)
                        />
                        <WindowControlButton
                            kind=WindowControlKind::Minimize
                            aria_label="Minimize window"
                            on_click=Callback::new(minimize)
                        />
                        <WindowControlButton
                            kind=WindowControlKind::Maximize
                            aria_label=Signal::derive(move || {
                                if maximized.get() {
                                    "Restore window".to_string()
                                } else {
                                    "Maximize window".to_string()
                                }
                            })
                            on_click=Callback::new(maximize)
                        />
                    </WindowControls>
                    <WindowTitle text=title.get_value() />
                </WindowTitleBar>
                <WindowBody>{children.with_value(|children| children())}</WindowBody>
                <Show when=move || !maximized.get() fallback=|| ()>
                    {ResizeDirection::ALL
                        .into_iter()
                        .map(|direction| {
                            view! {
                                <WindowResizeHandle window_id=id instance=instance direction=direction />
                            }
                        })
                        .collect_view()}
                </Show>
            </WindowFrame>
        </Show>
    }
}

#[component]
fn WindowResizeHandle(
    window_id: StoredValue<WindowId>,
    instance: RwSignal<WindowInstance>,
    direction: ResizeDirection,
) -> impl IntoView {
    let manager = use_window_manager();

    let on_pointerdown = move |ev: web_sys::PointerEvent| {
        if !host::is_primary_press(&ev) {
            return;
        }
        let maximized = window_id.with_value(|id| {
            manager
                .registry
                .with_untracked(|registry| registry.is_maximized(id))
        });
        let mut window = instance.get_untracked();
        if window.begin_resize(direction, maximized) {
            ev.prevent_default();
            host::try_set_pointer_capture(&ev);
            instance.set(window);
        }
    };

    view! {
        <ResizeHandle
            edge=direction.token()
            cursor=direction.cursor()
            on_pointerdown=Callback::new(on_pointerdown)
        />
    }
}
