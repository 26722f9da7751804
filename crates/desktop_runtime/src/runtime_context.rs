//! Window-manager provider and context wiring.
//!
//! The provider owns the single [`WindowRegistry`] for a desktop subtree and exposes it to
//! descendants through [`WindowManagerContext`]. Window components read stacking and visibility
//! from the context and route every lifecycle change through it.

use std::rc::Rc;

use leptos::*;
use thiserror::Error;
use window_manager::{
    CloseHandler, WindowAction, WindowEvent, WindowId, WindowManagerConfig, WindowRecord,
    WindowRegistry,
};

use crate::components::Taskbar;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
/// Errors raised while wiring runtime components together.
pub enum RuntimeError {
    /// A window-manager operation was requested outside a [`WindowManagerProvider`] subtree.
    #[error("window manager context requested outside WindowManagerProvider")]
    MissingContext,
}

#[derive(Clone, Copy)]
/// Leptos context for reading the window registry and requesting lifecycle changes.
pub struct WindowManagerContext {
    /// Reactive registry of every mounted window.
    pub registry: RwSignal<WindowRegistry>,
    /// Tuning applied to every window in this subtree.
    pub config: StoredValue<WindowManagerConfig>,
    /// Observer notified after each lifecycle change.
    pub on_event: Option<Callback<WindowEvent>>,
}

impl WindowManagerContext {
    fn emit(&self, event: WindowEvent) {
        logging::debug_warn!("window manager event: {event:?}");
        if let Some(on_event) = self.on_event.as_ref() {
            on_event.call(event);
        }
    }

    /// Records a newly mounted window on top of the stack and returns its stacking order.
    ///
    /// Registering an id that is already present replaces its record.
    pub fn register(
        &self,
        id: WindowId,
        title: Option<String>,
        on_close: Option<CloseHandler>,
    ) -> u32 {
        let Some(stack_order) = self
            .registry
            .try_update(|registry| registry.register(id.clone(), title, on_close))
        else {
            logging::warn!("window `{id}` registered after the window manager was disposed");
            return self.config.get_value().base_z_index;
        };
        self.emit(WindowEvent::Opened(id));
        stack_order
    }

    /// Forgets a window without running its close handler. Unknown ids are ignored.
    pub fn unregister(&self, id: &WindowId) {
        let removed = self
            .registry
            .try_update(|registry| registry.unregister(id))
            .flatten();
        if removed.is_some() {
            self.emit(WindowEvent::Closed(id.clone()));
        }
    }

    /// Removes a window, then runs its close handler once.
    ///
    /// The handler runs after the registry update has finished, so it may unmount the window
    /// (which unregisters it again as a no-op) without re-entering the signal.
    pub fn close(&self, id: &WindowId) {
        let Some(record) = self
            .registry
            .try_update(|registry| registry.unregister(id))
            .flatten()
        else {
            return;
        };
        record.notify_closed();
        self.emit(WindowEvent::Closed(id.clone()));
    }

    /// Applies a registry action and reports the resulting event, if any.
    pub fn dispatch_action(&self, action: WindowAction) {
        let event = self
            .registry
            .try_update(|registry| registry.apply(action))
            .flatten();
        if let Some(event) = event {
            self.emit(event);
        }
    }

    pub fn focus(&self, id: &WindowId) {
        self.dispatch_action(WindowAction::Focus(id.clone()));
    }

    pub fn minimize(&self, id: &WindowId) {
        self.dispatch_action(WindowAction::Minimize(id.clone()));
    }

    pub fn restore(&self, id: &WindowId) {
        self.dispatch_action(WindowAction::Restore(id.clone()));
    }

    /// Toggles maximization and brings the window to the top.
    pub fn maximize(&self, id: &WindowId) {
        self.dispatch_action(WindowAction::Maximize(id.clone()));
    }

    /// Stacking order for `id`; unknown ids resolve to the base order.
    pub fn z_index(&self, id: &WindowId) -> u32 {
        self.registry.with(|registry| registry.z_index(id))
    }

    pub fn is_focused(&self, id: &WindowId) -> bool {
        self.registry.with(|registry| registry.is_focused(id))
    }

    pub fn is_minimized(&self, id: &WindowId) -> bool {
        self.registry.with(|registry| registry.is_minimized(id))
    }

    pub fn is_maximized(&self, id: &WindowId) -> bool {
        self.registry.with(|registry| registry.is_maximized(id))
    }

    pub fn contains(&self, id: &WindowId) -> bool {
        self.registry.with(|registry| registry.contains(id))
    }

    /// Minimized windows in stacking order, for the taskbar.
    pub fn minimized_windows(&self) -> Vec<Rc<WindowRecord>> {
        self.registry.with(|registry| registry.minimized_windows())
    }
}

#[component]
/// Provides [`WindowManagerContext`] to descendants and renders the minimized-window taskbar.
pub fn WindowManagerProvider(
    /// Registry and spawn tuning; defaults to [`WindowManagerConfig::default`].
    #[prop(optional)]
    config: Option<WindowManagerConfig>,
    /// Observer for open/close/focus/minimize/restore/maximize events.
    #[prop(optional)]
    on_event: Option<Callback<WindowEvent>>,
    children: Children,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let config = match config.validate() {
        Ok(()) => config,
        Err(err) => {
            logging::warn!("window manager config rejected, using defaults: {err}");
            WindowManagerConfig::default()
        }
    };

    let manager = WindowManagerContext {
        registry: create_rw_signal(WindowRegistry::new(config.base_z_index)),
        config: store_value(config),
        on_event,
    };
    provide_context(manager);

    view! {
        {children()}
        <Taskbar />
    }
}

/// Returns the current [`WindowManagerContext`].
///
/// # Panics
///
/// Panics if called outside [`WindowManagerProvider`].
pub fn use_window_manager() -> WindowManagerContext {
    match try_use_window_manager() {
        Ok(manager) => manager,
        Err(err) => panic!("{err}"),
    }
}

/// Returns the current [`WindowManagerContext`], or [`RuntimeError::MissingContext`] outside a
/// provider.
///
/// # Errors
///
/// Returns [`RuntimeError::MissingContext`] when no [`WindowManagerProvider`] is an ancestor.
pub fn try_use_window_manager() -> Result<WindowManagerContext, RuntimeError> {
    use_context::<WindowManagerContext>().ok_or(RuntimeError::MissingContext)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use pretty_assertions::assert_eq;

    use super::*;

    fn with_manager(test: impl FnOnce(WindowManagerContext, Rc<RefCell<Vec<WindowEvent>>>)) {
        let runtime = create_runtime();
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = events.clone();
        let manager = WindowManagerContext {
            registry: create_rw_signal(WindowRegistry::default()),
            config: store_value(WindowManagerConfig::default()),
            on_event: Some(Callback::new(move |event| sink.borrow_mut().push(event))),
        };
        test(manager, events);
        runtime.dispose();
    }

    fn id(value: &str) -> WindowId {
        WindowId::from(value)
    }

    #[test]
    fn lookup_outside_provider_reports_missing_context() {
        let runtime = create_runtime();
        assert_eq!(
            try_use_window_manager().err(),
            Some(RuntimeError::MissingContext)
        );
        runtime.dispose();
    }

    #[test]
    fn lifecycle_calls_emit_events_in_order() {
        with_manager(|manager, events| {
            assert_eq!(manager.register(id("notes"), None, None), 1000);
            manager.minimize(&id("notes"));
            manager.restore(&id("notes"));
            manager.maximize(&id("notes"));
            manager.maximize(&id("notes"));
            manager.unregister(&id("notes"));
            manager.unregister(&id("notes"));

            assert_eq!(
                *events.borrow(),
                vec![
                    WindowEvent::Opened(id("notes")),
                    WindowEvent::Minimized(id("notes")),
                    WindowEvent::Restored(id("notes")),
                    WindowEvent::Maximized(id("notes")),
                    WindowEvent::Unmaximized(id("notes")),
                    WindowEvent::Closed(id("notes")),
                ]
            );
        });
    }

    #[test]
    fn only_the_maximize_control_changes_maximized_state() {
        with_manager(|manager, events| {
            manager.register(id("notes"), None, None);
            manager.register(id("editor"), None, None);

            manager.focus(&id("notes"));
            manager.dispatch_action(WindowAction::ToggleMinimize(id("notes")));
            manager.dispatch_action(WindowAction::ToggleMinimize(id("notes")));
            assert!(!manager.is_maximized(&id("notes")));

            manager.maximize(&id("notes"));
            assert!(manager.is_maximized(&id("notes")));
            manager.maximize(&id("notes"));
            assert!(!manager.is_maximized(&id("notes")));

            let toggles: Vec<_> = events
                .borrow()
                .iter()
                .filter(|event| {
                    matches!(
                        event,
                        WindowEvent::Maximized(_) | WindowEvent::Unmaximized(_)
                    )
                })
                .cloned()
                .collect();
            assert_eq!(
                toggles,
                vec![
                    WindowEvent::Maximized(id("notes")),
                    WindowEvent::Unmaximized(id("notes")),
                ]
            );
        });
    }

    #[test]
    fn close_handler_may_unregister_the_same_window() {
        with_manager(|manager, events| {
            let calls = Rc::new(RefCell::new(0));
            let handler: CloseHandler = {
                let calls = calls.clone();
                Rc::new(move || {
                    *calls.borrow_mut() += 1;
                    manager.unregister(&id("editor"));
                })
            };
            manager.register(id("editor"), Some("Editor".into()), Some(handler));

            manager.close(&id("editor"));
            manager.close(&id("editor"));

            assert_eq!(*calls.borrow(), 1);
            assert!(!manager.contains(&id("editor")));
            assert_eq!(
                events.borrow().last(),
                Some(&WindowEvent::Closed(id("editor")))
            );
            assert_eq!(
                events
                    .borrow()
                    .iter()
                    .filter(|event| matches!(event, WindowEvent::Closed(_)))
                    .count(),
                1
            );
        });
    }

    #[test]
    fn queries_on_unknown_ids_fall_back() {
        with_manager(|manager, events| {
            manager.focus(&id("ghost"));
            manager.close(&id("ghost"));

            assert_eq!(manager.z_index(&id("ghost")), 1000);
            assert!(!manager.is_focused(&id("ghost")));
            assert!(!manager.is_minimized(&id("ghost")));
            assert!(events.borrow().is_empty());
        });
    }

    #[test]
    fn minimized_windows_feed_the_taskbar() {
        with_manager(|manager, _| {
            manager.register(id("a"), Some("Alpha".into()), None);
            manager.register(id("b"), None, None);
            manager.minimize(&id("b"));
            manager.minimize(&id("a"));

            let titles: Vec<_> = manager
                .minimized_windows()
                .iter()
                .map(|record| record.display_title().to_string())
                .collect();
            assert_eq!(titles, vec!["Alpha".to_string(), "Window".to_string()]);
            assert!(!manager.is_focused(&id("a")));
        });
    }
}
