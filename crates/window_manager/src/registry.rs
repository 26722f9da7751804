//! Authoritative store of window stacking, focus, and visibility metadata.
//!
//! The registry owns no geometry. Every mutation swaps in a fresh `Rc<WindowRecord>` instead of
//! editing a record in place, so observers comparing records with [`Rc::ptr_eq`] see each change.
//! Operations that reference an unknown id are silent no-ops: a window can unmount while another
//! caller still holds its id.

use std::{collections::BTreeMap, rc::Rc};

use crate::model::{CloseHandler, WindowEvent, WindowId, WindowRecord, DEFAULT_BASE_Z_INDEX};

/// Registry transitions that can be dispatched by id from launchers, chrome, or the taskbar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowAction {
    /// Raise a window and give it focus.
    Focus(WindowId),
    /// Hide a window into the taskbar.
    Minimize(WindowId),
    /// Show a minimized or maximized window at its own geometry and raise it.
    Restore(WindowId),
    /// Toggle full-viewport bounds.
    Maximize(WindowId),
    /// Minimize a visible window, restore a minimized one.
    ToggleMinimize(WindowId),
}

#[derive(Debug, Clone)]
pub struct WindowRegistry {
    base_z_index: u32,
    next_stack_order: u32,
    windows: BTreeMap<WindowId, Rc<WindowRecord>>,
    focused: Option<WindowId>,
}

impl Default for WindowRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_Z_INDEX)
    }
}

impl WindowRegistry {
    /// Creates an empty registry whose first window is stacked at `base_z_index`.
    pub fn new(base_z_index: u32) -> Self {
        Self {
            base_z_index,
            next_stack_order: base_z_index,
            windows: BTreeMap::new(),
            focused: None,
        }
    }

    pub fn base_z_index(&self) -> u32 {
        self.base_z_index
    }

    /// Creates or replaces the record for `id` on top of the stack and focuses it.
    ///
    /// Returns the stack order assigned to the window.
    pub fn register(
        &mut self,
        id: WindowId,
        title: Option<String>,
        on_close: Option<CloseHandler>,
    ) -> u32 {
        let stack_order = self.take_stack_order();
        let record = WindowRecord {
            id: id.clone(),
            stack_order,
            title,
            minimized: false,
            maximized: false,
            on_close,
        };
        self.windows.insert(id.clone(), Rc::new(record));
        self.focused = Some(id);
        stack_order
    }

    /// Removes the record for `id`, clearing focus if it held it.
    ///
    /// Returns the removed record so callers can run its close handler outside their own
    /// borrow of the registry.
    pub fn unregister(&mut self, id: &WindowId) -> Option<Rc<WindowRecord>> {
        let removed = self.windows.remove(id)?;
        if self.focused.as_ref() == Some(id) {
            self.focused = None;
        }
        Some(removed)
    }

    /// Removes the record for `id`, then runs its close handler.
    ///
    /// The record is gone before the handler runs, so a repeated close is a no-op and the
    /// handler fires at most once.
    pub fn close(&mut self, id: &WindowId) -> bool {
        match self.unregister(id) {
            Some(record) => {
                record.notify_closed();
                true
            }
            None => false,
        }
    }

    pub fn minimize(&mut self, id: &WindowId) -> bool {
        let applied = self.replace(id, |record| WindowRecord {
            minimized: true,
            ..record.clone()
        });
        if applied && self.focused.as_ref() == Some(id) {
            self.focused = None;
        }
        applied
    }

    pub fn restore(&mut self, id: &WindowId) -> bool {
        if !self.contains(id) {
            return false;
        }
        let stack_order = self.take_stack_order();
        self.replace(id, |record| WindowRecord {
            stack_order,
            minimized: false,
            maximized: false,
            ..record.clone()
        });
        self.focused = Some(id.clone());
        true
    }

    /// Toggles the maximized flag. Always un-minimizes, raises, and focuses the window.
    pub fn maximize(&mut self, id: &WindowId) -> bool {
        if !self.contains(id) {
            return false;
        }
        let stack_order = self.take_stack_order();
        self.replace(id, |record| WindowRecord {
            stack_order,
            minimized: false,
            maximized: !record.maximized,
            ..record.clone()
        });
        self.focused = Some(id.clone());
        true
    }

    pub fn focus(&mut self, id: &WindowId) -> bool {
        if !self.contains(id) {
            return false;
        }
        let stack_order = self.take_stack_order();
        self.replace(id, |record| WindowRecord {
            stack_order,
            ..record.clone()
        });
        self.focused = Some(id.clone());
        true
    }

    /// Applies a [`WindowAction`] and reports the resulting lifecycle event.
    ///
    /// Returns `None` when the action references a window that is no longer registered.
    pub fn apply(&mut self, action: WindowAction) -> Option<WindowEvent> {
        match action {
            WindowAction::Focus(id) => self.focus(&id).then_some(WindowEvent::Focused(id)),
            WindowAction::Minimize(id) => {
                self.minimize(&id).then_some(WindowEvent::Minimized(id))
            }
            WindowAction::Restore(id) => self.restore(&id).then_some(WindowEvent::Restored(id)),
            WindowAction::Maximize(id) => {
                if !self.maximize(&id) {
                    return None;
                }
                if self.is_maximized(&id) {
                    Some(WindowEvent::Maximized(id))
                } else {
                    Some(WindowEvent::Unmaximized(id))
                }
            }
            WindowAction::ToggleMinimize(id) => {
                if self.is_minimized(&id) {
                    self.apply(WindowAction::Restore(id))
                } else {
                    self.apply(WindowAction::Minimize(id))
                }
            }
        }
    }

    /// Stack order for `id`, or the base z-index when it is not registered.
    pub fn z_index(&self, id: &WindowId) -> u32 {
        self.windows
            .get(id)
            .map(|record| record.stack_order)
            .unwrap_or(self.base_z_index)
    }

    pub fn focused_id(&self) -> Option<&WindowId> {
        self.focused.as_ref()
    }

    pub fn is_focused(&self, id: &WindowId) -> bool {
        self.focused.as_ref() == Some(id)
    }

    pub fn is_minimized(&self, id: &WindowId) -> bool {
        self.windows
            .get(id)
            .map(|record| record.minimized)
            .unwrap_or(false)
    }

    pub fn is_maximized(&self, id: &WindowId) -> bool {
        self.windows
            .get(id)
            .map(|record| record.maximized)
            .unwrap_or(false)
    }

    pub fn contains(&self, id: &WindowId) -> bool {
        self.windows.contains_key(id)
    }

    pub fn get(&self, id: &WindowId) -> Option<Rc<WindowRecord>> {
        self.windows.get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// All records, bottom of the stack first.
    pub fn windows(&self) -> Vec<Rc<WindowRecord>> {
        let mut windows: Vec<Rc<WindowRecord>> = self.windows.values().cloned().collect();
        windows.sort_by_key(|record| record.stack_order);
        windows
    }

    /// Records currently hidden in the taskbar, bottom of the stack first.
    pub fn minimized_windows(&self) -> Vec<Rc<WindowRecord>> {
        self.windows()
            .into_iter()
            .filter(|record| record.minimized)
            .collect()
    }

    fn take_stack_order(&mut self) -> u32 {
        let stack_order = self.next_stack_order;
        self.next_stack_order = self.next_stack_order.saturating_add(1);
        stack_order
    }

    fn replace(
        &mut self,
        id: &WindowId,
        update: impl FnOnce(&WindowRecord) -> WindowRecord,
    ) -> bool {
        let Some(current) = self.windows.get(id) else {
            return false;
        };
        let updated = update(current);
        self.windows.insert(id.clone(), Rc::new(updated));
        true
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use pretty_assertions::assert_eq;

    use super::*;

    fn id(value: &str) -> WindowId {
        WindowId::from(value)
    }

    #[test]
    fn register_focuses_new_window_and_stacks_from_base() {
        let mut registry = WindowRegistry::new(1000);

        let first = registry.register(id("calculator"), Some("Calculator".into()), None);
        let second = registry.register(id("editor"), None, None);

        assert_eq!(first, 1000);
        assert_eq!(second, 1001);
        assert_eq!(registry.focused_id(), Some(&id("editor")));
        assert_eq!(registry.z_index(&id("calculator")), 1000);
        assert_eq!(registry.z_index(&id("missing")), 1000);
    }

    #[test]
    fn re_registering_replaces_record_with_fresh_order() {
        let mut registry = WindowRegistry::default();
        registry.register(id("a"), Some("Old".into()), None);
        registry.minimize(&id("a"));

        let order = registry.register(id("a"), Some("New".into()), None);
        let record = registry.get(&id("a")).expect("record");

        assert_eq!(registry.len(), 1);
        assert_eq!(record.stack_order, order);
        assert_eq!(record.title.as_deref(), Some("New"));
        assert!(!record.minimized);
    }

    #[test]
    fn maximize_toggles_and_clears_minimized() {
        let mut registry = WindowRegistry::default();
        registry.register(id("a"), None, None);
        registry.minimize(&id("a"));

        assert!(registry.maximize(&id("a")));
        assert!(registry.is_maximized(&id("a")));
        assert!(!registry.is_minimized(&id("a")));
        assert!(registry.is_focused(&id("a")));

        registry.maximize(&id("a"));
        assert!(!registry.is_maximized(&id("a")));
    }

    #[test]
    fn restore_clears_both_flags_and_raises() {
        let mut registry = WindowRegistry::default();
        registry.register(id("a"), None, None);
        registry.register(id("b"), None, None);
        registry.maximize(&id("a"));
        registry.minimize(&id("a"));
        let before = registry.z_index(&id("a"));

        assert!(registry.restore(&id("a")));

        assert!(!registry.is_minimized(&id("a")));
        assert!(!registry.is_maximized(&id("a")));
        assert!(registry.z_index(&id("a")) > before);
        assert_eq!(registry.focused_id(), Some(&id("a")));
    }

    #[test]
    fn minimizing_unfocused_window_keeps_current_focus() {
        let mut registry = WindowRegistry::default();
        registry.register(id("a"), None, None);
        registry.register(id("b"), None, None);

        registry.minimize(&id("a"));

        assert_eq!(registry.focused_id(), Some(&id("b")));
    }

    #[test]
    fn mutations_on_unknown_ids_are_noops() {
        let mut registry = WindowRegistry::default();
        registry.register(id("a"), None, None);
        let before = registry.windows();

        assert!(!registry.focus(&id("ghost")));
        assert!(!registry.minimize(&id("ghost")));
        assert!(!registry.restore(&id("ghost")));
        assert!(!registry.maximize(&id("ghost")));
        assert!(!registry.close(&id("ghost")));
        assert!(registry.unregister(&id("ghost")).is_none());
        assert_eq!(registry.apply(WindowAction::Focus(id("ghost"))), None);

        assert_eq!(registry.windows(), before);
        assert_eq!(registry.focused_id(), Some(&id("a")));
    }

    #[test]
    fn mutations_replace_records_instead_of_editing_in_place() {
        let mut registry = WindowRegistry::default();
        registry.register(id("a"), None, None);
        registry.register(id("b"), None, None);
        let a_before = registry.get(&id("a")).expect("a");
        let b_before = registry.get(&id("b")).expect("b");

        registry.minimize(&id("a"));

        let a_after = registry.get(&id("a")).expect("a");
        let b_after = registry.get(&id("b")).expect("b");
        assert!(!Rc::ptr_eq(&a_before, &a_after));
        assert!(Rc::ptr_eq(&b_before, &b_after));
        assert!(!a_before.minimized);
    }

    #[test]
    fn apply_reports_lifecycle_events() {
        let mut registry = WindowRegistry::default();
        registry.register(id("a"), None, None);

        assert_eq!(
            registry.apply(WindowAction::Maximize(id("a"))),
            Some(WindowEvent::Maximized(id("a")))
        );
        assert_eq!(
            registry.apply(WindowAction::Maximize(id("a"))),
            Some(WindowEvent::Unmaximized(id("a")))
        );
        assert_eq!(
            registry.apply(WindowAction::ToggleMinimize(id("a"))),
            Some(WindowEvent::Minimized(id("a")))
        );
        assert_eq!(
            registry.apply(WindowAction::ToggleMinimize(id("a"))),
            Some(WindowEvent::Restored(id("a")))
        );
        assert_eq!(
            registry.apply(WindowAction::Focus(id("a"))),
            Some(WindowEvent::Focused(id("a")))
        );
    }

    #[test]
    fn close_runs_handler_and_forgets_window() {
        let mut registry = WindowRegistry::default();
        let calls = Rc::new(Cell::new(0));
        let handler: CloseHandler = {
            let calls = calls.clone();
            Rc::new(move || calls.set(calls.get() + 1))
        };
        registry.register(id("a"), None, Some(handler));

        assert!(registry.close(&id("a")));

        assert_eq!(calls.get(), 1);
        assert!(registry.is_empty());
        assert_eq!(registry.focused_id(), None);
    }

    #[test]
    fn minimized_windows_follow_stack_order() {
        let mut registry = WindowRegistry::default();
        registry.register(id("a"), None, None);
        registry.register(id("b"), None, None);
        registry.register(id("c"), None, None);
        registry.minimize(&id("c"));
        registry.minimize(&id("a"));
        registry.focus(&id("a"));

        let minimized: Vec<WindowId> = registry
            .minimized_windows()
            .iter()
            .map(|record| record.id.clone())
            .collect();

        assert_eq!(minimized, vec![id("c"), id("a")]);
    }
}
