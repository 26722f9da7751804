use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use leptos::{leptos_dom::helpers::AnimationFrameRequestHandle, logging};

use super::now_ms;

#[derive(Default)]
struct FrameTaskState {
    cancelled: Cell<bool>,
    pending: RefCell<Option<AnimationFrameRequestHandle>>,
}

/// Cancellable animation-frame loop.
///
/// [`FrameTask::run`] calls its step once per display refresh with the current frame time until
/// the step returns `false` or [`FrameTask::cancel`] is called. Cancelling also drops the frame
/// request that is already queued, so no step runs after the owning component is cleaned up.
#[derive(Clone, Default)]
pub struct FrameTask {
    state: Rc<FrameTaskState>,
}

impl FrameTask {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_cancelled(&self) -> bool {
        self.state.cancelled.get()
    }

    pub fn cancel(&self) {
        self.state.cancelled.set(true);
        if let Some(handle) = self.state.pending.borrow_mut().take() {
            handle.cancel();
        }
    }

    pub fn run(&self, step: impl Fn(f64) -> bool + 'static) {
        schedule(self.clone(), Rc::new(step));
    }
}

fn schedule(task: FrameTask, step: Rc<dyn Fn(f64) -> bool>) {
    if task.is_cancelled() {
        return;
    }

    let next = task.clone();
    let request = leptos::request_animation_frame_with_handle(move || {
        next.state.pending.borrow_mut().take();
        if next.is_cancelled() {
            return;
        }
        if step(now_ms()) {
            schedule(next, step);
        }
    });

    match request {
        Ok(handle) => {
            *task.state.pending.borrow_mut() = Some(handle);
        }
        Err(err) => logging::warn!("animation frame request failed: {err:?}"),
    }
}
