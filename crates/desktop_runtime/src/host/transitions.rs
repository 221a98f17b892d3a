//! Timers that complete minimize/restore presentation transitions.

use std::{cell::RefCell, collections::HashMap, rc::Rc, time::Duration};

use leptos::{
    leptos_dom::helpers::TimeoutHandle, logging, set_timeout_with_handle, Callable, Callback,
};

use crate::{host::DesktopHostContext, model::WindowId, reducer::DesktopAction};

#[derive(Clone, Default)]
/// Pending transition timers keyed by transition token.
pub(super) struct TransitionTimers {
    pending: Rc<RefCell<HashMap<u64, TimeoutHandle>>>,
}

impl TransitionTimers {
    pub(super) fn schedule(
        &self,
        host: DesktopHostContext,
        dispatch: Callback<DesktopAction>,
        window_id: WindowId,
        token: u64,
        delay_ms: u32,
    ) {
        let pending = self.pending.clone();
        let fire = move || {
            pending.borrow_mut().remove(&token);
            if host.is_active() {
                dispatch.call(DesktopAction::CompleteTransition { window_id, token });
            }
        };
        match set_timeout_with_handle(fire, Duration::from_millis(u64::from(delay_ms))) {
            Ok(handle) => {
                self.pending.borrow_mut().insert(token, handle);
            }
            Err(err) => logging::warn!("schedule transition timer failed: {err:?}"),
        }
    }

    pub(super) fn clear_all(&self) {
        for (_, handle) in self.pending.borrow_mut().drain() {
            handle.clear();
        }
    }
}
