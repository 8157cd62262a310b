//! `setTimeout`-backed scheduler for the spin engine.

use crate::dom;
use slotdoors_engine::{SpinEvent, SpinScheduler};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

type Dispatch = Rc<dyn Fn(SpinEvent)>;

/// Delivers scheduled [`SpinEvent`]s back into the machine via browser
/// timers. The dispatch callback is installed after the machine exists, so
/// the scheduler can be handed to the machine's constructor first; clones
/// share the same dispatch slot.
#[derive(Clone, Default)]
pub struct TimeoutScheduler {
    dispatch: Rc<RefCell<Option<Dispatch>>>,
}

impl TimeoutScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the callback timer firings are delivered into. Events that
    /// fire before this is called are dropped.
    pub fn set_dispatch(&self, dispatch: Dispatch) {
        *self.dispatch.borrow_mut() = Some(dispatch);
    }
}

impl SpinScheduler for TimeoutScheduler {
    fn schedule(&mut self, delay_ms: f64, event: SpinEvent) {
        let slot = self.dispatch.clone();
        let closure = Closure::once(move || {
            let dispatch = slot.borrow().clone();
            if let Some(dispatch) = dispatch {
                dispatch(event);
            }
        });
        let scheduled = dom::window().set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            delay_ms.round() as i32,
        );
        if let Err(err) = scheduled {
            dom::console_error(&format!(
                "failed to schedule spin timer: {}",
                dom::js_error_message(&err)
            ));
        }
        closure.forget();
    }
}
