//! Startup sequence: fetch the reel document, build the machine, and wire
//! timer deliveries back into it.

use crate::dom;
use crate::sched::TimeoutScheduler;
use crate::target::DomRenderTarget;
use slotdoors_engine::{LoadError, ReelSet, SlotMachine, SpinConfig};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::Element;

pub const SLOTS_URL: &str = "/slots.json";

pub type WebMachine = SlotMachine<DomRenderTarget, TimeoutScheduler>;

/// Shared handle the page keeps on the machine; `None` until boot finishes.
pub type MachineSlot = Rc<RefCell<Option<WebMachine>>>;

/// Fetch and parse the reel-definition document.
///
/// # Errors
/// Returns an error if the document is unreachable, unparsable, or holds no
/// reels. There is no fallback reel set.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn load_reel_set() -> Result<ReelSet, LoadError> {
    let json = dom::fetch_text(SLOTS_URL)
        .await
        .map_err(|err| LoadError::Fetch(dom::js_error_message(&err)))?;
    ReelSet::from_json(&json)
}

/// Seed for this page's spin streams. Plain timer-and-`Math.random`
/// entropy; fairness here is presentational, not cryptographic.
#[must_use]
pub fn entropy_seed() -> u64 {
    let millis = js_sys::Date::now() as u64;
    let noise = (js_sys::Math::random() * f64::from(u32::MAX)) as u64;
    millis ^ (noise << 32)
}

/// Load the reels, build the machine into `slot`, and point timer
/// deliveries at it.
///
/// # Errors
/// Returns load or normalization failures as display strings for the boot
/// panel; nothing is rendered into `root` on failure.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn boot(root: Element, slot: MachineSlot) -> Result<(), String> {
    let reels = load_reel_set().await.map_err(|err| err.to_string())?;
    let cfg = SpinConfig::default();
    let scheduler = TimeoutScheduler::new();
    let timers = scheduler.clone();
    let target = DomRenderTarget::mount(root, cfg.box_height);
    let machine =
        SlotMachine::new(reels, cfg, target, scheduler, entropy_seed()).map_err(|err| err.to_string())?;
    slot.replace(Some(machine));

    // The machine lives as long as the page; the timer->slot cycle is fine.
    let deliveries = Rc::clone(&slot);
    timers.set_dispatch(Rc::new(move |event| {
        if let Some(machine) = deliveries.borrow_mut().as_mut() {
            machine.handle_timer(event);
        }
    }));
    Ok(())
}
