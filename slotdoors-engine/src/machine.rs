//! The spin state machine.
//!
//! A [`SlotMachine`] cycles between `Idle` and `Spinning` under user
//! triggers. It issues render commands synchronously and never blocks on an
//! animation: timing comes back to it as [`SpinEvent`]s through whatever
//! [`SpinScheduler`] the platform supplies. Everything happens on one
//! thread; the `is_spinning` check-then-set in [`SlotMachine::spin`] is the
//! sole re-entrancy guard.

use crate::config::SpinConfig;
use crate::data::{Reel, ReelSet, Symbol};
use crate::normalize::{NormalizeError, normalize_reel_lengths};
use crate::render::{Door, Motion, RenderTarget};
use crate::rng::SpinRng;
use crate::shuffle::{pick_winner, shuffle_window};

/// Where the controller is in its trigger -> animate -> settle cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinPhase {
    Idle,
    Spinning,
}

/// Timer deliveries the controller requests from its scheduler. The index
/// is the door the event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinEvent {
    /// Apply the mid-spin motion blur to the door's boxes.
    BlurOn(usize),
    /// Remove the mid-spin motion blur.
    BlurOff(usize),
    /// The door's animation has run its full duration.
    Settle(usize),
}

/// Scheduler seam: deliver `event` back through
/// [`SlotMachine::handle_timer`] once `delay_ms` has elapsed. The web shell
/// backs this with `setTimeout`; tests use a recording fake.
pub trait SpinScheduler {
    fn schedule(&mut self, delay_ms: f64, event: SpinEvent);
}

/// The slot-machine engine: normalized reels, per-door rendered state, and
/// the spin state machine. Constructed once at startup; no ambient globals.
pub struct SlotMachine<T: RenderTarget, S: SpinScheduler> {
    cfg: SpinConfig,
    reels: ReelSet,
    rng: SpinRng,
    doors: Vec<Door>,
    target: T,
    scheduler: S,
    is_spinning: bool,
    has_spun: bool,
    pending_settles: usize,
}

impl<T: RenderTarget, S: SpinScheduler> SlotMachine<T, S> {
    /// Normalize the reel set, materialize one door per reel with a fresh
    /// window, and park every door out of view. The machine starts `Idle`
    /// with no spin recorded.
    ///
    /// # Errors
    ///
    /// Returns an error if any reel fails length normalization; nothing is
    /// rendered in that case.
    pub fn new(
        mut reels: ReelSet,
        cfg: SpinConfig,
        mut target: T,
        scheduler: S,
        seed: u64,
    ) -> Result<Self, NormalizeError> {
        normalize_reel_lengths(&mut reels, &cfg)?;
        let mut rng = SpinRng::from_seed(seed);
        let mut doors = Vec::with_capacity(reels.len());
        for (index, reel) in reels.reels.iter().enumerate() {
            let window = draw_window(reel, cfg.spin_size, &mut rng);
            doors.push(Door::build(&mut target, &cfg, index, window));
        }
        log::info!(
            "slot machine ready: {} doors, {} boxes each",
            doors.len(),
            cfg.spin_size
        );
        Ok(Self {
            cfg,
            reels,
            rng,
            doors,
            target,
            scheduler,
            is_spinning: false,
            has_spun: false,
            pending_settles: 0,
        })
    }

    /// Trigger a spin. A no-op while a spin is already in flight.
    ///
    /// On the first spin the doors still hold their freshly built windows;
    /// on every later spin each door is recycled with a new window first.
    /// Either way every door is reset to `-container_height` and animated
    /// to `+container_height`, with blur and settle timers scheduled
    /// against the configured duration.
    pub fn spin(&mut self) {
        if self.is_spinning || self.doors.is_empty() {
            return;
        }
        if self.has_spun {
            for index in 0..self.doors.len() {
                let window = draw_window(
                    &self.reels.reels[index],
                    self.cfg.spin_size,
                    &mut self.rng,
                );
                self.doors[index].recycle(&mut self.target, &self.cfg, window);
            }
        } else {
            self.has_spun = true;
        }
        self.is_spinning = true;
        self.pending_settles = self.doors.len();

        let height = self.cfg.container_height();
        let duration = self.cfg.spin_duration_ms;
        log::debug!("spinning {} doors over {duration}ms", self.doors.len());
        for (index, door) in self.doors.iter().enumerate() {
            self.target.set_offset(door.id(), -height, Motion::Instant);
            self.target
                .set_offset(door.id(), height, Motion::Animate { duration_ms: duration });
            self.scheduler
                .schedule(self.cfg.blur_on_delay_ms(), SpinEvent::BlurOn(index));
            self.scheduler
                .schedule(self.cfg.blur_off_delay_ms(), SpinEvent::BlurOff(index));
            self.scheduler.schedule(duration, SpinEvent::Settle(index));
        }
    }

    /// Entry point for scheduled timer deliveries. The spin returns to
    /// `Idle` once the last door's `Settle` arrives.
    pub fn handle_timer(&mut self, event: SpinEvent) {
        match event {
            SpinEvent::BlurOn(index) => {
                if self.is_spinning
                    && let Some(door) = self.doors.get(index)
                {
                    self.target.set_blur(door.id(), true);
                }
            }
            SpinEvent::BlurOff(index) => {
                if let Some(door) = self.doors.get(index) {
                    self.target.set_blur(door.id(), false);
                }
            }
            SpinEvent::Settle(index) => {
                if let Some(door) = self.doors.get(index) {
                    self.target.set_blur(door.id(), false);
                }
                if self.pending_settles > 0 {
                    self.pending_settles -= 1;
                    if self.pending_settles == 0 {
                        self.is_spinning = false;
                        log::debug!("all doors settled");
                    }
                }
            }
        }
    }

    #[must_use]
    pub const fn phase(&self) -> SpinPhase {
        if self.is_spinning {
            SpinPhase::Spinning
        } else {
            SpinPhase::Idle
        }
    }

    #[must_use]
    pub const fn is_spinning(&self) -> bool {
        self.is_spinning
    }

    #[must_use]
    pub const fn has_spun(&self) -> bool {
        self.has_spun
    }

    /// The symbol currently destined to settle in view, per door.
    #[must_use]
    pub fn winners(&self) -> Vec<Symbol> {
        self.doors.iter().map(|door| door.winner().clone()).collect()
    }

    #[must_use]
    pub fn doors(&self) -> &[Door] {
        &self.doors
    }

    #[must_use]
    pub const fn config(&self) -> &SpinConfig {
        &self.cfg
    }
}

/// Compose the rendered window for one spin: shuffle a truncated copy of
/// the reel, then splice the independently drawn winner into index 0 so it
/// is the box that settles in view.
fn draw_window(reel: &Reel, spin_size: usize, rng: &mut SpinRng) -> Vec<Symbol> {
    let mut window = shuffle_window(reel, spin_size, rng.window());
    if let (Some(settled), Some(winner)) = (window.first_mut(), pick_winner(reel, rng.outcome())) {
        *settled = winner;
    }
    window
}
