//! Door rendering over an abstract render target.
//!
//! The engine never touches a real DOM. It drives a [`RenderTarget`]: the
//! web shell implements it with elements and CSS transforms, tests with a
//! recording fake.

use crate::config::SpinConfig;
use crate::data::Symbol;

/// Handle for one door's scrolling box stack on the render surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DoorId(pub usize);

/// How an offset change is applied to a door's box stack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    /// Jump immediately, with no transition.
    Instant,
    /// Animate over the given duration.
    Animate { duration_ms: f64 },
}

/// Surface the engine renders onto.
///
/// Implementations own the actual visual elements; the engine only ever
/// addresses doors through the [`DoorId`] handles this trait hands out.
pub trait RenderTarget {
    /// Materialize the door with the given index and return its handle.
    fn create_door(&mut self, index: usize) -> DoorId;

    /// Replace the door's box stack with one fixed-height box per symbol.
    fn set_boxes(&mut self, door: DoorId, symbols: &[Symbol]);

    /// Move the door's box stack to a vertical offset in pixels.
    fn set_offset(&mut self, door: DoorId, y_px: f64, motion: Motion);

    /// Apply or remove the mid-spin motion blur on the door's boxes.
    fn set_blur(&mut self, door: DoorId, blurred: bool);
}

/// One reel's rendered state: its box stack and the symbol that settles in
/// view when the current spin ends. Owned exclusively by the engine; the
/// controller only ever moves the whole stack via its offset.
#[derive(Debug, Clone)]
pub struct Door {
    id: DoorId,
    boxes: Vec<Symbol>,
    winner: Symbol,
}

impl Door {
    /// Materialize a door holding `window` and park its stack fully
    /// scrolled out of view at `-container_height`. The window's first
    /// element is the box that will settle in view.
    pub fn build(
        target: &mut impl RenderTarget,
        cfg: &SpinConfig,
        index: usize,
        window: Vec<Symbol>,
    ) -> Self {
        let id = target.create_door(index);
        target.set_boxes(id, &window);
        target.set_offset(id, -cfg.container_height(), Motion::Instant);
        let winner = window.first().cloned().unwrap_or_default();
        Self {
            id,
            boxes: window,
            winner,
        }
    }

    /// Swap in a fresh window between spins. The fresh window's last
    /// element is dropped and the previous winner's symbol appended in its
    /// place, so the symbol that settled last spin is the first to scroll
    /// back in. Resets the stack offset instantly.
    pub fn recycle(
        &mut self,
        target: &mut impl RenderTarget,
        cfg: &SpinConfig,
        mut window: Vec<Symbol>,
    ) {
        window.pop();
        window.push(self.winner.clone());
        target.set_boxes(self.id, &window);
        target.set_offset(self.id, -cfg.container_height(), Motion::Instant);
        self.winner = window.first().cloned().unwrap_or_default();
        self.boxes = window;
    }

    #[must_use]
    pub const fn id(&self) -> DoorId {
        self.id
    }

    /// The symbol destined to settle in view after the current spin.
    #[must_use]
    pub fn winner(&self) -> &Symbol {
        &self.winner
    }

    #[must_use]
    pub fn boxes(&self) -> &[Symbol] {
        &self.boxes
    }

    #[must_use]
    pub fn box_count(&self) -> usize {
        self.boxes.len()
    }
}
