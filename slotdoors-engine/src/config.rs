//! Geometry and timing tunables for the spin engine.
use serde::{Deserialize, Serialize};

/// Configuration for door geometry and spin timing.
///
/// The defaults reproduce the shipped widget: 30 boxes per door, 105px
/// boxes, a 1750ms spin, and a motion blur applied between 10% and 90% of
/// the spin duration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpinConfig {
    /// Number of boxes rendered per door per spin.
    pub spin_size: usize,
    /// Height of one box in pixels.
    pub box_height: f64,
    /// Duration of the spin animation in milliseconds.
    pub spin_duration_ms: f64,
    /// Upper bound on padding appends per reel during normalization.
    pub failsafe_padding: usize,
    /// Fraction of the spin duration after which the blur is applied.
    pub blur_on_frac: f64,
    /// Fraction of the spin duration after which the blur is removed.
    pub blur_off_frac: f64,
}

impl Default for SpinConfig {
    fn default() -> Self {
        Self {
            spin_size: 30,
            box_height: 105.0,
            spin_duration_ms: 1750.0,
            failsafe_padding: 1000,
            blur_on_frac: 0.1,
            blur_off_frac: 0.9,
        }
    }
}

impl SpinConfig {
    /// Vertical travel of a door's box stack, in pixels. Doors rest at
    /// `-container_height()` and animate to `+container_height()`.
    ///
    /// Even spin sizes settle half a box too low without the nudge.
    #[must_use]
    pub fn container_height(&self) -> f64 {
        let half_count = (self.spin_size / 2) as f64;
        let parity_nudge = if self.spin_size.is_multiple_of(2) {
            self.box_height / 2.0
        } else {
            0.0
        };
        self.box_height * half_count - parity_nudge
    }

    /// Delay before the mid-spin blur is applied, in milliseconds.
    #[must_use]
    pub fn blur_on_delay_ms(&self) -> f64 {
        self.spin_duration_ms * self.blur_on_frac
    }

    /// Delay before the mid-spin blur is removed, in milliseconds.
    #[must_use]
    pub fn blur_off_delay_ms(&self) -> f64 {
        self.spin_duration_ms * self.blur_off_frac
    }
}
