//! Slotdoors Engine
//!
//! Platform-agnostic reel-state and spin-animation engine for the slotdoors
//! widget. This crate owns the reel data model, length normalization, the
//! shuffle/outcome selection, door rendering over an abstract render target,
//! and the spin state machine driven by an abstract scheduler. It has no
//! DOM or platform-specific dependencies; the web shell supplies those.

pub mod config;
pub mod data;
pub mod machine;
pub mod normalize;
pub mod render;
pub mod rng;
pub mod shuffle;

#[cfg(test)]
pub(crate) mod testkit;

// Re-export commonly used types
pub use config::SpinConfig;
pub use data::{LoadError, Reel, ReelSet, Symbol};
pub use machine::{SlotMachine, SpinEvent, SpinPhase, SpinScheduler};
pub use normalize::{NormalizeError, normalize_reel_lengths};
pub use render::{Door, DoorId, Motion, RenderTarget};
pub use rng::SpinRng;
pub use shuffle::{pick_winner, shuffle_window};
