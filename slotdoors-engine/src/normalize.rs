//! Reel length normalization.
//!
//! Every reel must hold at least `spin_size` symbols before it can be spun;
//! short reels are padded by repeating their own content cyclically from
//! index 0. Runs exactly once, before any rendering.

use crate::config::SpinConfig;
use crate::data::ReelSet;
use thiserror::Error;

/// Fatal configuration failure during normalization. Halts initialization;
/// no partial rendering occurs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("reel {index} has no symbols")]
    EmptyReel { index: usize },
    #[error("reel {index} needed more than {limit} padding appends to reach {target} symbols")]
    PaddingOverflow {
        index: usize,
        limit: usize,
        target: usize,
    },
}

/// Pad every reel below `spin_size` up to at least `spin_size` symbols.
/// Idempotent: reels already long enough are left untouched.
///
/// # Errors
///
/// Returns an error for a zero-length reel, or when a reel would need more
/// than `failsafe_padding` appends to reach `spin_size`.
pub fn normalize_reel_lengths(set: &mut ReelSet, cfg: &SpinConfig) -> Result<(), NormalizeError> {
    for (index, reel) in set.reels.iter_mut().enumerate() {
        if reel.symbols.is_empty() {
            return Err(NormalizeError::EmptyReel { index });
        }
        let original_len = reel.symbols.len();
        let mut appended = 0usize;
        while reel.symbols.len() < cfg.spin_size {
            if appended >= cfg.failsafe_padding {
                return Err(NormalizeError::PaddingOverflow {
                    index,
                    limit: cfg.failsafe_padding,
                    target: cfg.spin_size,
                });
            }
            // Reading the growing vec repeats the original content cyclically.
            let next = reel.symbols[appended].clone();
            reel.symbols.push(next);
            appended += 1;
        }
        if appended > 0 {
            log::debug!(
                "padded reel {index} from {original_len} to {} symbols",
                reel.symbols.len()
            );
        }
    }
    Ok(())
}
