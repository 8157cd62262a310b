//! Per-spin window shuffling and winning-symbol selection.

use crate::data::{Reel, Symbol};
use rand::Rng;
use rand::seq::SliceRandom;

/// Produce the visible window for one spin: a uniformly shuffled copy of
/// the reel's full symbol sequence, truncated to `spin_size`. The reel
/// itself is never mutated.
#[must_use]
pub fn shuffle_window<R: Rng>(reel: &Reel, spin_size: usize, rng: &mut R) -> Vec<Symbol> {
    let mut window = reel.symbols.clone();
    window.shuffle(rng);
    window.truncate(spin_size);
    window
}

/// Draw the winning symbol for one spin: a uniform pick over the reel's
/// entire post-normalization sequence, independent of the visible window.
///
/// Returns `None` only for an empty reel, which normalization rules out.
#[must_use]
pub fn pick_winner<R: Rng>(reel: &Reel, rng: &mut R) -> Option<Symbol> {
    reel.symbols.choose(rng).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use std::collections::HashMap;

    fn reel_of(symbols: &[&str]) -> Reel {
        Reel::new(symbols.iter().map(ToString::to_string).collect())
    }

    fn counts(symbols: &[Symbol]) -> HashMap<&str, usize> {
        let mut map = HashMap::new();
        for symbol in symbols {
            *map.entry(symbol.as_str()).or_insert(0) += 1;
        }
        map
    }

    #[test]
    fn window_has_spin_size_elements_drawn_from_the_reel() {
        let reel = reel_of(&[
            "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m", "n", "o", "p",
        ]);
        let mut rng = SmallRng::seed_from_u64(9);
        for _ in 0..50 {
            let window = shuffle_window(&reel, 10, &mut rng);
            assert_eq!(window.len(), 10);
            let reel_counts = counts(&reel.symbols);
            for (symbol, count) in counts(&window) {
                assert!(count <= reel_counts[symbol]);
            }
        }
    }

    #[test]
    fn source_reel_is_unmodified_by_shuffling() {
        let reel = reel_of(&["a", "b", "c", "d", "e"]);
        let before = reel.clone();
        let mut rng = SmallRng::seed_from_u64(4);
        let _ = shuffle_window(&reel, 3, &mut rng);
        assert_eq!(reel, before);
    }

    #[test]
    fn short_spin_size_truncates_and_oversize_keeps_everything() {
        let reel = reel_of(&["a", "b", "c"]);
        let mut rng = SmallRng::seed_from_u64(2);
        assert_eq!(shuffle_window(&reel, 2, &mut rng).len(), 2);
        assert_eq!(shuffle_window(&reel, 99, &mut rng).len(), 3);
    }

    #[test]
    fn winner_frequency_tracks_symbol_multiplicity() {
        // "a" has multiplicity 2 of 4; expect ~0.5 hit rate.
        let reel = reel_of(&["a", "a", "b", "c"]);
        let mut rng = SmallRng::seed_from_u64(31);
        let trials = 8000;
        let mut hits = 0usize;
        for _ in 0..trials {
            if pick_winner(&reel, &mut rng).as_deref() == Some("a") {
                hits += 1;
            }
        }
        let frequency = hits as f64 / trials as f64;
        assert!(
            (frequency - 0.5).abs() < 0.05,
            "winner frequency {frequency} strayed from multiplicity"
        );
    }

    #[test]
    fn empty_reel_yields_no_winner() {
        let reel = Reel::new(Vec::new());
        let mut rng = SmallRng::seed_from_u64(0);
        assert_eq!(pick_winner(&reel, &mut rng), None);
    }
}
