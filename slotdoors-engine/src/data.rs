use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One rendered symbol label. Opaque to the engine; compared by value.
pub type Symbol = String;

/// Failure to obtain or parse the reel-definition document. Fatal: there is
/// no fallback reel set, so the widget cannot initialize.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("reel document could not be parsed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("reel document contains no reels")]
    NoReels,
    #[error("reel document could not be fetched: {0}")]
    Fetch(String),
}

/// One column's full symbol inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Reel {
    pub symbols: Vec<Symbol>,
}

impl Reel {
    #[must_use]
    pub fn new(symbols: Vec<Symbol>) -> Self {
        Self { symbols }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

/// The full set of reels, index-addressed; one visual door per reel.
/// Loaded once at startup, then only mutated in place by normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct ReelSet {
    pub reels: Vec<Reel>,
}

impl ReelSet {
    /// Create a reel set from pre-built reels (useful for tests).
    #[must_use]
    pub fn from_reels(reels: Vec<Reel>) -> Self {
        Self { reels }
    }

    /// Parse a reel-definition document: a JSON list of reels, each an
    /// ordered list of string symbols.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed or contains no reels.
    /// Per-reel emptiness is checked later, during normalization.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let set: Self = serde_json::from_str(json)?;
        if set.reels.is_empty() {
            return Err(LoadError::NoReels);
        }
        Ok(set)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.reels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reels.is_empty()
    }
}
