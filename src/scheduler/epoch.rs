//! Generation counter used to void scheduled work on reset.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Shared generation counter.
///
/// Work is stamped with the generation it was scheduled in; advancing the
/// counter makes every older stamp stale.
#[derive(Clone, Debug, Default)]
pub struct Epoch {
    generation: Arc<AtomicU64>,
}

impl Epoch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stamp(&self) -> EpochStamp {
        EpochStamp {
            epoch: self.clone(),
            generation: self.generation.load(Ordering::Acquire),
        }
    }

    /// Start a new generation, voiding all outstanding stamps.
    pub fn advance(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::AcqRel) + 1
    }

    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }
}

/// Generation captured when a piece of work was scheduled.
#[derive(Clone, Debug)]
pub struct EpochStamp {
    epoch: Epoch,
    generation: u64,
}

impl EpochStamp {
    pub fn is_current(&self) -> bool {
        self.epoch.generation() == self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stamp_goes_stale_after_advance() {
        let epoch = Epoch::new();
        let stamp = epoch.stamp();
        assert!(stamp.is_current());

        assert_eq!(epoch.advance(), 1);
        assert!(!stamp.is_current());
        assert!(epoch.stamp().is_current());
    }

    #[test]
    fn clones_share_the_counter() {
        let epoch = Epoch::new();
        let stamp = epoch.clone().stamp();

        epoch.advance();

        assert!(!stamp.is_current());
    }
}
