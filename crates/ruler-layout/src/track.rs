//! Track source registration
//!
//! External widgets (typically the canvas the ruler frames) feed their
//! pointer motion into the ruler. The ruler keeps an explicit subscription
//! set instead of toolkit signal handlers; hosts register a source once,
//! forward motion events with its id, and unregister on teardown.

use crate::types::{Result, RulerError};

/// Opaque handle identifying a registered motion source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TrackSourceId(pub u64);

#[derive(Debug, Default)]
pub(crate) struct TrackSet {
    sources: Vec<TrackSourceId>,
}

impl TrackSet {
    pub fn add(&mut self, id: TrackSourceId) -> Result<()> {
        if self.sources.contains(&id) {
            debug_assert!(false, "track source registered twice");
            return Err(RulerError::DuplicateSource);
        }
        self.sources.push(id);
        Ok(())
    }

    pub fn remove(&mut self, id: TrackSourceId) -> Result<()> {
        // Removing a source that was never added is a caller bug.
        let Some(index) = self.sources.iter().position(|s| *s == id) else {
            debug_assert!(false, "track source not registered");
            return Err(RulerError::UntrackedSource);
        };
        self.sources.remove(index);
        Ok(())
    }

    pub fn contains(&self, id: TrackSourceId) -> bool {
        self.sources.contains(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    pub fn clear(&mut self) {
        self.sources.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_remove_roundtrip() {
        let mut set = TrackSet::default();
        set.add(TrackSourceId(1)).unwrap();
        set.add(TrackSourceId(2)).unwrap();
        assert!(set.contains(TrackSourceId(1)));

        set.remove(TrackSourceId(1)).unwrap();
        assert!(!set.contains(TrackSourceId(1)));
        assert!(set.contains(TrackSourceId(2)));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "track source not registered")]
    fn test_remove_untracked_is_fatal_in_debug() {
        let mut set = TrackSet::default();
        let _ = set.remove(TrackSourceId(7));
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn test_remove_untracked_is_an_error() {
        let mut set = TrackSet::default();
        assert_eq!(set.remove(TrackSourceId(7)), Err(RulerError::UntrackedSource));
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn test_double_add_is_an_error() {
        let mut set = TrackSet::default();
        set.add(TrackSourceId(7)).unwrap();
        assert_eq!(set.add(TrackSourceId(7)), Err(RulerError::DuplicateSource));
    }
}
