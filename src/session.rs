//! The map currently on screen and the loads that may replace it.

use crate::data::Sample;
use crate::error::Result;
use crate::map::{aggregate, MapData, NormalizationMode};
use std::sync::Arc;

/// Handle for one map load; only the most recently issued one may install
/// its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Owner of the current [`MapData`].
///
/// A map is built completely before it replaces the previous one, so readers
/// holding the `Arc` from [`MapSession::current`] never see a partial grid.
#[derive(Debug, Default)]
pub struct MapSession {
    current: Option<Arc<MapData>>,
    issued: u64,
    mode: NormalizationMode,
}

impl MapSession {
    /// Create an empty session.
    pub fn new(mode: NormalizationMode) -> Self {
        Self {
            current: None,
            issued: 0,
            mode,
        }
    }

    /// The map being shown, if one has loaded.
    pub fn current(&self) -> Option<Arc<MapData>> {
        self.current.clone()
    }

    /// Start a load. Any ticket issued earlier becomes stale.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.issued += 1;
        LoadTicket(self.issued)
    }

    /// Whether `ticket` is still the latest load.
    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.issued
    }

    /// Finish a load with the samples it fetched.
    ///
    /// Returns `Ok(false)` without touching the session when a newer load has
    /// started since. On an aggregation error the previous map stays in place.
    pub fn complete_load(&mut self, ticket: LoadTicket, samples: &[Sample]) -> Result<bool> {
        if !self.is_current(ticket) {
            tracing::debug!("Dropping stale map load {} (latest {})", ticket.0, self.issued);
            return Ok(false);
        }
        let map = aggregate(samples, self.mode)?;
        tracing::info!(
            "Installed {}x{} map",
            map.grid().x_size(),
            map.grid().y_size()
        );
        self.current = Some(Arc::new(map));
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SweepmapError;

    fn samples(value: f64) -> Vec<Sample> {
        vec![
            Sample::at(0, 0, value),
            Sample::at(1, 0, value + 1.0),
            Sample::at(0, 1, value + 2.0),
            Sample::at(1, 1, value + 3.0),
        ]
    }

    #[test]
    fn latest_load_wins() {
        let mut session = MapSession::default();
        let first = session.begin_load();
        let second = session.begin_load();

        assert!(session.complete_load(second, &samples(10.0)).unwrap());
        assert!(!session.complete_load(first, &samples(0.0)).unwrap());

        let map = session.current().unwrap();
        assert_eq!(map.bounds().min_value, 10.0);
    }

    #[test]
    fn readers_keep_their_snapshot() {
        let mut session = MapSession::new(NormalizationMode::Inclusive);
        let ticket = session.begin_load();
        session.complete_load(ticket, &samples(0.0)).unwrap();
        let before = session.current().unwrap();

        let ticket = session.begin_load();
        session.complete_load(ticket, &samples(50.0)).unwrap();

        assert_eq!(before.bounds().min_value, 0.0);
        assert_eq!(session.current().unwrap().bounds().min_value, 50.0);
    }

    #[test]
    fn failed_load_keeps_previous_map() {
        let mut session = MapSession::default();
        let ticket = session.begin_load();
        session.complete_load(ticket, &samples(1.0)).unwrap();

        let ticket = session.begin_load();
        let err = session.complete_load(ticket, &[]).unwrap_err();
        assert!(matches!(err, SweepmapError::EmptyDataset));
        assert_eq!(session.current().unwrap().bounds().min_value, 1.0);
    }

    #[test]
    fn stale_empty_load_is_ignored_not_rejected() {
        let mut session = MapSession::default();
        let stale = session.begin_load();
        session.begin_load();
        assert!(!session.complete_load(stale, &[]).unwrap());
        assert!(session.current().is_none());
    }
}
