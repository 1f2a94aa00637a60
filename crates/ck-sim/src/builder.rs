//! Fluent builder for constructing a [`Supermarket`].

use ck_core::SimConfig;
use ck_station::Station;

use crate::{SimError, SimResult, StationChooser, Supermarket};

/// Fluent builder for [`Supermarket<C>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — opening hours and overtime allowance
/// - `C: StationChooser` — the routing rule (e.g. [`ShortestExpectedWait`])
/// - at least one [`Station`]
///
/// [`ShortestExpectedWait`]: crate::ShortestExpectedWait
///
/// # Example
///
/// ```rust,ignore
/// let market = SupermarketBuilder::new(config, ShortestExpectedWait)
///     .station(Station::fifo("FIFO-1"))
///     .station(Station::fifo("FIFO-2"))
///     .station(Station::priority("PRIO", 5))
///     .build()?;
/// ```
pub struct SupermarketBuilder<C: StationChooser> {
    config:   SimConfig,
    chooser:  C,
    stations: Vec<Station>,
}

impl<C: StationChooser> SupermarketBuilder<C> {
    pub fn new(config: SimConfig, chooser: C) -> Self {
        Self { config, chooser, stations: Vec::new() }
    }

    /// Add one station.  Stations keep the order they are added in; that
    /// order is the [`StationId`][ck_core::StationId] numbering.
    pub fn station(mut self, station: Station) -> Self {
        self.stations.push(station);
        self
    }

    /// Add several stations at once.
    pub fn stations(mut self, stations: impl IntoIterator<Item = Station>) -> Self {
        self.stations.extend(stations);
        self
    }

    /// Validate the opening hours and the station set and return a
    /// ready-to-run [`Supermarket`].
    pub fn build(self) -> SimResult<Supermarket<C>> {
        self.config.validate()?;
        if self.stations.is_empty() {
            return Err(SimError::NoStations);
        }
        Ok(Supermarket {
            config:   self.config,
            chooser:  self.chooser,
            stations: self.stations,
        })
    }
}
