//! Simulation time model.
//!
//! # Design
//!
//! Time is a whole number of seconds since midnight of the simulated day,
//! wrapped in `SimTime`.  Using an integer second counter means all queue
//! arithmetic is exact (no floating-point drift) and comparisons are O(1).
//!
//! `SimTime` does not wrap at 24:00.  A store closing at 23:50 with a
//! 15-minute overtime allowance drains until `24:05:00`, and that instant
//! still compares greater than every instant of the day.

use std::fmt;
use std::str::FromStr;

use crate::{CkError, CkResult};

/// An absolute instant of the simulated day, in seconds since midnight.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(pub u64);

impl SimTime {
    pub const MIDNIGHT: SimTime = SimTime(0);

    /// Largest hour field accepted by [`parse`][Self::parse]: two full days.
    pub const MAX_PARSE_HOURS: u64 = 48;

    /// Build an instant from wall-clock components.
    #[inline]
    pub const fn from_hms(hours: u64, minutes: u64, seconds: u64) -> SimTime {
        SimTime(hours * 3_600 + minutes * 60 + seconds)
    }

    /// Return the instant `secs` seconds after `self`, saturating at the
    /// largest representable instant.
    #[inline]
    pub fn offset(self, secs: u64) -> SimTime {
        SimTime(self.0.saturating_add(secs))
    }

    /// The instant `secs` seconds after `self`, or `None` on overflow.
    #[inline]
    pub fn checked_offset(self, secs: u64) -> Option<SimTime> {
        self.0.checked_add(secs).map(SimTime)
    }

    /// Seconds elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.  Use
    /// [`checked_since`][Self::checked_since] when the order is not known.
    #[inline]
    pub fn since(self, earlier: SimTime) -> u64 {
        self.0 - earlier.0
    }

    /// Seconds elapsed from `earlier` to `self`, or `None` if `earlier` is later.
    #[inline]
    pub fn checked_since(self, earlier: SimTime) -> Option<u64> {
        self.0.checked_sub(earlier.0)
    }

    /// The instant `secs` seconds before `self`, saturating at midnight.
    #[inline]
    pub fn rewind(self, secs: u64) -> SimTime {
        SimTime(self.0.saturating_sub(secs))
    }

    /// Break the instant into (hours, minutes, seconds).
    pub fn hms(self) -> (u64, u64, u64) {
        (self.0 / 3_600, (self.0 % 3_600) / 60, self.0 % 60)
    }

    /// Parse `HH:MM` or `HH:MM:SS`.  Hours may run past 23 up to
    /// [`MAX_PARSE_HOURS`][Self::MAX_PARSE_HOURS].
    pub fn parse(s: &str) -> CkResult<SimTime> {
        let invalid = || CkError::InvalidTime(s.to_owned());
        let mut parts = s.trim().split(':');

        let mut field = |max: u64| -> CkResult<Option<u64>> {
            match parts.next() {
                None => Ok(None),
                Some(p) => {
                    let v: u64 = p.parse().map_err(|_| invalid())?;
                    if v > max {
                        return Err(invalid());
                    }
                    Ok(Some(v))
                }
            }
        };

        let hours = field(Self::MAX_PARSE_HOURS)?.ok_or_else(invalid)?;
        let minutes = field(59)?.ok_or_else(invalid)?;
        let seconds = field(59)?.unwrap_or(0);
        if parts.next().is_some() {
            return Err(invalid());
        }
        Ok(SimTime::from_hms(hours, minutes, seconds))
    }
}

impl std::ops::Add<u64> for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, rhs: u64) -> SimTime {
        self.offset(rhs)
    }
}

impl FromStr for SimTime {
    type Err = CkError;

    fn from_str(s: &str) -> CkResult<SimTime> {
        SimTime::parse(s)
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, m, s) = self.hms();
        write!(f, "{h:02}:{m:02}:{s:02}")
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Overtime allowed after closing for in-flight checkouts to finish: 15 minutes.
pub const DEFAULT_OVERTIME_SECS: u64 = 15 * 60;

/// Opening hours of one simulated day.
///
/// Typically read from a scenario file by `ck-scenario` or assembled from
/// command-line flags by the application crate.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    pub open:          SimTime,
    pub closing:       SimTime,
    /// Drain window after `closing`; excluded from every reported statistic.
    pub overtime_secs: u64,
}

impl SimConfig {
    pub fn new(open: SimTime, closing: SimTime) -> Self {
        Self { open, closing, overtime_secs: DEFAULT_OVERTIME_SECS }
    }

    /// Seconds the store is open.
    #[inline]
    pub fn opening_secs(&self) -> u64 {
        self.closing.0.saturating_sub(self.open.0)
    }

    /// The last instant stations are advanced to.
    #[inline]
    pub fn drain_until(&self) -> SimTime {
        self.closing.offset(self.overtime_secs)
    }

    /// Reject a closing time before the opening time, and an overtime
    /// window that runs past the largest representable instant.
    pub fn validate(&self) -> CkResult<()> {
        if self.closing < self.open {
            return Err(CkError::Config(format!(
                "closing time {} is before opening time {}",
                self.closing, self.open
            )));
        }
        if self.closing.checked_offset(self.overtime_secs).is_none() {
            return Err(CkError::Config(format!(
                "overtime of {}s after {} is out of range",
                self.overtime_secs, self.closing
            )));
        }
        Ok(())
    }
}
