use ck_core::SimTime;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StationError {
    #[error("station {station:?} cannot move its clock back from {clock} to {target}")]
    TimeReversal {
        station: String,
        clock:   SimTime,
        target:  SimTime,
    },

    #[error("station {0:?} used before restart")]
    NotStarted(String),
}

pub type StationResult<T> = Result<T, StationError>;
