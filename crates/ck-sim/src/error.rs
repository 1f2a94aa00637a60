use ck_core::{CkError, CustomerId, StationId};
use ck_station::StationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] CkError),

    #[error("no stations configured")]
    NoStations,

    #[error("chooser picked {choice:?} for customer {customer}, but only {stations} stations exist")]
    InvalidChoice {
        customer: CustomerId,
        choice:   Option<StationId>,
        stations: usize,
    },

    #[error("station error: {0}")]
    Station(#[from] StationError),
}

pub type SimResult<T> = Result<T, SimError>;
