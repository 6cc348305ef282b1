use std::collections::TryReserveError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SetError {
    #[error("could not grow set buffer to {requested} elements")]
    Allocation {
        requested: usize,
        source: TryReserveError,
    },
}
