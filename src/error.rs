use std::fmt::{Display, Formatter, Result};

#[derive(Debug)]
pub enum SumError {
    /// The requested worker count was not positive. Reported before any
    /// worker is launched.
    InvalidConfiguration,
    /// A worker terminated abnormally. Fatal to the whole reduction; no
    /// partial result survives.
    WorkerFailure { worker: usize, cause: String },
}

impl Display for SumError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidConfiguration => write!(f, "worker count must be positive"),
            Self::WorkerFailure { worker, cause } => {
                write!(f, "worker {worker} terminated abnormally: {cause}")
            }
        }
    }
}

impl std::error::Error for SumError {}
