//! Wheel engine errors.

use crate::tips::matrix::TipMatrixError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type WheelResult<T> = Result<T, WheelError>;

/// Failures raised by wheel geometry and the spin lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub enum WheelError {
    /// Geometry requested for a wheel with no slices.
    ZeroSlices,
    /// Random source returned an index outside `[0, slice_count)`.
    IndexOutOfRange { index: usize, slice_count: usize },
    /// `start_spin` called while a spin is still in flight.
    SpinInProgress,
    /// The settled angle fell into a different slice than the one drawn.
    SettleMismatch {
        drawn: usize,
        settled: usize,
        normalized_degrees: f64,
    },
    InvalidConfig(String),
    Tips(TipMatrixError),
}

impl Display for WheelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroSlices => write!(f, "wheel must have at least one slice"),
            Self::IndexOutOfRange { index, slice_count } => write!(
                f,
                "slice index {index} out of range for {slice_count} slice(s)"
            ),
            Self::SpinInProgress => write!(f, "a spin is already in progress"),
            Self::SettleMismatch {
                drawn,
                settled,
                normalized_degrees,
            } => write!(
                f,
                "wheel settled on slice {settled} at {normalized_degrees:.4} deg but slice {drawn} was drawn"
            ),
            Self::InvalidConfig(message) => write!(f, "invalid wheel config: {message}"),
            Self::Tips(err) => write!(f, "{err}"),
        }
    }
}

impl Error for WheelError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Tips(err) => Some(err),
            _ => None,
        }
    }
}

impl From<TipMatrixError> for WheelError {
    fn from(value: TipMatrixError) -> Self {
        Self::Tips(value)
    }
}
