use itertools::Itertools;
use thiserror::Error;

use crate::travel::TravelMode;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error(
        "Invalid travel mode. Please enter one of the following: {}.",
        TravelMode::ALL.iter().join(", ")
    )]
    InvalidTravelMode(String),

    #[error("Distance must be a positive value.")]
    NegativeDistance(f64),

    #[error("Distance is too large.")]
    DistanceTooLarge(f64),

    #[error("Invalid fuel type.")]
    InvalidFuelType(String),

    #[error("Invalid cabin class.")]
    InvalidCabinClass(String),

    #[error("Unexpected end of input.")]
    EndOfInput,

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),
}

impl Error {
    /// True for errors caused by an answer the user gave, as opposed to a
    /// failure of the input or output streams.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidTravelMode(_)
                | Self::NegativeDistance(_)
                | Self::DistanceTooLarge(_)
                | Self::InvalidFuelType(_)
                | Self::InvalidCabinClass(_)
        )
    }
}
