//! Trip inputs: travel modes, their sub-parameters and the distance.
//!
//! Every type here is parsed from a raw user answer. Parsing trims surrounding
//! whitespace and ignores case, so `" Car "`, `"CAR"` and `"car"` are the same
//! mode.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::{Error, Result};

/// Answer that marks a plane trip as a round trip. Anything else is one-way.
const ROUND_TRIP_ANSWER: &str = "yes";

fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TravelMode {
    Car,
    Bus,
    Train,
    Plane,
    Bike,
    Motorcycle,
}

impl TravelMode {
    /// All modes, in the order they are offered at the prompt.
    pub const ALL: [TravelMode; 6] = [
        TravelMode::Car,
        TravelMode::Bus,
        TravelMode::Train,
        TravelMode::Plane,
        TravelMode::Bike,
        TravelMode::Motorcycle,
    ];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            TravelMode::Car => "car",
            TravelMode::Bus => "bus",
            TravelMode::Train => "train",
            TravelMode::Plane => "plane",
            TravelMode::Bike => "bike",
            TravelMode::Motorcycle => "motorcycle",
        }
    }
}

impl Display for TravelMode {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for TravelMode {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        let normalized = normalize(value);
        TravelMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == normalized)
            .ok_or(Error::InvalidTravelMode(normalized))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FuelType {
    Petrol,
    Diesel,
    Electric,
}

impl FuelType {
    pub const ALL: [FuelType; 3] = [FuelType::Petrol, FuelType::Diesel, FuelType::Electric];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            FuelType::Petrol => "petrol",
            FuelType::Diesel => "diesel",
            FuelType::Electric => "electric",
        }
    }
}

impl Display for FuelType {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for FuelType {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        let normalized = normalize(value);
        FuelType::ALL
            .into_iter()
            .find(|fuel| fuel.as_str() == normalized)
            .ok_or(Error::InvalidFuelType(normalized))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CabinClass {
    Economy,
    Business,
    First,
}

impl CabinClass {
    pub const ALL: [CabinClass; 3] = [CabinClass::Economy, CabinClass::Business, CabinClass::First];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            CabinClass::Economy => "economy",
            CabinClass::Business => "business",
            CabinClass::First => "first",
        }
    }
}

impl Display for CabinClass {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for CabinClass {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        let normalized = normalize(value);
        CabinClass::ALL
            .into_iter()
            .find(|cabin| cabin.as_str() == normalized)
            .ok_or(Error::InvalidCabinClass(normalized))
    }
}

/// Interprets a yes/no answer. Only `yes` (any case, surrounding whitespace
/// ignored) counts as a round trip.
#[must_use]
pub fn parse_round_trip(answer: &str) -> bool {
    normalize(answer) == ROUND_TRIP_ANSWER
}

/// A non-negative distance in kilometers.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Distance(f64);

impl Distance {
    /// Largest accepted distance. A round trip doubles it, and the double must
    /// still be finite.
    pub const MAX_KILOMETERS: f64 = f64::MAX / 2.0;

    /// # Errors
    ///
    /// Returns [`Error::NegativeDistance`] for values below zero and
    /// [`Error::DistanceTooLarge`] for values above [`Self::MAX_KILOMETERS`]
    /// or that are not numbers.
    pub fn new(kilometers: f64) -> Result<Self> {
        if kilometers < 0.0 {
            return Err(Error::NegativeDistance(kilometers));
        }

        if kilometers.is_nan() || kilometers > Self::MAX_KILOMETERS {
            return Err(Error::DistanceTooLarge(kilometers));
        }

        // Adding zero turns -0.0 into 0.0 so it never prints as "-0.00"
        Ok(Self(kilometers + 0.0))
    }

    #[must_use]
    pub fn kilometers(&self) -> f64 {
        self.0
    }
}

/// A validated trip: the mode together with the sub-parameters that mode
/// needs, and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trip {
    Car { fuel: FuelType },
    Plane { cabin: CabinClass, round_trip: bool },
    Bus,
    Train,
    Bike,
    Motorcycle,
}

impl Trip {
    #[must_use]
    pub fn mode(&self) -> TravelMode {
        match self {
            Trip::Car { .. } => TravelMode::Car,
            Trip::Plane { .. } => TravelMode::Plane,
            Trip::Bus => TravelMode::Bus,
            Trip::Train => TravelMode::Train,
            Trip::Bike => TravelMode::Bike,
            Trip::Motorcycle => TravelMode::Motorcycle,
        }
    }

    /// The trip for a mode that takes no sub-parameters, or `None` for car and
    /// plane.
    #[must_use]
    pub fn without_details(mode: TravelMode) -> Option<Self> {
        match mode {
            TravelMode::Bus => Some(Trip::Bus),
            TravelMode::Train => Some(Trip::Train),
            TravelMode::Bike => Some(Trip::Bike),
            TravelMode::Motorcycle => Some(Trip::Motorcycle),
            TravelMode::Car | TravelMode::Plane => None,
        }
    }
}
