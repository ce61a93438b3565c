use std::fmt::{Display, Formatter};

use log::debug;

use crate::emission_factors::{self, EmissionFactor};
use crate::travel::{Distance, TravelMode, Trip};

/// Shown after every estimate.
pub const DISCLAIMER: &str = "Note: Emission factors are approximations and may vary based on vehicle type, fuel efficiency, and other variables.";

/// The outcome of one calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    pub mode: TravelMode,
    /// Distance after round-trip doubling, in kilometers.
    pub distance_km: f64,
    pub factor: EmissionFactor,
    pub emissions_kg: f64,
}

/// Distance the emissions are charged for. Only plane round trips double it.
#[must_use]
pub fn effective_distance(trip: &Trip, distance: Distance) -> f64 {
    match trip {
        Trip::Plane {
            round_trip: true, ..
        } => distance.kilometers() * 2.0,
        _ => distance.kilometers(),
    }
}

#[must_use]
pub fn estimate(trip: &Trip, distance: Distance) -> Estimate {
    let factor = emission_factors::resolve(trip);
    let distance_km = effective_distance(trip, distance);
    let emissions_kg = distance_km * factor.kg_per_km();

    debug!("{trip:?}: {distance_km} km at {factor} = {emissions_kg} kg");

    Estimate {
        mode: trip.mode(),
        distance_km,
        factor,
        emissions_kg,
    }
}

impl Display for Estimate {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "Estimated carbon emissions for traveling {:.2} km by {}: {:.2} kg CO2",
            self.distance_km, self.mode, self.emissions_kg
        )
    }
}
