//! Fixed emission factor tables, in kg CO2 per kilometer.

use std::fmt::{Display, Formatter};

use crate::travel::{CabinClass, FuelType, Trip};

const PETROL: f64 = 0.12;
const DIESEL: f64 = 0.15;
const ELECTRIC: f64 = 0.05;

const ECONOMY: f64 = 0.15;
const BUSINESS: f64 = 0.30;
const FIRST: f64 = 0.40;

const BUS: f64 = 0.08;
const TRAIN: f64 = 0.04;
const MOTORCYCLE: f64 = 0.10;
// human-powered
const BIKE: f64 = 0.0;

/// Kilograms of CO2 emitted per kilometer traveled.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct EmissionFactor(f64);

impl EmissionFactor {
    #[must_use]
    pub fn kg_per_km(&self) -> f64 {
        self.0
    }
}

impl Display for EmissionFactor {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{:.2} kg CO2/km", self.0)
    }
}

impl FuelType {
    #[must_use]
    pub fn emission_factor(&self) -> EmissionFactor {
        EmissionFactor(match self {
            FuelType::Petrol => PETROL,
            FuelType::Diesel => DIESEL,
            FuelType::Electric => ELECTRIC,
        })
    }
}

impl CabinClass {
    #[must_use]
    pub fn emission_factor(&self) -> EmissionFactor {
        EmissionFactor(match self {
            CabinClass::Economy => ECONOMY,
            CabinClass::Business => BUSINESS,
            CabinClass::First => FIRST,
        })
    }
}

/// Resolves the factor for a trip: cars by fuel, planes by cabin class, and
/// every other mode from the general table.
#[must_use]
pub fn resolve(trip: &Trip) -> EmissionFactor {
    match trip {
        Trip::Car { fuel } => fuel.emission_factor(),
        Trip::Plane { cabin, .. } => cabin.emission_factor(),
        Trip::Bus => EmissionFactor(BUS),
        Trip::Train => EmissionFactor(TRAIN),
        Trip::Motorcycle => EmissionFactor(MOTORCYCLE),
        Trip::Bike => EmissionFactor(BIKE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_car_factors() {
        assert_eq!(FuelType::Petrol.emission_factor().kg_per_km(), 0.12);
        assert_eq!(FuelType::Diesel.emission_factor().kg_per_km(), 0.15);
        assert_eq!(FuelType::Electric.emission_factor().kg_per_km(), 0.05);
    }

    #[test]
    fn test_plane_factors_ignore_round_trip() {
        for round_trip in [true, false] {
            let trip = Trip::Plane {
                cabin: CabinClass::Business,
                round_trip,
            };
            assert_eq!(resolve(&trip).kg_per_km(), 0.30);
        }
        assert_eq!(CabinClass::Economy.emission_factor().kg_per_km(), 0.15);
        assert_eq!(CabinClass::First.emission_factor().kg_per_km(), 0.40);
    }

    #[test]
    fn test_general_factors() {
        assert_eq!(resolve(&Trip::Bus).kg_per_km(), 0.08);
        assert_eq!(resolve(&Trip::Train).kg_per_km(), 0.04);
        assert_eq!(resolve(&Trip::Motorcycle).kg_per_km(), 0.10);
        assert_eq!(resolve(&Trip::Bike).kg_per_km(), 0.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(resolve(&Trip::Bus).to_string(), "0.08 kg CO2/km");
    }
}
