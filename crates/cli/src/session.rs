//! One interactive calculation, from banner to report.

use std::io::{BufRead, Write};

use carbon_calc_core::calculation::{estimate, Estimate};
use carbon_calc_core::error::Result;
use carbon_calc_core::travel::{
    parse_round_trip, CabinClass, Distance, FuelType, TravelMode, Trip,
};
use log::{debug, info};

use crate::input::Prompter;
use crate::report;

const MODE_PROMPT: &str = "Enter travel mode (car, bus, train, plane, bike, motorcycle): ";
const DISTANCE_PROMPT: &str = "Enter distance traveled in kilometers: ";
const FUEL_PROMPT: &str = "Enter fuel type (petrol, diesel, electric): ";
const CABIN_PROMPT: &str = "Enter cabin class (economy, business, first): ";
const ROUND_TRIP_PROMPT: &str = "Is this a round trip? (yes/no): ";

/// Runs the whole prompt sequence and prints the estimate.
///
/// Stops at the first invalid answer and returns its error without printing
/// a result. Non-numeric distances are re-prompted rather than failing.
///
/// # Errors
///
/// Returns a validation error for an unknown mode, fuel type or cabin class,
/// or a negative distance. Returns [`carbon_calc_core::error::Error::EndOfInput`]
/// if the input closes before all answers are read.
pub fn run<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> Result<Estimate> {
    report::print_banner(prompter)?;

    let mode: TravelMode = prompter.prompt_answer(MODE_PROMPT)?.parse()?;
    debug!("Travel mode: {mode}");

    let distance = Distance::new(prompter.prompt_number(DISTANCE_PROMPT)?)?;
    debug!("Distance: {} km", distance.kilometers());

    let trip = collect_trip(prompter, mode)?;
    let estimate = estimate(&trip, distance);
    info!(
        "Estimated {:.2} kg CO2 for {:.2} km by {}",
        estimate.emissions_kg, estimate.distance_km, estimate.mode
    );

    report::print_estimate(prompter, &estimate)?;
    Ok(estimate)
}

/// Reads whatever extra answers the mode needs.
fn collect_trip<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    mode: TravelMode,
) -> Result<Trip> {
    if let Some(trip) = Trip::without_details(mode) {
        return Ok(trip);
    }

    match mode {
        TravelMode::Car => {
            let fuel: FuelType = prompter.prompt_answer(FUEL_PROMPT)?.parse()?;
            debug!("Fuel type: {fuel}");
            Ok(Trip::Car { fuel })
        }
        _ => {
            // Both answers are read before the cabin class is checked
            let cabin = prompter.prompt_answer(CABIN_PROMPT)?;
            let round_trip = parse_round_trip(&prompter.prompt_answer(ROUND_TRIP_PROMPT)?);
            let cabin: CabinClass = cabin.parse()?;
            debug!("Cabin class: {cabin}, round trip: {round_trip}");
            Ok(Trip::Plane { cabin, round_trip })
        }
    }
}
