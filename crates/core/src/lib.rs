//! Carbon Calc Core Library
//!
//! This crate holds the domain of carbon-calc, a terminal tool that estimates
//! the CO2 emitted by a single trip. It has no terminal I/O of its own: the
//! `carbon-calc-cli` crate collects answers and hands them to the types here.
//!
//! # Key Features
//!
//! - **Travel Inputs**: Case-insensitive parsing of modes, fuel types and cabin classes
//! - **Emission Factors**: Fixed kg CO2 per km tables for every mode
//! - **Calculation**: Round-trip aware emission estimates
//! - **Error Handling**: One error type carrying the user-facing messages
//!
//! # Examples
//!
//! ```
//! use carbon_calc_core::calculation::estimate;
//! use carbon_calc_core::travel::{Distance, FuelType, Trip};
//!
//! let fuel: FuelType = "Electric".parse()?;
//! let result = estimate(&Trip::Car { fuel }, Distance::new(100.0)?);
//! assert_eq!(format!("{:.2}", result.emissions_kg), "5.00");
//! # Ok::<(), carbon_calc_core::error::Error>(())
//! ```

pub mod calculation;
pub mod emission_factors;
pub mod error;
pub mod travel;
