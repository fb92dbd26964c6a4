//! Linear cost, emissions, and duration model.
//!
//! Distance alone selects the travel mode: legs of at least
//! [`AIR_THRESHOLD_KM`] are treated as flights, shorter ones as ground
//! travel. Every public function rounds to two decimals, half away from zero.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Fare per kilometre, independent of mode.
pub const COST_PER_KM: f64 = 0.25;

/// Distances at or above this many kilometres are flown.
pub const AIR_THRESHOLD_KM: f64 = 300.0;

pub const AIR_CO2_KG_PER_KM: f64 = 0.25;
pub const GROUND_CO2_KG_PER_KM: f64 = 0.15;

pub const CRUISE_SPEED_KMH: f64 = 800.0;

/// Boarding and taxi time added to every flight.
pub const FIXED_AIR_OVERHEAD_H: f64 = 1.5;

pub const GROUND_SPEED_KMH: f64 = 60.0;

/// Travel regime selected by distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelMode {
    Ground,
    Air,
}

impl TravelMode {
    pub fn for_distance(distance_km: f64) -> Self {
        if distance_km >= AIR_THRESHOLD_KM {
            TravelMode::Air
        } else {
            TravelMode::Ground
        }
    }

    fn co2_per_km(self) -> f64 {
        match self {
            TravelMode::Ground => GROUND_CO2_KG_PER_KM,
            TravelMode::Air => AIR_CO2_KG_PER_KM,
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            TravelMode::Ground => "ground",
            TravelMode::Air => "air",
        };
        f.write_str(value)
    }
}

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Fare for travelling `distance_km`.
pub fn cost(distance_km: f64) -> f64 {
    round2(distance_km * COST_PER_KM)
}

/// Emitted CO₂ in kilograms.
pub fn co2(distance_km: f64) -> f64 {
    round2(co2_unrounded(distance_km))
}

/// Travel time in hours.
pub fn duration(distance_km: f64) -> f64 {
    round2(duration_unrounded(distance_km))
}

pub(crate) fn co2_unrounded(distance_km: f64) -> f64 {
    distance_km * TravelMode::for_distance(distance_km).co2_per_km()
}

pub(crate) fn duration_unrounded(distance_km: f64) -> f64 {
    match TravelMode::for_distance(distance_km) {
        TravelMode::Air => distance_km / CRUISE_SPEED_KMH + FIXED_AIR_OVERHEAD_H,
        TravelMode::Ground => distance_km / GROUND_SPEED_KMH,
    }
}
