//! Candidate routes and result bundles returned by the query facade.

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, CityId};
use crate::cost::{self, round2, TravelMode};
use crate::error::Result;
use crate::geometry::distance_between;

/// Direct travel between two consecutive cities of a path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leg {
    pub from: String,
    pub to: String,
    pub distance_km: f64,
    pub mode: TravelMode,
    /// The pair is listed in the catalog's declared-route table.
    pub declared: bool,
}

/// A simple path annotated with aggregate metrics.
///
/// All totals are derived from the legs: distance, CO₂ and duration are
/// per-leg sums rounded once, cost is applied to the rounded total distance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateRoute {
    pub path: Vec<String>,
    pub total_distance_km: f64,
    pub total_cost: f64,
    pub total_co2: f64,
    pub total_duration_h: f64,
    #[serde(skip)]
    pub legs: Vec<Leg>,
}

impl CandidateRoute {
    /// Build a candidate from an ordered list of city identifiers.
    pub fn from_path(catalog: &Catalog, path: &[CityId]) -> Result<Self> {
        let names = path
            .iter()
            .map(|&id| catalog.city_by_id(id).map(|city| city.name.clone()))
            .collect::<Result<Vec<_>>>()?;

        let mut legs = Vec::with_capacity(path.len().saturating_sub(1));
        for (window, pair) in path.windows(2).zip(names.windows(2)) {
            let distance_km = distance_between(catalog, window[0], window[1])?;
            legs.push(Leg {
                from: pair[0].clone(),
                to: pair[1].clone(),
                distance_km,
                mode: TravelMode::for_distance(distance_km),
                declared: catalog.is_declared(window[0], window[1]),
            });
        }

        Ok(Self::from_legs(names, legs))
    }

    /// Aggregate metrics over `legs` for the given city sequence.
    pub fn from_legs(path: Vec<String>, legs: Vec<Leg>) -> Self {
        let total_distance_km = round2(legs.iter().map(|leg| leg.distance_km).sum());
        let total_co2 = round2(
            legs.iter()
                .map(|leg| cost::co2_unrounded(leg.distance_km))
                .sum(),
        );
        let total_duration_h = round2(
            legs.iter()
                .map(|leg| cost::duration_unrounded(leg.distance_km))
                .sum(),
        );

        Self {
            path,
            total_distance_km,
            total_cost: cost::cost(total_distance_km),
            total_co2,
            total_duration_h,
            legs,
        }
    }

    /// The "no movement" route: a single city and zero metrics.
    pub fn stationary(city: impl Into<String>) -> Self {
        Self::from_legs(vec![city.into()], Vec::new())
    }

    /// Number of legs travelled.
    pub fn hop_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    pub fn origin(&self) -> Option<&str> {
        self.path.first().map(String::as_str)
    }

    pub fn destination(&self) -> Option<&str> {
        self.path.last().map(String::as_str)
    }
}

/// Outcome of a successful search between two cities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultBundle {
    pub cheapest: CandidateRoute,
    pub shortest: CandidateRoute,
    pub all_routes: Vec<CandidateRoute>,
}
