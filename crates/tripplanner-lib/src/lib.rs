//! Trip planner library entry points.
//!
//! This crate holds the city catalog, the flat-plane geometry and linear cost
//! model, the bounded path enumerator, and the budget-aware ranker. The query
//! facade ([`search_route`], [`recommend_routes`]) is what the CLI and the
//! HTTP service call; they should not reimplement any of it.
//!

#![deny(warnings)]

pub mod catalog;
pub mod cost;
pub mod error;
pub mod geometry;
pub mod path;
pub mod planner;
pub mod ranking;
pub mod route;

pub use catalog::{load_catalog, Catalog, CatalogFile, City, CityId, Coordinates};
pub use cost::{co2, cost, duration, TravelMode};
pub use error::{Error, Result};
pub use geometry::{distance, distance_between};
pub use path::{enumerate_paths, PathLimits, Target};
pub use planner::{recommend_routes, search_route, Budget, PlannerConfig};
pub use ranking::{best_per_destination, cheapest, rank_feasible, shortest};
pub use route::{CandidateRoute, Leg, ResultBundle};
