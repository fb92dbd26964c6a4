//! Query facade: route search and destination recommendation.
//!
//! Both entry points validate their inputs before any search work begins,
//! then run the enumerator, the budget filter, and the ranker. "Nothing
//! affordable" is a normal outcome: `None` for [`search_route`], an empty
//! list for [`recommend_routes`].
//!
//! # Example
//!
//! ```
//! use tripplanner_lib::{search_route, Catalog, PlannerConfig};
//!
//! let catalog = Catalog::builtin();
//! let config = PlannerConfig::default();
//! let bundle = search_route(&catalog, &config, "Lima", "Arequipa", 200.0)
//!     .expect("valid query")
//!     .expect("direct route is affordable");
//! assert_eq!(bundle.cheapest.path, vec!["Lima", "Arequipa"]);
//! ```

use tracing::debug;

use crate::catalog::Catalog;
use crate::error::{Error, Result};
use crate::path::{enumerate_paths, PathLimits, Target};
use crate::ranking::{best_per_destination, cheapest, rank_feasible, shortest};
use crate::route::{CandidateRoute, ResultBundle};

/// A validated spending limit. Infinity means "no limit".
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Budget(f64);

impl Budget {
    pub fn new(amount: f64) -> Result<Self> {
        if amount.is_nan() || amount < 0.0 {
            return Err(Error::InvalidBudget { budget: amount });
        }
        Ok(Self(amount))
    }

    pub fn unlimited() -> Self {
        Self(f64::INFINITY)
    }

    pub fn amount(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Budget {
    type Error = Error;

    fn try_from(amount: f64) -> Result<Self> {
        Self::new(amount)
    }
}

/// Search and recommendation settings passed explicitly into every query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannerConfig {
    /// Intermediate stops allowed by [`search_route`].
    pub max_stops: usize,
    /// Upper bound on `all_routes` in a search result.
    pub max_results: usize,
    /// Intermediate stops allowed by [`recommend_routes`]; zero means direct only.
    pub recommend_stops: usize,
    /// Global cap on enumerated candidates per query.
    pub max_candidates: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_stops: 2,
            max_results: 3,
            recommend_stops: 0,
            max_candidates: 10_000,
        }
    }
}

impl PlannerConfig {
    pub fn with_max_stops(mut self, max_stops: usize) -> Self {
        self.max_stops = max_stops;
        self
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn with_recommend_stops(mut self, recommend_stops: usize) -> Self {
        self.recommend_stops = recommend_stops;
        self
    }

    pub fn with_max_candidates(mut self, max_candidates: usize) -> Self {
        self.max_candidates = max_candidates;
        self
    }

    /// Reject settings that would make every query return nothing.
    pub fn validate(&self) -> Result<()> {
        if self.max_results == 0 {
            return Err(Error::InvalidConfig {
                message: "max_results must be at least 1".to_string(),
            });
        }
        if self.max_candidates == 0 {
            return Err(Error::InvalidConfig {
                message: "max_candidates must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    fn search_limits(&self) -> PathLimits {
        PathLimits {
            max_stops: self.max_stops,
            max_candidates: self.max_candidates,
        }
    }

    fn recommend_limits(&self) -> PathLimits {
        PathLimits {
            max_stops: self.recommend_stops,
            max_candidates: self.max_candidates,
        }
    }
}

/// Find the cheapest and fastest affordable routes between two cities.
///
/// Representatives are chosen over the full feasible set; `all_routes` is
/// then bounded to `max_results` entries in ascending cost order. Returns
/// `Ok(None)` when no candidate fits the budget.
pub fn search_route(
    catalog: &Catalog,
    config: &PlannerConfig,
    origin: &str,
    destination: &str,
    budget: f64,
) -> Result<Option<ResultBundle>> {
    config.validate()?;
    let budget = Budget::new(budget)?;
    let origin_id = catalog.resolve(origin)?;
    let destination_id = catalog.resolve(destination)?;

    let candidates = enumerate_paths(
        catalog,
        origin_id,
        Target::City(destination_id),
        config.search_limits(),
    )?;
    let mut ranked = rank_feasible(candidates, budget.amount(), None);

    let (Some(cheapest_route), Some(shortest_route)) =
        (cheapest(&ranked).cloned(), shortest(&ranked).cloned())
    else {
        debug!(origin, destination, "no affordable route");
        return Ok(None);
    };

    ranked.truncate(config.max_results);
    debug!(
        origin,
        destination,
        routes = ranked.len(),
        cheapest = cheapest_route.total_cost,
        "search complete"
    );

    Ok(Some(ResultBundle {
        cheapest: cheapest_route,
        shortest: shortest_route,
        all_routes: ranked,
    }))
}

/// Affordable destinations from `origin`, cheapest first.
///
/// Enumerates paths to every other city with `recommend_stops` intermediate
/// stops, ranks them together, and keeps the cheapest route per destination.
/// The origin never appears as a destination.
pub fn recommend_routes(
    catalog: &Catalog,
    config: &PlannerConfig,
    origin: &str,
    budget: f64,
) -> Result<Vec<CandidateRoute>> {
    config.validate()?;
    let budget = Budget::new(budget)?;
    let origin_id = catalog.resolve(origin)?;

    let candidates = enumerate_paths(
        catalog,
        origin_id,
        Target::Anywhere,
        config.recommend_limits(),
    )?;
    let ranked = rank_feasible(candidates, budget.amount(), None);
    let recommendations = best_per_destination(ranked);

    debug!(
        origin,
        destinations = recommendations.len(),
        "recommendation complete"
    );
    Ok(recommendations)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_rejects_negative_and_nan() {
        assert!(matches!(
            Budget::new(-0.01),
            Err(Error::InvalidBudget { .. })
        ));
        assert!(Budget::new(f64::NAN).is_err());
        assert_eq!(Budget::new(0.0).unwrap().amount(), 0.0);
        assert!(Budget::unlimited().amount().is_infinite());
        assert!(Budget::try_from(12.5).is_ok());
    }

    #[test]
    fn config_defaults() {
        let config = PlannerConfig::default();
        assert_eq!(config.max_stops, 2);
        assert_eq!(config.max_results, 3);
        assert_eq!(config.recommend_stops, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn config_rejects_zero_results() {
        let config = PlannerConfig::default().with_max_results(0);
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidConfig { .. })
        ));
    }

    #[test]
    fn search_validates_budget_before_cities() {
        let catalog = Catalog::builtin();
        let err = search_route(&catalog, &PlannerConfig::default(), "Nowhere", "Lima", -1.0)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidBudget { .. }));
    }

    #[test]
    fn search_picks_direct_route_between_lima_and_arequipa() {
        let catalog = Catalog::builtin();
        let bundle = search_route(&catalog, &PlannerConfig::default(), "Lima", "Arequipa", 1000.0)
            .unwrap()
            .unwrap();
        assert_eq!(bundle.cheapest.path, vec!["Lima", "Arequipa"]);
        assert_eq!(bundle.shortest.path, vec!["Lima", "Arequipa"]);
        assert_eq!(bundle.all_routes.len(), 3);
        assert_eq!(bundle.all_routes[1].path, vec!["Lima", "Cusco", "Arequipa"]);
        assert_eq!(bundle.all_routes[2].path, vec!["Lima", "Puno", "Arequipa"]);
    }

    #[test]
    fn recommend_is_direct_only_by_default() {
        let catalog = Catalog::builtin();
        let routes =
            recommend_routes(&catalog, &PlannerConfig::default(), "Lima", 1000.0).unwrap();
        assert_eq!(routes.len(), 8);
        assert!(routes.iter().all(|route| route.hop_count() == 1));
        assert_eq!(routes[0].path, vec!["Lima", "Trujillo"]);
    }
}
