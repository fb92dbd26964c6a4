//! Bounded enumeration of simple paths, shortest paths first.
//!
//! The search explores the complete city set in catalog order; declared
//! routes play no part. Paths are emitted by increasing stop count (an
//! iterative-deepening walk), and depth-first in catalog order within each
//! stop count. With `n` cities and `s` allowed stops the number of visited
//! paths grows as O(n^(s+1)), so both knobs are configuration and a global
//! candidate cap is checked during traversal rather than afterwards. Because
//! shorter paths come first, the cap only ever discards the longest paths,
//! and the candidates for `s` stops are always a prefix of those for `s + 1`.

use tracing::{debug, warn};

use crate::catalog::{Catalog, CityId};
use crate::error::Result;
use crate::route::CandidateRoute;

/// Where a path may end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Emit only paths ending at this city and never extend past it.
    City(CityId),
    /// Emit a path at every city reached other than the origin.
    Anywhere,
}

/// Bounds applied during traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathLimits {
    /// Intermediate cities allowed between origin and destination.
    pub max_stops: usize,
    /// Traversal stops once this many candidates have been emitted.
    pub max_candidates: usize,
}

impl Default for PathLimits {
    fn default() -> Self {
        Self {
            max_stops: 2,
            max_candidates: 10_000,
        }
    }
}

/// Enumerate simple paths from `origin` and annotate each with metrics.
///
/// Candidates are returned in emission order: fewer stops first, then
/// catalog order. When `target` is the origin itself, the single-city path
/// is the only candidate.
pub fn enumerate_paths(
    catalog: &Catalog,
    origin: CityId,
    target: Target,
    limits: PathLimits,
) -> Result<Vec<CandidateRoute>> {
    let origin_city = catalog.city_by_id(origin)?;
    if target == Target::City(origin) {
        return Ok(vec![CandidateRoute::stationary(origin_city.name.clone())]);
    }
    if let Target::City(destination) = target {
        catalog.city_by_id(destination)?;
    }

    // A simple path can hold at most every city once.
    let deepest = limits.max_stops.min(catalog.len().saturating_sub(2));
    let mut walker = Walker {
        catalog,
        target,
        max_candidates: limits.max_candidates,
        path_len: 0,
        visited: vec![false; catalog.len()],
        path: Vec::with_capacity(deepest + 2),
        emitted: Vec::new(),
        truncated: false,
    };
    for stops in 0..=deepest {
        walker.path_len = stops + 2;
        walker.visit(origin);
        if walker.truncated {
            break;
        }
    }

    if walker.truncated {
        warn!(
            origin = %origin_city.name,
            cap = limits.max_candidates,
            "candidate cap reached, enumeration stopped early"
        );
    }
    debug!(
        origin = %origin_city.name,
        candidates = walker.emitted.len(),
        max_stops = limits.max_stops,
        "enumerated paths"
    );

    walker
        .emitted
        .iter()
        .map(|path| CandidateRoute::from_path(catalog, path))
        .collect()
}

struct Walker<'a> {
    catalog: &'a Catalog,
    target: Target,
    max_candidates: usize,
    /// Number of cities in the paths emitted by the current pass.
    path_len: usize,
    visited: Vec<bool>,
    path: Vec<CityId>,
    emitted: Vec<Vec<CityId>>,
    truncated: bool,
}

impl Walker<'_> {
    fn visit(&mut self, city: CityId) {
        if self.truncated {
            return;
        }

        self.path.push(city);
        self.visited[city] = true;

        if self.path.len() == self.path_len {
            let emit = match self.target {
                Target::City(destination) => city == destination,
                Target::Anywhere => true,
            };
            if emit {
                self.emit();
            }
        } else if self.target != Target::City(city) {
            for next in self.catalog.ids() {
                if !self.visited[next] {
                    self.visit(next);
                }
            }
        }

        self.visited[city] = false;
        self.path.pop();
    }

    fn emit(&mut self) {
        if self.emitted.len() >= self.max_candidates {
            self.truncated = true;
            return;
        }
        self.emitted.push(self.path.clone());
    }
}
