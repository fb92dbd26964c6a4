//! Budget filtering, ordering, and representative selection.

use std::collections::HashSet;

use tracing::debug;

use crate::route::CandidateRoute;

/// Keep feasible candidates, order them by cost, and drop repeated paths.
///
/// The sort is stable, so equal-cost candidates keep their emission order,
/// and the first occurrence of a path wins. `limit` truncates the ranked
/// list when present.
pub fn rank_feasible(
    candidates: Vec<CandidateRoute>,
    budget: f64,
    limit: Option<usize>,
) -> Vec<CandidateRoute> {
    let total = candidates.len();
    let mut feasible: Vec<CandidateRoute> = candidates
        .into_iter()
        .filter(|candidate| candidate.total_cost <= budget)
        .collect();
    feasible.sort_by(|a, b| a.total_cost.total_cmp(&b.total_cost));

    let mut seen = HashSet::new();
    feasible.retain(|candidate| seen.insert(candidate.path.clone()));

    if let Some(limit) = limit {
        feasible.truncate(limit);
    }

    debug!(total, feasible = feasible.len(), budget, "ranked candidates");
    feasible
}

/// The lowest-cost candidate; the earliest wins a tie.
pub fn cheapest(routes: &[CandidateRoute]) -> Option<&CandidateRoute> {
    routes
        .iter()
        .min_by(|a, b| a.total_cost.total_cmp(&b.total_cost))
}

/// The fastest candidate; the earliest wins a tie.
pub fn shortest(routes: &[CandidateRoute]) -> Option<&CandidateRoute> {
    routes
        .iter()
        .min_by(|a, b| a.total_duration_h.total_cmp(&b.total_duration_h))
}

/// Keep only the first candidate for each final city, preserving order.
pub fn best_per_destination(routes: Vec<CandidateRoute>) -> Vec<CandidateRoute> {
    let mut seen = HashSet::new();
    routes
        .into_iter()
        .filter(|route| seen.insert(route.destination().map(str::to_string)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(path: &[&str], cost: f64, duration: f64) -> CandidateRoute {
        CandidateRoute {
            path: path.iter().map(|s| s.to_string()).collect(),
            total_distance_km: cost * 4.0,
            total_cost: cost,
            total_co2: 0.0,
            total_duration_h: duration,
            legs: Vec::new(),
        }
    }

    #[test]
    fn filters_out_candidates_over_budget() {
        let ranked = rank_feasible(
            vec![
                candidate(&["A", "B"], 10.0, 1.0),
                candidate(&["A", "C", "B"], 30.0, 2.0),
            ],
            20.0,
            None,
        );
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].total_cost, 10.0);
    }

    #[test]
    fn budget_is_inclusive() {
        let ranked = rank_feasible(vec![candidate(&["A", "B"], 20.0, 1.0)], 20.0, None);
        assert_eq!(ranked.len(), 1);
    }

    #[test]
    fn sorts_by_cost_keeping_ties_in_emission_order() {
        let ranked = rank_feasible(
            vec![
                candidate(&["A", "X", "B"], 15.0, 1.0),
                candidate(&["A", "Y", "B"], 5.0, 1.0),
                candidate(&["A", "Z", "B"], 15.0, 1.0),
            ],
            100.0,
            None,
        );
        let middles: Vec<_> = ranked.iter().map(|c| c.path[1].as_str()).collect();
        assert_eq!(middles, vec!["Y", "X", "Z"]);
    }

    #[test]
    fn removes_duplicate_paths_first_seen_wins() {
        let ranked = rank_feasible(
            vec![
                candidate(&["A", "B"], 10.0, 1.0),
                candidate(&["A", "B"], 10.0, 9.0),
            ],
            100.0,
            None,
        );
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].total_duration_h, 1.0);
    }

    #[test]
    fn truncates_after_dedup() {
        let ranked = rank_feasible(
            vec![
                candidate(&["A", "B"], 1.0, 1.0),
                candidate(&["A", "B"], 1.0, 1.0),
                candidate(&["A", "C", "B"], 2.0, 1.0),
                candidate(&["A", "D", "B"], 3.0, 1.0),
            ],
            100.0,
            Some(2),
        );
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[1].path, vec!["A", "C", "B"]);
    }

    #[test]
    fn empty_when_nothing_is_feasible() {
        let ranked = rank_feasible(vec![candidate(&["A", "B"], 10.0, 1.0)], 0.0, None);
        assert!(ranked.is_empty());
    }

    #[test]
    fn selectors_break_ties_by_first_occurrence() {
        let routes = vec![
            candidate(&["A", "B"], 5.0, 3.0),
            candidate(&["A", "C", "B"], 5.0, 1.0),
            candidate(&["A", "D", "B"], 7.0, 1.0),
        ];
        assert_eq!(cheapest(&routes).unwrap().path, vec!["A", "B"]);
        assert_eq!(shortest(&routes).unwrap().path, vec!["A", "C", "B"]);
        assert!(cheapest(&[]).is_none());
    }

    #[test]
    fn keeps_first_route_per_destination() {
        let kept = best_per_destination(vec![
            candidate(&["A", "B"], 1.0, 1.0),
            candidate(&["A", "C"], 2.0, 1.0),
            candidate(&["A", "C", "B"], 3.0, 1.0),
        ]);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[1].path, vec!["A", "C"]);
    }
}
