//! Shared fixture helpers for integration tests.

use std::path::PathBuf;

use tripplanner_lib::{load_catalog, Catalog};

/// Directory holding JSON catalogs used by tests.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Four Ecuadorian cities with two declared pairs.
#[allow(dead_code)]
pub fn andes_catalog() -> Catalog {
    load_catalog(&fixtures_dir().join("andes_catalog.json")).expect("fixture catalog loads")
}

#[allow(dead_code)]
pub fn path_of(route: &tripplanner_lib::CandidateRoute) -> Vec<&str> {
    route.path.iter().map(String::as_str).collect()
}
