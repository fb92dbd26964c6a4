//! Fixtures for handler tests.

use std::path::PathBuf;
use std::sync::OnceLock;

use tripplanner_lib::{Catalog, PlannerConfig};

use crate::state::AppState;

/// JSON catalog shared with the library and CLI tests.
pub const TEST_FIXTURE_PATH: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../../docs/fixtures/andes_catalog.json"
);

static TEST_STATE: OnceLock<AppState> = OnceLock::new();

/// Shared state over the built-in catalog with default settings.
pub fn test_state() -> AppState {
    TEST_STATE
        .get_or_init(|| AppState::from_components(Catalog::builtin(), PlannerConfig::default()))
        .clone()
}

/// State over the four-city fixture catalog.
///
/// # Panics
///
/// Panics if the fixture cannot be loaded.
pub fn fixture_state(config: PlannerConfig) -> AppState {
    let path = fixture_catalog_path();
    AppState::load(Some(&path), config)
        .unwrap_or_else(|e| panic!("failed to load test fixture from {:?}: {}", path, e))
}

pub fn fixture_catalog_path() -> PathBuf {
    PathBuf::from(TEST_FIXTURE_PATH)
}

/// City names present in the fixture catalog.
pub mod fixture_cities {
    pub const QUITO: &str = "Quito";
    pub const GUAYAQUIL: &str = "Guayaquil";
    pub const CUENCA: &str = "Cuenca";
    pub const LOJA: &str = "Loja";
}
