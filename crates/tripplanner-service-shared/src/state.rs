//! Application state shared by axum handlers.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;
use tripplanner_lib::{load_catalog, Catalog, Error as LibError, PlannerConfig};

/// Error during application state initialization.
#[derive(Debug, Error)]
pub enum AppStateError {
    #[error("catalog not found: {}", .0.display())]
    CatalogNotFound(PathBuf),

    #[error("failed to load catalog: {0}")]
    CatalogLoad(#[source] LibError),

    #[error("invalid planner configuration: {0}")]
    InvalidConfig(#[source] LibError),
}

/// Shared application state for all axum handlers.
///
/// Cheap to clone; the catalog is immutable and shared behind an `Arc`.
///
/// # Example
///
/// ```ignore
/// use axum::{extract::State, routing::get, Router};
/// use tripplanner_service_shared::AppState;
///
/// async fn handler(State(state): State<AppState>) -> String {
///     state.catalog().len().to_string()
/// }
///
/// let state = AppState::load(None, Default::default()).unwrap();
/// let app = Router::new().route("/count", get(handler)).with_state(state);
/// ```
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    catalog: Catalog,
    config: PlannerConfig,
}

impl AppState {
    /// Load state from a JSON catalog, or the built-in catalog when `path` is `None`.
    pub fn load(path: Option<&Path>, config: PlannerConfig) -> Result<Self, AppStateError> {
        config.validate().map_err(AppStateError::InvalidConfig)?;

        let catalog = match path {
            Some(path) => {
                tracing::info!(path = %path.display(), "loading catalog");
                load_catalog(path).map_err(|err| match err {
                    LibError::CatalogNotFound { path } => AppStateError::CatalogNotFound(path),
                    other => AppStateError::CatalogLoad(other),
                })?
            }
            None => {
                tracing::info!("using built-in catalog");
                Catalog::builtin()
            }
        };
        tracing::info!(cities = catalog.len(), "catalog loaded");

        Ok(Self::from_components(catalog, config))
    }

    /// Build state from pre-loaded parts; used by tests.
    pub fn from_components(catalog: Catalog, config: PlannerConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner { catalog, config }),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.inner.config
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("cities", &self.inner.catalog.len())
            .field("config", &self.inner.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture_path() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/andes_catalog.json")
    }

    #[test]
    fn test_load_builtin() {
        let state = AppState::load(None, PlannerConfig::default()).unwrap();
        assert_eq!(state.catalog().len(), 9);
        assert_eq!(state.config().max_results, 3);
    }

    #[test]
    fn test_load_fixture() {
        let state = AppState::load(Some(&fixture_path()), PlannerConfig::default()).unwrap();
        assert_eq!(state.catalog().len(), 4);
    }

    #[test]
    fn test_load_missing_file() {
        let result = AppState::load(
            Some(Path::new("/nonexistent/catalog.json")),
            PlannerConfig::default(),
        );
        assert!(matches!(
            result,
            Err(AppStateError::CatalogNotFound(ref path)) if path == Path::new("/nonexistent/catalog.json")
        ));
    }

    #[test]
    fn test_load_unreadable_path_is_a_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = AppState::load(Some(dir.path()), PlannerConfig::default());
        assert!(matches!(
            result,
            Err(AppStateError::CatalogLoad(LibError::Io(_)))
        ));
    }

    #[test]
    fn test_load_rejects_invalid_config() {
        let config = PlannerConfig::default().with_max_results(0);
        let result = AppState::load(None, config);
        assert!(matches!(result, Err(AppStateError::InvalidConfig(_))));
    }

    #[test]
    fn test_clone_shares_catalog() {
        let state = AppState::from_components(Catalog::builtin(), PlannerConfig::default());
        let cloned = state.clone();
        assert!(std::ptr::eq(state.catalog(), cloned.catalog()));
    }

    #[test]
    fn test_debug_is_compact() {
        let state = AppState::from_components(Catalog::builtin(), PlannerConfig::default());
        assert!(format!("{state:?}").contains("cities: 9"));
    }
}
