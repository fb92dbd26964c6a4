//! Service settings read from the environment.
//!
//! | variable | default |
//! |---|---|
//! | `TRIPPLANNER_CATALOG_PATH` | built-in catalog |
//! | `SERVICE_PORT` | `8080` |
//! | `PLANNER_MAX_STOPS` | `2` |
//! | `PLANNER_MAX_RESULTS` | `3` |
//! | `PLANNER_RECOMMEND_STOPS` | `0` |

use std::path::PathBuf;

use thiserror::Error;
use tripplanner_lib::PlannerConfig;

const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a non-negative integer, got '{value}'")]
    InvalidNumber { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    pub catalog_path: Option<PathBuf>,
    pub port: u16,
    pub planner: PlannerConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            port: DEFAULT_PORT,
            planner: PlannerConfig::default(),
        }
    }
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup; unset or empty values keep defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let defaults = PlannerConfig::default();

        let planner = PlannerConfig {
            max_stops: parse_or(get("PLANNER_MAX_STOPS"), "PLANNER_MAX_STOPS", defaults.max_stops)?,
            max_results: parse_or(
                get("PLANNER_MAX_RESULTS"),
                "PLANNER_MAX_RESULTS",
                defaults.max_results,
            )?,
            recommend_stops: parse_or(
                get("PLANNER_RECOMMEND_STOPS"),
                "PLANNER_RECOMMEND_STOPS",
                defaults.recommend_stops,
            )?,
            ..defaults
        };

        Ok(Self {
            catalog_path: get("TRIPPLANNER_CATALOG_PATH").map(PathBuf::from),
            port: parse_or(get("SERVICE_PORT"), "SERVICE_PORT", DEFAULT_PORT)?,
            planner,
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    value: Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { name, value: raw }),
    }
}
