//! Flat-plane distances between catalog cities.

use crate::catalog::{Catalog, CityId};
use crate::cost::round2;
use crate::error::Result;

/// Kilometres per degree, a low-latitude approximation.
pub const KM_PER_DEGREE: f64 = 111.0;

/// Distance in kilometres between two named cities, rounded to 2 decimals.
pub fn distance(catalog: &Catalog, a: &str, b: &str) -> Result<f64> {
    let from = catalog.resolve(a)?;
    let to = catalog.resolve(b)?;
    distance_between(catalog, from, to)
}

/// Distance in kilometres between two cities addressed by identifier.
pub fn distance_between(catalog: &Catalog, from: CityId, to: CityId) -> Result<f64> {
    let a = catalog.city_by_id(from)?;
    let b = catalog.city_by_id(to)?;
    Ok(round2(a.position.planar_distance_to(&b.position) * KM_PER_DEGREE))
}
