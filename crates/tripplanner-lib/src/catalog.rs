//! City gazetteer used by every query.
//!
//! A [`Catalog`] is an ordered, immutable set of uniquely named cities with
//! their coordinates, plus a small table of declared city pairs. The table is
//! informational: path search always explores the complete city set.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Index of a city within its catalog. Follows catalog order.
pub type CityId = usize;

/// Minimum Jaro-Winkler similarity for a name to be offered as a suggestion.
const FUZZY_MATCH_THRESHOLD: f64 = 0.8;

/// Number of suggestions attached to an unknown-city error.
const MAX_SUGGESTIONS: usize = 3;

const BUILTIN_CITIES: [(&str, f64, f64); 9] = [
    ("Lima", -12.0464, -77.0428),
    ("Cusco", -13.5319, -71.9675),
    ("Arequipa", -16.409, -71.5375),
    ("Trujillo", -8.11599, -79.02998),
    ("Puno", -15.8402, -70.0219),
    ("Iquitos", -3.7437, -73.2516),
    ("Piura", -5.1945, -80.6328),
    ("Tacna", -18.0066, -70.2463),
    ("Chiclayo", -6.7714, -79.8395),
];

const BUILTIN_ROUTES: [(&str, &str); 6] = [
    ("Lima", "Cusco"),
    ("Lima", "Arequipa"),
    ("Cusco", "Puno"),
    ("Trujillo", "Chiclayo"),
    ("Piura", "Chiclayo"),
    ("Tacna", "Arequipa"),
];

/// Latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Straight-line distance in degrees, treating lat/lon as a flat plane.
    pub fn planar_distance_to(&self, other: &Self) -> f64 {
        let dlat = self.lat - other.lat;
        let dlon = self.lon - other.lon;
        (dlat * dlat + dlon * dlon).sqrt()
    }

    fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }
}

/// A named city with its position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    pub position: Coordinates,
}

impl City {
    pub fn new(name: impl Into<String>, position: Coordinates) -> Self {
        Self {
            name: name.into(),
            position,
        }
    }
}

/// On-disk catalog layout.
///
/// ```json
/// {
///   "cities": ["Lima", "Cusco"],
///   "coords": {"Lima": [-12.0464, -77.0428], "Cusco": [-13.5319, -71.9675]},
///   "routes": [["Lima", "Cusco"]]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogFile {
    pub cities: Vec<String>,
    pub coords: BTreeMap<String, [f64; 2]>,
    #[serde(default)]
    pub routes: Vec<(String, String)>,
}

/// Immutable city catalog shared by all queries.
#[derive(Debug, Clone)]
pub struct Catalog {
    cities: Vec<City>,
    name_to_id: HashMap<String, CityId>,
    declared: HashSet<(CityId, CityId)>,
}

impl Catalog {
    /// Validate and build a catalog from cities and declared pairs.
    pub fn new<S: AsRef<str>>(cities: Vec<City>, declared_routes: &[(S, S)]) -> Result<Self> {
        if cities.is_empty() {
            return Err(Error::EmptyCatalog);
        }

        let mut seen = HashSet::new();
        for city in &cities {
            if !seen.insert(city.name.as_str()) {
                return Err(Error::DuplicateCity {
                    name: city.name.clone(),
                });
            }
            if !city.position.is_finite() {
                return Err(Error::InvalidCoordinates {
                    name: city.name.clone(),
                });
            }
        }

        let mut catalog = Self::assemble(cities);
        for (a, b) in declared_routes {
            let from = catalog.resolve(a.as_ref())?;
            let to = catalog.resolve(b.as_ref())?;
            catalog.declared.insert(ordered_pair(from, to));
        }

        Ok(catalog)
    }

    /// The built-in gazetteer of nine Peruvian cities.
    pub fn builtin() -> Self {
        let cities = BUILTIN_CITIES
            .iter()
            .map(|&(name, lat, lon)| City::new(name, Coordinates::new(lat, lon)))
            .collect();
        let mut catalog = Self::assemble(cities);
        for (a, b) in BUILTIN_ROUTES {
            if let (Some(from), Some(to)) = (catalog.city_id_by_name(a), catalog.city_id_by_name(b))
            {
                catalog.declared.insert(ordered_pair(from, to));
            }
        }
        catalog
    }

    /// Parse a catalog from its JSON representation.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::try_from(file)
    }

    fn assemble(cities: Vec<City>) -> Self {
        let name_to_id = cities
            .iter()
            .enumerate()
            .map(|(id, city)| (city.name.clone(), id))
            .collect();
        Self {
            cities,
            name_to_id,
            declared: HashSet::new(),
        }
    }

    /// Number of cities in the catalog.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Cities in catalog order.
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// City identifiers in catalog order.
    pub fn ids(&self) -> impl Iterator<Item = CityId> {
        0..self.cities.len()
    }

    pub fn city(&self, id: CityId) -> Option<&City> {
        self.cities.get(id)
    }

    pub(crate) fn city_by_id(&self, id: CityId) -> Result<&City> {
        self.cities.get(id).ok_or_else(|| Error::UnknownCity {
            name: format!("#{id}"),
            suggestions: Vec::new(),
        })
    }

    /// Lookup a city identifier by its case-sensitive name.
    pub fn city_id_by_name(&self, name: &str) -> Option<CityId> {
        self.name_to_id.get(name).copied()
    }

    pub fn city_name(&self, id: CityId) -> Option<&str> {
        self.cities.get(id).map(|city| city.name.as_str())
    }

    /// Resolve a name to an identifier, attaching suggestions when unknown.
    pub fn resolve(&self, name: &str) -> Result<CityId> {
        self.city_id_by_name(name)
            .ok_or_else(|| Error::UnknownCity {
                name: name.to_string(),
                suggestions: self.fuzzy_city_matches(name, MAX_SUGGESTIONS),
            })
    }

    /// Names similar to `query`, best match first.
    ///
    /// Comparison is case-insensitive Jaro-Winkler similarity; names below
    /// the threshold are dropped.
    pub fn fuzzy_city_matches(&self, query: &str, limit: usize) -> Vec<String> {
        let needle = query.to_lowercase();
        let mut scored: Vec<(f64, &str)> = self
            .cities
            .iter()
            .map(|city| {
                let score = strsim::jaro_winkler(&needle, &city.name.to_lowercase());
                (score, city.name.as_str())
            })
            .filter(|(score, _)| *score >= FUZZY_MATCH_THRESHOLD)
            .collect();
        scored.sort_by(|a, b| b.0.total_cmp(&a.0));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, name)| name.to_string())
            .collect()
    }

    /// Whether the unordered pair appears in the declared-route table.
    pub fn is_declared(&self, a: CityId, b: CityId) -> bool {
        self.declared.contains(&ordered_pair(a, b))
    }

    /// Declared pairs as names, sorted by catalog order.
    pub fn declared_routes(&self) -> Vec<(&str, &str)> {
        let mut pairs: Vec<_> = self.declared.iter().copied().collect();
        pairs.sort_unstable();
        pairs
            .into_iter()
            .filter_map(|(a, b)| Some((self.city_name(a)?, self.city_name(b)?)))
            .collect()
    }

    /// Export the catalog in its on-disk layout.
    pub fn to_file(&self) -> CatalogFile {
        CatalogFile {
            cities: self.cities.iter().map(|city| city.name.clone()).collect(),
            coords: self
                .cities
                .iter()
                .map(|city| (city.name.clone(), [city.position.lat, city.position.lon]))
                .collect(),
            routes: self
                .declared_routes()
                .into_iter()
                .map(|(a, b)| (a.to_string(), b.to_string()))
                .collect(),
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TryFrom<CatalogFile> for Catalog {
    type Error = Error;

    fn try_from(file: CatalogFile) -> Result<Self> {
        let cities = file
            .cities
            .into_iter()
            .map(|name| match file.coords.get(&name) {
                Some(&[lat, lon]) => Ok(City::new(name, Coordinates::new(lat, lon))),
                None => Err(Error::MissingCoordinates { name }),
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(cities, &file.routes)
    }
}

/// Load a catalog from a JSON file.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(Error::CatalogNotFound {
                path: path.to_path_buf(),
            });
        }
        Err(err) => return Err(err.into()),
    };
    let catalog = Catalog::from_json_str(&contents)?;
    debug!(
        path = %path.display(),
        cities = catalog.len(),
        "loaded catalog"
    );
    Ok(catalog)
}

fn ordered_pair(a: CityId, b: CityId) -> (CityId, CityId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
