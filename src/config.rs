//! Generation settings.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::enumeration::RouteLimits;
use crate::error::Result;
use crate::models::Vehicle;

/// Settings for generating a region's candidate routes.
///
/// Every field has a default, so a JSON file only needs the values it
/// changes.
///
/// # Examples
///
/// ```
/// use u_routegen::config::GenerationConfig;
///
/// let config = GenerationConfig::from_json_str(r#"{ "min_neighbors": 2 }"#).unwrap();
/// assert_eq!(config.min_neighbors, 2);
/// assert_eq!(config.limits.max_stops(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Every non-hub node connects to at least this many nearest neighbors.
    pub min_neighbors: usize,
    /// Feasibility bounds for merged routes.
    pub limits: RouteLimits,
    /// Vehicle used to price routes.
    pub vehicle: Vehicle,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            min_neighbors: 3,
            limits: RouteLimits::default(),
            vehicle: Vehicle::default(),
        }
    }
}

impl GenerationConfig {
    /// Sets the minimum neighbor count.
    pub fn with_min_neighbors(mut self, k: usize) -> Self {
        self.min_neighbors = k;
        self
    }

    /// Sets the route limits.
    pub fn with_limits(mut self, limits: RouteLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Parses settings from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads settings from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}
