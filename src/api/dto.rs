//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};

use crate::query::Selection;

// ============================================
// OPTION DTOs
// ============================================

/// Response for the three option-list endpoints
#[derive(Debug, Serialize)]
pub struct OptionsResponse {
    /// Selectable values, in the order the input should offer them
    pub options: Vec<String>,
    /// Total count
    pub total: usize,
}

impl OptionsResponse {
    /// Wrap an option list
    pub fn new(options: Vec<String>) -> Self {
        Self {
            total: options.len(),
            options,
        }
    }
}

/// Query parameters for the county options endpoint
#[derive(Debug, Deserialize)]
pub struct CountyOptionsParams {
    /// Comma-separated state names; absent means no state selected
    #[serde(default)]
    pub states: Option<String>,
}

impl CountyOptionsParams {
    /// Split the comma-separated list into state names, dropping empties
    pub fn state_list(&self) -> Vec<String> {
        self.states
            .as_deref()
            .unwrap_or("")
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect()
    }
}

// ============================================
// CHART DTOs
// ============================================

/// Chart request: the full selection posted by the dashboard page
///
/// Missing fields deserialize to empty lists, which the engine treats as
/// "nothing selected" and answers with the no-update sentinel.
#[derive(Debug, Default, Deserialize)]
pub struct ChartRequest {
    /// Selected state names
    #[serde(default)]
    pub states: Vec<String>,
    /// Selected county names
    #[serde(default)]
    pub counties: Vec<String>,
    /// Selected date strings
    #[serde(default)]
    pub dates: Vec<String>,
}

impl From<ChartRequest> for Selection {
    fn from(req: ChartRequest) -> Self {
        Selection::new(req.states, req.counties, req.dates)
    }
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy or unhealthy
    pub status: String,
    /// Dataset summary
    pub dataset: DatasetSummary,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}

/// Dataset details reported by /health
#[derive(Debug, Serialize)]
pub struct DatasetSummary {
    /// Number of records loaded
    pub rows: usize,
    /// Number of distinct states
    pub states: usize,
    /// Path the dataset was loaded from
    pub path: String,
}
