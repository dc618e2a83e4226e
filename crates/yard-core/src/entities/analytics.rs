use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Aggregated usage metrics for one reporting period.
///
/// Counts are JSON numbers on the wire and may arrive float-encoded
/// (`1200.0`) or fractional when the backend averages over a window.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsData {
    /// Period label as produced by the backend (e.g. `2026-10-01`, `W41`).
    pub period: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    pub requests: f64,
    pub tokens: f64,
    pub cost: f64,
    /// Mean latency in milliseconds.
    pub latency: f64,
    pub errors: f64,
}

/// Per-provider request and cost breakdown.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ProviderData {
    pub provider: String,
    pub requests: f64,
    pub cost: f64,
    /// Chart colour assigned by the backend.
    pub color: String,
}

/// Per-model usage breakdown.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ModelData {
    pub model: String,
    pub requests: f64,
    pub tokens: f64,
    pub cost: f64,
    pub avg_latency: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProjectData {
    pub id: String,
    pub name: String,
}

/// Response body of the analytics read endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct AnalyticsDataResponse {
    pub analytics: Vec<AnalyticsData>,
    pub providers: Vec<ProviderData>,
    pub models: Vec<ModelData>,
    pub projects: Vec<ProjectData>,
}

impl AnalyticsDataResponse {
    #[must_use]
    pub fn total_requests(&self) -> f64 {
        self.analytics.iter().map(|row| row.requests).sum()
    }

    #[must_use]
    pub fn total_tokens(&self) -> f64 {
        self.analytics.iter().map(|row| row.tokens).sum()
    }

    #[must_use]
    pub fn total_cost(&self) -> f64 {
        self.analytics.iter().map(|row| row.cost).sum()
    }

    #[must_use]
    pub fn total_errors(&self) -> f64 {
        self.analytics.iter().map(|row| row.errors).sum()
    }

    /// Look up a project's display name by id.
    #[must_use]
    pub fn project_name(&self, id: &str) -> Option<&str> {
        self.projects
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.name.as_str())
    }
}
