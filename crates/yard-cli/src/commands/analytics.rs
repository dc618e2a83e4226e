use serde::Serialize;
use yard_analytics::{AnalyticsClient, AnalyticsQuery};
use yard_config::AnalyticsConfig;
use yard_core::entities::AnalyticsDataResponse;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AnalyticsArgs;
use crate::output::output;

#[derive(Debug, Serialize)]
struct AnalyticsReport {
    time_range: String,
    project: String,
    total_requests: f64,
    total_tokens: f64,
    total_cost: f64,
    total_errors: f64,
    #[serde(flatten)]
    data: AnalyticsDataResponse,
}

impl AnalyticsReport {
    fn new(query: AnalyticsQuery, data: AnalyticsDataResponse) -> Self {
        Self {
            time_range: query.time_range,
            project: query.project,
            total_requests: data.total_requests(),
            total_tokens: data.total_tokens(),
            total_cost: data.total_cost(),
            total_errors: data.total_errors(),
            data,
        }
    }
}

pub async fn handle(
    args: &AnalyticsArgs,
    config: &AnalyticsConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let client = AnalyticsClient::from_config(config)?;
    let query = AnalyticsQuery::new(args.time_range.clone(), args.project.clone());
    let data = client.get_analytics_data(&query).await?;
    output(&AnalyticsReport::new(query, data), flags.format)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use yard_core::entities::{AnalyticsData, ProjectData};

    use super::*;

    fn row(period: &str, requests: f64, cost: f64) -> AnalyticsData {
        AnalyticsData {
            period: period.into(),
            project_id: None,
            requests,
            tokens: requests * 100.0,
            cost,
            latency: 100.0,
            errors: 1.0,
        }
    }

    #[test]
    fn report_adds_totals_next_to_backend_fields() {
        let data = AnalyticsDataResponse {
            analytics: vec![row("mon", 10.0, 0.5), row("tue", 30.0, 1.5)],
            projects: vec![ProjectData {
                id: "p1".into(),
                name: "Checkout".into(),
            }],
            ..AnalyticsDataResponse::default()
        };
        let report = AnalyticsReport::new(AnalyticsQuery::new("7d", "p1"), data);
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["total_requests"], 40.0);
        assert_eq!(json["total_tokens"], 4000.0);
        assert_eq!(json["total_cost"], 2.0);
        assert_eq!(json["total_errors"], 2.0);
        assert_eq!(json["analytics"].as_array().map(Vec::len), Some(2));
        assert_eq!(json["projects"][0]["name"], "Checkout");
    }
}
