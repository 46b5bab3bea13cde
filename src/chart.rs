//! Chart Renderer
//!
//! Converts aggregated rows into a grouped bar chart specification.
//! The spec serializes to the figure JSON the dashboard page hands to its
//! plotting library; nothing here draws pixels.
//!
//! Bars for cases and deaths sit side by side per county (grouped, not
//! stacked), with fixed title, axis labels, and width.

use serde::Serialize;

use crate::query::{AggregatedRow, Metric};

/// Fixed chart title
pub const CHART_TITLE: &str = "COVID-19 Cases and Deaths";
/// Fixed x-axis label
pub const X_AXIS_LABEL: &str = "Counties";
/// Fixed y-axis label
pub const Y_AXIS_LABEL: &str = "Values";
/// Fixed rendering width in pixels
pub const CHART_WIDTH: u32 = 400;

/// Trace colors, one per metric
const COLORS: [&str; 2] = ["#2196F3", "#F44336"];

/// A complete figure: one bar trace per metric plus the layout
#[derive(Debug, Serialize)]
pub struct ChartSpec {
    /// Bar traces, one per metric
    pub data: Vec<BarTrace>,
    /// Title, axis labels, bar mode, width
    pub layout: Layout,
}

/// One bar series: a metric's value per matching county row
#[derive(Debug, Serialize)]
pub struct BarTrace {
    /// Trace type, always "bar"
    #[serde(rename = "type")]
    pub trace_type: &'static str,
    /// Series label shown in the legend ("cases" or "deaths")
    pub name: String,
    /// County per aggregated row
    pub x: Vec<String>,
    /// Summed metric value per aggregated row
    pub y: Vec<u64>,
    /// Bar color
    pub marker: Marker,
}

/// Bar styling
#[derive(Debug, Serialize)]
pub struct Marker {
    /// CSS color for the series
    pub color: String,
}

/// Figure layout
#[derive(Debug, Serialize)]
pub struct Layout {
    /// Chart title
    pub title: String,
    /// Bar placement mode, always "group"
    pub barmode: &'static str,
    /// Rendering width in pixels
    pub width: u32,
    /// X-axis configuration
    pub xaxis: Axis,
    /// Y-axis configuration
    pub yaxis: Axis,
}

/// Axis configuration
#[derive(Debug, Serialize)]
pub struct Axis {
    /// Axis label
    pub title: String,
}

/// Build the grouped bar figure for a set of aggregated rows
///
/// An empty row set produces a figure with empty traces, which the plotting
/// library renders as a blank chart.
pub fn render(rows: &[AggregatedRow]) -> ChartSpec {
    let data = Metric::all()
        .iter()
        .enumerate()
        .map(|(i, metric)| {
            let (x, y): (Vec<String>, Vec<u64>) = rows
                .iter()
                .filter(|row| row.metric == *metric)
                .map(|row| (row.county.clone(), row.value))
                .unzip();

            BarTrace {
                trace_type: "bar",
                name: metric.to_string(),
                x,
                y,
                marker: Marker {
                    color: COLORS[i % COLORS.len()].to_string(),
                },
            }
        })
        .collect();

    ChartSpec {
        data,
        layout: Layout {
            title: CHART_TITLE.to_string(),
            barmode: "group",
            width: CHART_WIDTH,
            xaxis: Axis {
                title: X_AXIS_LABEL.to_string(),
            },
            yaxis: Axis {
                title: Y_AXIS_LABEL.to_string(),
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{CaseRecord, Dataset};
    use crate::query::{aggregate, Selection};

    fn chart_rows() -> Vec<AggregatedRow> {
        let dataset = Dataset::new(vec![
            CaseRecord::new("Illinois", "Cook", "2020-03-01", 8, 1),
            CaseRecord::new("Illinois", "DuPage", "2020-03-01", 2, 0),
        ]);
        let selection = Selection::new(
            vec!["Illinois".to_string()],
            vec!["Cook".to_string(), "DuPage".to_string()],
            vec!["2020-03-01".to_string()],
        );
        aggregate(&dataset, &selection).unwrap()
    }

    #[test]
    fn test_one_trace_per_metric() {
        let spec = render(&chart_rows());

        assert_eq!(spec.data.len(), 2);
        assert_eq!(spec.data[0].name, "cases");
        assert_eq!(spec.data[1].name, "deaths");
        assert!(spec.data.iter().all(|t| t.trace_type == "bar"));
    }

    #[test]
    fn test_counties_on_x_values_on_y() {
        let spec = render(&chart_rows());

        assert_eq!(spec.data[0].x, vec!["Cook", "DuPage"]);
        assert_eq!(spec.data[0].y, vec![8, 2]);
        assert_eq!(spec.data[1].x, vec!["Cook", "DuPage"]);
        assert_eq!(spec.data[1].y, vec![1, 0]);
    }

    #[test]
    fn test_fixed_layout() {
        let spec = render(&chart_rows());

        assert_eq!(spec.layout.title, "COVID-19 Cases and Deaths");
        assert_eq!(spec.layout.barmode, "group");
        assert_eq!(spec.layout.width, 400);
        assert_eq!(spec.layout.xaxis.title, "Counties");
        assert_eq!(spec.layout.yaxis.title, "Values");
    }

    #[test]
    fn test_empty_rows_render_empty_traces() {
        let spec = render(&[]);

        assert_eq!(spec.data.len(), 2);
        assert!(spec.data[0].x.is_empty());
        assert!(spec.data[1].y.is_empty());
    }

    #[test]
    fn test_spec_serializes_to_figure_json() {
        let spec = render(&chart_rows());
        let json = serde_json::to_value(&spec).unwrap();

        assert_eq!(json["data"][0]["type"], "bar");
        assert_eq!(json["data"][0]["name"], "cases");
        assert_eq!(json["layout"]["barmode"], "group");
        assert_eq!(json["layout"]["xaxis"]["title"], "Counties");
    }
}
