use super::super::summary::FiveNumberSummary;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Line,
    Bar,
    Box,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AxisBinding {
    pub field: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ChartValue {
    Year(i32),
    Category(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub x: ChartValue,
    pub y: f64,
    /// Display text for coded categories such as `SE` or `L`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub name: String,
    pub color: &'static str,
    pub points: Vec<ChartPoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<FiveNumberSummary>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartStyle {
    pub template: &'static str,
    pub background: &'static str,
    pub font_color: &'static str,
}

/// Renderer-agnostic description of one chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartDescriptor {
    pub id: &'static str,
    pub kind: ChartKind,
    pub title: String,
    pub x_axis: AxisBinding,
    pub y_axis: AxisBinding,
    pub markers: bool,
    pub style: ChartStyle,
    pub series: Vec<ChartSeries>,
}

impl ChartDescriptor {
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|series| series.points.len()).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardCharts {
    pub job_title: String,
    pub trend: ChartDescriptor,
    pub top_paying: ChartDescriptor,
    pub experience_distribution: ChartDescriptor,
    pub company_size: ChartDescriptor,
}
