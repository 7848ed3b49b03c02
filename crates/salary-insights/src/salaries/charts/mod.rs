mod labels;
mod theme;
pub mod views;

use super::aggregation::{DashboardViews, GroupMean, SalaryDistribution, SalaryTrend};
use labels::{company_size_label, experience_level_label};
use views::{AxisBinding, ChartDescriptor, ChartKind, ChartPoint, ChartSeries, ChartValue};

pub use theme::ChartTheme;
pub use views::DashboardCharts;

const SALARY_AXIS: AxisBinding = AxisBinding {
    field: "salary_in_usd",
    label: "Salary (USD)",
};

pub fn trend_chart(trend: &SalaryTrend, theme: ChartTheme) -> ChartDescriptor {
    let points = trend
        .points
        .iter()
        .map(|point| ChartPoint {
            x: ChartValue::Year(point.work_year),
            y: point.salary_in_usd,
            label: None,
        })
        .collect();

    ChartDescriptor {
        id: "salary_trend_graph",
        kind: ChartKind::Line,
        title: format!("Salary Trend for {}", trend.job_title),
        x_axis: AxisBinding {
            field: "work_year",
            label: "Work Year",
        },
        y_axis: SALARY_AXIS,
        markers: true,
        style: theme.style(),
        series: vec![ChartSeries {
            name: trend.job_title.clone(),
            color: theme.color(0),
            points,
            summary: None,
        }],
    }
}

pub fn top_paying_chart(means: &[GroupMean], limit: usize, theme: ChartTheme) -> ChartDescriptor {
    ChartDescriptor {
        id: "top_paying_jobs",
        kind: ChartKind::Bar,
        title: format!("Top {limit} Highest-Paying Job Titles"),
        x_axis: AxisBinding {
            field: "job_title",
            label: "Job Title",
        },
        y_axis: SALARY_AXIS,
        markers: false,
        style: theme.style(),
        series: vec![mean_series("Average salary", means, theme, |_| None)],
    }
}

/// One box per experience level, each in its own color.
pub fn experience_chart(
    distributions: &[SalaryDistribution],
    theme: ChartTheme,
) -> ChartDescriptor {
    let series = distributions
        .iter()
        .enumerate()
        .map(|(index, group)| {
            let label = experience_level_label(&group.experience_level).map(str::to_string);
            ChartSeries {
                name: group.experience_level.clone(),
                color: theme.color(index),
                points: group
                    .salaries
                    .iter()
                    .map(|salary| ChartPoint {
                        x: ChartValue::Category(group.experience_level.clone()),
                        y: *salary,
                        label: label.clone(),
                    })
                    .collect(),
                summary: group.summary(),
            }
        })
        .collect();

    ChartDescriptor {
        id: "salary_distribution_experience",
        kind: ChartKind::Box,
        title: "Salary Distribution by Experience Level".to_string(),
        x_axis: AxisBinding {
            field: "experience_level",
            label: "Experience Level",
        },
        y_axis: SALARY_AXIS,
        markers: false,
        style: theme.style(),
        series,
    }
}

pub fn company_size_chart(means: &[GroupMean], theme: ChartTheme) -> ChartDescriptor {
    ChartDescriptor {
        id: "salary_by_company_size",
        kind: ChartKind::Bar,
        title: "Salary by Company Size".to_string(),
        x_axis: AxisBinding {
            field: "company_size",
            label: "Company Size",
        },
        y_axis: SALARY_AXIS,
        markers: false,
        style: theme.style(),
        series: vec![mean_series(
            "Average salary",
            means,
            theme,
            company_size_label,
        )],
    }
}

pub fn render_dashboard(
    views: &DashboardViews,
    top_paying_limit: usize,
    theme: ChartTheme,
) -> DashboardCharts {
    DashboardCharts {
        job_title: views.trend.job_title.clone(),
        trend: trend_chart(&views.trend, theme),
        top_paying: top_paying_chart(&views.top_paying, top_paying_limit, theme),
        experience_distribution: experience_chart(&views.experience_distribution, theme),
        company_size: company_size_chart(&views.company_size_averages, theme),
    }
}

fn mean_series<F>(name: &str, means: &[GroupMean], theme: ChartTheme, label: F) -> ChartSeries
where
    F: Fn(&str) -> Option<&'static str>,
{
    ChartSeries {
        name: name.to_string(),
        color: theme.color(0),
        points: means
            .iter()
            .map(|entry| ChartPoint {
                x: ChartValue::Category(entry.key.clone()),
                y: entry.mean_salary_usd,
                label: label(&entry.key).map(str::to_string),
            })
            .collect(),
        summary: None,
    }
}
