use crate::infra::{load_dashboard, Dashboard};
use clap::Args;
use salary_insights::error::AppError;
use salary_insights::salaries::charts::views::ChartValue;
use salary_insights::salaries::{
    compute_dashboard_views_with_limit, render_dashboard, DashboardViews, DatasetError,
};
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct TitlesArgs {
    /// Override the configured salary CSV path
    #[arg(long)]
    pub(crate) dataset: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ReportArgs {
    /// Job title to chart (defaults to the first title in the dataset)
    #[arg(long)]
    pub(crate) job_title: Option<String>,
    /// Override the configured salary CSV path
    #[arg(long)]
    pub(crate) dataset: Option<PathBuf>,
    /// Override how many job titles the top-paying view keeps
    #[arg(long)]
    pub(crate) top: Option<usize>,
    /// Print the chart descriptors as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_titles(args: TitlesArgs) -> Result<(), AppError> {
    let dashboard = load_dashboard(args.dataset)?;
    for title in dashboard.job_titles()? {
        println!("{title}");
    }
    Ok(())
}

pub(crate) fn run_report(args: ReportArgs) -> Result<(), AppError> {
    let ReportArgs {
        job_title,
        dataset,
        top,
        json,
    } = args;

    let mut dashboard = load_dashboard(dataset)?;
    if let Some(limit) = top {
        dashboard.top_paying_limit = limit;
    }

    let job_title = match job_title {
        Some(title) => title,
        None => dashboard
            .default_job_title()
            .map(str::to_string)
            .ok_or(DatasetError::Empty)?,
    };

    if json {
        let charts = dashboard.charts(&job_title);
        println!("{}", serde_json::to_string_pretty(&charts)?);
        return Ok(());
    }

    let views = compute_dashboard_views_with_limit(
        &dashboard.store,
        &job_title,
        dashboard.top_paying_limit,
    );
    print!("{}", render_text_report(&dashboard, &views));
    Ok(())
}

pub(crate) fn render_text_report(dashboard: &Dashboard, views: &DashboardViews) -> String {
    let charts = render_dashboard(views, dashboard.top_paying_limit, dashboard.theme);
    let mut out = String::new();

    out.push_str(&format!("Salary dashboard for {}\n", views.trend.job_title));
    out.push_str(&format!(
        "Dataset: {} records, {} job titles\n",
        dashboard.store.len(),
        dashboard.store.distinct_job_titles().len()
    ));

    out.push_str(&format!("\n{}\n", charts.trend.title));
    if views.trend.points.is_empty() {
        out.push_str("- no records for this job title\n");
    }
    for point in &views.trend.points {
        out.push_str(&format!(
            "- {}: {}\n",
            point.work_year,
            format_usd(point.salary_in_usd)
        ));
    }

    out.push_str(&format!("\n{}\n", charts.top_paying.title));
    for (rank, entry) in views.top_paying.iter().enumerate() {
        out.push_str(&format!(
            "{:>2}. {}: {} avg over {} records\n",
            rank + 1,
            entry.key,
            format_usd(entry.mean_salary_usd),
            entry.records
        ));
    }

    out.push_str(&format!("\n{}\n", charts.experience_distribution.title));
    for (group, series) in views
        .experience_distribution
        .iter()
        .zip(&charts.experience_distribution.series)
    {
        let label = series
            .points
            .first()
            .and_then(|point| point.label.as_deref())
            .unwrap_or(group.experience_level.as_str());
        match group.summary() {
            Some(summary) => out.push_str(&format!(
                "- {} ({}): n={} min {} | q1 {} | median {} | q3 {} | max {}\n",
                group.experience_level,
                label,
                group.salaries.len(),
                format_usd(summary.min),
                format_usd(summary.q1),
                format_usd(summary.median),
                format_usd(summary.q3),
                format_usd(summary.max)
            )),
            None => out.push_str(&format!("- {}: no salaries\n", group.experience_level)),
        }
    }

    out.push_str(&format!("\n{}\n", charts.company_size.title));
    for point in charts
        .company_size
        .series
        .iter()
        .flat_map(|series| series.points.iter())
    {
        let code = match &point.x {
            ChartValue::Category(code) => code.clone(),
            ChartValue::Year(year) => year.to_string(),
        };
        let average = format_usd(point.y);
        match &point.label {
            Some(label) => out.push_str(&format!("- {code} ({label}): {average} avg\n")),
            None => out.push_str(&format!("- {code}: {average} avg\n")),
        }
    }

    out
}

/// Whole dollars with thousands separators, e.g. `$146,250`.
pub(crate) fn format_usd(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use salary_insights::salaries::{
        compute_dashboard_views, ChartTheme, RecordStore, SalaryRecord,
    };

    #[test]
    fn format_usd_groups_thousands() {
        assert_eq!(format_usd(0.0), "$0");
        assert_eq!(format_usd(999.4), "$999");
        assert_eq!(format_usd(146_250.0), "$146,250");
        assert_eq!(format_usd(1_234_567.8), "$1,234,568");
        assert_eq!(format_usd(-5_000.0), "-$5,000");
    }

    #[test]
    fn text_report_lists_every_view() {
        let record = |work_year, job_title: &str, level: &str, size: &str, salary| SalaryRecord {
            work_year,
            job_title: job_title.to_string(),
            experience_level: level.to_string(),
            company_size: size.to_string(),
            salary_in_usd: salary,
        };
        let dashboard = Dashboard {
            store: RecordStore::from_records(vec![
                record(2024, "Data Analyst", "EN", "S", 60_000.0),
                record(2023, "Data Analyst", "SE", "L", 90_000.0),
            ]),
            top_paying_limit: 10,
            theme: ChartTheme::Plain,
        };
        let views = compute_dashboard_views(&dashboard.store, "Data Analyst");

        let report = render_text_report(&dashboard, &views);
        assert!(report.contains("Salary Trend for Data Analyst"));
        assert!(report.contains("- 2023: $90,000\n- 2024: $60,000"));
        assert!(report.contains(" 1. Data Analyst: $75,000 avg over 2 records"));
        assert!(report.contains("- SE (Senior): n=1"));
        assert!(report.contains("- L (Large): $90,000 avg"));
    }
}
