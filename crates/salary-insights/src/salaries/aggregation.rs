use super::record::SalaryRecord;
use super::store::RecordStore;
use super::summary::FiveNumberSummary;
use serde::Serialize;
use std::collections::HashMap;

pub const DEFAULT_TOP_PAYING_LIMIT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendPoint {
    pub work_year: i32,
    pub salary_in_usd: f64,
}

/// One point per matching record, ordered by year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalaryTrend {
    pub job_title: String,
    pub points: Vec<TrendPoint>,
}

/// Arithmetic mean of `salary_in_usd` over the records sharing `key`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupMean {
    pub key: String,
    pub mean_salary_usd: f64,
    pub records: usize,
}

/// Every salary recorded for one experience level, in store order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalaryDistribution {
    pub experience_level: String,
    pub salaries: Vec<f64>,
}

impl SalaryDistribution {
    pub fn summary(&self) -> Option<FiveNumberSummary> {
        FiveNumberSummary::from_values(&self.salaries)
    }
}

/// The four views behind the dashboard for one selected job title.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardViews {
    pub trend: SalaryTrend,
    pub top_paying: Vec<GroupMean>,
    pub experience_distribution: Vec<SalaryDistribution>,
    pub company_size_averages: Vec<GroupMean>,
}

pub fn salary_trend(store: &RecordStore, job_title: &str) -> SalaryTrend {
    let mut points: Vec<TrendPoint> = store
        .records()
        .iter()
        .filter(|record| record.job_title == job_title)
        .map(|record| TrendPoint {
            work_year: record.work_year,
            salary_in_usd: record.salary_in_usd,
        })
        .collect();
    // Stable, so rows sharing a year stay in store order.
    points.sort_by_key(|point| point.work_year);

    SalaryTrend {
        job_title: job_title.to_string(),
        points,
    }
}

/// The `limit` job titles with the highest mean salary, best first. Equal
/// means keep the order in which their titles first appear.
pub fn top_paying_job_titles(store: &RecordStore, limit: usize) -> Vec<GroupMean> {
    let mut means = group_means(store.records(), |record| record.job_title.as_str());
    means.sort_by(|left, right| right.mean_salary_usd.total_cmp(&left.mean_salary_usd));
    means.truncate(limit);
    means
}

pub fn distribution_by_experience(store: &RecordStore) -> Vec<SalaryDistribution> {
    group_salaries(store.records(), |record| record.experience_level.as_str())
        .into_iter()
        .map(|(experience_level, salaries)| SalaryDistribution {
            experience_level: experience_level.to_string(),
            salaries,
        })
        .collect()
}

pub fn average_by_company_size(store: &RecordStore) -> Vec<GroupMean> {
    group_means(store.records(), |record| record.company_size.as_str())
}

pub fn compute_dashboard_views(store: &RecordStore, job_title: &str) -> DashboardViews {
    compute_dashboard_views_with_limit(store, job_title, DEFAULT_TOP_PAYING_LIMIT)
}

pub fn compute_dashboard_views_with_limit(
    store: &RecordStore,
    job_title: &str,
    top_paying_limit: usize,
) -> DashboardViews {
    DashboardViews {
        trend: salary_trend(store, job_title),
        top_paying: top_paying_job_titles(store, top_paying_limit),
        experience_distribution: distribution_by_experience(store),
        company_size_averages: average_by_company_size(store),
    }
}

fn group_means<'a, F>(records: &'a [SalaryRecord], key: F) -> Vec<GroupMean>
where
    F: Fn(&'a SalaryRecord) -> &'a str,
{
    group_salaries(records, key)
        .into_iter()
        .map(|(key, salaries)| GroupMean {
            key: key.to_string(),
            mean_salary_usd: mean(&salaries),
            records: salaries.len(),
        })
        .collect()
}

/// Groups salaries by key, with groups in order of first appearance.
fn group_salaries<'a, F>(records: &'a [SalaryRecord], key: F) -> Vec<(&'a str, Vec<f64>)>
where
    F: Fn(&'a SalaryRecord) -> &'a str,
{
    let mut index: HashMap<&'a str, usize> = HashMap::new();
    let mut groups: Vec<(&'a str, Vec<f64>)> = Vec::new();

    for record in records {
        let group_key = key(record);
        let slot = *index.entry(group_key).or_insert_with(|| {
            groups.push((group_key, Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(record.salary_in_usd);
    }

    groups
}

// Groups are built from existing rows, so `values` is never empty.
fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(
        work_year: i32,
        job_title: &str,
        experience_level: &str,
        company_size: &str,
        salary_in_usd: f64,
    ) -> SalaryRecord {
        SalaryRecord {
            work_year,
            job_title: job_title.to_string(),
            experience_level: experience_level.to_string(),
            company_size: company_size.to_string(),
            salary_in_usd,
        }
    }

    fn fixture() -> RecordStore {
        RecordStore::from_records(vec![
            record(2024, "Data Engineer", "SE", "M", 160_000.0),
            record(2022, "Analyst", "EN", "S", 50_000.0),
            record(2023, "Data Engineer", "MI", "L", 110_000.0),
            record(2023, "Analyst", "MI", "M", 70_000.0),
            record(2021, "Data Engineer", "SE", "M", 130_000.0),
            record(2024, "Researcher", "EX", "L", 240_000.0),
        ])
    }

    #[test]
    fn trend_emits_one_point_per_record_even_within_a_year() {
        let store = RecordStore::from_records(vec![
            record(2023, "Engineer", "MI", "M", 100_000.0),
            record(2023, "Engineer", "MI", "M", 120_000.0),
            record(2024, "Engineer", "MI", "M", 140_000.0),
        ]);

        let trend = salary_trend(&store, "Engineer");
        assert_eq!(
            trend.points,
            vec![
                TrendPoint {
                    work_year: 2023,
                    salary_in_usd: 100_000.0
                },
                TrendPoint {
                    work_year: 2023,
                    salary_in_usd: 120_000.0
                },
                TrendPoint {
                    work_year: 2024,
                    salary_in_usd: 140_000.0
                },
            ]
        );
    }

    #[test]
    fn trend_filters_by_title_and_sorts_by_year() {
        let trend = salary_trend(&fixture(), "Data Engineer");
        assert_eq!(trend.job_title, "Data Engineer");
        let years: Vec<i32> = trend.points.iter().map(|point| point.work_year).collect();
        assert_eq!(years, vec![2021, 2023, 2024]);
        let salaries: Vec<f64> = trend.points.iter().map(|p| p.salary_in_usd).collect();
        assert_eq!(salaries, vec![130_000.0, 110_000.0, 160_000.0]);
    }

    #[test]
    fn trend_for_unknown_title_is_empty() {
        let trend = salary_trend(&fixture(), "Astronaut");
        assert!(trend.points.is_empty());
        assert_eq!(trend.job_title, "Astronaut");
    }

    #[test]
    fn top_paying_orders_by_mean_descending() {
        let top = top_paying_job_titles(&fixture(), 10);
        let keys: Vec<&str> = top.iter().map(|entry| entry.key.as_str()).collect();
        assert_eq!(keys, vec!["Researcher", "Data Engineer", "Analyst"]);
        assert_eq!(top[1].mean_salary_usd, 400_000.0 / 3.0);
        assert_eq!(top[1].records, 3);
        assert_eq!(top[2].mean_salary_usd, 60_000.0);
    }

    #[test]
    fn top_paying_returns_all_titles_when_fewer_than_limit() {
        assert_eq!(top_paying_job_titles(&fixture(), 10).len(), 3);
        assert_eq!(top_paying_job_titles(&fixture(), 2).len(), 2);
        assert!(top_paying_job_titles(&fixture(), 0).is_empty());
    }

    #[test]
    fn top_paying_ties_keep_first_encountered_title() {
        let store = RecordStore::from_records(vec![
            record(2024, "Zeta", "SE", "M", 90_000.0),
            record(2024, "Alpha", "SE", "M", 100_000.0),
            record(2024, "Beta", "SE", "M", 80_000.0),
            record(2024, "Beta", "SE", "M", 100_000.0),
            record(2024, "Gamma", "SE", "M", 90_000.0),
        ]);

        let keys: Vec<String> = top_paying_job_titles(&store, 10)
            .into_iter()
            .map(|entry| entry.key)
            .collect();
        assert_eq!(keys, vec!["Alpha", "Zeta", "Beta", "Gamma"]);
    }

    #[test]
    fn distribution_keeps_raw_salaries_grouped_by_first_seen_level() {
        let distribution = distribution_by_experience(&fixture());
        let levels: Vec<&str> = distribution
            .iter()
            .map(|group| group.experience_level.as_str())
            .collect();
        assert_eq!(levels, vec!["SE", "EN", "MI", "EX"]);
        assert_eq!(distribution[0].salaries, vec![160_000.0, 130_000.0]);
        assert_eq!(distribution[2].salaries, vec![110_000.0, 70_000.0]);

        let summary = distribution[0].summary().expect("summary");
        assert_eq!(summary.min, 130_000.0);
        assert_eq!(summary.median, 145_000.0);
        assert_eq!(summary.max, 160_000.0);
    }

    #[test]
    fn company_size_means_match_hand_computation() {
        let averages = average_by_company_size(&fixture());
        assert_eq!(
            averages,
            vec![
                GroupMean {
                    key: "M".to_string(),
                    mean_salary_usd: (160_000.0 + 70_000.0 + 130_000.0) / 3.0,
                    records: 3,
                },
                GroupMean {
                    key: "S".to_string(),
                    mean_salary_usd: 50_000.0,
                    records: 1,
                },
                GroupMean {
                    key: "L".to_string(),
                    mean_salary_usd: 175_000.0,
                    records: 2,
                },
            ]
        );
    }

    #[test]
    fn empty_store_yields_empty_views() {
        let views = compute_dashboard_views(&RecordStore::default(), "Analyst");
        assert!(views.trend.points.is_empty());
        assert!(views.top_paying.is_empty());
        assert!(views.experience_distribution.is_empty());
        assert!(views.company_size_averages.is_empty());
    }

    #[test]
    fn dashboard_views_respect_custom_limit() {
        let views = compute_dashboard_views_with_limit(&fixture(), "Analyst", 1);
        assert_eq!(views.top_paying.len(), 1);
        assert_eq!(views.top_paying[0].key, "Researcher");
        assert_eq!(views.trend.points.len(), 2);
    }
}
