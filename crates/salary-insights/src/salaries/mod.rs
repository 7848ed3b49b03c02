mod aggregation;
pub mod charts;
mod parser;
mod record;
mod store;
mod summary;

pub use aggregation::{
    average_by_company_size, compute_dashboard_views, compute_dashboard_views_with_limit,
    distribution_by_experience, salary_trend, top_paying_job_titles, DashboardViews, GroupMean,
    SalaryDistribution, SalaryTrend, TrendPoint, DEFAULT_TOP_PAYING_LIMIT,
};
pub use charts::{render_dashboard, ChartTheme, DashboardCharts};
pub use record::{clean, RawSalaryRow, SalaryRecord, UNKNOWN_JOB_TITLE};
pub use store::{DataLoadError, DatasetError, RecordStore};
pub use summary::FiveNumberSummary;
