use super::parser;
use super::record::{clean, RawSalaryRow, SalaryRecord};
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

/// The source could not be turned into rows.
#[derive(Debug, thiserror::Error)]
pub enum DataLoadError {
    #[error("failed to read salary dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid salary CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("salary dataset is missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<&'static str>),
}

/// Startup failures for the record store. Both are fatal.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error(transparent)]
    Load(#[from] DataLoadError),
    #[error("salary dataset contains no usable records after cleaning")]
    Empty,
}

impl From<std::io::Error> for DatasetError {
    fn from(err: std::io::Error) -> Self {
        Self::Load(DataLoadError::Io(err))
    }
}

/// Cleaned salary records held in memory for the lifetime of the process.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordStore {
    records: Vec<SalaryRecord>,
}

impl RecordStore {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        info!(path = %path.display(), "loading salary dataset");
        Self::from_reader(file)
    }

    /// Parses and cleans CSV input. Refuses a source that leaves nothing to
    /// chart once incomplete rows are dropped.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let rows = parser::parse_rows(reader)?;
        let total = rows.len();
        let store = Self::from_rows(rows);
        let dropped = total - store.len();

        if dropped > 0 {
            warn!(dropped, "discarded salary rows with missing required fields");
        }
        if store.is_empty() {
            return Err(DatasetError::Empty);
        }

        info!(
            records = store.len(),
            job_titles = store.distinct_job_titles().len(),
            "salary dataset ready"
        );
        Ok(store)
    }

    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = RawSalaryRow>,
    {
        Self {
            records: clean(rows),
        }
    }

    pub fn from_records(records: Vec<SalaryRecord>) -> Self {
        Self::from_rows(records.into_iter().map(RawSalaryRow::from))
    }

    pub fn records(&self) -> &[SalaryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Job titles in the order they first appear, without duplicates.
    pub fn distinct_job_titles(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .map(|record| record.job_title.as_str())
            .filter(|title| seen.insert(*title))
            .collect()
    }

    /// Options for the job title selector.
    pub fn job_title_options(&self) -> Result<Vec<&str>, DatasetError> {
        let titles = self.distinct_job_titles();
        if titles.is_empty() {
            return Err(DatasetError::Empty);
        }
        Ok(titles)
    }
}
