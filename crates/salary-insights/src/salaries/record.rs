use serde::{Deserialize, Deserializer, Serialize};

/// Stand-in for rows that arrive without a job title.
pub const UNKNOWN_JOB_TITLE: &str = "Unknown";

/// A cleaned row of the salary dataset. Every field is populated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalaryRecord {
    pub work_year: i32,
    pub job_title: String,
    pub experience_level: String,
    pub company_size: String,
    pub salary_in_usd: f64,
}

/// A row as it appears in the source before cleaning.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawSalaryRow {
    #[serde(deserialize_with = "deserialize_year")]
    pub work_year: i32,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub job_title: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub experience_level: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub company_size: Option<String>,
    #[serde(default)]
    pub salary_in_usd: Option<f64>,
}

impl RawSalaryRow {
    /// Applies the cleaning policy to one row: a blank title becomes
    /// [`UNKNOWN_JOB_TITLE`], a row without salary, experience level or
    /// company size is discarded.
    pub fn into_record(self) -> Option<SalaryRecord> {
        let salary_in_usd = self.salary_in_usd.filter(|value| value.is_finite())?;
        let experience_level = non_blank(self.experience_level)?;
        let company_size = non_blank(self.company_size)?;
        let job_title =
            non_blank(self.job_title).unwrap_or_else(|| UNKNOWN_JOB_TITLE.to_string());

        Some(SalaryRecord {
            work_year: self.work_year,
            job_title,
            experience_level,
            company_size,
            salary_in_usd,
        })
    }
}

impl From<SalaryRecord> for RawSalaryRow {
    fn from(record: SalaryRecord) -> Self {
        Self {
            work_year: record.work_year,
            job_title: Some(record.job_title),
            experience_level: Some(record.experience_level),
            company_size: Some(record.company_size),
            salary_in_usd: Some(record.salary_in_usd),
        }
    }
}

/// Cleans a sequence of rows, keeping source order among the survivors.
pub fn clean<I>(rows: I) -> Vec<SalaryRecord>
where
    I: IntoIterator<Item = RawSalaryRow>,
{
    rows.into_iter().filter_map(RawSalaryRow::into_record).collect()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

// Exports occasionally write the year as a float ("2024.0").
fn deserialize_year<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_year(&raw).ok_or_else(|| {
        serde::de::Error::custom(format!("work_year '{raw}' is not a whole calendar year"))
    })
}

fn parse_year(raw: &str) -> Option<i32> {
    let trimmed = raw.trim();
    if let Ok(year) = trimmed.parse::<i32>() {
        return Some(year);
    }

    let value = trimmed.parse::<f64>().ok()?;
    if value.is_finite() && value.fract() == 0.0 && value.abs() <= i32::MAX as f64 {
        Some(value as i32)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(
        job_title: Option<&str>,
        experience_level: Option<&str>,
        company_size: Option<&str>,
        salary_in_usd: Option<f64>,
    ) -> RawSalaryRow {
        RawSalaryRow {
            work_year: 2024,
            job_title: job_title.map(str::to_string),
            experience_level: experience_level.map(str::to_string),
            company_size: company_size.map(str::to_string),
            salary_in_usd,
        }
    }

    #[test]
    fn blank_job_title_becomes_unknown() {
        let record = row(None, Some("SE"), Some("M"), Some(90_000.0))
            .into_record()
            .expect("row kept");
        assert_eq!(record.job_title, UNKNOWN_JOB_TITLE);

        let record = row(Some("   "), Some("SE"), Some("M"), Some(90_000.0))
            .into_record()
            .expect("row kept");
        assert_eq!(record.job_title, UNKNOWN_JOB_TITLE);
    }

    #[test]
    fn rows_missing_required_fields_are_dropped() {
        assert!(row(Some("Analyst"), None, Some("M"), Some(1.0))
            .into_record()
            .is_none());
        assert!(row(Some("Analyst"), Some("EN"), None, Some(1.0))
            .into_record()
            .is_none());
        assert!(row(Some("Analyst"), Some("EN"), Some("S"), None)
            .into_record()
            .is_none());
        assert!(row(Some("Analyst"), Some("EN"), Some("S"), Some(f64::NAN))
            .into_record()
            .is_none());
    }

    #[test]
    fn cleaning_twice_changes_nothing() {
        let rows = vec![
            row(Some(" Data Scientist "), Some("SE"), Some("L"), Some(150_000.0)),
            row(None, Some("MI"), Some("M"), Some(80_000.0)),
            row(Some("Analyst"), None, Some("S"), Some(60_000.0)),
            row(Some("Analyst"), Some("EN"), Some("S"), Some(55_000.0)),
        ];

        let once = clean(rows);
        let twice = clean(once.clone().into_iter().map(RawSalaryRow::from));
        assert_eq!(once.len(), 3);
        assert_eq!(once, twice);
        assert_eq!(once[0].job_title, "Data Scientist");
    }

    #[test]
    fn parse_year_accepts_integral_floats() {
        assert_eq!(parse_year("2023"), Some(2023));
        assert_eq!(parse_year(" 2024.0 "), Some(2024));
        assert_eq!(parse_year("2024.5"), None);
        assert_eq!(parse_year(""), None);
    }
}
