use super::record::RawSalaryRow;
use super::store::DataLoadError;
use std::io::Read;

pub(crate) const REQUIRED_COLUMNS: [&str; 5] = [
    "work_year",
    "job_title",
    "experience_level",
    "company_size",
    "salary_in_usd",
];

pub(crate) fn parse_rows<R: Read>(reader: R) -> Result<Vec<RawSalaryRow>, DataLoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?;
    let missing: Vec<&'static str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|column| !headers.iter().any(|header| header == *column))
        .collect();
    if !missing.is_empty() {
        return Err(DataLoadError::MissingColumns(missing));
    }

    let mut rows = Vec::new();
    for row in csv_reader.deserialize::<RawSalaryRow>() {
        rows.push(row?);
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parses_rows_and_ignores_extra_columns() {
        let csv = "work_year,experience_level,employment_type,job_title,salary,salary_currency,salary_in_usd,employee_residence,remote_ratio,company_location,company_size\n\
2024,SE,FT,Data Scientist,150000,USD,150000,US,0,US,M\n\
2023,MI,FT,,90000,USD,,US,100,US,L\n";

        let rows = parse_rows(Cursor::new(csv)).expect("parse");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].job_title.as_deref(), Some("Data Scientist"));
        assert_eq!(rows[0].salary_in_usd, Some(150_000.0));
        assert!(rows[1].job_title.is_none());
        assert!(rows[1].salary_in_usd.is_none());
    }

    #[test]
    fn reports_every_missing_column() {
        let csv = "work_year,job_title,salary_in_usd\n2024,Analyst,50000\n";
        let error = parse_rows(Cursor::new(csv)).expect_err("columns missing");
        match error {
            DataLoadError::MissingColumns(columns) => {
                assert_eq!(columns, vec!["experience_level", "company_size"]);
            }
            other => panic!("expected missing columns, got {other:?}"),
        }
    }

    #[test]
    fn malformed_salary_is_a_load_error() {
        let csv = "work_year,job_title,experience_level,company_size,salary_in_usd\n\
2024,Analyst,EN,S,lots\n";
        let error = parse_rows(Cursor::new(csv)).expect_err("salary not numeric");
        assert!(matches!(error, DataLoadError::Csv(_)));
    }

    #[test]
    fn missing_work_year_is_a_load_error() {
        let csv = "work_year,job_title,experience_level,company_size,salary_in_usd\n\
,Analyst,EN,S,50000\n";
        let error = parse_rows(Cursor::new(csv)).expect_err("year required");
        assert!(matches!(error, DataLoadError::Csv(_)));
    }
}
