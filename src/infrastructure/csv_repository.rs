// CSV repository implementation
use crate::application::post_repository::PostRepository;
use crate::domain::error::{ChartError, FieldParseError};
use crate::domain::record::PostRecord;
use chrono::NaiveDate;
use serde::Deserialize;
use std::io::Read;
use std::path::PathBuf;

const REQUIRED_COLUMNS: [&str; 6] = [
    "timestamp",
    "calculated_sentiment",
    "flair",
    "title",
    "body",
    "url",
];

/// Loads post records from a delimited file. Rows with malformed fields are
/// dropped with a warning; a missing file or missing required columns abort
/// the load.
#[derive(Debug, Clone)]
pub struct CsvPostRepository {
    path: PathBuf,
}

#[derive(Debug, Deserialize)]
struct RawRow {
    timestamp: String,
    calculated_sentiment: String,
    flair: String,
    title: String,
    body: String,
    url: String,
    #[serde(default)]
    score: String,
    #[serde(default)]
    upvote_ratio: String,
}

impl CsvPostRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_records<R: Read>(reader: R) -> Result<Vec<PostRecord>, ChartError> {
        let mut csv_reader = csv::Reader::from_reader(reader);

        let headers = csv_reader
            .headers()
            .map_err(|e| ChartError::DataLoad(format!("cannot read header row: {e}")))?
            .clone();
        let missing: Vec<&str> = REQUIRED_COLUMNS
            .iter()
            .filter(|col| !headers.iter().any(|h| h == **col))
            .copied()
            .collect();
        if !missing.is_empty() {
            return Err(ChartError::DataLoad(format!(
                "missing required columns: {}",
                missing.join(", ")
            )));
        }

        let mut records = Vec::new();
        for (idx, result) in csv_reader.deserialize::<RawRow>().enumerate() {
            // Header is line 1; the first data row is line 2.
            let row_number = idx + 2;
            let raw = match result {
                Ok(raw) => raw,
                Err(e) => {
                    tracing::warn!("dropping row {}: {}", row_number, e);
                    continue;
                }
            };
            match parse_row(row_number, raw) {
                Ok(record) => records.push(record),
                Err(e) => tracing::warn!("dropping {}", e),
            }
        }

        Ok(records)
    }
}

impl PostRepository for CsvPostRepository {
    fn load(&self) -> Result<Vec<PostRecord>, ChartError> {
        let file = std::fs::File::open(&self.path).map_err(|e| {
            ChartError::DataLoad(format!("cannot open {}: {e}", self.path.display()))
        })?;
        let records = Self::read_records(file)?;
        tracing::debug!(
            "loaded {} records from {}",
            records.len(),
            self.path.display()
        );
        Ok(records)
    }
}

fn parse_row(row: usize, raw: RawRow) -> Result<PostRecord, FieldParseError> {
    let timestamp = NaiveDate::parse_from_str(&raw.timestamp, "%Y-%m-%d")
        .map_err(|e| FieldParseError::new(row, "timestamp", e.to_string()))?;
    let calculated_sentiment =
        parse_number(row, "calculated_sentiment", &raw.calculated_sentiment)?;
    let score = parse_optional_number(row, "score", &raw.score)?;
    let upvote_ratio = parse_optional_number(row, "upvote_ratio", &raw.upvote_ratio)?;

    Ok(PostRecord::new(
        timestamp,
        calculated_sentiment,
        score,
        upvote_ratio,
        raw.flair,
        raw.title,
        raw.body,
        raw.url,
    ))
}

fn parse_number(row: usize, field: &'static str, text: &str) -> Result<f64, FieldParseError> {
    let value: f64 = text
        .trim()
        .parse()
        .map_err(|_| FieldParseError::new(row, field, format!("'{text}' is not a number")))?;
    if !value.is_finite() {
        return Err(FieldParseError::new(
            row,
            field,
            format!("'{text}' is not finite"),
        ));
    }
    Ok(value)
}

// Columns the dataset may omit entirely; an absent value reads as zero.
fn parse_optional_number(
    row: usize,
    field: &'static str,
    text: &str,
) -> Result<f64, FieldParseError> {
    if text.trim().is_empty() {
        return Ok(0.0);
    }
    parse_number(row, field, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(csv: &str) -> Result<Vec<PostRecord>, ChartError> {
        CsvPostRepository::read_records(csv.as_bytes())
    }

    const HEADER: &str = "timestamp,calculated_sentiment,flair,title,body,url,score,upvote_ratio";

    #[test]
    fn test_loads_well_formed_rows() {
        let csv = format!(
            "{HEADER}\n2020-03-01,0.5,Support,first,hello,https://a,10,0.9\n2020-03-02,-0.3,News,second,NA,https://b,3,0.7\n"
        );
        let records = load(&csv).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].calculated_sentiment, 0.5);
        assert_eq!(records[1].flair, "News");
        // The literal "NA" body survives the load; display maps it to empty.
        assert_eq!(records[1].body, "NA");
        assert_eq!(records[1].body_text(), None);
    }

    #[test]
    fn test_malformed_rows_are_dropped_not_fatal() {
        let csv = format!(
            "{HEADER}\n2020-03-01,0.5,Support,ok,b,u,1,0.9\nnot-a-date,0.5,News,bad date,b,u,1,0.9\n2020-03-03,abc,News,bad number,b,u,1,0.9\n2020-03-04,NaN,News,not finite,b,u,1,0.9\n2020-03-05,0.1,News,ok too,b,u,1,0.9\n"
        );
        let records = load(&csv).unwrap();
        let titles: Vec<&str> = records.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["ok", "ok too"]);
    }

    #[test]
    fn test_missing_required_column_fails_load() {
        let csv = "timestamp,flair,title,body,url\n2020-03-01,Support,t,b,u\n";
        match load(csv) {
            Err(ChartError::DataLoad(message)) => {
                assert!(message.contains("calculated_sentiment"));
            }
            other => panic!("expected DataLoad error, got {other:?}"),
        }
    }

    #[test]
    fn test_optional_columns_default_to_zero() {
        let csv = "timestamp,calculated_sentiment,flair,title,body,url\n2020-03-01,0.5,Support,t,b,u\n";
        let records = load(csv).unwrap();
        assert_eq!(records[0].score, 0.0);
        assert_eq!(records[0].upvote_ratio, 0.0);
    }

    #[test]
    fn test_empty_file_yields_no_records() {
        let records = load(&format!("{HEADER}\n")).unwrap();
        assert!(records.is_empty());
    }
}
