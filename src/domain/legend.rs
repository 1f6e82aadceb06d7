// Legend derivation - group records by flair
use crate::domain::color::FlairPalette;
use crate::domain::record::PostRecord;
use std::collections::BTreeMap;

/// One legend row: a flair, its display color, and how many records carry it.
/// Purely derived; recomputed whenever the record set changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegendEntry {
    pub flair: String,
    pub color: String,
    pub count: usize,
}

/// Groups records by flair, ordered alphabetically by flair label.
pub fn legend_for(records: &[PostRecord], palette: &FlairPalette) -> Vec<LegendEntry> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for record in records {
        *counts.entry(record.flair.as_str()).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|(flair, count)| LegendEntry {
            flair: flair.to_string(),
            color: palette.color_of(flair).to_string(),
            count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(flair: &str) -> PostRecord {
        PostRecord::new(
            NaiveDate::from_ymd_opt(2020, 3, 1).unwrap(),
            0.0,
            1.0,
            1.0,
            flair.to_string(),
            "t".to_string(),
            "b".to_string(),
            String::new(),
        )
    }

    #[test]
    fn test_one_entry_per_flair_with_counts() {
        let records = vec![record("Support"), record("News")];
        let legend = legend_for(&records, &FlairPalette::builtin());
        assert_eq!(legend.len(), 2);
        assert!(legend.iter().all(|e| e.count == 1));
    }

    #[test]
    fn test_alphabetical_order_and_counting() {
        let records = vec![
            record("Questions"),
            record("Discussion"),
            record("Questions"),
        ];
        let legend = legend_for(&records, &FlairPalette::builtin());
        let labels: Vec<&str> = legend.iter().map(|e| e.flair.as_str()).collect();
        assert_eq!(labels, vec!["Discussion", "Questions"]);
        assert_eq!(legend[1].count, 2);
    }

    #[test]
    fn test_unknown_flair_uses_default_color() {
        let records = vec![record("Never seen before")];
        let legend = legend_for(&records, &FlairPalette::builtin());
        assert_eq!(legend[0].color, crate::domain::color::DEFAULT_FLAIR_COLOR);
    }

    #[test]
    fn test_empty_records_yield_empty_legend() {
        let legend = legend_for(&[], &FlairPalette::builtin());
        assert!(legend.is_empty());
    }
}
