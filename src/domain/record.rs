// Post record domain model
use chrono::NaiveDate;

/// One social-media post with its sentiment annotation. Immutable once
/// loaded; the full ordered sequence is held for the lifetime of a chart.
#[derive(Debug, Clone)]
pub struct PostRecord {
    pub timestamp: NaiveDate,
    pub calculated_sentiment: f64,
    pub score: f64,
    pub upvote_ratio: f64,
    pub flair: String,
    pub title: String,
    pub body: String,
    pub url: String,
}

impl PostRecord {
    pub fn new(
        timestamp: NaiveDate,
        calculated_sentiment: f64,
        score: f64,
        upvote_ratio: f64,
        flair: String,
        title: String,
        body: String,
        url: String,
    ) -> Self {
        Self {
            timestamp,
            calculated_sentiment,
            score,
            upvote_ratio,
            flair,
            title,
            body,
            url,
        }
    }

    /// The body text, or `None` when the source marked it as the literal "NA".
    pub fn body_text(&self) -> Option<&str> {
        if self.body == "NA" {
            None
        } else {
            Some(&self.body)
        }
    }
}

/// Which numeric field drives the y axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    CalculatedSentiment,
    Score,
    UpvoteRatio,
}

impl Metric {
    pub const ALL: [Metric; 3] = [
        Metric::CalculatedSentiment,
        Metric::Score,
        Metric::UpvoteRatio,
    ];

    pub fn value_of(&self, record: &PostRecord) -> f64 {
        match self {
            Metric::CalculatedSentiment => record.calculated_sentiment,
            Metric::Score => record.score,
            Metric::UpvoteRatio => record.upvote_ratio,
        }
    }

    pub fn axis_label(&self) -> &'static str {
        match self {
            Metric::CalculatedSentiment => "Sentiment",
            Metric::Score => "Score",
            Metric::UpvoteRatio => "Upvote ratio",
        }
    }

    /// Lower bound forced into the y domain, if any. Sentiment charts keep
    /// their floor at -1 so the axis stays comparable across datasets.
    pub fn domain_floor(&self) -> Option<f64> {
        match self {
            Metric::CalculatedSentiment => Some(-1.0),
            Metric::Score | Metric::UpvoteRatio => None,
        }
    }

    pub fn from_name(name: &str) -> Option<Metric> {
        match name {
            "calculated_sentiment" => Some(Metric::CalculatedSentiment),
            "score" => Some(Metric::Score),
            "upvote_ratio" => Some(Metric::UpvoteRatio),
            _ => None,
        }
    }

    pub fn column_name(&self) -> &'static str {
        match self {
            Metric::CalculatedSentiment => "calculated_sentiment",
            Metric::Score => "score",
            Metric::UpvoteRatio => "upvote_ratio",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(body: &str) -> PostRecord {
        PostRecord::new(
            NaiveDate::from_ymd_opt(2020, 3, 1).unwrap(),
            0.5,
            42.0,
            0.97,
            "Support".to_string(),
            "a title".to_string(),
            body.to_string(),
            "https://example.com/post/1".to_string(),
        )
    }

    #[test]
    fn test_body_text_treats_na_as_empty() {
        assert_eq!(record("hello").body_text(), Some("hello"));
        assert_eq!(record("NA").body_text(), None);
    }

    #[test]
    fn test_metric_accessors() {
        let r = record("x");
        assert_eq!(Metric::CalculatedSentiment.value_of(&r), 0.5);
        assert_eq!(Metric::Score.value_of(&r), 42.0);
        assert_eq!(Metric::UpvoteRatio.value_of(&r), 0.97);
    }

    #[test]
    fn test_metric_floor_only_for_sentiment() {
        assert_eq!(Metric::CalculatedSentiment.domain_floor(), Some(-1.0));
        assert_eq!(Metric::Score.domain_floor(), None);
        assert_eq!(Metric::UpvoteRatio.domain_floor(), None);
    }

    #[test]
    fn test_metric_from_name_round_trips() {
        for metric in [Metric::CalculatedSentiment, Metric::Score, Metric::UpvoteRatio] {
            assert_eq!(Metric::from_name(metric.column_name()), Some(metric));
        }
        assert_eq!(Metric::from_name("num_comments"), None);
    }
}
