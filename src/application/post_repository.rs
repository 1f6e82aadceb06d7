// Repository trait for post data access
use crate::domain::error::ChartError;
use crate::domain::record::PostRecord;

pub trait PostRepository: Send + Sync {
    /// Load the full ordered record set backing a chart.
    fn load(&self) -> Result<Vec<PostRecord>, ChartError>;
}
