use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    /// No adapter is registered for the requested chart type.
    ///
    /// This is a packaging defect, so it is surfaced to the caller instead of
    /// falling back to another chart type.
    #[error("no chart adapter registered for chart type `{chart_type}`")]
    UnregisteredChartType { chart_type: String },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
