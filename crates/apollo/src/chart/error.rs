use thiserror::Error;

/// Errors raised while building a [`Chart`](super::Chart) from collaborator data.
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Invalid chart: {reason}")]
    InvalidChart { reason: String },
    #[error("Invalid chart JSON: {0}")]
    InvalidJson(String),
}

impl ChartError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        ChartError::InvalidChart {
            reason: reason.into(),
        }
    }
}
