use thiserror::Error;

#[derive(Debug, Error)]
pub enum SongStoreError {
    #[error("Data service is not configured: {0}")]
    NotConfigured(String),

    #[error("Request to data service failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Data service responded with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid data service response: {0}")]
    InvalidResponse(String),
}
