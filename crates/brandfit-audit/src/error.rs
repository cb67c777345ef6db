use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuditError {
    #[error("brand name is required")]
    MissingBrand,

    #[error("provide copy text or at least one image")]
    MissingCreative,

    /// The model response carried no balanced `{...}` JSON object.
    /// Terminal for the current operation; `raw` is surfaced for
    /// inspection, never silently defaulted.
    #[error("{stage} response is not recoverable as JSON")]
    UnparseableResponse { stage: String, raw: String },

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
