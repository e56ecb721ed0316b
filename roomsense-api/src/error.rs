#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown sensor kind: {0}")]
pub struct ParseKindError(pub String);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThresholdError {
    #[error("Threshold list must contain at least one band")]
    Empty,

    #[error("Thresholds must be strictly descending, found {next} after {previous}")]
    NotDescending { previous: u32, next: u32 },

    #[error("Top threshold must be greater than zero")]
    NonPositiveTop,
}
