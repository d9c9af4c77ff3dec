use thiserror::Error;

/// Per-report processing failures. All of these are recoverable at the
/// request level: a multi-report analysis keeps going and pairs each
/// report with either its timeline or its error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SplitError {
    /// No fights in a recognized raid zone. Carries the distinct
    /// unrecognized zone names (or ids) seen, for diagnostics.
    #[error("no fights found in a recognized raid zone (saw: {})", .unknown_zones.join(", "))]
    NoBoundaryFound { unknown_zones: Vec<String> },

    /// The zone resolved but nothing passed the fight filter.
    #[error("found '{zone}', but no processable fights were found")]
    NoValidFights { zone: String },

    /// The fetch collaborator returned no fights at all.
    #[error("log data is missing or contains no fights")]
    EmptyReport,

    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// Failures at the fetch boundary, produced outside the core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("report {0} not found")]
    NotFound(String),

    #[error("invalid report id: {0}")]
    InvalidReportId(String),

    #[error("api error: {0}")]
    Api(String),
}
