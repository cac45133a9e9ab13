use thiserror::Error;

/// Failures raised while talking to the archive. None of these are retried;
/// a mid-pagination failure discards everything accumulated in that call.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{url} returned HTTP {status}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("year {0} is not a representable date")]
    Year(i32),

    #[error("page is missing created_utc, cannot advance the cursor")]
    MissingCursor,
}

/// Display-time failures. Fetching never validates post shape; a post
/// missing a column's field only surfaces when the table is built.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RenderError {
    #[error("post is missing the `{0}` field")]
    MissingField(&'static str),
}
