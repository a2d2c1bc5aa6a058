use reqwest::StatusCode;
use thiserror::Error;

// Everything here is a transport failure as far as callers are concerned
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("http call failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("remote store answered {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("base url {0} cannot carry a path")]
    InvalidUrl(url::Url),
}
