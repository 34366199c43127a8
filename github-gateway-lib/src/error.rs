use reqwest::{StatusCode, Url};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GitHubClientError {
    #[error("request to {url} failed")]
    Unreachable {
        url: Url,
        #[source]
        source: reqwest_middleware::Error,
    },

    #[error("GitHub rejected request to {url} with status {status}: {message}")]
    Rejected {
        url: Url,
        status: StatusCode,
        message: String,
    },

    #[error("GitHub response is missing {0}")]
    MissingData(&'static str),

    #[error("GitHub response has unexpected shape")]
    Decode(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type GitHubClientResult<T> = std::result::Result<T, GitHubClientError>;

impl GitHubClientError {
    /// Stable machine-readable code reported to GraphQL callers
    pub fn code(&self) -> &'static str {
        match self {
            Self::Unreachable { .. } => "UPSTREAM_UNREACHABLE",
            Self::Rejected { .. } => "UPSTREAM_REJECTED",
            Self::MissingData(_) => "UPSTREAM_DATA_MISSING",
            Self::Decode(_) => "UPSTREAM_DECODE",
            Self::Other(_) => "INTERNAL",
        }
    }

    pub(crate) fn unreachable<E>(url: &Url, e: E) -> Self
    where
        E: Into<reqwest_middleware::Error>,
    {
        Self::Unreachable {
            url: url.clone(),
            source: e.into(),
        }
    }
}
