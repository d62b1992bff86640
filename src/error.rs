use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("missing required configuration: {0}")]
    MissingConfig(&'static str),

    #[error("invalid repository identifier `{0}` (expected `owner/name`)")]
    InvalidRepository(String),

    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to walk {}: {source}", .path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{method} {url} returned {status}: {body}")]
    Api {
        method: &'static str,
        url: String,
        status: u16,
        body: String,
    },

    #[error("revision of `{path}` is stale, the file changed since it was read")]
    StaleRevision { path: String },

    #[error("invalid base64 content: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("content of `{0}` is not valid UTF-8")]
    NotUtf8(String),

    #[error("failed to render markdown table: {0}")]
    Markdown(String),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
