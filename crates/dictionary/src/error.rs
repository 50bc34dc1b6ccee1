use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    /// The connection could not be made or broke mid-request.
    Transport,
    /// The server answered with a non-success status.
    Status,
    /// The body could not be read as text.
    Body,
}

#[derive(Debug, Error)]
#[error("failed to fetch {url}: {message}")]
pub struct FetchError {
    pub url: String,
    pub status: Option<u16>,
    pub kind: FetchErrorKind,
    message: String,
}

impl FetchError {
    pub fn new(url: impl Into<String>, kind: FetchErrorKind, message: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            status: None,
            kind,
            message: message.into(),
        }
    }

    pub fn with_status(url: impl Into<String>, status: u16) -> Self {
        Self {
            url: url.into(),
            status: Some(status),
            kind: FetchErrorKind::Status,
            message: format!("server answered with status {status}"),
        }
    }

    pub(crate) fn from_reqwest(url: &str, error: reqwest::Error) -> Self {
        let kind = if error.is_status() {
            FetchErrorKind::Status
        } else if error.is_body() || error.is_decode() {
            FetchErrorKind::Body
        } else {
            FetchErrorKind::Transport
        };
        Self {
            url: url.to_owned(),
            status: error.status().map(|status| status.as_u16()),
            kind,
            message: error.to_string(),
        }
    }

    pub fn is_transport(&self) -> bool {
        self.kind == FetchErrorKind::Transport
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("url {url} has too few path segments to name a word")]
pub struct MalformedUrlError {
    pub url: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("required element `{selector}` is missing from the page")]
    MissingElement { selector: String },
    #[error("invalid selector `{selector}`: {message}")]
    InvalidSelector { selector: String, message: String },
}

/// Any failure inside the search pipeline, carried with `?` between stages.
#[derive(Debug, Error)]
pub(crate) enum SearchError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    MalformedUrl(#[from] MalformedUrlError),
    #[error(transparent)]
    Extraction(#[from] ExtractionError),
}

impl SearchError {
    fn into_cause(self) -> Box<dyn std::error::Error + Send + Sync> {
        match self {
            Self::Fetch(error) => Box::new(error),
            Self::MalformedUrl(error) => Box::new(error),
            Self::Extraction(error) => Box::new(error),
        }
    }
}

/// The only error [`crate::Dictionary::search`] returns. The stage that failed
/// is reachable through [`std::error::Error::source`] as a [`FetchError`],
/// [`MalformedUrlError`] or [`ExtractionError`].
#[derive(Debug, Error)]
#[error("search for '{word}' failed")]
pub struct SearchFailedError {
    pub word: String,
    #[source]
    source: Box<dyn std::error::Error + Send + Sync>,
}

impl SearchFailedError {
    pub(crate) fn new(word: &str, source: SearchError) -> Self {
        Self {
            word: word.to_owned(),
            source: source.into_cause(),
        }
    }
}
