use reqwest::StatusCode;

pub type Result<T> = ::std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Request not authorized while requesting to {requested_url}")]
    Unauthorized { requested_url: String },

    #[error("Object not found at {requested_url}")]
    NotFound { requested_url: String },

    #[error("Expected exactly 1 object, got {got}")]
    UnexpectedObjectCount { got: usize },

    #[error("Unexpected response code '{status}' while requesting to {requested_url}: {message}")]
    UnexpectedResponseCode {
        status: StatusCode,
        requested_url: String,
        message: String,
    },

    #[error("Cannot decode {resource}{}: {source}", .index.map(|i| format!(" (element #{})", i)).unwrap_or_default())]
    Decode {
        resource: &'static str,
        index: Option<usize>,

        #[source]
        source: serde_json::Error,
    },

    #[error("Cannot encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("No contest is bound to this session, cannot access '{path}'")]
    ContestNotBound { path: &'static str },

    #[error("An id is required to retrieve a single {resource}")]
    EmptyId { resource: &'static str },

    #[error("Failed to parse as URL '{url}'")]
    InvalidSyntaxUrl {
        url: String,

        #[source]
        source: url::ParseError,
    },

    #[error("Http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Could not {action}: {source}")]
    Context {
        action: String,

        #[source]
        source: Box<Error>,
    },
}

/// Classification of an [`Error`], stable under [`Error::Context`] wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum ErrorKind {
    /// HTTP 401
    Unauthorized,
    /// HTTP 404
    NotFound,
    /// Wrong number of objects in a response.
    Structure,
    /// Malformed JSON, timestamp, duration or file bundle.
    Decode,
    /// Connection, TLS or URL failure.
    Transport,
    /// Any other non-200 status.
    Server,
    /// The caller used the session in a way it does not support.
    Usage,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        use Error::*;
        match self {
            Unauthorized { .. } => ErrorKind::Unauthorized,
            NotFound { .. } => ErrorKind::NotFound,
            UnexpectedObjectCount { .. } => ErrorKind::Structure,
            UnexpectedResponseCode { .. } => ErrorKind::Server,
            Decode { .. } | Encode(_) => ErrorKind::Decode,
            ContestNotBound { .. } | EmptyId { .. } => ErrorKind::Usage,
            InvalidSyntaxUrl { .. } | Http(_) => ErrorKind::Transport,
            Context { source, .. } => source.kind(),
        }
    }

    /// Strips every [`Error::Context`] layer.
    pub fn root(&self) -> &Error {
        match self {
            Error::Context { source, .. } => source.root(),
            e => e,
        }
    }

    /// HTTP status carried by this error, if the server answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        use Error::*;
        match self.root() {
            Unauthorized { .. } => Some(StatusCode::UNAUTHORIZED),
            NotFound { .. } => Some(StatusCode::NOT_FOUND),
            UnexpectedResponseCode { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn context(self, action: impl Into<String>) -> Self {
        Error::Context {
            action: action.into(),
            source: Box::new(self),
        }
    }
}

/// Outcome of a list request that failed part-way through decoding.
///
/// `decoded` holds every element that was decoded before `error` occurred, in
/// response order.
#[derive(Debug)]
pub struct PartialList<T> {
    pub decoded: Vec<T>,
    pub error: Error,
}

impl<T> PartialList<T> {
    pub(crate) fn empty(error: Error) -> Self {
        Self {
            decoded: Vec::new(),
            error,
        }
    }
}

impl<T> From<PartialList<T>> for Error {
    fn from(p: PartialList<T>) -> Self {
        p.error
    }
}

impl<T> std::fmt::Display for PartialList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} ({} decoded before failure)", self.error, self.decoded.len())
    }
}

impl<T: std::fmt::Debug> std::error::Error for PartialList<T> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}
