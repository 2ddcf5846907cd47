//! Error types for pod operations

use bytes::Bytes;
use http::StatusCode;

/// Pod error type wrapping all possible error conditions
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum PodError {
    /// HTTP transport error
    #[error("HTTP transport error: {0}")]
    Transport(
        #[from]
        #[diagnostic_source]
        TransportError,
    ),

    /// The pod answered with a status outside the accepted range
    #[error("{0}")]
    Http(
        #[from]
        #[diagnostic_source]
        HttpError,
    ),

    /// A target URL built from the pod location and caller-supplied names did not parse
    #[error("Invalid resource URL {url:?}: {source}")]
    #[diagnostic(
        code(solidpod::invalid_url),
        help("container and resource names are inserted into the URL path as given")
    )]
    InvalidUrl {
        /// The URL text that failed to parse
        url: String,
        /// Underlying parse failure
        #[source]
        source: url::ParseError,
    },

    /// A container or resource name that URL parsing would turn into a different path
    #[error("Name {name:?} cannot be used as a path segment: {reason}")]
    #[diagnostic(
        code(solidpod::unsafe_name),
        help("dot segments and backslashes are rewritten by URL parsing and can leave the pod root")
    )]
    UnsafeName {
        /// The offending container or resource name
        name: String,
        /// What makes it unsafe
        reason: &'static str,
    },
}

impl PodError {
    /// HTTP status carried by the error, if the pod answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            PodError::Http(e) => Some(e.status),
            _ => None,
        }
    }

    /// True when the pod reported the resource as absent (404 or 410).
    pub fn is_not_found(&self) -> bool {
        matches!(
            self.status(),
            Some(StatusCode::NOT_FOUND) | Some(StatusCode::GONE)
        )
    }
}

/// Transport-level errors that occur during HTTP communication
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum TransportError {
    /// Failed to establish connection to server
    #[error("Connection error: {0}")]
    Connect(String),

    /// Request timed out
    #[error("Request timeout")]
    Timeout,

    /// Request construction failed (malformed URI, headers, etc.)
    #[error("Invalid request: {0}")]
    #[diagnostic(help("header values such as the container slug must be visible ASCII"))]
    InvalidRequest(String),

    /// Other transport error
    #[error("Transport error: {0}")]
    Other(Box<dyn std::error::Error + Send + Sync>),
}

impl TransportError {
    /// Wrap an error coming out of an [`HttpClient`](crate::http_client::HttpClient).
    ///
    /// reqwest errors are classified into the specific variants; anything else
    /// ends up in [`TransportError::Other`].
    pub fn from_client<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        let boxed: Box<dyn std::error::Error + Send + Sync> = Box::new(error);
        #[cfg(feature = "reqwest-client")]
        let boxed = match boxed.downcast::<reqwest::Error>() {
            Ok(e) => return Self::from(*e),
            Err(other) => other,
        };
        Self::Other(boxed)
    }
}

impl From<http::Error> for TransportError {
    fn from(e: http::Error) -> Self {
        Self::InvalidRequest(e.to_string())
    }
}

#[cfg(feature = "reqwest-client")]
impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else if e.is_connect() {
            Self::Connect(e.to_string())
        } else if e.is_builder() || e.is_request() {
            Self::InvalidRequest(e.to_string())
        } else {
            Self::Other(Box::new(e))
        }
    }
}

/// HTTP error response (status the operation does not accept)
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub struct HttpError {
    /// HTTP status code
    pub status: StatusCode,
    /// Response body if available
    pub body: Option<Bytes>,
}

impl HttpError {
    /// Build from a response, keeping a non-empty body for the report.
    pub fn from_response(response: http::Response<Vec<u8>>) -> Self {
        let status = response.status();
        let body = response.into_body();
        Self {
            status,
            body: (!body.is_empty()).then(|| Bytes::from(body)),
        }
    }
}

/// Longest body excerpt [`HttpError`]'s `Display` includes, in characters.
const BODY_EXCERPT_CHARS: usize = 120;

impl HttpError {
    /// First non-blank line of a UTF-8 body, cut to 120 characters.
    ///
    /// The full body stays available in [`HttpError::body`].
    pub fn body_excerpt(&self) -> Option<String> {
        let body = std::str::from_utf8(self.body.as_deref()?).ok()?;
        let line = body.lines().map(str::trim).find(|l| !l.is_empty())?;
        let mut excerpt: String = line.chars().take(BODY_EXCERPT_CHARS).collect();
        if excerpt.len() < line.len() {
            excerpt.push('…');
        }
        Some(excerpt)
    }
}

impl std::fmt::Display for HttpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(excerpt) = self.body_excerpt() {
            write!(f, ": {excerpt}")?;
        }
        Ok(())
    }
}

/// Result type for pod operations
pub type Result<T> = std::result::Result<T, PodError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_display_includes_body() {
        let resp = http::Response::builder()
            .status(StatusCode::CONFLICT)
            .body(b"container exists".to_vec())
            .unwrap();
        let err = HttpError::from_response(resp);
        assert_eq!(err.to_string(), "HTTP 409 Conflict: container exists");
    }

    #[test]
    fn http_error_display_stays_on_one_line() {
        let page = format!(
            "\n<html>{}</html>\n<body>stack trace</body>\n",
            "x".repeat(500)
        );
        let resp = http::Response::builder()
            .status(StatusCode::INTERNAL_SERVER_ERROR)
            .body(page.clone().into_bytes())
            .unwrap();
        let err = HttpError::from_response(resp);
        let shown = err.to_string();

        assert!(!shown.contains('\n'));
        assert!(shown.starts_with("HTTP 500 Internal Server Error: <html>xxx"));
        assert!(shown.ends_with('…'));
        assert_eq!(
            shown.chars().count(),
            "HTTP 500 Internal Server Error: ".len() + BODY_EXCERPT_CHARS + 1
        );
        assert_eq!(err.body.as_deref(), Some(page.as_bytes()));
    }

    #[test]
    fn http_error_skips_binary_body() {
        let resp = http::Response::builder()
            .status(StatusCode::BAD_GATEWAY)
            .body(vec![0xff, 0xfe, 0x00])
            .unwrap();
        assert_eq!(
            HttpError::from_response(resp).to_string(),
            "HTTP 502 Bad Gateway"
        );
    }

    #[test]
    fn http_error_drops_empty_body() {
        let resp = http::Response::builder()
            .status(StatusCode::NOT_FOUND)
            .body(Vec::new())
            .unwrap();
        let err = PodError::from(HttpError::from_response(resp));
        assert_eq!(err.to_string(), "HTTP 404 Not Found");
        assert!(err.is_not_found());
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    }

    #[test]
    fn foreign_client_errors_become_other() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        match TransportError::from_client(io) {
            TransportError::Other(inner) => assert_eq!(inner.to_string(), "refused"),
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn transport_errors_have_no_status() {
        let err = PodError::from(TransportError::Timeout);
        assert_eq!(err.status(), None);
        assert!(!err.is_not_found());
    }
}
