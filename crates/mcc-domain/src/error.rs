//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the MCP Component Catalog
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// Catalog endpoint could not be reached or answered with a
    /// non-success status
    #[error("Remote catalog unavailable: {message}")]
    RemoteUnavailable {
        /// Description of the transport or status failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Catalog endpoint returned a body that is not valid JSON or is
    /// missing required fields
    #[error("Malformed catalog response: {message}")]
    MalformedResponse {
        /// Description of the data-integrity failure
        message: String,
    },

    /// Requested resource has no corresponding document
    #[error("Not found: {resource}")]
    NotFound {
        /// The resource that was not found
        resource: String,
    },

    /// Version-control remote fetch failed (offline, auth failure)
    #[error("Upstream unreachable: {message}")]
    UpstreamUnreachable {
        /// Description of the fetch failure
        message: String,
    },

    /// Unexpected failure while counting or diffing commits
    #[error("Diff computation failed: {message}")]
    DiffComputation {
        /// The underlying failure message
        message: String,
    },

    /// Invalid argument provided to an operation
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Catalog error creation methods
impl Error {
    /// Create a remote-unavailable error
    pub fn remote_unavailable<S: Into<String>>(message: S) -> Self {
        Self::RemoteUnavailable {
            message: message.into(),
            source: None,
        }
    }

    /// Create a remote-unavailable error with source
    pub fn remote_unavailable_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::RemoteUnavailable {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a malformed-response error
    pub fn malformed_response<S: Into<String>>(message: S) -> Self {
        Self::MalformedResponse {
            message: message.into(),
        }
    }

    /// Create a not-found error
    pub fn not_found<S: Into<String>>(resource: S) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }
}

// Update-check error creation methods
impl Error {
    /// Create an upstream-unreachable error
    pub fn upstream_unreachable<S: Into<String>>(message: S) -> Self {
        Self::UpstreamUnreachable {
            message: message.into(),
        }
    }

    /// Create a diff-computation error
    pub fn diff_computation<S: Into<String>>(message: S) -> Self {
        Self::DiffComputation {
            message: message.into(),
        }
    }
}

// Ambient error creation methods
impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
