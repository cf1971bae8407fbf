//! Provider layer constants

/// File name of the catalog index document
pub const INDEX_DOCUMENT: &str = "index.json";

/// Directory of per-component documents under the catalog base URL
pub const COMPONENTS_DIR: &str = "components";

/// Error message prefix for request timeouts
pub const ERROR_MSG_REQUEST_TIMEOUT: &str = "Request timed out after";
