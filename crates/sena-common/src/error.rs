/// Error types shared across the SENA-Mate crates.
///
/// These cover loading of external configuration files. Application-specific
/// errors are defined in the server crate and wrap `CommonError` via `#[from]`.

#[derive(Debug, thiserror::Error)]
pub enum CommonError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("unexpected structure in {path}: {message}")]
    Shape { path: String, message: String },
}
