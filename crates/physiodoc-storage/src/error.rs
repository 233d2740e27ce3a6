use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("no data directory found on this platform")]
    NoDataDir,

    #[error("failed to read document at {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to write document at {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },

    #[error("document is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(
        "document_version {found} is newer than this build supports ({supported}); update the app"
    )]
    UnsupportedVersion { found: u32, supported: u32 },
}
