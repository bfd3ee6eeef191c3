// Web UI error types

use lilipad_core::ExportError;

/// Errors raised by the browser download flow
#[derive(Debug)]
pub enum DownloadError {
    /// Image bytes could not be fetched from an object URL
    FetchError(String),
    /// Archive assembly failed
    PackError(ExportError),
    /// A DOM step of the download was refused by the browser
    BrowserError(String),
}

impl std::fmt::Display for DownloadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DownloadError::FetchError(msg) => write!(f, "image fetch failed: {}", msg),
            DownloadError::PackError(err) => write!(f, "archive packing failed: {}", err),
            DownloadError::BrowserError(msg) => write!(f, "browser download failed: {}", msg),
        }
    }
}

impl std::error::Error for DownloadError {}
