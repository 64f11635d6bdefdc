// Main library entry point for fontresolve
use std::path::PathBuf;
use thiserror::Error;

/// Error type for fontresolve
#[derive(Error, Debug)]
pub enum FontResolveError {
    /// Input normalized to nothing usable
    #[error("Could not extract valid font name from input: {0:?}")]
    InvalidName(String),

    /// Package scope that is not a plain npm scope
    #[error("Invalid package scope {0:?}: expected an npm scope like @fontsource")]
    InvalidScope(String),

    /// Catalog URL that does not name a font
    #[error("Could not parse font URL: {0}")]
    UnparseableUrl(String),

    /// Package manager could not be run or exited non-zero
    #[error("Package manager failed: {0}")]
    Subprocess(String),

    /// Package installed but has no font files directory
    #[error("Font files not found in {}. Check if the package exists.", .path.display())]
    MissingFontFiles { path: PathBuf },

    /// IO errors
    #[error("IO error: {0}")]
    Io(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl FontResolveError {
    /// True for errors raised before the package manager was invoked, when
    /// there is nothing in the dependency cache to clean up.
    pub fn fails_before_install(&self) -> bool {
        matches!(
            self,
            FontResolveError::InvalidName(_)
                | FontResolveError::InvalidScope(_)
                | FontResolveError::UnparseableUrl(_)
        )
    }
}

/// Result type for fontresolve
pub type Result<T> = std::result::Result<T, FontResolveError>;

pub mod cleanup;
pub mod cli;
pub mod copier;
pub mod input;
pub mod installer;
pub mod name;
pub mod paths;
pub mod resolver;

impl From<std::io::Error> for FontResolveError {
    fn from(err: std::io::Error) -> Self {
        FontResolveError::Io(format!("{:?}: {}", err.kind(), err))
    }
}

impl From<walkdir::Error> for FontResolveError {
    fn from(err: walkdir::Error) -> Self {
        FontResolveError::Io(err.to_string())
    }
}
