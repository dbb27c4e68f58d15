use miette::Diagnostic;
use thiserror::Error;

/// Main error type for pmp operations
#[derive(Error, Diagnostic, Debug)]
pub enum PmpError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(pmp::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(pmp::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    /// Raster surface allocation failed.
    #[error("Surface unavailable: cannot allocate a {width}x{height} raster surface")]
    #[diagnostic(code(pmp::surface))]
    Surface { width: u32, height: u32 },

    /// The serialized document failed to decode back into a vector tree.
    #[error("Decode failed: {message}")]
    #[diagnostic(code(pmp::decode))]
    Decode { message: String },

    /// The raster surface failed to encode into an image payload.
    #[error("Encode failed: {message}")]
    #[diagnostic(code(pmp::encode))]
    Encode { message: String },
}

pub type Result<T> = std::result::Result<T, PmpError>;
