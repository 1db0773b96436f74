use std::fmt;

/// The main error type for the tealstrip crate
#[derive(Debug)]
pub enum TealstripError {
    /// Error occurred while reading or decoding an image
    Decode(image::ImageError),

    /// Error occurred while writing or encoding an image
    Encode(image::ImageError),

    /// Error occurred during I/O operations (file read/write/rename)
    Io(std::io::Error),
}

impl fmt::Display for TealstripError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TealstripError::Decode(e) => write!(f, "Image decode error: {}", e),
            TealstripError::Encode(e) => write!(f, "Image encode error: {}", e),
            TealstripError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for TealstripError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TealstripError::Decode(e) | TealstripError::Encode(e) => Some(e),
            TealstripError::Io(e) => Some(e),
        }
    }
}

impl From<image::ImageError> for TealstripError {
    fn from(err: image::ImageError) -> Self {
        // Encoding errors come from the write path, everything else from decode
        match &err {
            image::ImageError::Encoding(_) => TealstripError::Encode(err),
            _ => TealstripError::Decode(err),
        }
    }
}

impl From<std::io::Error> for TealstripError {
    fn from(err: std::io::Error) -> Self {
        TealstripError::Io(err)
    }
}

// Convenience type alias for Results using TealstripError
pub type Result<T = ()> = std::result::Result<T, TealstripError>;
