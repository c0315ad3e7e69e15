use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResourceError {
    #[error("The file is violating the expected format, because: {reason}")]
    FormatError { reason: &'static str },

    /// Represents all cases of `std::io::Error`, including a truncated source
    /// (`UnexpectedEof`) and a sink that stopped accepting writes.
    #[error(transparent)]
    IOError(#[from] std::io::Error),
}

/// Extension the engine expects on disk, without the leading dot.
pub const FILE_EXTENSION: &str = "meshresource";

pub mod common;
pub mod meshresource;
