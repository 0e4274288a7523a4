use std::io;

//===========================================================================//

/// An error from building, writing, or reading an ICO container.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// One of the source images is not a usable PNG.  `input` names the
    /// offending source (its file path, for file inputs).
    #[error("{input}: {source}")]
    Format {
        /// The name of the source image that failed.
        input: String,
        /// What was wrong with it.
        #[source]
        source: FormatError,
    },

    /// No source images were supplied.
    #[error("No images were supplied")]
    EmptyInput,

    /// The images can't be represented in one container (too many entries,
    /// or payloads too large for 32-bit offsets).
    #[error("{0}")]
    InvalidInput(String),

    /// A container being read is malformed.
    #[error("Malformed ICO data: {0}")]
    InvalidData(String),

    /// Reading an input or writing the output failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// A `Result` whose error type is [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

//===========================================================================//

/// Why a buffer was rejected by [`read_png_size`](crate::read_png_size).
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum FormatError {
    /// The buffer does not start with the PNG signature.
    #[error("Not a PNG file (missing PNG signature)")]
    MissingSignature,

    /// The buffer ends before the width/height fields of the header chunk.
    #[error("Truncated PNG header (was {len} bytes, but must be at least 24)")]
    Truncated {
        /// Length of the rejected buffer.
        len: usize,
    },

    /// The header declares a zero width or height.
    #[error("Invalid PNG size {width}x{height} (dimensions must be nonzero)")]
    ZeroDimension {
        /// Declared width.
        width: u32,
        /// Declared height.
        height: u32,
    },

    /// The header declares a dimension above 65535.
    #[error("Unsupported PNG size {width}x{height} (max is 65535x65535)")]
    DimensionTooLarge {
        /// Declared width.
        width: u32,
        /// Declared height.
        height: u32,
    },
}

//===========================================================================//

#[cfg(test)]
mod tests {
    use super::{Error, FormatError};

    #[test]
    fn format_error_names_input() {
        let error = Error::Format {
            input: "icons/16.png".to_string(),
            source: FormatError::MissingSignature,
        };
        assert_eq!(
            error.to_string(),
            "icons/16.png: Not a PNG file (missing PNG signature)"
        );
    }

    #[test]
    fn io_error_is_transparent() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let error = Error::from(io_error);
        assert_eq!(error.to_string(), "gone");
    }
}

//===========================================================================//
