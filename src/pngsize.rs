use crate::error::FormatError;
use byteorder::{BigEndian, ByteOrder};

//===========================================================================//

/// The signature that all PNG files start with.
pub const PNG_SIGNATURE: [u8; 8] =
    [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

// The signature plus the IHDR chunk's length, type, width, and height fields.
const PNG_HEADER_LEN: usize = 24;

// IHDR always comes first, so its width/height sit at fixed offsets.
const WIDTH_OFFSET: usize = 16;
const HEIGHT_OFFSET: usize = 20;

// Size limits for images in an ICO file:
const MIN_DIMENSION: u32 = 1;
const MAX_DIMENSION: u32 = 65535;

//===========================================================================//

/// Returns true if `data` starts with the PNG signature.
pub fn is_png(data: &[u8]) -> bool {
    data.starts_with(&PNG_SIGNATURE)
}

/// Reads the width and height of a PNG image from its header, without
/// decoding anything past the IHDR width/height fields.
///
/// Returns an error if the signature is missing, if the buffer is too short
/// to hold the header fields, or if either dimension is outside
/// `1..=65535`.
pub fn read_png_size(data: &[u8]) -> Result<(u32, u32), FormatError> {
    let prefix_len = data.len().min(PNG_SIGNATURE.len());
    if data[..prefix_len] != PNG_SIGNATURE[..prefix_len] {
        return Err(FormatError::MissingSignature);
    }
    if data.len() < PNG_HEADER_LEN {
        return Err(FormatError::Truncated { len: data.len() });
    }
    let width = BigEndian::read_u32(&data[WIDTH_OFFSET..]);
    let height = BigEndian::read_u32(&data[HEIGHT_OFFSET..]);
    if width < MIN_DIMENSION || height < MIN_DIMENSION {
        return Err(FormatError::ZeroDimension { width, height });
    }
    if width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(FormatError::DimensionTooLarge { width, height });
    }
    Ok((width, height))
}

//===========================================================================//


//===========================================================================//
