use crate::error::FormatError;
use crate::pngsize::{is_png, read_png_size};

//===========================================================================//

// Fixed ICONDIRENTRY fields for 32-bit truecolor-with-alpha images.
pub(crate) const NUM_COLORS: u8 = 0;
pub(crate) const COLOR_PLANES: u16 = 1;
pub(crate) const BITS_PER_PIXEL: u16 = 32;

/// Encodes one dimension as the single byte the ICO directory stores.  A
/// byte of zero indicates a size of 256 or more.
pub fn stored_dimension(size: u32) -> u8 {
    if size > 255 {
        0
    } else {
        size as u8
    }
}

//===========================================================================//

/// One image in an ICO container: its true size and its encoded payload,
/// embedded verbatim.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IconEntry {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl IconEntry {
    /// Creates an entry from PNG-encoded data, reading the image size from
    /// the PNG header.  Returns an error if the header is missing or
    /// malformed.
    pub fn from_png(data: Vec<u8>) -> Result<IconEntry, FormatError> {
        let (width, height) = read_png_size(&data)?;
        Ok(IconEntry { width, height, data })
    }

    // Used when reading containers whose payloads aren't PNGs, where the
    // directory bytes are the only size information available.
    pub(crate) fn with_size(width: u32, height: u32, data: Vec<u8>) -> Self {
        IconEntry { width, height, data }
    }

    /// Returns the width of the image, in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height of the image, in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the width as stored in the directory (0 means 256 or more).
    pub fn stored_width(&self) -> u8 {
        stored_dimension(self.width)
    }

    /// Returns the height as stored in the directory (0 means 256 or more).
    pub fn stored_height(&self) -> u8 {
        stored_dimension(self.height)
    }

    /// Returns true if the payload is PNG-encoded.
    pub fn is_png(&self) -> bool {
        is_png(&self.data)
    }

    /// Returns the raw, encoded image data.
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

//===========================================================================//


//===========================================================================//
