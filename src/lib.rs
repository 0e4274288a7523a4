//! A library for packing PNG images into multi-resolution ICO files.
//!
//! Each PNG is embedded verbatim; only its header is read, to learn the
//! image size.  The container lists images smallest first.
//!
//! ```no_run
//! let icondir = icopack::write_icon_file(
//!     "app.ico",
//!     &["icon16.png", "icon32.png", "icon256.png"],
//! )?;
//! assert_eq!(icondir.len(), 3);
//! # Ok::<(), icopack::Error>(())
//! ```

#![warn(missing_docs)]

#[macro_use]
mod macros;

mod entry;
mod error;
mod icondir;
mod pack;
mod pngsize;

pub use crate::entry::{stored_dimension, IconEntry};
pub use crate::error::{Error, FormatError, Result};
pub use crate::icondir::{DirEntry, IconDir};
pub use crate::pack::{
    build_icon_dir, encode_icon, write_icon_file, SourceImage,
};
pub use crate::pngsize::{is_png, read_png_size, PNG_SIGNATURE};

//===========================================================================//
