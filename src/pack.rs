//! Packing source images into an ICO container, in memory or on disk.

use crate::entry::IconEntry;
use crate::error::{Error, Result};
use crate::icondir::IconDir;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

//===========================================================================//

/// One caller-supplied image: a name that identifies it in error messages,
/// and its PNG-encoded bytes.
#[derive(Clone, Debug)]
pub struct SourceImage {
    name: String,
    data: Vec<u8>,
}

impl SourceImage {
    /// Creates a source image from bytes already in memory.
    pub fn new<S: Into<String>>(name: S, data: Vec<u8>) -> SourceImage {
        SourceImage { name: name.into(), data }
    }

    /// Reads a source image fully into memory.  The path becomes its name.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<SourceImage> {
        let path = path.as_ref();
        let data = fs::read(path).map_err(|error| {
            let message = format!("{}: {}", path.display(), error);
            io::Error::new(error.kind(), message)
        })?;
        log::debug!("Read {} ({} bytes)", path.display(), data.len());
        Ok(SourceImage::new(path.display().to_string(), data))
    }

    /// Returns the name identifying this image.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the raw image data.
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

//===========================================================================//

/// Builds an icon collection from source images.  Fails if `sources` is
/// empty, or on the first source that isn't a usable PNG; in either case
/// nothing is produced.
pub fn build_icon_dir(sources: Vec<SourceImage>) -> Result<IconDir> {
    if sources.is_empty() {
        return Err(Error::EmptyInput);
    }
    let mut icondir = IconDir::new();
    for source in sources {
        let SourceImage { name, data } = source;
        let entry = IconEntry::from_png(data)
            .map_err(|source| Error::Format { input: name.clone(), source })?;
        log::info!("Adding {} ({}x{})", name, entry.width(), entry.height());
        icondir.add_entry(entry);
    }
    Ok(icondir)
}

/// Packs source images into a complete ICO container in memory.
pub fn encode_icon(sources: Vec<SourceImage>) -> Result<Vec<u8>> {
    let icondir = build_icon_dir(sources)?;
    let mut output = Vec::with_capacity(icondir.encoded_len()? as usize);
    icondir.write(&mut output)?;
    Ok(output)
}

/// Reads the PNG files at `input_paths` and writes them as one ICO file at
/// `out_path`, returning the written collection.
///
/// The container is written to `<out_path>.tmp` and then renamed into
/// place, so on failure `out_path` is never left holding a partial file.
pub fn write_icon_file<P, Q>(out_path: P, input_paths: &[Q]) -> Result<IconDir>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let out_path = out_path.as_ref();
    let sources = input_paths
        .iter()
        .map(SourceImage::from_file)
        .collect::<Result<Vec<_>>>()?;
    let icondir = build_icon_dir(sources)?;
    let mut output = Vec::with_capacity(icondir.encoded_len()? as usize);
    icondir.write(&mut output)?;
    write_atomically(out_path, &output)?;
    log::info!(
        "Wrote {} ({} images, {} bytes)",
        out_path.display(),
        icondir.len(),
        output.len()
    );
    Ok(icondir)
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

fn write_atomically(path: &Path, data: &[u8]) -> Result<()> {
    let temp_path = temp_path_for(path);
    let result = fs::write(&temp_path, data)
        .and_then(|()| fs::rename(&temp_path, path));
    if let Err(error) = result {
        if temp_path.exists() {
            if let Err(cleanup) = fs::remove_file(&temp_path) {
                log::warn!(
                    "Failed to remove {}: {}",
                    temp_path.display(),
                    cleanup
                );
            }
        }
        return Err(error.into());
    }
    Ok(())
}

//===========================================================================//


//===========================================================================//
