use crate::entry::{IconEntry, BITS_PER_PIXEL, COLOR_PLANES, NUM_COLORS};
use crate::error::Result;
use crate::pngsize::read_png_size;
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::io::{Read, Seek, SeekFrom, Write};

//===========================================================================//

// Size of the ICONDIR header and of each ICONDIRENTRY, in bytes.
const HEADER_LEN: u32 = 6;
const DIR_ENTRY_LEN: u32 = 16;

// Resource type number for icons (cursors would be 2).
const ICON_RESOURCE_TYPE: u16 = 1;

//===========================================================================//

/// A collection of images; the contents of a single ICO file.
///
/// Entries are kept in the order they were added.  When the container is
/// written they are put in ascending `(width, height)` order, with
/// equal-sized entries keeping their relative order.
#[derive(Clone, Debug, Default)]
pub struct IconDir {
    entries: Vec<IconEntry>,
}

impl IconDir {
    /// Creates a new, empty collection of icons.
    pub fn new() -> IconDir {
        IconDir { entries: Vec::new() }
    }

    /// Returns the entries in this collection, in insertion order.
    pub fn entries(&self) -> &[IconEntry] {
        &self.entries
    }

    /// Adds an entry to the collection.
    pub fn add_entry(&mut self, entry: IconEntry) {
        self.entries.push(entry);
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entries in the order they are stored in the container:
    /// smallest `(width, height)` first.
    pub fn stored_order(&self) -> Vec<&IconEntry> {
        let mut sorted: Vec<&IconEntry> = self.entries.iter().collect();
        // `sort_by_key` is a stable sort, so ties keep insertion order.
        sorted.sort_by_key(|entry| (entry.width(), entry.height()));
        sorted
    }

    /// Computes the directory records, in stored order, without writing
    /// anything.  Returns an error if the entries can't fit in one
    /// container.
    pub fn directory(&self) -> Result<Vec<DirEntry>> {
        if self.entries.len() > (u16::MAX as usize) {
            invalid_input!(
                "Too many entries in IconDir (was {}, but max is {})",
                self.entries.len(),
                u16::MAX
            );
        }
        let payload_start =
            HEADER_LEN as u64 + DIR_ENTRY_LEN as u64 * self.len() as u64;
        let mut data_offset = payload_start;
        let mut directory = Vec::with_capacity(self.entries.len());
        for entry in self.stored_order() {
            let data_size = entry.data().len() as u64;
            if data_offset + data_size > u32::MAX as u64 {
                invalid_input!(
                    "Icon data too large (ends at byte {}, but max is {})",
                    data_offset + data_size,
                    u32::MAX
                );
            }
            let record = DirEntry {
                width: entry.width(),
                height: entry.height(),
                stored_width: entry.stored_width(),
                stored_height: entry.stored_height(),
                data_size: data_size as u32,
                data_offset: data_offset as u32,
            };
            log::debug!(
                "{}x{} image: {} bytes at offset {}",
                record.width,
                record.height,
                record.data_size,
                record.data_offset
            );
            directory.push(record);
            data_offset += data_size;
        }
        Ok(directory)
    }

    /// Returns the total length in bytes of the written container.
    pub fn encoded_len(&self) -> Result<u64> {
        let directory = self.directory()?;
        let payload_start =
            HEADER_LEN as u64 + DIR_ENTRY_LEN as u64 * directory.len() as u64;
        Ok(directory
            .last()
            .map(|record| record.data_end() as u64)
            .unwrap_or(payload_start))
    }

    /// Writes an ICO file out.  The layout is computed up front, so a
    /// collection that can't be represented fails before any byte reaches
    /// `writer`.
    pub fn write<W: Write>(&self, mut writer: W) -> Result<()> {
        let directory = self.directory()?;
        writer.write_u16::<LittleEndian>(0)?; // reserved
        writer.write_u16::<LittleEndian>(ICON_RESOURCE_TYPE)?;
        writer.write_u16::<LittleEndian>(directory.len() as u16)?;
        for record in directory.iter() {
            writer.write_u8(record.stored_width)?;
            writer.write_u8(record.stored_height)?;
            writer.write_u8(NUM_COLORS)?;
            writer.write_u8(0)?; // reserved
            writer.write_u16::<LittleEndian>(COLOR_PLANES)?;
            writer.write_u16::<LittleEndian>(BITS_PER_PIXEL)?;
            writer.write_u32::<LittleEndian>(record.data_size)?;
            writer.write_u32::<LittleEndian>(record.data_offset)?;
        }
        for entry in self.stored_order() {
            writer.write_all(entry.data())?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Reads an ICO file into memory.  Entries come back in stored order.
    pub fn read<R: Read + Seek>(mut reader: R) -> Result<IconDir> {
        let reserved = reader.read_u16::<LittleEndian>()?;
        if reserved != 0 {
            invalid_data!(
                "Invalid reserved field value in ICONDIR \
                 (was {}, but must be 0)",
                reserved
            );
        }
        let restype = reader.read_u16::<LittleEndian>()?;
        if restype != ICON_RESOURCE_TYPE {
            invalid_data!("Unsupported resource type ({})", restype);
        }
        let num_entries = reader.read_u16::<LittleEndian>()? as usize;
        let mut spans = Vec::<(u8, u8, u32, u32)>::with_capacity(num_entries);
        for _ in 0..num_entries {
            let width_byte = reader.read_u8()?;
            let height_byte = reader.read_u8()?;
            let _num_colors = reader.read_u8()?;
            let reserved = reader.read_u8()?;
            if reserved != 0 {
                invalid_data!(
                    "Invalid reserved field value in ICONDIRENTRY \
                     (was {}, but must be 0)",
                    reserved
                );
            }
            let _color_planes = reader.read_u16::<LittleEndian>()?;
            let _bits_per_pixel = reader.read_u16::<LittleEndian>()?;
            let data_size = reader.read_u32::<LittleEndian>()?;
            let data_offset = reader.read_u32::<LittleEndian>()?;
            spans.push((width_byte, height_byte, data_offset, data_size));
        }
        let stream_len = reader.seek(SeekFrom::End(0))?;
        let mut entries = Vec::with_capacity(num_entries);
        for (index, &(width_byte, height_byte, data_offset, data_size)) in
            spans.iter().enumerate()
        {
            let data_end = data_offset as u64 + data_size as u64;
            if data_end > stream_len {
                invalid_data!(
                    "Entry {} data runs past end of file \
                     (ends at byte {}, but file is {} bytes)",
                    index,
                    data_end,
                    stream_len
                );
            }
            reader.seek(SeekFrom::Start(data_offset as u64))?;
            let mut data = vec![0u8; data_size as usize];
            reader.read_exact(&mut data)?;
            // The directory bytes only say "256 or more" for large images,
            // so prefer the size in the PNG header when there is one.
            let (width, height) = match read_png_size(&data) {
                Ok(size) => size,
                Err(_) => (
                    if width_byte == 0 { 256 } else { width_byte as u32 },
                    if height_byte == 0 { 256 } else { height_byte as u32 },
                ),
            };
            entries.push(IconEntry::with_size(width, height, data));
        }
        Ok(IconDir { entries })
    }
}

//===========================================================================//

/// The directory record for one entry, as laid out in a written container.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct DirEntry {
    width: u32,
    height: u32,
    stored_width: u8,
    stored_height: u8,
    data_size: u32,
    data_offset: u32,
}

impl DirEntry {
    /// Returns the true width of the image, in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the true height of the image, in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the width byte written to the directory.
    pub fn stored_width(&self) -> u8 {
        self.stored_width
    }

    /// Returns the height byte written to the directory.
    pub fn stored_height(&self) -> u8 {
        self.stored_height
    }

    /// Returns the payload length, in bytes.
    pub fn data_size(&self) -> u32 {
        self.data_size
    }

    /// Returns the absolute offset of the payload within the container.
    pub fn data_offset(&self) -> u32 {
        self.data_offset
    }

    /// Returns the offset just past the end of the payload.
    pub fn data_end(&self) -> u32 {
        self.data_offset + self.data_size
    }
}

//===========================================================================//


//===========================================================================//
