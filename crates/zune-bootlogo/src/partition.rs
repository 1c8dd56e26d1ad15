/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Partition table schema
//!
//! The structures here only know where their fields live, semantic checks
//! (which partition is wanted, whether the magic is right) live in the decoder.
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use log::trace;

use crate::bytes::{
    read_fixed_bytes, read_fixed_string, read_u32_le, write_bytes, write_fixed_string,
    write_u32_le
};
use crate::constants::*;
use crate::errors::{BootLogoDecodeErrors, BootLogoEncodeErrors, OutOfBounds};

/// The 16 byte header at the start of a partition file
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PartitionTableHeader {
    pub magic:        [u8; 4],
    /// Total file length as declared by the file
    pub file_size:    u32,
    pub table_offset: u32,
    pub table_size:   u32
}

impl PartitionTableHeader {
    /// Header of a single entry table describing a file of `file_size` bytes
    pub const fn new(file_size: u32) -> PartitionTableHeader {
        PartitionTableHeader {
            magic: PARTITION_MAGIC,
            file_size,
            table_offset: PARTITION_TABLE_OFFSET,
            table_size: PARTITION_TABLE_SIZE
        }
    }

    pub fn read(buffer: &[u8]) -> Result<PartitionTableHeader, OutOfBounds> {
        Ok(PartitionTableHeader {
            magic:        read_fixed_bytes::<4>(buffer, HEADER_MAGIC_OFFSET)?,
            file_size:    read_u32_le(buffer, HEADER_FILE_SIZE_OFFSET)?,
            table_offset: read_u32_le(buffer, HEADER_TABLE_OFFSET_OFFSET)?,
            table_size:   read_u32_le(buffer, HEADER_TABLE_SIZE_OFFSET)?
        })
    }

    pub fn write(&self, buffer: &mut [u8]) -> Result<(), OutOfBounds> {
        write_bytes(buffer, HEADER_MAGIC_OFFSET, &self.magic)?;
        write_u32_le(buffer, HEADER_FILE_SIZE_OFFSET, self.file_size)?;
        write_u32_le(buffer, HEADER_TABLE_OFFSET_OFFSET, self.table_offset)?;
        write_u32_le(buffer, HEADER_TABLE_SIZE_OFFSET, self.table_size)?;
        Ok(())
    }

    /// Whether the table window lies within the declared file size
    pub fn table_fits(&self) -> bool {
        u64::from(self.table_offset) + u64::from(self.table_size) <= u64::from(self.file_size)
    }

    /// Number of entries the table window can start
    pub fn entry_count(&self) -> usize {
        (self.table_size as usize).div_ceil(PARTITION_DEF_SIZE)
    }
}

/// One named region within the partition file
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PartitionEntry {
    /// Name, truncated at the first NUL
    pub name:   String,
    /// Payload length in bytes
    pub size:   u32,
    /// Absolute payload offset
    pub offset: u32
}

impl PartitionEntry {
    pub fn new(name: &str, size: u32, offset: u32) -> PartitionEntry {
        PartitionEntry {
            name: name.to_string(),
            size,
            offset
        }
    }

    /// Read the entry starting at `position`
    pub fn read(buffer: &[u8], position: usize) -> Result<PartitionEntry, OutOfBounds> {
        let field = |offset: usize| position.saturating_add(offset);

        Ok(PartitionEntry {
            name:   read_fixed_string(buffer, field(ENTRY_NAME_OFFSET), PARTITION_NAME_MAX_SIZE)?,
            size:   read_u32_le(buffer, field(ENTRY_SIZE_OFFSET))?,
            offset: read_u32_le(buffer, field(ENTRY_OFFSET_OFFSET))?
        })
    }

    /// Write the entry starting at `position`
    ///
    /// The name must fit in [`PARTITION_NAME_MAX_SIZE`] bytes.
    pub fn write(&self, buffer: &mut [u8], position: usize) -> Result<(), BootLogoEncodeErrors> {
        write_fixed_string(
            buffer,
            position + ENTRY_NAME_OFFSET,
            &self.name,
            PARTITION_NAME_MAX_SIZE
        )?;
        write_u32_le(buffer, position + ENTRY_SIZE_OFFSET, self.size)?;
        write_u32_le(buffer, position + ENTRY_OFFSET_OFFSET, self.offset)?;
        Ok(())
    }
}

/// Header of the logo partition payload
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct LogoPayloadHeader {
    pub magic:      [u8; 4],
    pub width:      u32,
    pub height:     u32,
    pub format_tag: u32
}

impl LogoPayloadHeader {
    pub const fn new(width: u32, height: u32) -> LogoPayloadHeader {
        LogoPayloadHeader {
            magic: LOGO_MAGIC,
            width,
            height,
            format_tag: LOGO_FORMAT_TAG
        }
    }

    /// Read the payload header of the partition starting at `position`
    pub fn read(buffer: &[u8], position: usize) -> Result<LogoPayloadHeader, OutOfBounds> {
        let field = |offset: usize| position.saturating_add(offset);

        Ok(LogoPayloadHeader {
            magic:      read_fixed_bytes::<4>(buffer, field(LOGO_MAGIC_OFFSET))?,
            width:      read_u32_le(buffer, field(LOGO_WIDTH_OFFSET))?,
            height:     read_u32_le(buffer, field(LOGO_HEIGHT_OFFSET))?,
            format_tag: read_u32_le(buffer, field(LOGO_FORMAT_TAG_OFFSET))?
        })
    }

    pub fn write(&self, buffer: &mut [u8], position: usize) -> Result<(), OutOfBounds> {
        write_bytes(buffer, position + LOGO_MAGIC_OFFSET, &self.magic)?;
        write_u32_le(buffer, position + LOGO_WIDTH_OFFSET, self.width)?;
        write_u32_le(buffer, position + LOGO_HEIGHT_OFFSET, self.height)?;
        write_u32_le(buffer, position + LOGO_FORMAT_TAG_OFFSET, self.format_tag)?;
        Ok(())
    }
}

/// A parsed partition table, the header and every entry inside its window
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PartitionTable {
    pub header:  PartitionTableHeader,
    pub entries: Vec<PartitionEntry>
}

impl PartitionTable {
    /// Parse the partition table of a file
    ///
    /// Entries are read in [`PARTITION_DEF_SIZE`] strides for as long as the
    /// stride start lies in `[table_offset, table_offset + table_size)`.
    ///
    /// # Errors
    /// - [`NotAPartitionFile`] if the file does not start with `PART`
    /// - [`Truncated`] if the header or an entry runs past the buffer
    ///
    /// [`NotAPartitionFile`]: BootLogoDecodeErrors::NotAPartitionFile
    /// [`Truncated`]: BootLogoDecodeErrors::Truncated
    pub fn parse(buffer: &[u8]) -> Result<PartitionTable, BootLogoDecodeErrors> {
        if !is_partition_file(buffer) {
            return Err(BootLogoDecodeErrors::NotAPartitionFile);
        }
        let header = PartitionTableHeader::read(buffer)?;

        trace!("Declared file size: {}", header.file_size);
        trace!("Partition table offset: {:#x}", header.table_offset);
        trace!("Partition table size: {:#x}", header.table_size);

        let start = u64::from(header.table_offset);
        let end = start + u64::from(header.table_size);

        // every entry needs its own bytes, so a table cannot claim more
        // entries than the buffer holds
        let mut entries = Vec::with_capacity(
            header
                .entry_count()
                .min(buffer.len() / PARTITION_DEF_SIZE)
        );
        let mut cursor = start;

        while cursor < end {
            let position = usize::try_from(cursor).unwrap_or(usize::MAX);
            let entry = PartitionEntry::read(buffer, position)?;

            trace!(
                "Partition `{}` at {:#x}, size {:#x}",
                entry.name,
                entry.offset,
                entry.size
            );
            entries.push(entry);
            cursor += PARTITION_DEF_SIZE as u64;
        }

        Ok(PartitionTable { header, entries })
    }

    /// First entry whose name is exactly `name`
    pub fn find(&self, name: &str) -> Option<&PartitionEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }
}

/// Whether `buffer` starts with the partition file magic
pub fn is_partition_file(buffer: &[u8]) -> bool {
    buffer.get(..PARTITION_MAGIC.len()) == Some(&PARTITION_MAGIC[..])
}
