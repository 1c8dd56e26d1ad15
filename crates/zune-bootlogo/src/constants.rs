/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Fixed values and field offsets of the `isp_part.bin` layout

/// Magic bytes at the start of every partition file
pub const PARTITION_MAGIC: [u8; 4] = *b"PART";
/// Magic bytes at the start of the logo partition payload
pub const LOGO_MAGIC: [u8; 4] = *b"OGOL";

/// Name of the partition holding the boot logo
pub const LOGO_PARTITION_NAME: &str = "logo.bin";
/// Reserved width of a partition name, NUL padded
pub const PARTITION_NAME_MAX_SIZE: usize = 0x18;
/// Size of one partition table entry
pub const PARTITION_DEF_SIZE: usize = 0x20;

// partition file header, offsets from file start
pub const HEADER_MAGIC_OFFSET: usize = 0x00;
pub const HEADER_FILE_SIZE_OFFSET: usize = 0x04;
pub const HEADER_TABLE_OFFSET_OFFSET: usize = 0x08;
pub const HEADER_TABLE_SIZE_OFFSET: usize = 0x0C;

/// Where the partition table starts
pub const PARTITION_TABLE_OFFSET: u32 = 0x10;
/// Size of a table holding a single entry
pub const PARTITION_TABLE_SIZE: u32 = PARTITION_DEF_SIZE as u32;

// partition entry, offsets from entry start
pub const ENTRY_NAME_OFFSET: usize = 0x00;
pub const ENTRY_SIZE_OFFSET: usize = 0x18;
pub const ENTRY_OFFSET_OFFSET: usize = 0x1C;

/// Where the encoder places the logo payload
pub const LOGO_PAYLOAD_OFFSET: u32 = PARTITION_TABLE_OFFSET + PARTITION_TABLE_SIZE;

// logo payload header, offsets from payload start
pub const LOGO_MAGIC_OFFSET: usize = 0x00;
pub const LOGO_WIDTH_OFFSET: usize = 0x0C;
pub const LOGO_HEIGHT_OFFSET: usize = 0x10;
pub const LOGO_FORMAT_TAG_OFFSET: usize = 0x14;
/// Pixels start this far into the payload
pub const LOGO_HEADER_SIZE: usize = 0x20;

/// Pixel format tag expected by the firmware
pub const LOGO_FORMAT_TAG: u32 = 0x000E_0003;

/// Bytes per stored pixel, B,G,R,A
pub const LOGO_BYTES_PER_PIXEL: usize = 4;

/// File name the encoded image is offered under
pub const DEFAULT_FILE_NAME: &str = "isp_part.bin";
/// MIME type of the encoded image
pub const MIME_TYPE: &str = "application/octet-stream";
