/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible during decoding and encoding
use core::fmt::{Debug, Display, Formatter};

use zune_core::bit_depth::BitDepth;
use zune_core::colorspace::ColorSpace;

/// A fixed offset read or write touched bytes past the end of the buffer
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct OutOfBounds {
    /// Offset the access started at
    pub offset:    usize,
    /// Number of bytes the access needed
    pub length:    usize,
    /// Total size of the buffer
    pub available: usize
}

impl OutOfBounds {
    /// Smallest buffer size that would have satisfied the access
    pub const fn required(&self) -> usize {
        self.offset.saturating_add(self.length)
    }
}

impl Debug for OutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(
            f,
            "Out of bounds access of {} bytes at offset {:#x}, buffer has {} bytes",
            self.length, self.offset, self.available
        )
    }
}

/// Possible errors that may occur during decoding
#[non_exhaustive]
pub enum BootLogoDecodeErrors {
    /// The file does not start with `PART`
    NotAPartitionFile,
    /// No partition table entry is named `logo.bin`
    LogoPartitionMissing,
    /// The logo partition does not start with `OGOL`
    InvalidLogoMagic,
    /// The buffer ended before all declared data could be read
    ///
    /// # Arguments
    /// - 1st argument is the number of bytes we expected
    /// - 2nd argument is the number of bytes present
    Truncated(usize, usize),
    /// Width or height above the configured limits
    ///
    /// # Arguments
    /// - dimension name, maximum, found
    TooLargeDimensions(&'static str, usize, usize),
    /// The partition table does not fit in the declared file size.
    ///
    /// Only raised in strict mode
    ///
    /// # Arguments
    /// - table offset, table size, declared file size
    InvalidTable(u32, u32, u32),
    /// The logo payload carries an unexpected pixel format tag.
    ///
    /// Only raised in strict mode
    UnknownFormatTag(u32),
    /// Output buffer too small to hold the decoded pixels
    TooSmallOutput(usize, usize)
}

impl Debug for BootLogoDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NotAPartitionFile => {
                writeln!(f, "Not a partition file, expected `PART` as file start")
            }
            Self::LogoPartitionMissing => {
                writeln!(f, "No partition named `logo.bin` in the partition table")
            }
            Self::InvalidLogoMagic => {
                writeln!(f, "Invalid logo magic, expected `OGOL` at partition start")
            }
            Self::Truncated(expected, found) => {
                writeln!(
                    f,
                    "Truncated file, expected at least {expected} bytes but found {found}"
                )
            }
            Self::TooLargeDimensions(dimension, expected, found) => {
                writeln!(
                    f,
                    "Too large dimensions for {dimension}, {found} exceeds {expected}"
                )
            }
            Self::InvalidTable(offset, size, file_size) => {
                writeln!(
                    f,
                    "Partition table at {offset:#x} with size {size:#x} exceeds file size {file_size}"
                )
            }
            Self::UnknownFormatTag(tag) => {
                writeln!(f, "Unknown logo format tag {tag:#010x}")
            }
            Self::TooSmallOutput(expected, found) => {
                writeln!(
                    f,
                    "Too small output size, expected {expected}, but found {found}"
                )
            }
        }
    }
}

impl Display for BootLogoDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl From<OutOfBounds> for BootLogoDecodeErrors {
    fn from(value: OutOfBounds) -> Self {
        Self::Truncated(value.required(), value.available)
    }
}

/// Errors encountered during encoding
#[non_exhaustive]
pub enum BootLogoEncodeErrors {
    /// Width or height is zero
    EmptyRaster,
    /// A partition name does not fit its field
    ///
    /// # Arguments
    /// - name length, field width
    NameTooLong(usize, usize),
    /// The image cannot be described by the 32 bit size fields
    TooLargeDimensions(usize, usize),
    /// Pixel buffer length does not match `width*height*4`
    ///
    /// # Arguments
    /// - expected length, found length
    PixelCountMismatch(usize, usize),
    /// Only RGBA input is supported
    UnsupportedColorSpace(ColorSpace),
    /// Only 8 bit input is supported
    UnsupportedBitDepth(BitDepth),
    /// Output buffer too small to hold the encoded file
    TooSmallOutput(usize, usize),
    IoErrors(OutOfBounds)
}

impl Debug for BootLogoEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::EmptyRaster => {
                writeln!(f, "Cannot encode an image with zero width or height")
            }
            Self::NameTooLong(length, width) => {
                writeln!(
                    f,
                    "Partition name of {length} bytes does not fit field of {width} bytes"
                )
            }
            Self::TooLargeDimensions(width, height) => {
                writeln!(
                    f,
                    "Too large image dimensions {width}x{height}, file size must fit in {} bytes",
                    u32::MAX
                )
            }
            Self::PixelCountMismatch(expected, found) => {
                writeln!(
                    f,
                    "Pixel buffer length mismatch, expected {expected}, found {found}"
                )
            }
            Self::UnsupportedColorSpace(color) => {
                writeln!(f, "Unsupported color space {color:?}, expected RGBA")
            }
            Self::UnsupportedBitDepth(depth) => {
                writeln!(f, "Unsupported bit depth {depth:?}, expected 8 bit")
            }
            Self::TooSmallOutput(expected, found) => {
                writeln!(
                    f,
                    "Too small output size, expected {expected}, but found {found}"
                )
            }
            Self::IoErrors(err) => {
                writeln!(f, "I/O error {:?}", err)
            }
        }
    }
}

impl Display for BootLogoEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl From<OutOfBounds> for BootLogoEncodeErrors {
    fn from(value: OutOfBounds) -> Self {
        Self::IoErrors(value)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for OutOfBounds {}

#[cfg(feature = "std")]
impl std::error::Error for BootLogoDecodeErrors {}

#[cfg(feature = "std")]
impl std::error::Error for BootLogoEncodeErrors {}

impl Display for OutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}
