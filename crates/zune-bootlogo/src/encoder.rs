/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Encoding support for boot logo partition files
use alloc::vec;
use alloc::vec::Vec;

use log::trace;
use zune_core::bit_depth::BitDepth;
use zune_core::colorspace::ColorSpace;
use zune_core::options::EncoderOptions;

use crate::bytes::check_fixed_string;
use crate::constants::{
    LOGO_HEADER_SIZE, LOGO_PARTITION_NAME, LOGO_PAYLOAD_OFFSET, PARTITION_NAME_MAX_SIZE,
    PARTITION_TABLE_OFFSET
};
use crate::errors::BootLogoEncodeErrors;
use crate::partition::{LogoPayloadHeader, PartitionEntry, PartitionTableHeader};
use crate::raster::{rgba_len, swap_red_blue, Raster};

/// Sizes of an encoded file
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct EncodedLayout {
    /// Logo payload length, header plus pixels
    pub image_part_size: u32,
    /// Whole file length
    pub file_size:       u32
}

impl EncodedLayout {
    /// Compute the layout of a `width` by `height` logo
    ///
    /// Returns `None` if the sizes do not fit the 32 bit fields
    pub fn new(width: usize, height: usize) -> Option<EncodedLayout> {
        let image_part_size = rgba_len(width, height)?.checked_add(LOGO_HEADER_SIZE)?;
        let file_size = image_part_size.checked_add(LOGO_PAYLOAD_OFFSET as usize)?;

        Some(EncodedLayout {
            image_part_size: u32::try_from(image_part_size).ok()?,
            file_size:       u32::try_from(file_size).ok()?
        })
    }
}

/// A boot logo partition file encoder
///
/// Pixels are 8 bit RGBA, row-major. They are stored as B,G,R,A
/// in a single `logo.bin` partition.
///
/// # Example
/// - Encode a 2 by 1 image
/// ```
/// use zune_bootlogo::{BootLogoEncoder, Raster};
///
/// let raster = Raster::new(2, 1, vec![255, 0, 0, 255, 0, 255, 0, 128]).unwrap();
/// let file = BootLogoEncoder::new(&raster).encode().unwrap();
///
/// assert_eq!(file.len(), 0x50 + 8);
/// assert_eq!(&file[0x50..0x54], &[0, 0, 255, 255]);
/// ```
pub struct BootLogoEncoder<'a> {
    pixels:     &'a [u8],
    width:      usize,
    height:     usize,
    colorspace: ColorSpace,
    depth:      BitDepth
}

impl<'a> BootLogoEncoder<'a> {
    /// Create an encoder for a raster
    pub fn new(raster: &'a Raster) -> BootLogoEncoder<'a> {
        BootLogoEncoder {
            pixels:     raster.pixels(),
            width:      raster.width() as usize,
            height:     raster.height() as usize,
            colorspace: ColorSpace::RGBA,
            depth:      BitDepth::Eight
        }
    }

    /// Create an encoder for raw pixels described by `options`
    ///
    /// # Arguments
    /// - data: Pixel data, size must be `width*height*4`
    /// - options: Image width, height, colorspace and depth.
    ///   Colorspace must be RGBA and depth 8 bit, this is checked on encode
    pub fn from_pixels(data: &'a [u8], options: EncoderOptions) -> BootLogoEncoder<'a> {
        BootLogoEncoder {
            pixels:     data,
            width:      options.get_width(),
            height:     options.get_height(),
            colorspace: options.get_colorspace(),
            depth:      options.get_depth()
        }
    }

    /// Validate the input and compute the output layout
    fn layout(&self) -> Result<EncodedLayout, BootLogoEncodeErrors> {
        if self.colorspace != ColorSpace::RGBA {
            return Err(BootLogoEncodeErrors::UnsupportedColorSpace(self.colorspace));
        }
        if self.depth != BitDepth::Eight {
            return Err(BootLogoEncodeErrors::UnsupportedBitDepth(self.depth));
        }
        if self.width == 0 || self.height == 0 {
            return Err(BootLogoEncodeErrors::EmptyRaster);
        }
        check_fixed_string(LOGO_PARTITION_NAME, PARTITION_NAME_MAX_SIZE)?;

        let layout = EncodedLayout::new(self.width, self.height).ok_or(
            BootLogoEncodeErrors::TooLargeDimensions(self.width, self.height)
        )?;
        // checked by the layout
        let expected = layout.image_part_size as usize - LOGO_HEADER_SIZE;

        if self.pixels.len() != expected {
            return Err(BootLogoEncodeErrors::PixelCountMismatch(
                expected,
                self.pixels.len()
            ));
        }
        Ok(layout)
    }

    /// Exact size of the encoded file
    pub fn encoded_size(&self) -> Result<usize, BootLogoEncodeErrors> {
        self.layout().map(|layout| layout.file_size as usize)
    }

    /// Encode into a newly allocated buffer
    pub fn encode(&self) -> Result<Vec<u8>, BootLogoEncodeErrors> {
        let size = self.encoded_size()?;
        let mut output = vec![0; size];

        self.encode_into(&mut output)?;

        Ok(output)
    }

    /// Encode into a pre-allocated buffer
    ///
    /// Nothing is written unless the whole file can be.
    /// The encoder relies on untouched bytes being zero, so `output` should be zeroed.
    ///
    /// # Returns
    /// - Ok(size): bytes used for the file
    /// - Err: the error encountered during validation
    pub fn encode_into(&self, output: &mut [u8]) -> Result<usize, BootLogoEncodeErrors> {
        let layout = self.layout()?;
        let file_size = layout.file_size as usize;

        if output.len() < file_size {
            return Err(BootLogoEncodeErrors::TooSmallOutput(file_size, output.len()));
        }
        let output = &mut output[..file_size];

        trace!("Image width: {}", self.width);
        trace!("Image height: {}", self.height);
        trace!("Output file size: {}", file_size);

        PartitionTableHeader::new(layout.file_size).write(output)?;

        PartitionEntry::new(LOGO_PARTITION_NAME, layout.image_part_size, LOGO_PAYLOAD_OFFSET)
            .write(output, PARTITION_TABLE_OFFSET as usize)?;

        // dimensions were checked against u32 by the layout
        let payload = LogoPayloadHeader::new(self.width as u32, self.height as u32);
        payload.write(output, LOGO_PAYLOAD_OFFSET as usize)?;

        let pixel_start = LOGO_PAYLOAD_OFFSET as usize + LOGO_HEADER_SIZE;
        swap_red_blue(self.pixels, &mut output[pixel_start..]);

        Ok(file_size)
    }
}

/// Encode a raster into a boot logo partition file
pub fn encode(raster: &Raster) -> Result<Vec<u8>, BootLogoEncodeErrors> {
    BootLogoEncoder::new(raster).encode()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bytes::read_u32_le;

    #[test]
    fn two_by_one_scenario() {
        let raster = Raster::new(2, 1, vec![255, 0, 0, 255, 0, 255, 0, 128]).unwrap();
        let file = encode(&raster).unwrap();

        assert_eq!(file.len(), 88);
        assert_eq!(&file[0x50..0x54], &[0, 0, 255, 255]);
        assert_eq!(&file[0x54..0x58], &[0, 255, 0, 128]);
    }

    #[test]
    fn fixed_fields() {
        let raster = Raster::filled(3, 5, [1, 2, 3, 4]).unwrap();
        let file = encode(&raster).unwrap();

        assert_eq!(&file[0..4], b"PART");
        assert_eq!(read_u32_le(&file, 0x04).unwrap() as usize, file.len());
        assert_eq!(read_u32_le(&file, 0x08).unwrap(), 0x10);
        assert_eq!(read_u32_le(&file, 0x0C).unwrap(), 0x20);
        assert_eq!(&file[0x10..0x19], b"logo.bin\0");
        assert!(file[0x18..0x28].iter().all(|x| *x == 0));
        assert_eq!(read_u32_le(&file, 0x28).unwrap(), 3 * 5 * 4 + 0x20);
        assert_eq!(read_u32_le(&file, 0x2C).unwrap(), 0x30);
        assert_eq!(&file[0x30..0x34], b"OGOL");
        assert_eq!(read_u32_le(&file, 0x3C).unwrap(), 3);
        assert_eq!(read_u32_le(&file, 0x40).unwrap(), 5);
        assert_eq!(read_u32_le(&file, 0x44).unwrap(), 0x000E_0003);
        // reserved payload header bytes stay zero
        assert!(file[0x34..0x3C].iter().all(|x| *x == 0));
        assert!(file[0x48..0x50].iter().all(|x| *x == 0));
    }

    #[test]
    fn size_law() {
        for (w, h) in [(1, 1), (7, 3), (64, 2)] {
            let raster = Raster::filled(w, h, [0; 4]).unwrap();
            let file = encode(&raster).unwrap();
            assert_eq!(file.len(), (w * h * 4) as usize + 0x50);
        }
    }

    #[test]
    fn empty_raster_is_rejected() {
        for (w, h) in [(0, 4), (4, 0), (0, 0)] {
            let raster = Raster::new(w, h, vec![]).unwrap();
            assert!(matches!(
                encode(&raster),
                Err(BootLogoEncodeErrors::EmptyRaster)
            ));
        }
    }

    #[test]
    fn raw_pixels_must_be_rgba8() {
        let pixels = [0_u8; 12];
        let options = EncoderOptions::new(2, 2, ColorSpace::RGB, BitDepth::Eight);
        assert!(matches!(
            BootLogoEncoder::from_pixels(&pixels, options).encode(),
            Err(BootLogoEncodeErrors::UnsupportedColorSpace(ColorSpace::RGB))
        ));

        let options = EncoderOptions::new(2, 2, ColorSpace::RGBA, BitDepth::Sixteen);
        assert!(matches!(
            BootLogoEncoder::from_pixels(&pixels, options).encode(),
            Err(BootLogoEncodeErrors::UnsupportedBitDepth(BitDepth::Sixteen))
        ));

        let options = EncoderOptions::new(2, 2, ColorSpace::RGBA, BitDepth::Eight);
        assert!(matches!(
            BootLogoEncoder::from_pixels(&pixels, options).encode(),
            Err(BootLogoEncodeErrors::PixelCountMismatch(16, 12))
        ));
    }

    #[test]
    fn oversized_dimensions_are_rejected() {
        let options = EncoderOptions::new(1 << 16, 1 << 15, ColorSpace::RGBA, BitDepth::Eight);
        assert!(matches!(
            BootLogoEncoder::from_pixels(&[], options).encode(),
            Err(BootLogoEncodeErrors::TooLargeDimensions(_, _))
        ));
    }

    #[test]
    fn encode_into_leaves_small_buffers_untouched() {
        let raster = Raster::filled(2, 2, [7; 4]).unwrap();
        let encoder = BootLogoEncoder::new(&raster);

        let mut small = vec![0; 0x50];
        assert!(matches!(
            encoder.encode_into(&mut small),
            Err(BootLogoEncodeErrors::TooSmallOutput(0x60, 0x50))
        ));
        assert!(small.iter().all(|x| *x == 0));

        let mut large = vec![0; 0x80];
        assert_eq!(encoder.encode_into(&mut large).unwrap(), 0x60);
        assert!(large[0x60..].iter().all(|x| *x == 0));
    }
}
