/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::vec;

use log::{trace, warn};
use zune_core::bit_depth::BitDepth;
use zune_core::colorspace::ColorSpace;
use zune_core::options::DecoderOptions;

use crate::bytes::read_fixed_bytes;
use crate::constants::{LOGO_FORMAT_TAG, LOGO_HEADER_SIZE, LOGO_MAGIC, LOGO_PARTITION_NAME};
use crate::device::{Compatibility, DeviceProfile};
use crate::errors::BootLogoDecodeErrors;
use crate::partition::{LogoPayloadHeader, PartitionEntry, PartitionTable};
use crate::raster::{rgba_len, swap_red_blue, Raster};

/// A fully decoded and validated logo
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DecodedLogo {
    pub width:      u32,
    pub height:     u32,
    /// Pixel format tag found in the payload header
    pub format_tag: u32,
    pub raster:     Raster
}

impl DecodedLogo {
    /// Compare the logo resolution against `device`
    pub fn compatibility(&self, device: Option<&DeviceProfile>) -> Compatibility {
        Compatibility::check((self.width, self.height), device)
    }
}

/// A boot logo partition file decoder
///
/// The decoder is initialized by calling `new`
/// and either of [`decode_headers`] to validate the partition table and
/// the logo payload header or [`decode`] to return the logo pixels.
///
/// Headers are available after [`decode_headers`], pixels are never
/// exposed unless the whole image is present.
///
/// [`decode_headers`]:BootLogoDecoder::decode_headers
/// [`decode`]:BootLogoDecoder::decode
pub struct BootLogoDecoder<'a> {
    data:            &'a [u8],
    options:         DecoderOptions,
    table:           Option<PartitionTable>,
    logo_offset:     usize,
    payload:         Option<LogoPayloadHeader>,
    decoded_headers: bool
}

impl<'a> BootLogoDecoder<'a> {
    /// Create a new decoder with default limits
    ///
    /// Strict mode is off, the format tag is only read and an inconsistent
    /// table size only warns.
    ///
    /// # Arguments
    /// - `data`: The whole partition file
    pub fn new(data: &'a [u8]) -> BootLogoDecoder<'a> {
        let options = DecoderOptions::default().set_strict_mode(false);
        BootLogoDecoder::new_with_options(data, options)
    }

    /// Create a new decoder that obeys specified restrictions
    ///
    /// Max width and height limit the declared logo size, strict mode turns
    /// an inconsistent partition table or an unknown format tag into errors.
    ///
    /// # Example
    /// ```
    /// use zune_core::options::DecoderOptions;
    /// use zune_bootlogo::BootLogoDecoder;
    /// // only decode logos less than 2000 pixels in both width and height
    /// let options = DecoderOptions::default().set_max_width(2000).set_max_height(2000);
    ///
    /// let mut decoder = BootLogoDecoder::new_with_options(&[], options);
    /// assert!(decoder.decode_headers().is_err());
    /// ```
    #[allow(clippy::redundant_field_names)]
    pub fn new_with_options(data: &'a [u8], options: DecoderOptions) -> BootLogoDecoder<'a> {
        BootLogoDecoder {
            data:            data,
            options:         options,
            table:           None,
            logo_offset:     0,
            payload:         None,
            decoded_headers: false
        }
    }

    /// Validate the partition table and read the logo payload header
    ///
    /// # Returns
    /// - On success: Nothing
    /// - On error: The first validation failure, see [BootLogoDecodeErrors]
    ///
    /// [BootLogoDecodeErrors]:crate::errors::BootLogoDecodeErrors
    pub fn decode_headers(&mut self) -> Result<(), BootLogoDecodeErrors> {
        if self.decoded_headers {
            return Ok(());
        }
        let table = PartitionTable::parse(self.data)?;

        if !table.header.table_fits() {
            if self.options.get_strict_mode() {
                return Err(BootLogoDecodeErrors::InvalidTable(
                    table.header.table_offset,
                    table.header.table_size,
                    table.header.file_size
                ));
            }
            warn!(
                "Partition table ends past declared file size {}",
                table.header.file_size
            );
        }
        if table.header.file_size as usize != self.data.len() {
            warn!(
                "Declared file size {} differs from actual size {}",
                table.header.file_size,
                self.data.len()
            );
        }

        let entry = table
            .find(LOGO_PARTITION_NAME)
            .ok_or(BootLogoDecodeErrors::LogoPartitionMissing)?;
        let logo_offset = entry.offset as usize;

        let magic = read_fixed_bytes::<4>(self.data, logo_offset)?;

        if magic != LOGO_MAGIC {
            return Err(BootLogoDecodeErrors::InvalidLogoMagic);
        }
        let payload = LogoPayloadHeader::read(self.data, logo_offset)?;

        if payload.width as usize > self.options.get_max_width() {
            return Err(BootLogoDecodeErrors::TooLargeDimensions(
                "width",
                self.options.get_max_width(),
                payload.width as usize
            ));
        }
        if payload.height as usize > self.options.get_max_height() {
            return Err(BootLogoDecodeErrors::TooLargeDimensions(
                "height",
                self.options.get_max_height(),
                payload.height as usize
            ));
        }
        if payload.format_tag != LOGO_FORMAT_TAG {
            if self.options.get_strict_mode() {
                return Err(BootLogoDecodeErrors::UnknownFormatTag(payload.format_tag));
            }
            warn!(
                "Unknown logo format tag {:#010x}, expected {:#010x}",
                payload.format_tag, LOGO_FORMAT_TAG
            );
        }

        if payload.width == 0 || payload.height == 0 {
            warn!(
                "Logo declares an empty image of {}x{}",
                payload.width, payload.height
            );
        }

        trace!("Logo partition offset: {:#x}", logo_offset);
        trace!("Image width: {}", payload.width);
        trace!("Image height: {}", payload.height);

        self.logo_offset = logo_offset;
        self.payload = Some(payload);
        self.table = Some(table);
        self.decoded_headers = true;

        Ok(())
    }

    /// Number of bytes needed to hold the decoded RGBA pixels
    ///
    /// # Returns
    ///  - `Some(usize)`: Minimum size for a buffer needed to decode the image
    ///  - `None`: Headers were not decoded or the size overflows
    pub fn output_buffer_size(&self) -> Option<usize> {
        let payload = self.payload.as_ref()?;
        rgba_len(payload.width as usize, payload.height as usize)
    }

    /// Decode the logo, returning its pixels and header values
    pub fn decode(&mut self) -> Result<DecodedLogo, BootLogoDecodeErrors> {
        self.decode_headers()?;

        let size = self.pixel_bytes()?;
        // the file must hold every pixel before anything is allocated
        self.pixel_range(size)?;
        let mut pixels = vec![0; size];

        self.decode_into(&mut pixels)?;

        let (width, height) = self.dimensions().unwrap_or_default();
        let raster = Raster::new(width, height, pixels)
            .map_err(|_| BootLogoDecodeErrors::TooLargeDimensions("pixels", usize::MAX, size))?;

        Ok(DecodedLogo {
            width,
            height,
            format_tag: self.format_tag().unwrap_or(LOGO_FORMAT_TAG),
            raster
        })
    }

    /// Decode the logo pixels as RGBA into `pixels`
    ///
    /// Returns an error if the buffer cannot hold the image or the
    /// file ends before the last pixel. `pixels` is untouched on error.
    pub fn decode_into(&mut self, pixels: &mut [u8]) -> Result<(), BootLogoDecodeErrors> {
        self.decode_headers()?;

        let size = self.pixel_bytes()?;

        if pixels.len() < size {
            return Err(BootLogoDecodeErrors::TooSmallOutput(size, pixels.len()));
        }
        let (start, end) = self.pixel_range(size)?;

        swap_red_blue(&self.data[start..end], &mut pixels[..size]);

        trace!("Finished decoding image");

        Ok(())
    }

    /// Byte range of `size` pixel bytes, which must lie inside the file
    fn pixel_range(&self, size: usize) -> Result<(usize, usize), BootLogoDecodeErrors> {
        let start = self
            .logo_offset
            .checked_add(LOGO_HEADER_SIZE)
            .ok_or(BootLogoDecodeErrors::Truncated(usize::MAX, self.data.len()))?;
        let end = start
            .checked_add(size)
            .ok_or(BootLogoDecodeErrors::Truncated(usize::MAX, self.data.len()))?;

        if end > self.data.len() {
            return Err(BootLogoDecodeErrors::Truncated(end, self.data.len()));
        }
        Ok((start, end))
    }

    fn pixel_bytes(&self) -> Result<usize, BootLogoDecodeErrors> {
        let (width, height) = self.dimensions().unwrap_or_default();

        self.output_buffer_size()
            .ok_or(BootLogoDecodeErrors::TooLargeDimensions(
                "pixels",
                usize::MAX,
                (width as usize).saturating_mul(height as usize)
            ))
    }

    /// Logo width and height, or `None` before headers are decoded
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.payload.map(|p| (p.width, p.height))
    }

    /// Pixel format tag, or `None` before headers are decoded
    pub fn format_tag(&self) -> Option<u32> {
        self.payload.map(|p| p.format_tag)
    }

    /// The full logo payload header
    pub const fn payload_header(&self) -> Option<&LogoPayloadHeader> {
        self.payload.as_ref()
    }

    /// The parsed partition table
    pub const fn partition_table(&self) -> Option<&PartitionTable> {
        self.table.as_ref()
    }

    /// The table entry of the logo partition
    pub fn logo_entry(&self) -> Option<&PartitionEntry> {
        self.table.as_ref()?.find(LOGO_PARTITION_NAME)
    }

    /// Decoded colorspace, this is always RGBA
    pub const fn colorspace(&self) -> ColorSpace {
        ColorSpace::RGBA
    }

    /// Decoded bit depth, this is always 8
    pub const fn bit_depth(&self) -> BitDepth {
        BitDepth::Eight
    }
}

/// Decode a boot logo partition file with default options
pub fn decode(data: &[u8]) -> Result<DecodedLogo, BootLogoDecodeErrors> {
    BootLogoDecoder::new(data).decode()
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;
    use crate::bytes::write_u32_le;
    use crate::encoder::encode;

    fn sample() -> (Raster, Vec<u8>) {
        let pixels = (0..6 * 4 * 4).map(|x| x as u8).collect();
        let raster = Raster::new(6, 4, pixels).unwrap();
        let file = encode(&raster).unwrap();
        (raster, file)
    }

    #[test]
    fn round_trip() {
        let (raster, file) = sample();
        let logo = decode(&file).unwrap();

        assert_eq!(logo.width, 6);
        assert_eq!(logo.height, 4);
        assert_eq!(logo.format_tag, LOGO_FORMAT_TAG);
        assert_eq!(logo.raster, raster);
    }

    #[test]
    fn headers_without_pixels() {
        let (_, file) = sample();
        let mut decoder = BootLogoDecoder::new(&file[..0x50]);

        decoder.decode_headers().unwrap();
        assert_eq!(decoder.dimensions(), Some((6, 4)));
        assert_eq!(decoder.output_buffer_size(), Some(96));
        assert_eq!(decoder.logo_entry().map(|e| e.offset), Some(0x30));

        assert!(matches!(
            decoder.decode(),
            Err(BootLogoDecodeErrors::Truncated(0xB0, 0x50))
        ));
    }

    #[test]
    fn rejects_wrong_file_magic() {
        let (_, mut file) = sample();
        file[0..4].copy_from_slice(&[0, 1, 2, 3]);
        assert!(matches!(
            decode(&file),
            Err(BootLogoDecodeErrors::NotAPartitionFile)
        ));
    }

    #[test]
    fn rejects_missing_logo_partition() {
        let (_, mut file) = sample();
        file[0x10..0x18].copy_from_slice(b"boot.bin");
        assert!(matches!(
            decode(&file),
            Err(BootLogoDecodeErrors::LogoPartitionMissing)
        ));

        // a name prefix does not count
        let (_, mut file) = sample();
        file[0x14] = 0;
        assert!(matches!(
            decode(&file),
            Err(BootLogoDecodeErrors::LogoPartitionMissing)
        ));
    }

    #[test]
    fn rejects_wrong_logo_magic() {
        let (_, mut file) = sample();
        file[0x30..0x34].copy_from_slice(b"LOGO");
        assert!(matches!(
            decode(&file),
            Err(BootLogoDecodeErrors::InvalidLogoMagic)
        ));
    }

    #[test]
    fn truncation_at_every_length() {
        let (_, file) = sample();
        for len in 4..file.len() {
            let result = decode(&file[..len]);
            assert!(
                matches!(result, Err(BootLogoDecodeErrors::Truncated(_, found)) if found == len),
                "length {len}"
            );
        }
    }

    #[test]
    fn logo_offset_past_end_is_truncated() {
        let (_, mut file) = sample();
        write_u32_le(&mut file, 0x2C, 0x1000).unwrap();
        assert!(matches!(
            decode(&file),
            Err(BootLogoDecodeErrors::Truncated(0x1004, _))
        ));
    }

    #[test]
    fn dimension_limits() {
        let (_, file) = sample();
        let options = DecoderOptions::default().set_max_width(5);
        let mut decoder = BootLogoDecoder::new_with_options(&file, options);

        assert!(matches!(
            decoder.decode_headers(),
            Err(BootLogoDecodeErrors::TooLargeDimensions("width", 5, 6))
        ));
    }

    #[test]
    fn huge_declared_dimensions_do_not_allocate() {
        let (_, mut file) = sample();
        write_u32_le(&mut file, 0x3C, u32::MAX).unwrap();
        write_u32_le(&mut file, 0x40, u32::MAX).unwrap();

        let options = DecoderOptions::default()
            .set_max_width(usize::MAX)
            .set_max_height(usize::MAX);
        let result = BootLogoDecoder::new_with_options(&file, options).decode();
        assert!(result.is_err());
    }

    #[test]
    fn oversized_header_only_file_is_truncated() {
        let raster = Raster::filled(1, 1, [9; 4]).unwrap();
        let mut file = encode(&raster).unwrap();
        write_u32_le(&mut file, 0x3C, 200_000).unwrap();
        write_u32_le(&mut file, 0x40, 200_000).unwrap();

        let options = DecoderOptions::default()
            .set_max_width(1 << 20)
            .set_max_height(1 << 20);
        let result = BootLogoDecoder::new_with_options(&file, options).decode();

        assert!(matches!(
            result,
            Err(BootLogoDecodeErrors::Truncated(_, found)) if found == file.len()
        ));
    }

    #[test]
    fn default_decoder_is_lenient() {
        let (_, file) = sample();
        let decoder = BootLogoDecoder::new(&file);
        assert!(!decoder.options.get_strict_mode());
    }

    #[test]
    fn unknown_format_tag_is_returned() {
        let (raster, mut file) = sample();
        write_u32_le(&mut file, 0x44, 0x0001_0002).unwrap();

        let logo = decode(&file).unwrap();
        assert_eq!(logo.format_tag, 0x0001_0002);
        assert_eq!(logo.raster, raster);
    }

    #[test]
    fn zero_dimensions_decode_to_empty_raster() {
        let (_, mut file) = sample();
        write_u32_le(&mut file, 0x3C, 0).unwrap();

        let logo = decode(&file).unwrap();
        assert_eq!((logo.width, logo.height), (0, 4));
        assert!(logo.raster.is_empty());
    }

    #[test]
    fn strict_mode_checks() {
        let (_, mut file) = sample();
        write_u32_le(&mut file, 0x44, 0x0001_0002).unwrap();

        assert_eq!(decode(&file).unwrap().format_tag, 0x0001_0002);

        let strict = DecoderOptions::default().set_strict_mode(true);
        assert!(matches!(
            BootLogoDecoder::new_with_options(&file, strict).decode(),
            Err(BootLogoDecodeErrors::UnknownFormatTag(0x0001_0002))
        ));

        let (_, mut file) = sample();
        write_u32_le(&mut file, 0x04, 0x20).unwrap();
        assert!(decode(&file).is_ok());
        assert!(matches!(
            BootLogoDecoder::new_with_options(&file, strict).decode(),
            Err(BootLogoDecodeErrors::InvalidTable(0x10, 0x20, 0x20))
        ));
    }

    #[test]
    fn decode_into_checks_output_size() {
        let (raster, file) = sample();
        let mut decoder = BootLogoDecoder::new(&file);

        let mut small = vec![0; 10];
        assert!(matches!(
            decoder.decode_into(&mut small),
            Err(BootLogoDecodeErrors::TooSmallOutput(96, 10))
        ));

        let mut exact = vec![0; 96];
        decoder.decode_into(&mut exact).unwrap();
        assert_eq!(exact, raster.pixels());
    }

    #[test]
    fn compatibility_is_advisory() {
        let (_, file) = sample();
        let logo = decode(&file).unwrap();
        let device = DeviceProfile::new("panel", 800, 480);

        assert!(!logo.compatibility(Some(&device)).is_match());
        assert_eq!(logo.compatibility(None), Compatibility::Unknown);
        assert_eq!(
            logo.compatibility(Some(&DeviceProfile::new("tiny", 6, 4))),
            Compatibility::Match
        );
    }
}
