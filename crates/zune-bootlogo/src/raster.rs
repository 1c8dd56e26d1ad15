/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::vec::Vec;

use crate::constants::LOGO_BYTES_PER_PIXEL;
use crate::errors::BootLogoEncodeErrors;

/// An 8 bit RGBA image, row-major
///
/// The pixel buffer always holds exactly `width*height*4` bytes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Raster {
    width:  u32,
    height: u32,
    pixels: Vec<u8>
}

impl Raster {
    /// Create a raster from interleaved RGBA bytes
    ///
    /// # Errors
    /// - [`PixelCountMismatch`] if `pixels.len()` is not `width*height*4`
    /// - [`TooLargeDimensions`] if the size cannot be computed
    ///
    /// [`PixelCountMismatch`]: BootLogoEncodeErrors::PixelCountMismatch
    /// [`TooLargeDimensions`]: BootLogoEncodeErrors::TooLargeDimensions
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Raster, BootLogoEncodeErrors> {
        let expected = rgba_len(width as usize, height as usize).ok_or(
            BootLogoEncodeErrors::TooLargeDimensions(width as usize, height as usize)
        )?;

        if pixels.len() != expected {
            return Err(BootLogoEncodeErrors::PixelCountMismatch(
                expected,
                pixels.len()
            ));
        }
        Ok(Raster {
            width,
            height,
            pixels
        })
    }

    /// Create a raster of one repeated pixel
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Result<Raster, BootLogoEncodeErrors> {
        let len = rgba_len(width as usize, height as usize).ok_or(
            BootLogoEncodeErrors::TooLargeDimensions(width as usize, height as usize)
        )?;
        let pixels = rgba.iter().copied().cycle().take(len).collect();

        Raster::new(width, height, pixels)
    }

    pub const fn width(&self) -> u32 {
        self.width
    }

    pub const fn height(&self) -> u32 {
        self.height
    }

    pub const fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Whether either dimension is zero
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Interleaved RGBA bytes
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// RGBA value at `(x, y)` or `None` when outside the image
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let start = (y as usize * self.width as usize + x as usize) * LOGO_BYTES_PER_PIXEL;
        let mut px = [0; 4];
        px.copy_from_slice(&self.pixels[start..start + LOGO_BYTES_PER_PIXEL]);
        Some(px)
    }
}

/// Byte length of a `width*height` RGBA buffer
pub(crate) fn rgba_len(width: usize, height: usize) -> Option<usize> {
    width
        .checked_mul(height)?
        .checked_mul(LOGO_BYTES_PER_PIXEL)
}

/// Swap between the logical RGBA order and the B,G,R,A order stored
/// in the logo partition.
///
/// The swap is its own inverse, the encoder and the decoder both go through here.
/// Only whole pixels are converted, trailing bytes are ignored.
pub fn swap_red_blue(input: &[u8], output: &mut [u8]) {
    for (src, dst) in input
        .chunks_exact(LOGO_BYTES_PER_PIXEL)
        .zip(output.chunks_exact_mut(LOGO_BYTES_PER_PIXEL))
    {
        dst[0] = src[2];
        dst[1] = src[1];
        dst[2] = src[0];
        dst[3] = src[3];
    }
}
