/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::{read, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, info};
use zune_bootlogo::{is_partition_file, BootLogoDecoder, DecodedLogo, Raster};
use zune_core::bit_depth::BitDepth;
use zune_core::colorspace::ColorSpace;
use zune_core::options::DecoderOptions;
use zune_image::core_filters::colorspace::ColorspaceConv;
use zune_image::core_filters::depth::Depth;
use zune_image::image::Image;
use zune_image::traits::OperationsTrait;

use crate::errors::CliErrors;

/// What an input file holds, decided from its contents
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum InputKind {
    /// Starts with the `PART` magic
    PartitionFile,
    /// Anything else, handed to the image decoders
    Image
}

impl InputKind {
    pub fn of(contents: &[u8]) -> InputKind {
        if is_partition_file(contents) {
            InputKind::PartitionFile
        } else {
            InputKind::Image
        }
    }
}

/// An input file read into memory
pub struct ZuneFile {
    pub file_path: PathBuf,
    pub contents:  Vec<u8>,
    pub kind:      InputKind
}

impl ZuneFile {
    pub fn open<P: AsRef<Path>>(file_path: P) -> Result<ZuneFile, CliErrors> {
        let file_path = file_path.as_ref().to_owned();

        info!("Reading {:?} to memory", file_path);
        let contents = read(&file_path).map_err(|e| CliErrors::Io(file_path.clone(), e))?;
        let kind = InputKind::of(&contents);

        debug!("Treating {:?} as {:?}", file_path, kind);

        Ok(ZuneFile {
            file_path,
            contents,
            kind
        })
    }

    /// Decode the file as a boot logo partition file
    pub fn decode_logo(&self, options: DecoderOptions) -> Result<DecodedLogo, CliErrors> {
        if self.kind != InputKind::PartitionFile {
            return Err(CliErrors::NotAPartitionFile(self.file_path.clone()));
        }
        let logo = BootLogoDecoder::new_with_options(&self.contents, options).decode()?;
        Ok(logo)
    }

    /// Load the file as an RGBA raster, whatever it holds
    pub fn to_raster(&self, options: DecoderOptions) -> Result<Raster, CliErrors> {
        match self.kind {
            InputKind::PartitionFile => Ok(self.decode_logo(options)?.raster),
            InputKind::Image => {
                let image = Image::read(self.contents.as_slice(), options)?;
                image_to_raster(image)
            }
        }
    }
}

/// Convert the first frame of an image to an 8 bit RGBA raster
pub fn image_to_raster(mut image: Image) -> Result<Raster, CliErrors> {
    debug!(
        "Input colorspace {:?}, depth {:?}",
        image.colorspace(),
        image.depth()
    );
    Depth::new(BitDepth::Eight).execute(&mut image)?;
    ColorspaceConv::new(ColorSpace::RGBA).execute(&mut image)?;

    let (width, height) = image.dimensions();
    let pixels = image
        .flatten_to_u8()
        .into_iter()
        .next()
        .ok_or(CliErrors::NoFrames)?;

    let width = u32::try_from(width).map_err(|_| too_large(width, height))?;
    let height = u32::try_from(height).map_err(|_| too_large(width as usize, height))?;

    Ok(Raster::new(width, height, pixels)?)
}

fn too_large(width: usize, height: usize) -> CliErrors {
    CliErrors::Encode(zune_bootlogo::BootLogoEncodeErrors::TooLargeDimensions(
        width, height
    ))
}

/// Save a raster as an image, the format follows the extension
pub fn save_raster(raster: &Raster, path: &Path) -> Result<(), CliErrors> {
    let image = Image::from_u8(
        raster.pixels(),
        raster.width() as usize,
        raster.height() as usize,
        ColorSpace::RGBA
    );
    image.save(path)?;
    Ok(())
}

/// Refuse to replace an existing file unless allowed to
pub fn verify_output_path(path: &Path, override_files: bool) -> Result<(), CliErrors> {
    if path.exists() && !override_files {
        return Err(CliErrors::OutputExists(path.to_owned()));
    }
    Ok(())
}

/// Write raw bytes to `path`
pub fn write_bytes(path: &Path, bytes: &[u8]) -> Result<(), CliErrors> {
    let io_err = |e| CliErrors::Io(path.to_owned(), e);

    let file = OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open(path)
        .map_err(io_err)?;

    let mut writer = BufWriter::new(file);
    writer.write_all(bytes).map_err(io_err)?;
    writer.flush().map_err(io_err)?;

    Ok(())
}
