/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter};
use std::path::PathBuf;

use zune_bootlogo::{BootLogoDecodeErrors, BootLogoEncodeErrors};
use zune_image::errors::ImageErrors;

/// Errors that stop a command
pub enum CliErrors {
    Io(PathBuf, std::io::Error),
    Image(ImageErrors),
    Decode(BootLogoDecodeErrors),
    Encode(BootLogoEncodeErrors),
    Json(serde_json::Error),
    /// The output file exists and overwriting was not requested
    OutputExists(PathBuf),
    /// No profile with this id is known
    UnknownDevice(String),
    /// The command needs a partition file but got something else
    NotAPartitionFile(PathBuf),
    /// The decoded image holds no frames
    NoFrames
}

impl Debug for CliErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CliErrors::Io(path, err) => {
                writeln!(f, "I/O error on {:?}: {}", path, err)
            }
            CliErrors::Image(err) => {
                writeln!(f, "Image error: {:?}", err)
            }
            CliErrors::Decode(err) => {
                writeln!(f, "Could not decode boot logo: {:?}", err)
            }
            CliErrors::Encode(err) => {
                writeln!(f, "Could not encode boot logo: {:?}", err)
            }
            CliErrors::Json(err) => {
                writeln!(f, "JSON error: {}", err)
            }
            CliErrors::OutputExists(path) => {
                writeln!(
                    f,
                    "Output file {:?} exists, pass --yes to overwrite it",
                    path
                )
            }
            CliErrors::UnknownDevice(id) => {
                writeln!(f, "Unknown device `{id}`, run `devices` to list known devices")
            }
            CliErrors::NotAPartitionFile(path) => {
                writeln!(f, "{:?} is not a partition file", path)
            }
            CliErrors::NoFrames => {
                writeln!(f, "Image contains no frames")
            }
        }
    }
}

impl Display for CliErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for CliErrors {}

impl From<ImageErrors> for CliErrors {
    fn from(value: ImageErrors) -> Self {
        CliErrors::Image(value)
    }
}

impl From<BootLogoDecodeErrors> for CliErrors {
    fn from(value: BootLogoDecodeErrors) -> Self {
        CliErrors::Decode(value)
    }
}

impl From<BootLogoEncodeErrors> for CliErrors {
    fn from(value: BootLogoEncodeErrors) -> Self {
        CliErrors::Encode(value)
    }
}

impl From<serde_json::Error> for CliErrors {
    fn from(value: serde_json::Error) -> Self {
        CliErrors::Json(value)
    }
}
