/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Decoding and encoding boot logo partition images (`isp_part.bin`)
//!
//! The file is a partition table holding a single `logo.bin` partition,
//! the partition holds a raw 8 bit image. All integers are little endian `u32`.
//! ```text
//! ╔════════╤═══════╤══════════════════════════════════════════════╗
//! ║ Offset │ Bytes │ Description                                  ║
//! ╠════════╪═══════╪══════════════════════════════════════════════╣
//! ║ 0x00   │ 4     │ "PART" magic value                           ║
//! ╟────────┼───────┼──────────────────────────────────────────────╢
//! ║ 0x04   │ 4     │ total file size                              ║
//! ╟────────┼───────┼──────────────────────────────────────────────╢
//! ║ 0x08   │ 4     │ partition table offset, 0x10                 ║
//! ╟────────┼───────┼──────────────────────────────────────────────╢
//! ║ 0x0C   │ 4     │ partition table size, 0x20 per entry         ║
//! ╟────────┼───────┼──────────────────────────────────────────────╢
//! ║ 0x10   │ 24    │ entry name, NUL padded "logo.bin"            ║
//! ╟────────┼───────┼──────────────────────────────────────────────╢
//! ║ 0x28   │ 4     │ entry size, payload length                   ║
//! ╟────────┼───────┼──────────────────────────────────────────────╢
//! ║ 0x2C   │ 4     │ entry offset, 0x30                           ║
//! ╟────────┼───────┼──────────────────────────────────────────────╢
//! ║ 0x30   │ 4     │ "OGOL" magic value                           ║
//! ╟────────┼───────┼──────────────────────────────────────────────╢
//! ║ 0x3C   │ 4     │ width                                        ║
//! ╟────────┼───────┼──────────────────────────────────────────────╢
//! ║ 0x40   │ 4     │ height                                       ║
//! ╟────────┼───────┼──────────────────────────────────────────────╢
//! ║ 0x44   │ 4     │ format tag, 0x000E0003                       ║
//! ╟────────┼───────┼──────────────────────────────────────────────╢
//! ║ 0x50   │ w*h*4 │ [BGRA] / pixel, row-major                    ║
//! ╚════════╧═══════╧══════════════════════════════════════════════╝
//! ```
//!
//! # Features
//! - Decoding and encoding
//! - `no_std`
//! - Fuzz tested
//!
//! ## `no_std`
//! You can use `no_std` with alloc feature to compile for `no_std` endpoints
//!
//! ## `serde`
//! Serializes partition tables, payload headers and device profiles
//!
//! # Example
//! ```
//! use zune_bootlogo::{decode, encode, Raster};
//!
//! let raster = Raster::filled(4, 2, [255, 128, 0, 255]).unwrap();
//! let file = encode(&raster).unwrap();
//! let logo = decode(&file).unwrap();
//!
//! assert_eq!(logo.raster, raster);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![macro_use]
extern crate alloc;
extern crate core;

pub use decoder::*;
pub use device::*;
pub use encoder::*;
pub use errors::*;
pub use partition::{
    is_partition_file, LogoPayloadHeader, PartitionEntry, PartitionTable, PartitionTableHeader
};
pub use raster::{swap_red_blue, Raster};
pub use zune_core;

pub mod bytes;
pub mod constants;
mod decoder;
mod device;
mod encoder;
mod errors;
mod partition;
mod raster;
mod serde;
