/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![no_main]

use libfuzzer_sys::fuzz_target;
use zune_bootlogo::Raster;

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    let width = u32::from(data[0] % 32) + 1;
    let pixels = &data[1..];
    let height = (pixels.len() / 4) as u32 / width;

    if height == 0 {
        return;
    }
    let used = (width * height * 4) as usize;
    let raster = Raster::new(width, height, pixels[..used].to_vec()).unwrap();

    let file = zune_bootlogo::encode(&raster).unwrap();
    let logo = zune_bootlogo::decode(&file).unwrap();

    assert_eq!(logo.raster, raster);
});
