/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![no_main]

use libfuzzer_sys::fuzz_target;
use zune_bootlogo::zune_core::options::DecoderOptions;

fuzz_target!(|data: &[u8]| {
    let options = DecoderOptions::default().set_strict_mode(data.first() == Some(&b'P'));
    let mut decoder = zune_bootlogo::BootLogoDecoder::new_with_options(data, options);
    let _ = decoder.decode();
});
