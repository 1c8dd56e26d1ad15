/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use clap::ArgMatches;
use log::{info, Level};
use zune_core::options::DecoderOptions;

use crate::cmd_parsers::get_decoder_options;

#[derive(Debug, Clone)]
pub struct CmdOptions {
    pub decoder_options: DecoderOptions,
    pub override_files:  bool,
    pub profiles_file:   Option<PathBuf>
}

impl CmdOptions {
    pub fn new() -> CmdOptions {
        CmdOptions {
            decoder_options: DecoderOptions::default(),
            override_files:  false,
            profiles_file:   None
        }
    }
}

pub fn parse_options(options: &ArgMatches) -> CmdOptions {
    let mut cmd_options = CmdOptions::new();

    cmd_options.decoder_options = get_decoder_options(options);

    if options.get_flag("yes") {
        info!("Setting all commands to yes");
        cmd_options.override_files = true;
    }
    if let Some(file) = options.get_one::<String>("profiles") {
        info!("Reading device profiles from {file}");
        cmd_options.profiles_file = Some(PathBuf::from(file));
    }
    cmd_options
}

/// Pick the log level from the command line flags
pub fn log_level(options: &ArgMatches) -> Level {
    if options.get_flag("debug") {
        Level::Debug
    } else if options.get_flag("trace") {
        Level::Trace
    } else if options.get_flag("warn") {
        Level::Warn
    } else if options.get_flag("info") {
        Level::Info
    } else {
        Level::Warn
    }
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level = log_level(options);

    if let Err(err) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not initialize logger: {err}");
        return;
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}
