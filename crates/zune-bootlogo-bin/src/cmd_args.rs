/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::{value_parser, Arg, ArgAction, Command};
use zune_bootlogo::constants::DEFAULT_FILE_NAME;

use crate::cmd_args::help_strings::{DECODE_HELP, ENCODE_HELP, OPEN_HELP, PROFILES_HELP};

pub mod help_strings;

fn input_arg() -> Arg {
    Arg::new("in")
        .short('i')
        .long("input")
        .help("Input file to read data from")
        .required(true)
}

fn output_arg() -> Arg {
    Arg::new("out")
        .short('o')
        .long("output")
        .help("Output to write the data to")
}

fn device_arg() -> Arg {
    Arg::new("device")
        .short('d')
        .long("device")
        .help("Device whose logo resolution the image is checked against")
}

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("zune-bootlogo")
        .about("Convert images to and from boot logo partition files")
        .subcommand_required(true)
        .subcommand(Command::new("encode")
            .about("Convert an image into a boot logo partition file")
            .long_about(ENCODE_HELP)
            .arg(input_arg())
            .arg(output_arg().default_value(DEFAULT_FILE_NAME))
            .arg(device_arg()))
        .subcommand(Command::new("decode")
            .about("Decode a boot logo partition file into a preview image")
            .long_about(DECODE_HELP)
            .arg(input_arg())
            .arg(output_arg().required(true))
            .arg(device_arg()))
        .subcommand(Command::new("open")
            .about("Encode or decode a file depending on its contents")
            .long_about(OPEN_HELP)
            .arg(input_arg())
            .arg(output_arg())
            .arg(device_arg()))
        .subcommand(Command::new("probe")
            .about("Print information about partition files and images as JSON")
            .arg(input_arg().action(ArgAction::Append))
            .arg(device_arg()))
        .subcommand(Command::new("devices")
            .about("List known device profiles"))
        .arg(Arg::new("profiles")
            .long("profiles")
            .global(true)
            .help("JSON file with extra device profiles")
            .long_help(PROFILES_HELP))
        .arg(Arg::new("yes")
            .short('y')
            .long("yes")
            .global(true)
            .action(ArgAction::SetTrue)
            .help("Overwrite existing output files"))
        .arg(Arg::new("debug")
            .long("debug")
            .global(true)
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .global(true)
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .global(true)
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .global(true)
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the decoding options"))
        .arg(Arg::new("max-width")
            .long("max-width")
            .global(true)
            .help_heading("ADVANCED")
            .help("Maximum width of images to decode")
            .value_parser(value_parser!(usize))
            .default_value("16384"))
        .arg(Arg::new("max-height")
            .long("max-height")
            .global(true)
            .help_heading("ADVANCED")
            .help("Maximum height of images to decode")
            .value_parser(value_parser!(usize))
            .default_value("16384"))
        .arg(Arg::new("strict")
            .long("strict")
            .global(true)
            .action(ArgAction::SetTrue)
            .help_heading("ADVANCED")
            .help("Treat inconsistent partition tables and unknown format tags as errors"))
}
