/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::{Path, PathBuf};

use clap::ArgMatches;
use log::{info, trace, warn};
use zune_bootlogo::constants::DEFAULT_FILE_NAME;
use zune_bootlogo::{BootLogoDecoder, Compatibility, DeviceProfile, DeviceProfiles, Raster};

use crate::cmd_parsers::global_options::CmdOptions;
use crate::errors::CliErrors;
use crate::file_io::{save_raster, verify_output_path, write_bytes, InputKind, ZuneFile};
use crate::profiles::{load_profiles, resolve_device};
use crate::serde::ProbeReport;
use crate::state::AppState;

pub fn create_and_exec_workflow_from_cmd(
    args: &ArgMatches, cmd_opts: &CmdOptions
) -> Result<(), CliErrors> {
    let profiles = load_profiles(cmd_opts.profiles_file.as_deref())?;

    match args.subcommand() {
        Some(("encode", sub)) => {
            let state = load_state(sub, &profiles, cmd_opts)?;
            encode_state(&state, cmd_opts)
        }
        Some(("decode", sub)) => {
            let file = ZuneFile::open(input_path(sub))?;
            let state = prepare_state(sub, &profiles)?
                .with_raster(file.decode_logo(cmd_opts.decoder_options)?.raster);
            decode_state(&state, &output_path(sub, &file), cmd_opts)
        }
        Some(("open", sub)) => {
            let file = ZuneFile::open(input_path(sub))?;
            let state = prepare_state(sub, &profiles)?
                .with_raster(file.to_raster(cmd_opts.decoder_options)?);

            match file.kind {
                InputKind::PartitionFile => {
                    decode_state(&state, &output_path(sub, &file), cmd_opts)
                }
                InputKind::Image => encode_state(&state, cmd_opts)
            }
        }
        Some(("probe", sub)) => probe_files(sub, &profiles, cmd_opts),
        Some(("devices", _)) => list_devices(&profiles),
        _ => Ok(())
    }
}

fn input_path(args: &ArgMatches) -> PathBuf {
    args.get_one::<String>("in")
        .map(PathBuf::from)
        .unwrap_or_default()
}

/// Where a decoded preview goes, the input with a `png` extension unless given
fn output_path(args: &ArgMatches, file: &ZuneFile) -> PathBuf {
    match args.get_one::<String>("out") {
        Some(out) => PathBuf::from(out),
        None => file.file_path.with_extension("png")
    }
}

/// A state with the device and output name from the command line
fn prepare_state(args: &ArgMatches, profiles: &DeviceProfiles) -> Result<AppState, CliErrors> {
    let device = resolve_device(profiles, args.get_one::<String>("device").map(String::as_str))?;
    let name = args
        .get_one::<String>("out")
        .map(String::as_str)
        .unwrap_or(DEFAULT_FILE_NAME);

    Ok(AppState::new()
        .with_device(device.cloned())
        .with_file_name(name))
}

fn load_state(
    args: &ArgMatches, profiles: &DeviceProfiles, cmd_opts: &CmdOptions
) -> Result<AppState, CliErrors> {
    let file = ZuneFile::open(input_path(args))?;
    let raster = file.to_raster(cmd_opts.decoder_options)?;

    Ok(prepare_state(args, profiles)?.with_raster(raster))
}

fn report_compatibility(state: &AppState) {
    match (state.compatibility(), state.device()) {
        (Some(Compatibility::Mismatch { expected, found }), Some(device)) => {
            warn!(
                "Image is {}x{} but device {} expects {}x{}",
                found.0, found.1, device.id, expected.0, expected.1
            );
        }
        (Some(Compatibility::Match), Some(device)) => {
            info!("Image matches the resolution of {}", device.id);
        }
        _ => trace!("No device selected, skipping resolution check")
    }
}

fn encode_state(state: &AppState, cmd_opts: &CmdOptions) -> Result<(), CliErrors> {
    report_compatibility(state);

    let out = Path::new(state.file_name());
    verify_output_path(out, cmd_opts.override_files)?;

    let bytes = state.encode()?;
    write_bytes(out, &bytes)?;

    info!("Wrote {} bytes to {:?}", bytes.len(), out);
    Ok(())
}

fn decode_state(state: &AppState, out: &Path, cmd_opts: &CmdOptions) -> Result<(), CliErrors> {
    report_compatibility(state);
    verify_output_path(out, cmd_opts.override_files)?;

    if let Some(raster) = state.raster() {
        save_raster(raster, out)?;
        info!("Saved preview to {:?}", out);
    }
    Ok(())
}

/// Print a JSON report for every input file
fn probe_files(
    args: &ArgMatches, profiles: &DeviceProfiles, cmd_opts: &CmdOptions
) -> Result<(), CliErrors> {
    let device = resolve_device(profiles, args.get_one::<String>("device").map(String::as_str))?;
    let mut state = AppState::new().with_device(device.cloned());
    // only headers are read, limits do not matter
    let options = cmd_opts
        .decoder_options
        .set_max_width(usize::MAX)
        .set_max_height(usize::MAX);

    for path in args.get_many::<String>("in").into_iter().flatten() {
        state = state.cleared();

        let file = ZuneFile::open(path)?;
        let mut report = ProbeReport::new(&file.file_path, file.contents.len(), file.kind);
        report.device = device;

        let mut decoder = BootLogoDecoder::new_with_options(&file.contents, options);

        if file.kind == InputKind::PartitionFile {
            if let Err(err) = decoder.decode_headers() {
                warn!("Could not read headers of {:?}: {:?}", file.file_path, err);
            }
            report.table = decoder.partition_table();
            report.payload = decoder.payload_header();
            report.dimensions = decoder.dimensions();
            report.compatibility = report
                .dimensions
                .map(|dims| Compatibility::check(dims, device));
        } else {
            if let Some(raster) = image_raster(&file, options) {
                state = state.with_raster(raster);
            }
            report.dimensions = state.raster().map(Raster::dimensions);
            report.compatibility = state.compatibility();
        }

        println!("{}", serde_json::to_string_pretty(&report)?);
    }
    Ok(())
}

fn image_raster(file: &ZuneFile, options: zune_core::options::DecoderOptions) -> Option<Raster> {
    match file.to_raster(options) {
        Ok(raster) => Some(raster),
        Err(err) => {
            warn!("Could not decode {:?}: {:?}", file.file_path, err);
            None
        }
    }
}

fn list_devices(profiles: &DeviceProfiles) -> Result<(), CliErrors> {
    let devices: Vec<&DeviceProfile> = profiles.iter().collect();
    println!("{}", serde_json::to_string_pretty(&devices)?);
    Ok(())
}
