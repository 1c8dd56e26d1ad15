/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::process::exit;

use log::error;

use crate::workflow::create_and_exec_workflow_from_cmd;

mod cmd_args;
mod cmd_parsers;
mod errors;
mod file_io;
mod profiles;
mod serde;
mod state;
mod workflow;

pub fn main() {
    let cmd = cmd_args::create_cmd_args();
    let options = cmd.get_matches();

    // global flags are propagated to the subcommand
    let sub_options = options.subcommand().map_or(&options, |(_, sub)| sub);

    cmd_parsers::global_options::setup_logger(sub_options);

    let parsed_opts = cmd_parsers::global_options::parse_options(sub_options);

    let result = create_and_exec_workflow_from_cmd(&options, &parsed_opts);

    if let Err(err) = result {
        println!();
        error!(" Could not complete workflow, reason {:?}", err);

        println!();
        exit(-1);
    }
}
