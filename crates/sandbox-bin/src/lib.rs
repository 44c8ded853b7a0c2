/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::process::exit;

use log::error;

use crate::commands::run_command;

mod cmd_args;
mod commands;
mod errors;
mod global_options;
mod serde;

pub fn main() {
    let cmd = cmd_args::create_cmd_args();
    let options = cmd.get_matches();

    global_options::setup_logger(&options);

    if let Err(reason) = run_command(&options) {
        println!();
        error!(" Could not complete command, reason {:?}", reason);
        println!();
        exit(-1);
    }
}
