/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::ArgMatches;
use log::{info, Level};
use sandbox_media::options::LoadOptions;

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level;

    if options.get_flag("debug") {
        log_level = Level::Debug;
    } else if options.get_flag("trace") {
        log_level = Level::Trace;
    } else if options.get_flag("warn") {
        log_level = Level::Warn
    } else if options.get_flag("info") {
        log_level = Level::Info;
    } else {
        log_level = Level::Warn;
    }

    if let Err(err) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not initialize logger: {err}");
        return;
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}

/// Build load options from the decoding arguments of `convert`
pub fn get_load_options(options: &ArgMatches) -> LoadOptions {
    let mut load_options = LoadOptions::default()
        .set_flip_vertically(options.get_flag("flip"))
        .set_strict_mode(options.get_flag("strict"));

    if let Some(width) = options.get_one::<usize>("max-width") {
        load_options = load_options.set_max_width(*width);
    }
    if let Some(height) = options.get_one::<usize>("max-height") {
        load_options = load_options.set_max_height(*height);
    }
    info!("Flip vertically: {}", load_options.flip_vertically());

    load_options
}
