/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::builder::PossibleValue;
use clap::{value_parser, Arg, ArgAction, Command, ValueEnum};

/// Pixel layout `convert` writes
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum TargetFormat {
    Gray,
    GrayAlpha,
    Rgb,
    Rgba
}

impl ValueEnum for TargetFormat {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Gray, Self::GrayAlpha, Self::Rgb, Self::Rgba]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(match self {
            Self::Gray => PossibleValue::new("gray"),
            Self::GrayAlpha => PossibleValue::new("gray-alpha"),
            Self::Rgb => PossibleValue::new("rgb"),
            Self::Rgba => PossibleValue::new("rgba")
        })
    }
}

fn input_arg() -> Arg {
    Arg::new("in")
        .short('i')
        .long("input")
        .help("Input file to read data from")
        .required(true)
}

#[rustfmt::skip]
fn fill_test() -> Command {
    Command::new("fill-test")
        .about("Draw a yellow rectangle on a green canvas and save it")
        .arg(Arg::new("out")
            .short('o')
            .long("output")
            .help("File to write, the extension picks the format")
            .default_value("fill_test.png"))
}

#[rustfmt::skip]
fn convert() -> Command {
    Command::new("convert")
        .about("Decode an image and write it in another format or pixel layout")
        .arg(input_arg())
        .arg(Arg::new("out")
            .short('o')
            .long("output")
            .help("Output to write the data to, the extension picks the format")
            .required(true))
        .arg(Arg::new("to")
            .long("to")
            .help_heading("OPERATIONS")
            .help("Pixel layout of the written image")
            .value_parser(value_parser!(TargetFormat))
            .default_value("rgba"))
        .arg(Arg::new("premultiply")
            .long("premultiply")
            .help_heading("OPERATIONS")
            .action(ArgAction::SetTrue)
            .help("Scale colour values by alpha when alpha is dropped"))
        .arg(Arg::new("flip")
            .long("flip")
            .help_heading("OPERATIONS")
            .action(ArgAction::SetTrue)
            .help("Flip the image vertically after decoding"))
        .arg(Arg::new("quality")
            .long("quality")
            .help_heading("ENCODING")
            .help("JPEG quality, 1 to 100")
            .value_parser(value_parser!(u8).range(0..=100))
            .default_value("90"))
        .arg(Arg::new("max-width")
            .long("max-width")
            .help_heading("ADVANCED")
            .help("Maximum width of images allowed")
            .value_parser(value_parser!(usize))
            .default_value("16384"))
        .arg(Arg::new("max-height")
            .long("max-height")
            .help_heading("ADVANCED")
            .help("Maximum height of images allowed")
            .value_parser(value_parser!(usize))
            .default_value("16384"))
        .arg(Arg::new("strict")
            .long("strict")
            .help_heading("ADVANCED")
            .action(ArgAction::SetTrue)
            .help("Treat most warnings as errors"))
}

#[rustfmt::skip]
fn probe() -> Command {
    Command::new("probe")
        .about("Print the format, dimensions and channels of an image as JSON")
        .arg(input_arg())
}

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("sandbox")
        .about("Load, convert and save 8-bit PNG, JPEG, BMP and TGA images")
        .subcommand(fill_test())
        .subcommand(convert())
        .subcommand(probe())
        .subcommand_required(true)
        .arg_required_else_help(true)
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
            .help("Display information about the operations"))
}
