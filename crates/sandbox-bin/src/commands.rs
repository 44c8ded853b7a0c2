/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsString;
use std::path::Path;

use clap::ArgMatches;
use log::{debug, info};
use sandbox_media::codecs::probe;
use sandbox_media::options::SaveOptions;
use sandbox_media::{ConvertPixel, Gray, GrayAlpha, Image, ImageRgba, PixelFormat, Rgb, Rgba};

use crate::cmd_args::TargetFormat;
use crate::errors::CliErrors;
use crate::global_options::get_load_options;
use crate::serde::Metadata;

const GREEN: [u8; 4] = [55, 255, 55, 255];
const YELLOW: [u8; 4] = [255, 255, 0, 255];

fn required<'a>(args: &'a ArgMatches, name: &'static str) -> Result<&'a String, CliErrors> {
    args.get_one::<String>(name)
        .ok_or(CliErrors::MissingArgument(name))
}

pub fn run_command(options: &ArgMatches) -> Result<(), CliErrors> {
    match options.subcommand() {
        Some(("fill-test", args)) => fill_test(required(args, "out")?),
        Some(("convert", args)) => convert(args),
        Some(("probe", args)) => probe_file(required(args, "in")?),
        Some((name, _)) => Err(CliErrors::UnknownCommand(name.to_string())),
        None => Err(CliErrors::MissingArgument("command"))
    }
}

/// Green canvas with a yellow rectangle in the top half
pub fn draw_fill_test() -> Result<ImageRgba, CliErrors> {
    let mut image = ImageRgba::new(100, 100)?;

    image.fill_rect(0, 0, 100, 100, GREEN)?;
    image.fill_rect(25, 0, 50, 50, YELLOW)?;

    Ok(image)
}

fn fill_test(out: &str) -> Result<(), CliErrors> {
    let image = draw_fill_test()?;

    image.save(out)?;
    info!("Wrote {out}");

    Ok(())
}

fn write_as<F>(
    source: &ImageRgba, premultiply: bool, out: &Path, options: SaveOptions
) -> Result<(), CliErrors>
where
    F: PixelFormat + ConvertPixel<Rgba>
{
    let image = Image::<F>::converted_from(source, premultiply)?;

    debug!("Writing {:?} as {}", out, F::NAME);
    image.save_with_options(out, options)?;

    Ok(())
}

fn convert(args: &ArgMatches) -> Result<(), CliErrors> {
    let input = required(args, "in")?;
    let output = Path::new(required(args, "out")?);

    let target = args
        .get_one::<TargetFormat>("to")
        .copied()
        .unwrap_or(TargetFormat::Rgba);
    let premultiply = args.get_flag("premultiply");
    let quality = args.get_one::<u8>("quality").copied().unwrap_or(0);

    let save_options = SaveOptions::new_with_quality(quality);

    // rgba holds every layout a decoder produces
    let mut source = ImageRgba::default();
    source.load_with_options(input, get_load_options(args))?;

    info!(
        "Decoded {input}, dimensions {:?}, converting to {target:?}",
        source.dimensions()
    );

    match target {
        TargetFormat::Gray => write_as::<Gray>(&source, premultiply, output, save_options),
        TargetFormat::GrayAlpha => {
            write_as::<GrayAlpha>(&source, premultiply, output, save_options)
        }
        TargetFormat::Rgb => write_as::<Rgb>(&source, premultiply, output, save_options),
        TargetFormat::Rgba => write_as::<Rgba>(&source, premultiply, output, save_options)
    }
}

fn probe_file(input: &str) -> Result<(), CliErrors> {
    let bytes = std::fs::read(input)?;
    // only reading, lift the size restrictions
    let options = zune_core::options::DecoderOptions::default()
        .set_max_width(usize::MAX)
        .set_max_height(usize::MAX);

    let info = probe(&bytes, &options)?;
    let metadata = Metadata::new(OsString::from(input), bytes.len() as u64, &info);

    println!("{}", serde_json::to_string_pretty(&metadata)?);

    Ok(())
}
