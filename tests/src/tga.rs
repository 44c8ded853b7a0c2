/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use sandbox_media::codecs::{guess_format, ImageFormat};
use sandbox_media::options::SaveOptions;
use sandbox_media::{ConvertAny, Gray, GrayAlpha, Image, ImageRgba, PixelFormat, Rgb, Rgba};
use sandbox_tga::TgaEncoder;
use zune_core::bit_depth::BitDepth;
use zune_core::colorspace::ColorSpace;
use zune_core::options::EncoderOptions;

use crate::{random_image, temp_path};

fn file_round_trip<F: PixelFormat + ConvertAny>() {
    let image = random_image::<F>(40, 9);
    let path = temp_path("TGA");

    // upper case extensions are accepted
    image.save(&path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(guess_format(&bytes), Some(ImageFormat::TGA));

    let mut decoded = Image::<F>::default();
    decoded.load_from_memory(&bytes, false).unwrap();

    assert!(decoded == image, "{} did not round trip", F::NAME);
}

#[test]
fn tga_round_trip_every_format() {
    file_round_trip::<Gray>();
    file_round_trip::<GrayAlpha>();
    file_round_trip::<Rgb>();
    file_round_trip::<Rgba>();
}

#[test]
fn tga_flip_on_load() {
    let image = Image::<Rgb>::from_fn(3, 4, |x, y| [x as u8, y as u8, 0]).unwrap();
    let bytes = image.encode(ImageFormat::TGA, &SaveOptions::default()).unwrap();

    let mut flipped = Image::<Rgb>::default();
    flipped.load_from_memory(&bytes, true).unwrap();

    assert_eq!(flipped.pixel_at(2, 0).unwrap(), [2, 3, 0]);
    assert_eq!(flipped.pixel_at(0, 3).unwrap(), [0, 0, 0]);
}

#[test]
fn tga_uncompressed_file_loads() {
    let image = random_image::<Rgb>(11, 7);
    let options = EncoderOptions::default()
        .set_width(11)
        .set_height(7)
        .set_depth(BitDepth::Eight)
        .set_colorspace(ColorSpace::RGB);

    let mut bytes = vec![];
    TgaEncoder::new(image.as_bytes(), options)
        .set_rle(false)
        .encode(&mut bytes)
        .unwrap();

    assert_eq!(guess_format(&bytes), Some(ImageFormat::TGA));

    let rgb = Image::<Rgb>::read(&bytes, Default::default()).unwrap();
    assert!(rgb == image);

    let rgba = ImageRgba::read(&bytes, Default::default()).unwrap();
    for (a, b) in image.pixels().iter().zip(rgba.pixels()) {
        assert_eq!([a[0], a[1], a[2], 255], *b);
    }
}
