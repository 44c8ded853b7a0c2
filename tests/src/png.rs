/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use sandbox_media::codecs::ImageFormat;
use sandbox_media::options::SaveOptions;
use sandbox_media::{
    ConvertAny, Gray, GrayAlpha, Image, ImageGrayAlpha, ImageRgb, ImageRgba, PixelFormat, Rgb,
    Rgba
};

use crate::{random_image, temp_path};

fn file_round_trip<F: PixelFormat + ConvertAny>() {
    let image = random_image::<F>(31, 17);
    let path = temp_path("png");

    image.save(&path).unwrap();

    let mut decoded = Image::<F>::default();
    decoded.load(&path, false).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(decoded.dimensions(), (31, 17));
    assert!(decoded == image, "{} did not round trip", F::NAME);
}

#[test]
fn png_round_trip_gray() {
    file_round_trip::<Gray>();
}

#[test]
fn png_round_trip_gray_alpha() {
    file_round_trip::<GrayAlpha>();
}

#[test]
fn png_round_trip_rgb() {
    file_round_trip::<Rgb>();
}

#[test]
fn png_round_trip_rgba() {
    file_round_trip::<Rgba>();
}

#[test]
fn png_gray_loads_as_color() {
    let gray = random_image::<Gray>(8, 8);
    let bytes = gray.encode(ImageFormat::PNG, &SaveOptions::default()).unwrap();

    let mut rgb = ImageRgb::default();
    rgb.load_from_memory(&bytes, false).unwrap();

    for (g, c) in gray.pixels().iter().zip(rgb.pixels()) {
        assert_eq!([g[0]; 3], *c);
    }
}

#[test]
fn png_alpha_is_dropped_without_premultiply() {
    let rgba = ImageRgba::filled(4, 4, [200, 100, 50, 0]).unwrap();
    let bytes = rgba.encode(ImageFormat::PNG, &SaveOptions::default()).unwrap();

    let rgb = ImageRgb::read(&bytes, Default::default()).unwrap();
    assert_eq!(rgb.pixel_at(3, 3).unwrap(), [200, 100, 50]);

    let gray_alpha = ImageGrayAlpha::read(&bytes, Default::default()).unwrap();
    assert_eq!(gray_alpha.pixel_at(0, 0).unwrap()[1], 0);
}
