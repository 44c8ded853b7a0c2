/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use sandbox_media::codecs::ImageFormat;
use sandbox_media::options::SaveOptions;
use sandbox_media::{ConvertAny, Gray, GrayAlpha, Image, ImageRgba, PixelFormat, Rgb, Rgba};

use crate::{random_image, temp_path};

fn file_round_trip<F: PixelFormat + ConvertAny>() {
    // odd width, rows are not a multiple of four bytes for the smaller formats
    let image = random_image::<F>(13, 6);
    let path = temp_path("bmp");

    image.save_as_bmp(&path).unwrap();

    let decoded = Image::<F>::open(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert!(decoded == image, "{} did not round trip", F::NAME);
}

#[test]
fn bmp_round_trip_every_format() {
    file_round_trip::<Gray>();
    file_round_trip::<GrayAlpha>();
    file_round_trip::<Rgb>();
    file_round_trip::<Rgba>();
}

#[test]
fn bmp_opaque_formats_read_back_opaque() {
    let rgb = random_image::<Rgb>(5, 5);
    let bytes = rgb.encode(ImageFormat::BMP, &SaveOptions::default()).unwrap();

    let rgba = ImageRgba::read(&bytes, Default::default()).unwrap();

    for (a, b) in rgb.pixels().iter().zip(rgba.pixels()) {
        assert_eq!([a[0], a[1], a[2], 255], *b);
    }
}
