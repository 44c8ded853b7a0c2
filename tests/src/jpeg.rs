/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use sandbox_media::codecs::{guess_format, ImageFormat};
use sandbox_media::{ImageGray, ImageGrayAlpha, ImageRgb, ImageRgba};

use crate::temp_path;

#[test]
fn jpeg_flat_image_survives() {
    let image = ImageRgb::filled(24, 24, [30, 160, 220]).unwrap();
    let path = temp_path("jpeg");

    image.save(&path).unwrap();
    let bytes = std::fs::read(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(guess_format(&bytes), Some(ImageFormat::JPEG));

    let decoded = ImageRgb::read(&bytes, Default::default()).unwrap();

    assert_eq!(decoded.dimensions(), (24, 24));
    for (a, b) in decoded.as_bytes().iter().zip(image.as_bytes()) {
        assert!(a.abs_diff(*b) <= 8, "{a} vs {b}");
    }
}

#[test]
fn jpeg_alpha_reads_back_opaque() {
    let image = ImageGrayAlpha::filled(16, 16, [120, 3]).unwrap();
    let path = temp_path("jpg");

    image.save_as_jpeg(&path, 95).unwrap();

    let decoded = ImageRgba::open(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    for pixel in decoded.pixels() {
        assert_eq!(pixel[3], 255);
        assert!(pixel[0].abs_diff(120) <= 4);
    }
}

#[test]
fn jpeg_gray_loads_as_gray() {
    let image = ImageGray::filled(8, 8, [77]).unwrap();
    let path = temp_path("jpg");

    image.save(&path).unwrap();

    let mut decoded = ImageGray::default();
    decoded.load(&path, false).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(decoded.channels(), 1);
    assert!(decoded.pixels().iter().all(|x| x[0].abs_diff(77) <= 4));
}
