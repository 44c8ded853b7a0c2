/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use sandbox_media::codecs::ImageFormat;
use sandbox_media::errors::{ImageErrors, ImgEncodeErrors};
use sandbox_media::options::SaveOptions;
use sandbox_media::{ImageGray, ImageRgb, ImageRgba, Rgba};

use crate::{random_image, temp_path};

const GREEN: [u8; 4] = [55, 255, 55, 255];
const YELLOW: [u8; 4] = [255, 255, 0, 255];

#[test]
fn fill_save_reload() {
    let mut image = ImageRgba::new(100, 100).unwrap();
    image.fill_rect(0, 0, 100, 100, GREEN).unwrap();
    image.fill_rect(25, 0, 50, 50, YELLOW).unwrap();

    let path = temp_path("png");
    image.save(&path).unwrap();

    let mut reloaded = ImageRgba::default();
    reloaded.load(&path, false).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(reloaded.dimensions(), (100, 100));
    assert_eq!(reloaded.pixel_at(30, 10).unwrap(), YELLOW);
    assert_eq!(reloaded.pixel_at(10, 10).unwrap(), GREEN);
}

#[test]
fn every_extension_dispatches() {
    let image = random_image::<Rgba>(6, 6);

    for (extension, format) in [
        ("png", ImageFormat::PNG),
        ("jpg", ImageFormat::JPEG),
        ("JPEG", ImageFormat::JPEG),
        ("bmp", ImageFormat::BMP),
        ("tga", ImageFormat::TGA)
    ] {
        let path = temp_path(extension);
        image.save(&path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(ImageFormat::guess_format(&bytes), Some(format), "{extension}");
    }
}

#[test]
fn unsupported_extension_writes_nothing() {
    let image = random_image::<Rgba>(4, 4);

    for extension in ["gif", "webp", "ppm"] {
        let path = temp_path(extension);

        let result = image.save(&path);

        assert!(matches!(
            result,
            Err(ImageErrors::EncodeErrors(ImgEncodeErrors::NoEncoderForExtension(_)))
        ));
        assert!(!path.exists());
    }
}

#[test]
fn saving_empty_image_fails() {
    let path = temp_path("png");

    assert!(matches!(
        ImageRgb::default().save(&path),
        Err(ImageErrors::EmptyImage)
    ));
    assert!(!path.exists());
}

#[test]
fn garbage_leaves_image_empty() {
    let mut image = random_image::<Rgba>(4, 4);

    for bytes in [&b""[..], &b"not an image"[..], &[0x89, b'P', b'N', b'G'][..]] {
        assert!(image.load_from_memory(bytes, false).is_err());
        assert!(image.is_empty());
        assert_eq!(image.data_size(), 0);
    }
}

#[test]
fn truncated_file_leaves_image_empty() {
    let image = random_image::<Rgba>(16, 16);
    let bytes = image
        .encode(ImageFormat::PNG, &SaveOptions::default())
        .unwrap();

    let mut reloaded = ImageRgba::default();
    assert!(reloaded.load_from_memory(&bytes[..30], false).is_err());
    assert!(reloaded.is_empty());
}

#[test]
fn take_moves_contents() {
    let mut image = random_image::<Rgba>(3, 3);
    let copy = image.clone();

    let moved = image.take();

    assert!(image.is_empty());
    assert_eq!(image.dimensions(), (0, 0));
    assert!(moved == copy);
}

#[test]
fn premultiplied_conversion_on_load() {
    let rgba = ImageRgba::filled(2, 2, [200, 100, 50, 128]).unwrap();
    let bytes = rgba
        .encode(ImageFormat::TGA, &SaveOptions::default())
        .unwrap();

    let mut loaded = ImageRgba::default();
    loaded.load_from_memory(&bytes, false).unwrap();

    let rgb = ImageRgb::converted_from(&loaded, true).unwrap();
    assert_eq!(rgb.pixel_at(1, 1).unwrap(), [100, 50, 25]);

    let gray = ImageGray::converted_from(&loaded, false).unwrap();
    // 0.299*200 + 0.587*100 + 0.114*50
    assert_eq!(gray.pixel_at(0, 0).unwrap(), [124]);
}
