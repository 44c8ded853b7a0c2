/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use nanorand::Rng;
use sandbox_tga::{probe_tga, TgaDecoder, TgaEncoder};
use zune_core::bit_depth::BitDepth;
use zune_core::bytestream::ZCursor;
use zune_core::colorspace::ColorSpace;
use zune_core::options::EncoderOptions;

fn encode(pixels: &[u8], width: usize, height: usize, colorspace: ColorSpace, rle: bool) -> Vec<u8> {
    let options = EncoderOptions::default()
        .set_width(width)
        .set_height(height)
        .set_depth(BitDepth::Eight)
        .set_colorspace(colorspace);

    let mut out = vec![];
    TgaEncoder::new(pixels, options)
        .set_rle(rle)
        .encode(&mut out)
        .unwrap();
    out
}

#[test]
fn round_trip_every_colorspace() {
    let mut rand = nanorand::WyRand::new();
    let (width, height) = (37, 11);

    for colorspace in [
        ColorSpace::Luma,
        ColorSpace::LumaA,
        ColorSpace::RGB,
        ColorSpace::RGBA
    ] {
        // few distinct values so that runs occur
        let pixels: Vec<u8> = (0..width * height * colorspace.num_components())
            .map(|_| rand.generate_range(0_u8..3) * 100)
            .collect();

        for rle in [true, false] {
            let encoded = encode(&pixels, width, height, colorspace, rle);
            assert!(probe_tga(&encoded));

            let mut decoder = TgaDecoder::new(ZCursor::new(&encoded));
            let decoded = decoder.decode().unwrap();

            assert_eq!(decoder.dimensions(), Some((width, height)));
            assert_eq!(decoder.colorspace(), Some(colorspace));
            assert_eq!(decoded, pixels, "{colorspace:?} rle: {rle}");
        }
    }
}

#[test]
fn rle_compresses_flat_images() {
    let pixels = vec![128_u8; 64 * 64 * 3];

    let rle = encode(&pixels, 64, 64, ColorSpace::RGB, true);
    let raw = encode(&pixels, 64, 64, ColorSpace::RGB, false);

    assert!(rle.len() < raw.len() / 10);
    assert_eq!(raw.len(), 18 + pixels.len());
}
