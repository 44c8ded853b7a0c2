/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! TGA decoding and encoding via `sandbox-tga`
use sandbox_tga::{TgaDecoder, TgaEncoder};
use zune_core::bit_depth::BitDepth;
use zune_core::bytestream::ZCursor;
use zune_core::colorspace::ColorSpace;
use zune_core::options::{DecoderOptions, EncoderOptions};

use crate::codecs::{ImageFormat, NativeImage};
use crate::errors::ImageErrors;

pub(crate) fn decode(bytes: &[u8], options: DecoderOptions) -> Result<NativeImage, ImageErrors> {
    let mut decoder = TgaDecoder::new_with_options(ZCursor::new(bytes), options);

    let pixels = decoder.decode()?;

    let (width, height) = decoder
        .dimensions()
        .ok_or_else(|| ImageErrors::ImageDecodeErrors("tga: missing dimensions".to_string()))?;

    NativeImage::new(ImageFormat::TGA, width, height, pixels)
}

pub(crate) fn encode(
    pixels: &[u8], width: usize, height: usize, colorspace: ColorSpace
) -> Result<Vec<u8>, ImageErrors> {
    let options = EncoderOptions::default()
        .set_width(width)
        .set_height(height)
        .set_depth(BitDepth::Eight)
        .set_colorspace(colorspace);

    let mut out = Vec::with_capacity(pixels.len() / 2);

    TgaEncoder::new(pixels, options).encode(&mut out)?;

    Ok(out)
}
