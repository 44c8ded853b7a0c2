/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! PNG decoding and encoding via `zune-png`
use zune_core::bit_depth::BitDepth;
use zune_core::bytestream::ZCursor;
use zune_core::colorspace::ColorSpace;
use zune_core::log::trace;
use zune_core::options::{DecoderOptions, EncoderOptions};
use zune_core::result::DecodingResult;

use crate::codecs::{ImageFormat, NativeImage};
use crate::errors::{ImageErrors, ImgEncodeErrors};

pub(crate) fn decode(bytes: &[u8], options: DecoderOptions) -> Result<NativeImage, ImageErrors> {
    // 16 bit images are reduced, we only store 8 bit samples
    let options = options.png_set_strip_to_8bit(true);

    let mut decoder = zune_png::PngDecoder::new_with_options(ZCursor::new(bytes), options);

    let pixels = match decoder
        .decode()
        .map_err(|e| ImageErrors::ImageDecodeErrors(format!("png: {e:?}")))?
    {
        DecodingResult::U8(pixels) => pixels,
        DecodingResult::U16(pixels) => {
            trace!("Reducing 16 bit PNG samples to 8 bits");
            pixels.iter().map(|x| (x >> 8) as u8).collect()
        }
        _ => {
            return Err(ImageErrors::ImageDecodeErrors(
                "png: unsupported sample type".to_string()
            ))
        }
    };
    let (width, height) = decoder
        .dimensions()
        .ok_or_else(|| ImageErrors::ImageDecodeErrors("png: missing dimensions".to_string()))?;

    NativeImage::new(ImageFormat::PNG, width, height, pixels)
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

    let mut encoder = zune_png::PngEncoder::new(pixels, options);

    encoder.encode(&mut out).map_err(|e| {
        ImageErrors::EncodeErrors(ImgEncodeErrors::ImageEncodeErrors(format!("png: {e:?}")))
    })?;

    Ok(out)
}
