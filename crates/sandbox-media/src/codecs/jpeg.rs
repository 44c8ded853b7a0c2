/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! JPEG decoding via `zune-jpeg`, encoding via `jpeg-encoder`
//!
//! JPEG has no alpha channel, alpha is dropped on encode and
//! reads back as fully opaque.
use jpeg_encoder::{ColorType, Encoder};
use zune_core::bytestream::ZCursor;
use zune_core::colorspace::ColorSpace;
use zune_core::log::trace;
use zune_core::options::DecoderOptions;

use crate::codecs::{ImageFormat, NativeImage};
use crate::errors::{ImageErrors, ImgEncodeErrors};

pub(crate) fn decode(
    bytes: &[u8], preferred: ColorSpace, options: DecoderOptions
) -> Result<NativeImage, ImageErrors> {
    // let the decoder do colour conversion when it saves us a pass
    let out_colorspace = match preferred {
        ColorSpace::Luma | ColorSpace::LumaA => ColorSpace::Luma,
        ColorSpace::RGBA => ColorSpace::RGBA,
        _ => ColorSpace::RGB
    };
    let options = options.jpeg_set_out_colorspace(out_colorspace);

    let mut decoder = zune_jpeg::JpegDecoder::new_with_options(ZCursor::new(bytes), options);

    let pixels = decoder
        .decode()
        .map_err(|e| ImageErrors::ImageDecodeErrors(format!("jpeg: {e:?}")))?;

    let (width, height) = decoder
        .dimensions()
        .ok_or_else(|| ImageErrors::ImageDecodeErrors("jpeg: missing dimensions".to_string()))?;

    NativeImage::new(ImageFormat::JPEG, width, height, pixels)
}

pub(crate) fn encode(
    pixels: &[u8], width: usize, height: usize, colorspace: ColorSpace, quality: u8
) -> Result<Vec<u8>, ImageErrors> {
    let too_large = || {
        ImageErrors::EncodeErrors(ImgEncodeErrors::Generic(format!(
            "jpeg: dimensions {width}x{height} exceed 65535"
        )))
    };
    let w = u16::try_from(width).map_err(|_| too_large())?;
    let h = u16::try_from(height).map_err(|_| too_large())?;

    let stripped;

    let (data, color_type) = match colorspace {
        ColorSpace::Luma => (pixels, ColorType::Luma),
        ColorSpace::LumaA => {
            trace!("Dropping alpha channel for JPEG");
            stripped = pixels.chunks_exact(2).map(|x| x[0]).collect::<Vec<u8>>();
            (stripped.as_slice(), ColorType::Luma)
        }
        ColorSpace::RGB => (pixels, ColorType::Rgb),
        // the encoder skips the fourth channel
        ColorSpace::RGBA => (pixels, ColorType::Rgba),
        colorspace => return Err(ImageErrors::UnsupportedColorspace(colorspace))
    };

    let mut out = Vec::with_capacity(pixels.len() / 4);

    Encoder::new(&mut out, quality).encode(data, w, h, color_type)?;

    Ok(out)
}
