/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! BMP decoding via `zune-bmp` and a small BMP writer
//!
//! The writer always emits 32 bit `BI_BITFIELDS` images with a
//! `BITMAPV4HEADER`, rows stored bottom to top.
//! Formats with alpha carry an alpha mask, opaque formats leave it zero
//! so readers treat every pixel as opaque.
//! Gray values are replicated to the three colour channels.
use zune_core::bytestream::ZCursor;
use zune_core::colorspace::ColorSpace;
use zune_core::log::trace;
use zune_core::options::DecoderOptions;

use crate::codecs::{ImageFormat, NativeImage};
use crate::errors::{ImageErrors, ImgEncodeErrors};

const FILE_HEADER_SIZE: usize = 14;
const V4_HEADER_SIZE: usize = 108;
const DATA_OFFSET: usize = FILE_HEADER_SIZE + V4_HEADER_SIZE;
const BI_BITFIELDS: u32 = 3;
/// 72 DPI
const PIXELS_PER_METER: u32 = 2835;
/// `sRGB` as stored in the colour space type field
const LCS_SRGB: u32 = 0x7352_4742;

const RED_MASK: u32 = 0x00FF_0000;
const GREEN_MASK: u32 = 0x0000_FF00;
const BLUE_MASK: u32 = 0x0000_00FF;
const ALPHA_MASK: u32 = 0xFF00_0000;

pub(crate) fn decode(bytes: &[u8], options: DecoderOptions) -> Result<NativeImage, ImageErrors> {
    let mut decoder = zune_bmp::BmpDecoder::new_with_options(ZCursor::new(bytes), options);

    let pixels = decoder
        .decode()
        .map_err(|e| ImageErrors::ImageDecodeErrors(format!("bmp: {e:?}")))?;

    let (width, height) = decoder
        .dimensions()
        .ok_or_else(|| ImageErrors::ImageDecodeErrors("bmp: missing dimensions".to_string()))?;

    NativeImage::new(ImageFormat::BMP, width, height, pixels)
}

/// Expand one pixel of any supported layout to `[r, g, b, a]`
#[inline]
fn to_rgba(pixel: &[u8]) -> [u8; 4] {
    match *pixel {
        [l] => [l, l, l, 255],
        [l, a] => [l, l, l, a],
        [r, g, b] => [r, g, b, 255],
        [r, g, b, a] => [r, g, b, a],
        _ => [0, 0, 0, 255]
    }
}

fn write_headers(out: &mut Vec<u8>, width: u32, height: u32, file_size: u32, alpha: bool) {
    let image_size = file_size - DATA_OFFSET as u32;
    let alpha_mask = if alpha { ALPHA_MASK } else { 0 };

    // file header
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&file_size.to_le_bytes());
    out.extend_from_slice(&[0; 4]);
    out.extend_from_slice(&(DATA_OFFSET as u32).to_le_bytes());

    // info header
    out.extend_from_slice(&(V4_HEADER_SIZE as u32).to_le_bytes());
    out.extend_from_slice(&width.to_le_bytes());
    // positive height, bottom-up rows
    out.extend_from_slice(&height.to_le_bytes());
    out.extend_from_slice(&1_u16.to_le_bytes());
    out.extend_from_slice(&32_u16.to_le_bytes());
    out.extend_from_slice(&BI_BITFIELDS.to_le_bytes());
    out.extend_from_slice(&image_size.to_le_bytes());
    out.extend_from_slice(&PIXELS_PER_METER.to_le_bytes());
    out.extend_from_slice(&PIXELS_PER_METER.to_le_bytes());
    // colours used, important colours
    out.extend_from_slice(&[0; 8]);

    for mask in [RED_MASK, GREEN_MASK, BLUE_MASK, alpha_mask] {
        out.extend_from_slice(&mask.to_le_bytes());
    }
    out.extend_from_slice(&LCS_SRGB.to_le_bytes());
    // endpoints and gamma, unused for sRGB
    out.extend_from_slice(&[0; 48]);
}

pub(crate) fn encode(
    pixels: &[u8], width: usize, height: usize, colorspace: ColorSpace
) -> Result<Vec<u8>, ImageErrors> {
    let components = colorspace.num_components();

    if !(1..=4).contains(&components) {
        return Err(ImageErrors::UnsupportedColorspace(colorspace));
    }
    let too_large = || {
        ImageErrors::EncodeErrors(ImgEncodeErrors::Generic(format!(
            "bmp: dimensions {width}x{height} are too large"
        )))
    };
    // stored as signed 32 bit integers
    let w = i32::try_from(width).map_err(|_| too_large())? as u32;
    let h = i32::try_from(height).map_err(|_| too_large())? as u32;

    let file_size = width
        .checked_mul(height)
        .and_then(|x| x.checked_mul(4))
        .and_then(|x| x.checked_add(DATA_OFFSET))
        .and_then(|x| u32::try_from(x).ok())
        .ok_or_else(too_large)?;

    trace!("Writing {width}x{height} BMP, {file_size} bytes");

    let mut out = Vec::with_capacity(file_size as usize);

    write_headers(&mut out, w, h, file_size, colorspace.has_alpha());

    for row in pixels.rchunks_exact(width * components) {
        for pixel in row.chunks_exact(components) {
            let [r, g, b, a] = to_rgba(pixel);
            // little endian of a<<24 | r<<16 | g<<8 | b
            out.extend_from_slice(&[b, g, r, a]);
        }
    }

    Ok(out)
}
