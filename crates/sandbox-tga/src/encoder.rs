/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Encoding support for the TGA image format
use zune_core::bit_depth::BitDepth;
use zune_core::bytestream::{ZByteWriterTrait, ZWriter};
use zune_core::colorspace::ColorSpace;
use zune_core::log::trace;
use zune_core::options::EncoderOptions;

use crate::common::{
    TgaImageType, DESCRIPTOR_TOP_TO_BOTTOM, MAX_PACKET_LENGTH, TGA_HEADER_SIZE
};
use crate::errors::TgaEncodeErrors;

/// A TGA encoder
///
/// Data is expected to be 8 bit, interleaved, in one of
/// `Luma`, `LumaA`, `RGB` or `RGBA`, rows stored top to bottom.
///
/// Colour images are written in TGA's native BGR(A) order,
/// grayscale images as grayscale TGA.
pub struct TgaEncoder<'a> {
    data:    &'a [u8],
    options: EncoderOptions,
    rle:     bool
}

impl<'a> TgaEncoder<'a> {
    /// Create a new encoder which will encode the specified data
    /// whose format is contained in options
    ///
    /// Run-length encoding is on by default
    pub fn new(data: &'a [u8], options: EncoderOptions) -> TgaEncoder<'a> {
        TgaEncoder {
            data,
            options,
            rle: true
        }
    }
    /// Choose between run-length encoded and raw output
    pub fn set_rle(mut self, yes: bool) -> Self {
        self.rle = yes;
        self
    }

    fn image_type(&self) -> TgaImageType {
        let gray = self.options.colorspace().is_grayscale();

        match (gray, self.rle) {
            (true, true) => TgaImageType::RleGrayscale,
            (true, false) => TgaImageType::Grayscale,
            (false, true) => TgaImageType::RleTrueColor,
            (false, false) => TgaImageType::TrueColor
        }
    }

    fn encode_headers<T: ZByteWriterTrait>(
        &self, stream: &mut ZWriter<T>
    ) -> Result<(), TgaEncodeErrors> {
        let colorspace = self.options.colorspace();
        let components = colorspace.num_components();
        let alpha_bits = if colorspace.has_alpha() { 8 } else { 0 };

        let width = u16::try_from(self.options.width())
            .map_err(|_| TgaEncodeErrors::TooLargeDimensions(self.options.width()))?;
        let height = u16::try_from(self.options.height())
            .map_err(|_| TgaEncodeErrors::TooLargeDimensions(self.options.height()))?;

        let mut header = [0_u8; TGA_HEADER_SIZE];
        // no image id, no colour map
        header[2] = self.image_type().to_u8();
        // x and y origin stay zero
        header[12..14].copy_from_slice(&width.to_le_bytes());
        header[14..16].copy_from_slice(&height.to_le_bytes());
        header[16] = (components * 8) as u8;
        header[17] = DESCRIPTOR_TOP_TO_BOTTOM | alpha_bits;

        stream.write_all(&header)?;

        Ok(())
    }

    /// Encode the contents to `sink` returning the number of bytes
    /// written or an error if anything occurs
    pub fn encode<T: ZByteWriterTrait>(&self, sink: T) -> Result<usize, TgaEncodeErrors> {
        if self.options.depth() != BitDepth::Eight {
            return Err(TgaEncodeErrors::UnsupportedBitDepth(self.options.depth()));
        }
        let colorspace = self.options.colorspace();

        if !matches!(
            colorspace,
            ColorSpace::Luma | ColorSpace::LumaA | ColorSpace::RGB | ColorSpace::RGBA
        ) {
            return Err(TgaEncodeErrors::UnsupportedColorSpace(colorspace));
        }
        let (width, height) = (self.options.width(), self.options.height());

        if width == 0 || height == 0 {
            return Err(TgaEncodeErrors::ZeroDimensions);
        }
        let components = colorspace.num_components();

        let expected = width
            .checked_mul(height)
            .and_then(|x| x.checked_mul(components))
            .ok_or(TgaEncodeErrors::TooLargeDimensions(width.max(height)))?;
        let found = self.data.len();

        if expected != found {
            return Err(TgaEncodeErrors::TooShortInput(expected, found));
        }
        trace!(
            "Encoding {width}x{height} {colorspace:?} TGA, rle: {}",
            self.rle
        );

        let mut stream = ZWriter::new(sink);

        stream.reserve(TGA_HEADER_SIZE + expected)?;

        self.encode_headers(&mut stream)?;

        let stride = width * components;
        // pixels converted to TGA order, one row at a time
        let mut row_out = vec![0_u8; stride];
        let mut packets = Vec::with_capacity(stride + stride / MAX_PACKET_LENGTH + 1);

        for row in self.data.chunks_exact(stride) {
            row_out.copy_from_slice(row);

            if components >= 3 {
                // RGB(A) to BGR(A)
                for pixel in row_out.chunks_exact_mut(components) {
                    pixel.swap(0, 2);
                }
            }
            if self.rle {
                packets.clear();
                encode_rle_row(&row_out, components, &mut packets);
                stream.write_all(&packets)?;
            } else {
                stream.write_all(&row_out)?;
            }
        }

        Ok(stream.bytes_written())
    }
}

/// Run-length encode a single row of pixels into `out`
///
/// Packets never cross row boundaries.
fn encode_rle_row(row: &[u8], components: usize, out: &mut Vec<u8>) {
    let pixels: Vec<&[u8]> = row.chunks_exact(components).collect();
    let width = pixels.len();
    let mut start = 0;

    while start < width {
        let mut run = 1;

        while start + run < width
            && run < MAX_PACKET_LENGTH
            && pixels[start + run] == pixels[start]
        {
            run += 1;
        }
        if run > 1 {
            out.push(0x80 | (run - 1) as u8);
            out.extend_from_slice(pixels[start]);
            start += run;
            continue;
        }
        // raw packet, stops before the next run of two or more
        let mut end = start + 1;

        while end < width
            && end - start < MAX_PACKET_LENGTH
            && !(end + 1 < width && pixels[end] == pixels[end + 1])
        {
            end += 1;
        }
        out.push((end - start - 1) as u8);

        for pixel in &pixels[start..end] {
            out.extend_from_slice(pixel);
        }
        start = end;
    }
}
