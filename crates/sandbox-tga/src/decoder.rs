/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A TGA decoder
//!
//! The image header is laid out as
//!
//! | Offset | Size | Field             |
//! |--------|------|-------------------|
//! | 0      | 1    | id length         |
//! | 1      | 1    | colour map type   |
//! | 2      | 1    | image type        |
//! | 3      | 2    | first map entry   |
//! | 5      | 2    | colour map length |
//! | 7      | 1    | map entry size    |
//! | 8      | 4    | x and y origin    |
//! | 12     | 2    | width             |
//! | 14     | 2    | height            |
//! | 16     | 1    | pixel depth       |
//! | 17     | 1    | image descriptor  |
//!
//! followed by the image id, the colour map and the pixels.
use zune_core::bytestream::{ZByteReaderTrait, ZReader};
use zune_core::colorspace::ColorSpace;
use zune_core::log::{trace, warn};
use zune_core::options::DecoderOptions;

use crate::common::{
    expand_rgb555, TgaImageType, DESCRIPTOR_RIGHT_TO_LEFT, DESCRIPTOR_TOP_TO_BOTTOM,
    TGA_HEADER_SIZE
};
use crate::errors::TgaDecodeErrors;

/// Probe some bytes to see if they start with a plausible TGA header
///
/// TGA has no magic bytes, so this checks that every header field holds
/// a value the decoder would accept. Call it after probing formats
/// that do carry a signature.
pub fn probe_tga(bytes: &[u8]) -> bool {
    let Some(header) = bytes.get(..TGA_HEADER_SIZE) else {
        return false;
    };
    let color_map_type = header[1];
    let Some(kind) = TgaImageType::from_u8(header[2]) else {
        return false;
    };
    let width = u16::from_le_bytes([header[12], header[13]]);
    let height = u16::from_le_bytes([header[14], header[15]]);
    let depth = header[16];
    let descriptor = header[17];

    if width == 0 || height == 0 || !kind.supports_depth(depth) {
        return false;
    }
    // interleaving bits are unused
    if descriptor & 0xC0 != 0 {
        return false;
    }
    if kind.is_color_mapped() {
        color_map_type == 1 && matches!(header[7], 15 | 16 | 24 | 32)
    } else {
        color_map_type == 0
    }
}

/// A TGA decoder
///
/// # Example
/// ```no_run
/// use zune_core::bytestream::ZCursor;
/// use sandbox_tga::TgaDecoder;
///
/// let data = std::fs::read("image.tga").unwrap();
/// let mut decoder = TgaDecoder::new(ZCursor::new(&data));
/// decoder.decode_headers().unwrap();
/// let (w, h) = decoder.dimensions().unwrap();
/// println!("{w}x{h} {:?}", decoder.colorspace().unwrap());
/// let pixels = decoder.decode().unwrap();
/// ```
pub struct TgaDecoder<T>
where
    T: ZByteReaderTrait
{
    bytes:           ZReader<T>,
    options:         DecoderOptions,
    width:           usize,
    height:          usize,
    kind:            TgaImageType,
    depth:           u8,
    descriptor:      u8,
    /// colour map expanded to output pixels
    palette:         Vec<[u8; 4]>,
    palette_alpha:   bool,
    decoded_headers: bool
}

impl<T> TgaDecoder<T>
where
    T: ZByteReaderTrait
{
    /// Create a new decoder that reads data from `data`
    pub fn new(data: T) -> TgaDecoder<T> {
        TgaDecoder::new_with_options(data, DecoderOptions::default())
    }
    /// Create a new decoder instance with specified options
    pub fn new_with_options(data: T, options: DecoderOptions) -> TgaDecoder<T> {
        TgaDecoder {
            bytes: ZReader::new(data),
            options,
            width: 0,
            height: 0,
            kind: TgaImageType::TrueColor,
            depth: 0,
            descriptor: 0,
            palette: vec![],
            palette_alpha: false,
            decoded_headers: false
        }
    }

    /// Decode the header, image id and colour map
    ///
    /// After this returns `Ok`, [`dimensions`](Self::dimensions) and
    /// [`colorspace`](Self::colorspace) return `Some`
    pub fn decode_headers(&mut self) -> Result<(), TgaDecodeErrors> {
        if self.decoded_headers {
            return Ok(());
        }
        let mut header = [0_u8; TGA_HEADER_SIZE];
        self.bytes.read_exact_bytes(&mut header)?;

        let id_length = usize::from(header[0]);
        let color_map_type = header[1];
        let kind = TgaImageType::from_u8(header[2])
            .ok_or(TgaDecodeErrors::UnsupportedImageType(header[2]))?;
        let first_entry = usize::from(u16::from_le_bytes([header[3], header[4]]));
        let map_length = usize::from(u16::from_le_bytes([header[5], header[6]]));
        let entry_size = header[7];
        let width = usize::from(u16::from_le_bytes([header[12], header[13]]));
        let height = usize::from(u16::from_le_bytes([header[14], header[15]]));
        let depth = header[16];
        let descriptor = header[17];

        if !kind.supports_depth(depth) {
            return Err(TgaDecodeErrors::UnsupportedPixelDepth(kind.to_u8(), depth));
        }
        if width == 0 || height == 0 {
            return Err(TgaDecodeErrors::ZeroDimensions);
        }
        if width > self.options.max_width() {
            return Err(TgaDecodeErrors::TooLargeDimensions(
                "width",
                self.options.max_width(),
                width
            ));
        }
        if height > self.options.max_height() {
            return Err(TgaDecodeErrors::TooLargeDimensions(
                "height",
                self.options.max_height(),
                height
            ));
        }
        if kind.is_color_mapped() && color_map_type != 1 {
            return Err(TgaDecodeErrors::GenericStatic(
                "Colour mapped image without a colour map"
            ));
        }
        trace!("TGA image type: {kind:?}");
        trace!("Image width: {width}");
        trace!("Image height: {height}");
        trace!("Pixel depth: {depth}");

        self.bytes.skip(id_length)?;

        if color_map_type == 1 {
            if kind.is_color_mapped() && !matches!(entry_size, 15 | 16 | 24 | 32) {
                return Err(TgaDecodeErrors::UnsupportedColorMapEntry(entry_size));
            }
            let entry_bytes = usize::from(entry_size).div_ceil(8);
            let mut entries = vec![0_u8; map_length * entry_bytes];
            self.bytes.read_exact_bytes(&mut entries)?;

            if kind.is_color_mapped() {
                // indices are relative to the start of the file's map
                self.palette = vec![[0, 0, 0, 255]; first_entry];
                self.palette_alpha = entry_size == 32;

                for entry in entries.chunks_exact(entry_bytes) {
                    let rgba = match entry_size {
                        15 | 16 => {
                            let [r, g, b] = expand_rgb555(entry[0], entry[1]);
                            [r, g, b, 255]
                        }
                        24 => [entry[2], entry[1], entry[0], 255],
                        32 => [entry[2], entry[1], entry[0], entry[3]],
                        size => return Err(TgaDecodeErrors::UnsupportedColorMapEntry(size))
                    };
                    self.palette.push(rgba);
                }
            } else {
                warn!("Ignoring colour map of a non colour mapped TGA image");
            }
        }

        self.width = width;
        self.height = height;
        self.kind = kind;
        self.depth = depth;
        self.descriptor = descriptor;
        self.decoded_headers = true;

        Ok(())
    }

    /// Get dimensions of the image as a tuple of width,height
    ///
    /// Returns `None` if headers weren't decoded
    pub fn dimensions(&self) -> Option<(usize, usize)> {
        if !self.decoded_headers {
            return None;
        }
        Some((self.width, self.height))
    }

    /// Get the colorspace of the decoded pixels
    ///
    /// Returns `None` if headers weren't decoded
    pub fn colorspace(&self) -> Option<ColorSpace> {
        if !self.decoded_headers {
            return None;
        }
        let has_alpha = if self.kind.is_color_mapped() {
            self.palette_alpha
        } else if self.kind.is_grayscale() {
            self.depth == 16
        } else {
            // 15 and 16 bit pixels drop their attribute bit
            self.depth == 32
        };
        let colorspace = match (self.kind.is_grayscale(), has_alpha) {
            (true, true) => ColorSpace::LumaA,
            (true, false) => ColorSpace::Luma,
            (false, true) => ColorSpace::RGBA,
            (false, false) => ColorSpace::RGB
        };
        Some(colorspace)
    }

    /// Return the size of the buffer [`decode`](Self::decode) returns
    ///
    /// Returns `None` if headers weren't decoded or the calculation overflows
    pub fn output_buf_size(&self) -> Option<usize> {
        self.width
            .checked_mul(self.height)?
            .checked_mul(self.colorspace()?.num_components())
    }

    /// Decode the image returning pixels interleaved, rows top to bottom
    pub fn decode(&mut self) -> Result<Vec<u8>, TgaDecodeErrors> {
        self.decode_headers()?;

        let pixel_count = self.width * self.height;
        let bytes_per_pixel = usize::from(self.depth).div_ceil(8);

        // pixels as stored in the file
        let mut stored = vec![0_u8; pixel_count * bytes_per_pixel];

        if self.kind.is_rle() {
            self.decode_rle(&mut stored, bytes_per_pixel)?;
        } else {
            self.bytes.read_exact_bytes(&mut stored)?;
        }

        let components = self
            .colorspace()
            .ok_or(TgaDecodeErrors::GenericStatic("Headers not decoded"))?
            .num_components();

        let mut output = vec![0_u8; pixel_count * components];

        for (raw, out) in stored
            .chunks_exact(bytes_per_pixel)
            .zip(output.chunks_exact_mut(components))
        {
            self.expand_pixel(raw, out)?;
        }
        self.orient(&mut output, components);

        Ok(output)
    }

    fn decode_rle(&mut self, stored: &mut [u8], bytes_per_pixel: usize) -> Result<(), TgaDecodeErrors> {
        let mut position = 0;

        while position < stored.len() {
            let packet = self.bytes.read_u8_err()?;
            let count = usize::from(packet & 0x7F) + 1;
            // packets may cross row boundaries, but not the end of the image
            let end = (position + count * bytes_per_pixel).min(stored.len());

            if packet & 0x80 != 0 {
                let mut pixel = [0_u8; 4];
                self.bytes.read_exact_bytes(&mut pixel[..bytes_per_pixel])?;

                for out in stored[position..end].chunks_exact_mut(bytes_per_pixel) {
                    out.copy_from_slice(&pixel[..bytes_per_pixel]);
                }
            } else {
                self.bytes.read_exact_bytes(&mut stored[position..end])?;
            }
            position = end;
        }
        Ok(())
    }

    /// Convert one stored pixel to its output layout
    fn expand_pixel(&self, raw: &[u8], out: &mut [u8]) -> Result<(), TgaDecodeErrors> {
        if self.kind.is_color_mapped() {
            let index = usize::from(raw[0]);
            let entry = self
                .palette
                .get(index)
                .ok_or(TgaDecodeErrors::InvalidColorMapIndex(index, self.palette.len()))?;

            out.copy_from_slice(&entry[..out.len()]);
            return Ok(());
        }
        if self.kind.is_grayscale() {
            out.copy_from_slice(raw);
            return Ok(());
        }
        match self.depth {
            15 | 16 => out.copy_from_slice(&expand_rgb555(raw[0], raw[1])),
            24 => out.copy_from_slice(&[raw[2], raw[1], raw[0]]),
            _ => out.copy_from_slice(&[raw[2], raw[1], raw[0], raw[3]])
        }
        Ok(())
    }

    /// Rearrange decoded rows so that the first pixel is the top left one
    fn orient(&self, output: &mut [u8], components: usize) {
        let stride = self.width * components;

        if self.descriptor & DESCRIPTOR_RIGHT_TO_LEFT != 0 {
            for row in output.chunks_exact_mut(stride) {
                let pixel_count = row.len() / components;

                for x in 0..pixel_count / 2 {
                    let (left, right) = row.split_at_mut((pixel_count - 1 - x) * components);
                    left[x * components..(x + 1) * components]
                        .swap_with_slice(&mut right[..components]);
                }
            }
        }
        if self.descriptor & DESCRIPTOR_TOP_TO_BOTTOM == 0 {
            // bottom to top, the default TGA origin
            let half = (self.height / 2) * stride;
            let (top, bottom) = output.split_at_mut(half);

            for (t, b) in top
                .chunks_exact_mut(stride)
                .zip(bottom.rchunks_exact_mut(stride))
            {
                t.swap_with_slice(b);
            }
        }
    }
}
