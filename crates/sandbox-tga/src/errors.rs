/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Formatter};

use zune_core::bit_depth::BitDepth;
use zune_core::bytestream::ZByteIoError;
use zune_core::colorspace::ColorSpace;

/// TGA errors that can occur during decoding
#[non_exhaustive]
pub enum TgaDecodeErrors {
    /// The image type field holds a value we do not understand
    UnsupportedImageType(u8),
    /// Pixel depth not valid for the image type
    UnsupportedPixelDepth(u8, u8),
    /// Colour map entry size we cannot expand
    UnsupportedColorMapEntry(u8),
    /// A colour map index outside the stored colour map
    InvalidColorMapIndex(usize, usize),
    /// Width or height is zero
    ZeroDimensions,
    /// Too large dimensions for a given width or height
    TooLargeDimensions(&'static str, usize, usize),
    /// Generic message
    GenericStatic(&'static str),
    IoErrors(ZByteIoError)
}

impl Debug for TgaDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::UnsupportedImageType(kind) => {
                writeln!(f, "Unsupported TGA image type {kind}")
            }
            Self::UnsupportedPixelDepth(kind, depth) => {
                writeln!(f, "Pixel depth {depth} is not valid for image type {kind}")
            }
            Self::UnsupportedColorMapEntry(size) => {
                writeln!(f, "Unsupported colour map entry size {size}")
            }
            Self::InvalidColorMapIndex(index, length) => {
                writeln!(
                    f,
                    "Colour map index {index} exceeds colour map of length {length}"
                )
            }
            Self::ZeroDimensions => {
                writeln!(f, "Image width or height is zero")
            }
            Self::TooLargeDimensions(dimension, expected, found) => {
                writeln!(
                    f,
                    "Too large dimensions for {dimension} , {found} exceeds {expected}"
                )
            }
            Self::GenericStatic(message) => {
                writeln!(f, "{message}")
            }
            Self::IoErrors(err) => {
                writeln!(f, "{err:?}")
            }
        }
    }
}

impl From<ZByteIoError> for TgaDecodeErrors {
    fn from(value: ZByteIoError) -> Self {
        TgaDecodeErrors::IoErrors(value)
    }
}

/// Errors possible during encoding
pub enum TgaEncodeErrors {
    /// TGA stores dimensions in 16 bits, width or height exceeds that
    TooLargeDimensions(usize),
    /// Width or height is zero
    ZeroDimensions,
    /// Only 8 bit images can be written
    UnsupportedBitDepth(BitDepth),
    /// Only gray, gray+alpha, RGB and RGBA can be written
    UnsupportedColorSpace(ColorSpace),
    /// The input buffer length is not `width*height*components`
    TooShortInput(usize, usize),
    IoErrors(ZByteIoError)
}

impl Debug for TgaEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::TooLargeDimensions(dims) => {
                writeln!(f, "Too large dimensions {dims}, TGA supports up to 65535")
            }
            Self::ZeroDimensions => {
                writeln!(f, "Image width or height is zero")
            }
            Self::UnsupportedBitDepth(depth) => {
                writeln!(f, "Unsupported bit depth {depth:?}")
            }
            Self::UnsupportedColorSpace(color) => {
                writeln!(f, "Unsupported color space {color:?}")
            }
            Self::TooShortInput(expected, found) => {
                writeln!(f, "Too short of input, expected {expected}, found {found}")
            }
            Self::IoErrors(err) => {
                writeln!(f, "I/O error {err:?}")
            }
        }
    }
}

impl From<ZByteIoError> for TgaEncodeErrors {
    fn from(value: ZByteIoError) -> Self {
        TgaEncodeErrors::IoErrors(value)
    }
}
