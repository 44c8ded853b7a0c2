/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible during image manipulation, decoding and encoding
use std::fmt::{Debug, Display, Formatter};

use zune_core::colorspace::ColorSpace;

use crate::codecs::ImageFormat;

/// All errors possible during image processing
pub enum ImageErrors {
    /// Width or height was zero where a non-empty image was required
    ZeroDimensions,
    /// `width * height * channels` does not fit in memory addressing
    DimensionsTooLarge(usize, usize),
    /// The allocator could not provide the requested number of bytes
    AllocationFailed(usize),
    /// The operation needs pixels but the image holds none
    EmptyImage,
    /// A pixel coordinate outside of the image
    OutOfBounds {
        x:      usize,
        y:      usize,
        width:  usize,
        height: usize
    },
    /// A row index at or past the image height
    RowOutOfBounds { y: usize, height: usize },
    /// A rectangle which does not fit fully inside the image
    RectOutOfBounds {
        x:            usize,
        y:            usize,
        rect_width:   usize,
        rect_height:  usize,
        image_width:  usize,
        image_height: usize
    },
    /// A raw buffer whose length does not match `width*height*channels`
    BufferSizeMismatch { expected: usize, found: usize },
    /// A pixel/value with a different number of channels than the image format
    ChannelMismatch { expected: usize, found: usize },
    /// A decoder produced a layout we cannot map to 8-bit gray/rgb
    UnsupportedColorspace(ColorSpace),
    /// Input bytes are empty or their format is not recognised
    ImageDecoderNotImplemented(ImageFormat),
    /// The delegate decoder failed
    ImageDecodeErrors(String),
    /// The delegate encoder failed or no encoder applies
    EncodeErrors(ImgEncodeErrors),
    /// Reading from or writing to a file failed
    IoErrors(std::io::Error)
}

/// Errors that occur during encoding
pub enum ImgEncodeErrors {
    /// The path has no extension to pick an encoder from
    NoExtension,
    /// The extension does not map to a supported encoder
    NoEncoderForExtension(String),
    Generic(String),
    ImageEncodeErrors(String)
}

impl Debug for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroDimensions => {
                writeln!(f, "Width and height must both be greater than zero")
            }
            Self::DimensionsTooLarge(width, height) => {
                writeln!(f, "Dimensions {width}x{height} are too large to allocate")
            }
            Self::AllocationFailed(bytes) => {
                writeln!(f, "Could not allocate {bytes} bytes for image")
            }
            Self::EmptyImage => {
                writeln!(f, "Image has no pixel data")
            }
            Self::OutOfBounds {
                x,
                y,
                width,
                height
            } => {
                writeln!(
                    f,
                    "Pixel ({x},{y}) is outside of image with dimensions {width}x{height}"
                )
            }
            Self::RowOutOfBounds { y, height } => {
                writeln!(f, "Row {y} is out of bounds for image height {height}")
            }
            Self::RectOutOfBounds {
                x,
                y,
                rect_width,
                rect_height,
                image_width,
                image_height
            } => {
                writeln!(
                    f,
                    "Rectangle at ({x},{y}) of size {rect_width}x{rect_height} exceeds image of size {image_width}x{image_height}"
                )
            }
            Self::BufferSizeMismatch { expected, found } => {
                writeln!(f, "Expected a buffer of {expected} bytes but found {found}")
            }
            Self::ChannelMismatch { expected, found } => {
                writeln!(f, "Expected {expected} channels but found {found}")
            }
            Self::UnsupportedColorspace(colorspace) => {
                writeln!(f, "Colorspace {colorspace:?} cannot be stored as an 8-bit image")
            }
            Self::ImageDecoderNotImplemented(format) => {
                writeln!(f, "No decoder available for format {format:?}")
            }
            Self::ImageDecodeErrors(err) => {
                writeln!(f, "Decoding failed: {err}")
            }
            Self::EncodeErrors(err) => {
                writeln!(f, "Encoding failed: {err:?}")
            }
            Self::IoErrors(err) => {
                writeln!(f, "I/O error: {err:?}")
            }
        }
    }
}

impl Debug for ImgEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoExtension => writeln!(f, "Path has no extension"),
            Self::NoEncoderForExtension(ext) => {
                writeln!(f, "No encoder for extension {ext:?}")
            }
            Self::Generic(err) => writeln!(f, "{err}"),
            Self::ImageEncodeErrors(err) => writeln!(f, "Image could not be encoded: {err}")
        }
    }
}

impl Display for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Display for ImgEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for ImageErrors {}

impl std::error::Error for ImgEncodeErrors {}

impl From<std::io::Error> for ImageErrors {
    fn from(value: std::io::Error) -> Self {
        Self::IoErrors(value)
    }
}

impl From<ImgEncodeErrors> for ImageErrors {
    fn from(value: ImgEncodeErrors) -> Self {
        Self::EncodeErrors(value)
    }
}

impl From<sandbox_tga::TgaDecodeErrors> for ImageErrors {
    fn from(value: sandbox_tga::TgaDecodeErrors) -> Self {
        Self::ImageDecodeErrors(format!("tga: {value:?}"))
    }
}

impl From<sandbox_tga::TgaEncodeErrors> for ImageErrors {
    fn from(value: sandbox_tga::TgaEncodeErrors) -> Self {
        Self::EncodeErrors(ImgEncodeErrors::ImageEncodeErrors(format!("tga: {value:?}")))
    }
}

impl From<jpeg_encoder::EncodingError> for ImageErrors {
    fn from(value: jpeg_encoder::EncodingError) -> Self {
        Self::EncodeErrors(ImgEncodeErrors::ImageEncodeErrors(format!("jpeg: {value:?}")))
    }
}
