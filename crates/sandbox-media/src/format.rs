/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Pixel formats understood by the library
//!
//! Each format is a zero sized marker type whose channel count is fixed at
//! compile time, images are generic over them, see [`Image`](crate::image::Image)
//!
//! All formats store 8 bits per channel, interleaved, in the channel order
//! given by the format name.
use std::fmt::Debug;

use bytemuck::Pod;
use zune_core::colorspace::ColorSpace;

mod sealed {
    pub trait Sealed {}
}

/// A pixel layout with a fixed number of 8-bit channels
///
/// This trait is sealed, the four implementors are [`Gray`], [`GrayAlpha`],
/// [`Rgb`] and [`Rgba`]
pub trait PixelFormat: sealed::Sealed + Copy + Clone + Debug + Default + Eq + 'static {
    /// Number of channels in a single pixel
    const CHANNELS: usize;
    /// Human readable name, used in logs
    const NAME: &'static str;
    /// A single pixel, `[u8; CHANNELS]`
    type Pixel: Pod + Default + Debug + Eq + AsRef<[u8]> + AsMut<[u8]>;

    /// The colorspace this layout corresponds to
    fn colorspace() -> ColorSpace;

    /// Returns true if the last channel of a pixel is alpha
    fn has_alpha() -> bool {
        Self::colorspace().has_alpha()
    }
}

/// Single channel luminance
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Gray;

/// Luminance followed by alpha
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct GrayAlpha;

/// Red, green and blue
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Rgb;

/// Red, green, blue and alpha, alpha is not premultiplied
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Rgba;

macro_rules! pixel_format {
    ($format:ty, $channels:expr, $name:expr, $colorspace:expr) => {
        impl sealed::Sealed for $format {}

        impl PixelFormat for $format {
            const CHANNELS: usize = $channels;
            const NAME: &'static str = $name;
            type Pixel = [u8; $channels];

            fn colorspace() -> ColorSpace {
                $colorspace
            }
        }
    };
}

pixel_format!(Gray, 1, "Gray", ColorSpace::Luma);
pixel_format!(GrayAlpha, 2, "GrayAlpha", ColorSpace::LumaA);
pixel_format!(Rgb, 3, "RGB", ColorSpace::RGB);
pixel_format!(Rgba, 4, "RGBA", ColorSpace::RGBA);

/// Map a channel count to the colorspace the library stores it as
///
/// Returns `None` for anything outside `1..=4`
pub const fn colorspace_for_channels(channels: usize) -> Option<ColorSpace> {
    match channels {
        1 => Some(ColorSpace::Luma),
        2 => Some(ColorSpace::LumaA),
        3 => Some(ColorSpace::RGB),
        4 => Some(ColorSpace::RGBA),
        _ => None
    }
}
