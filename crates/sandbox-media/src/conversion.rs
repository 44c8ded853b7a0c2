/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Conversion rules between pixel formats
//!
//! Every pair of formats has exactly one rule, applied pixel by pixel
//!
//! | From → To              | Rule                                                        |
//! |------------------------|-------------------------------------------------------------|
//! | Gray → GrayAlpha       | `(g, 255)`                                                  |
//! | Gray → RGB/RGBA        | `(g, g, g[, 255])`                                          |
//! | GrayAlpha → Gray       | `g*a/255` if alpha is factored in, else `g`                 |
//! | GrayAlpha → RGB/RGBA   | gray replicated, premultiplied if alpha is factored in, RGBA keeps `a` |
//! | RGB → Gray/GrayAlpha   | luminance, alpha is `255`                                   |
//! | RGB → RGBA             | `(r, g, b, 255)`                                            |
//! | RGBA → Gray/GrayAlpha  | luminance, scaled by `a/255` if alpha is factored in, GrayAlpha keeps `a` |
//! | RGBA → RGB             | `(r, g, b)`, each scaled by `a/255` if alpha is factored in |
//!
//! Luminance uses the weights `0.299 R + 0.587 G + 0.114 B`.
//!
//! All arithmetic is carried out in integers and truncated with integer
//! division, results are never rounded up, e.g. RGBA `(200,100,50,128)`
//! premultiplied becomes RGB `(100,50,25)`
//!
//! `factor_in_alpha` is ignored by rules whose source has no alpha channel.
use crate::format::{Gray, GrayAlpha, PixelFormat, Rgb, Rgba};

/// Luminance weights scaled by 1000 so that gray inputs map back onto themselves
const LUMA_R: u32 = 299;
const LUMA_G: u32 = 587;
const LUMA_B: u32 = 114;
const LUMA_SCALE: u32 = LUMA_R + LUMA_G + LUMA_B;

/// Convert a pixel of format `S` into a pixel of `Self`
///
/// Implemented for every (target, source) pair of the four formats,
/// including the identity conversions.
pub trait ConvertPixel<S: PixelFormat>: PixelFormat {
    /// Convert a single pixel
    ///
    /// # Arguments
    /// - `pixel`: The source pixel
    /// - `factor_in_alpha`: Whether colour values should be scaled by the
    ///   source alpha (premultiplied) before being stored
    fn convert_pixel(pixel: S::Pixel, factor_in_alpha: bool) -> Self::Pixel;

    /// Convert a whole run of pixels
    ///
    /// `from` and `to` must be of the same length
    fn convert_pixels(from: &[S::Pixel], to: &mut [Self::Pixel], factor_in_alpha: bool) {
        assert_eq!(from.len(), to.len());

        for (src, dst) in from.iter().zip(to.iter_mut()) {
            *dst = <Self as ConvertPixel<S>>::convert_pixel(*src, factor_in_alpha);
        }
    }
}

/// A format every other format can be converted into
///
/// Automatically implemented, it exists to shorten trait bounds of
/// functions that adapt decoded images to a requested format.
pub trait ConvertAny:
    ConvertPixel<Gray> + ConvertPixel<GrayAlpha> + ConvertPixel<Rgb> + ConvertPixel<Rgba>
{
}

impl<F> ConvertAny for F where
    F: ConvertPixel<Gray> + ConvertPixel<GrayAlpha> + ConvertPixel<Rgb> + ConvertPixel<Rgba>
{
}

/// `value * alpha / 255`, truncated
#[inline(always)]
#[allow(clippy::cast_possible_truncation)]
const fn scale_by_alpha(value: u8, alpha: u8) -> u8 {
    ((value as u32 * alpha as u32) / 255) as u8
}

/// Luminance of an RGB triple, truncated
#[inline(always)]
#[allow(clippy::cast_possible_truncation)]
const fn luminance(r: u8, g: u8, b: u8) -> u8 {
    ((LUMA_R * r as u32 + LUMA_G * g as u32 + LUMA_B * b as u32) / LUMA_SCALE) as u8
}

/// Luminance of an RGB triple scaled by alpha, truncated once at the end
#[inline(always)]
#[allow(clippy::cast_possible_truncation)]
const fn luminance_with_alpha(r: u8, g: u8, b: u8, a: u8) -> u8 {
    let weighted = LUMA_R * r as u32 + LUMA_G * g as u32 + LUMA_B * b as u32;

    ((weighted * a as u32) / (LUMA_SCALE * 255)) as u8
}

macro_rules! identity_conversion {
    ($format:ty) => {
        impl ConvertPixel<$format> for $format {
            #[inline(always)]
            fn convert_pixel(
                pixel: <$format as PixelFormat>::Pixel, _: bool
            ) -> <$format as PixelFormat>::Pixel {
                pixel
            }

            fn convert_pixels(
                from: &[<$format as PixelFormat>::Pixel], to: &mut [<$format as PixelFormat>::Pixel],
                _: bool
            ) {
                to.copy_from_slice(from);
            }
        }
    };
}

identity_conversion!(Gray);
identity_conversion!(GrayAlpha);
identity_conversion!(Rgb);
identity_conversion!(Rgba);

// Gray sources
impl ConvertPixel<Gray> for GrayAlpha {
    #[inline(always)]
    fn convert_pixel([g]: [u8; 1], _: bool) -> [u8; 2] {
        [g, 255]
    }
}

impl ConvertPixel<Gray> for Rgb {
    #[inline(always)]
    fn convert_pixel([g]: [u8; 1], _: bool) -> [u8; 3] {
        [g, g, g]
    }
}

impl ConvertPixel<Gray> for Rgba {
    #[inline(always)]
    fn convert_pixel([g]: [u8; 1], _: bool) -> [u8; 4] {
        [g, g, g, 255]
    }
}

// GrayAlpha sources
impl ConvertPixel<GrayAlpha> for Gray {
    #[inline(always)]
    fn convert_pixel([g, a]: [u8; 2], factor_in_alpha: bool) -> [u8; 1] {
        if factor_in_alpha {
            [scale_by_alpha(g, a)]
        } else {
            [g]
        }
    }
}

impl ConvertPixel<GrayAlpha> for Rgb {
    #[inline(always)]
    fn convert_pixel([g, a]: [u8; 2], factor_in_alpha: bool) -> [u8; 3] {
        let g = if factor_in_alpha { scale_by_alpha(g, a) } else { g };

        [g, g, g]
    }
}

impl ConvertPixel<GrayAlpha> for Rgba {
    #[inline(always)]
    fn convert_pixel([g, a]: [u8; 2], factor_in_alpha: bool) -> [u8; 4] {
        let g = if factor_in_alpha { scale_by_alpha(g, a) } else { g };

        [g, g, g, a]
    }
}

// RGB sources
impl ConvertPixel<Rgb> for Gray {
    #[inline(always)]
    fn convert_pixel([r, g, b]: [u8; 3], _: bool) -> [u8; 1] {
        [luminance(r, g, b)]
    }
}

impl ConvertPixel<Rgb> for GrayAlpha {
    #[inline(always)]
    fn convert_pixel([r, g, b]: [u8; 3], _: bool) -> [u8; 2] {
        [luminance(r, g, b), 255]
    }
}

impl ConvertPixel<Rgb> for Rgba {
    #[inline(always)]
    fn convert_pixel([r, g, b]: [u8; 3], _: bool) -> [u8; 4] {
        [r, g, b, 255]
    }
}

// RGBA sources
impl ConvertPixel<Rgba> for Gray {
    #[inline(always)]
    fn convert_pixel([r, g, b, a]: [u8; 4], factor_in_alpha: bool) -> [u8; 1] {
        if factor_in_alpha {
            [luminance_with_alpha(r, g, b, a)]
        } else {
            [luminance(r, g, b)]
        }
    }
}

impl ConvertPixel<Rgba> for GrayAlpha {
    #[inline(always)]
    fn convert_pixel([r, g, b, a]: [u8; 4], factor_in_alpha: bool) -> [u8; 2] {
        if factor_in_alpha {
            [luminance_with_alpha(r, g, b, a), a]
        } else {
            [luminance(r, g, b), a]
        }
    }
}

impl ConvertPixel<Rgba> for Rgb {
    #[inline(always)]
    fn convert_pixel([r, g, b, a]: [u8; 4], factor_in_alpha: bool) -> [u8; 3] {
        if factor_in_alpha {
            [
                scale_by_alpha(r, a),
                scale_by_alpha(g, a),
                scale_by_alpha(b, a)
            ]
        } else {
            [r, g, b]
        }
    }
}

#[cfg(test)]
mod tests {
    use nanorand::Rng;

    use crate::conversion::{luminance, ConvertPixel};
    use crate::format::{Gray, GrayAlpha, Rgb, Rgba};

    #[test]
    fn gray_expands_with_opaque_alpha() {
        assert_eq!(<GrayAlpha as ConvertPixel<Gray>>::convert_pixel([17], false), [17, 255]);
        assert_eq!(<Rgb as ConvertPixel<Gray>>::convert_pixel([17], true), [17, 17, 17]);
        assert_eq!(
            <Rgba as ConvertPixel<Gray>>::convert_pixel([17], false),
            [17, 17, 17, 255]
        );
    }

    #[test]
    fn gray_alpha_to_gray() {
        assert_eq!(<Gray as ConvertPixel<GrayAlpha>>::convert_pixel([200, 128], false), [200]);
        // 200*128/255 = 100.39
        assert_eq!(<Gray as ConvertPixel<GrayAlpha>>::convert_pixel([200, 128], true), [100]);
        assert_eq!(<Gray as ConvertPixel<GrayAlpha>>::convert_pixel([200, 0], true), [0]);
        assert_eq!(<Gray as ConvertPixel<GrayAlpha>>::convert_pixel([200, 255], true), [200]);
    }

    #[test]
    fn gray_alpha_to_colour() {
        assert_eq!(<Rgb as ConvertPixel<GrayAlpha>>::convert_pixel([90, 10], false), [90, 90, 90]);
        assert_eq!(<Rgb as ConvertPixel<GrayAlpha>>::convert_pixel([255, 51], true), [51, 51, 51]);
        assert_eq!(
            <Rgba as ConvertPixel<GrayAlpha>>::convert_pixel([90, 10], false),
            [90, 90, 90, 10]
        );
        assert_eq!(
            <Rgba as ConvertPixel<GrayAlpha>>::convert_pixel([255, 51], true),
            [51, 51, 51, 51]
        );
    }

    #[test]
    fn pure_gray_rgb_keeps_its_value() {
        assert_eq!(<Gray as ConvertPixel<Rgb>>::convert_pixel([128, 128, 128], false), [128]);

        for v in 0..=255_u8 {
            assert_eq!(luminance(v, v, v), v, "luminance of ({v},{v},{v}) changed");
        }
    }

    #[test]
    fn rgb_luminance_truncates() {
        // 0.299*255 = 76.245
        assert_eq!(<Gray as ConvertPixel<Rgb>>::convert_pixel([255, 0, 0], false), [76]);
        // 0.587*255 = 149.685
        assert_eq!(<GrayAlpha as ConvertPixel<Rgb>>::convert_pixel([0, 255, 0], false), [149, 255]);
        // 0.114*255 = 29.07
        assert_eq!(<Gray as ConvertPixel<Rgb>>::convert_pixel([0, 0, 255], false), [29]);
        assert_eq!(<Rgba as ConvertPixel<Rgb>>::convert_pixel([1, 2, 3], false), [1, 2, 3, 255]);
    }

    #[test]
    fn rgba_premultiplied_to_rgb() {
        assert_eq!(
            <Rgb as ConvertPixel<Rgba>>::convert_pixel([200, 100, 50, 128], true),
            [100, 50, 25]
        );
        assert_eq!(
            <Rgb as ConvertPixel<Rgba>>::convert_pixel([200, 100, 50, 128], false),
            [200, 100, 50]
        );
    }

    #[test]
    fn rgba_to_gray_variants() {
        let px = [255, 255, 255, 128];
        assert_eq!(<Gray as ConvertPixel<Rgba>>::convert_pixel(px, false), [255]);
        // 255*128/255
        assert_eq!(<Gray as ConvertPixel<Rgba>>::convert_pixel(px, true), [128]);
        assert_eq!(<GrayAlpha as ConvertPixel<Rgba>>::convert_pixel(px, false), [255, 128]);
        assert_eq!(<GrayAlpha as ConvertPixel<Rgba>>::convert_pixel(px, true), [128, 128]);
    }

    #[test]
    fn identity_is_lossless() {
        let mut rand = nanorand::WyRand::new();

        for _ in 0..256 {
            let px: [u8; 4] = [rand.generate(), rand.generate(), rand.generate(), rand.generate()];
            assert_eq!(<Rgba as ConvertPixel<Rgba>>::convert_pixel(px, true), px);
        }
    }

    #[test]
    fn premultiplied_never_exceeds_straight() {
        let mut rand = nanorand::WyRand::new();

        for _ in 0..1024 {
            let px: [u8; 4] = [rand.generate(), rand.generate(), rand.generate(), rand.generate()];

            let straight = <Rgb as ConvertPixel<Rgba>>::convert_pixel(px, false);
            let premul = <Rgb as ConvertPixel<Rgba>>::convert_pixel(px, true);

            for (s, p) in straight.iter().zip(premul.iter()) {
                assert!(p <= s);
            }
            let gray_straight = <Gray as ConvertPixel<Rgba>>::convert_pixel(px, false);
            let gray_premul = <Gray as ConvertPixel<Rgba>>::convert_pixel(px, true);
            assert!(gray_premul <= gray_straight);
        }
    }

    #[test]
    fn bulk_conversion_matches_single() {
        let src = [[10_u8, 20, 30], [255, 255, 255], [0, 0, 0]];
        let mut dst = [[0_u8; 2]; 3];

        <GrayAlpha as ConvertPixel<Rgb>>::convert_pixels(&src, &mut dst, false);

        for (s, d) in src.iter().zip(dst.iter()) {
            assert_eq!(*d, <GrayAlpha as ConvertPixel<Rgb>>::convert_pixel(*s, false));
        }
    }
}
