/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// Size of the fixed TGA header
pub(crate) const TGA_HEADER_SIZE: usize = 18;

/// Image descriptor bit set when the first stored row is the top row
pub(crate) const DESCRIPTOR_TOP_TO_BOTTOM: u8 = 1 << 5;
/// Image descriptor bit set when pixels in a row are stored right to left
pub(crate) const DESCRIPTOR_RIGHT_TO_LEFT: u8 = 1 << 4;

/// Longest run a single packet can describe
pub(crate) const MAX_PACKET_LENGTH: usize = 128;

/// The `image type` field of a TGA header
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum TgaImageType {
    ColorMapped,
    TrueColor,
    Grayscale,
    RleColorMapped,
    RleTrueColor,
    RleGrayscale
}

impl TgaImageType {
    pub(crate) const fn from_u8(value: u8) -> Option<TgaImageType> {
        match value {
            1 => Some(Self::ColorMapped),
            2 => Some(Self::TrueColor),
            3 => Some(Self::Grayscale),
            9 => Some(Self::RleColorMapped),
            10 => Some(Self::RleTrueColor),
            11 => Some(Self::RleGrayscale),
            _ => None
        }
    }
    pub(crate) const fn to_u8(self) -> u8 {
        match self {
            Self::ColorMapped => 1,
            Self::TrueColor => 2,
            Self::Grayscale => 3,
            Self::RleColorMapped => 9,
            Self::RleTrueColor => 10,
            Self::RleGrayscale => 11
        }
    }
    pub(crate) const fn is_rle(self) -> bool {
        matches!(
            self,
            Self::RleColorMapped | Self::RleTrueColor | Self::RleGrayscale
        )
    }
    pub(crate) const fn is_color_mapped(self) -> bool {
        matches!(self, Self::ColorMapped | Self::RleColorMapped)
    }
    pub(crate) const fn is_grayscale(self) -> bool {
        matches!(self, Self::Grayscale | Self::RleGrayscale)
    }
    /// Pixel depths, in bits, valid for pixels stored in the image data
    pub(crate) fn supports_depth(self, depth: u8) -> bool {
        if self.is_color_mapped() {
            depth == 8
        } else if self.is_grayscale() {
            depth == 8 || depth == 16
        } else {
            matches!(depth, 15 | 16 | 24 | 32)
        }
    }
}

/// Expand a little endian 5-5-5 pixel to RGB
#[inline]
pub(crate) fn expand_rgb555(lo: u8, hi: u8) -> [u8; 3] {
    let value = u16::from_le_bytes([lo, hi]);

    let r = ((value >> 10) & 31) as u8;
    let g = ((value >> 5) & 31) as u8;
    let b = (value & 31) as u8;

    [(r << 3) | (r >> 2), (g << 3) | (g >> 2), (b << 3) | (b >> 2)]
}
