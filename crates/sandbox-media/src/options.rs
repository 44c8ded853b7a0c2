/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Per call options for loading and saving images
//!
//! Options are plain values passed to each call, nothing is kept
//! in global state between calls.
use zune_core::options::DecoderOptions;

/// Default JPEG quality
pub const DEFAULT_QUALITY: u8 = 90;

/// Options used when decoding an image
///
/// # Example
/// ```
/// use sandbox_media::options::LoadOptions;
///
/// let options = LoadOptions::default()
///     .set_flip_vertically(true)
///     .set_max_width(4096);
/// assert!(options.flip_vertically());
/// ```
#[derive(Debug, Copy, Clone)]
pub struct LoadOptions {
    flip_vertically: bool,
    decoder:         DecoderOptions
}

impl Default for LoadOptions {
    fn default() -> Self {
        LoadOptions {
            flip_vertically: false,
            decoder:         DecoderOptions::default()
        }
    }
}

impl LoadOptions {
    /// Create options which decode with the given decoder options
    pub fn new_with_decoder_options(decoder: DecoderOptions) -> LoadOptions {
        LoadOptions {
            flip_vertically: false,
            decoder
        }
    }
    /// Whether the first row of the decoded image becomes the last
    pub const fn flip_vertically(&self) -> bool {
        self.flip_vertically
    }
    /// Set whether the decoded image should be flipped vertically
    /// before it is handed out
    pub fn set_flip_vertically(mut self, yes: bool) -> Self {
        self.flip_vertically = yes;
        self
    }
    /// Options forwarded to the underlying decoders
    pub const fn decoder_options(&self) -> DecoderOptions {
        self.decoder
    }
    /// Maximum width an image may have before decoding is refused
    pub fn set_max_width(mut self, width: usize) -> Self {
        self.decoder = self.decoder.set_max_width(width);
        self
    }
    /// Maximum height an image may have before decoding is refused
    pub fn set_max_height(mut self, height: usize) -> Self {
        self.decoder = self.decoder.set_max_height(height);
        self
    }
    /// Treat recoverable decoder warnings as errors
    pub fn set_strict_mode(mut self, yes: bool) -> Self {
        self.decoder = self.decoder.set_strict_mode(yes);
        self
    }
}

/// Options used when encoding an image
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct SaveOptions {
    quality: u8
}

impl Default for SaveOptions {
    fn default() -> Self {
        SaveOptions {
            quality: DEFAULT_QUALITY
        }
    }
}

impl SaveOptions {
    /// Create options with the given JPEG quality
    ///
    /// See [set_quality](Self::set_quality) for how the value is interpreted
    pub fn new_with_quality(quality: u8) -> SaveOptions {
        SaveOptions::default().set_quality(quality)
    }
    /// JPEG quality, in `1..=100`
    pub const fn quality(&self) -> u8 {
        self.quality
    }
    /// Set JPEG quality
    ///
    /// `0` selects the default of 90, values above 100 are clamped to 100.
    /// Lossless formats ignore the quality
    pub fn set_quality(mut self, quality: u8) -> Self {
        self.quality = if quality == 0 {
            DEFAULT_QUALITY
        } else {
            quality.min(100)
        };
        self
    }
}
