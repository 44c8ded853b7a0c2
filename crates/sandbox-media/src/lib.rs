/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! In-memory 8-bit pixel buffers
//!
//! This crate provides four owning image containers sharing one generic
//! implementation, [`Image<F>`](image::Image), parameterized by a [pixel format](format::PixelFormat)
//!
//! | Alias             | Format        | Channels |
//! |-------------------|---------------|----------|
//! | [`ImageGray`]      | [`Gray`]      | 1        |
//! | [`ImageGrayAlpha`] | [`GrayAlpha`] | 2        |
//! | [`ImageRgb`]       | [`Rgb`]       | 3        |
//! | [`ImageRgba`]      | [`Rgba`]      | 4        |
//!
//! Alongside it are borrowed [row views](row), whole-image [views](view), the
//! [conversion rules](conversion) between every pair of formats and the
//! [codec boundary](codecs) used to load and save PNG, JPEG, BMP and TGA files.
//!
//! # Example
//! ```no_run
//! use sandbox_media::{ImageRgb, ImageRgba};
//!
//! let mut image = ImageRgba::new(100, 100).unwrap();
//! image.fill_rect(0, 0, 100, 100, [55, 255, 55, 255]).unwrap();
//! image.fill_rect(25, 0, 50, 50, [255, 255, 0, 255]).unwrap();
//! image.save("fill_test.png").unwrap();
//!
//! // drop alpha, premultiplying the colour channels first
//! let rgb = ImageRgb::converted_from(&image, true).unwrap();
//! assert_eq!(rgb.pixel_at(30, 10).unwrap(), [255, 255, 0]);
//! ```
//!
//! # Features
//! - `log`: Route the library's log statements to the `log` crate (default)
//! - `serde-support`: Implement `Serialize` for [`ImageFormat`](codecs::ImageFormat) and [`ImageInfo`](codecs::ImageInfo)
pub mod codecs;
pub mod conversion;
pub mod errors;
pub mod format;
pub mod image;
pub mod options;
pub mod row;
mod serde;
pub mod view;

pub use crate::conversion::{ConvertAny, ConvertPixel};
pub use crate::errors::ImageErrors;
pub use crate::format::{Gray, GrayAlpha, PixelFormat, Rgb, Rgba};
pub use crate::image::{Image, ImageGray, ImageGrayAlpha, ImageRgb, ImageRgba};
pub use crate::view::{ImageView, View, ViewGray, ViewGrayAlpha, ViewRgb, ViewRgba};
