/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! A small Truevision TGA decoder and encoder
//!
//! # Decoding
//! - Uncompressed and run-length encoded images
//! - True colour (15, 16, 24 and 32 bits per pixel)
//! - Grayscale (8 bits, and 16 bits with alpha)
//! - Colour mapped images with 8 bit indices
//! - Any of the four image origins
//!
//! # Encoding
//! - 8 bit gray, gray+alpha, RGB and RGBA
//! - Run-length encoded by default, raw on request
//! - Rows are always written top-left first
//!
//! # Example
//! ```
//! use zune_core::bit_depth::BitDepth;
//! use zune_core::bytestream::ZCursor;
//! use zune_core::colorspace::ColorSpace;
//! use zune_core::options::EncoderOptions;
//! use sandbox_tga::{TgaDecoder, TgaEncoder};
//!
//! let pixels = [255_u8, 0, 0, 0, 255, 0];
//! let options = EncoderOptions::default()
//!     .set_width(2)
//!     .set_height(1)
//!     .set_depth(BitDepth::Eight)
//!     .set_colorspace(ColorSpace::RGB);
//!
//! let mut encoded = vec![];
//! TgaEncoder::new(&pixels, options).encode(&mut encoded).unwrap();
//!
//! let mut decoder = TgaDecoder::new(ZCursor::new(&encoded));
//! assert_eq!(decoder.decode().unwrap(), pixels);
//! assert_eq!(decoder.colorspace(), Some(ColorSpace::RGB));
//! ```
pub use crate::decoder::{probe_tga, TgaDecoder};
pub use crate::encoder::TgaEncoder;
pub use crate::errors::{TgaDecodeErrors, TgaEncodeErrors};

mod common;
mod decoder;
mod encoder;
mod errors;
