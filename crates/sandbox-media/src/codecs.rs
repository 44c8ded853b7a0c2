/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Entry point for all supported codecs the library understands
//!
//! | Format | Decoder       | Encoder        | Stored as written                      |
//! |--------|---------------|----------------|----------------------------------------|
//! | PNG    | `zune-png`    | `zune-png`     | all four formats, lossless             |
//! | JPEG   | `zune-jpeg`   | `jpeg-encoder` | gray or RGB, alpha is dropped, lossy   |
//! | BMP    | `zune-bmp`    | in crate       | 32 bit BGRA bitfields, lossless        |
//! | TGA    | `sandbox-tga` | `sandbox-tga`  | all four formats, run-length encoded   |
//!
//! Decoding picks the format from the content of the bytes, never from a file
//! name. Encoding to a file picks the format from the lower-cased extension.
//!
//! # Channel adaptation
//! Decoders return whatever layout the file stores. Before pixels reach an
//! [`Image<F>`], they are converted to exactly `F::CHANNELS` channels using the
//! [conversion rules](crate::conversion) with alpha never factored in, so a
//! grayscale PNG can be loaded into an [`ImageRgba`](crate::ImageRgba) and an RGBA
//! BMP into an [`ImageGray`](crate::ImageGray).
use std::path::Path;

use zune_core::colorspace::ColorSpace;
use zune_core::log::{trace, warn};
use zune_core::options::DecoderOptions;

use crate::conversion::ConvertAny;
use crate::errors::{ImageErrors, ImgEncodeErrors};
use crate::format::{colorspace_for_channels, Gray, GrayAlpha, PixelFormat, Rgb, Rgba};
use crate::image::Image;
use crate::options::{LoadOptions, SaveOptions};

pub mod bmp;
pub mod jpeg;
pub mod png;
pub mod tga;

/// All supported image formats
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[allow(clippy::upper_case_acronyms)]
pub enum ImageFormat {
    /// Portable Network Graphics
    PNG,
    /// Joint Photographic Experts Group
    JPEG,
    /// Windows Bitmap Files
    BMP,
    /// Truevision TGA
    TGA,
    /// Any unknown format
    Unknown
}

impl ImageFormat {
    /// Map a file extension to the format written for it
    ///
    /// The extension is compared case insensitively, without the leading dot
    pub fn from_extension<P: AsRef<str>>(extension: P) -> Option<ImageFormat> {
        match extension.as_ref().to_ascii_lowercase().as_str() {
            "png" => Some(ImageFormat::PNG),
            "jpg" | "jpeg" => Some(ImageFormat::JPEG),
            "bmp" => Some(ImageFormat::BMP),
            "tga" => Some(ImageFormat::TGA),
            _ => None
        }
    }

    /// Determine the format to write to `path` from its extension
    ///
    /// # Errors
    /// - [`ImgEncodeErrors::NoExtension`] if the path has no extension
    /// - [`ImgEncodeErrors::NoEncoderForExtension`] if the extension is not supported
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<ImageFormat, ImageErrors> {
        let extension = path
            .as_ref()
            .extension()
            .ok_or(ImgEncodeErrors::NoExtension)?
            .to_string_lossy();

        ImageFormat::from_extension(&extension).ok_or_else(|| {
            ImageErrors::EncodeErrors(ImgEncodeErrors::NoEncoderForExtension(
                extension.to_string()
            ))
        })
    }

    /// The canonical extension for files of this format
    pub const fn extension(self) -> &'static str {
        match self {
            ImageFormat::PNG => "png",
            ImageFormat::JPEG => "jpg",
            ImageFormat::BMP => "bmp",
            ImageFormat::TGA => "tga",
            ImageFormat::Unknown => ""
        }
    }

    /// Return true if pixels of this format can be decoded
    pub const fn has_decoder(self) -> bool {
        !matches!(self, ImageFormat::Unknown)
    }

    /// Return true if images can be encoded into this format
    pub const fn has_encoder(self) -> bool {
        !matches!(self, ImageFormat::Unknown)
    }

    /// Return true if writing then reading back preserves every
    /// channel value of a `colorspace` image
    pub fn is_lossless_for(self, colorspace: ColorSpace) -> bool {
        match self {
            ImageFormat::PNG | ImageFormat::BMP | ImageFormat::TGA => {
                colorspace_for_channels(colorspace.num_components()) == Some(colorspace)
            }
            ImageFormat::JPEG | ImageFormat::Unknown => false
        }
    }

    pub fn guess_format(bytes: &[u8]) -> Option<ImageFormat> {
        guess_format(bytes)
    }
}

/// Guess the format of an image based on its magic bytes
///
/// # Returns
/// - `Some(format)`: The image format
/// - `None`: The bytes are empty or not understood by the library
pub fn guess_format(bytes: &[u8]) -> Option<ImageFormat> {
    let magic_bytes: [(&[u8], ImageFormat); 2] = [
        (&[137, 80, 78, 71, 13, 10, 26, 10], ImageFormat::PNG),
        // the best identifier would be 0xFF,0xD8,0xFF but some
        // encoders emit other markers after SOI
        (&[0xff, 0xd8], ImageFormat::JPEG)
    ];

    for (magic, format) in magic_bytes {
        if bytes.starts_with(magic) {
            return Some(format);
        }
    }
    // bmp requires 15 bytes to determine if it is a valid one.
    if zune_bmp::probe_bmp(bytes) {
        return Some(ImageFormat::BMP);
    }
    // no magic, only header validation, keep last
    if sandbox_tga::probe_tga(bytes) {
        return Some(ImageFormat::TGA);
    }
    None
}

/// Pixels as returned by one of the format decoders, before channel adaptation
pub(crate) struct NativeImage {
    pub(crate) format:     ImageFormat,
    pub(crate) width:      usize,
    pub(crate) height:     usize,
    pub(crate) colorspace: ColorSpace,
    pub(crate) pixels:     Vec<u8>
}

impl NativeImage {
    /// Wrap decoder output, inferring the channel count from the buffer length
    ///
    /// Decoders differ in how they report layouts, the length is the one
    /// thing all of them agree on.
    pub(crate) fn new(
        format: ImageFormat, width: usize, height: usize, pixels: Vec<u8>
    ) -> Result<NativeImage, ImageErrors> {
        let pixel_count = width.checked_mul(height).unwrap_or(0);

        if pixel_count == 0 {
            return Err(ImageErrors::ZeroDimensions);
        }
        if pixels.len() % pixel_count != 0 {
            return Err(ImageErrors::ImageDecodeErrors(format!(
                "{format:?}: {} bytes is not a whole number of pixels for a {width}x{height} image",
                pixels.len()
            )));
        }
        let channels = pixels.len() / pixel_count;
        let colorspace = colorspace_for_channels(channels).ok_or_else(|| {
            ImageErrors::ImageDecodeErrors(format!(
                "{format:?}: decoder produced {channels} channels per pixel"
            ))
        })?;

        Ok(NativeImage {
            format,
            width,
            height,
            colorspace,
            pixels
        })
    }

    /// Convert to an image of format `F`
    fn into_image<F: PixelFormat + ConvertAny>(self) -> Result<Image<F>, ImageErrors> {
        let (width, height) = (self.width, self.height);

        if self.colorspace == F::colorspace() {
            return Image::from_raw(width, height, self.pixels);
        }
        trace!(
            "Adapting {:?} {:?} to {}",
            self.format,
            self.colorspace,
            F::NAME
        );

        match self.colorspace {
            ColorSpace::Luma => {
                Image::converted_from(&Image::<Gray>::from_raw(width, height, self.pixels)?, false)
            }
            ColorSpace::LumaA => Image::converted_from(
                &Image::<GrayAlpha>::from_raw(width, height, self.pixels)?,
                false
            ),
            ColorSpace::RGB => {
                Image::converted_from(&Image::<Rgb>::from_raw(width, height, self.pixels)?, false)
            }
            ColorSpace::RGBA => {
                Image::converted_from(&Image::<Rgba>::from_raw(width, height, self.pixels)?, false)
            }
            colorspace => Err(ImageErrors::UnsupportedColorspace(colorspace))
        }
    }
}

/// Run the decoder for the format of `bytes`
///
/// `preferred` lets decoders which can output several layouts pick the one
/// closest to what the caller will convert to
pub(crate) fn decode_native(
    bytes: &[u8], preferred: ColorSpace, options: DecoderOptions
) -> Result<NativeImage, ImageErrors> {
    let format = guess_format(bytes).unwrap_or(ImageFormat::Unknown);

    trace!("Decoding {} bytes as {:?}", bytes.len(), format);

    let image = match format {
        ImageFormat::PNG => png::decode(bytes, options)?,
        ImageFormat::JPEG => jpeg::decode(bytes, preferred, options)?,
        ImageFormat::BMP => bmp::decode(bytes, options)?,
        ImageFormat::TGA => tga::decode(bytes, options)?,
        ImageFormat::Unknown => return Err(ImageErrors::ImageDecoderNotImplemented(format))
    };
    trace!(
        "Decoded {}x{} image, colorspace {:?}",
        image.width,
        image.height,
        image.colorspace
    );
    Ok(image)
}

/// A decoded image whose pixels were adapted to a requested layout
#[derive(Clone, Debug)]
pub struct DecodedImage {
    /// Format the bytes were stored in
    pub format:     ImageFormat,
    pub width:      usize,
    pub height:     usize,
    /// Layout of `pixels`, always the one requested
    pub colorspace: ColorSpace,
    /// Interleaved pixels, rows top to bottom
    pub pixels:     Vec<u8>
}

/// Decode `bytes` returning pixels with exactly the channels of `requested`
///
/// # Arguments
/// - `bytes`: An encoded PNG, JPEG, BMP or TGA image
/// - `requested`: One of `Luma`, `LumaA`, `RGB` or `RGBA`
/// - `options`: Options forwarded to the format decoder
///
/// # Errors
/// - [`ImageErrors::UnsupportedColorspace`] if `requested` is not one of the four layouts
/// - [`ImageErrors::ImageDecoderNotImplemented`] if the format is not recognised
/// - [`ImageErrors::ImageDecodeErrors`] if the format decoder fails
pub fn decode(
    bytes: &[u8], requested: ColorSpace, options: &DecoderOptions
) -> Result<DecodedImage, ImageErrors> {
    let native = decode_native(bytes, requested, *options)?;
    let (format, width, height) = (native.format, native.width, native.height);

    let pixels = match requested {
        ColorSpace::Luma => native.into_image::<Gray>()?.into_raw(),
        ColorSpace::LumaA => native.into_image::<GrayAlpha>()?.into_raw(),
        ColorSpace::RGB => native.into_image::<Rgb>()?.into_raw(),
        ColorSpace::RGBA => native.into_image::<Rgba>()?.into_raw(),
        colorspace => return Err(ImageErrors::UnsupportedColorspace(colorspace))
    };

    Ok(DecodedImage {
        format,
        width,
        height,
        colorspace: requested,
        pixels
    })
}

/// Information about an encoded image
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ImageInfo {
    pub format:     ImageFormat,
    pub width:      usize,
    pub height:     usize,
    /// Layout the decoder produces for this image
    pub colorspace: ColorSpace
}

impl ImageInfo {
    pub fn channels(&self) -> usize {
        self.colorspace.num_components()
    }
}

/// Decode `bytes` and describe the image found
pub fn probe(bytes: &[u8], options: &DecoderOptions) -> Result<ImageInfo, ImageErrors> {
    let native = decode_native(bytes, ColorSpace::RGB, *options)?;

    Ok(ImageInfo {
        format:     native.format,
        width:      native.width,
        height:     native.height,
        colorspace: native.colorspace
    })
}

/// Encode interleaved 8-bit pixels into `format`
///
/// # Arguments
/// - `pixels`: `width * height * colorspace.num_components()` bytes, rows top to bottom
/// - `colorspace`: One of `Luma`, `LumaA`, `RGB` or `RGBA`
/// - `format`: The format to encode into
/// - `options`: Save options, the quality is used by JPEG only
///
/// # Errors
/// - [`ImageErrors::EmptyImage`] if there are no pixels
/// - [`ImageErrors::BufferSizeMismatch`] if `pixels` has the wrong length
/// - [`ImageErrors::EncodeErrors`] if the format has no encoder or encoding fails
pub fn encode(
    pixels: &[u8], width: usize, height: usize, colorspace: ColorSpace, format: ImageFormat,
    options: &SaveOptions
) -> Result<Vec<u8>, ImageErrors> {
    if colorspace_for_channels(colorspace.num_components()) != Some(colorspace) {
        return Err(ImageErrors::UnsupportedColorspace(colorspace));
    }
    if pixels.is_empty() || width == 0 || height == 0 {
        return Err(ImageErrors::EmptyImage);
    }
    let expected = width
        .checked_mul(height)
        .and_then(|x| x.checked_mul(colorspace.num_components()))
        .ok_or(ImageErrors::DimensionsTooLarge(width, height))?;

    if expected != pixels.len() {
        return Err(ImageErrors::BufferSizeMismatch {
            expected,
            found: pixels.len()
        });
    }
    trace!("Encoding {width}x{height} {colorspace:?} image as {format:?}");

    match format {
        ImageFormat::PNG => png::encode(pixels, width, height, colorspace),
        ImageFormat::JPEG => jpeg::encode(pixels, width, height, colorspace, options.quality()),
        ImageFormat::BMP => bmp::encode(pixels, width, height, colorspace),
        ImageFormat::TGA => tga::encode(pixels, width, height, colorspace),
        ImageFormat::Unknown => Err(ImageErrors::EncodeErrors(ImgEncodeErrors::Generic(
            "Cannot encode to an unknown format".to_string()
        )))
    }
}

// load options
impl<F: PixelFormat + ConvertAny> Image<F> {
    /// Open an encoded file
    ///
    /// The format is determined from the file contents, the pixels are
    /// converted to this image's format.
    ///
    /// # Example
    /// ```no_run
    /// use sandbox_media::ImageRgba;
    ///
    /// let image = ImageRgba::open("/a/file.png").unwrap();
    /// println!("{:?}", image.dimensions());
    /// ```
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Image<F>, ImageErrors> {
        Self::open_with_options(path, LoadOptions::default())
    }

    /// Open an encoded file with the specified options
    pub fn open_with_options<P: AsRef<Path>>(
        path: P, options: LoadOptions
    ) -> Result<Image<F>, ImageErrors> {
        let bytes = std::fs::read(path)?;

        Self::read(&bytes, options)
    }

    /// Decode an image from memory with the specified options
    ///
    /// See [`load_from_memory`](Self::load_from_memory) for the in place variant
    pub fn read(bytes: &[u8], options: LoadOptions) -> Result<Image<F>, ImageErrors> {
        let native = decode_native(bytes, F::colorspace(), options.decoder_options())?;
        let mut image = native.into_image::<F>()?;

        if options.flip_vertically() {
            image.flip_vertically();
        }
        Ok(image)
    }

    /// Replace the contents with the image decoded from the file at `path`
    ///
    /// Existing contents are released first, on failure the image is left empty
    ///
    /// # Arguments
    /// - `path`: The file to read
    /// - `flip`: Whether the decoded rows are flipped vertically
    pub fn load<P: AsRef<Path>>(&mut self, path: P, flip: bool) -> Result<(), ImageErrors> {
        self.load_with_options(path, LoadOptions::default().set_flip_vertically(flip))
    }

    /// Replace the contents with the image decoded from the file at `path`
    /// using the specified options
    pub fn load_with_options<P: AsRef<Path>>(
        &mut self, path: P, options: LoadOptions
    ) -> Result<(), ImageErrors> {
        self.release();

        let path = path.as_ref();

        match Self::open_with_options(path, options) {
            Ok(image) => {
                *self = image;
                Ok(())
            }
            Err(err) => {
                warn!("Could not load {path:?}: {err:?}");
                Err(err)
            }
        }
    }

    /// Replace the contents with the image decoded from `bytes`
    ///
    /// Existing contents are released first, on failure the image is left empty
    pub fn load_from_memory(&mut self, bytes: &[u8], flip: bool) -> Result<(), ImageErrors> {
        self.load_from_memory_with_options(bytes, LoadOptions::default().set_flip_vertically(flip))
    }

    /// Replace the contents with the image decoded from `bytes` using the specified options
    pub fn load_from_memory_with_options(
        &mut self, bytes: &[u8], options: LoadOptions
    ) -> Result<(), ImageErrors> {
        self.release();

        match Self::read(bytes, options) {
            Ok(image) => {
                *self = image;
                Ok(())
            }
            Err(err) => {
                warn!("Could not decode {} bytes: {err:?}", bytes.len());
                Err(err)
            }
        }
    }
}

// save options
impl<F: PixelFormat> Image<F> {
    /// Save the image to a file and use the extension to
    /// determine the format
    ///
    /// If the extension cannot be determined from the path or has no
    /// encoder, it's an error and nothing is written.
    ///
    /// # Examples
    /// ```no_run
    /// use sandbox_media::ImageGray;
    ///
    /// let image = ImageGray::filled(100, 100, [128]).unwrap();
    /// image.save("hello.jpg").unwrap();
    /// ```
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ImageErrors> {
        self.save_with_options(path, SaveOptions::default())
    }

    /// Save the image to a file with the specified options, using the
    /// extension to determine the format
    pub fn save_with_options<P: AsRef<Path>>(
        &self, path: P, options: SaveOptions
    ) -> Result<(), ImageErrors> {
        let format = ImageFormat::from_path(path.as_ref())?;

        self.save_to(path, format, options)
    }

    /// Save the image to a file in `format`, ignoring the extension
    pub fn save_to<P: AsRef<Path>>(
        &self, path: P, format: ImageFormat, options: SaveOptions
    ) -> Result<(), ImageErrors> {
        let bytes = self.encode(format, &options)?;

        std::fs::write(path, bytes)?;

        Ok(())
    }

    pub fn save_as_png<P: AsRef<Path>>(&self, path: P) -> Result<(), ImageErrors> {
        self.save_to(path, ImageFormat::PNG, SaveOptions::default())
    }

    /// Save as JPEG with the given quality, see [`SaveOptions::set_quality`]
    pub fn save_as_jpeg<P: AsRef<Path>>(&self, path: P, quality: u8) -> Result<(), ImageErrors> {
        self.save_to(path, ImageFormat::JPEG, SaveOptions::new_with_quality(quality))
    }

    pub fn save_as_bmp<P: AsRef<Path>>(&self, path: P) -> Result<(), ImageErrors> {
        self.save_to(path, ImageFormat::BMP, SaveOptions::default())
    }

    pub fn save_as_tga<P: AsRef<Path>>(&self, path: P) -> Result<(), ImageErrors> {
        self.save_to(path, ImageFormat::TGA, SaveOptions::default())
    }

    /// Encode the image into `format` returning the encoded bytes
    ///
    /// # Errors
    /// [`ImageErrors::EmptyImage`] if the image holds no pixels
    pub fn encode(&self, format: ImageFormat, options: &SaveOptions) -> Result<Vec<u8>, ImageErrors> {
        if self.is_empty() {
            return Err(ImageErrors::EmptyImage);
        }
        encode(
            self.as_bytes(),
            self.width(),
            self.height(),
            F::colorspace(),
            format,
            options
        )
    }
}

#[cfg(test)]
mod tests {
    use zune_core::colorspace::ColorSpace;
    use zune_core::options::DecoderOptions;

    use crate::codecs::{decode, encode, guess_format, probe, ImageFormat, NativeImage};
    use crate::errors::{ImageErrors, ImgEncodeErrors};
    use crate::image::{ImageGray, ImageRgb, ImageRgba};
    use crate::options::{LoadOptions, SaveOptions};

    #[test]
    fn native_layout_from_buffer_length() {
        let native = NativeImage::new(ImageFormat::PNG, 2, 1, vec![0; 6]).unwrap();
        assert_eq!(native.colorspace, ColorSpace::RGB);

        let five = NativeImage::new(ImageFormat::PNG, 1, 1, vec![0; 5]);
        assert!(matches!(five, Err(ImageErrors::ImageDecodeErrors(_))));

        let partial = NativeImage::new(ImageFormat::BMP, 2, 2, vec![0; 7]);
        assert!(matches!(partial, Err(ImageErrors::ImageDecodeErrors(_))));
    }

    #[test]
    fn extensions_are_case_insensitive() {
        assert_eq!(ImageFormat::from_extension("PNG"), Some(ImageFormat::PNG));
        assert_eq!(ImageFormat::from_extension("Jpeg"), Some(ImageFormat::JPEG));
        assert_eq!(ImageFormat::from_extension("jpg"), Some(ImageFormat::JPEG));
        assert_eq!(ImageFormat::from_extension("bmp"), Some(ImageFormat::BMP));
        assert_eq!(ImageFormat::from_extension("TGA"), Some(ImageFormat::TGA));
        assert_eq!(ImageFormat::from_extension("gif"), None);
    }

    #[test]
    fn paths_map_to_formats() {
        assert_eq!(ImageFormat::from_path("a/b/c.PnG").unwrap(), ImageFormat::PNG);
        assert!(matches!(
            ImageFormat::from_path("no_extension"),
            Err(ImageErrors::EncodeErrors(ImgEncodeErrors::NoExtension))
        ));
        assert!(matches!(
            ImageFormat::from_path("image.webp"),
            Err(ImageErrors::EncodeErrors(ImgEncodeErrors::NoEncoderForExtension(_)))
        ));
    }

    #[test]
    fn guess_rejects_garbage() {
        assert_eq!(guess_format(&[]), None);
        assert_eq!(guess_format(b"hello world, not an image"), None);
        assert_eq!(guess_format(&[0xff, 0xd8, 0xff, 0xe0]), Some(ImageFormat::JPEG));
    }

    #[test]
    fn every_format_is_recognised() {
        let image = ImageRgb::from_fn(5, 3, |x, y| [x as u8, y as u8, 9]).unwrap();

        for format in [
            ImageFormat::PNG,
            ImageFormat::JPEG,
            ImageFormat::BMP,
            ImageFormat::TGA
        ] {
            let bytes = image.encode(format, &SaveOptions::default()).unwrap();
            assert_eq!(guess_format(&bytes), Some(format));

            let info = probe(&bytes, &DecoderOptions::default()).unwrap();
            assert_eq!(info.format, format);
            assert_eq!((info.width, info.height), (5, 3));
        }
    }

    #[test]
    fn lossless_formats_round_trip() {
        let image = ImageRgba::from_fn(9, 7, |x, y| {
            [(x * 20) as u8, (y * 30) as u8, (x ^ y) as u8, (x * y) as u8]
        })
        .unwrap();

        for format in [ImageFormat::PNG, ImageFormat::BMP, ImageFormat::TGA] {
            assert!(format.is_lossless_for(ColorSpace::RGBA));

            let bytes = image.encode(format, &SaveOptions::default()).unwrap();
            let decoded = ImageRgba::read(&bytes, LoadOptions::default()).unwrap();

            assert_eq!(decoded, image, "{format:?}");
        }
    }

    #[test]
    fn decode_adapts_channels() {
        let gray = ImageGray::from_fn(4, 4, |x, y| [(x * 50 + y) as u8]).unwrap();
        let bytes = gray.encode(ImageFormat::PNG, &SaveOptions::default()).unwrap();

        let rgba = decode(&bytes, ColorSpace::RGBA, &DecoderOptions::default()).unwrap();

        assert_eq!(rgba.colorspace, ColorSpace::RGBA);
        assert_eq!(rgba.pixels.len(), 4 * 4 * 4);
        assert_eq!(&rgba.pixels[4..8], &[50, 50, 50, 255]);

        assert!(matches!(
            decode(&bytes, ColorSpace::YCbCr, &DecoderOptions::default()),
            Err(ImageErrors::UnsupportedColorspace(ColorSpace::YCbCr))
        ));
    }

    #[test]
    fn empty_input_fails() {
        assert!(matches!(
            decode(&[], ColorSpace::RGB, &DecoderOptions::default()),
            Err(ImageErrors::ImageDecoderNotImplemented(ImageFormat::Unknown))
        ));
    }

    #[test]
    fn encode_validates_input() {
        let options = SaveOptions::default();

        assert!(matches!(
            encode(&[], 0, 0, ColorSpace::RGB, ImageFormat::PNG, &options),
            Err(ImageErrors::EmptyImage)
        ));
        assert!(matches!(
            encode(&[0; 5], 2, 1, ColorSpace::RGB, ImageFormat::PNG, &options),
            Err(ImageErrors::BufferSizeMismatch { expected: 6, found: 5 })
        ));
        assert!(encode(&[0; 6], 2, 1, ColorSpace::RGB, ImageFormat::Unknown, &options).is_err());
        assert!(ImageRgb::default()
            .encode(ImageFormat::PNG, &options)
            .is_err());
    }

    #[test]
    fn flip_on_load() {
        let image = ImageGray::from_fn(2, 3, |_, y| [y as u8]).unwrap();
        let bytes = image.encode(ImageFormat::PNG, &SaveOptions::default()).unwrap();

        let mut flipped = ImageGray::default();
        flipped.load_from_memory(&bytes, true).unwrap();
        assert_eq!(flipped.pixel_at(0, 0).unwrap(), [2]);

        // the flag does not stick between calls
        flipped.load_from_memory(&bytes, false).unwrap();
        assert_eq!(flipped.pixel_at(0, 0).unwrap(), [0]);
    }

    #[test]
    fn failed_load_leaves_image_empty() {
        let mut image = ImageRgba::filled(4, 4, [1, 2, 3, 4]).unwrap();

        assert!(image.load_from_memory(b"garbage bytes", false).is_err());
        assert!(image.is_empty());
        assert_eq!(image.dimensions(), (0, 0));

        let mut image = ImageRgba::filled(4, 4, [1, 2, 3, 4]).unwrap();
        assert!(image.load("/this/file/does/not/exist.png", false).is_err());
        assert!(image.is_empty());
    }
}
