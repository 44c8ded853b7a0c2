/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! This module represents a single image
//!
//! An image is a rectangle of `width * height` pixels of one [pixel format](crate::format),
//! stored row major, top row first, channels interleaved.
//!
//! An image is either
//! - empty: zero width, zero height and no storage, or
//! - allocated: non-zero width and height and exactly `width * height * channels` bytes
//!
//! Every operation keeps one of the two states, operations that fail part way
//! leave the image empty instead of half initialized.
use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;

use zune_core::colorspace::ColorSpace;
use zune_core::log::trace;

use crate::conversion::ConvertPixel;
use crate::errors::ImageErrors;
use crate::format::{Gray, GrayAlpha, PixelFormat, Rgb, Rgba};
use crate::row::{RowView, RowViewMut};
use crate::view::{ImageView, View};

/// An owned 8-bit image in pixel format `F`
///
/// `Default` is the empty image, `Clone` is a deep copy, moving the value moves
/// the storage. Use [`take`](Self::take) to move the storage out of a borrowed
/// image, leaving it empty.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Image<F: PixelFormat> {
    width:   usize,
    height:  usize,
    data:    Vec<u8>,
    _format: PhantomData<F>
}

/// A single channel image
pub type ImageGray = Image<Gray>;
/// A luminance and alpha image
pub type ImageGrayAlpha = Image<GrayAlpha>;
/// A three channel colour image
pub type ImageRgb = Image<Rgb>;
/// A four channel colour image with straight alpha
pub type ImageRgba = Image<Rgba>;

/// Compute `width * height * channels`, failing on zero or overflowing sizes
fn checked_size(width: usize, height: usize, channels: usize) -> Result<usize, ImageErrors> {
    if width == 0 || height == 0 {
        return Err(ImageErrors::ZeroDimensions);
    }
    width
        .checked_mul(height)
        .and_then(|x| x.checked_mul(channels))
        .ok_or(ImageErrors::DimensionsTooLarge(width, height))
}

/// Allocate `size` zeroed bytes, reporting allocator failure as an error
fn allocate_zeroed(size: usize) -> Result<Vec<u8>, ImageErrors> {
    let mut data = Vec::new();

    data.try_reserve_exact(size)
        .map_err(|_| ImageErrors::AllocationFailed(size))?;
    data.resize(size, 0);

    Ok(data)
}

impl<F: PixelFormat> Image<F> {
    /// Create a new image of the given dimensions with every byte set to zero
    ///
    /// # Errors
    /// - [`ImageErrors::ZeroDimensions`] if either dimension is zero
    /// - [`ImageErrors::DimensionsTooLarge`] if the byte size overflows
    /// - [`ImageErrors::AllocationFailed`] if memory could not be obtained
    pub fn new(width: usize, height: usize) -> Result<Image<F>, ImageErrors> {
        let size = checked_size(width, height, F::CHANNELS)?;

        Ok(Image {
            width,
            height,
            data: allocate_zeroed(size)?,
            _format: PhantomData
        })
    }

    /// Create an image adopting an existing interleaved buffer
    ///
    /// # Errors
    /// - [`ImageErrors::ZeroDimensions`] if either dimension is zero
    /// - [`ImageErrors::BufferSizeMismatch`] if `data` is not `width * height * channels` long
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Result<Image<F>, ImageErrors> {
        let size = checked_size(width, height, F::CHANNELS)?;

        if data.len() != size {
            return Err(ImageErrors::BufferSizeMismatch {
                expected: size,
                found:    data.len()
            });
        }
        Ok(Image {
            width,
            height,
            data,
            _format: PhantomData
        })
    }

    /// Create an image with every pixel set to `pixel`
    pub fn filled(width: usize, height: usize, pixel: F::Pixel) -> Result<Image<F>, ImageErrors> {
        let mut image = Image::new(width, height)?;
        image.fill(pixel);

        Ok(image)
    }

    /// Create an image from a function called once per pixel with its `(x,y)` coordinates
    ///
    /// # Example
    /// ```
    /// use sandbox_media::ImageGray;
    ///
    /// let gradient = ImageGray::from_fn(256, 1, |x, _| [x as u8]).unwrap();
    /// assert_eq!(gradient.pixel_at(100, 0).unwrap(), [100]);
    /// ```
    pub fn from_fn<G>(width: usize, height: usize, mut func: G) -> Result<Image<F>, ImageErrors>
    where
        G: FnMut(usize, usize) -> F::Pixel
    {
        let mut image = Image::new(width, height)?;

        for (y, row) in image.pixels_mut().chunks_exact_mut(width).enumerate() {
            for (x, pixel) in row.iter_mut().enumerate() {
                *pixel = func(x, y);
            }
        }
        Ok(image)
    }

    /// Replace the contents with a zeroed buffer of the given dimensions
    ///
    /// Existing contents are released first, so the image is empty if allocation fails.
    /// Returns the new pixels for the caller to fill
    pub fn allocate(&mut self, width: usize, height: usize) -> Result<&mut [F::Pixel], ImageErrors> {
        self.release();

        let size = checked_size(width, height, F::CHANNELS)?;
        self.data = allocate_zeroed(size)?;
        self.width = width;
        self.height = height;

        Ok(self.pixels_mut())
    }

    /// Drop the storage and reset dimensions, leaving an empty image
    pub fn release(&mut self) {
        self.width = 0;
        self.height = 0;
        self.data = Vec::new();
    }

    /// Move the contents out, leaving `self` empty
    #[must_use]
    pub fn take(&mut self) -> Image<F> {
        std::mem::take(self)
    }

    /// Returns true if the image holds pixel storage
    pub fn is_allocated(&self) -> bool {
        !self.data.is_empty()
    }

    /// Returns true if the image holds no pixels
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Get image dimensions as a tuple of (width,height)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Number of channels per pixel, fixed by the format
    pub const fn channels(&self) -> usize {
        F::CHANNELS
    }

    pub fn colorspace(&self) -> ColorSpace {
        F::colorspace()
    }

    /// Number of pixels, `width * height`
    pub const fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// Number of bytes of pixel data, `width * height * channels`
    pub fn data_size(&self) -> usize {
        self.data.len()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Pixels in row major order
    pub fn pixels(&self) -> &[F::Pixel] {
        bytemuck::cast_slice(&self.data)
    }

    pub fn pixels_mut(&mut self) -> &mut [F::Pixel] {
        bytemuck::cast_slice_mut(&mut self.data)
    }

    /// Consume the image returning its interleaved bytes
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Replace the contents with a deep copy of `other`
    ///
    /// # Errors
    /// - [`ImageErrors::EmptyImage`] if `other` holds no pixels, `self` is left unchanged.
    /// - [`ImageErrors::AllocationFailed`] if the copy cannot be allocated, `self` is
    ///   released and left empty
    pub fn copy_from(&mut self, other: &Image<F>) -> Result<(), ImageErrors> {
        if other.is_empty() {
            return Err(ImageErrors::EmptyImage);
        }
        self.release();

        let mut data = Vec::new();

        data.try_reserve_exact(other.data.len())
            .map_err(|_| ImageErrors::AllocationFailed(other.data.len()))?;
        data.extend_from_slice(&other.data);

        self.data = data;
        self.width = other.width;
        self.height = other.height;

        Ok(())
    }

    /// Replace the contents with `source` converted to this format
    ///
    /// The old contents are released first, so on any error the image is empty.
    ///
    /// # Arguments
    /// - `source`: The image to convert
    /// - `factor_in_alpha`: Whether colour values are scaled by the source alpha,
    ///   see [conversion](crate::conversion)
    ///
    /// # Errors
    /// [`ImageErrors::EmptyImage`] if `source` holds no pixels
    pub fn copy_converted<S: PixelFormat>(
        &mut self, source: &Image<S>, factor_in_alpha: bool
    ) -> Result<(), ImageErrors>
    where
        F: ConvertPixel<S>
    {
        self.release();

        if source.is_empty() {
            return Err(ImageErrors::EmptyImage);
        }
        trace!(
            "Converting {}x{} image from {} to {}",
            source.width,
            source.height,
            S::NAME,
            F::NAME
        );
        let pixels = self.allocate(source.width, source.height)?;

        <F as ConvertPixel<S>>::convert_pixels(source.pixels(), pixels, factor_in_alpha);

        Ok(())
    }

    /// Create a new image holding `source` converted to this format
    ///
    /// # Errors
    /// [`ImageErrors::EmptyImage`] if `source` holds no pixels
    pub fn converted_from<S: PixelFormat>(
        source: &Image<S>, factor_in_alpha: bool
    ) -> Result<Image<F>, ImageErrors>
    where
        F: ConvertPixel<S>
    {
        let mut image = Image::default();
        image.copy_converted(source, factor_in_alpha)?;

        Ok(image)
    }

    /// Convert `source` into this image and release `source`
    ///
    /// After the call `source` is empty whether or not conversion succeeded
    pub fn convert_take<S: PixelFormat>(
        &mut self, source: &mut Image<S>, factor_in_alpha: bool
    ) -> Result<(), ImageErrors>
    where
        F: ConvertPixel<S>
    {
        let result = self.copy_converted(source, factor_in_alpha);
        source.release();

        result
    }

    fn out_of_bounds(&self, x: usize, y: usize) -> ImageErrors {
        ImageErrors::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height
        }
    }

    /// Index of pixel `(x,y)` in [`pixels`](Self::pixels), or an error if out of bounds
    fn pixel_index(&self, x: usize, y: usize) -> Result<usize, ImageErrors> {
        if x >= self.width || y >= self.height {
            return Err(self.out_of_bounds(x, y));
        }
        Ok(y * self.width + x)
    }

    /// Return the pixel at `(x,y)`
    ///
    /// # Errors
    /// [`ImageErrors::OutOfBounds`] if `x >= width` or `y >= height`
    pub fn pixel_at(&self, x: usize, y: usize) -> Result<F::Pixel, ImageErrors> {
        let index = self.pixel_index(x, y)?;

        Ok(self.pixels()[index])
    }

    /// Overwrite the pixel at `(x,y)`
    ///
    /// # Errors
    /// [`ImageErrors::OutOfBounds`] if `x >= width` or `y >= height`, nothing is written
    pub fn set_pixel(&mut self, x: usize, y: usize, pixel: F::Pixel) -> Result<(), ImageErrors> {
        let index = self.pixel_index(x, y)?;
        self.pixels_mut()[index] = pixel;

        Ok(())
    }

    /// Overwrite the pixel at `(x,y)` from normalized channel values
    ///
    /// Each value is clamped to `0.0..=1.0`, scaled by 255 and truncated.
    ///
    /// # Errors
    /// - [`ImageErrors::ChannelMismatch`] if `values` does not have one entry per channel
    /// - [`ImageErrors::OutOfBounds`] if the coordinate lies outside the image
    pub fn set_pixel_normalized(&mut self, x: usize, y: usize, values: &[f32]) -> Result<(), ImageErrors> {
        if values.len() != F::CHANNELS {
            return Err(ImageErrors::ChannelMismatch {
                expected: F::CHANNELS,
                found:    values.len()
            });
        }
        let mut pixel = F::Pixel::default();

        for (out, value) in pixel.as_mut().iter_mut().zip(values) {
            *out = (value.clamp(0.0, 1.0) * 255.0) as u8;
        }
        self.set_pixel(x, y, pixel)
    }

    /// Fill the `width * height` rectangle whose top left corner is at `(x,y)`
    ///
    /// The rectangle must lie fully inside the image, it is not clipped.
    /// An empty rectangle inside the image is a no-op
    ///
    /// # Errors
    /// [`ImageErrors::RectOutOfBounds`] if any part of the rectangle lies outside
    /// the image, nothing is written
    pub fn fill_rect(
        &mut self, x: usize, y: usize, width: usize, height: usize, pixel: F::Pixel
    ) -> Result<(), ImageErrors> {
        let fits = |start: usize, len: usize, end: usize| start.checked_add(len).map_or(false, |e| e <= end);

        if !fits(x, width, self.width) || !fits(y, height, self.height) {
            return Err(ImageErrors::RectOutOfBounds {
                x,
                y,
                rect_width: width,
                rect_height: height,
                image_width: self.width,
                image_height: self.height
            });
        }
        if width == 0 || height == 0 {
            return Ok(());
        }
        let stride = self.width;

        for row in self
            .pixels_mut()
            .chunks_exact_mut(stride)
            .skip(y)
            .take(height)
        {
            row[x..x + width].fill(pixel);
        }
        Ok(())
    }

    /// Set every pixel to `pixel`, a no-op on an empty image
    pub fn fill(&mut self, pixel: F::Pixel) {
        self.pixels_mut().fill(pixel);
    }

    /// Return row `y`
    ///
    /// # Errors
    /// [`ImageErrors::RowOutOfBounds`] if `y >= height`
    pub fn row(&self, y: usize) -> Result<RowView<'_, F>, ImageErrors> {
        if y >= self.height {
            return Err(ImageErrors::RowOutOfBounds {
                y,
                height: self.height
            });
        }
        let (width, height) = self.dimensions();
        let start = y * width;

        Ok(RowView::new(&self.pixels()[start..start + width], y, height))
    }

    /// Return row `y` for writing
    ///
    /// # Errors
    /// [`ImageErrors::RowOutOfBounds`] if `y >= height`
    pub fn row_mut(&mut self, y: usize) -> Result<RowViewMut<'_, F>, ImageErrors> {
        if y >= self.height {
            return Err(ImageErrors::RowOutOfBounds {
                y,
                height: self.height
            });
        }
        let (width, height) = self.dimensions();
        let start = y * width;

        Ok(RowViewMut::new(
            &mut self.pixels_mut()[start..start + width],
            y,
            height
        ))
    }

    /// Iterate over rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = RowView<'_, F>> {
        let (width, height) = self.dimensions();

        self.pixels()
            .chunks_exact(width.max(1))
            .enumerate()
            .map(move |(y, row)| RowView::new(row, y, height))
    }

    /// Iterate over rows for writing, top to bottom
    pub fn rows_mut(&mut self) -> impl Iterator<Item = RowViewMut<'_, F>> {
        let (width, height) = self.dimensions();

        self.pixels_mut()
            .chunks_exact_mut(width.max(1))
            .enumerate()
            .map(move |(y, row)| RowViewMut::new(row, y, height))
    }

    /// A typed read only view of the whole image
    pub fn view(&self) -> View<'_, F> {
        View::from(self)
    }

    /// A format erased read only view of the whole image
    pub fn image_view(&self) -> ImageView<'_> {
        ImageView::from(self)
    }

    /// Flip the image upside down, the first row becomes the last
    pub fn flip_vertically(&mut self) {
        let stride = self.width * F::CHANNELS;

        if stride == 0 || self.height < 2 {
            return;
        }
        let half = (self.height / 2) * stride;
        let (top, bottom) = self.data.split_at_mut(half);

        for (top_row, bottom_row) in top
            .chunks_exact_mut(stride)
            .zip(bottom.rchunks_exact_mut(stride))
        {
            top_row.swap_with_slice(bottom_row);
        }
    }
}

impl<F: PixelFormat> Debug for Image<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Image")
            .field("format", &F::NAME)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.data.len())
            .finish()
    }
}

impl<'a, F: PixelFormat> IntoIterator for &'a Image<F> {
    type Item = &'a F::Pixel;
    type IntoIter = std::slice::Iter<'a, F::Pixel>;

    fn into_iter(self) -> Self::IntoIter {
        self.pixels().iter()
    }
}
