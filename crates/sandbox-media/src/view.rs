/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Read only views over whole images
//!
//! [`View`] keeps the pixel format in its type, [`ImageView`] erases it and
//! carries the channel count at runtime so that code handling any of the four
//! formats can share one signature.
use crate::errors::ImageErrors;
use crate::format::{Gray, GrayAlpha, PixelFormat, Rgb, Rgba};
use crate::image::Image;
use crate::row::RowView;

/// A typed, read only view of an image
#[derive(Debug, Copy, Clone)]
pub struct View<'a, F: PixelFormat> {
    width:  usize,
    height: usize,
    pixels: &'a [F::Pixel]
}

pub type ViewGray<'a> = View<'a, Gray>;
pub type ViewGrayAlpha<'a> = View<'a, GrayAlpha>;
pub type ViewRgb<'a> = View<'a, Rgb>;
pub type ViewRgba<'a> = View<'a, Rgba>;

impl<'a, F: PixelFormat> View<'a, F> {
    /// Create a view over raw pixels
    ///
    /// `(0, 0)` describes an empty view.
    ///
    /// # Errors
    /// - [`ImageErrors::ZeroDimensions`] if exactly one dimension is zero
    /// - [`ImageErrors::BufferSizeMismatch`] if `pixels` does not hold exactly
    ///   `width * height` pixels
    pub fn new(width: usize, height: usize, pixels: &'a [F::Pixel]) -> Result<View<'a, F>, ImageErrors> {
        if (width == 0) != (height == 0) {
            return Err(ImageErrors::ZeroDimensions);
        }
        let expected = width
            .checked_mul(height)
            .ok_or(ImageErrors::DimensionsTooLarge(width, height))?;

        if expected != pixels.len() {
            return Err(ImageErrors::BufferSizeMismatch {
                expected: expected * F::CHANNELS,
                found:    pixels.len() * F::CHANNELS
            });
        }
        Ok(View {
            width,
            height,
            pixels
        })
    }
    pub const fn width(&self) -> usize {
        self.width
    }
    pub const fn height(&self) -> usize {
        self.height
    }
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }
    pub const fn channels(&self) -> usize {
        F::CHANNELS
    }
    /// Number of pixels, `width * height`
    pub const fn pixel_count(&self) -> usize {
        self.width * self.height
    }
    /// Number of bytes, `width * height * channels`
    pub const fn data_size(&self) -> usize {
        self.pixel_count() * F::CHANNELS
    }
    /// Returns true if the view covers at least one pixel
    pub const fn has_data(&self) -> bool {
        !self.pixels.is_empty()
    }
    /// Return the pixel at `(x,y)`
    ///
    /// # Errors
    /// [`ImageErrors::OutOfBounds`] if the coordinate lies outside the view
    pub fn pixel_at(&self, x: usize, y: usize) -> Result<F::Pixel, ImageErrors> {
        if x >= self.width || y >= self.height {
            return Err(ImageErrors::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height
            });
        }
        Ok(self.pixels[y * self.width + x])
    }
    /// Return row `y`
    ///
    /// # Errors
    /// [`ImageErrors::RowOutOfBounds`] if `y` is not less than the height
    pub fn row(&self, y: usize) -> Result<RowView<'a, F>, ImageErrors> {
        if y >= self.height {
            return Err(ImageErrors::RowOutOfBounds {
                y,
                height: self.height
            });
        }
        let start = y * self.width;

        Ok(RowView::new(
            &self.pixels[start..start + self.width],
            y,
            self.height
        ))
    }
    /// Iterate over all rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = RowView<'a, F>> + 'a {
        let height = self.height;
        let pixels = self.pixels;

        pixels
            .chunks_exact(self.width.max(1))
            .enumerate()
            .map(move |(y, row)| RowView::new(row, y, height))
    }
    pub const fn pixels(&self) -> &'a [F::Pixel] {
        self.pixels
    }
    pub fn as_bytes(&self) -> &'a [u8] {
        bytemuck::cast_slice(self.pixels)
    }
}

impl<'a, F: PixelFormat> From<&'a Image<F>> for View<'a, F> {
    fn from(image: &'a Image<F>) -> Self {
        View {
            width:  image.width(),
            height: image.height(),
            pixels: image.pixels()
        }
    }
}

/// A format erased, read only view of an image
///
/// Pixels are returned as byte slices of `channels` length
#[derive(Debug, Copy, Clone)]
pub struct ImageView<'a> {
    width:    usize,
    height:   usize,
    channels: usize,
    data:     &'a [u8]
}

impl<'a> ImageView<'a> {
    /// Create a view over interleaved bytes
    ///
    /// # Errors
    /// - [`ImageErrors::ChannelMismatch`] if `channels` is not in `1..=4`
    /// - [`ImageErrors::ZeroDimensions`] if exactly one dimension is zero
    /// - [`ImageErrors::BufferSizeMismatch`] if `data` is not `width*height*channels` bytes
    pub fn new(
        width: usize, height: usize, channels: usize, data: &'a [u8]
    ) -> Result<ImageView<'a>, ImageErrors> {
        if !(1..=4).contains(&channels) {
            return Err(ImageErrors::ChannelMismatch {
                expected: 4,
                found:    channels
            });
        }
        if (width == 0) != (height == 0) {
            return Err(ImageErrors::ZeroDimensions);
        }
        let expected = width
            .checked_mul(height)
            .and_then(|x| x.checked_mul(channels))
            .ok_or(ImageErrors::DimensionsTooLarge(width, height))?;

        if expected != data.len() {
            return Err(ImageErrors::BufferSizeMismatch {
                expected,
                found: data.len()
            });
        }
        Ok(ImageView {
            width,
            height,
            channels,
            data
        })
    }
    pub const fn width(&self) -> usize {
        self.width
    }
    pub const fn height(&self) -> usize {
        self.height
    }
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }
    pub const fn channels(&self) -> usize {
        self.channels
    }
    pub const fn pixel_count(&self) -> usize {
        self.width * self.height
    }
    pub const fn data_size(&self) -> usize {
        self.pixel_count() * self.channels
    }
    pub const fn has_data(&self) -> bool {
        !self.data.is_empty()
    }
    /// Return the bytes of the pixel at `(x,y)`
    ///
    /// # Errors
    /// [`ImageErrors::OutOfBounds`] if the coordinate lies outside the view
    pub fn pixel_at(&self, x: usize, y: usize) -> Result<&'a [u8], ImageErrors> {
        if x >= self.width || y >= self.height {
            return Err(ImageErrors::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height
            });
        }
        let start = (y * self.width + x) * self.channels;

        Ok(&self.data[start..start + self.channels])
    }
    /// Return the bytes of row `y`, `width * channels` long
    ///
    /// # Errors
    /// [`ImageErrors::RowOutOfBounds`] if `y` is not less than the height
    pub fn row(&self, y: usize) -> Result<&'a [u8], ImageErrors> {
        if y >= self.height {
            return Err(ImageErrors::RowOutOfBounds {
                y,
                height: self.height
            });
        }
        let stride = self.width * self.channels;

        Ok(&self.data[y * stride..(y + 1) * stride])
    }
    pub const fn as_bytes(&self) -> &'a [u8] {
        self.data
    }
}

impl<'a, F: PixelFormat> From<&'a Image<F>> for ImageView<'a> {
    fn from(image: &'a Image<F>) -> Self {
        ImageView {
            width:    image.width(),
            height:   image.height(),
            channels: F::CHANNELS,
            data:     image.as_bytes()
        }
    }
}

impl<'a, F: PixelFormat> From<View<'a, F>> for ImageView<'a> {
    fn from(view: View<'a, F>) -> Self {
        ImageView {
            width:    view.width,
            height:   view.height,
            channels: F::CHANNELS,
            data:     view.as_bytes()
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::errors::ImageErrors;
    use crate::format::{Gray, Rgb};
    use crate::image::{ImageGray, ImageRgb};
    use crate::view::{ImageView, View, ViewRgb};

    #[test]
    fn typed_view_matches_image() {
        let image = ImageRgb::from_fn(4, 3, |x, y| [x as u8, y as u8, 7]).unwrap();
        let view = ViewRgb::from(&image);

        assert_eq!(view.dimensions(), (4, 3));
        assert_eq!(view.pixel_count(), 12);
        assert_eq!(view.data_size(), 36);
        assert!(view.has_data());
        assert_eq!(view.pixel_at(3, 2).unwrap(), [3, 2, 7]);
        assert_eq!(view.row(1).unwrap().pixel_at(2).unwrap(), [2, 1, 7]);
        assert_eq!(view.rows().count(), 3);
    }

    #[test]
    fn typed_view_bounds() {
        let image = ImageRgb::new(2, 2).unwrap();
        let view = image.view();

        assert!(matches!(
            view.pixel_at(2, 0),
            Err(ImageErrors::OutOfBounds { .. })
        ));
        assert!(matches!(
            view.row(2),
            Err(ImageErrors::RowOutOfBounds { y: 2, height: 2 })
        ));
    }

    #[test]
    fn empty_view_has_no_data() {
        let image = ImageRgb::default();
        let view = image.view();

        assert!(!view.has_data());
        assert_eq!(view.pixel_count(), 0);
        assert_eq!(view.rows().count(), 0);
        assert!(!image.image_view().has_data());
    }

    #[test]
    fn raw_view_size_is_checked() {
        let pixels = [[0_u8; 3]; 5];
        assert!(View::<Rgb>::new(2, 2, &pixels).is_err());
        assert!(View::<Rgb>::new(5, 1, &pixels).is_ok());

        assert!(ImageView::new(2, 2, 5, &[0; 20]).is_err());
        assert!(ImageView::new(2, 2, 3, &[0; 11]).is_err());
    }

    #[test]
    fn raw_view_rejects_one_zero_dimension() {
        assert!(matches!(View::<Gray>::new(0, 5, &[]), Err(ImageErrors::ZeroDimensions)));
        assert!(matches!(View::<Gray>::new(5, 0, &[]), Err(ImageErrors::ZeroDimensions)));
        assert!(matches!(ImageView::new(0, 3, 1, &[]), Err(ImageErrors::ZeroDimensions)));

        let empty = View::<Gray>::new(0, 0, &[]).unwrap();
        assert!(!empty.has_data());
        assert!(ImageView::new(0, 0, 2, &[]).is_ok());
    }

    #[test]
    fn erased_view_pixels() {
        let mut image = ImageGray::new(3, 2).unwrap();
        image.set_pixel(1, 1, [200]).unwrap();

        let view = ImageView::from(&image);

        assert_eq!(view.channels(), 1);
        assert_eq!(view.data_size(), 6);
        assert_eq!(view.pixel_at(1, 1).unwrap(), &[200]);
        assert_eq!(view.row(1).unwrap(), &[0, 200, 0]);
        assert!(view.pixel_at(0, 2).is_err());

        let typed = ImageView::from(image.view());
        assert_eq!(typed.as_bytes(), view.as_bytes());
    }
}
