/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Borrowed views of a single scanline
//!
//! A row view cannot outlive the image it was taken from, the borrow checker
//! ties it to the borrow of the image, so a view can never observe a released
//! or reallocated buffer.
use std::ops::{Index, IndexMut};

use crate::errors::ImageErrors;
use crate::format::PixelFormat;

/// A read only view of one row of an image
#[derive(Debug, Copy, Clone)]
pub struct RowView<'a, F: PixelFormat> {
    pixels: &'a [F::Pixel],
    y:      usize,
    height: usize
}

/// A read-write view of one row of an image
#[derive(Debug)]
pub struct RowViewMut<'a, F: PixelFormat> {
    pixels: &'a mut [F::Pixel],
    y:      usize,
    height: usize
}

impl<'a, F: PixelFormat> RowView<'a, F> {
    pub(crate) fn new(pixels: &'a [F::Pixel], y: usize, height: usize) -> RowView<'a, F> {
        RowView { pixels, y, height }
    }
    /// Number of pixels in the row
    pub const fn width(&self) -> usize {
        self.pixels.len()
    }
    /// Index of this row inside its image
    pub const fn y(&self) -> usize {
        self.y
    }
    /// Return the pixel at `x`
    ///
    /// # Errors
    /// [`ImageErrors::OutOfBounds`] if `x` is not less than the row width
    pub fn pixel_at(&self, x: usize) -> Result<F::Pixel, ImageErrors> {
        self.get(x).copied().ok_or_else(|| ImageErrors::OutOfBounds {
            x,
            y: self.y,
            width: self.width(),
            height: self.height
        })
    }
    /// Return a reference to the pixel at `x` or `None` if out of bounds
    pub fn get(&self, x: usize) -> Option<&'a F::Pixel> {
        self.pixels.get(x)
    }
    pub fn as_slice(&self) -> &'a [F::Pixel] {
        self.pixels
    }
    /// The row as interleaved bytes, `width * channels` long
    pub fn as_bytes(&self) -> &'a [u8] {
        bytemuck::cast_slice(self.pixels)
    }
}

impl<'a, F: PixelFormat> RowViewMut<'a, F> {
    pub(crate) fn new(pixels: &'a mut [F::Pixel], y: usize, height: usize) -> RowViewMut<'a, F> {
        RowViewMut { pixels, y, height }
    }
    /// Number of pixels in the row
    pub fn width(&self) -> usize {
        self.pixels.len()
    }
    /// Index of this row inside its image
    pub const fn y(&self) -> usize {
        self.y
    }
    /// Return the pixel at `x`
    ///
    /// # Errors
    /// [`ImageErrors::OutOfBounds`] if `x` is not less than the row width
    pub fn pixel_at(&self, x: usize) -> Result<F::Pixel, ImageErrors> {
        self.get(x).copied().ok_or_else(|| self.out_of_bounds(x))
    }
    /// Overwrite the pixel at `x`
    ///
    /// # Errors
    /// [`ImageErrors::OutOfBounds`] if `x` is not less than the row width,
    /// the row is left untouched
    pub fn set_pixel(&mut self, x: usize, pixel: F::Pixel) -> Result<(), ImageErrors> {
        let err = self.out_of_bounds(x);

        match self.pixels.get_mut(x) {
            Some(px) => {
                *px = pixel;
                Ok(())
            }
            None => Err(err)
        }
    }
    pub fn get(&self, x: usize) -> Option<&F::Pixel> {
        self.pixels.get(x)
    }
    pub fn get_mut(&mut self, x: usize) -> Option<&mut F::Pixel> {
        self.pixels.get_mut(x)
    }
    /// Set every pixel in the row to `pixel`
    pub fn fill(&mut self, pixel: F::Pixel) {
        self.pixels.fill(pixel);
    }
    pub fn as_slice(&self) -> &[F::Pixel] {
        &*self.pixels
    }
    pub fn as_mut_slice(&mut self) -> &mut [F::Pixel] {
        &mut *self.pixels
    }
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&*self.pixels)
    }
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        bytemuck::cast_slice_mut(&mut *self.pixels)
    }
    /// Downgrade to a read only view
    pub fn as_row_view(&self) -> RowView<'_, F> {
        RowView::new(&*self.pixels, self.y, self.height)
    }

    fn out_of_bounds(&self, x: usize) -> ImageErrors {
        ImageErrors::OutOfBounds {
            x,
            y: self.y,
            width: self.width(),
            height: self.height
        }
    }
}

impl<'a, F: PixelFormat> Index<usize> for RowView<'a, F> {
    type Output = F::Pixel;

    fn index(&self, index: usize) -> &Self::Output {
        &self.pixels[index]
    }
}

impl<'a, F: PixelFormat> Index<usize> for RowViewMut<'a, F> {
    type Output = F::Pixel;

    fn index(&self, index: usize) -> &Self::Output {
        &self.pixels[index]
    }
}

impl<'a, F: PixelFormat> IndexMut<usize> for RowViewMut<'a, F> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.pixels[index]
    }
}

#[cfg(test)]
mod tests {
    use crate::errors::ImageErrors;
    use crate::format::{Gray, Rgb};
    use crate::row::{RowView, RowViewMut};

    #[test]
    fn read_row_bounds() {
        let pixels = [[1_u8, 2, 3], [4, 5, 6]];
        let row = RowView::<Rgb>::new(&pixels, 3, 10);

        assert_eq!(row.width(), 2);
        assert_eq!(row.pixel_at(1).unwrap(), [4, 5, 6]);
        assert_eq!(row[0], [1, 2, 3]);
        assert!(row.get(2).is_none());
        assert!(matches!(
            row.pixel_at(2),
            Err(ImageErrors::OutOfBounds { x: 2, y: 3, width: 2, height: 10 })
        ));
        assert_eq!(row.as_bytes(), &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    #[should_panic]
    fn index_past_end_panics() {
        let pixels = [[0_u8]; 4];
        let row = RowView::<Gray>::new(&pixels, 0, 1);
        let px = row[4];
        assert_eq!(px, [0]);
    }

    #[test]
    fn write_row() {
        let mut pixels = [[0_u8]; 4];
        {
            let mut row = RowViewMut::<Gray>::new(&mut pixels, 0, 1);
            row.set_pixel(1, [9]).unwrap();
            row[3] = [7];
            assert!(row.set_pixel(4, [1]).is_err());
            assert_eq!(row.as_row_view().pixel_at(3).unwrap(), [7]);
        }
        assert_eq!(pixels, [[0], [9], [0], [7]]);

        RowViewMut::<Gray>::new(&mut pixels, 0, 1).fill([5]);
        assert_eq!(pixels, [[5]; 4]);
    }
}
