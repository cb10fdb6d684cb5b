// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/crop.rs
//
// Square crop region plus the two pixel operations: extract and blank.

use image::{DynamicImage, GenericImage, GenericImageView, ImageBuffer, Pixel, Primitive, Rgba};
use thiserror::Error;

/// Square region in source-image pixel coordinates.
///
/// The corner may be negative while the user is still positioning the
/// selector; bounds are only checked by [`extract`] and [`blank`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRegion {
    pub x: i32,
    pub y: i32,
    pub size: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CropError {
    #[error("selection {size}px at ({x}, {y}) overhangs the {width}x{height} image")]
    OutOfBounds {
        x: i32,
        y: i32,
        size: u32,
        width: u32,
        height: u32,
    },
}

impl CropRegion {
    pub fn new(x: i32, y: i32, size: u32) -> Self {
        Self { x, y, size }
    }

    /// Validate against an image of `width` x `height` and return the
    /// region as unsigned pixel coordinates.
    ///
    /// The right and bottom edges must stay strictly inside the image, so a
    /// region that ends exactly on the border is rejected too.
    pub fn within(&self, width: u32, height: u32) -> Result<(u32, u32, u32), CropError> {
        let right = i64::from(self.x) + i64::from(self.size);
        let bottom = i64::from(self.y) + i64::from(self.size);

        if self.x < 0
            || self.y < 0
            || right >= i64::from(width)
            || bottom >= i64::from(height)
        {
            return Err(CropError::OutOfBounds {
                x: self.x,
                y: self.y,
                size: self.size,
                width,
                height,
            });
        }

        Ok((self.x.unsigned_abs(), self.y.unsigned_abs(), self.size))
    }
}

/// Copy the region out of `image`, keeping its pixel format.
pub fn extract(image: &DynamicImage, region: CropRegion) -> Result<DynamicImage, CropError> {
    let (width, height) = image.dimensions();
    let (x, y, size) = region.within(width, height)?;
    Ok(image.crop_imm(x, y, size, size))
}

/// Overwrite the region with opaque white in place.
///
/// Nothing is written when the region does not fit the image.
pub fn blank(image: &mut DynamicImage, region: CropRegion) -> Result<(), CropError> {
    let (width, height) = image.dimensions();
    let (x, y, size) = region.within(width, height)?;

    match image {
        DynamicImage::ImageLuma8(buf) => fill_white(buf, x, y, size),
        DynamicImage::ImageLumaA8(buf) => fill_white(buf, x, y, size),
        DynamicImage::ImageRgb8(buf) => fill_white(buf, x, y, size),
        DynamicImage::ImageRgba8(buf) => fill_white(buf, x, y, size),
        DynamicImage::ImageLuma16(buf) => fill_white(buf, x, y, size),
        DynamicImage::ImageLumaA16(buf) => fill_white(buf, x, y, size),
        DynamicImage::ImageRgb16(buf) => fill_white(buf, x, y, size),
        DynamicImage::ImageRgba16(buf) => fill_white(buf, x, y, size),
        DynamicImage::ImageRgb32F(buf) => fill_white(buf, x, y, size),
        DynamicImage::ImageRgba32F(buf) => fill_white(buf, x, y, size),
        other => {
            for py in y..y + size {
                for px in x..x + size {
                    other.put_pixel(px, py, Rgba([u8::MAX; 4]));
                }
            }
        }
    }

    Ok(())
}

/// Row-wise fill; every channel (alpha included) is set to its maximum.
fn fill_white<P: Pixel>(buf: &mut ImageBuffer<P, Vec<P::Subpixel>>, x: u32, y: u32, size: u32) {
    let channels = vec![P::Subpixel::DEFAULT_MAX_VALUE; usize::from(P::CHANNEL_COUNT)];
    let white = *P::from_slice(&channels);

    for row in buf.rows_mut().skip(y as usize).take(size as usize) {
        for pixel in row.skip(x as usize).take(size as usize) {
            *pixel = white;
        }
    }
}
