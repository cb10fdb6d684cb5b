// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/session.rs
//
// One opened source image, its crop counter, and the save workflow.

use std::io;
use std::path::{Path, PathBuf};

use image::{DynamicImage, GenericImageView, ImageError, ImageFormat, ImageReader};
use thiserror::Error;

use super::crop::{self, CropError, CropRegion};
use super::sequence::CropSequence;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Crop(#[from] CropError),

    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to decode {}: {source}", path.display())]
    Decode { path: PathBuf, source: ImageError },

    #[error("failed to write {}: {source}", path.display())]
    Encode { path: PathBuf, source: ImageError },
}

pub type SessionResult<T> = Result<T, SessionError>;

/// Exclusive owner of the source image while it is being cut up.
pub struct CropSession {
    path: PathBuf,
    image: DynamicImage,
    sequence: CropSequence,
}

impl std::fmt::Debug for CropSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CropSession")
            .field("path", &self.path)
            .field("dimensions", &self.image.dimensions())
            .field("sequence", &self.sequence)
            .finish()
    }
}

impl CropSession {
    /// Load `path` and continue its crop numbering.
    ///
    /// The format is sniffed from the content: after the first save the
    /// source holds PNG data whatever its extension says.
    pub fn open(path: &Path) -> SessionResult<Self> {
        let read_err = |source| SessionError::Read {
            path: path.to_path_buf(),
            source,
        };
        let decode_err = |source| SessionError::Decode {
            path: path.to_path_buf(),
            source,
        };

        let image = ImageReader::open(path)
            .map_err(read_err)?
            .with_guessed_format()
            .map_err(read_err)?
            .decode()
            .map_err(decode_err)?;
        let sequence = CropSequence::scan(path).map_err(read_err)?;

        log::info!(
            "opened {} ({}x{}), next crop #{}",
            path.display(),
            image.width(),
            image.height(),
            sequence.counter()
        );

        Ok(Self {
            path: path.to_path_buf(),
            image,
            sequence,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    pub fn sequence(&self) -> &CropSequence {
        &self.sequence
    }

    pub fn set_counter(&mut self, counter: u32) {
        self.sequence.set_counter(counter);
    }

    /// Pixels under `region`, or `None` while it overhangs the image.
    pub fn selection(&self, region: CropRegion) -> Option<DynamicImage> {
        crop::extract(&self.image, region).ok()
    }

    /// Export `region` as the next numbered crop, blank it in the source and
    /// rewrite the source file. Returns the crop's path.
    ///
    /// An out-of-bounds region fails before anything is written or mutated.
    /// The blanked image only replaces the held one once the source file is
    /// rewritten, so a retry after a failed write cuts the same pixels again.
    pub fn save_crop(&mut self, region: CropRegion) -> SessionResult<PathBuf> {
        let cropped = crop::extract(&self.image, region)?;

        let crop_path = self.sequence.output_path();
        write_png(&cropped, &crop_path)?;

        let mut blanked = self.image.clone();
        crop::blank(&mut blanked, region)?;
        write_png(&blanked, &self.path)?;
        self.image = blanked;

        log::info!(
            "saved crop #{} to {}",
            self.sequence.counter(),
            crop_path.display()
        );
        self.sequence.advance();

        Ok(crop_path)
    }
}

/// Encode as PNG regardless of the path's extension.
fn write_png(image: &DynamicImage, path: &Path) -> SessionResult<()> {
    let encode_err = |source| SessionError::Encode {
        path: path.to_path_buf(),
        source,
    };

    let result = match image {
        // PNG has no float samples.
        DynamicImage::ImageRgb32F(_) | DynamicImage::ImageRgba32F(_) => {
            DynamicImage::ImageRgba16(image.to_rgba16()).save_with_format(path, ImageFormat::Png)
        }
        _ => image.save_with_format(path, ImageFormat::Png),
    };

    result.map_err(encode_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use std::fs;
    use tempfile::tempdir;

    fn checkerboard(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| {
            if (x / 4 + y / 4) % 2 == 0 {
                Rgba([20, 40, 60, 255])
            } else {
                Rgba([200, 10, 90, 255])
            }
        })
    }

    fn white_count(image: &DynamicImage) -> usize {
        image
            .to_rgba8()
            .pixels()
            .filter(|p| **p == Rgba([255, 255, 255, 255]))
            .count()
    }

    #[test]
    fn open_starts_counter_at_one() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("photo.png");
        checkerboard(32, 32).save(&source).unwrap();

        let session = CropSession::open(&source).unwrap();
        assert_eq!(session.sequence().counter(), 1);
        assert_eq!(session.dimensions(), (32, 32));
    }

    #[test]
    fn three_saves_write_three_numbered_crops() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("photo.png");
        checkerboard(64, 32).save(&source).unwrap();

        let mut session = CropSession::open(&source).unwrap();
        session.set_counter(5);

        let regions = [
            CropRegion::new(0, 0, 8),
            CropRegion::new(10, 10, 8),
            CropRegion::new(40, 20, 8),
        ];
        for (i, region) in regions.into_iter().enumerate() {
            let written = session.save_crop(region).unwrap();
            assert_eq!(written, dir.path().join(format!("photo_{:03}.png", 5 + i)));

            let crop = image::open(&written).unwrap();
            assert_eq!(crop.dimensions(), (8, 8));

            let on_disk = image::open(&source).unwrap();
            assert_eq!(white_count(&on_disk), 64 * (i + 1));
        }
        assert_eq!(session.sequence().counter(), 8);

        let mut crops: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .filter(|n| n != "photo.png")
            .collect();
        crops.sort();
        assert_eq!(crops, ["photo_005.png", "photo_006.png", "photo_007.png"]);
    }

    #[test]
    fn crop_holds_pixels_from_before_blanking() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("photo.png");
        let original = checkerboard(16, 16);
        original.save(&source).unwrap();

        let mut session = CropSession::open(&source).unwrap();
        let written = session.save_crop(CropRegion::new(2, 3, 5)).unwrap();

        let crop = image::open(written).unwrap().to_rgba8();
        assert_eq!(crop.get_pixel(0, 0), original.get_pixel(2, 3));
        assert_eq!(crop.get_pixel(4, 4), original.get_pixel(6, 7));
        assert_eq!(
            session.image().get_pixel(2, 3),
            Rgba([255, 255, 255, 255])
        );
    }

    #[test]
    fn out_of_bounds_save_changes_nothing() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("photo.png");
        checkerboard(16, 16).save(&source).unwrap();
        let bytes_before = fs::read(&source).unwrap();

        let mut session = CropSession::open(&source).unwrap();
        let before = session.image().clone();

        let err = session.save_crop(CropRegion::new(10, 10, 6)).unwrap_err();
        assert!(matches!(err, SessionError::Crop(CropError::OutOfBounds { .. })));

        assert_eq!(session.sequence().counter(), 1);
        assert_eq!(session.image(), &before);
        assert_eq!(fs::read(&source).unwrap(), bytes_before);
        assert!(!dir.path().join("photo_001.png").exists());
    }

    #[test]
    fn failed_source_write_keeps_image_and_saved_crop() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("photo.png");
        let original = checkerboard(32, 32);
        original.save(&source).unwrap();

        let mut session = CropSession::open(&source).unwrap();
        let before = session.image().clone();

        // A directory in place of the source makes the rewrite fail.
        fs::remove_file(&source).unwrap();
        fs::create_dir(&source).unwrap();

        let region = CropRegion::new(2, 2, 8);
        let crop_path = dir.path().join("photo_001.png");
        for _ in 0..2 {
            let err = session.save_crop(region).unwrap_err();
            assert!(matches!(err, SessionError::Encode { ref path, .. } if path == &source));

            assert_eq!(session.sequence().counter(), 1);
            assert_eq!(session.image(), &before);

            let crop = image::open(&crop_path).unwrap().to_rgba8();
            assert_eq!(crop.get_pixel(1, 1), original.get_pixel(3, 3));
            assert_eq!(crop.get_pixel(7, 7), original.get_pixel(9, 9));
        }

        fs::remove_dir(&source).unwrap();
        session.save_crop(region).unwrap();
        assert_eq!(session.sequence().counter(), 2);
        assert_eq!(session.image().get_pixel(3, 3), Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn reopens_png_data_behind_jpg_name() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("scan.jpg");
        DynamicImage::ImageRgba8(checkerboard(20, 20))
            .to_rgb8()
            .save_with_format(&source, ImageFormat::Jpeg)
            .unwrap();

        let mut session = CropSession::open(&source).unwrap();
        session.save_crop(CropRegion::new(1, 1, 4)).unwrap();
        drop(session);

        let reopened = CropSession::open(&source).unwrap();
        assert_eq!(reopened.sequence().counter(), 2);
        assert_eq!(
            reopened.image().get_pixel(2, 2),
            Rgba([255, 255, 255, 255])
        );
    }

    #[test]
    fn float_images_are_written_as_png() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("float.png");
        let image = DynamicImage::ImageRgba32F(DynamicImage::new_rgba8(4, 4).to_rgba32f());

        write_png(&image, &path).unwrap();
        assert_eq!(image::open(&path).unwrap().dimensions(), (4, 4));
    }

    #[test]
    fn selection_is_none_when_overhanging() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("photo.png");
        checkerboard(16, 16).save(&source).unwrap();

        let session = CropSession::open(&source).unwrap();
        assert!(session.selection(CropRegion::new(-1, 0, 4)).is_none());
        assert_eq!(
            session
                .selection(CropRegion::new(0, 0, 4))
                .map(|img| img.dimensions()),
            Some((4, 4))
        );
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempdir().unwrap();
        let err = CropSession::open(&dir.path().join("nope.png")).unwrap_err();
        assert!(matches!(err, SessionError::Read { .. }));
    }

    #[test]
    fn garbage_file_is_a_decode_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("junk.png");
        fs::write(&path, b"definitely not an image").unwrap();

        let err = CropSession::open(&path).unwrap_err();
        assert!(matches!(err, SessionError::Decode { .. }));
    }
}
