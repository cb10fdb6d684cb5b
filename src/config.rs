// SPDX-License-Identifier: GPL-3.0-or-later
// src/config.rs
//
// Runtime configuration: defaults plus command line overrides, never persisted.

use std::path::PathBuf;

use crate::constant::{DEFAULT_CROP_SIZE, MAGNIFIER_WINDOW_SIZE, MAX_CROP_SIZE, MIN_CROP_SIZE};

/// Global configuration for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Directory the file picker starts in.
    pub default_image_dir: Option<PathBuf>,
    /// Selector side length at startup.
    pub crop_size: u32,
    /// Largest value the size control accepts.
    pub max_crop_size: u32,
    /// Edge length of the magnifier window.
    pub magnifier_size: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_image_dir: dirs::picture_dir().or_else(dirs::home_dir),
            crop_size: DEFAULT_CROP_SIZE,
            max_crop_size: MAX_CROP_SIZE,
            magnifier_size: MAGNIFIER_WINDOW_SIZE,
        }
    }
}

impl AppConfig {
    /// Apply a requested initial crop size, keeping it within the size
    /// control's range.
    pub fn with_crop_size(mut self, size: Option<u32>) -> Self {
        if let Some(size) = size {
            self.crop_size = size.clamp(MIN_CROP_SIZE, self.max_crop_size);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crop_size_override_is_clamped() {
        let config = AppConfig::default().with_crop_size(Some(0));
        assert_eq!(config.crop_size, MIN_CROP_SIZE);

        let config = AppConfig::default().with_crop_size(Some(u32::MAX));
        assert_eq!(config.crop_size, MAX_CROP_SIZE);

        let config = AppConfig::default().with_crop_size(None);
        assert_eq!(config.crop_size, DEFAULT_CROP_SIZE);
    }
}
