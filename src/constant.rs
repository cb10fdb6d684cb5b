// SPDX-License-Identifier: GPL-3.0-or-later
// src/constant.rs
//
// Application constants that should not be changed by the user.

use cosmic::iced::Color;

/// Smallest selector side length in pixels.
pub const MIN_CROP_SIZE: u32 = 1;

/// Selector side length when nothing else is configured.
pub const DEFAULT_CROP_SIZE: u32 = 64;

/// Upper bound of the size control.
pub const MAX_CROP_SIZE: u32 = 4096;

/// Counter value used when no earlier crop is found next to the source.
pub const FIRST_CROP_INDEX: u32 = 1;

/// Minimum digits of the counter in crop file names (zero padded).
pub const COUNTER_WIDTH: usize = 3;

/// Extension of every written crop.
pub const OUTPUT_EXT: &str = "png";

/// File picker filter.
pub const OPEN_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "bmp", "gif", "tif", "tiff", "webp", "tga", "pnm", "qoi",
];

/// Magnifier window edge length in logical pixels.
pub const MAGNIFIER_WINDOW_SIZE: f32 = 320.0;

/// Shade over the image outside the selector.
pub const OVERLAY_COLOR: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.35);

/// Selector outline.
pub const BORDER_COLOR: Color = Color::from_rgb(1.0, 0.2, 0.2);

/// Selector outline thickness in logical pixels.
pub const BORDER_WIDTH: f32 = 1.0;
