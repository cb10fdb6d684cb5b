// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/message.rs
//
// Application messages: events, user actions, and internal signals.

use std::path::PathBuf;

use cosmic::iced::window;

use crate::domain::Direction;

#[derive(Debug, Clone)]
pub enum AppMessage {
    // File.
    OpenDialog,
    OpenPath(PathBuf),

    // Selector.
    MoveSelection(Direction),
    GrowSelection,
    ShrinkSelection,
    SetCropSize(u32),
    ImageClicked { x: f32, y: f32 },

    // Crop.
    SetCounter(u32),
    SaveCrop,

    // Magnifier window.
    OpenMagnifier,
    MagnifierOpened(window::Id),
    MagnifierClosed(window::Id),

    // Errors.
    ClearError,

    // Fallback.
    NoOp,
}
