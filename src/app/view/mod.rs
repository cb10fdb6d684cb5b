// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/mod.rs
//
// View composition: header controls, canvas, magnifier and error dialog.

pub mod canvas;
pub mod magnifier;
mod selector;

use cosmic::Element;
use cosmic::widget::{button, dialog, spin_button, text};

use super::{AppMessage, AppModel};
use crate::config::AppConfig;
use crate::constant::MIN_CROP_SIZE;
use crate::fl;

pub fn header_start(_model: &AppModel) -> Vec<Element<'_, AppMessage>> {
    vec![
        button::standard(fl!("open"))
            .on_press(AppMessage::OpenDialog)
            .into(),
        button::standard(fl!("open-magnifier"))
            .on_press(AppMessage::OpenMagnifier)
            .into(),
    ]
}

pub fn header_end<'a>(model: &'a AppModel, config: &'a AppConfig) -> Vec<Element<'a, AppMessage>> {
    let size = model.selector.size();
    let mut items: Vec<Element<'a, AppMessage>> = vec![
        text(fl!("crop-size")).into(),
        spin_button(
            format!("{size} px"),
            size,
            1,
            MIN_CROP_SIZE,
            config.max_crop_size,
            AppMessage::SetCropSize,
        )
        .into(),
    ];

    if let Some(counter) = model.counter() {
        items.push(text(fl!("crop-counter")).into());
        items.push(
            spin_button(
                format!("{counter:03}"),
                counter,
                1,
                0,
                u32::MAX,
                AppMessage::SetCounter,
            )
            .into(),
        );
    }

    items.push(
        button::suggested(fl!("save-crop"))
            .on_press(AppMessage::SaveCrop)
            .into(),
    );

    items
}

/// Modal error, shown until dismissed.
pub fn error_dialog(model: &AppModel) -> Option<Element<'_, AppMessage>> {
    let message = model.error.as_deref()?;

    Some(
        dialog()
            .title(fl!("error-title"))
            .body(message)
            .primary_action(button::suggested(fl!("ok")).on_press(AppMessage::ClearError))
            .into(),
    )
}
