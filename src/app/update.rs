// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/update.rs
//
// Message dispatch: one handler per user action.

use std::path::{Path, PathBuf};

use cosmic::iced::{Size, window};
use cosmic::{Action, Task};

use super::message::AppMessage;
use super::model::{AppModel, Magnifier};
use crate::config::AppConfig;
use crate::constant::OPEN_EXTENSIONS;
use crate::domain::{CropSession, SessionError, Selector};
use crate::fl;

pub enum UpdateResult {
    None,
    Task(Task<Action<AppMessage>>),
}

/// Apply `message` to the model.
pub fn update(model: &mut AppModel, config: &AppConfig, message: AppMessage) -> UpdateResult {
    match message {
        AppMessage::OpenDialog => return UpdateResult::Task(pick_file(config)),
        AppMessage::OpenPath(path) => open_path(model, &path),

        AppMessage::MoveSelection(direction) => edit_selector(model, |s| s.nudge(direction)),
        AppMessage::GrowSelection => edit_selector(model, |s| {
            if s.size() < config.max_crop_size {
                s.grow();
            }
        }),
        AppMessage::ShrinkSelection => edit_selector(model, Selector::shrink),
        AppMessage::SetCropSize(size) => {
            edit_selector(model, |s| s.resize(size.min(config.max_crop_size)));
        }
        AppMessage::ImageClicked { x, y } => edit_selector(model, |s| s.recenter(x, y)),

        AppMessage::SetCounter(counter) => {
            if let Some(session) = model.session.as_mut() {
                session.set_counter(counter);
            }
        }
        AppMessage::SaveCrop => save_crop(model),

        AppMessage::OpenMagnifier => return open_magnifier(model, config),
        AppMessage::MagnifierOpened(id) => log::debug!("magnifier window {id:?} opened"),
        AppMessage::MagnifierClosed(id) => return close_magnifier(model, id),

        AppMessage::ClearError => model.clear_error(),
        AppMessage::NoOp => {}
    }

    UpdateResult::None
}

// =============================================================================
// File
// =============================================================================

fn pick_file(config: &AppConfig) -> Task<Action<AppMessage>> {
    let directory = config.default_image_dir.clone();
    let filter = fl!("image-filter");

    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new().add_filter(filter, OPEN_EXTENSIONS);
            if let Some(directory) = directory {
                dialog = dialog.set_directory(directory);
            }
            dialog.pick_file().await.map(|file| file.path().to_path_buf())
        },
        |picked: Option<PathBuf>| {
            Action::App(picked.map_or(AppMessage::NoOp, AppMessage::OpenPath))
        },
    )
}

fn open_path(model: &mut AppModel, path: &Path) {
    match CropSession::open(path) {
        Ok(session) => {
            model.session = Some(session);
            model.clear_error();
            // The old file's pixels must not outlive it.
            if let Some(magnifier) = model.magnifier.as_mut() {
                magnifier.handle = None;
                magnifier.shown = None;
            }
            model.refresh_preview();
        }
        Err(err) => {
            log::error!("{err}");
            model.set_error(fl!(
                "error-open",
                path = path.display().to_string(),
                reason = err.to_string()
            ));
        }
    }
}

// =============================================================================
// Selector
// =============================================================================

fn edit_selector(model: &mut AppModel, edit: impl FnOnce(&mut Selector)) {
    edit(&mut model.selector);
    model.refresh_magnifier();
}

// =============================================================================
// Crop
// =============================================================================

fn save_crop(model: &mut AppModel) {
    let region = model.selector.region();
    let Some(session) = model.session.as_mut() else {
        log::debug!("save ignored: no image open");
        return;
    };

    match session.save_crop(region) {
        Ok(_) => model.refresh_preview(),
        Err(SessionError::Crop(err)) => {
            log::warn!("save rejected: {err}");
            model.set_error(fl!("error-out-of-bounds"));
        }
        Err(err) => {
            log::error!("{err}");
            model.set_error(fl!("error-save", reason = err.to_string()));
        }
    }
}

// =============================================================================
// Magnifier
// =============================================================================

fn open_magnifier(model: &mut AppModel, config: &AppConfig) -> UpdateResult {
    if let Some(magnifier) = &model.magnifier {
        return UpdateResult::Task(window::gain_focus(magnifier.id));
    }

    let (id, open) = window::open(window::Settings {
        size: Size::new(config.magnifier_size, config.magnifier_size),
        ..Default::default()
    });
    model.magnifier = Some(Magnifier::new(id));
    model.refresh_magnifier();

    UpdateResult::Task(open.map(|id| Action::App(AppMessage::MagnifierOpened(id))))
}

fn close_magnifier(model: &mut AppModel, id: window::Id) -> UpdateResult {
    if model.magnifier.as_ref().is_some_and(|m| m.id == id) {
        model.magnifier = None;
        return UpdateResult::Task(window::close(id));
    }
    UpdateResult::None
}
