// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/model.rs
//
// Application state.

use cosmic::iced::window;
use cosmic::widget::image::Handle as ImageHandle;
use image::{DynamicImage, GenericImageView};

use crate::config::AppConfig;
use crate::domain::{CropRegion, CropSession, Selector};

/// Create a display handle from a decoded image.
pub fn create_image_handle(img: &DynamicImage) -> ImageHandle {
    let (w, h) = img.dimensions();
    let pixels = img.to_rgba8().into_raw();
    ImageHandle::from_rgba(w, h, pixels)
}

// =============================================================================
// Magnifier
// =============================================================================

/// Second window showing the selected pixels enlarged.
#[derive(Debug, Clone)]
pub struct Magnifier {
    pub id: window::Id,
    pub handle: Option<ImageHandle>,
    /// Region the current `handle` was cut from.
    pub shown: Option<CropRegion>,
}

impl Magnifier {
    pub fn new(id: window::Id) -> Self {
        Self {
            id,
            handle: None,
            shown: None,
        }
    }
}

// =============================================================================
// Model
// =============================================================================

pub struct AppModel {
    // Document.
    pub session: Option<CropSession>,
    pub preview: Option<ImageHandle>,

    // Tools.
    pub selector: Selector,
    pub magnifier: Option<Magnifier>,

    // UI state.
    pub error: Option<String>,
}

impl AppModel {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            session: None,
            preview: None,
            selector: Selector::new(config.crop_size),
            magnifier: None,
            error: None,
        }
    }

    pub fn set_error<S: Into<String>>(&mut self, msg: S) {
        self.error = Some(msg.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Counter of the next crop, if an image is open.
    pub fn counter(&self) -> Option<u32> {
        self.session.as_ref().map(|s| s.sequence().counter())
    }

    /// Rebuild the main preview after the source image changed.
    pub fn refresh_preview(&mut self) {
        self.preview = self
            .session
            .as_ref()
            .map(|session| create_image_handle(session.image()));
        self.refresh_magnifier();
    }

    /// Push the selected pixels to the magnifier, if it is open.
    ///
    /// An overhanging selection leaves the last valid view in place.
    pub fn refresh_magnifier(&mut self) {
        let (Some(magnifier), Some(session)) = (self.magnifier.as_mut(), self.session.as_ref())
        else {
            return;
        };

        let region = self.selector.region();
        if let Some(pixels) = session.selection(region) {
            magnifier.handle = Some(create_image_handle(&pixels));
            magnifier.shown = Some(region);
        }
    }
}
