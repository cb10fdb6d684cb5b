// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/magnifier.rs
//
// Magnifier window content.

use cosmic::Element;
use cosmic::iced::widget::image::FilterMethod;
use cosmic::iced::{ContentFit, Length};
use cosmic::iced_widget::image;
use cosmic::widget::{container, text};

use crate::app::{AppMessage, AppModel};
use crate::fl;

/// Selected pixels scaled up to fill the window, without smoothing.
pub fn view(model: &AppModel) -> Element<'_, AppMessage> {
    match model.magnifier.as_ref().and_then(|m| m.handle.clone()) {
        Some(handle) => image(handle)
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Contain)
            .filter_method(FilterMethod::Nearest)
            .into(),
        None => container(text(fl!("magnifier-title")))
            .width(Length::Fill)
            .height(Length::Fill)
            .center(Length::Fill)
            .into(),
    }
}
