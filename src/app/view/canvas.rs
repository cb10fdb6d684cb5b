// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/canvas.rs
//
// Render the center canvas area: the source at 1:1 under the selector.

use cosmic::Element;
use cosmic::iced::{ContentFit, Length};
use cosmic::iced_widget::scrollable::{Direction, Scrollbar};
use cosmic::iced_widget::{image, scrollable, stack};
use cosmic::widget::{container, text};

use super::selector::selector_overlay;
use crate::app::{AppMessage, AppModel};
use crate::fl;

/// Render the center canvas area with the current source image.
pub fn view(model: &AppModel) -> Element<'_, AppMessage> {
    let (Some(session), Some(handle)) = (&model.session, &model.preview) else {
        return container(text(fl!("no-document")))
            .width(Length::Fill)
            .height(Length::Fill)
            .center(Length::Fill)
            .into();
    };

    let (width, height) = session.dimensions();

    // Unscaled, so overlay coordinates are image pixels.
    let picture = image(handle.clone())
        .width(Length::Fixed(width as f32))
        .height(Length::Fixed(height as f32))
        .content_fit(ContentFit::None);
    let overlay = selector_overlay(width, height, model.selector.region());

    scrollable(stack![picture, overlay])
        .direction(Direction::Both {
            vertical: Scrollbar::default(),
            horizontal: Scrollbar::default(),
        })
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
