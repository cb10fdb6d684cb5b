// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/selector.rs
//
// Selector overlay drawn over the 1:1 preview; left clicks recentre it.

use cosmic::{
    Element, Renderer,
    iced::{
        Color, Length, Point, Rectangle, Size,
        advanced::{
            Clipboard, Layout, Shell, Widget,
            layout::{Limits, Node},
            renderer::{Quad, Renderer as QuadRenderer},
            widget::Tree,
        },
        event::{Event, Status},
        mouse::{self, Button, Cursor},
    },
};

use crate::app::AppMessage;
use crate::constant::{BORDER_COLOR, BORDER_WIDTH, OVERLAY_COLOR};
use crate::domain::CropRegion;

pub struct SelectorOverlay {
    img_width: u32,
    img_height: u32,
    region: CropRegion,
}

impl SelectorOverlay {
    pub fn new(img_width: u32, img_height: u32, region: CropRegion) -> Self {
        Self {
            img_width,
            img_height,
            region,
        }
    }

    /// Selection rectangle in absolute screen coordinates.
    fn screen_rect(&self, bounds: Rectangle) -> Rectangle {
        let size = self.region.size as f32;
        Rectangle::new(
            Point::new(
                bounds.x + self.region.x as f32,
                bounds.y + self.region.y as f32,
            ),
            Size::new(size, size),
        )
    }

    fn draw_shade(&self, renderer: &mut Renderer, bounds: Rectangle) {
        let sel = self.screen_rect(bounds);
        let sel_right = sel.x + sel.width;
        let sel_bottom = sel.y + sel.height;
        let right = bounds.x + bounds.width;
        let bottom = bounds.y + bounds.height;

        // Top
        if sel.y > bounds.y {
            draw_quad(
                renderer,
                Rectangle::new(bounds.position(), Size::new(bounds.width, sel.y - bounds.y)),
                OVERLAY_COLOR,
            );
        }

        // Bottom
        if sel_bottom < bottom {
            draw_quad(
                renderer,
                Rectangle::new(
                    Point::new(bounds.x, sel_bottom),
                    Size::new(bounds.width, bottom - sel_bottom),
                ),
                OVERLAY_COLOR,
            );
        }

        // Left
        if sel.x > bounds.x {
            draw_quad(
                renderer,
                Rectangle::new(
                    Point::new(bounds.x, sel.y),
                    Size::new(sel.x - bounds.x, sel.height),
                ),
                OVERLAY_COLOR,
            );
        }

        // Right
        if sel_right < right {
            draw_quad(
                renderer,
                Rectangle::new(
                    Point::new(sel_right, sel.y),
                    Size::new(right - sel_right, sel.height),
                ),
                OVERLAY_COLOR,
            );
        }
    }

    fn draw_border(&self, renderer: &mut Renderer, bounds: Rectangle) {
        let sel = self.screen_rect(bounds);

        for edge in [
            Rectangle::new(sel.position(), Size::new(sel.width, BORDER_WIDTH)),
            Rectangle::new(
                Point::new(sel.x, sel.y + sel.height - BORDER_WIDTH),
                Size::new(sel.width, BORDER_WIDTH),
            ),
            Rectangle::new(sel.position(), Size::new(BORDER_WIDTH, sel.height)),
            Rectangle::new(
                Point::new(sel.x + sel.width - BORDER_WIDTH, sel.y),
                Size::new(BORDER_WIDTH, sel.height),
            ),
        ] {
            draw_quad(renderer, edge, BORDER_COLOR);
        }
    }
}

impl Widget<AppMessage, cosmic::Theme, Renderer> for SelectorOverlay {
    fn size(&self) -> Size<Length> {
        Size::new(
            Length::Fixed(self.img_width as f32),
            Length::Fixed(self.img_height as f32),
        )
    }

    fn layout(&self, _tree: &mut Tree, _renderer: &Renderer, _limits: &Limits) -> Node {
        Node::new(Size::new(self.img_width as f32, self.img_height as f32))
    }

    fn draw(
        &self,
        _tree: &Tree,
        renderer: &mut Renderer,
        _theme: &cosmic::Theme,
        _style: &cosmic::iced::advanced::renderer::Style,
        layout: Layout<'_>,
        _cursor: Cursor,
        _viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();

        // The selector may hang off the image; keep the drawing on it.
        renderer.with_layer(bounds, |renderer| {
            self.draw_shade(renderer, bounds);
            self.draw_border(renderer, bounds);
        });
    }

    fn on_event(
        &mut self,
        _tree: &mut Tree,
        event: Event,
        layout: Layout<'_>,
        cursor: Cursor,
        _renderer: &Renderer,
        _clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, AppMessage>,
        _viewport: &Rectangle,
    ) -> Status {
        if let Event::Mouse(mouse::Event::ButtonPressed(Button::Left)) = event
            && let Some(pos) = cursor.position_in(layout.bounds())
        {
            shell.publish(AppMessage::ImageClicked { x: pos.x, y: pos.y });
            return Status::Captured;
        }

        Status::Ignored
    }

    fn mouse_interaction(
        &self,
        _tree: &Tree,
        layout: Layout<'_>,
        cursor: Cursor,
        _viewport: &Rectangle,
        _renderer: &Renderer,
    ) -> mouse::Interaction {
        if cursor.is_over(layout.bounds()) {
            mouse::Interaction::Crosshair
        } else {
            mouse::Interaction::default()
        }
    }
}

impl<'a> From<SelectorOverlay> for Element<'a, AppMessage> {
    fn from(widget: SelectorOverlay) -> Self {
        Element::new(widget)
    }
}

fn draw_quad(renderer: &mut Renderer, bounds: Rectangle, color: Color) {
    renderer.fill_quad(
        Quad {
            bounds,
            ..Quad::default()
        },
        color,
    );
}

pub fn selector_overlay<'a>(
    img_width: u32,
    img_height: u32,
    region: CropRegion,
) -> Element<'a, AppMessage> {
    SelectorOverlay::new(img_width, img_height, region).into()
}
