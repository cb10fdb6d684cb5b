// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/mod.rs
//
// COSMIC application wiring and main app struct.

mod message;
mod model;
mod update;
mod view;

pub use message::AppMessage;
pub use model::AppModel;

use std::path::PathBuf;

use cosmic::app::Core;
use cosmic::iced::keyboard::{self, Key, Modifiers, key::Named};
use cosmic::iced::{Subscription, window};
use cosmic::{Action, ApplicationExt, Element, Task};

use crate::config::AppConfig;
use crate::domain::Direction;
use crate::fl;

/// Flags passed from `main` into the application.
#[derive(Debug, Clone)]
pub struct Flags {
    pub config: AppConfig,
    /// Image to open right away.
    pub file: Option<PathBuf>,
}

/// Main application type.
pub struct SquareCropApp {
    core: Core,
    pub model: AppModel,
    pub config: AppConfig,
}

impl cosmic::Application for SquareCropApp {
    type Executor = cosmic::SingleThreadExecutor;
    type Flags = Flags;
    type Message = AppMessage;

    const APP_ID: &'static str = "io.github.squarecrop.SquareCrop";

    fn core(&self) -> &Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut Core {
        &mut self.core
    }

    fn init(core: Core, flags: Self::Flags) -> (Self, Task<Action<Self::Message>>) {
        let Flags { config, file } = flags;
        let mut model = AppModel::new(&config);

        if let Some(path) = file {
            // Opening is synchronous and never yields a task.
            let _ = update::update(&mut model, &config, AppMessage::OpenPath(path));
        }

        let mut app = Self {
            core,
            model,
            config,
        };
        let title = app.update_title();

        (app, title)
    }

    fn on_close_requested(&self, id: window::Id) -> Option<Self::Message> {
        self.model
            .magnifier
            .as_ref()
            .filter(|magnifier| magnifier.id == id)
            .map(|magnifier| AppMessage::MagnifierClosed(magnifier.id))
    }

    fn update(&mut self, message: Self::Message) -> Task<Action<Self::Message>> {
        let opened = matches!(message, AppMessage::OpenPath(_));

        let task = match update::update(&mut self.model, &self.config, message) {
            update::UpdateResult::None => Task::none(),
            update::UpdateResult::Task(task) => task,
        };

        if opened {
            Task::batch([task, self.update_title()])
        } else {
            task
        }
    }

    fn header_start(&self) -> Vec<Element<'_, Self::Message>> {
        view::header_start(&self.model)
    }

    fn header_end(&self) -> Vec<Element<'_, Self::Message>> {
        view::header_end(&self.model, &self.config)
    }

    fn view(&self) -> Element<'_, Self::Message> {
        view::canvas::view(&self.model)
    }

    fn view_window(&self, _id: window::Id) -> Element<'_, Self::Message> {
        view::magnifier::view(&self.model)
    }

    fn dialog(&self) -> Option<Element<'_, Self::Message>> {
        view::error_dialog(&self.model)
    }

    fn subscription(&self) -> Subscription<Self::Message> {
        keyboard::on_key_press(handle_key_press)
    }
}

impl SquareCropApp {
    /// Show the open file's name in the main window title.
    fn update_title(&mut self) -> Task<Action<AppMessage>> {
        let mut title = fl!("app-title");
        if let Some(name) = self
            .model
            .session
            .as_ref()
            .and_then(|session| session.path().file_name())
        {
            title = format!("{} - {title}", name.to_string_lossy());
        }

        match self.core.main_window_id() {
            Some(id) => self.set_window_title(title, id),
            None => Task::none(),
        }
    }
}

/// Map raw key presses + modifiers into high-level application messages.
///
/// Shift turns off the arrow keys and Enter; unhandled keys yield `None`.
fn handle_key_press(key: Key, modifiers: Modifiers) -> Option<AppMessage> {
    use AppMessage::{GrowSelection, MoveSelection, SaveCrop, ShrinkSelection};

    // Ignore key presses when command-style modifiers are pressed.
    if modifiers.command() || modifiers.alt() || modifiers.logo() || modifiers.control() {
        return None;
    }

    match key.as_ref() {
        // Typing + usually needs Shift, so the size keys accept it.
        Key::Character("+") => Some(GrowSelection),
        Key::Character("-") => Some(ShrinkSelection),

        _ if modifiers.shift() => None,

        Key::Named(Named::ArrowLeft) => Some(MoveSelection(Direction::Left)),
        Key::Named(Named::ArrowUp) => Some(MoveSelection(Direction::Up)),
        Key::Named(Named::ArrowRight) => Some(MoveSelection(Direction::Right)),
        Key::Named(Named::ArrowDown) => Some(MoveSelection(Direction::Down)),
        Key::Named(Named::Enter) => Some(SaveCrop),

        _ => None,
    }
}
