// SPDX-License-Identifier: GPL-3.0-or-later
// src/main.rs
//
// Entry point: command line, logging, localization, then the COSMIC runtime.

mod app;
mod config;
mod constant;
mod domain;
mod i18n;

use std::path::PathBuf;

use clap::Parser;
use cosmic::iced::Size;
use log::LevelFilter;
use simple_logger::SimpleLogger;

use crate::app::{Flags, SquareCropApp};
use crate::config::AppConfig;

/// Cut numbered square crops out of an image.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    /// Image to open at startup.
    pub file: Option<PathBuf>,

    /// Initial crop size in pixels.
    #[arg(short, long)]
    pub size: Option<u32>,
}

fn main() -> anyhow::Result<()> {
    SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .env()
        .init()?;

    let requested_languages = i18n_embed::DesktopLanguageRequester::requested_languages();
    i18n::init(&requested_languages);

    let args = Args::parse();
    let config = AppConfig::default().with_crop_size(args.size);

    let settings = cosmic::app::Settings::default().size(Size::new(1024.0, 768.0));
    let flags = Flags {
        config,
        file: args.file,
    };

    cosmic::app::run::<SquareCropApp>(settings, flags)?;

    Ok(())
}
