// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

use gdslot::{InquirePrompt, Locations, Menu, SlotStore, SAVE_FILES};

use anyhow::Result;
use clap::Parser;
use std::{io, process::exit};
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Keep numbered backup slots of Geometry Dash save files.
///
/// Reads the live save from `$LOCALAPPDATA/GeometryDash`, and stores slots
/// under `$USERPROFILE/OneDrive/GD Saves`.
#[derive(Debug, Clone, Parser)]
#[command(about, long_about, version)]
struct Cli {}

impl Cli {
    fn run(self) -> Result<()> {
        let store = SlotStore::new(Locations::from_env(), SAVE_FILES);
        let mut menu = Menu::new(store, InquirePrompt, io::stdout());
        menu.run()?;

        Ok(())
    }
}

fn main() {
    let layer = fmt::layer()
        .compact()
        .with_target(false)
        .with_timer(false)
        .without_time();
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap();
    tracing_subscriber::registry()
        .with(layer)
        .with(filter)
        .init();

    if let Err(error) = run() {
        error!("{error:?}");
        exit(1);
    }

    exit(0)
}

fn run() -> Result<()> {
    Cli::parse().run()
}
