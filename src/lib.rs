// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Backup slots for Geometry Dash saves.
//!
//! Gdslot keeps up to nine numbered copies of the game's save files, and
//! moves them to and from the live save directory on request. Each copy lives
//! in its own __slot__ that the user can name, rename, or throw away.
//!
//! # See Also
//!
//! 1. [`store`] for slot layout and copy semantics.
//! 2. [`menu`] for the interactive front end.

pub mod config;
pub mod menu;
pub mod path;
pub mod slot;
pub mod store;

pub use config::{SaveFileSet, SAVE_FILES, SLOT_COUNT};
pub use menu::{InquirePrompt, Menu, MenuChoice, Prompt, PromptError};
pub use path::Locations;
pub use slot::{SlotId, SlotLabel};
pub use store::{FileReport, Outcome, SlotRemoval, SlotStore};
