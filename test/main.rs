// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT


use anyhow::Result;
use gdslot::{Locations, Prompt, PromptError, SlotStore, SAVE_FILES};
use std::{
    collections::VecDeque,
    fs,
    path::{Path, PathBuf},
};

/// Live save directory and backup root inside of current directory.
pub(crate) struct SaveFixture {
    live: PathBuf,
    backup: PathBuf,
}

impl SaveFixture {
    pub(crate) fn new(root: impl AsRef<Path>) -> Result<Self> {
        let live = root.as_ref().join("AppData/Local/GeometryDash");
        let backup = root.as_ref().join("OneDrive/GD Saves");
        fs::create_dir_all(&live)?;

        Ok(Self { live, backup })
    }

    pub(crate) fn store(&self) -> SlotStore {
        SlotStore::new(Locations::new(&self.live, &self.backup), SAVE_FILES)
    }

    pub(crate) fn write_live(&self, name: &str, contents: impl AsRef<[u8]>) -> Result<()> {
        fs::write(self.live.join(name), contents)?;
        Ok(())
    }

    pub(crate) fn read_live(&self, name: &str) -> Option<Vec<u8>> {
        fs::read(self.live.join(name)).ok()
    }

    pub(crate) fn read_slot(&self, slot: u32, name: &str) -> Option<Vec<u8>> {
        fs::read(self.backup.join(format!("Slot{slot}")).join(name)).ok()
    }

    pub(crate) fn backup_root(&self) -> &Path {
        &self.backup
    }

    /// Snapshot every save file in live directory.
    pub(crate) fn live_snapshot(&self) -> Vec<Option<Vec<u8>>> {
        SAVE_FILES.iter().map(|name| self.read_live(name)).collect()
    }
}

/// Prompt answering from a fixed list of lines.
#[derive(Debug, Default)]
pub(crate) struct ScriptedPrompt {
    lines: VecDeque<String>,
    asked: Vec<String>,
}

impl ScriptedPrompt {
    pub(crate) fn new(lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }
}

impl Prompt for ScriptedPrompt {
    fn ask(&mut self, message: &str) -> Result<String, PromptError> {
        self.asked.push(message.into());
        self.lines.pop_front().ok_or(PromptError::Closed)
    }
}

impl Prompt for &mut ScriptedPrompt {
    fn ask(&mut self, message: &str) -> Result<String, PromptError> {
        (**self).ask(message)
    }
}
