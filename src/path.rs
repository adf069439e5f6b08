// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Path resolution utilities.
//!
//! Determine where the live save and the backup slots are kept on the user's
//! file system.
//!
//! # Unset Environment
//!
//! Both roots come from environment variables. An unset variable is read as
//! the empty string instead of raising an error, which leaves a relative path
//! behind. Anything that uses such a path simply runs into missing files later
//! on, and reports them like any other missing file.

use crate::{
    config::{
        BACKUP_DIR, BACKUP_ROOT_VAR, LABEL_FILE, LIVE_ROOT_VAR, LIVE_SAVE_DIR, SLOT_DIR_PREFIX,
    },
    slot::SlotId,
};

use std::{
    env,
    path::{Path, PathBuf},
};
use tracing::debug;

/// Well-known locations used by gdslot.
///
/// Does not check if any of the paths actually exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locations {
    save_dir: PathBuf,
    backup_root: PathBuf,
}

impl Locations {
    /// Construct new set of locations from explicit roots.
    pub fn new(save_dir: impl Into<PathBuf>, backup_root: impl Into<PathBuf>) -> Self {
        Self {
            save_dir: save_dir.into(),
            backup_root: backup_root.into(),
        }
    }

    /// Determine locations from current environment.
    ///
    /// Uses `$LOCALAPPDATA/GeometryDash` as the live save directory, and
    /// `$USERPROFILE/OneDrive/GD Saves` as the backup root. Unset variables
    /// count as empty.
    pub fn from_env() -> Self {
        let save_dir = env_root(LIVE_ROOT_VAR).join(LIVE_SAVE_DIR);
        let backup_root = BACKUP_DIR
            .iter()
            .fold(env_root(BACKUP_ROOT_VAR), |path, part| path.join(part));
        debug!(
            "resolved save directory {:?} and backup root {:?}",
            save_dir.display(),
            backup_root.display()
        );

        Self::new(save_dir, backup_root)
    }

    /// Directory holding current save files.
    pub fn save_dir(&self) -> &Path {
        self.save_dir.as_path()
    }

    /// Directory holding every slot directory.
    pub fn backup_root(&self) -> &Path {
        self.backup_root.as_path()
    }

    /// Directory of target slot.
    pub fn slot_dir(&self, slot: SlotId) -> PathBuf {
        self.backup_root.join(format!("{SLOT_DIR_PREFIX}{slot}"))
    }

    /// Label file of target slot.
    pub fn label_file(&self, slot: SlotId) -> PathBuf {
        self.slot_dir(slot).join(LABEL_FILE)
    }
}

fn env_root(var: &str) -> PathBuf {
    PathBuf::from(env::var_os(var).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sealed_test::prelude::*;

    #[sealed_test(env = [
        ("LOCALAPPDATA", "/home/blah/AppData/Local"),
        ("USERPROFILE", "/home/blah"),
    ])]
    fn locations_from_env() -> anyhow::Result<()> {
        let result = Locations::from_env();
        let expect = Locations::new(
            "/home/blah/AppData/Local/GeometryDash",
            "/home/blah/OneDrive/GD Saves",
        );
        assert_eq!(result, expect);

        let slot = SlotId::new(3)?;
        assert_eq!(
            result.slot_dir(slot),
            PathBuf::from("/home/blah/OneDrive/GD Saves/Slot3")
        );
        assert_eq!(
            result.label_file(slot),
            PathBuf::from("/home/blah/OneDrive/GD Saves/Slot3/slotname.txt")
        );

        Ok(())
    }

    #[sealed_test]
    fn locations_from_unset_env_are_relative() {
        env::remove_var(LIVE_ROOT_VAR);
        env::remove_var(BACKUP_ROOT_VAR);

        let result = Locations::from_env();
        assert_eq!(result.save_dir(), Path::new("GeometryDash"));
        assert_eq!(result.backup_root(), Path::new("OneDrive/GD Saves"));
        assert!(result.save_dir().is_relative());
        assert!(result.backup_root().is_relative());
    }
}
