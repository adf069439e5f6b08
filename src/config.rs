// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Fixed configuration.
//!
//! Gdslot has no configuration file. Everything it needs to know is either
//! a constant defined here, or comes from the environment through
//! [`Locations`](crate::path::Locations). Constants are handed to the parts of
//! the crate that need them rather than looked up globally, so tests can swap
//! in their own save file set and directory roots.

/// Number of backup slots available to the user.
pub const SLOT_COUNT: u32 = 9;

/// Environment variable holding the root of local application data.
pub const LIVE_ROOT_VAR: &str = "LOCALAPPDATA";

/// Environment variable holding the root of the user's profile.
pub const BACKUP_ROOT_VAR: &str = "USERPROFILE";

/// Directory under [`LIVE_ROOT_VAR`] where the game keeps its current save.
pub const LIVE_SAVE_DIR: &str = "GeometryDash";

/// Directory under [`BACKUP_ROOT_VAR`] where backup slots are stored.
pub const BACKUP_DIR: [&str; 2] = ["OneDrive", "GD Saves"];

/// Prefix of every slot directory name, followed by the slot number.
pub const SLOT_DIR_PREFIX: &str = "Slot";

/// Name of file inside of slot directory holding its display label.
pub const LABEL_FILE: &str = "slotname.txt";

/// Files that together make up one complete save.
pub const SAVE_FILES: SaveFileSet = SaveFileSet::new(&[
    "CCLocalLevels.dat",
    "CCGameManager.dat",
    "CCLocalLevels2.dat",
    "CCGameManager2.dat",
]);

/// Ordered set of file names that constitute a save.
///
/// The set is immutable once constructed. Copy and delete batches always walk
/// it in the order given here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveFileSet(&'static [&'static str]);

impl SaveFileSet {
    /// Construct new save file set.
    pub const fn new(names: &'static [&'static str]) -> Self {
        Self(names)
    }

    /// Iterate through file names in order.
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'static, &'static str>> {
        let names: &'static [&'static str] = self.0;
        names.iter().copied()
    }

}

impl Default for SaveFileSet {
    fn default() -> Self {
        SAVE_FILES
    }
}

impl IntoIterator for SaveFileSet {
    type Item = &'static str;
    type IntoIter = std::iter::Copied<std::slice::Iter<'static, &'static str>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
