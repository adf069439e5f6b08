// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Slot store management and manipulation.
//!
//! Gdslot groups backup slots together into one place called the __slot
//! store__. The slot store moves the save file set between the live save
//! directory and any given slot, and keeps track of slot labels.
//!
//! # Slot Store Layout
//!
//! ```text
//! <backup-root>/
//!     Slot1/
//!         CCLocalLevels.dat
//!         CCGameManager.dat
//!         CCLocalLevels2.dat
//!         CCGameManager2.dat
//!         slotname.txt
//!     Slot2/
//!     ...
//! ```
//!
//! Nothing is cached between calls. The file system is always the source of
//! truth, so every operation reads it fresh.
//!
//! # Batches
//!
//! Copying and deleting the save file set is done one file at a time. A file
//! that is missing, or that fails to copy or delete, never stops the rest of
//! the batch. Each file gets its own [`FileReport`] instead, and the caller
//! decides how to present them.

use crate::{
    config::SaveFileSet,
    path::Locations,
    slot::{SlotId, SlotLabel},
};

use std::{
    fs, io,
    path::{Path, PathBuf},
};
use tracing::{debug, instrument};

/// Manager of the live save and its backup slots.
#[derive(Debug, Clone)]
pub struct SlotStore {
    locations: Locations,
    files: SaveFileSet,
}

impl SlotStore {
    /// Construct new slot store.
    pub fn new(locations: Locations, files: SaveFileSet) -> Self {
        Self { locations, files }
    }

    /// List every slot with its label.
    ///
    /// Never creates anything. A missing backup root just means that every
    /// slot is unlabeled.
    #[instrument(skip(self), level = "debug")]
    pub fn list_slots(&self) -> Vec<SlotEntry> {
        SlotId::all()
            .map(|slot| SlotEntry {
                slot,
                label: self.read_label(slot),
            })
            .collect()
    }

    /// Copy current save into target slot.
    #[instrument(skip(self), level = "debug")]
    pub fn save_to_slot(&self, slot: SlotId) -> Vec<FileReport> {
        copy_save_files(
            self.files,
            self.locations.save_dir(),
            self.locations.slot_dir(slot),
        )
    }

    /// Replace current save with contents of target slot.
    ///
    /// Deletes the current save first, so the live directory never ends up as
    /// a mix of old and newly loaded files.
    #[instrument(skip(self), level = "debug")]
    pub fn load_from_slot(&self, slot: SlotId) -> LoadReport {
        let cleared = self.delete_current_save();
        let copied = copy_save_files(
            self.files,
            self.locations.slot_dir(slot),
            self.locations.save_dir(),
        );

        LoadReport { cleared, copied }
    }

    /// Remove target slot entirely, label included.
    ///
    /// Removing a slot whose directory does not exist does nothing. No attempt
    /// is made to restore anything if removal fails halfway.
    ///
    /// # Errors
    ///
    /// - Return [`StoreError::RemoveSlot`] if slot directory cannot be removed.
    #[instrument(skip(self), level = "debug")]
    pub fn delete_slot(&self, slot: SlotId) -> Result<SlotRemoval> {
        let slot_dir = self.locations.slot_dir(slot);
        if !slot_dir.exists() {
            debug!("slot directory {:?} does not exist", slot_dir.display());
            return Ok(SlotRemoval::AlreadyEmpty);
        }

        fs::remove_dir_all(&slot_dir).map_err(|source| StoreError::RemoveSlot {
            source,
            slot_dir,
        })?;

        Ok(SlotRemoval::Deleted)
    }

    /// Read label of target slot.
    ///
    /// A label file that cannot be read yields an empty label.
    pub fn read_label(&self, slot: SlotId) -> SlotLabel {
        match fs::read(self.locations.label_file(slot)) {
            Ok(contents) => SlotLabel::from_contents(String::from_utf8_lossy(&contents)),
            Err(_) => SlotLabel::default(),
        }
    }

    /// Write label of target slot.
    ///
    /// Stores exactly the given text, replacing any previous label. Creates
    /// the slot directory if it is not there yet, because a slot can be named
    /// before it holds any save data.
    ///
    /// # Errors
    ///
    /// - Return [`StoreError::CreateDir`] if slot directory cannot be created.
    /// - Return [`StoreError::WriteLabel`] if label file cannot be written.
    #[instrument(skip(self, label), level = "debug")]
    pub fn write_label(&self, slot: SlotId, label: impl AsRef<str>) -> Result<()> {
        create_dir(self.locations.slot_dir(slot))?;

        let label_path = self.locations.label_file(slot);
        fs::write(&label_path, label.as_ref().as_bytes())
            .map_err(|source| StoreError::WriteLabel { source, label_path })
    }

    /// Delete every save file from the live save directory.
    #[instrument(skip(self), level = "debug")]
    pub fn delete_current_save(&self) -> ClearReport {
        let save_dir = self.locations.save_dir();
        let reports = self
            .files
            .iter()
            .map(|name| {
                let path = save_dir.join(name);
                let outcome = if !path.exists() {
                    Outcome::Missing
                } else {
                    match fs::remove_file(&path) {
                        Ok(()) => Outcome::Done,
                        Err(source) => Outcome::Failed(StoreError::RemoveFile { source, path }),
                    }
                };

                FileReport { name, outcome }
            })
            .collect();

        ClearReport(reports)
    }
}

/// Copy save file set from one directory to another.
///
/// Files missing from `from` are reported and skipped. Files already in `to`
/// are overwritten. The destination directory is created on demand, and only
/// once there is at least one file to put in it.
pub fn copy_save_files(
    files: SaveFileSet,
    from: impl AsRef<Path>,
    to: impl AsRef<Path>,
) -> Vec<FileReport> {
    let (from, to) = (from.as_ref(), to.as_ref());
    debug!("copy save files from {:?} to {:?}", from.display(), to.display());

    files
        .iter()
        .map(|name| {
            let src = from.join(name);
            let outcome = if !src.exists() {
                Outcome::Missing
            } else {
                match copy_file(&src, to.join(name), to) {
                    Ok(()) => Outcome::Done,
                    Err(error) => Outcome::Failed(error),
                }
            };

            FileReport { name, outcome }
        })
        .collect()
}

fn copy_file(src: &Path, dst: PathBuf, dst_dir: &Path) -> Result<()> {
    create_dir(dst_dir)?;
    fs::copy(src, &dst).map_err(|source| StoreError::Copy {
        source,
        src: src.to_path_buf(),
        dst,
    })?;

    Ok(())
}

fn create_dir(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    mkdirp::mkdirp(path).map_err(|source| StoreError::CreateDir {
        source,
        path: path.to_path_buf(),
    })?;

    // INVARIANT: mkdirp accepts an existing non-directory without complaint.
    if !path.is_dir() {
        return Err(StoreError::CreateDir {
            source: io::Error::other("path exists but is not a directory"),
            path: path.to_path_buf(),
        });
    }

    Ok(())
}

/// Slot paired with its current label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotEntry {
    pub slot: SlotId,
    pub label: SlotLabel,
}

/// Result of handling one file of a batch.
#[derive(Debug)]
pub struct FileReport {
    /// Name of file from save file set.
    pub name: &'static str,

    /// What happened to it.
    pub outcome: Outcome,
}

/// Per-file outcome of a copy or delete batch.
#[derive(Debug)]
pub enum Outcome {
    /// File was copied or deleted.
    Done,

    /// File was not there to begin with.
    Missing,

    /// File operation failed.
    Failed(StoreError),
}

impl Outcome {
    /// Check if file was copied or deleted.
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }

    /// Check if file was not there to begin with.
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

/// Reports from deleting the current save.
#[derive(Debug)]
pub struct ClearReport(pub Vec<FileReport>);

impl ClearReport {
    /// Check if current save had no files to delete at all.
    pub fn nothing_to_delete(&self) -> bool {
        self.0.iter().all(|report| report.outcome.is_missing())
    }

    /// Iterate through reports of files that were actually present.
    pub fn present(&self) -> impl Iterator<Item = &FileReport> {
        self.0.iter().filter(|report| !report.outcome.is_missing())
    }
}

/// Reports from loading a slot into the current save.
#[derive(Debug)]
pub struct LoadReport {
    /// Deletion of previous current save.
    pub cleared: ClearReport,

    /// Copy of slot contents into live save directory.
    pub copied: Vec<FileReport>,
}

/// Outcome of slot removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotRemoval {
    /// Slot directory was removed.
    Deleted,

    /// Slot had no directory to remove.
    AlreadyEmpty,
}

/// All possible error types for slot store interaction.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Directory cannot be created.
    #[error("failed to create directory at {:?}", path.display())]
    CreateDir {
        #[source]
        source: io::Error,
        path: PathBuf,
    },

    /// Save file cannot be copied.
    #[error("failed to copy {:?} to {:?}", src.display(), dst.display())]
    Copy {
        #[source]
        source: io::Error,
        src: PathBuf,
        dst: PathBuf,
    },

    /// Save file cannot be deleted.
    #[error("failed to delete {:?}", path.display())]
    RemoveFile {
        #[source]
        source: io::Error,
        path: PathBuf,
    },

    /// Slot directory cannot be removed.
    #[error("failed to remove slot directory {:?}", slot_dir.display())]
    RemoveSlot {
        #[source]
        source: io::Error,
        slot_dir: PathBuf,
    },

    /// Label file cannot be written.
    #[error("failed to write label file {:?}", label_path.display())]
    WriteLabel {
        #[source]
        source: io::Error,
        label_path: PathBuf,
    },
}

/// Friendly result alias :3
pub type Result<T, E = StoreError> = std::result::Result<T, E>;
