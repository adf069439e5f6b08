// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Backup slot identity and labels.
//!
//! A __slot__ is a numbered directory inside of the backup root that holds a
//! copy of the save file set, plus an optional label file. Slots are never
//! registered anywhere. A slot has content if its directory exists, and is
//! considered empty otherwise.
//!
//! # Labels
//!
//! Each slot may carry a single line of text that names it for the user. The
//! label lives in its own file inside of the slot directory, so a slot can be
//! labeled without holding any save data, and vice versa. Only the first line
//! of the label file means anything. Missing or blank labels show up as
//! `(Empty)`.

use crate::config::SLOT_COUNT;

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

/// Validated slot identifier.
///
/// Always lies within `1..=SLOT_COUNT`. The only way to get one is through
/// [`SlotId::new`], or the [`FromStr`] and [`TryFrom`] conversions, which all
/// reject out of range numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotId(u32);

impl SlotId {
    /// Construct new slot identifier.
    ///
    /// # Errors
    ///
    /// - Return [`SlotError::OutOfRange`] if `id` is outside `1..=SLOT_COUNT`.
    pub fn new(id: u32) -> Result<Self> {
        if (1..=SLOT_COUNT).contains(&id) {
            Ok(Self(id))
        } else {
            Err(SlotError::OutOfRange { id: id.into() })
        }
    }

    /// Iterate through every valid slot in ascending order.
    pub fn all() -> impl Iterator<Item = SlotId> {
        (1..=SLOT_COUNT).map(SlotId)
    }

    /// Numeric value of slot.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<i64> for SlotId {
    type Error = SlotError;

    fn try_from(id: i64) -> Result<Self, Self::Error> {
        u32::try_from(id)
            .map_err(|_| SlotError::OutOfRange { id })
            .and_then(SlotId::new)
    }
}

impl FromStr for SlotId {
    type Err = SlotError;

    fn from_str(data: &str) -> Result<Self, Self::Err> {
        let id: i64 = data
            .trim()
            .parse()
            .map_err(|_| SlotError::NotANumber(data.trim().into()))?;
        SlotId::try_from(id)
    }
}

impl Display for SlotId {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> FmtResult {
        write!(fmt, "{}", self.0)
    }
}

/// Display label of a slot.
///
/// Holds only the first line of whatever was stored. An empty label is a
/// perfectly valid value, it just displays as `(Empty)`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SlotLabel(String);

impl SlotLabel {
    /// Placeholder shown for slots with no label.
    pub const PLACEHOLDER: &'static str = "(Empty)";

    /// Construct new label from raw label file contents.
    ///
    /// Everything past the first line is dropped.
    pub fn from_contents(contents: impl AsRef<str>) -> Self {
        Self(
            contents
                .as_ref()
                .lines()
                .next()
                .unwrap_or_default()
                .to_string(),
        )
    }

    /// Check if label has no text.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Raw label text, without placeholder substitution.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for SlotLabel {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> FmtResult {
        if self.is_empty() {
            fmt.write_str(Self::PLACEHOLDER)
        } else {
            fmt.write_str(self.as_str())
        }
    }
}

/// Slot identifier error types.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SlotError {
    /// Number does not name any slot.
    #[error("slot {id} is outside of 1-{}", SLOT_COUNT)]
    OutOfRange { id: i64 },

    /// Input is not a number at all.
    #[error("{0:?} is not a slot number")]
    NotANumber(String),
}

/// Friendly result alias :3
type Result<T, E = SlotError> = std::result::Result<T, E>;
