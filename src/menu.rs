// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Interactive menu.
//!
//! Numbered text menu that drives the [`SlotStore`]. Each round lists the
//! slots, shows the menu, reads a choice, and performs it. Nothing carries over
//! from one round to the next.
//!
//! Input goes through the [`Prompt`] trait so the menu can be driven by a
//! terminal through [`InquirePrompt`], or by a script in tests. Slot listings
//! and the menu itself are written to any [`Write`] sink, while the outcome of
//! each action is reported through [`tracing`].

use crate::{
    config::SLOT_COUNT,
    slot::SlotId,
    store::{ClearReport, FileReport, Outcome, SlotRemoval, SlotStore},
};

use inquire::{InquireError, Text};
use std::{
    error::Error as StdError,
    fmt::{Display, Formatter, Result as FmtResult},
    io::{self, Write},
    str::FromStr,
};
use tracing::{debug, error, info, warn};

/// Source of user input.
pub trait Prompt {
    /// Ask user for one line of input.
    ///
    /// # Errors
    ///
    /// - Return [`PromptError::Closed`] if user closed input, which ends the
    ///   menu.
    fn ask(&mut self, message: &str) -> Result<String, PromptError>;
}

/// Terminal prompt through inquire.
#[derive(Debug, Default, Clone, Copy)]
pub struct InquirePrompt;

impl Prompt for InquirePrompt {
    fn ask(&mut self, message: &str) -> Result<String, PromptError> {
        match Text::new(message).prompt() {
            Ok(input) => Ok(input),
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                Err(PromptError::Closed)
            }
            Err(error) => Err(PromptError::Inquire(error)),
        }
    }
}

/// Entries of main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    SaveToSlot,
    LoadFromSlot,
    DeleteSlot,
    RenameSlot,
    DeleteCurrentSave,
    Exit,
}

impl MenuChoice {
    /// Every entry in display order.
    pub const ALL: [MenuChoice; 6] = [
        Self::SaveToSlot,
        Self::LoadFromSlot,
        Self::DeleteSlot,
        Self::RenameSlot,
        Self::DeleteCurrentSave,
        Self::Exit,
    ];

    /// Number user types to pick entry.
    pub fn number(self) -> u32 {
        match self {
            Self::SaveToSlot => 1,
            Self::LoadFromSlot => 2,
            Self::DeleteSlot => 3,
            Self::RenameSlot => 4,
            Self::DeleteCurrentSave => 5,
            Self::Exit => 6,
        }
    }
}

impl FromStr for MenuChoice {
    type Err = MenuError;

    fn from_str(data: &str) -> Result<Self, Self::Err> {
        let number: u32 = data
            .trim()
            .parse()
            .map_err(|_| MenuError::InvalidChoice(data.trim().into()))?;
        Self::ALL
            .into_iter()
            .find(|choice| choice.number() == number)
            .ok_or_else(|| MenuError::InvalidChoice(data.trim().into()))
    }
}

impl Display for MenuChoice {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> FmtResult {
        fmt.write_str(match self {
            Self::SaveToSlot => "Save current save to slot",
            Self::LoadFromSlot => "Load from slot to current save",
            Self::DeleteSlot => "Delete slot",
            Self::RenameSlot => "Rename slot",
            Self::DeleteCurrentSave => "Remove current save",
            Self::Exit => "Exit",
        })
    }
}

/// Whether menu keeps going after a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Interactive menu over slot store.
#[derive(Debug)]
pub struct Menu<P, W>
where
    P: Prompt,
    W: Write,
{
    store: SlotStore,
    prompt: P,
    out: W,
}

impl<P, W> Menu<P, W>
where
    P: Prompt,
    W: Write,
{
    /// Construct new menu.
    pub fn new(store: SlotStore, prompt: P, out: W) -> Self {
        Self { store, prompt, out }
    }

    /// Run menu until user exits or closes input.
    ///
    /// Failed actions are reported and never end the loop.
    ///
    /// # Errors
    ///
    /// - Return [`MenuError::Prompt`] if user input cannot be read.
    /// - Return [`MenuError::Output`] if menu cannot be written out.
    pub fn run(&mut self) -> Result<()> {
        loop {
            match self.round() {
                Ok(Flow::Continue) => writeln!(self.out)?,
                Ok(Flow::Exit) => return Ok(()),
                Err(MenuError::Prompt(PromptError::Closed)) => {
                    debug!("input closed, leaving menu");
                    return Ok(());
                }
                Err(error) => return Err(error),
            }
        }
    }

    fn round(&mut self) -> Result<Flow> {
        self.write_slots()?;
        self.write_menu()?;

        let input = self.prompt.ask("Choose an option")?;
        let choice = match input.parse::<MenuChoice>() {
            Ok(choice) => choice,
            Err(error) => {
                debug!("{error}");
                warn!("Invalid choice.");
                return Ok(Flow::Continue);
            }
        };

        match choice {
            MenuChoice::SaveToSlot => self.with_slot(Self::save_to_slot)?,
            MenuChoice::LoadFromSlot => self.with_slot(Self::load_from_slot)?,
            MenuChoice::DeleteSlot => self.with_slot(Self::delete_slot)?,
            MenuChoice::RenameSlot => self.with_slot(Self::rename_slot)?,
            MenuChoice::DeleteCurrentSave => report_clear(&self.store.delete_current_save()),
            MenuChoice::Exit => return Ok(Flow::Exit),
        }

        Ok(Flow::Continue)
    }

    fn with_slot(&mut self, action: fn(&mut Self, SlotId) -> Result<()>) -> Result<()> {
        match self.ask_slot()? {
            Some(slot) => action(self, slot),
            None => Ok(()),
        }
    }

    fn ask_slot(&mut self) -> Result<Option<SlotId>> {
        let input = self
            .prompt
            .ask(&format!("Enter slot number (1-{SLOT_COUNT})"))?;
        match input.parse::<SlotId>() {
            Ok(slot) => Ok(Some(slot)),
            Err(error) => {
                debug!("{error}");
                warn!("Invalid slot number.");
                Ok(None)
            }
        }
    }

    fn save_to_slot(&mut self, slot: SlotId) -> Result<()> {
        report_copy(&self.store.save_to_slot(slot));
        let label = self.prompt.ask("Enter a name for this save slot")?;
        self.write_label(slot, label);

        Ok(())
    }

    fn load_from_slot(&mut self, slot: SlotId) -> Result<()> {
        let report = self.store.load_from_slot(slot);
        report_clear(&report.cleared);
        report_copy(&report.copied);

        Ok(())
    }

    fn delete_slot(&mut self, slot: SlotId) -> Result<()> {
        match self.store.delete_slot(slot) {
            Ok(SlotRemoval::Deleted) => info!("deleted slot {slot}"),
            Ok(SlotRemoval::AlreadyEmpty) => warn!("slot {slot} is already empty"),
            Err(error) => error!("failed to delete slot {slot}: {}", chain(&error)),
        }

        Ok(())
    }

    fn rename_slot(&mut self, slot: SlotId) -> Result<()> {
        let label = self
            .prompt
            .ask(&format!("Enter new name for Slot {slot}"))?;
        if self.write_label(slot, label) {
            info!("renamed slot {slot}");
        }

        Ok(())
    }

    fn write_label(&mut self, slot: SlotId, label: String) -> bool {
        match self.store.write_label(slot, label) {
            Ok(()) => true,
            Err(error) => {
                warn!("could not label slot {slot}: {}", chain(&error));
                false
            }
        }
    }

    fn write_slots(&mut self) -> Result<()> {
        writeln!(self.out, "=== Save Slots ===")?;
        for entry in self.store.list_slots() {
            writeln!(self.out, "[{}] {}", entry.slot, entry.label)?;
        }

        Ok(())
    }

    fn write_menu(&mut self) -> Result<()> {
        writeln!(self.out, "\n=== Menu ===")?;
        for choice in MenuChoice::ALL {
            writeln!(self.out, "[{}] {choice}", choice.number())?;
        }
        self.out.flush()?;

        Ok(())
    }
}

fn report_copy(reports: &[FileReport]) {
    for report in reports {
        match &report.outcome {
            Outcome::Done => info!("copied {}", report.name),
            Outcome::Missing => warn!("missing file: {}", report.name),
            Outcome::Failed(error) => error!("error copying {}: {}", report.name, chain(error)),
        }
    }
}

fn report_clear(report: &ClearReport) {
    if report.nothing_to_delete() {
        warn!("no save files to delete");
        return;
    }

    for file in report.present() {
        match &file.outcome {
            Outcome::Done => info!("deleted {}", file.name),
            Outcome::Failed(error) => error!("failed to delete {}: {}", file.name, chain(error)),
            Outcome::Missing => {}
        }
    }
}

fn chain(error: &dyn StdError) -> String {
    let mut text = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        text.push_str(": ");
        text.push_str(&cause.to_string());
        source = cause.source();
    }

    text
}

/// User input error types.
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    /// User closed input.
    #[error("input was closed")]
    Closed,

    /// Terminal prompt failed.
    #[error(transparent)]
    Inquire(#[from] InquireError),
}

/// Menu error types.
#[derive(Debug, thiserror::Error)]
pub enum MenuError {
    /// Input does not name any menu entry.
    #[error("{0:?} is not a menu option")]
    InvalidChoice(String),

    /// User input cannot be read.
    #[error(transparent)]
    Prompt(#[from] PromptError),

    /// Menu output cannot be written.
    #[error("failed to write menu output")]
    Output(#[from] io::Error),
}

/// Friendly result alias :3
type Result<T, E = MenuError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::SAVE_FILES, path::Locations};
    use indoc::indoc;
    use sealed_test::prelude::*;
    use simple_test_case::test_case;
    use std::{collections::VecDeque, fs, path::Path};

    struct Script(VecDeque<&'static str>);

    impl Prompt for Script {
        fn ask(&mut self, _message: &str) -> Result<String, PromptError> {
            self.0
                .pop_front()
                .map(String::from)
                .ok_or(PromptError::Closed)
        }
    }

    fn menu(lines: &[&'static str]) -> Menu<Script, Vec<u8>> {
        Menu::new(
            SlotStore::new(Locations::new("live", "backup"), SAVE_FILES),
            Script(lines.iter().copied().collect()),
            Vec::new(),
        )
    }

    #[test_case("1", MenuChoice::SaveToSlot; "save")]
    #[test_case(" 5\n", MenuChoice::DeleteCurrentSave; "padded")]
    #[test_case("6", MenuChoice::Exit; "exit")]
    #[test]
    fn menu_choice_from_str(input: &str, expect: MenuChoice) {
        pretty_assertions::assert_eq!(input.parse::<MenuChoice>().ok(), Some(expect));
    }

    #[test_case("0"; "zero")]
    #[test_case("7"; "past exit")]
    #[test_case("save"; "word")]
    #[test]
    fn menu_choice_rejects_unknown(input: &str) {
        assert!(matches!(
            input.parse::<MenuChoice>(),
            Err(MenuError::InvalidChoice(_))
        ));
    }

    #[sealed_test]
    fn menu_renders_slots_and_entries() -> anyhow::Result<()> {
        fs::create_dir_all("backup/Slot2")?;
        fs::write("backup/Slot2/slotname.txt", "Practice\nignored")?;

        let mut menu = menu(&["6"]);
        menu.run()?;

        let result = String::from_utf8(menu.out)?;
        let expect = indoc! {"
            === Save Slots ===
            [1] (Empty)
            [2] Practice
            [3] (Empty)
            [4] (Empty)
            [5] (Empty)
            [6] (Empty)
            [7] (Empty)
            [8] (Empty)
            [9] (Empty)

            === Menu ===
            [1] Save current save to slot
            [2] Load from slot to current save
            [3] Delete slot
            [4] Rename slot
            [5] Remove current save
            [6] Exit
        "};
        pretty_assertions::assert_eq!(result, expect);

        Ok(())
    }

    #[sealed_test]
    fn menu_rejects_bad_slot_without_side_effects() -> anyhow::Result<()> {
        fs::create_dir("live")?;
        fs::write("live/CCGameManager.dat", "manager")?;

        for choice in ["1", "2", "3", "4"] {
            for slot in ["0", "10", "-3", "two", ""] {
                let mut menu = menu(&[choice, slot, "6"]);
                menu.run()?;
            }
        }

        assert!(!Path::new("backup").exists());
        pretty_assertions::assert_eq!(fs::read_to_string("live/CCGameManager.dat")?, "manager");

        Ok(())
    }

    #[sealed_test]
    fn menu_survives_invalid_choice() -> anyhow::Result<()> {
        let mut menu = menu(&["banana", "42", "4", "9", "Late game", "6"]);
        menu.run()?;

        pretty_assertions::assert_eq!(
            fs::read_to_string("backup/Slot9/slotname.txt")?,
            "Late game"
        );

        Ok(())
    }

    #[sealed_test]
    fn menu_keeps_going_after_label_write_failure() -> anyhow::Result<()> {
        fs::create_dir_all("backup/Slot1/slotname.txt")?;

        let mut menu = menu(&["4", "1", "Unwritable", "4", "2", "Written", "6"]);
        menu.run()?;

        assert!(Path::new("backup/Slot1/slotname.txt").is_dir());
        pretty_assertions::assert_eq!(
            fs::read_to_string("backup/Slot2/slotname.txt")?,
            "Written"
        );

        let listing = String::from_utf8(menu.out)?;
        assert!(listing.contains("[1] (Empty)"));
        assert!(listing.contains("[2] Written"));

        Ok(())
    }

    #[sealed_test]
    fn menu_ends_when_input_closes() -> anyhow::Result<()> {
        fs::create_dir("live")?;
        fs::write("live/CCLocalLevels.dat", "levels")?;

        let mut menu = menu(&["5"]);
        menu.run()?;

        assert!(!Path::new("live/CCLocalLevels.dat").exists());

        Ok(())
    }

    #[test]
    fn chain_joins_causes() {
        let error = crate::store::StoreError::RemoveFile {
            source: io::Error::new(io::ErrorKind::PermissionDenied, "locked"),
            path: "live/CCGameManager.dat".into(),
        };
        pretty_assertions::assert_eq!(
            chain(&error),
            "failed to delete \"live/CCGameManager.dat\": locked"
        );
    }
}
