//! Validated menu selection.
//!
//! Parsing is separate from the console so any front end can reuse it.

use crate::error::{IslandError, Result};
use std::io::{BufRead, Write};
use thiserror::Error;

pub const CHOICE_PROMPT: &str = "Enter the number of your choice: ";

/// Why a line of input was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChoiceError {
    #[error("Invalid input. Please enter a number.")]
    NotANumber,

    #[error("Invalid choice. Please enter a number corresponding to a power generation method.")]
    OutOfRange { value: i64, count: usize },
}

/// A menu position known to be inside the catalog it was validated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MethodChoice(usize);

impl MethodChoice {
    /// Validate a 1-based menu number against a menu of `count` entries.
    pub fn from_one_based(value: i64, count: usize) -> std::result::Result<Self, ChoiceError> {
        if value >= 1 && (value as u64) <= count as u64 {
            Ok(Self(value as usize - 1))
        } else {
            Err(ChoiceError::OutOfRange { value, count })
        }
    }

    /// Zero-based position in the menu.
    pub fn index(self) -> usize {
        self.0
    }

    /// 1-based number as typed by the player.
    pub fn number(self) -> usize {
        self.0 + 1
    }
}

/// Parse one line of player input.
pub fn parse_choice(line: &str, count: usize) -> std::result::Result<MethodChoice, ChoiceError> {
    let value: i64 = line.trim().parse().map_err(|_| ChoiceError::NotANumber)?;
    MethodChoice::from_one_based(value, count)
}

/// Prompt until the player enters a valid menu number.
///
/// Rejected lines are answered with the error message and the prompt repeats.
/// Fails only if the reader hits end of input or the streams error.
pub fn prompt_choice<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    count: usize,
) -> Result<MethodChoice> {
    let mut line = String::new();
    loop {
        write!(writer, "{}", CHOICE_PROMPT)?;
        writer.flush()?;

        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return Err(IslandError::InputClosed);
        }

        match parse_choice(&line, count) {
            Ok(choice) => return Ok(choice),
            Err(e) => writeln!(writer, "{}", e)?,
        }
    }
}
