//! Choosing the review to prompt for.
//!
//! Interactive selection sits behind [`ReviewSelector`] so the pipeline can be
//! driven by a menu on a terminal, a configured number, or a test double.

use std::io::{BufRead, Write};

use crate::error::ReviewError;
use crate::review::{Review, ReviewNumber};

/// Picks one review out of an ordered listing.
#[cfg_attr(test, mockall::automock)]
pub trait ReviewSelector {
    /// Returns the index of the chosen review, or `None` when the user
    /// cancels.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::Selection`] when the selection cannot be made.
    fn select(&mut self, reviews: &[Review]) -> Result<Option<usize>, ReviewError>;
}

/// Line-oriented menu selector.
///
/// Writes a numbered menu and reads a 1-based index. Invalid input
/// re-prompts; an empty line or end of input cancels.
#[derive(Debug)]
pub struct LineSelector<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LineSelector<R, W> {
    /// Creates a selector reading from `reader` and writing to `writer`.
    #[must_use]
    pub const fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    fn write_menu(&mut self, reviews: &[Review]) -> Result<(), ReviewError> {
        writeln!(self.writer, "Select a review:")?;
        for (position, review) in reviews.iter().enumerate() {
            writeln!(self.writer, "  {}) {}", position + 1, review.menu_label())?;
        }
        Ok(())
    }

    fn read_choice(&mut self) -> Result<Option<String>, ReviewError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        Ok(Some(trimmed.to_owned()))
    }
}

impl<R: BufRead, W: Write> ReviewSelector for LineSelector<R, W> {
    fn select(&mut self, reviews: &[Review]) -> Result<Option<usize>, ReviewError> {
        if reviews.is_empty() {
            return Ok(None);
        }

        self.write_menu(reviews)?;
        loop {
            write!(
                self.writer,
                "Enter a number [1-{}] (empty to cancel): ",
                reviews.len()
            )?;
            self.writer.flush()?;

            let Some(choice) = self.read_choice()? else {
                return Ok(None);
            };

            match choice.parse::<usize>() {
                Ok(position) if (1..=reviews.len()).contains(&position) => {
                    return Ok(Some(position - 1));
                }
                _ => writeln!(self.writer, "invalid selection: {choice}")?,
            }
        }
    }
}

/// Selects the review whose number was configured up front.
#[derive(Debug, Clone, Copy)]
pub struct NumberSelector {
    number: ReviewNumber,
}

impl NumberSelector {
    /// Creates a selector for `number`.
    #[must_use]
    pub const fn new(number: ReviewNumber) -> Self {
        Self { number }
    }
}

impl ReviewSelector for NumberSelector {
    fn select(&mut self, reviews: &[Review]) -> Result<Option<usize>, ReviewError> {
        reviews
            .iter()
            .position(|review| review.number() == self.number)
            .map(Some)
            .ok_or_else(|| ReviewError::Selection {
                message: format!("no open review numbered #{}", self.number),
            })
    }
}
