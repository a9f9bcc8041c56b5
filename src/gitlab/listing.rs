//! Parser for the human-oriented output of `glab mr list`.
//!
//! `glab` has no machine-readable mode for this listing, so each merge
//! request is reconstructed from a column-aligned line such as:
//!
//! ```text
//! !42  acme/widgets  Fix login bug (fix-login ← main)
//! ```
//!
//! The parser is deliberately tolerant. Lines it cannot understand are
//! dropped; a line that looks like a merge request but carries a bad number
//! produces a [`ParseWarning`]. Neither ever aborts the listing.

use std::fmt;

use crate::review::Review;

/// Prefix that marks a merge request line.
pub const MERGE_REQUEST_MARKER: char = '!';

/// Reference, project path and at least one title word, plus one more column.
const MIN_TOKENS: usize = 4;

/// Non-fatal problem with a single listing line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseWarning {
    /// The offending line, trimmed.
    pub line: String,
    /// Why the line was dropped.
    pub reason: String,
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "skipped line {:?}: {}", self.line, self.reason)
    }
}

/// Reviews recovered from a listing, in listing order, plus dropped lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedListing {
    /// Successfully parsed merge requests.
    pub reviews: Vec<Review>,
    /// Lines that looked like merge requests but could not be parsed.
    pub warnings: Vec<ParseWarning>,
}

/// Parses the full stdout of `glab mr list`.
#[must_use]
pub fn parse_listing(output: &str) -> ParsedListing {
    let mut listing = ParsedListing::default();

    for line in output.lines() {
        match parse_listing_line(line) {
            Ok(Some(review)) => listing.reviews.push(review),
            Ok(None) => {}
            Err(warning) => listing.warnings.push(warning),
        }
    }

    listing
}

/// Parses one listing line.
///
/// Returns `Ok(None)` for blank lines, headers and lines with too few
/// columns.
///
/// # Errors
///
/// Returns a [`ParseWarning`] when the line starts with the merge request
/// marker but the number after it is not an unsigned integer.
pub fn parse_listing_line(line: &str) -> Result<Option<Review>, ParseWarning> {
    let trimmed = line.trim();
    if !trimmed.starts_with(MERGE_REQUEST_MARKER) {
        return Ok(None);
    }

    let tokens: Vec<&str> = trimmed.split_whitespace().collect();
    if tokens.len() < MIN_TOKENS {
        return Ok(None);
    }
    // Column 1 repeats the project path and carries nothing new.
    let [reference, _project, title_words @ ..] = tokens.as_slice() else {
        return Ok(None);
    };

    let digits = reference
        .strip_prefix(MERGE_REQUEST_MARKER)
        .unwrap_or(reference);
    let number = digits.parse::<u64>().map_err(|error| ParseWarning {
        line: trimmed.to_owned(),
        reason: format!("invalid merge request number {digits:?}: {error}"),
    })?;

    let joined = title_words.join(" ");
    let title = strip_branch_annotation(&joined);

    Ok(Some(
        Review::builder(number, title)
            .diff_reference(*reference)
            .build(),
    ))
}

/// Removes the trailing `(branch)` decoration `glab` appends to titles.
///
/// Only the rightmost parenthesised group is considered. The title is kept
/// unchanged when the parentheses are missing, out of order, or when removing
/// them would leave nothing.
#[must_use]
pub fn strip_branch_annotation(title: &str) -> &str {
    let (Some(open), Some(close)) = (title.rfind('('), title.rfind(')')) else {
        return title;
    };
    if close < open {
        return title;
    }

    match title.get(..open).map(str::trim_end) {
        Some(stripped) if !stripped.is_empty() => stripped,
        _ => title,
    }
}
