//! The list, select, diff and compose sequence behind a single run.

use std::io::Write;

use crate::aggregator::ReviewAggregator;
use crate::error::ReviewError;
use crate::prompt::compose_prompt;
use crate::review::ReviewNumber;
use crate::selection::ReviewSelector;

/// Line printed before the composed prompt.
pub const PROMPT_START_MARKER: &str = "--- Review Prompt ---";

/// Line printed after the composed prompt.
pub const PROMPT_END_MARKER: &str = "--- End of Prompt ---";

/// How a run ended when no error occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// A prompt was written for the given review.
    Prompted(ReviewNumber),
    /// The platform reported no open reviews.
    NoOpenReviews,
    /// The user cancelled the selection.
    Cancelled,
}

/// Runs one review session.
///
/// The prompt goes to `output`; status lines go to `status`. Steps run
/// strictly in sequence and the first error aborts the run.
///
/// # Errors
///
/// Propagates listing, selection, diff and prompt errors, and returns
/// [`ReviewError::Io`] when writing fails.
pub async fn run_review<S, O, E>(
    aggregator: &ReviewAggregator,
    selector: &mut S,
    output: &mut O,
    status: &mut E,
) -> Result<RunOutcome, ReviewError>
where
    S: ReviewSelector + ?Sized,
    O: Write,
    E: Write,
{
    let reviews = aggregator.list_reviews().await?;
    if reviews.is_empty() {
        writeln!(
            status,
            "No open {} found for {}.",
            aggregator.context().kind().request_noun(),
            aggregator.repo_path()
        )?;
        return Ok(RunOutcome::NoOpenReviews);
    }

    let Some(index) = selector.select(&reviews)? else {
        writeln!(status, "Selection cancelled.")?;
        return Ok(RunOutcome::Cancelled);
    };
    let review = reviews.get(index).ok_or_else(|| ReviewError::Selection {
        message: format!("selected index {index} is out of range"),
    })?;

    tracing::debug!(number = %review.number(), "fetching diff");
    let diff = aggregator
        .fetch_diff(review.number(), aggregator.repo_path())
        .await?;
    let prompt = compose_prompt(review, &diff, aggregator.platform_label())?;

    writeln!(output, "{PROMPT_START_MARKER}")?;
    writeln!(output, "{prompt}")?;
    writeln!(output, "{PROMPT_END_MARKER}")?;
    output.flush()?;

    Ok(RunOutcome::Prompted(review.number()))
}
