//! Platform-agnostic review records.
//!
//! A [`Review`] is built once, in a single parsing or mapping pass, and is
//! never mutated afterwards. Fields are private and exposed through
//! read-only accessors.

use std::fmt;

/// User-facing review number (GitHub PR number or GitLab MR IID).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ReviewNumber(u64);

impl ReviewNumber {
    /// Wraps a raw review number.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ReviewNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ReviewNumber {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

/// One open pull or merge request, independent of the hosting platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    id: Option<u64>,
    number: ReviewNumber,
    title: String,
    body: String,
    author_handle: String,
    diff_reference: String,
}

impl Review {
    /// Starts building a review with its two mandatory fields.
    #[must_use]
    pub fn builder(number: impl Into<ReviewNumber>, title: impl Into<String>) -> ReviewBuilder {
        ReviewBuilder {
            review: Self {
                id: None,
                number: number.into(),
                title: title.into(),
                body: String::new(),
                author_handle: String::new(),
                diff_reference: String::new(),
            },
        }
    }

    /// Internal database id, when the source exposes one.
    #[must_use]
    pub const fn id(&self) -> Option<u64> {
        self.id
    }

    /// The number shown to the user and passed to diff commands.
    #[must_use]
    pub const fn number(&self) -> ReviewNumber {
        self.number
    }

    /// Review title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Review description; empty when the source does not provide one.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Author handle; empty for text-backed sources.
    #[must_use]
    pub fn author_handle(&self) -> &str {
        &self.author_handle
    }

    /// Opaque locator for the review's diff.
    #[must_use]
    pub fn diff_reference(&self) -> &str {
        &self.diff_reference
    }

    /// Label used in selection menus, e.g. `#42: Fix login bug`.
    #[must_use]
    pub fn menu_label(&self) -> String {
        format!("#{}: {}", self.number, self.title)
    }
}

/// Builder for [`Review`] values.
#[derive(Debug, Clone)]
#[must_use]
pub struct ReviewBuilder {
    review: Review,
}

impl ReviewBuilder {
    /// Sets the internal database id.
    pub const fn id(mut self, id: u64) -> Self {
        self.review.id = Some(id);
        self
    }

    /// Sets the review description.
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.review.body = body.into();
        self
    }

    /// Sets the author handle.
    pub fn author_handle(mut self, author_handle: impl Into<String>) -> Self {
        self.review.author_handle = author_handle.into();
        self
    }

    /// Sets the diff locator.
    pub fn diff_reference(mut self, diff_reference: impl Into<String>) -> Self {
        self.review.diff_reference = diff_reference.into();
        self
    }

    /// Finishes the review.
    pub fn build(self) -> Review {
        self.review
    }
}
