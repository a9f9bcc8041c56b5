//! Review-prompt library crate.
//!
//! Detects whether the current project is hosted on GitHub or GitLab from its
//! git remote, lists the open pull or merge requests, and composes a review
//! prompt for an AI agent from the chosen request's metadata and diff.
//!
//! GitHub listings come from the REST API via Octocrab; GitLab listings are
//! parsed from `glab mr list` output. Diffs are fetched with the platform CLI.

pub mod aggregator;
pub mod config;
pub mod error;
pub mod github;
pub mod gitlab;
pub mod pipeline;
pub mod platform;
pub mod process;
pub mod prompt;
pub mod review;
pub mod selection;
pub mod source;

pub use aggregator::ReviewAggregator;
pub use config::ReviewPromptConfig;
pub use error::ReviewError;
pub use github::{GitHubRepository, GitHubToken, OctocrabGateway, PullRequestGateway};
pub use gitlab::{ParseWarning, ParsedListing, parse_listing, parse_listing_line};
pub use pipeline::{PROMPT_END_MARKER, PROMPT_START_MARKER, RunOutcome, run_review};
pub use platform::{PlatformContext, PlatformKind, RemoteClassification, classify_remote};
pub use process::{CommandOutput, CommandRunner, SystemCommandRunner};
pub use prompt::compose_prompt;
pub use review::{Review, ReviewNumber};
pub use selection::{LineSelector, NumberSelector, ReviewSelector};
pub use source::{ReviewSource, StructuredSource, TextSource};
