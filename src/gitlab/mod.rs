//! GitLab merge request support through the `glab` CLI.
//!
//! GitLab is served by shelling out to `glab`, which already owns
//! authentication. Listings come back as human-formatted text and are
//! reconstructed by [`parse_listing`].

mod listing;

pub use listing::{
    MERGE_REQUEST_MARKER, ParseWarning, ParsedListing, parse_listing, parse_listing_line,
    strip_branch_annotation,
};

use crate::review::ReviewNumber;

/// Default `glab` executable.
pub const DEFAULT_GLAB_COMMAND: &str = "glab";

/// Arguments for `glab mr list --repo <path>`.
#[must_use]
pub fn list_args(repo_path: &str) -> Vec<String> {
    vec![
        "mr".to_owned(),
        "list".to_owned(),
        "--repo".to_owned(),
        repo_path.to_owned(),
    ]
}

/// Arguments for `glab mr diff <number> --repo <path>`.
#[must_use]
pub fn diff_args(number: ReviewNumber, repo_path: &str) -> Vec<String> {
    vec![
        "mr".to_owned(),
        "diff".to_owned(),
        number.to_string(),
        "--repo".to_owned(),
        repo_path.to_owned(),
    ]
}
