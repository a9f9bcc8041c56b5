//! Deserialisation targets for the GitHub pull request listing.
//!
//! Types prefixed with `Api` mirror the REST payload and convert into the
//! platform-agnostic [`Review`].

use serde::Deserialize;

use crate::review::Review;

/// One entry of `GET /repos/{owner}/{repo}/pulls`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiPullRequest {
    pub(crate) id: Option<u64>,
    pub(crate) number: u64,
    pub(crate) title: Option<String>,
    pub(crate) body: Option<String>,
    pub(crate) user: Option<ApiUser>,
    pub(crate) diff_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiUser {
    pub(crate) login: Option<String>,
}

impl From<ApiPullRequest> for Review {
    fn from(value: ApiPullRequest) -> Self {
        let builder = Self::builder(value.number, value.title.unwrap_or_default())
            .body(value.body.unwrap_or_default())
            .author_handle(value.user.and_then(|user| user.login).unwrap_or_default())
            .diff_reference(value.diff_url.unwrap_or_default());

        match value.id {
            Some(id) => builder.id(id).build(),
            None => builder.build(),
        }
    }
}
