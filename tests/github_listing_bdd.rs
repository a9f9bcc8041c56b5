//! Behavioural tests for listing GitHub pull requests through the REST API.

mod support;

use std::sync::Arc;

use reviewprompt::{
    GitHubRepository, GitHubToken, OctocrabGateway, Review, ReviewError, ReviewSource,
    StructuredSource,
};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use serde_json::json;
use support::ScriptedRunner;
use support::runtime::{SharedRuntime, ensure_runtime_and_server};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(ScenarioState, Default)]
struct ListingState {
    runtime: Slot<SharedRuntime>,
    server: Slot<MockServer>,
    repo: Slot<String>,
    reviews: Slot<Vec<Review>>,
    error: Slot<ReviewError>,
}

#[fixture]
fn listing_state() -> ListingState {
    ListingState::default()
}

type StepResult = Result<(), Box<dyn std::error::Error>>;

fn pull_request_json(repo: &str, number: u64, title: &str) -> serde_json::Value {
    json!({
        "id": number * 1000,
        "number": number,
        "title": title,
        "body": "",
        "user": { "login": "octocat" },
        "diff_url": format!("https://github.com/{repo}/pull/{number}.diff")
    })
}

fn mount(listing_state: &ListingState, repo: &str, response: ResponseTemplate) -> StepResult {
    let runtime = ensure_runtime_and_server(&listing_state.runtime, &listing_state.server)?;
    let mock = Mock::given(method("GET"))
        .and(path(format!("/repos/{repo}/pulls")))
        .and(query_param("state", "open"))
        .respond_with(response);

    listing_state
        .server
        .with_ref(|server| runtime.block_on(mock.mount(server)))
        .ok_or("mock server not initialised")?;
    listing_state.repo.set(repo.to_owned());
    Ok(())
}

#[given("a mock GitHub API listing open pull requests {first:u64} and {second:u64} for {repo}")]
fn seed_listing(listing_state: &ListingState, first: u64, second: u64, repo: String) -> StepResult {
    let repo_path = repo.trim_matches('"');
    let body = json!([
        pull_request_json(repo_path, first, "Fix login bug"),
        pull_request_json(repo_path, second, "Refactor parser"),
    ]);
    mount(
        listing_state,
        repo_path,
        ResponseTemplate::new(200).set_body_json(body),
    )
}

#[given("a mock GitHub API rejecting the token for {repo}")]
fn seed_rejection(listing_state: &ListingState, repo: String) -> StepResult {
    mount(
        listing_state,
        repo.trim_matches('"'),
        ResponseTemplate::new(401).set_body_json(json!({
            "message": "Bad credentials",
            "documentation_url": "https://docs.github.com/rest"
        })),
    )
}

#[when("the GitHub reviews are listed with token {token}")]
fn list_reviews(listing_state: &ListingState, token: String) -> StepResult {
    let runtime = listing_state.runtime.get().ok_or("runtime not initialised")?;
    let server_uri = listing_state
        .server
        .with_ref(MockServer::uri)
        .ok_or("mock server not initialised")?;
    let repo = listing_state.repo.get().ok_or("repository not seeded")?;
    let (owner, name) = repo.split_once('/').ok_or("repository should be owner/name")?;

    let repository = GitHubRepository::new(owner, name, &server_uri)?;
    let token = GitHubToken::new(token.trim_matches('"'))?;
    let gateway = runtime.enter(|| OctocrabGateway::for_token(&token, &repository))?;
    let source = ReviewSource::Structured(StructuredSource::new(
        Box::new(gateway),
        Arc::new(ScriptedRunner::default()),
        repository,
        "gh",
    ));

    match runtime.block_on(source.list_reviews()) {
        Ok(reviews) => listing_state.reviews.set(reviews),
        Err(error) => listing_state.error.set(error),
    }
    Ok(())
}

fn review_at(listing_state: &ListingState, position: usize) -> Result<Review, Box<dyn std::error::Error>> {
    listing_state
        .reviews
        .with_ref(|reviews| {
            position
                .checked_sub(1)
                .and_then(|index| reviews.get(index))
                .cloned()
        })
        .ok_or("reviews were not listed")?
        .ok_or_else(|| format!("no review at position {position}").into())
}

#[then("{count:usize} GitHub reviews are listed")]
fn assert_count(listing_state: &ListingState, count: usize) -> StepResult {
    let actual = listing_state
        .reviews
        .with_ref(Vec::len)
        .ok_or("reviews were not listed")?;
    if actual == count {
        Ok(())
    } else {
        Err(format!("expected {count} reviews, got {actual}").into())
    }
}

#[then("GitHub review {position:usize} is number {number:u64} titled {title}")]
fn assert_review(
    listing_state: &ListingState,
    position: usize,
    number: u64,
    title: String,
) -> StepResult {
    let review = review_at(listing_state, position)?;
    let expected_title = title.trim_matches('"');
    if review.number().get() == number && review.title() == expected_title {
        Ok(())
    } else {
        Err(format!("expected #{number} '{expected_title}', got {}", review.menu_label()).into())
    }
}

#[then("GitHub review {position:usize} has diff reference {reference}")]
fn assert_diff_reference(
    listing_state: &ListingState,
    position: usize,
    reference: String,
) -> StepResult {
    let review = review_at(listing_state, position)?;
    let expected = reference.trim_matches('"');
    if review.diff_reference() == expected {
        Ok(())
    } else {
        Err(format!("expected diff reference {expected}, got {}", review.diff_reference()).into())
    }
}

#[then("the listing error mentions {fragment}")]
fn assert_error(listing_state: &ListingState, fragment: String) -> StepResult {
    let expected = fragment.trim_matches('"');
    let error = listing_state.error.get().ok_or("listing should have failed")?;
    let ReviewError::SourceUnavailable { platform, message } = &error else {
        return Err(format!("expected SourceUnavailable, got {error:?}").into());
    };
    if platform == "GitHub" && message.contains(expected) {
        Ok(())
    } else {
        Err(format!("expected GitHub error mentioning '{expected}', got: {error}").into())
    }
}

#[scenario(path = "tests/features/github_listing.feature", index = 0)]
fn list_open_pull_requests(listing_state: ListingState) {
    let _ = listing_state;
}

#[scenario(path = "tests/features/github_listing.feature", index = 1)]
fn rejected_token_is_reported(listing_state: ListingState) {
    let _ = listing_state;
}
