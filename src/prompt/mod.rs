//! Review prompt composition.
//!
//! The prompt embeds the review metadata, fixed reviewing instructions and
//! the raw diff. Output is a pure function of its inputs.
//!
//! # Template variables
//!
//! - `platform`: platform label, e.g. `GitHub Pull Request`
//! - `number`, `title`, `author`, `body`: review metadata
//! - `diff`: the raw diff, without trailing newlines

use minijinja::{Environment, context};

use crate::error::ReviewError;
use crate::review::Review;

/// Placeholder for reviews without an author handle.
pub const UNKNOWN_AUTHOR: &str = "(unknown)";

/// Placeholder for reviews without a description.
pub const EMPTY_BODY: &str = "(no description provided)";

const TEMPLATE_NAME: &str = "review_prompt";

const REVIEW_PROMPT_TEMPLATE: &str = r"**Code Review Request**

**Platform:** {{ platform }}
**{{ platform }}:** #{{ number }}: {{ title }}
**Author:** {{ author }}

**Description:**
{{ body }}

**Context:**
The following code is part of a {{ platform }}. The goal of this review is to ensure the security, quality and maintainability of the code before it is merged into the main code base.

**Instructions for the AI agent:**

1.  **Security Review:**
    *   Check the code for common security vulnerabilities, such as:
        *   SQL injection
        *   Cross-site scripting (XSS)
        *   Cross-site request forgery (CSRF)
        *   Exposure of sensitive data (API keys, passwords, etc.)
        *   Use of insecure dependencies
        *   Inadequate security configuration
    *   Give a clear assessment of the security risk.

2.  **Code Quality Review:**
    *   Assess the clarity, readability and maintainability of the code.
    *   Check that the code follows good practices for its language.
    *   Identify possible bugs, code smells or overly complex logic.
    *   Assess the handling of errors and exceptional cases.
    *   Suggest improvements to the code where applicable, with examples.

3.  **Conclusion and Recommendation:**
    *   Based on your analysis, give a conclusion on the security and quality of this {{ platform }}.
    *   Answer unambiguously: **Is it safe to merge this {{ platform }}?** (Yes/No).
    *   If the answer is No, list the critical problems that must be resolved before merging.

**Code to Review (Diff):**

```diff
{{ diff }}
```";

/// Composes the review prompt for `review`.
///
/// # Errors
///
/// Returns [`ReviewError::Prompt`] if the template fails to compile or
/// render.
///
/// # Example
///
/// ```
/// use reviewprompt::prompt::compose_prompt;
/// use reviewprompt::review::Review;
///
/// let review = Review::builder(7, "Refactor parser").build();
/// let prompt = compose_prompt(&review, "+fn parse() {}", "GitLab Merge Request")
///     .expect("prompt should render");
/// assert!(prompt.contains("**GitLab Merge Request:** #7: Refactor parser"));
/// assert!(prompt.contains("**Author:** (unknown)"));
/// ```
pub fn compose_prompt(
    review: &Review,
    diff: &str,
    platform_label: &str,
) -> Result<String, ReviewError> {
    let mut env = Environment::new();

    // Diffs and titles are embedded verbatim.
    env.set_auto_escape_callback(|_| minijinja::AutoEscape::None);

    env.add_template(TEMPLATE_NAME, REVIEW_PROMPT_TEMPLATE)
        .map_err(|e| ReviewError::Prompt {
            message: format!("invalid prompt template: {e}"),
        })?;

    let tmpl = env.get_template(TEMPLATE_NAME).map_err(|e| ReviewError::Prompt {
        message: format!("failed to retrieve prompt template: {e}"),
    })?;

    let ctx = context! {
        platform => platform_label,
        number => review.number().get(),
        title => review.title(),
        author => non_empty_or(review.author_handle(), UNKNOWN_AUTHOR),
        body => non_empty_or(review.body(), EMPTY_BODY),
        diff => diff.trim_end_matches(['\r', '\n']),
    };

    tmpl.render(ctx).map_err(|e| ReviewError::Prompt {
        message: format!("prompt rendering failed: {e}"),
    })
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}
