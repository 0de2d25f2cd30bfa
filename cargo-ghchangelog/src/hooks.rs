use crate::rules::ParsedMessage;
use ghthanks::{GitCommit, RepoName};
use regex::Regex;
use std::sync::LazyLock;

static ISSUE_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+\(#(\d+)\)$").expect("issue id pattern is valid"));

/// Split a trailing ` (#123)` marker off a message
///
/// Returns `None` when the marker is absent or the number does not fit.
pub fn split_issue_id(message: &str) -> Option<(u64, String)> {
    let caps = ISSUE_ID.captures(message)?;
    let issue_id = caps.get(1)?.as_str().parse().ok()?;
    let marker = caps.get(0)?;

    Some((issue_id, message[..marker.start()].to_string()))
}

/// Replace a trailing ` (#123)` with a leading link to the issue
///
/// GitHub treats pull requests as issues, so the link works for either.
pub fn link_issue(message: &str, repo: &RepoName) -> String {
    match split_issue_id(message) {
        Some((issue_id, rest)) => {
            format!("[#{issue_id}](https://github.com/{repo}/issues/{issue_id}) {rest}")
        }
        None => message.to_string(),
    }
}

/// Rewrite one changelog line
///
/// Links the issue, appends `thanks`, drops the scope and clears the commit
/// body, which only gets in the way of the changelog layout.
pub fn changelog_message_builder_hook(
    mut parsed_message: ParsedMessage,
    commit: &mut GitCommit,
    repo: &RepoName,
    thanks: &str,
) -> ParsedMessage {
    let mut message = link_issue(&parsed_message.message, repo);
    message.push_str(thanks);
    parsed_message.message = message;

    parsed_message.scope = None;
    commit.body.clear();

    parsed_message
}

/// Final pass over the whole changelog
pub fn changelog_hook(full_changelog: &str, _partial_changelog: Option<&str>) -> String {
    full_changelog.to_string()
}
