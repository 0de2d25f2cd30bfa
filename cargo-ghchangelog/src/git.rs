use crate::error::{ChangelogError, Result};
use ghthanks::GitCommit;
use git2::Repository;
use std::path::Path;

/// Load a commit from the repository containing `repo_path`
pub fn read_commit(repo_path: &Path, rev: &str) -> Result<GitCommit> {
    let repo = Repository::discover(repo_path)?;
    let commit = repo.revparse_single(rev)?.peel_to_commit()?;

    let title = commit
        .summary()
        .filter(|summary| !summary.trim().is_empty())
        .ok_or_else(|| ChangelogError::EmptySubject {
            rev: rev.to_string(),
        })?
        .to_string();
    let body = commit.body().unwrap_or_default().to_string();

    tracing::debug!("Read commit {} ({})", commit.id(), title);

    Ok(GitCommit::new(commit.id().to_string(), title).with_body(body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn commit_file(repo: &Repository, name: &str, message: &str) -> git2::Oid {
        let workdir = repo.workdir().unwrap().to_path_buf();
        fs::write(workdir.join(name), message).unwrap();

        let mut index = repo.index().unwrap();
        index.add_path(Path::new(name)).unwrap();
        index.write().unwrap();

        let tree_id = index.write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();
        let sig = git2::Signature::now("Test User", "test@example.com").unwrap();
        let parents = match repo.head() {
            Ok(head) => vec![head.peel_to_commit().unwrap()],
            Err(_) => Vec::new(),
        };
        let parent_refs: Vec<&git2::Commit> = parents.iter().collect();

        repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parent_refs)
            .unwrap()
    }

    #[test]
    fn test_read_commit_title_and_body() {
        let dir = tempdir().unwrap();
        let repo = Repository::init(dir.path()).unwrap();
        let oid = commit_file(
            &repo,
            "a.txt",
            "fix(cli): Handle empty input (#12)\n\nSome details.\n",
        );

        let commit = read_commit(dir.path(), "HEAD").unwrap();
        assert_eq!(commit.rev, oid.to_string());
        assert_eq!(commit.title, "fix(cli): Handle empty input (#12)");
        assert_eq!(commit.body.trim(), "Some details.");
    }

    #[test]
    fn test_read_commit_by_short_sha() {
        let dir = tempdir().unwrap();
        let repo = Repository::init(dir.path()).unwrap();
        let first = commit_file(&repo, "a.txt", "feat: first");
        commit_file(&repo, "b.txt", "fix: second");

        let short = &first.to_string()[..8];
        let commit = read_commit(dir.path(), short).unwrap();
        assert_eq!(commit.title, "feat: first");
        assert!(commit.body.is_empty());
    }

    #[test]
    fn test_read_commit_unknown_rev() {
        let dir = tempdir().unwrap();
        let repo = Repository::init(dir.path()).unwrap();
        commit_file(&repo, "a.txt", "feat: first");

        assert!(matches!(
            read_commit(dir.path(), "does-not-exist"),
            Err(ChangelogError::Git(_))
        ));
    }
}
