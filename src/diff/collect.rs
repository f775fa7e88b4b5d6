//! Diff collection from the working tree using git2.

use std::path::Path;

use git2::{DiffFormat, DiffOptions, ErrorCode, Repository, Tree};
use tracing::debug;

use crate::error::DiffError;

/// Open the repository rooted at `path`.
pub fn open_repository(path: &Path) -> Result<Repository, DiffError> {
    Repository::open(path).map_err(DiffError::OpenRepository)
}

/// The tree HEAD points at, or `None` before the first commit so the diff
/// runs against the empty tree. A HEAD that exists but cannot be read fails.
fn head_tree(repo: &Repository) -> Result<Option<Tree<'_>>, DiffError> {
    match repo.head() {
        Ok(head) => head.peel_to_tree().map(Some).map_err(DiffError::DiffFailed),
        Err(e) if matches!(e.code(), ErrorCode::UnbornBranch | ErrorCode::NotFound) => {
            debug!("No commits yet, diffing against the empty tree");
            Ok(None)
        }
        Err(e) => Err(DiffError::DiffFailed(e)),
    }
}

/// Collect the unified diff between HEAD and the working tree.
///
/// Staged and unstaged changes to tracked files are both included. Changes
/// that only add or remove blank lines, or only touch whitespace at the end
/// of a line, are ignored. A clean tree yields an empty string.
pub fn collect_diff(repo: &Repository) -> Result<String, DiffError> {
    let base = head_tree(repo)?;

    let mut opts = DiffOptions::new();
    opts.ignore_blank_lines(true).ignore_whitespace_eol(true);

    let diff = repo
        .diff_tree_to_workdir_with_index(base.as_ref(), Some(&mut opts))
        .map_err(DiffError::DiffFailed)?;

    let mut text = String::new();
    diff.print(DiffFormat::Patch, |_delta, _hunk, line| {
        let origin = line.origin();
        if origin == '+' || origin == '-' || origin == ' ' {
            text.push(origin);
        }
        text.push_str(&String::from_utf8_lossy(line.content()));
        true
    })
    .map_err(DiffError::DiffFailed)?;

    debug!(
        "Collected diff: {} files, {} chars",
        diff.deltas().len(),
        text.chars().count()
    );

    Ok(text)
}
