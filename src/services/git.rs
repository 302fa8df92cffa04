// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use std::path::{Path, PathBuf};

use tokio::process::Command;
use tracing::debug;

use crate::error::{Error, Result};

pub struct GitService {
    repo: gix::Repository,
    work_dir: PathBuf,
}

impl GitService {
    pub fn discover() -> Result<Self> {
        Self::discover_from(Path::new("."))
    }

    /// Find the repository containing `dir`, searching upwards.
    pub fn discover_from(dir: &Path) -> Result<Self> {
        let repo = gix::discover(dir).map_err(|_| Error::NotAGitRepo)?;

        let work_dir = repo
            .workdir()
            .ok_or_else(|| Error::Git("Bare repository not supported".into()))?
            .to_path_buf();

        debug!(work_dir = %work_dir.display(), "repository discovered");
        Ok(Self { repo, work_dir })
    }

    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    pub fn check_state(&self) -> Result<()> {
        if matches!(self.repo.state(), Some(gix::state::InProgress::Merge)) {
            return Err(Error::MergeInProgress);
        }
        Ok(())
    }

    /// Raw `git diff --cached --name-status -z` output: NUL-terminated status
    /// and path fields with unquoted paths.
    pub async fn staged_status_records(&self) -> Result<String> {
        self.run(&["diff", "--cached", "--name-status", "-z"]).await
    }

    /// Full staged diff, for the remote model.
    pub async fn staged_diff(&self) -> Result<String> {
        self.run(&["diff", "--cached", "--no-ext-diff"]).await
    }

    pub async fn commit(&self, message: &str) -> Result<()> {
        self.run(&["commit", "-m", message]).await.map(|_| ())
    }

    async fn run(&self, args: &[&str]) -> Result<String> {
        debug!(?args, "running git");
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.work_dir)
            .output()
            .await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Git(stderr.trim().to_string()));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
