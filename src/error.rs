// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

// miette's Diagnostic derive generates code that triggers this false positive
#![allow(unused_assignments)]

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    #[error("No changes staged for commit")]
    #[diagnostic(
        code(git_autocommit::git::no_staged),
        help("Stage files with: git add <files>")
    )]
    NoStagedChanges,

    #[error("Not a git repository (or any of the parent directories)")]
    #[diagnostic(
        code(git_autocommit::git::not_repo),
        help("Run this command inside a git repository")
    )]
    NotAGitRepo,

    #[error("Merge in progress")]
    #[diagnostic(
        code(git_autocommit::git::merge),
        help("Complete or abort the merge: git merge --abort")
    )]
    MergeInProgress,

    #[error("Malformed status line: '{line}'")]
    #[diagnostic(
        code(git_autocommit::git::malformed_status),
        help("Expected '<status letter><whitespace><path>' from git diff --cached --name-status")
    )]
    MalformedStatusLine { line: String },

    #[error("Operation cancelled by user")]
    Cancelled,

    #[error("Provider '{provider}' error: {message}")]
    #[diagnostic(code(git_autocommit::provider::error))]
    Provider { provider: String, message: String },

    #[error("Configuration error: {0}")]
    #[diagnostic(code(git_autocommit::config::error))]
    Config(String),

    #[error("Git error: {0}")]
    #[diagnostic(code(git_autocommit::git::error))]
    Git(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Dialog error: {0}")]
    Dialog(String),
}

impl From<dialoguer::Error> for Error {
    fn from(e: dialoguer::Error) -> Self {
        Error::Dialog(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
