// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use crate::error::{Error, Result};

/// Status of a staged file as reported by `git diff --cached --name-status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChangeStatus {
    Added,
    Modified,
    Deleted,
    Renamed,
    Copied,
    /// Any other status letter git may emit (type change, unmerged, ...).
    Unknown(char),
}

impl ChangeStatus {
    /// The five statuses that get their own file bucket.
    pub const KNOWN: [ChangeStatus; 5] = [
        Self::Added,
        Self::Modified,
        Self::Deleted,
        Self::Renamed,
        Self::Copied,
    ];

    pub fn from_letter(letter: char) -> Self {
        match letter {
            'A' => Self::Added,
            'M' => Self::Modified,
            'D' => Self::Deleted,
            'R' => Self::Renamed,
            'C' => Self::Copied,
            other => Self::Unknown(other),
        }
    }

    pub fn letter(&self) -> char {
        match self {
            Self::Added => 'A',
            Self::Modified => 'M',
            Self::Deleted => 'D',
            Self::Renamed => 'R',
            Self::Copied => 'C',
            Self::Unknown(c) => *c,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl std::fmt::Display for ChangeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedChange {
    pub status: ChangeStatus,
    pub path: String,
    /// Source path of a rename or copy, when git reports one.
    pub old_path: Option<String>,
}

impl StagedChange {
    pub fn new(status: ChangeStatus, path: impl Into<String>) -> Self {
        Self {
            status,
            path: path.into(),
            old_path: None,
        }
    }

    /// Final path component. Git always separates with `/`.
    pub fn basename(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }

    /// Suffix after the last `.` of the basename, ignoring leading dots
    /// (so `.gitignore` has no extension). Case is preserved.
    pub fn extension(&self) -> Option<&str> {
        let name = self.basename().trim_start_matches('.');
        let (_, ext) = name.rsplit_once('.')?;
        (!ext.is_empty()).then_some(ext)
    }
}

/// Non-empty, ordered set of staged changes for a single run.
#[derive(Debug, Clone)]
pub struct ChangeSet {
    changes: Vec<StagedChange>,
}

impl ChangeSet {
    pub fn new(changes: Vec<StagedChange>) -> Result<Self> {
        if changes.is_empty() {
            return Err(Error::NoStagedChanges);
        }
        Ok(Self { changes })
    }

    pub fn changes(&self) -> &[StagedChange] {
        &self.changes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StagedChange> {
        self.changes.iter()
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// Always false for a constructed set.
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// The only change, if the set holds exactly one.
    pub fn single(&self) -> Option<&StagedChange> {
        match self.changes.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }
}

impl<'a> IntoIterator for &'a ChangeSet {
    type Item = &'a StagedChange;
    type IntoIter = std::slice::Iter<'a, StagedChange>;

    fn into_iter(self) -> Self::IntoIter {
        self.changes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_follows_last_dot_of_basename() {
        let change = StagedChange::new(ChangeStatus::Added, "archive/data.tar.gz");
        assert_eq!(change.extension(), Some("gz"));
        assert_eq!(change.basename(), "data.tar.gz");
    }

    #[test]
    fn dotfiles_and_bare_names_have_no_extension() {
        for path in [".gitignore", "src.d/Makefile", "notes.", "..hidden"] {
            let change = StagedChange::new(ChangeStatus::Modified, path);
            assert_eq!(change.extension(), None, "{path}");
        }
    }

    #[test]
    fn extension_keeps_case() {
        let change = StagedChange::new(ChangeStatus::Modified, "README.MD");
        assert_eq!(change.extension(), Some("MD"));
    }

    #[test]
    fn empty_change_set_is_rejected() {
        assert!(matches!(
            ChangeSet::new(Vec::new()),
            Err(Error::NoStagedChanges)
        ));
    }

    #[test]
    fn status_letters_roundtrip() {
        for status in ChangeStatus::KNOWN {
            assert_eq!(ChangeStatus::from_letter(status.letter()), status);
        }
        assert_eq!(ChangeStatus::from_letter('T'), ChangeStatus::Unknown('T'));
        assert!(!ChangeStatus::Unknown('T').is_known());
    }
}
