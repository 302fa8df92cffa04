// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::domain::{ChangeSet, ChangeStatus, StagedChange};
use crate::error::{Error, Result};

/// `<letter>[similarity score]<whitespace><path>`; the path must start with a
/// non-space character and is otherwise taken verbatim.
static STATUS_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z])([0-9]*)\s+(\S.*)$").unwrap());

/// Status field of a `-z` record: one letter plus an optional similarity score.
static STATUS_FIELD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z])([0-9]*)$").unwrap());

pub struct ChangeCollector;

impl ChangeCollector {
    /// Parse `git diff --cached --name-status` output into a change set.
    pub fn collect(raw: &str) -> Result<ChangeSet> {
        let mut changes = Vec::new();

        for line in raw.lines() {
            if line.trim().is_empty() {
                continue;
            }
            changes.push(Self::parse_line(line)?);
        }

        debug!(count = changes.len(), "staged changes collected");
        ChangeSet::new(changes)
    }

    /// Parse `git diff --cached --name-status -z` output. Fields are
    /// NUL-terminated and paths are unquoted, so any byte git allows in a file
    /// name (tabs, quotes, non-ASCII) comes through verbatim.
    pub fn collect_records(raw: &str) -> Result<ChangeSet> {
        let mut fields = raw.split('\0');
        let mut changes = Vec::new();

        while let Some(field) = fields.next() {
            if field.trim().is_empty() {
                continue;
            }

            let malformed = || Error::MalformedStatusLine {
                line: field.to_string(),
            };
            let caps = STATUS_FIELD.captures(field.trim()).ok_or_else(malformed)?;
            let letter = caps[1].chars().next().unwrap_or_default();
            let status = ChangeStatus::from_letter(letter);
            let has_score = !caps[2].is_empty();

            let path = fields
                .next()
                .filter(|p| !p.is_empty())
                .ok_or_else(malformed)?;

            // Scored renames and copies carry a second path: the destination
            let change = if has_score
                && matches!(status, ChangeStatus::Renamed | ChangeStatus::Copied)
            {
                let new_path = fields
                    .next()
                    .filter(|p| !p.is_empty())
                    .ok_or_else(malformed)?;
                StagedChange {
                    status,
                    path: new_path.to_string(),
                    old_path: Some(path.to_string()),
                }
            } else {
                StagedChange::new(status, path)
            };
            changes.push(change);
        }

        debug!(count = changes.len(), "staged changes collected");
        ChangeSet::new(changes)
    }

    pub fn parse_line(line: &str) -> Result<StagedChange> {
        let Some(caps) = STATUS_LINE.captures(line) else {
            return Err(Error::MalformedStatusLine {
                line: line.to_string(),
            });
        };

        let letter = caps[1].chars().next().unwrap_or_default();
        let status = ChangeStatus::from_letter(letter);
        let has_score = !caps[2].is_empty();
        let rest = &caps[3];

        // Renames and copies carry "<source>\t<destination>"
        if has_score
            && matches!(status, ChangeStatus::Renamed | ChangeStatus::Copied)
            && let Some((old_path, new_path)) = rest.split_once('\t')
            && !new_path.is_empty()
        {
            return Ok(StagedChange {
                status,
                path: new_path.to_string(),
                old_path: Some(old_path.to_string()),
            });
        }

        Ok(StagedChange::new(status, rest))
    }
}
