// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use std::collections::BTreeMap;

use super::ChangeStatus;

/// Per-run tallies derived from a [`ChangeSet`](super::ChangeSet).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassificationSummary {
    /// Every status seen, unknown letters included.
    pub counts_by_status: BTreeMap<ChangeStatus, usize>,
    /// Paths bucketed by status; only the five known statuses appear here.
    pub files_by_status: BTreeMap<ChangeStatus, Vec<String>>,
    /// Raw (case-preserved) extension to file count.
    pub counts_by_extension: BTreeMap<String, usize>,
}

impl ClassificationSummary {
    pub fn count(&self, status: ChangeStatus) -> usize {
        self.counts_by_status.get(&status).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts_by_status.values().sum()
    }

    pub fn files(&self, status: ChangeStatus) -> &[String] {
        self.files_by_status
            .get(&status)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The extension shared by every file that has one, if there is exactly one.
    pub fn single_extension(&self) -> Option<&str> {
        let mut keys = self.counts_by_extension.keys();
        match (keys.next(), keys.next()) {
            (Some(ext), None) => Some(ext.as_str()),
            _ => None,
        }
    }
}
