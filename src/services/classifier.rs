// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use crate::domain::{ChangeSet, ClassificationSummary};

pub struct ChangeClassifier;

impl ChangeClassifier {
    /// Tally statuses and extensions. Unknown statuses are counted but not
    /// bucketed; files without an extension are left out of the extension map.
    pub fn classify(changes: &ChangeSet) -> ClassificationSummary {
        let mut summary = ClassificationSummary::default();

        for change in changes {
            *summary.counts_by_status.entry(change.status).or_insert(0) += 1;

            if change.status.is_known() {
                summary
                    .files_by_status
                    .entry(change.status)
                    .or_default()
                    .push(change.path.clone());
            }

            if let Some(ext) = change.extension() {
                *summary
                    .counts_by_extension
                    .entry(ext.to_string())
                    .or_insert(0) += 1;
            }
        }

        summary
    }
}
