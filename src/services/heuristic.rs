// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use crate::domain::{ChangeSet, ChangeStatus, ClassificationSummary, StagedChange};

/// Templates for a lone change; statuses not listed fall through.
const SINGLE_FILE_VERBS: &[(ChangeStatus, &str)] = &[
    (ChangeStatus::Added, "Add"),
    (ChangeStatus::Modified, "Update"),
    (ChangeStatus::Deleted, "Delete"),
    (ChangeStatus::Renamed, "Rename file to"),
];

/// Checked in order; the first status holding at least half the changes wins.
const PRIMARY_ACTIONS: &[(ChangeStatus, &str)] = &[
    (ChangeStatus::Added, "Add"),
    (ChangeStatus::Modified, "Update"),
    (ChangeStatus::Deleted, "Remove"),
];

const SCOPES: &[(&[&str], &str)] = &[
    (&["js", "ts"], "JavaScript"),
    (&["py"], "Python"),
    (&["css", "scss"], "styles"),
    (&["html"], "HTML"),
    (&["md", "txt"], "documentation"),
    (&["json", "yaml", "yml", "toml"], "configuration"),
];

const FALLBACK_VERB: &str = "Update";

pub struct HeuristicSynthesizer;

impl HeuristicSynthesizer {
    /// Describe the change set. Never returns an empty string.
    pub fn synthesize(changes: &ChangeSet, summary: &ClassificationSummary) -> String {
        if let Some(message) = changes.single().and_then(Self::single_file) {
            return message;
        }

        let total = changes.len();
        let action = Self::primary_action(summary);
        let scope = summary.single_extension().and_then(Self::scope_for);

        match (action, scope) {
            (Some(action), Some(scope)) => format!("{action} {scope} files"),
            (Some(action), None) => format!("{action} {total} files"),
            _ => format!("{FALLBACK_VERB} {total} files"),
        }
    }

    fn single_file(change: &StagedChange) -> Option<String> {
        SINGLE_FILE_VERBS
            .iter()
            .find(|(status, _)| *status == change.status)
            .map(|(_, verb)| format!("{verb} {}", change.basename()))
    }

    pub fn primary_action(summary: &ClassificationSummary) -> Option<&'static str> {
        let total = summary.total();
        PRIMARY_ACTIONS.iter().find_map(|(status, verb)| {
            let count = summary.count(*status);
            (count > 0 && count >= total - count).then_some(*verb)
        })
    }

    pub fn scope_for(extension: &str) -> Option<&'static str> {
        SCOPES
            .iter()
            .find(|(exts, _)| exts.iter().any(|e| e.eq_ignore_ascii_case(extension)))
            .map(|(_, scope)| *scope)
    }
}
