// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use super::CommitType;

/// Characters of diff sent to the model before truncation kicks in.
pub const MAX_DIFF_CHARS: usize = 4_000;
pub const DIFF_TRUNCATION_MARKER: &str = "\n...\n(diff truncated due to size)";

const LENGTH_RULES: &str = "Keep the message under 72 characters. \
Focus on WHAT changed and WHY, not HOW.\n\
Don't include obvious things like 'Update file.txt'.";

#[derive(Debug)]
pub struct PromptContext {
    pub conventional_commits: bool,
    pub truncated_diff: String,
}

impl PromptContext {
    pub fn new(diff: &str, conventional_commits: bool) -> Self {
        Self {
            conventional_commits,
            truncated_diff: Self::truncate_diff(diff),
        }
    }

    /// Bound the diff to [`MAX_DIFF_CHARS`] characters, marking the cut.
    pub fn truncate_diff(diff: &str) -> String {
        match diff.char_indices().nth(MAX_DIFF_CHARS) {
            Some((cut, _)) => format!("{}{}", &diff[..cut], DIFF_TRUNCATION_MARKER),
            None => diff.to_string(),
        }
    }

    pub fn is_truncated(&self) -> bool {
        self.truncated_diff.ends_with(DIFF_TRUNCATION_MARKER)
    }

    pub fn system_prompt(&self) -> String {
        if self.conventional_commits {
            format!(
                "Generate a concise, meaningful git commit message based on the provided diff.\n\
                 Follow the Conventional Commits format: <type>[(scope)]: <description>\n\n\
                 Types: {types}\n\n\
                 {LENGTH_RULES}",
                types = CommitType::ALL.join(", "),
            )
        } else {
            format!(
                "Generate a concise, meaningful git commit message based on the provided diff.\n\
                 {LENGTH_RULES}"
            )
        }
    }

    pub fn user_prompt(&self) -> String {
        format!("Here's the git diff:\n\n{}", self.truncated_diff)
    }
}
