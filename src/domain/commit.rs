// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

/// Conventional Commits type tags accepted in remote-generated messages.
pub struct CommitType;

impl CommitType {
    /// Tags in the order they are listed to the model.
    pub const ALL: &'static [&'static str] = &[
        "feat", "fix", "docs", "style", "refactor", "perf", "test", "build", "ci", "chore",
        "revert",
    ];

    /// Type tag of a `<type>[(scope)][!]: <description>` first line, if any.
    pub fn detect(message: &str) -> Option<&'static str> {
        let first_line = message.lines().next()?;
        let (head, _) = first_line.split_once(':')?;
        let head = head.strip_suffix('!').unwrap_or(head);
        let tag = match head.split_once('(') {
            Some((tag, scope)) if scope.ends_with(')') => tag,
            Some(_) => return None,
            None => head,
        };
        Self::ALL.iter().copied().find(|t| *t == tag)
    }
}
