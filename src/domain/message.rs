// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

pub const DEFAULT_MAX_LENGTH: usize = 72;

/// Formatting rules applied to every generated message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StylePolicy {
    pub prefix: Option<String>,
    pub max_length: usize,
    pub conventional_commits: bool,
}

impl Default for StylePolicy {
    fn default() -> Self {
        Self {
            prefix: None,
            max_length: DEFAULT_MAX_LENGTH,
            conventional_commits: false,
        }
    }
}

impl StylePolicy {
    /// Configured prefix. An empty or whitespace-only prefix counts as no
    /// prefix, so a blank value never leaves a leading space in the message.
    pub fn effective_prefix(&self) -> Option<&str> {
        self.prefix.as_deref().filter(|p| !p.trim().is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageSource {
    Heuristic,
    Remote,
}

impl std::fmt::Display for MessageSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Heuristic => write!(f, "heuristic"),
            Self::Remote => write!(f, "remote"),
        }
    }
}

/// Final, policy-checked commit message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedMessage {
    pub text: String,
    pub source: MessageSource,
}
