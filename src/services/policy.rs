// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use tracing::{debug, info};

use crate::domain::{ChangeSet, GeneratedMessage, MessageSource, StylePolicy};
use crate::services::classifier::ChangeClassifier;
use crate::services::heuristic::HeuristicSynthesizer;
use crate::services::remote::RemoteSynthesizer;

const ELLIPSIS: &str = "...";

/// Picks a synthesizer (remote first when asked, heuristic otherwise) and
/// applies prefix and length rules to whatever it produced.
pub struct MessagePolicy<'a> {
    style: &'a StylePolicy,
    remote: Option<&'a RemoteSynthesizer>,
}

impl<'a> MessagePolicy<'a> {
    pub fn new(style: &'a StylePolicy, remote: Option<&'a RemoteSynthesizer>) -> Self {
        Self { style, remote }
    }

    pub async fn generate(&self, changes: &ChangeSet, diff: &str, use_ai: bool) -> GeneratedMessage {
        if use_ai {
            match self.remote {
                Some(remote) => {
                    if let Some(text) = remote.synthesize(diff, self.style).await {
                        return self.finalize(text, MessageSource::Remote);
                    }
                    info!("falling back to rule-based commit message generation");
                }
                None => info!("no remote synthesizer configured, using rule-based generation"),
            }
        }

        let summary = ChangeClassifier::classify(changes);
        debug!(?summary, "changes classified");
        let text = HeuristicSynthesizer::synthesize(changes, &summary);
        self.finalize(text, MessageSource::Heuristic)
    }

    /// Prefix (unless this is conventional-style remote output), then truncate.
    pub fn finalize(&self, text: String, source: MessageSource) -> GeneratedMessage {
        let skip_prefix = source == MessageSource::Remote && self.style.conventional_commits;
        let prefix = if skip_prefix {
            None
        } else {
            self.style.effective_prefix()
        };

        let text = Self::truncate(&Self::apply_prefix(&text, prefix), self.style.max_length);
        GeneratedMessage { text, source }
    }

    pub fn apply_prefix(text: &str, prefix: Option<&str>) -> String {
        match prefix {
            Some(prefix) => format!("{prefix} {text}"),
            None => text.to_string(),
        }
    }

    /// Cap `text` at `max_length` characters. A cut message ends in "..." and
    /// is exactly `max_length` long.
    pub fn truncate(text: &str, max_length: usize) -> String {
        if text.chars().count() <= max_length {
            return text.to_string();
        }

        let ellipsis_len = ELLIPSIS.chars().count();
        if max_length < ellipsis_len {
            return text.chars().take(max_length).collect();
        }

        let mut cut: String = text.chars().take(max_length - ellipsis_len).collect();
        cut.push_str(ELLIPSIS);
        cut
    }
}
