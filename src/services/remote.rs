// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use tracing::{debug, warn};

use crate::domain::{CommitType, PromptContext, StylePolicy};
use crate::services::llm::RemoteCapability;
use crate::services::sanitizer::ResponseSanitizer;

/// Asks a chat model for a message. Every failure degrades to `None` so the
/// caller can fall back to the heuristic synthesizer.
pub struct RemoteSynthesizer {
    capability: RemoteCapability,
}

impl RemoteSynthesizer {
    pub fn new(capability: RemoteCapability) -> Self {
        Self { capability }
    }

    pub fn capability(&self) -> &RemoteCapability {
        &self.capability
    }

    pub async fn synthesize(&self, diff: &str, style: &StylePolicy) -> Option<String> {
        let client = match &self.capability {
            RemoteCapability::Ready(client) => client,
            RemoteCapability::Unavailable(reason) => {
                warn!("{reason}");
                return None;
            }
        };

        if diff.trim().is_empty() {
            debug!("staged diff is empty, skipping remote generation");
            return None;
        }

        let context = PromptContext::new(diff, style.conventional_commits);
        debug!(
            provider = client.name(),
            model = client.model(),
            diff_truncated = context.is_truncated(),
            conventional = style.conventional_commits,
            "requesting remote commit message"
        );

        let raw = match client
            .complete(&context.system_prompt(), &context.user_prompt())
            .await
        {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "error generating AI commit message");
                return None;
            }
        };

        let message = ResponseSanitizer::clean(&raw);
        if message.is_empty() {
            warn!(provider = client.name(), "empty response from remote model");
            return None;
        }

        if style.conventional_commits && CommitType::detect(&message).is_none() {
            debug!(%message, "remote message does not carry a conventional type tag");
        }

        Some(message)
    }
}
