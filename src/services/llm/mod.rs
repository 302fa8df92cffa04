// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use async_trait::async_trait;

#[cfg(feature = "openai")]
pub mod openai;

use crate::config::Config;
use crate::error::Result;

/// A single-shot chat completion: one system prompt, one user prompt, one reply.
#[async_trait]
pub trait ChatClient: Send + Sync {
    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> Result<String>;

    fn name(&self) -> &str;

    fn model(&self) -> &str;
}

/// Whether remote generation can be attempted at all, decided once at startup.
pub enum RemoteCapability {
    Ready(Box<dyn ChatClient>),
    Unavailable(String),
}

impl RemoteCapability {
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }
}

impl std::fmt::Debug for RemoteCapability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ready(client) => write!(f, "Ready({}/{})", client.name(), client.model()),
            Self::Unavailable(reason) => write!(f, "Unavailable({reason})"),
        }
    }
}

#[cfg(feature = "openai")]
pub fn resolve_capability(config: &Config) -> RemoteCapability {
    if config.openai_api_key.is_none() {
        return RemoteCapability::Unavailable(
            "OpenAI API key not configured. Set openai_api_key in .git-autocommit.toml \
             or the OPENAI_API_KEY environment variable"
                .into(),
        );
    }
    match openai::OpenAiClient::new(config) {
        Ok(client) => RemoteCapability::Ready(Box::new(client)),
        Err(e) => RemoteCapability::Unavailable(e.to_string()),
    }
}

#[cfg(not(feature = "openai"))]
pub fn resolve_capability(_config: &Config) -> RemoteCapability {
    RemoteCapability::Unavailable(
        "OpenAI support not compiled in. Rebuild with --features openai".into(),
    )
}
