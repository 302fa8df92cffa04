// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use std::sync::Mutex;

use async_trait::async_trait;

use git_autocommit::domain::{ChangeSet, ChangeStatus, StagedChange};
use git_autocommit::error::{Error, Result};
use git_autocommit::services::interact::Interaction;
use git_autocommit::services::llm::ChatClient;

/// Build a ChangeSet from (status, path) pairs.
#[allow(dead_code)]
pub fn make_change_set(entries: &[(ChangeStatus, &str)]) -> ChangeSet {
    ChangeSet::new(
        entries
            .iter()
            .map(|(status, path)| StagedChange::new(*status, *path))
            .collect(),
    )
    .expect("test change sets are non-empty")
}

/// Chat client that replays a canned reply and records the prompts it saw.
#[allow(dead_code)]
pub struct FakeChatClient {
    reply: std::result::Result<String, String>,
    pub calls: Mutex<Vec<(String, String)>>,
}

#[allow(dead_code)]
impl FakeChatClient {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Ok(reply.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ChatClient for FakeChatClient {
    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> Result<String> {
        self.calls
            .lock()
            .unwrap()
            .push((system_prompt.to_string(), user_prompt.to_string()));
        self.reply.clone().map_err(|message| Error::Provider {
            provider: "fake".into(),
            message,
        })
    }

    fn name(&self) -> &str {
        "fake"
    }

    fn model(&self) -> &str {
        "fake-model"
    }
}

/// Interaction that answers from a script and records prompts.
#[allow(dead_code)]
#[derive(Default)]
pub struct ScriptedInteraction {
    pub selections: Vec<usize>,
    pub inputs: Vec<String>,
    pub seen_options: Vec<Vec<String>>,
}

#[allow(dead_code)]
impl ScriptedInteraction {
    pub fn new(selections: &[usize], inputs: &[&str]) -> Self {
        Self {
            selections: selections.iter().rev().copied().collect(),
            inputs: inputs.iter().rev().map(|s| s.to_string()).collect(),
            seen_options: Vec::new(),
        }
    }
}

impl Interaction for ScriptedInteraction {
    fn select(&mut self, _prompt: &str, options: &[String]) -> Result<usize> {
        self.seen_options.push(options.to_vec());
        self.selections
            .pop()
            .ok_or_else(|| Error::Dialog("no scripted selection left".into()))
    }

    fn input(&mut self, _prompt: &str, _initial: &str) -> Result<String> {
        self.inputs
            .pop()
            .ok_or_else(|| Error::Dialog("no scripted input left".into()))
    }
}
