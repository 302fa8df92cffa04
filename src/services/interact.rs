// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use dialoguer::{Input, Select};

use crate::error::Result;

pub const NO_PREFIX: &str = "No prefix";
pub const CUSTOM_PREFIX: &str = "Custom prefix";

pub const COMMIT: &str = "Commit";
pub const EDIT: &str = "Edit message";
pub const ABORT: &str = "Abort";

/// Operator decisions, kept behind a trait so message generation never
/// touches the terminal directly.
pub trait Interaction {
    /// Pick one of `options`, returning its index.
    fn select(&mut self, prompt: &str, options: &[String]) -> Result<usize>;

    /// Free-form text, pre-filled with `initial`.
    fn input(&mut self, prompt: &str, initial: &str) -> Result<String>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Commit(String),
    Abort,
}

/// Offer the configured prefixes plus "No prefix" and "Custom prefix".
pub fn select_prefix(ui: &mut dyn Interaction, prefixes: &[String]) -> Result<String> {
    let mut options: Vec<String> = prefixes.to_vec();
    options.push(NO_PREFIX.into());
    options.push(CUSTOM_PREFIX.into());

    let choice = ui.select("Select a prefix for your commit message", &options)?;
    match choice {
        i if i < prefixes.len() => Ok(prefixes[i].clone()),
        i if i == prefixes.len() => Ok(String::new()),
        _ => Ok(ui.input("Enter custom prefix", "")?.trim().to_string()),
    }
}

/// Commit as-is, commit an edited message, or abort. An edit that leaves
/// the message blank counts as an abort.
pub fn confirm_message(ui: &mut dyn Interaction, message: &str) -> Result<Decision> {
    let options = [COMMIT.to_string(), EDIT.to_string(), ABORT.to_string()];

    match ui.select("Proceed with this commit message?", &options)? {
        0 => Ok(Decision::Commit(message.to_string())),
        1 => {
            let edited = ui.input("Enter your commit message", message)?;
            let edited = edited.trim();
            if edited.is_empty() {
                Ok(Decision::Abort)
            } else {
                Ok(Decision::Commit(edited.to_string()))
            }
        }
        _ => Ok(Decision::Abort),
    }
}

/// `dialoguer`-backed prompts for an interactive terminal.
pub struct TerminalInteraction;

impl Interaction for TerminalInteraction {
    fn select(&mut self, prompt: &str, options: &[String]) -> Result<usize> {
        Ok(Select::new()
            .with_prompt(prompt)
            .items(options)
            .default(0)
            .interact()?)
    }

    fn input(&mut self, prompt: &str, initial: &str) -> Result<String> {
        Ok(Input::<String>::new()
            .with_prompt(prompt)
            .with_initial_text(initial)
            .allow_empty(true)
            .interact_text()?)
    }
}
