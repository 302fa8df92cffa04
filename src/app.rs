// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use std::io::IsTerminal;
use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, warn};

use crate::cli::{Cli, Commands};
use crate::config::{Config, InitOutcome};
use crate::domain::{ChangeSet, ChangeStatus, MessageSource, PromptContext};
use crate::error::{Error, Result};
use crate::services::{
    collector::ChangeCollector,
    git::GitService,
    interact::{self, Decision, TerminalInteraction},
    llm,
    policy::MessagePolicy,
    remote::RemoteSynthesizer,
};

const MAX_FILES_TO_SHOW: usize = 10;

pub struct App {
    cli: Cli,
    config: Config,
    git: Option<GitService>,
}

impl App {
    pub fn new(cli: Cli) -> Result<Self> {
        let git = GitService::discover().ok();
        let config = Config::load(&cli, git.as_ref().map(GitService::work_dir))?;
        debug!(
            use_ai = config.use_ai,
            model = %config.openai_model,
            max_length = config.max_length,
            conventional = config.conventional_commits,
            "config loaded"
        );
        Ok(Self { cli, config, git })
    }

    pub async fn run(&self) -> Result<()> {
        if let Some(ref cmd) = self.cli.command {
            return self.handle_command(cmd);
        }

        self.generate_commit().await
    }

    fn git(&self) -> Result<&GitService> {
        self.git.as_ref().ok_or(Error::NotAGitRepo)
    }

    async fn generate_commit(&self) -> Result<()> {
        // Step 1: Collect staged changes
        let git = self.git()?;
        git.check_state()?;

        self.print_status("Analyzing staged changes...");
        let raw = git.staged_status_records().await?;
        let changes = ChangeCollector::collect_records(&raw)?;

        let file_word = if changes.len() == 1 { "file" } else { "files" };
        self.print_info(&format!("{} {} staged", changes.len(), file_word));

        let is_interactive = std::io::stdout().is_terminal() && std::io::stdin().is_terminal();
        let mut ui = TerminalInteraction;

        // Step 2: Prefix selection
        let mut style_policy = self.config.style_policy();
        if self.should_select_prefix(is_interactive) {
            let chosen = interact::select_prefix(&mut ui, &self.config.prefixes)?;
            style_policy.prefix = (!chosen.is_empty()).then_some(chosen);
        }

        // Step 3: Generate
        let use_ai = self.config.use_ai;
        let remote = RemoteSynthesizer::new(llm::resolve_capability(&self.config));
        debug!(capability = ?remote.capability(), use_ai, "remote capability resolved");

        let diff = if use_ai {
            self.fetch_diff(git).await
        } else {
            String::new()
        };

        if use_ai && self.cli.show_prompt {
            let context = PromptContext::new(&diff, style_policy.conventional_commits);
            eprintln!("{}", style("--- PROMPT ---").dim());
            eprintln!("{}", context.system_prompt());
            eprintln!();
            eprintln!("{}", context.user_prompt());
            eprintln!("{}", style("--- END PROMPT ---").dim());
        }

        let spinner = (use_ai && remote.capability().is_ready()).then(|| {
            self.spinner(&format!("Contacting openai ({})...", self.config.openai_model))
        });

        let policy = MessagePolicy::new(&style_policy, Some(&remote));
        let message = policy.generate(&changes, &diff, use_ai).await;

        if let Some(spinner) = spinner {
            spinner.finish_and_clear();
        }

        if use_ai && message.source == MessageSource::Heuristic {
            self.print_info("Falling back to rule-based commit message generation...");
        }
        debug!(source = %message.source, chars = message.text.chars().count(), "message generated");

        // Step 4: Confirm and commit
        if self.cli.dry_run {
            println!("{}", message.text);
            return Ok(());
        }

        let final_message = if self.cli.yes {
            message.text
        } else {
            if !is_interactive {
                eprintln!("{}", style("warning:").yellow().bold());
                eprintln!("  Not a terminal. Use --yes to auto-confirm in scripts/hooks.");
                println!("\n{}", message.text);
                return Ok(());
            }

            Self::display_files(&changes);
            eprintln!("\n{}", style("Generated commit message:").bold());
            eprintln!("{}", style(&message.text).green());
            eprintln!();

            match interact::confirm_message(&mut ui, &message.text)? {
                Decision::Commit(text) => text,
                Decision::Abort => return Err(Error::Cancelled),
            }
        };

        git.commit(&final_message).await?;

        eprintln!("{} Changes committed successfully!", style("✓").green().bold());

        Ok(())
    }

    fn should_select_prefix(&self, is_interactive: bool) -> bool {
        !self.config.prefixes.is_empty()
            && !self.cli.no_prefix_selection
            && self.cli.prefix.is_none()
            && !self.cli.yes
            && !self.cli.dry_run
            && is_interactive
    }

    /// A missing diff only disables the remote path.
    async fn fetch_diff(&self, git: &GitService) -> String {
        match git.staged_diff().await {
            Ok(diff) => diff,
            Err(e) => {
                warn!(error = %e, "could not read staged diff");
                String::new()
            }
        }
    }

    fn handle_command(&self, cmd: &Commands) -> Result<()> {
        match cmd {
            Commands::Init => {
                let git = self.git()?;
                match Config::create_default(git.work_dir())? {
                    InitOutcome::Created(path) => {
                        println!("Created configuration file at {}", path.display());
                        println!("Edit this file to customize the behavior of git-autocommit.");
                    }
                    InitOutcome::AlreadyExists(path) => {
                        println!("Configuration file already exists at {}", path.display());
                    }
                }
                Ok(())
            }
            Commands::Config => {
                println!("Prefix: {}", self.config.prefix);
                println!("Prefixes: {}", self.config.prefixes.join(", "));
                println!("Max length: {}", self.config.max_length);
                println!("Use AI: {}", self.config.use_ai);
                println!("OpenAI model: {}", self.config.openai_model);
                println!("OpenAI API key: {}", self.config.masked_api_key());
                if let Some(ref url) = self.config.openai_base_url {
                    println!("OpenAI base URL: {url}");
                }
                println!("Conventional commits: {}", self.config.conventional_commits);
                println!("Timeout: {}s", self.config.timeout_secs);
                println!("Temperature: {}", self.config.temperature);
                println!("Max tokens: {}", self.config.max_tokens);
                Ok(())
            }
            Commands::Completions { shell } => {
                let mut cmd = <Cli as clap::CommandFactory>::command();
                clap_complete::generate(*shell, &mut cmd, "git-autocommit", &mut std::io::stdout());
                Ok(())
            }
        }
    }

    fn display_files(changes: &ChangeSet) {
        eprintln!();
        for change in changes.iter().take(MAX_FILES_TO_SHOW) {
            let marker = style(format!("[{}]", change.status));
            let marker = match change.status {
                ChangeStatus::Added => marker.green(),
                ChangeStatus::Deleted => marker.red(),
                ChangeStatus::Modified => marker.yellow(),
                _ => marker.cyan(),
            };
            match change.old_path {
                Some(ref old_path) => eprintln!("  {} {} → {}", marker, old_path, change.path),
                None => eprintln!("  {} {}", marker, change.path),
            }
        }
        if changes.len() > MAX_FILES_TO_SHOW {
            eprintln!("  (+{} more)", changes.len() - MAX_FILES_TO_SHOW);
        }
    }

    // ─── Output Helpers ───

    fn spinner(&self, msg: &str) -> ProgressBar {
        let spinner = ProgressBar::new_spinner();
        if let Ok(template) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
            spinner.set_style(template);
        }
        spinner.set_message(msg.to_string());
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner
    }

    fn print_status(&self, msg: &str) {
        eprintln!("{} {}", style("→").cyan(), msg);
    }

    fn print_info(&self, msg: &str) {
        eprintln!("{} {}", style("info:").cyan(), msg);
    }
}
