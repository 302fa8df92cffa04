// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use clap::Parser;
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(name = "git-autocommit")]
#[command(version)]
#[command(about = "Git Auto Commit Message Generator", long_about = None)]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Use AI to generate the commit message
    #[arg(long)]
    pub use_ai: bool,

    /// Use Conventional Commits format
    #[arg(long)]
    pub conventional: bool,

    /// Skip interactive prefix selection
    #[arg(long)]
    pub no_prefix_selection: bool,

    /// Prefix to use for this commit (skips prefix selection)
    #[arg(long)]
    pub prefix: Option<String>,

    /// OpenAI model name
    #[arg(short, long)]
    pub model: Option<String>,

    /// Auto-confirm and commit without prompting
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Print message only, don't commit
    #[arg(long)]
    pub dry_run: bool,

    /// Show the prompt sent to the model
    #[arg(long)]
    pub show_prompt: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Create a default .git-autocommit.toml at the repository root
    #[command(alias = "setup")]
    Init,
    /// Show current configuration
    Config,
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}
