// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use directories::ProjectDirs;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::domain::{DEFAULT_MAX_LENGTH, StylePolicy};
use crate::error::{Error, Result};

/// Project-level config file, looked up at the repository root.
pub const PROJECT_CONFIG_FILE: &str = ".git-autocommit.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Prefix put in front of every message, e.g. "feat:" (default: none)
    #[serde(default)]
    pub prefix: String,

    /// Prefixes offered for interactive selection. Accepts a TOML array or a
    /// comma-separated string.
    #[serde(default, deserialize_with = "deserialize_prefixes")]
    pub prefixes: Vec<String>,

    /// Maximum length of the final message (default 72)
    #[serde(default = "default_max_length")]
    pub max_length: usize,

    /// Try the remote model before the heuristics (default: false)
    #[serde(default)]
    pub use_ai: bool,

    #[serde(default)]
    pub openai_api_key: Option<String>,

    #[serde(default = "default_openai_model")]
    pub openai_model: String,

    /// Base URL for OpenAI-compatible APIs (default: https://api.openai.com/v1)
    #[serde(default)]
    pub openai_base_url: Option<String>,

    /// Ask the model for Conventional Commits output (default: false)
    #[serde(default)]
    pub conventional_commits: bool,

    /// Request timeout in seconds (default 30)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// LLM temperature (0.0-2.0, default 0.7)
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Maximum tokens to generate (default 100)
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

fn default_max_length() -> usize {
    DEFAULT_MAX_LENGTH
}
fn default_openai_model() -> String {
    "gpt-3.5-turbo".into()
}
fn default_timeout_secs() -> u64 {
    30
}
fn default_temperature() -> f32 {
    0.7
}
fn default_max_tokens() -> u32 {
    100
}

fn deserialize_prefixes<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Prefixes {
        List(Vec<String>),
        Csv(String),
    }

    let raw = match Prefixes::deserialize(deserializer)? {
        Prefixes::List(list) => list,
        Prefixes::Csv(csv) => csv.split(',').map(str::to_string).collect(),
    };

    Ok(raw
        .into_iter()
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .collect())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            prefixes: Vec::new(),
            max_length: default_max_length(),
            use_ai: false,
            openai_api_key: None,
            openai_model: default_openai_model(),
            openai_base_url: None,
            conventional_commits: false,
            timeout_secs: default_timeout_secs(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
        }
    }
}

/// Result of `git-autocommit init`.
#[derive(Debug, PartialEq, Eq)]
pub enum InitOutcome {
    Created(PathBuf),
    AlreadyExists(PathBuf),
}

impl Config {
    /// Load with priority: CLI > OPENAI_API_KEY > ENV > project config > user config > defaults
    pub fn load(cli: &Cli, repo_root: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        // User-level config
        if let Some(path) = Self::config_path()
            && path.exists()
        {
            figment = figment.merge(Toml::file(&path));
        }

        // Project-level config (.git-autocommit.toml in repo root)
        if let Some(root) = repo_root {
            let project_config = root.join(PROJECT_CONFIG_FILE);
            if project_config.exists() {
                figment = figment.merge(Toml::file(&project_config));
            }
        }

        // Environment variables (GIT_AUTOCOMMIT_USE_AI, GIT_AUTOCOMMIT_PREFIX, etc.)
        figment = figment.merge(Env::prefixed("GIT_AUTOCOMMIT_"));

        let mut config = Self::extract(figment)?;

        // The conventional credential variable wins over any file
        if let Ok(key) = std::env::var("OPENAI_API_KEY")
            && !key.trim().is_empty()
        {
            config.openai_api_key = Some(key);
        }

        // CLI overrides (highest priority)
        config.apply_cli(cli);
        config.validate()?;
        Ok(config)
    }

    /// Defaults overlaid with a single TOML file; no environment lookups.
    pub fn from_file(path: &Path) -> Result<Self> {
        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(path));
        let config = Self::extract(figment)?;
        config.validate()?;
        Ok(config)
    }

    fn extract(figment: Figment) -> Result<Self> {
        let mut config: Config = figment
            .extract()
            .map_err(|e| Error::Config(e.to_string()))?;

        // An empty key in the file means "not configured"
        config.openai_api_key = config
            .openai_api_key
            .filter(|key| !key.trim().is_empty());
        Ok(config)
    }

    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("", "", "git-autocommit").map(|dirs| dirs.config_dir().to_path_buf())
    }

    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join("config.toml"))
    }

    pub fn apply_cli(&mut self, cli: &Cli) {
        if cli.use_ai {
            self.use_ai = true;
        }
        if cli.conventional {
            self.conventional_commits = true;
        }
        if let Some(ref p) = cli.prefix {
            self.prefix = p.trim().to_string();
        }
        if let Some(ref m) = cli.model {
            self.openai_model = m.clone();
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(10..=500).contains(&self.max_length) {
            return Err(Error::Config(format!(
                "max_length must be 10–500, got {}",
                self.max_length
            )));
        }

        if !(1..=600).contains(&self.timeout_secs) {
            return Err(Error::Config(format!(
                "timeout_secs must be 1–600, got {}",
                self.timeout_secs
            )));
        }

        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(Error::Config(format!(
                "temperature must be 0.0–2.0, got {}",
                self.temperature
            )));
        }

        if self.max_tokens == 0 {
            return Err(Error::Config("max_tokens must be at least 1".into()));
        }

        if self.openai_model.trim().is_empty() {
            return Err(Error::Config("openai_model cannot be empty".into()));
        }

        if let Some(ref base_url) = self.openai_base_url {
            let parsed = url::Url::parse(base_url).map_err(|e| {
                Error::Config(format!("openai_base_url is not a valid URL ({e}): '{base_url}'"))
            })?;
            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(Error::Config(format!(
                    "openai_base_url must start with http:// or https://, got '{base_url}'"
                )));
            }
        }

        Ok(())
    }

    /// The formatting rules handed to the message policy layer.
    pub fn style_policy(&self) -> StylePolicy {
        let prefix = self.prefix.trim();
        StylePolicy {
            prefix: (!prefix.is_empty()).then(|| prefix.to_string()),
            max_length: self.max_length,
            conventional_commits: self.conventional_commits,
        }
    }

    /// API key with all but the last four characters hidden.
    pub fn masked_api_key(&self) -> String {
        match self.openai_api_key.as_deref() {
            None => "(not set)".into(),
            Some(key) => {
                let count = key.chars().count();
                let tail: String = key.chars().skip(count.saturating_sub(4)).collect();
                format!("****{tail}")
            }
        }
    }

    /// Write a default project config at the repository root, unless one
    /// already exists.
    pub fn create_default(repo_root: &Path) -> Result<InitOutcome> {
        let path = repo_root.join(PROJECT_CONFIG_FILE);
        if path.exists() {
            return Ok(InitOutcome::AlreadyExists(path));
        }

        let content = r#"# git-autocommit configuration

# Prefix added in front of every generated message (e.g. "feat:")
prefix = ""

# Prefixes offered for interactive selection (comma-separated or a TOML array)
prefixes = "feat:, fix:, docs:, style:, refactor:, perf:, test:, build:, ci:, chore:"

# Maximum length of the final commit message
max_length = 72

# Try the OpenAI model before falling back to rule-based messages
use_ai = false

# API key (OPENAI_API_KEY in the environment takes precedence)
openai_api_key = ""

openai_model = "gpt-3.5-turbo"

# Ask the model for Conventional Commits output: <type>[(scope)]: <description>
conventional_commits = false

# Request timeout for the model, in seconds
# timeout_secs = 30
"#;

        fs::write(&path, content)?;

        // The file may hold an API key (0600)
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            fs::set_permissions(&path, perms)?;
        }

        Ok(InitOutcome::Created(path))
    }
}
