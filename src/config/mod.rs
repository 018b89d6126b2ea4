//! Configuration management for pathfix
//!
//! Configuration is layered with figment, lowest priority first:
//!
//! 1. Built-in defaults (`CommentPrefix = "File: "`, nothing included extra)
//! 2. The JSON file passed with `--config`, if it exists
//! 3. `PATHFIX_COMMENT_PREFIX`, `PATHFIX_INCLUDE_HIDDEN` and
//!    `PATHFIX_INCLUDE_GIT_IGNORED` environment variables
//!
//! After extraction the `FileTypes` overlay is merged over the built-in
//! comment style table; a user entry replaces the built-in one wholesale.

pub mod languages;

use crate::header::{CommentStyle, DEFAULT_COMMENT_PREFIX};
use crate::shared::paths::extension_key;
use anyhow::{Context, Result};
use figment::{
    Figment,
    providers::{Env, Format, Json, Serialized},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

pub use languages::{builtin_file_types, normalize_extension};

/// Prefix for environment variable overrides
const ENV_PREFIX: &str = "PATHFIX_";

/// Environment keys accepted after the prefix is stripped
const ENV_KEYS: &[&str] = &["comment_prefix", "include_git_ignored", "include_hidden"];

/// Main configuration structure for pathfix
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PathfixConfig {
    /// Text placed before the relative path in the header
    pub comment_prefix: String,

    /// Process files excluded by `.gitignore` and additional ignores
    pub include_git_ignored: bool,

    /// Process hidden files and directories
    pub include_hidden: bool,

    /// Extra ignore patterns appended after the `.gitignore` rules
    pub additional_ignores: Vec<String>,

    /// Extension to comment style overlay
    pub file_types: BTreeMap<String, CommentStyle>,
}

impl Default for PathfixConfig {
    fn default() -> Self {
        Self {
            comment_prefix: DEFAULT_COMMENT_PREFIX.to_string(),
            include_git_ignored: false,
            include_hidden: false,
            additional_ignores: vec![],
            file_types: BTreeMap::new(),
        }
    }
}

impl PathfixConfig {
    /// Load configuration, merging the optional JSON file and environment
    ///
    /// A config path that does not exist yields the defaults. A document that
    /// exists but cannot be parsed is an error.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        tracing::trace!("Loading configuration");

        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(path) = config_path {
            if path.exists() {
                figment = figment.merge(Json::file(path));
            } else {
                tracing::warn!("Config file {} not found, using defaults", path.display());
            }
        }

        let config: Self = figment
            .merge(env_provider())
            .extract()
            .with_context(|| match config_path {
                Some(path) => format!("Failed to parse config file: {}", path.display()),
                None => "Failed to load configuration".to_string(),
            })?;

        Ok(config.resolve())
    }

    /// Merge the `FileTypes` overlay over the built-in table
    pub fn resolve(mut self) -> Self {
        let overrides = std::mem::take(&mut self.file_types);
        let mut file_types = builtin_file_types();

        for (ext, style) in overrides {
            file_types.insert(normalize_extension(&ext), style);
        }

        self.file_types = file_types;
        self
    }

    /// Comment style for a file, by lowercased extension
    pub fn style_for(&self, path: &Path) -> Option<&CommentStyle> {
        extension_key(path).and_then(|ext| self.file_types.get(&ext))
    }

    /// Save configuration as pretty-printed JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            serde_json::to_string_pretty(self).context("Failed to serialize configuration")?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }
}

/// `PATHFIX_INCLUDE_HIDDEN` becomes `IncludeHidden`
fn env_provider() -> Env {
    Env::prefixed(ENV_PREFIX)
        .only(ENV_KEYS)
        .map(|key| pascal_case(key.as_str()).into())
}

fn pascal_case(snake: &str) -> String {
    snake
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}
