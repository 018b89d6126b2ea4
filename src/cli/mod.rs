//! Command-line interface for pathfix
//!
//! A single command: resolve the root, load configuration, apply flag
//! overrides and run the [`Processor`] over the tree.

use crate::config::PathfixConfig;
use crate::processor::{Processor, ProcessorOptions};
use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::{Path, PathBuf};

mod output;

pub use output::Output;

#[derive(Parser, Debug)]
#[command(
    name = "pathfix",
    version = env!("CARGO_PKG_VERSION"),
    about = "Stamp every source file with a comment naming its path",
    long_about = "pathfix walks a directory tree and makes the first line of each recognised \
                  source file a comment holding the file's path relative to the root. \
                  Existing headers are replaced, so repeated runs are idempotent."
)]
pub struct Cli {
    /// Root directory to process
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Report what would change without writing files
    #[arg(long)]
    pub dry_run: bool,

    /// JSON configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output except the summary
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files and directories whose names start with a dot
    #[arg(long)]
    pub include_hidden: bool,

    /// Process files matched by .gitignore
    #[arg(long)]
    pub include_gitignored: bool,

    /// Extra ignore pattern, .gitignore syntax (can be repeated)
    #[arg(long = "ignore", value_name = "PATTERN")]
    pub ignore: Vec<String>,

    /// Worker threads; 0 picks from CPU count, 1 runs sequentially
    #[arg(short, long, value_name = "N", default_value_t = 0)]
    pub jobs: usize,

    /// Write the resolved configuration to FILE and exit
    #[arg(long, value_name = "FILE")]
    pub write_config: Option<PathBuf>,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        setup_logging(self.verbose, self.quiet);
        let output = Output::new(self.verbose > 0, self.quiet);

        let config = self.effective_config(&output);

        if let Some(path) = &self.write_config {
            config.save(path)?;
            output.success(&format!("Wrote configuration to {}", path.display()));
            return Ok(());
        }

        let root = resolve_root(&self.dir)?;
        tracing::info!("Processing directory: {}", root.display());

        let options = ProcessorOptions {
            dry_run: self.dry_run,
            jobs: self.jobs,
        };
        let stats = Processor::new(root, config, options).process(&output)?;

        output.summary(&stats, self.dry_run);
        Ok(())
    }

    /// Configuration file and environment, then command-line flags
    fn effective_config(&self, output: &Output) -> PathfixConfig {
        let mut config = PathfixConfig::load(self.config.as_deref()).unwrap_or_else(|e| {
            output.warning(&format!("Error loading config file: {e:#}. Using defaults."));
            PathfixConfig::default().resolve()
        });

        if self.include_hidden {
            config.include_hidden = true;
        }
        if self.include_gitignored {
            config.include_git_ignored = true;
        }
        config.additional_ignores.extend(self.ignore.iter().cloned());

        config
    }
}

/// Absolute root directory, failing when it is missing or not a directory
fn resolve_root(dir: &Path) -> Result<PathBuf> {
    let root = std::path::absolute(dir)
        .with_context(|| format!("Error resolving path: {}", dir.display()))?;

    let metadata = std::fs::metadata(&root)
        .with_context(|| format!("Error accessing directory: {}", root.display()))?;
    if !metadata.is_dir() {
        bail!("{} is not a directory", root.display());
    }

    Ok(root)
}

fn setup_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        match verbose {
            0 => tracing_subscriber::EnvFilter::new("warn"),
            1 => tracing_subscriber::EnvFilter::new("info"),
            2 => tracing_subscriber::EnvFilter::new("debug"),
            _ => tracing_subscriber::EnvFilter::new("trace"),
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["pathfix"]).unwrap();
        assert_eq!(cli.dir, PathBuf::from("."));
        assert!(!cli.dry_run);
        assert_eq!(cli.verbose, 0);
        assert_eq!(cli.jobs, 0);
        assert!(cli.ignore.is_empty());
    }

    #[test]
    fn test_parse_repeated_flags() {
        let cli = Cli::try_parse_from([
            "pathfix", "--dir", "src", "-vv", "--ignore", "gen/", "--ignore", "*.pb.go",
            "--jobs", "1",
        ])
        .unwrap();
        assert_eq!(cli.dir, PathBuf::from("src"));
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.ignore, vec!["gen/", "*.pb.go"]);
        assert_eq!(cli.jobs, 1);
    }

    #[test]
    fn test_flags_override_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("pathfix.json");
        std::fs::write(
            &config_path,
            r#"{"IncludeHidden": false, "AdditionalIgnores": ["vendor/"]}"#,
        )
        .unwrap();

        let cli = Cli::try_parse_from([
            "pathfix",
            "--config",
            config_path.to_str().unwrap(),
            "--include-hidden",
            "--ignore",
            "gen/",
        ])
        .unwrap();
        let config = cli.effective_config(&Output::new(false, true));

        assert!(config.include_hidden);
        assert!(!config.include_git_ignored);
        assert_eq!(config.additional_ignores, vec!["vendor/", "gen/"]);
    }

    #[test]
    fn test_resolve_root_rejects_files_and_missing_paths() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("main.go");
        std::fs::write(&file, "package main\n").unwrap();

        assert!(resolve_root(temp_dir.path()).unwrap().is_absolute());
        assert!(resolve_root(&file).is_err());
        assert!(resolve_root(&temp_dir.path().join("missing")).is_err());
    }
}
