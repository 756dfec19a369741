//! CLI for urlkit.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use urlkit_core::config;

use commands::{run_check, run_completions, run_parse, run_rewrite};

/// Top-level CLI for urlkit.
#[derive(Debug, Parser)]
#[command(name = "urlkit")]
#[command(about = "urlkit: inspect, validate and rewrite URLs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Check whether URLs are valid.
    Check {
        /// URLs to check.
        #[arg(required = true)]
        urls: Vec<String>,
    },

    /// Show the components of a URL.
    Parse {
        /// URL to parse.
        url: String,

        /// Print JSON instead of aligned text.
        #[arg(long)]
        json: bool,
    },

    /// Change parts of a URL and print the result.
    Rewrite {
        /// URL to rewrite.
        url: String,

        #[command(flatten)]
        edits: RewriteArgs,
    },

    /// Print a shell completion script.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

/// Mutations applied by `urlkit rewrite`, in declaration order.
#[derive(Debug, Default, Clone, Args)]
pub struct RewriteArgs {
    /// New protocol (letters only).
    #[arg(long)]
    pub protocol: Option<String>,

    /// New domain; an empty value makes the URL relative.
    #[arg(long)]
    pub domain: Option<String>,

    /// New port; an empty value removes it.
    #[arg(long)]
    pub port: Option<String>,

    /// New directory path (the file name is kept).
    #[arg(long)]
    pub path: Option<String>,

    /// New file name; an empty value removes it.
    #[arg(long)]
    pub file: Option<String>,

    /// New fragment; an empty value removes it.
    #[arg(long)]
    pub fragment: Option<String>,

    /// Set a query parameter (repeatable).
    #[arg(long = "set", value_name = "NAME=VALUE", value_parser = parse_param)]
    pub set: Vec<(String, String)>,

    /// Remove a query parameter (repeatable).
    #[arg(long = "unset", value_name = "NAME")]
    pub unset: Vec<String>,

    /// Print with `&amp;` separators instead of `&`.
    #[arg(long)]
    pub markup: bool,
}

fn parse_param(arg: &str) -> Result<(String, String), String> {
    match arg.split_once('=') {
        Some((name, _)) if name.is_empty() => Err(format!("missing parameter name in {arg:?}")),
        Some((name, value)) => Ok((name.to_string(), value.to_string())),
        None => Err(format!("expected NAME=VALUE, got {arg:?}")),
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Check { urls } => run_check(&urls)?,
            CliCommand::Parse { url, json } => run_parse(&url, json || cfg.json)?,
            CliCommand::Rewrite { url, edits } => run_rewrite(&url, &edits, &cfg)?,
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
