//! CLI command definitions and dispatch for the `loanforge` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod deploy;
pub mod prompt;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use loanforge_core::prompt::PromptStyle;

/// Generate, compile, and deploy loan agreement contracts.
#[derive(Parser)]
#[command(name = "loanforge", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the TOML config file.
    #[arg(
        long,
        global = true,
        env = "LOANFORGE_CONFIG",
        default_value = "loanforge.toml"
    )]
    pub config: PathBuf,

    /// API key for the completion provider.
    #[arg(long, global = true, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Detailed output (-v for debug, -vv for trace). Ignored when RUST_LOG is set.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Export spans through OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server.
    Serve {
        /// Port to listen on.
        #[arg(short, long, env = "PORT", default_value = "4000")]
        port: u16,

        /// Host to bind to.
        #[arg(long, default_value = "0.0.0.0")]
        host: String,
    },

    /// Print the generation prompt for the configured loan. No network calls.
    Prompt {
        /// Which prompt variant to render.
        #[arg(long, value_enum, default_value_t = PromptStyleArg::Preview)]
        style: PromptStyleArg,
    },

    /// Run one full generate + compile + migrate cycle and print the outcome.
    Deploy,
}

/// Prompt variant selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PromptStyleArg {
    Preview,
    Deploy,
}

impl From<PromptStyleArg> for PromptStyle {
    fn from(arg: PromptStyleArg) -> Self {
        match arg {
            PromptStyleArg::Preview => PromptStyle::Preview,
            PromptStyleArg::Deploy => PromptStyle::Deploy,
        }
    }
}
