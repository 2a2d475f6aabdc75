//! CLI argument definitions.

use clap::{Parser, Subcommand};

/// Signup Form - debounced signup validation in the terminal
#[derive(Parser, Debug)]
#[command(name = "signup-form")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate one set of credentials and submit if the form is valid
    Check(CheckArgs),

    /// Edit the form line by line from stdin
    Interactive(InteractiveArgs),
}

/// Arguments for the check command
#[derive(Parser, Debug)]
pub struct CheckArgs {
    #[arg(short, long, default_value = "")]
    pub username: String,

    #[arg(short, long, default_value = "", env = "SIGNUP_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// Password confirmation
    #[arg(short, long, default_value = "", env = "SIGNUP_CONFIRM", hide_env_values = true)]
    pub confirm: String,

    /// Print the state as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the interactive command
#[derive(Parser, Debug)]
pub struct InteractiveArgs {
    /// Print states as JSON
    #[arg(long)]
    pub json: bool,
}
