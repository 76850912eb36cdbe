//! Command-line interface.

pub mod completions;
pub mod concat;
pub mod decrypt;
pub mod encrypt;
pub mod output;
pub mod password;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Cred - load encrypted, version-controlled credentials into the environment.
#[derive(Parser)]
#[command(
    name = "cred",
    about = "Load encrypted version-controlled credentials into the environment",
    version
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Encrypt *.secret files into *.secret.enc
    Encrypt {
        /// Password (1 to 24 bytes); prompted for when omitted
        #[arg(short, long, env = "CRED_PASSWORD", hide_env_values = true)]
        password: Option<String>,
        /// Directory to operate in
        #[arg(short = 'C', long, default_value = ".")]
        dir: PathBuf,
    },

    /// Decrypt *.secret.enc files into *.secret
    Decrypt {
        /// Password (1 to 24 bytes); prompted for when omitted
        #[arg(short, long, env = "CRED_PASSWORD", hide_env_values = true)]
        password: Option<String>,
        /// Directory to operate in
        #[arg(short = 'C', long, default_value = ".")]
        dir: PathBuf,
    },

    /// Merge *.secret, then *.public, then *.local into the env file
    Concat {
        /// Directory to operate in
        #[arg(short = 'C', long, default_value = ".")]
        dir: PathBuf,
        /// Output file name (default from .cred.toml, else .env)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(command: Command) -> crate::error::Result<()> {
    use Command::*;

    match command {
        Encrypt { password, dir } => encrypt::execute(password, &dir),
        Decrypt { password, dir } => decrypt::execute(password, &dir),
        Concat { dir, output } => concat::execute(&dir, output),
        Completions { shell } => completions::execute(shell),
    }
}
