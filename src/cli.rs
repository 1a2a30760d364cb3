use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// contentkit - build and content utilities for asset-heavy projects
#[derive(Parser, Debug)]
#[command(name = "contentkit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit NDJSON events instead of human-readable output
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (default: ./contentkit.toml, then the user config)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Exit non-zero when any item failed
    #[arg(long, global = true)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rasterize vector icons for a target platform
    Icons {
        /// Icon profile (android, desktop, ios, or one defined in the config)
        profile: String,

        /// Directory the profile's source and output paths are relative to
        #[arg(long, value_name = "DIR")]
        root: Option<PathBuf>,

        /// Rasterizer executable (overrides the config)
        #[arg(long, value_name = "CMD")]
        rasterizer: Option<String>,

        /// Show what would be rendered without rendering
        #[arg(long)]
        dry_run: bool,
    },

    /// Overwrite every file named like INPUT beneath ROOT with INPUT's content
    Swap {
        /// File whose content is copied
        input: PathBuf,

        /// Directory searched recursively
        root: PathBuf,
    },

    /// Delete everything beneath ROOT
    Clean {
        /// Directory to empty (kept itself)
        root: PathBuf,

        /// Also remove and recreate a build directory
        #[arg(
            long,
            value_name = "DIR",
            num_args = 0..=1,
            default_missing_value = "Build"
        )]
        reset_build: Option<PathBuf>,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,

        /// List what would be deleted without deleting
        #[arg(long)]
        dry_run: bool,
    },

    /// Initialise submodules, then check out and pull each one
    GitUpdate {
        /// Repository working directory
        #[arg(long, value_name = "DIR")]
        root: Option<PathBuf>,

        /// Branch checked out in every submodule (overrides the config)
        #[arg(long)]
        branch: Option<String>,
    },
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Icons { .. } => "icons",
            Commands::Swap { .. } => "swap",
            Commands::Clean { .. } => "clean",
            Commands::GitUpdate { .. } => "git-update",
        }
    }
}
