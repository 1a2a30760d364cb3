//! contentkit CLI
//!
//! Usage: contentkit <COMMAND>
//!
//! Commands:
//!   icons       Rasterize vector icons for a target platform
//!   swap        Overwrite same-named files with one input's content
//!   clean       Delete everything beneath a directory
//!   git-update  Initialise submodules, then check out and pull each one

mod cli;
mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;

use contentkit::config::Config;

use cli::{Cli, Commands};
use ui::context::UiContext;
use ui::json::{emit_event, events::ErrorEvent};

fn main() {
    let cli = Cli::parse();
    let json = cli.json;
    let command = cli.command.name();

    match run(cli) {
        Ok(()) => {}
        Err(err) => {
            if json {
                let _ = emit_event(&ErrorEvent::new(command, format!("{err:#}")));
            } else {
                eprintln!("Error: {err:#}");
            }
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let loaded = Config::discover(cli.config.as_deref(), &cwd)?;
    if !cli.json {
        if let Some(source) = &loaded.source {
            ui::output::print_config_warnings(source, &loaded.warnings);
        }
    }

    let ui = UiContext::new(cli.json, cli.verbose, cli.no_color);
    let config = &loaded.config;

    let failures = match cli.command {
        Commands::Icons {
            profile,
            root,
            rasterizer,
            dry_run,
        } => commands::icons::cmd_icons(config, &profile, root, rasterizer, dry_run, &ui)?,
        Commands::Swap { input, root } => commands::swap::cmd_swap(&input, &root, &ui)?,
        Commands::Clean {
            root,
            reset_build,
            yes,
            dry_run,
        } => commands::clean::cmd_clean(root, reset_build, yes, dry_run, &ui)?,
        Commands::GitUpdate { root, branch } => {
            commands::git_update::cmd_git_update(config, root, branch, &ui)?
        }
    };

    if cli.strict && failures > 0 {
        if !cli.json {
            eprintln!("{failures} item(s) failed");
        }
        std::process::exit(1);
    }

    Ok(())
}
