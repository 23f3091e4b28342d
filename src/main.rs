use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod build;
mod commands;
mod config;

#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// The command to execute (defaults to `render`)
    #[command(subcommand)]
    command: Option<PoemifyCommand>,
}

#[derive(Parser, Default)]
struct RenderArgs {
    /// The path to the configuration file
    #[arg(short, long)]
    config_file: Option<PathBuf>,

    /// Fail instead of warning when a decoration cannot find its anchor
    #[arg(long, default_value = "false")]
    strict: bool,
}

#[derive(Parser)]
struct InitArgs {
    /// The path to initialize the project in
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Whether to create the directory if it doesn't exist
    #[arg(short, long, default_value = "false")]
    create: bool,

    /// Overwrite an existing configuration file
    #[arg(short, long, default_value = "false")]
    force: bool,
}

#[derive(Parser)]
struct CleanArgs {
    /// The path to the configuration file
    #[arg(short, long)]
    config_file: Option<PathBuf>,

    /// Print what would be deleted without deleting it
    #[arg(short, long, default_value = "false")]
    dry_run: bool,
}

#[derive(Subcommand)]
enum PoemifyCommand {
    /// Render the poem into a decorated HTML page
    Render(RenderArgs),

    /// Write a default poemify.yaml
    Init(InitArgs),

    /// Delete the generated HTML page
    Clean(CleanArgs),
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let args = Args::parse();

    match args.command {
        Some(PoemifyCommand::Render(args)) => {
            commands::render::run(&args).await?;
        }
        None => {
            commands::render::run(&RenderArgs::default()).await?;
        }
        Some(PoemifyCommand::Init(args)) => {
            commands::init::run(&args).await?;
        }
        Some(PoemifyCommand::Clean(args)) => {
            commands::clean::run(&args).await?;
        }
    }

    Ok(())
}
