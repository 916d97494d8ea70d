use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use settingsquill::config::Config;
use settingsquill::document::parser::to_json_string;
use settingsquill::document::tree::Document;
use settingsquill::settings::manager::SettingsManager;

/// SettingsQuill - inspect aggregate settings files
#[derive(Parser)]
#[command(name = "settingsquill")]
#[command(version)]
#[command(about = "Inspect multi-group JSON settings files", long_about = None)]
struct Cli {
    /// Aggregate settings file
    file: PathBuf,

    /// Print JSON without indentation
    #[arg(short, long)]
    compact: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// List the settings groups in the file (default)
    Groups,
    /// Print one group as JSON
    Show {
        group: String,
    },
    /// Print the value at a pointer inside a group, e.g. `/Prop4/0`
    Get {
        group: String,
        pointer: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = Config::config_path("settingsquill")
        .map(Config::load_from)
        .unwrap_or_default();
    let pretty = config.pretty && !cli.compact;

    let mut manager = SettingsManager::with_config(&cli.file, config.clone());
    manager
        .load_settings()
        .with_context(|| format!("Cannot load {}", cli.file.display()))?;

    match cli.command.unwrap_or(Command::Groups) {
        Command::Groups => {
            for name in manager.group_names() {
                println!("{}", name);
            }
        }
        Command::Show { group } => {
            let Some(settings) = manager.settings(&group) else {
                bail!("No settings group named '{}'", group);
            };
            println!("{}", render(settings.document(), pretty, &config)?);
        }
        Command::Get { group, pointer } => {
            let Some(settings) = manager.settings(&group) else {
                bail!("No settings group named '{}'", group);
            };
            let Some(node) = settings.document().node_at(&pointer) else {
                bail!("Nothing at '{}' in group '{}'", pointer, group);
            };
            println!("{}", to_json_string(node, pretty, config.indent_size)?);
        }
    }

    Ok(())
}

fn render(document: &Document, pretty: bool, config: &Config) -> Result<String> {
    to_json_string(document.root(), pretty, config.indent_size)
}
