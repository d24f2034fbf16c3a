//! Steamfinder CLI - query the local Steam installation
//!
//! # Commands
//!
//! - `steamfinder installed` - Is Steam installed?
//! - `steamfinder location` - Steam install directory
//! - `steamfinder libraries` - Library folders, in Steam's order
//! - `steamfinder folder <NAME>` - Find a game by its `steamapps/common` folder
//! - `steamfinder id <ID>` - Find a game by Steam app id
//! - `steamfinder name <NAME>` - Find a game by display name
//! - `steamfinder list` - Every installed game
//! - `steamfinder tour` - Run every query in turn
//! - `steamfinder config [--save]` - Show (and optionally save) the effective settings
//!
//! Settings come from `config.toml` in the platform config directory and
//! can be overridden per run:
//!
//! ```bash
//! steamfinder --memory none --no-index id 250900
//! steamfinder --steam-dir ~/.steam/steam --json list
//! ```

mod query;
mod tour;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use steamfinder_core::config::{self, Config};
use steamfinder_core::{
    FixedResolver, InstallResolver, Locator, LogLevel, MemoryMode, platform_resolver,
};

/// Steamfinder - locate Steam, its libraries, and installed games
#[derive(Parser)]
#[command(name = "steamfinder")]
#[command(about = "Locate Steam, its library folders, and installed games")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    locator: LocatorArgs,

    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every command
#[derive(Args, Debug, Default)]
pub struct LocatorArgs {
    /// Caching policy (overrides config.toml)
    #[arg(long, value_enum, global = true)]
    pub memory: Option<MemoryArg>,

    /// Print empty results instead of failing when something is not found
    #[arg(long, global = true)]
    pub suppress_errors: bool,

    /// Do not index games; look folders and ids up directly
    #[arg(long, global = true)]
    pub no_index: bool,

    /// Use this directory as the Steam install
    #[arg(long, global = true)]
    pub steam_dir: Option<PathBuf>,

    /// Console log level (overrides config.toml; RUST_LOG wins over both)
    #[arg(long, value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum MemoryArg {
    Full,
    Partial,
    None,
}

impl From<MemoryArg> for MemoryMode {
    fn from(arg: MemoryArg) -> Self {
        match arg {
            MemoryArg::Full => MemoryMode::Full,
            MemoryArg::Partial => MemoryMode::Partial,
            MemoryArg::None => MemoryMode::None,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogLevelArg {
    None,
    Critical,
    Error,
    Warning,
    Information,
}

impl From<LogLevelArg> for LogLevel {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::None => LogLevel::None,
            LogLevelArg::Critical => LogLevel::Critical,
            LogLevelArg::Error => LogLevel::Error,
            LogLevelArg::Warning => LogLevel::Warning,
            LogLevelArg::Information => LogLevel::Information,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether Steam is installed
    Installed,

    /// Print the Steam install directory
    Location,

    /// List Steam library folders
    Libraries,

    /// Find a game by its install folder name
    Folder {
        /// Folder under steamapps/common
        name: String,
    },

    /// Find a game by Steam app id
    Id {
        /// Steam app id
        id: String,
    },

    /// Find a game by display name
    Name {
        /// Exact display name
        name: String,
    },

    /// List every installed game
    List,

    /// Run every query in turn
    Tour(tour::TourArgs),

    /// Print the effective settings as JSON
    Config {
        /// Also write them to config.toml
        #[arg(long)]
        save: bool,
    },
}

/// Apply command-line overrides on top of the loaded config.
pub fn apply_overrides(mut config: Config, args: &LocatorArgs) -> Config {
    if let Some(memory) = args.memory {
        config.locator.memory = memory.into();
    }
    if args.suppress_errors {
        config.locator.suppress_errors = true;
    }
    if args.no_index {
        config.locator.index_library = false;
    }
    if let Some(dir) = &args.steam_dir {
        config.steam.install_dir = Some(dir.clone());
    }
    if let Some(level) = args.log_level {
        config.logging.level = level.into();
    }
    config
}

/// Build a locator from the effective config.
pub fn build_locator(config: &Config) -> Locator {
    let resolver: Box<dyn InstallResolver> = match &config.steam.install_dir {
        Some(dir) => {
            tracing::debug!("Using configured Steam install: {}", dir.display());
            Box::new(FixedResolver::steam_install(dir))
        }
        None => platform_resolver(),
    };
    Locator::new(config.locator, resolver)
}

fn show_config(config: &Config, save: bool) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(config)?);
    if save {
        let Some(path) = config::save(config).context("Failed to save config.toml")? else {
            anyhow::bail!("No configuration directory available on this system");
        };
        println!("Saved {}", path.display());
    }
    Ok(())
}

fn init_logging(level: LogLevel) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level.as_filter())),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = apply_overrides(config::load(), &cli.locator);
    init_logging(config.logging.level);

    let mut locator = build_locator(&config);
    let json = cli.locator.json;

    match cli.command {
        Commands::Installed => query::installed(&mut locator, json),
        Commands::Location => query::location(&mut locator, json),
        Commands::Libraries => query::libraries(&mut locator, json),
        Commands::Folder { name } => query::by_folder(&mut locator, &name, json),
        Commands::Id { id } => query::by_id(&mut locator, &id, json),
        Commands::Name { name } => query::by_name(&mut locator, &name, json),
        Commands::List => query::list(&mut locator, json),
        Commands::Tour(args) => tour::execute(&mut locator, args),
        Commands::Config { save } => show_config(&config, save),
    }
}
