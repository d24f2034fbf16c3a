//! Tour command - run every query in turn
//!
//! Useful as a smoke test on a real machine: each step prints its answer or
//! its error and the tour moves on.

use anyhow::Result;
use clap::Args;
use steamfinder_core::{AppRecord, LocateError, Locator};

use crate::query::format_record;

/// Arguments for the tour command
#[derive(Args)]
pub struct TourArgs {
    /// Folder to look up
    #[arg(long, default_value = "Fallout 3 goty")]
    pub folder: String,

    /// App id to look up
    #[arg(long, default_value = "250900")]
    pub id: String,

    /// Display name to look up
    #[arg(long, default_value = "Burnout™ Paradise Remastered")]
    pub name: String,
}

fn describe(result: Result<AppRecord, LocateError>) -> String {
    match result {
        Ok(game) if game.is_empty() => "(not found)".to_string(),
        Ok(game) => format_record(&game),
        Err(e) => format!("error: {}", e),
    }
}

pub fn execute(locator: &mut Locator, args: TourArgs) -> Result<()> {
    println!("Is Steam installed: {}", locator.is_installed()?);

    match locator.install_location() {
        Ok(Some(path)) => println!("Steam install path: {}", path.display()),
        Ok(None) => println!("Steam install path: (not found)"),
        Err(e) => println!("Steam install path: error: {}", e),
    }

    match locator.library_locations() {
        Ok(libraries) => {
            for library in libraries {
                println!("Library: {}", library.display());
            }
        }
        Err(e) => println!("Libraries: error: {}", e),
    }

    let by_folder = describe(locator.find_by_folder(&args.folder));
    println!("By folder '{}': {}", args.folder, by_folder);
    let by_id = describe(locator.find_by_id(&args.id));
    println!("By id {}: {}", args.id, by_id);
    let by_name = describe(locator.find_by_name(&args.name));
    println!("By name '{}': {}", args.name, by_name);

    match locator.all_games() {
        Ok(games) => {
            println!("All installed games ({}):", games.len());
            for game in games {
                println!("  {}", format_record(game));
            }
        }
        Err(e) => println!("All installed games: error: {}", e),
    }

    Ok(())
}
