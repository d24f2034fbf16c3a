//! Single-query commands and their output

use std::path::PathBuf;

use anyhow::{Context, Result};
use steamfinder_core::{AppRecord, Locator};

/// One line per game: `id<TAB>name<TAB>location`, with `-` for unknown fields.
pub fn format_record(game: &AppRecord) -> String {
    let id = if game.id.is_empty() { "-" } else { &game.id };
    let name = game.name.as_deref().unwrap_or("-");
    let location = game
        .location
        .as_ref()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "-".to_string());
    format!("{}\t{}\t{}", id, name, location)
}

fn print_record(game: &AppRecord, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(game)?);
    } else if game.is_empty() {
        println!("(not found)");
    } else {
        println!("{}", format_record(game));
    }
    Ok(())
}

fn print_paths(paths: &[PathBuf], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(paths)?);
    } else {
        for path in paths {
            println!("{}", path.display());
        }
    }
    Ok(())
}

pub fn installed(locator: &mut Locator, json: bool) -> Result<()> {
    let installed = locator
        .is_installed()
        .context("Failed to check for a Steam install")?;
    if json {
        println!("{}", serde_json::json!({ "installed": installed }));
    } else {
        println!("{}", installed);
    }
    Ok(())
}

pub fn location(locator: &mut Locator, json: bool) -> Result<()> {
    let location = locator.install_location().context("Failed to locate Steam")?;
    if json {
        println!("{}", serde_json::json!({ "location": location }));
    } else {
        match location {
            Some(path) => println!("{}", path.display()),
            None => println!("(not found)"),
        }
    }
    Ok(())
}

pub fn libraries(locator: &mut Locator, json: bool) -> Result<()> {
    let libraries = locator
        .library_locations()
        .context("Failed to read Steam libraries")?;
    print_paths(libraries, json)
}

pub fn by_folder(locator: &mut Locator, folder: &str, json: bool) -> Result<()> {
    let game = locator
        .find_by_folder(folder)
        .with_context(|| format!("No game installed in folder '{}'", folder))?;
    print_record(&game, json)
}

pub fn by_id(locator: &mut Locator, id: &str, json: bool) -> Result<()> {
    let game = locator
        .find_by_id(id)
        .with_context(|| format!("No game with app id {}", id))?;
    print_record(&game, json)
}

pub fn by_name(locator: &mut Locator, name: &str, json: bool) -> Result<()> {
    let game = locator
        .find_by_name(name)
        .with_context(|| format!("No game named '{}'", name))?;
    print_record(&game, json)
}

pub fn list(locator: &mut Locator, json: bool) -> Result<()> {
    let games = locator.all_games().context("Failed to index Steam games")?;
    if json {
        println!("{}", serde_json::to_string_pretty(games)?);
    } else {
        for game in games {
            println!("{}", format_record(game));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_full_record() {
        let location = PathBuf::from("/lib/steamapps/common/Isaac");
        let game = AppRecord {
            id: "250900".into(),
            name: Some("The Binding of Isaac".into()),
            location: Some(location.clone()),
        };
        let expected = format!("250900\tThe Binding of Isaac\t{}", location.display());
        assert_eq!(format_record(&game), expected);
    }

    #[test]
    fn test_format_partial_record() {
        let game = AppRecord {
            id: String::new(),
            name: Some("Isaac".into()),
            location: None,
        };
        assert_eq!(format_record(&game), "-\tIsaac\t-");
    }

    #[test]
    fn test_record_json_shape() {
        let game = AppRecord {
            id: "7".into(),
            name: None,
            location: None,
        };
        let value = serde_json::to_value(&game).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "id": "7", "name": null, "location": null })
        );
    }
}
