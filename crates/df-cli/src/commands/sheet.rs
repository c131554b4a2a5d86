//! Show the active character sheet.

use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use df_core::{Character, UserId};
use df_store::Store;

pub fn run(user: i64, data: &Path) -> Result<(), String> {
    let store = super::open_store(data)?;
    let character = store
        .active_character(UserId(user))
        .map_err(|e| e.to_string())?
        .ok_or_else(|| format!("no active character for user {user}; create one with `dusk new`"))?;

    print_sheet(&character);
    Ok(())
}

/// Print a character sheet: header line, pools, and the attribute table.
pub(crate) fn print_sheet(character: &Character) {
    println!(
        "  {} [{} {}]",
        character.name.bold(),
        character.ancestry.to_string().dimmed(),
        character.class.to_string().dimmed()
    );
    println!();
    println!(
        "  Hope {}   Fear {}   HP {}   Armor {}   Stress {}",
        character.hope.to_string().green(),
        character.fear.to_string().red(),
        character.hit_points,
        character.armor_score,
        character.stress
    );
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "Agility",
        "Strength",
        "Finesse",
        "Instinct",
        "Presence",
        "Knowledge",
    ]);
    let attrs = character.attributes;
    table.add_row(vec![
        attrs.agility.to_string(),
        attrs.strength.to_string(),
        attrs.finesse.to_string(),
        attrs.instinct.to_string(),
        attrs.presence.to_string(),
        attrs.knowledge.to_string(),
    ]);
    println!("{table}");

    if !character.abilities.is_empty() {
        println!();
        println!("  abilities: {}", character.abilities.join(", "));
    }
    if !character.equipment.is_empty() {
        println!("  equipment: {}", character.equipment.join(", "));
    }
    if !character.spells.is_empty() {
        println!("  spells:    {}", character.spells.join(", "));
    }
}
