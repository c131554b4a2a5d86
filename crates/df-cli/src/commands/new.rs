//! Create a character.

use std::path::Path;

use df_core::{Ancestry, Character, CharacterClass, UserId};
use df_store::Store;

use super::sheet::print_sheet;

pub fn run(name: &str, class: &str, ancestry: &str, user: i64, data: &Path) -> Result<(), String> {
    let class = CharacterClass::parse(class).map_err(|e| e.to_string())?;
    let ancestry = Ancestry::parse(ancestry).map_err(|e| e.to_string())?;

    let mut store = super::open_store(data)?;
    let character = store
        .insert_character(Character::new(UserId(user), name, class, ancestry))
        .map_err(|e| e.to_string())?;

    println!("  Character created.");
    println!();
    print_sheet(&character);
    Ok(())
}
