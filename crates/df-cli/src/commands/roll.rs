//! One-off demo roll.

use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;

use df_mechanics::{DEFAULT_DIFFICULTY, Difficulty, DualRoll, outcome_delta, resolve};

use super::styled_outcome;

pub fn run(
    difficulty: Option<i32>,
    tier: Option<&str>,
    modifier: i32,
    seed: Option<u64>,
) -> Result<(), String> {
    let difficulty = match (difficulty, tier) {
        (Some(d), _) => d,
        (None, Some(name)) => Difficulty::parse(name)
            .ok_or_else(|| {
                format!("unknown tier: \"{name}\" (trivial, easy, moderate, hard, extreme)")
            })?
            .threshold(),
        (None, None) => DEFAULT_DIFFICULTY,
    };

    let mut rng = StdRng::seed_from_u64(seed.unwrap_or_else(rand::random));
    let roll = DualRoll::roll(&mut rng);
    let outcome = resolve(roll, difficulty, modifier);

    println!("  {roll}  (modifier {modifier:+})");
    println!("  {}", styled_outcome(&outcome));

    let delta = outcome_delta(&outcome);
    if delta.hope > 0 {
        println!("  Hope {}", format!("+{}", delta.hope).green());
    }
    if delta.fear > 0 {
        println!("  Fear {}", format!("+{}", delta.fear).red());
    }
    Ok(())
}
