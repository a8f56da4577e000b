//! Decision tools: pick an option, flip a coin, roll a die.

use anyhow::{Result, bail};
use rand::Rng;

/// Pick one option uniformly. Errors on an empty list.
pub fn pick<'a, R: Rng>(options: &'a [String], rng: &mut R) -> Result<&'a str> {
    if options.is_empty() {
        bail!("No options to pick from");
    }
    Ok(options[rng.gen_range(0..options.len())].as_str())
}

pub fn coin_flip<R: Rng>(rng: &mut R) -> &'static str {
    if rng.gen_bool(0.5) { "heads" } else { "tails" }
}

/// Roll a die with `sides >= 2`, returning 1..=sides.
pub fn roll<R: Rng>(sides: u32, rng: &mut R) -> Result<u32> {
    if sides < 2 {
        bail!("A die needs at least 2 sides");
    }
    Ok(rng.gen_range(1..=sides))
}
