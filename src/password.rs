//! Password generation by charset sampling.
//!
//! Uses the thread-local RNG (not a CSPRNG); the tool targets throwaway
//! credentials and examples, matching the browser-side behavior it replaces.

use anyhow::{Result, bail};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()-_=+[]{};:,.<>?";
/// Characters that read ambiguously in many fonts.
const LOOK_ALIKES: &str = "O0Il1|`'\"";

#[derive(Debug, Clone, Copy)]
pub struct PasswordOptions {
    pub length: usize,
    pub lowercase: bool,
    pub uppercase: bool,
    pub digits: bool,
    pub symbols: bool,
    pub exclude_look_alikes: bool,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        PasswordOptions {
            length: 16,
            lowercase: true,
            uppercase: true,
            digits: true,
            symbols: false,
            exclude_look_alikes: false,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GeneratedPassword {
    pub password: String,
    pub entropy_bits: f64,
    pub strength: Strength,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strength {
    Weak,
    Fair,
    Strong,
    Excellent,
}

impl Strength {
    fn for_bits(bits: f64) -> Strength {
        if bits < 40.0 {
            Strength::Weak
        } else if bits < 64.0 {
            Strength::Fair
        } else if bits < 96.0 {
            Strength::Strong
        } else {
            Strength::Excellent
        }
    }
}

fn class_chars(class: &str, exclude_look_alikes: bool) -> Vec<char> {
    class
        .chars()
        .filter(|c| !exclude_look_alikes || !LOOK_ALIKES.contains(*c))
        .collect()
}

/// Generate a password honoring the selected character classes.
///
/// When length allows, at least one character of every selected class is
/// present; positions are shuffled so class characters do not cluster.
pub fn generate(options: &PasswordOptions) -> Result<GeneratedPassword> {
    generate_with(options, &mut rand::thread_rng())
}

/// Like [`generate`], with a caller-supplied RNG for deterministic tests.
pub fn generate_with<R: Rng>(options: &PasswordOptions, rng: &mut R) -> Result<GeneratedPassword> {
    if options.length == 0 {
        bail!("Password length must be at least 1");
    }
    let mut classes: Vec<Vec<char>> = Vec::new();
    for (enabled, class) in [
        (options.lowercase, LOWERCASE),
        (options.uppercase, UPPERCASE),
        (options.digits, DIGITS),
        (options.symbols, SYMBOLS),
    ] {
        if enabled {
            let chars = class_chars(class, options.exclude_look_alikes);
            if !chars.is_empty() {
                classes.push(chars);
            }
        }
    }
    if classes.is_empty() {
        bail!("At least one character class must be selected");
    }

    let pool: Vec<char> = classes.iter().flatten().copied().collect();
    let mut chars: Vec<char> = Vec::with_capacity(options.length);

    // One pick per selected class first, as far as length permits.
    for class in classes.iter().take(options.length) {
        chars.push(class[rng.gen_range(0..class.len())]);
    }
    while chars.len() < options.length {
        chars.push(pool[rng.gen_range(0..pool.len())]);
    }
    chars.shuffle(rng);

    let entropy_bits = options.length as f64 * (pool.len() as f64).log2();
    Ok(GeneratedPassword {
        password: chars.into_iter().collect(),
        entropy_bits,
        strength: Strength::for_bits(entropy_bits),
    })
}
