//! Common test utilities for building pizzas and deterministic narrators.
use pizzeria::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// A narrator with a fixed seed and the default settings.
#[allow(dead_code)]
pub fn seeded_narrator(seed: u64) -> Narrator<StdRng> {
    Narrator::new(StdRng::seed_from_u64(seed), NarratorSettings::default())
        .expect("built-in templates parse")
}

/// Resolves `name` at `size` from the standard catalog.
#[allow(dead_code)]
pub fn pizza(name: &str, size: &str) -> PizzaInstance {
    Catalog::standard()
        .order_pizza(name, size)
        .expect("pizza exists on the standard menu")
}

/// Replaces every run of ASCII digits with `#`, so random ids and minutes compare equal.
#[allow(dead_code)]
pub fn mask_digits(text: &str) -> String {
    let mut out = String::new();
    let mut in_number = false;
    for c in text.chars() {
        if c.is_ascii_digit() {
            if !in_number {
                out.push('#');
            }
            in_number = true;
        } else {
            out.push(c);
            in_number = false;
        }
    }
    out
}

/// Extracts the number that directly precedes `suffix` in `line`.
#[allow(dead_code)]
pub fn number_before(line: &str, suffix: &str) -> u32 {
    let end = line.find(suffix).expect("suffix present");
    let digits: String = line[..end]
        .chars()
        .rev()
        .take_while(|c| c.is_ascii_digit())
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    digits.parse().expect("number before suffix")
}
