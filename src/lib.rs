//! Rewrite dice roll results so every face passes a comparison like `>=10`.
//!
//! ```rust
//! # use fake_dice::{intercept_roll, parse_predicate, rewrite_roll_with, FakeDiceConfig, RolledDice, RolledDie, UserRole};
//! # use rand::rngs::StdRng;
//! # use rand::{Rng, SeedableRng};
//! #
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut rng = StdRng::seed_from_u64(1);
//!
//! // 2d20 + 1 where every d20 lands on 15 or more
//! let predicate = parse_predicate(">=15")?;
//! let mut rolled = RolledDice::new(vec![RolledDie::roll_with(20, 2, &mut rng)], 1);
//! rewrite_roll_with(&mut rolled, &predicate, &mut rng);
//! assert!(rolled.values().iter().all(|&v| v >= 15));
//! println!("{rolled} = {}", rolled.total());
//!
//! // The same thing driven by the host settings
//! let config = FakeDiceConfig::from_json(r#"{"enabled": true, "target": "<=2"}"#)?;
//! let mut rolled = RolledDice::new(vec![RolledDie::roll_with(6, 3, &mut rng)], 0);
//! let outcome = intercept_roll(&config, UserRole::Gm, &mut rolled, &mut || rng.gen());
//! assert!(outcome.was_rewritten());
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
mod evaluate;
mod parse;

use rand::Rng;

pub use config::{FakeDiceConfig, UserRole, DEFAULT_TARGET};
pub use error::{ConfigError, Infeasible, ParseError};
pub use evaluate::intercept::Interception;
pub use evaluate::roll::{RewriteSummary, RolledDice, RolledDie};
pub use parse::{CompareOp, Predicate};

/// Parses a target like `>=10` into a predicate.
pub fn parse_predicate(text: &str) -> Result<Predicate, ParseError> {
    Predicate::parse(text)
}

/// Picks a face of a `faces` sided die passing `predicate`, uniformly among
/// all that do. `unit` must return values in `[0, 1)`.
pub fn sample_satisfying(
    faces: u32,
    predicate: &Predicate,
    unit: &mut impl FnMut() -> f64,
) -> Result<u32, Infeasible> {
    predicate.sample(faces, unit)
}

/// Same as `sample_satisfying()` but allows you to choose the rng you prefer to use.
pub fn sample_satisfying_with(
    faces: u32,
    predicate: &Predicate,
    rng: &mut impl Rng,
) -> Result<u32, Infeasible> {
    predicate.sample_with(faces, rng)
}

/// Rewrites every value of every die in place, then recomputes the total.
pub fn rewrite_roll(
    rolled: &mut RolledDice,
    predicate: &Predicate,
    unit: &mut impl FnMut() -> f64,
) -> RewriteSummary {
    evaluate::roll::rewrite(rolled, predicate, unit)
}

/// Same as `rewrite_roll()` but allows you to choose the rng you prefer to use.
pub fn rewrite_roll_with(
    rolled: &mut RolledDice,
    predicate: &Predicate,
    rng: &mut impl Rng,
) -> RewriteSummary {
    evaluate::roll::rewrite(rolled, predicate, &mut || rng.gen::<f64>())
}

/// Runs a roll through the host hook using a snapshot of the settings.
pub fn intercept_roll(
    config: &FakeDiceConfig,
    role: UserRole,
    rolled: &mut RolledDice,
    unit: &mut impl FnMut() -> f64,
) -> Interception {
    evaluate::intercept::intercept(config, role, rolled, unit)
}
