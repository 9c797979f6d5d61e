use rand::Rng;

use crate::parse::Predicate;

/// One die of a roll: how many faces it has and every value it rolled, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RolledDie {
    pub(crate) faces: u32,
    pub(crate) results: Vec<u32>,
}

impl RolledDie {
    pub fn new(faces: u32, results: Vec<u32>) -> Self {
        Self { faces, results }
    }

    /// Rolls `quantity` dice with `faces` faces each.
    pub fn roll_with(faces: u32, quantity: usize, rng: &mut impl Rng) -> Self {
        let results = if faces == 0 {
            Vec::new()
        } else {
            (0..quantity).map(|_| rng.gen_range(1..=faces)).collect()
        };
        Self { faces, results }
    }

    pub fn faces(&self) -> u32 {
        self.faces
    }
    pub fn results(&self) -> &[u32] {
        &self.results
    }

    pub fn sum(&self) -> i64 {
        self.results.iter().map(|&r| i64::from(r)).sum()
    }
}

/// A whole roll: the dice in the order they were written plus a flat modifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RolledDice {
    pub(crate) dice: Vec<RolledDie>,
    pub(crate) modifier: i32,
    pub(crate) total: i64,
}

impl RolledDice {
    pub fn new(dice: Vec<RolledDie>, modifier: i32) -> Self {
        let mut rolled = Self {
            dice,
            modifier,
            total: 0,
        };
        rolled.recompute_total();
        rolled
    }

    pub fn dice(&self) -> &[RolledDie] {
        &self.dice
    }
    pub fn modifier(&self) -> i32 {
        self.modifier
    }
    pub fn total(&self) -> i64 {
        self.total
    }

    /// Every result of every die, flattened in roll order.
    pub fn values(&self) -> Vec<u32> {
        self.dice
            .iter()
            .flat_map(|d| d.results.iter().copied())
            .collect()
    }

    pub fn recompute_total(&mut self) {
        self.total = self.dice.iter().map(RolledDie::sum).sum::<i64>() + i64::from(self.modifier);
    }
}

/// How many values a rewrite replaced and how many it had to leave alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RewriteSummary {
    pub rewritten: usize,
    pub infeasible: usize,
}

/// Replaces every value of every die with a fresh face passing `predicate`.
///
/// Values on dice that cannot pass it are left as they were. The total is
/// always recomputed afterwards, even when nothing changed.
pub fn rewrite(
    rolled: &mut RolledDice,
    predicate: &Predicate,
    unit: &mut impl FnMut() -> f64,
) -> RewriteSummary {
    let mut summary = RewriteSummary::default();

    for die in rolled.dice.iter_mut() {
        let faces = die.faces;
        for result in die.results.iter_mut() {
            match predicate.sample(faces, unit) {
                Ok(value) => {
                    *result = value;
                    summary.rewritten += 1;
                }
                Err(err) => {
                    tracing::debug!("Keeping {result}: {err}");
                    summary.infeasible += 1;
                }
            }
        }
    }

    rolled.recompute_total();
    tracing::debug!(
        "Rewrote {} values to {predicate}, kept {}, total {}",
        summary.rewritten,
        summary.infeasible,
        rolled.total
    );

    summary
}

impl std::fmt::Display for RolledDie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}d{}[{}]",
            self.results.len(),
            self.faces,
            self.results
                .iter()
                .map(|r| r.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

impl std::fmt::Display for RolledDice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut str = self
            .dice
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join(" + ");

        match self.modifier {
            0 => {}
            m if m > 0 => str.push_str(&format!(" + {m}")),
            m => str.push_str(&format!(" - {}", m.unsigned_abs())),
        }
        write!(f, "{str}")
    }
}
