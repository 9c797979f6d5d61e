use rand::{thread_rng, Rng};

use crate::error::Infeasible;
use crate::parse::{CompareOp, Predicate};

impl Predicate {
    /// Every face of a `faces` sided die that passes the predicate, lowest first.
    pub fn candidates(&self, faces: u32) -> Vec<u32> {
        (1..=faces).filter(|&v| self.matches(v)).collect()
    }

    /// Whether at least one face of a `faces` sided die passes the predicate.
    pub fn is_satisfiable(&self, faces: u32) -> bool {
        if faces == 0 {
            return false;
        }
        let n = self.operand;
        match self.op {
            CompareOp::Equal => 1 <= n && n <= faces,
            CompareOp::GreaterThan => n < faces,
            CompareOp::GreaterThanOrEqual => n <= faces,
            CompareOp::LessThan => n > 1,
            CompareOp::LessThanOrEqual => n >= 1,
        }
    }

    /// Picks one of the faces passing the predicate, each with the same probability.
    ///
    /// `unit` must return values in `[0, 1)`; it is called exactly once when
    /// there is something to pick and never when the predicate is infeasible.
    pub fn sample(&self, faces: u32, unit: &mut impl FnMut() -> f64) -> Result<u32, Infeasible> {
        let candidates = self.candidates(faces);
        if candidates.is_empty() {
            return Err(Infeasible {
                faces,
                predicate: *self,
            });
        }

        Ok(candidates[pick_index(candidates.len(), unit())])
    }

    /// Same as `sample()` but draws from the rng specified.
    pub fn sample_with(&self, faces: u32, rng: &mut impl Rng) -> Result<u32, Infeasible> {
        self.sample(faces, &mut || rng.gen::<f64>())
    }

    /// Same as `sample()` using `rand::thread_rng()`.
    pub fn sample_once(&self, faces: u32) -> Result<u32, Infeasible> {
        self.sample_with(faces, &mut thread_rng())
    }
}

fn pick_index(len: usize, unit: f64) -> usize {
    // `as` saturates, so NaN and negative values land on 0
    ((unit * len as f64).floor() as usize).min(len - 1)
}
