use thiserror::Error;

use crate::parse::Predicate;

/// The target text is not of the form `<op><digits>`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid target `{input}`: {message}")]
pub struct ParseError {
    pub(crate) input: String,
    pub(crate) message: String,
}

impl ParseError {
    pub fn input(&self) -> &str {
        &self.input
    }
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// No face of the die satisfies the predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no face of a d{faces} satisfies {predicate}")]
pub struct Infeasible {
    pub faces: u32,
    pub predicate: Predicate,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed settings: {0}")]
    Json(#[from] serde_json::Error),
}
