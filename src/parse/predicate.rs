use winnow::{
    ascii::digit1,
    combinator::{alt, cut_err},
    error::{
        StrContext::{Expected, Label},
        StrContextValue::{Description, StringLiteral},
    },
    PResult, Parser,
};

use super::{CompareOp, Predicate};
use crate::error::ParseError;

impl Predicate {
    /// Parses `{op}{digits}` where op is one of `>=`, `<=`, `>`, `<`, `=`.
    ///
    /// The whole input has to match, surrounding whitespace included.
    pub fn parse(input: &str) -> Result<Predicate, ParseError> {
        predicate.parse(input).map_err(|e| ParseError {
            input: input.to_string(),
            message: e.to_string(),
        })
    }
}

impl std::str::FromStr for Predicate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Predicate::parse(s)
    }
}

fn predicate(input: &mut &str) -> PResult<Predicate> {
    (compare_op, cut_err(operand))
        .map(|(op, operand)| Predicate { op, operand })
        .context(Label("target"))
        .parse_next(input)
}

fn compare_op(input: &mut &str) -> PResult<CompareOp> {
    // Two character operators go first or `>` would eat the start of `>=`
    alt((
        ">=".value(CompareOp::GreaterThanOrEqual),
        "<=".value(CompareOp::LessThanOrEqual),
        '>'.value(CompareOp::GreaterThan),
        '<'.value(CompareOp::LessThan),
        '='.value(CompareOp::Equal),
    ))
    .context(Label("operator"))
    .context(Expected(StringLiteral(">=")))
    .context(Expected(StringLiteral("<=")))
    .context(Expected(StringLiteral(">")))
    .context(Expected(StringLiteral("<")))
    .context(Expected(StringLiteral("=")))
    .parse_next(input)
}

fn operand(input: &mut &str) -> PResult<u32> {
    digit1
        .try_map(str::parse::<u32>)
        .context(Label("operand"))
        .context(Expected(Description("an unsigned integer that fits in 32 bits")))
        .parse_next(input)
}
