mod predicate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareOp {
    /// =
    Equal,
    /// \>
    GreaterThan,
    /// \>=
    GreaterThanOrEqual,
    /// <
    LessThan,
    /// <=
    LessThanOrEqual,
}

/// A comparison that a die face has to pass, written `{op}{operand}`, e.g. `>=10`.
///
/// Once constructed the operand is always a valid non-negative integer,
/// there is no way to build a half parsed predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Predicate {
    pub(crate) op: CompareOp,
    pub(crate) operand: u32,
}

impl Predicate {
    pub fn new(op: CompareOp, operand: u32) -> Self {
        Self { op, operand }
    }

    pub fn op(&self) -> CompareOp {
        self.op
    }
    pub fn operand(&self) -> u32 {
        self.operand
    }

    pub fn matches(&self, value: u32) -> bool {
        let n = self.operand;
        match self.op {
            CompareOp::Equal => value == n,
            CompareOp::GreaterThan => value > n,
            CompareOp::GreaterThanOrEqual => value >= n,
            CompareOp::LessThan => value < n,
            CompareOp::LessThanOrEqual => value <= n,
        }
    }
}

impl std::fmt::Display for CompareOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let str = match self {
            CompareOp::Equal => "=",
            CompareOp::GreaterThan => ">",
            CompareOp::GreaterThanOrEqual => ">=",
            CompareOp::LessThan => "<",
            CompareOp::LessThanOrEqual => "<=",
        };
        write!(f, "{str}")
    }
}

impl std::fmt::Display for Predicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.op, self.operand)
    }
}
