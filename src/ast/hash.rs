use super::Expression;

/// A hash literal. Pairs are kept as an ordered list (not a map) so that
/// insertion order survives from source to evaluation, matching the
/// `inspect` contract's iteration-order guarantee.
#[derive(Debug, Clone, PartialEq)]
pub struct HashLiteral {
    pub pairs: Vec<(Expression, Expression)>,
}
