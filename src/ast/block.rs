use super::Statement;

/// A brace-delimited sequence of statements. Unlike `Program`, a block's
/// `Return`/`Error` results are not unwrapped by the evaluator — they
/// propagate to the nearest enclosing function or program boundary.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BlockStatement {
    pub statements: Vec<Statement>,
}

impl BlockStatement {
    pub fn new(statements: Vec<Statement>) -> Self {
        Self { statements }
    }
}
