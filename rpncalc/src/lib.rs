//! Evaluate whitespace separated integer expressions such as `4 + 4 * 8 / 2`.
//!
//! Input is split into tokens, reordered into postfix with the shunting-yard
//! algorithm and evaluated on a stack:
//!
//! ```
//! assert_eq!(rpncalc::evaluate("1 + 2 * 3"), Ok(7));
//! assert_eq!(rpncalc::evaluate("8 - 4 - 2"), Ok(2));
//! assert!(rpncalc::evaluate("1 -3").is_err());
//! ```

pub use error::{Error, Result};
pub use operators::{BaseOperators, OperatorSpec, OperatorTable};
pub use parser::{RPNExpr, ShuntingParser, Token};
pub use rpneval::EvalContext;
pub use tokenizer::Tokenizer;

mod error;
pub mod operators;

mod tokenizer;
#[cfg(test)]
mod tokenizer_test;

pub mod parser;

mod rpneval;

mod rpnprint;

/// Evaluate `expr` with the default `+ - * /` operators.
pub fn evaluate(expr: &str) -> Result<i64> {
    evaluate_with(&BaseOperators::default(), expr)
}

pub fn evaluate_with<T: OperatorTable + ?Sized>(ops: &T, expr: &str) -> Result<i64> {
    let rpn = ShuntingParser::parse_str(ops, expr)?;
    EvalContext::new(ops).eval(&rpn)
}
