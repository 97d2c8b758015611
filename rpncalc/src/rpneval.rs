use log::{debug, warn};

use crate::error::{Error, Result};
use crate::operators::OperatorTable;
use crate::parser::{RPNExpr, Token};
use crate::tokenizer::is_number;

/// Evaluates postfix expressions against an operator table.
///
/// By default operands left below the result are silently dropped, so
/// `1 2` evaluates to `2`. Use [`EvalContext::strict`] to reject them with
/// [`Error::MalformedExpression`] instead.
pub struct EvalContext<'a, T: OperatorTable + ?Sized> {
    ops: &'a T,
    strict: bool,
}

impl<'a, T: OperatorTable + ?Sized> EvalContext<'a, T> {
    pub fn new(ops: &'a T) -> Self {
        EvalContext { ops, strict: false }
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn eval(&self, rpn: &RPNExpr) -> Result<i64> {
        let mut operands = Vec::new();

        for token in rpn.iter() {
            match token {
                Token::Operand(num) => operands.push(parse_operand(num)?),
                Token::Operator(op) => {
                    let b = operands.pop().ok_or(Error::StackUnderflow)?;
                    let a = operands.pop().ok_or(Error::StackUnderflow)?;
                    operands.push(self.ops.apply(op, a, b)?);
                }
            }
        }
        let result = operands.pop().ok_or(Error::StackUnderflow)?;
        if !operands.is_empty() {
            if self.strict {
                return Err(Error::MalformedExpression(operands.len()));
            }
            warn!("ignoring {} unused operand(s) in '{}'", operands.len(), rpn);
        }
        debug!("{} = {}", rpn, result);
        Ok(result)
    }
}

fn parse_operand(num: &str) -> Result<i64> {
    if !is_number(num) {
        return Err(Error::BadNumber(num.to_string()));
    }
    num.parse::<i64>().map_err(|_| Error::BadNumber(num.to_string()))
}
