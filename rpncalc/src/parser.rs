use log::{debug, trace};
use std::ops::Deref;

use crate::error::Result;
use crate::operators::OperatorTable;
use crate::tokenizer::Tokenizer;

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Token {
    Operand(String),
    Operator(String),
}

impl Token {
    pub fn as_str(&self) -> &str {
        match self {
            Token::Operand(s) | Token::Operator(s) => s,
        }
    }
}

/// An expression in postfix order, ready for evaluation.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct RPNExpr(pub Vec<Token>);

impl RPNExpr {
    pub fn symbols(&self) -> Vec<&str> {
        self.0.iter().map(Token::as_str).collect()
    }
}

impl Deref for RPNExpr {
    type Target = [Token];
    fn deref(&self) -> &[Token] {
        &self.0
    }
}

pub struct ShuntingParser;

impl ShuntingParser {
    pub fn parse_str<T: OperatorTable + ?Sized>(ops: &T, expr: &str) -> Result<RPNExpr> {
        let tokens = Tokenizer::new(ops).tokenize(expr)?;
        Self::parse(ops, tokens)
    }

    /// Reorder infix tokens into postfix. Anything that isn't an operator is
    /// taken as an operand, validating it is left to the tokenizer.
    pub fn parse<T, I>(ops: &T, tokens: I) -> Result<RPNExpr>
    where
        T: OperatorTable + ?Sized,
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut out = Vec::new();
        let mut stack: Vec<String> = Vec::new();

        for token in tokens {
            let token = token.into();
            if !ops.is_operator(&token) {
                out.push(Token::Operand(token));
                continue;
            }
            let prec = ops.weight(&token)?;
            // equal precedence pops first: operators are left associative
            while let Some(top) = stack.pop() {
                if ops.weight(&top)? < prec {
                    stack.push(top);
                    break;
                }
                trace!("pop {} before {}", top, token);
                out.push(Token::Operator(top));
            }
            stack.push(token);
        }
        while let Some(top) = stack.pop() {
            out.push(Token::Operator(top));
        }

        let rpn = RPNExpr(out);
        debug!("postfix: {}", rpn);
        Ok(rpn)
    }
}
