use lexers::WordTokenizer;
use log::debug;

use crate::error::{Error, Result};
use crate::operators::OperatorTable;

/// Splits an expression on whitespace and checks every fragment is either
/// a run of digits or an operator known to the table.
pub struct Tokenizer<'a, T: OperatorTable + ?Sized> {
    ops: &'a T,
}

impl<'a, T: OperatorTable + ?Sized> Tokenizer<'a, T> {
    pub fn new(ops: &'a T) -> Self {
        Tokenizer { ops }
    }

    pub fn is_operator(&self, symbol: &str) -> bool {
        self.ops.is_operator(symbol)
    }

    pub fn is_valid_symbol(&self, symbol: &str) -> bool {
        is_number(symbol) || self.is_operator(symbol)
    }

    pub fn tokenize(&self, input: &str) -> Result<Vec<String>> {
        let tokens: Vec<String> = WordTokenizer::from_str(input).collect();
        if let Some(bad) = tokens.iter().find(|t| !self.is_valid_symbol(t)) {
            return Err(Error::InvalidToken(bad.clone()));
        }
        debug!("tokens: {:?}", tokens);
        Ok(tokens)
    }
}

pub(crate) fn is_number(symbol: &str) -> bool {
    !symbol.is_empty() && symbol.chars().all(|c| c.is_ascii_digit())
}
