use crate::error::{Error, Result};

pub type ApplyFn = fn(i64, i64) -> Result<i64>;

/// A binary operator: its symbol, how tightly it binds (higher binds
/// tighter) and how to compute it.
#[derive(Clone, Copy, Debug)]
pub struct OperatorSpec {
    pub symbol: char,
    pub precedence: u32,
    pub apply: ApplyFn,
}

impl OperatorSpec {
    pub fn new(symbol: char, precedence: u32, apply: ApplyFn) -> Self {
        OperatorSpec { symbol, precedence, apply }
    }
}

/// The operator capabilities the tokenizer, parser and evaluator rely on.
///
/// Implement this to supply a different operator set, or extend
/// [`BaseOperators`] with [`BaseOperators::with`].
pub trait OperatorTable {
    /// Precedence of `symbol`, fails with `UnknownOperator` if it isn't registered.
    fn weight(&self, symbol: &str) -> Result<u32>;

    /// Apply `symbol` to `a` (pushed first) and `b` (pushed second).
    fn apply(&self, symbol: &str, a: i64, b: i64) -> Result<i64>;

    fn is_operator(&self, symbol: &str) -> bool {
        self.weight(symbol).is_ok()
    }
}

/// Table backed by a list of [`OperatorSpec`]. The default holds
/// `* /` at precedence 10 and `+ -` at precedence 5.
#[derive(Clone, Debug)]
pub struct BaseOperators {
    specs: Vec<OperatorSpec>,
}

impl BaseOperators {
    pub fn empty() -> Self {
        BaseOperators { specs: Vec::new() }
    }

    /// Register an operator, replacing any previous one with the same symbol.
    pub fn with(mut self, spec: OperatorSpec) -> Self {
        self.specs.retain(|s| s.symbol != spec.symbol);
        self.specs.push(spec);
        self
    }

    pub fn lookup(&self, symbol: &str) -> Option<&OperatorSpec> {
        let mut chars = symbol.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => self.specs.iter().find(|s| s.symbol == c),
            _ => None,
        }
    }

    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.specs.iter().map(|s| s.symbol)
    }
}

impl Default for BaseOperators {
    fn default() -> Self {
        BaseOperators::empty()
            .with(OperatorSpec::new('*', 10, mul))
            .with(OperatorSpec::new('/', 10, floor_div))
            .with(OperatorSpec::new('+', 5, add))
            .with(OperatorSpec::new('-', 5, sub))
    }
}

impl OperatorTable for BaseOperators {
    fn weight(&self, symbol: &str) -> Result<u32> {
        self.lookup(symbol)
            .map(|spec| spec.precedence)
            .ok_or_else(|| Error::UnknownOperator(symbol.to_string()))
    }

    fn apply(&self, symbol: &str, a: i64, b: i64) -> Result<i64> {
        match self.lookup(symbol) {
            Some(spec) => (spec.apply)(a, b),
            None => Err(Error::UnknownOperator(symbol.to_string())),
        }
    }

    fn is_operator(&self, symbol: &str) -> bool {
        self.lookup(symbol).is_some()
    }
}

pub fn add(a: i64, b: i64) -> Result<i64> {
    a.checked_add(b).ok_or(Error::Overflow)
}

pub fn sub(a: i64, b: i64) -> Result<i64> {
    a.checked_sub(b).ok_or(Error::Overflow)
}

pub fn mul(a: i64, b: i64) -> Result<i64> {
    a.checked_mul(b).ok_or(Error::Overflow)
}

/// Integer division rounding toward negative infinity: `-7 / 2 == -4`.
pub fn floor_div(a: i64, b: i64) -> Result<i64> {
    if b == 0 {
        return Err(Error::DivisionByZero);
    }
    // only i64::MIN / -1 fails past this point
    let q = a.checked_div(b).ok_or(Error::Overflow)?;
    if a % b != 0 && (a < 0) != (b < 0) {
        Ok(q - 1)
    } else {
        Ok(q)
    }
}

///////////////////////////////////////////////////////////////////////////////
