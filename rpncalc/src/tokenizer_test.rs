use crate::error::Error;
use crate::operators::{BaseOperators, OperatorSpec};
use crate::tokenizer::Tokenizer;

#[test]
fn valid_symbols() {
    let ops = BaseOperators::default();
    let tk = Tokenizer::new(&ops);
    for symbol in ["0", "7", "123", "007", "98765432109876543210"] {
        assert!(tk.is_valid_symbol(symbol), "{}", symbol);
    }
    for symbol in ["+", "-", "*", "/"] {
        assert!(tk.is_valid_symbol(symbol), "{}", symbol);
    }
    for symbol in ["", "^", "-3", "+3", "1.5", "x", "12a", "**", "(", "٣"] {
        assert!(!tk.is_valid_symbol(symbol), "{}", symbol);
    }
}

#[test]
fn is_operator() {
    let ops = BaseOperators::default();
    let tk = Tokenizer::new(&ops);
    assert!(tk.is_operator("+"));
    assert!(!tk.is_operator("qqq"));
}

#[test]
fn collapses_spaces() {
    let ops = BaseOperators::default();
    let tokens = Tokenizer::new(&ops).tokenize("1 +   2 - 3").unwrap();
    assert_eq!(tokens, vec!["1", "+", "2", "-", "3"]);
}

#[test]
fn surrounding_whitespace() {
    let ops = BaseOperators::default();
    let tokens = Tokenizer::new(&ops).tokenize("\t42 *\n 2  ").unwrap();
    assert_eq!(tokens, vec!["42", "*", "2"]);
    assert_eq!(Tokenizer::new(&ops).tokenize("   "), Ok(vec![]));
}

#[test]
fn glued_sign_is_invalid() {
    let ops = BaseOperators::default();
    let tk = Tokenizer::new(&ops);
    assert_eq!(tk.tokenize("1 -3"), Err(Error::InvalidToken(format!("-3"))));
    assert_eq!(tk.tokenize("1+2"), Err(Error::InvalidToken(format!("1+2"))));
    assert_eq!(tk.tokenize("2 ^ 3"), Err(Error::InvalidToken(format!("^"))));
}

#[test]
fn reports_first_bad_fragment() {
    let ops = BaseOperators::default();
    let tk = Tokenizer::new(&ops);
    assert_eq!(tk.tokenize("1 + x * y"), Err(Error::InvalidToken(format!("x"))));
}

#[test]
fn custom_table() {
    let ops = BaseOperators::default().with(OperatorSpec::new('^', 15, |a, b| {
        let exp = u32::try_from(b).map_err(|_| Error::Overflow)?;
        a.checked_pow(exp).ok_or(Error::Overflow)
    }));
    let tokens = Tokenizer::new(&ops).tokenize("2 ^ 3").unwrap();
    assert_eq!(tokens, vec!["2", "^", "3"]);
}
