use crate::scanner::Scanner;

// Splits input on runs of whitespace. Fragments are returned verbatim,
// no attempt is made to separate signs, digits or operators.
pub struct WordTokenizer<I: Iterator<Item = char>> {
    src: Scanner<I>,
}

impl<I: Iterator<Item = char>> WordTokenizer<I> {
    pub fn new(source: I) -> Self {
        WordTokenizer { src: Scanner::new(source) }
    }
}

impl<'a> WordTokenizer<std::str::Chars<'a>> {
    pub fn from_str(source: &'a str) -> Self {
        Self::new(source.chars())
    }
}

impl<I: Iterator<Item = char>> Iterator for WordTokenizer<I> {
    type Item = String;
    fn next(&mut self) -> Option<String> {
        self.src.skip_ws();
        self.src.ignore();
        if self.src.until(|c| c.is_whitespace()) {
            Some(self.src.extract_string())
        } else {
            None
        }
    }
}

///////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::WordTokenizer;

    #[test]
    fn collapses_whitespace() {
        let words: Vec<String> = WordTokenizer::from_str("1 +   2 - 3").collect();
        assert_eq!(words, vec!["1", "+", "2", "-", "3"]);
    }

    #[test]
    fn mixed_whitespace() {
        let words: Vec<String> = WordTokenizer::from_str("\t 12\n*\r\n 3  ").collect();
        assert_eq!(words, vec!["12", "*", "3"]);
    }

    #[test]
    fn keeps_glued_fragments() {
        let words: Vec<String> = WordTokenizer::from_str("1 -3 4+5").collect();
        assert_eq!(words, vec!["1", "-3", "4+5"]);
    }

    #[test]
    fn empty_input() {
        assert_eq!(WordTokenizer::from_str("").next(), None);
        assert_eq!(WordTokenizer::from_str("   \t\n").next(), None);
    }
}
