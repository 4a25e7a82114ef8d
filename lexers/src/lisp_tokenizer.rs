use crate::scanner::Scanner;

// parens always split atoms, even with no surrounding whitespace
const PARENS: &str = "()";
const DELIMS: &str = "() \t\n\r\x0b\x0c";

/// Splits source text into `(`, `)` and atom tokens.
///
/// There are no string literals, escapes or comments: any paren character
/// is a delimiter wherever it shows up.
pub struct LispTokenizer(Scanner<std::vec::IntoIter<char>>);

impl LispTokenizer {
    pub fn new(source: &str) -> Self {
        LispTokenizer(Scanner::from_str(source))
    }

    pub fn scanner(source: &str) -> Scanner<LispTokenizer> {
        Scanner::new(LispTokenizer::new(source))
    }
}

impl Iterator for LispTokenizer {
    type Item = String;
    fn next(&mut self) -> Option<Self::Item> {
        self.0.ignore_ws();
        if let Some(paren) = self.0.accept_any_char(PARENS) {
            self.0.ignore();
            Some(paren.to_string())
        } else if self.0.until_any_char(DELIMS) { // or til EOF
            Some(self.0.extract_string())
        } else {
            None
        }
    }
}

///////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::LispTokenizer;

    fn tokens(source: &str) -> Vec<String> {
        LispTokenizer::new(source).collect()
    }

    #[test]
    fn test_lisp_tokenizer() {
        let expect = vec![
            "(", "begin", "(", "define", "r", "10", ")",
            "(", "*", "3.14", "(", "*", "r", "r", ")", ")", ")",
        ];
        assert_eq!(tokens("(begin (define r 10) (* 3.14 (* r r)))"), expect);
    }

    #[test]
    fn test_blank_input() {
        assert!(tokens("").is_empty());
        assert!(tokens(" \t\n\r  ").is_empty());
    }

    #[test]
    fn test_parens_split_atoms() {
        assert_eq!(tokens("a(b)c"), vec!["a", "(", "b", ")", "c"]);
        assert_eq!(tokens("))(("), vec![")", ")", "(", "("]);
        assert_eq!(tokens("  foo\n\tbar  "), vec!["foo", "bar"]);
    }

    #[test]
    fn test_no_string_literals() {
        assert_eq!(tokens("\"a (b\""), vec!["\"a", "(", "b\""]);
    }
}
