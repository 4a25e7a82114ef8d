mod scanner;
mod lisp_tokenizer;

pub use scanner::Scanner;
pub use lisp_tokenizer::LispTokenizer;

#[cfg(test)]
mod scanner_test;
