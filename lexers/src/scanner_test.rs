use crate::scanner::Scanner;

#[test]
fn test_extremes() {
    let mut s = Scanner::from_str("just a test buffer@");
    assert_eq!(s.curr(), None);
    assert_eq!(s.next(), Some('j'));
    assert_eq!(s.curr(), Some('j'));
    while s.next() != Some('@') {}
    assert_eq!(s.curr(), Some('@'));
    assert_eq!(s.peek(), None);
    assert_eq!(s.next(), None);
    assert_eq!(s.next(), None);
}

#[test]
fn test_extract() {
    let mut s = Scanner::from_str("just a test buffer@");
    for _ in 0..4 { assert!(s.next().is_some()); }
    assert_eq!(s.extract().iter().cloned().collect::<String>(), "just");
    assert_eq!(s.peek(), Some(' '));
    assert_eq!(s.curr(), None);
    assert_eq!(s.next(), Some(' '));
    for _ in 0..6 { assert!(s.next().is_some()); }
    assert_eq!(s.extract_string(), " a test");
    assert_eq!(s.next(), Some(' '));
}

#[test]
fn test_accept() {
    let mut s = Scanner::from_str("heey  you!");
    assert!(!s.skip_ws());
    assert_eq!(s.curr(), None);
    assert_eq!(s.accept_any_char("he"), Some('h'));
    assert_eq!(s.accept_any_char("he"), Some('e'));
    assert_eq!(s.accept_any_char("hye"), Some('e'));
    assert_eq!(s.accept_any_char("e"), None);
    assert_eq!(s.curr(), Some('e'));
    assert_eq!(s.accept_any_char("hey"), Some('y'));
    assert!(s.skip_ws());
    assert!(!s.skip_ws());
    assert_eq!(s.curr(), Some(' '));
    assert!(s.accept_char('y'));
    assert!(!s.accept_char('y'));
    assert_eq!(s.next(), Some('o'));
}

#[test]
fn test_skips() {
    let mut s = Scanner::from_str("heey  you!");
    assert_eq!(s.accept_any_char("h"), Some('h'));
    assert!(s.skip_all_chars("hey"));
    assert!(!s.skip_all_chars("hey"));
    assert_eq!(s.curr(), Some('y'));
    assert!(s.until_any_char("!"));
    assert!(!s.until_any_char("!"));
    assert_eq!(s.accept_any_char("!"), Some('!'));
    assert_eq!(s.next(), None);
    assert_eq!(s.curr(), None);
}

#[test]
fn test_ignore_keeps_lookahead() {
    let mut s = Scanner::new(vec!["(", "a", ")"].into_iter());
    assert_eq!(s.next(), Some("("));
    assert_eq!(s.peek(), Some("a"));
    s.ignore();
    assert_eq!(s.view().len(), 0);
    assert_eq!(s.next(), Some("a"));
    assert_eq!(s.next(), Some(")"));
    assert_eq!(s.next(), None);
}
