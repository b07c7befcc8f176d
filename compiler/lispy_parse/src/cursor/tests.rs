use lispy_lexer::lex;

use super::*;

#[test]
fn walks_tokens_in_order() {
    let source = "+ 1";
    let tokens = lex(source);
    let mut cursor = Cursor::new(&tokens, source);

    assert!(cursor.check(TokenKind::Plus));
    assert_eq!(cursor.current_text(), "+");
    cursor.advance();
    assert_eq!(cursor.current_kind(), TokenKind::Number);
    assert_eq!(cursor.current_text(), "1");
    assert_eq!(cursor.position(), 1);
    cursor.advance();
    assert!(cursor.is_at_end());
}

#[test]
fn advance_stops_at_eof() {
    let source = "";
    let tokens = lex(source);
    let mut cursor = Cursor::new(&tokens, source);
    cursor.advance();
    cursor.advance();
    assert!(cursor.is_at_end());
    assert_eq!(cursor.position(), 0);
}

#[test]
fn adjacency_looks_at_spans() {
    let source = "- -5";
    let tokens = lex(source);
    let mut cursor = Cursor::new(&tokens, source);
    assert_eq!(cursor.peek_next_token().kind, TokenKind::Minus);
    assert!(!cursor.is_next_adjacent());
    cursor.advance();
    assert_eq!(cursor.peek_next_token().kind, TokenKind::Number);
    assert!(cursor.is_next_adjacent());
    cursor.advance();
    // Nothing follows the last token but `Eof`.
    assert!(!cursor.is_next_adjacent());
    cursor.advance();
    assert_eq!(cursor.peek_next_token().kind, TokenKind::Eof);
}

#[test]
fn missing_eof_is_synthesized() {
    let source = "+";
    let mut tokens = TokenList::new();
    tokens.push(Token::new(TokenKind::Plus, Span::new(0, 1)));
    let mut cursor = Cursor::new(&tokens, source);
    cursor.advance();
    assert!(cursor.is_at_end());
    assert_eq!(cursor.current_span(), Span::new(1, 1));
}
