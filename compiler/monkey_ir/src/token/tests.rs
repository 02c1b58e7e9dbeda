use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_lookup_keywords() {
    assert_eq!(lookup_ident("fn"), TokenKind::Function);
    assert_eq!(lookup_ident("let"), TokenKind::Let);
    assert_eq!(lookup_ident("true"), TokenKind::True);
    assert_eq!(lookup_ident("false"), TokenKind::False);
    assert_eq!(lookup_ident("if"), TokenKind::If);
    assert_eq!(lookup_ident("else"), TokenKind::Else);
    assert_eq!(lookup_ident("return"), TokenKind::Return);
}

#[test]
fn test_lookup_identifiers() {
    assert_eq!(lookup_ident("foobar"), TokenKind::Ident);
    assert_eq!(lookup_ident("fnord"), TokenKind::Ident);
    // keywords are case sensitive
    assert_eq!(lookup_ident("Let"), TokenKind::Ident);
}

#[test]
fn test_canonical_spellings() {
    assert_eq!(TokenKind::Assign.to_string(), "=");
    assert_eq!(TokenKind::NotEq.to_string(), "!=");
    assert_eq!(TokenKind::Ident.to_string(), "IDENT");
    assert_eq!(TokenKind::Function.to_string(), "FUNCTION");
    assert_eq!(TokenKind::Eof.to_string(), "EOF");
}

#[test]
fn test_token_display() {
    let token = Token::new(TokenKind::Int, "42", Span::new(0, 2));
    assert_eq!(token.to_string(), "{Type:INT Literal:42}");
}
