use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_suffix_from_char() {
    assert_eq!(NumberSuffix::from_char('B'), Some(NumberSuffix::Binary));
    assert_eq!(NumberSuffix::from_char('O'), Some(NumberSuffix::Octal));
    assert_eq!(NumberSuffix::from_char('H'), Some(NumberSuffix::Hex));
    assert_eq!(NumberSuffix::from_char('D'), Some(NumberSuffix::Decimal));
    assert_eq!(NumberSuffix::from_char('b'), None);
    assert_eq!(NumberSuffix::from_char('X'), None);
}

#[test]
fn test_suffix_radix() {
    assert_eq!(NumberSuffix::Plain.radix(), None);
    assert_eq!(NumberSuffix::Decimal.radix(), None);
    assert_eq!(NumberSuffix::Binary.radix(), Some(2));
    assert_eq!(NumberSuffix::Octal.radix(), Some(8));
    assert_eq!(NumberSuffix::Hex.radix(), Some(16));
}

#[test]
fn test_accessors() {
    let pos = Position::new(1, 2, 1);
    let word = Node::word("foo", pos);
    assert_eq!(word.as_word(), Some("foo"));
    assert_eq!(word.as_symbol(), None);

    let comma = Node::symbol(Symbol::Comma, pos);
    assert_eq!(comma.as_symbol(), Some(Symbol::Comma));
    assert_eq!(comma.as_word(), None);
}

#[test]
fn test_span_body_is_shared() {
    let pos = Position::START;
    let span = Node::span(Delimiter::Paren, vec![Node::word("x", pos)], pos);
    let copy = span.clone();
    match (&span.kind, &copy.kind) {
        (NodeKind::Span { body: a, .. }, NodeKind::Span { body: b, .. }) => {
            assert!(Rc::ptr_eq(a, b));
        }
        _ => panic!("expected span nodes"),
    }
}

#[test]
fn test_describe() {
    let pos = Position::START;
    assert_eq!(Node::word("x", pos).describe(), "word `x`");
    assert_eq!(Node::symbol(Symbol::Dollar, pos).describe(), "symbol `$`");
    assert_eq!(
        Node::span(Delimiter::Brace, Vec::new(), pos).describe(),
        "`{...}`"
    );
}

#[test]
fn test_deeply_nested_spans_drop() {
    let pos = Position::START;
    let mut node = Node::word("x", pos);
    for _ in 0..300_000 {
        node = Node::span(Delimiter::Paren, vec![node], pos);
    }
    drop(node);
}

#[test]
fn test_dropping_a_span_keeps_shared_bodies() {
    let pos = Position::START;
    let inner = Node::span(Delimiter::Brace, vec![Node::word("x", pos)], pos);
    let NodeKind::Span { body, .. } = &inner.kind else {
        panic!("expected a span node");
    };
    let kept = Rc::clone(body);
    let outer = Node::span(Delimiter::Paren, vec![inner], pos);
    drop(outer);
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].as_word(), Some("x"));
}
