use esc_common::Span;

#[test]
fn merge_takes_the_outer_bounds() {
    let a = Span::new(10, 20);
    let b = Span::new(5, 15);
    assert_eq!(a.merge(b), Span::new(5, 20));
}

#[test]
fn dummy_span_is_recognized() {
    assert!(Span::dummy().is_dummy());
    assert!(!Span::new(0, 0).is_dummy());
}

#[test]
fn empty_span_has_zero_length() {
    let s = Span::at(42);
    assert!(s.is_empty());
    assert_eq!(s.len(), 0);
}
