use super::*;

#[test]
fn file_context_flags() {
    assert!(ParseContext::FILE.newline_terminates());
    assert!(ParseContext::FILE.contains(ParseContext::TOP_LEVEL));
}

#[test]
fn struct_body_is_not_top_level() {
    assert!(ParseContext::STRUCT_BODY.newline_terminates());
    assert!(!ParseContext::STRUCT_BODY.contains(ParseContext::TOP_LEVEL));
}

#[test]
fn bracketed_ignores_newlines() {
    assert!(!ParseContext::BRACKETED.newline_terminates());
    assert_eq!(ParseContext::BRACKETED, ParseContext::empty());
}

#[test]
fn default_is_empty() {
    assert_eq!(ParseContext::default(), ParseContext::empty());
}
