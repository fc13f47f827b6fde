use crate::domain::output::Reply;

#[test]
fn empty_reply_renders_nothing() {
    let reply = Reply::new();
    assert_eq!(reply.public_text(), None);
    assert_eq!(reply.private_text(), None);
}

#[test]
fn lines_are_joined_with_single_newlines() {
    let mut reply = Reply::new();
    reply.public("first");
    reply.public("second");
    assert_eq!(reply.public_text().as_deref(), Some("first\nsecond"));
}

#[test]
fn explicit_blank_line_separates_paragraphs() {
    let mut reply = Reply::new();
    reply.public("roster");
    reply.public_blank();
    reply.public("hint");
    assert_eq!(reply.public_text().as_deref(), Some("roster\n\nhint"));
}

#[test]
fn first_line_is_never_prefixed() {
    let mut reply = Reply::new();
    reply.private("only");
    assert_eq!(reply.private_text().as_deref(), Some("only"));
}

#[test]
fn whitespace_only_output_is_suppressed() {
    let mut reply = Reply::new();
    reply.public_blank();
    reply.public_blank();
    assert_eq!(reply.public_text(), None);
}

#[test]
fn channels_are_independent() {
    let mut reply = Reply::new();
    reply.public("channel");
    reply.private("sender");
    reply.request_delete(42);
    assert_eq!(reply.public_text().as_deref(), Some("channel"));
    assert_eq!(reply.private_text().as_deref(), Some("sender"));
    assert_eq!(reply.deletions(), &[42]);
}
