use super::*;

#[test]
fn default_transcript_is_empty() {
    let transcript = Transcript::default();
    assert!(transcript.is_empty());
    assert_eq!(transcript.len(), 0);
    assert!(transcript.last().is_none());
}

#[test]
fn with_appends_in_order() {
    let transcript = Transcript::default()
        .with(Message::user("What is FSI?"))
        .with(Message::bot("Floor space index."));

    assert_eq!(
        transcript.messages(),
        &[Message::user("What is FSI?"), Message::bot("Floor space index.")]
    );
    assert_eq!(transcript.last().map(|m| m.role), Some(Role::Bot));
}

#[test]
fn with_leaves_earlier_entries_untouched() {
    let before = Transcript::default().with(Message::user("one"));
    let after = before.clone().with(Message::bot("two"));

    assert_eq!(before.len(), 1);
    assert_eq!(after.len(), 2);
    assert_eq!(after.messages()[0], before.messages()[0]);
}

#[test]
fn role_css_names() {
    assert_eq!(Role::User.as_str(), "user");
    assert_eq!(Role::Bot.as_str(), "bot");
}
