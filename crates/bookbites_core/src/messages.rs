//! crates/bookbites_core/src/messages.rs
//!
//! Pure reducers for the two-way support thread between end users and
//! administrators. Message text is immutable; replies are append-only.

use crate::domain::{Message, MessageReply};

/// Prepends a new message so the inbox stays newest-first.
pub fn prepend(mut messages: Vec<Message>, message: Message) -> Vec<Message> {
    messages.insert(0, message);
    messages
}

/// Appends a reply to the matching message. Replying to an unknown id is a
/// silent no-op.
pub fn append_reply(mut messages: Vec<Message>, message_id: &str, reply: MessageReply) -> Vec<Message> {
    if let Some(message) = messages.iter_mut().find(|m| m.id == message_id) {
        message.replies.push(reply);
    }
    messages
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn message(id: &str) -> Message {
        Message {
            id: id.to_string(),
            name: "Reader".to_string(),
            author_ref: "u1".to_string(),
            phone: None,
            text: "Hello".to_string(),
            date: Utc::now(),
            read: false,
            replies: Vec::new(),
        }
    }

    fn reply(text: &str) -> MessageReply {
        MessageReply {
            text: text.to_string(),
            date: Utc::now(),
            admin_name: "Admin".to_string(),
        }
    }

    #[test]
    fn inbox_stays_newest_first() {
        let messages = prepend(Vec::new(), message("m1"));
        let messages = prepend(messages, message("m2"));
        assert_eq!(messages[0].id, "m2");
    }

    #[test]
    fn replies_append_in_order() {
        let messages = prepend(Vec::new(), message("m1"));
        let messages = append_reply(messages, "m1", reply("first"));
        let messages = append_reply(messages, "m1", reply("second"));
        assert_eq!(messages[0].replies.len(), 2);
        assert_eq!(messages[0].replies[1].text, "second");
    }

    #[test]
    fn replying_to_unknown_id_is_a_no_op() {
        let messages = prepend(Vec::new(), message("m1"));
        let messages = append_reply(messages, "missing", reply("lost"));
        assert!(messages[0].replies.is_empty());
    }
}
