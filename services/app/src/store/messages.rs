//! services/app/src/store/messages.rs
//!
//! The two-way support thread between end users and administrators.

use chrono::Utc;
use uuid::Uuid;

use bookbites_core::domain::{Message, MessageReply};
use bookbites_core::messages;

use super::{encode, keys, AppStore};

impl AppStore {
    /// Appends a new unread message attributed to the current user, or
    /// "anon" when nobody is signed in.
    pub async fn send_message(&mut self, name: &str, text: &str) {
        let author_ref = self
            .current_user
            .as_ref()
            .map(|u| u.id.clone())
            .unwrap_or_else(|| "anon".to_string());
        let phone = self.current_user.as_ref().and_then(|u| u.phone.clone());

        let message = Message {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            author_ref,
            phone,
            text: text.to_string(),
            date: Utc::now(),
            read: false,
            replies: Vec::new(),
        };
        self.messages = messages::prepend(std::mem::take(&mut self.messages), message);
        let encoded = encode(&self.messages);
        self.write_through(keys::MESSAGES, encoded).await;
    }

    /// Appends an administrative reply. Replying to a deleted or unknown
    /// message id is a silent no-op.
    pub async fn reply_to_message(&mut self, message_id: &str, text: &str) {
        let reply = MessageReply {
            text: text.to_string(),
            date: Utc::now(),
            admin_name: "Admin".to_string(),
        };
        self.messages =
            messages::append_reply(std::mem::take(&mut self.messages), message_id, reply);
        let encoded = encode(&self.messages);
        self.write_through(keys::MESSAGES, encoded).await;
    }
}
