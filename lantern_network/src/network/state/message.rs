use super::*;

use serde::{Deserialize, Serialize};

/// The two kinds of text message a user can send
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageType {
    Privmsg,
    Notice,
}

impl std::fmt::Display for MessageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Privmsg => "PRIVMSG".fmt(f),
            Self::Notice => "NOTICE".fmt(f),
        }
    }
}

/// Where a message was sent, as it was at the time of sending
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum MessageTarget {
    User(User),
    Channel(Channel),
}
