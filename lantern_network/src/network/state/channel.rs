use crate::prelude::*;

use serde::{Deserialize, Serialize};

/// A channel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Channel {
    pub id: ChannelId,
    pub name: ChannelName,
    pub mode: ChannelModeSet,
    /// `None` when no topic has ever been set; an empty topic is still a topic.
    pub topic: Option<String>,
}

/// A channel membership
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Membership {
    pub id: MembershipId,
    pub channel: ChannelId,
    pub user: UserId,
    pub permissions: MembershipFlagSet,
}

impl Channel {
    pub fn new(id: ChannelId, name: ChannelName) -> Self {
        Channel {
            id,
            name,
            mode: ChannelModeSet::new(),
            topic: None,
        }
    }
}

impl Membership {
    pub fn new(user: UserId, channel: ChannelId) -> Self {
        Membership {
            id: MembershipId::new(user, channel),
            channel,
            user,
            permissions: MembershipFlagSet::new(),
        }
    }
}
