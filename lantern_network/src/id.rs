//! Defines the various object ID types

use lantern_macros::object_ids;
use serde::{Deserialize, Serialize};

pub type LocalId = i64;

object_ids!(ObjectIdGenerator {
    User,
    Channel,
    Connection,
});

/// Identifies one user's membership of one channel
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MembershipId(UserId, ChannelId);

impl MembershipId {
    pub fn new(user: UserId, channel: ChannelId) -> Self {
        Self(user, channel)
    }
}
