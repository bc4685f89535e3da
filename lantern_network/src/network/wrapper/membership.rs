use crate::prelude::*;
use super::*;

/// A wrapper around a [`state::Membership`]
pub struct Membership<'a> {
    network: &'a Network,
    data: &'a state::Membership,
}

impl<'a> Membership<'a> {
    /// Return this object's ID
    pub fn id(&self) -> MembershipId {
        self.data.id
    }

    pub fn user_id(&self) -> UserId {
        self.data.user
    }

    /// The member
    pub fn user(&self) -> LookupResult<User<'a>> {
        self.network.user(self.data.user)
    }

    pub fn channel_id(&self) -> ChannelId {
        self.data.channel
    }

    /// The channel
    pub fn channel(&self) -> LookupResult<Channel<'a>> {
        self.network.channel(self.data.channel)
    }

    /// The member's privileges in the channel
    pub fn permissions(&self) -> MembershipFlagSet {
        self.data.permissions
    }
}

impl<'a> super::ObjectWrapper<'a> for Membership<'a> {
    type Underlying = state::Membership;

    fn wrap(network: &'a Network, data: &'a state::Membership) -> Self {
        Self { network, data }
    }

    fn raw(&self) -> &'a state::Membership { self.data }
}
