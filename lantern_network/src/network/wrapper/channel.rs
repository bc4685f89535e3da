use crate::prelude::*;
use super::*;

/// A wrapper around a [`state::Channel`]
pub struct Channel<'a> {
    network: &'a Network,
    data: &'a state::Channel,
}

impl<'a> Channel<'a> {
    /// Return this object's ID
    pub fn id(&self) -> ChannelId {
        self.data.id
    }

    /// The channel's name
    pub fn name(&self) -> &'a ChannelName {
        &self.data.name
    }

    /// The channel's mode flags
    pub fn mode(&self) -> ChannelModeSet {
        self.data.mode
    }

    /// The channel's topic, if one has been set
    pub fn topic(&self) -> Option<&'a str> {
        self.data.topic.as_deref()
    }

    /// Iterate over the channel's members
    pub fn members(&self) -> impl Iterator<Item=Membership<'a>> + 'a {
        let my_id = self.data.id;
        self.network.raw_memberships().filter(move |x| x.channel == my_id).wrap(self.network)
    }

    /// Test whether the given user is a member of this channel
    pub fn has_member(&self, u: UserId) -> Option<Membership<'a>> {
        self.network.membership(MembershipId::new(u, self.data.id)).ok()
    }
}

impl<'a> super::ObjectWrapper<'a> for Channel<'a> {
    type Underlying = state::Channel;

    fn wrap(network: &'a Network, data: &'a state::Channel) -> Self {
        Self { network, data }
    }

    fn raw(&self) -> &'a state::Channel { self.data }
}
