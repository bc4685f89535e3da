use crate::prelude::*;
use super::*;

/// A wrapper around a [`state::User`]
pub struct User<'a> {
    network: &'a Network,
    data: &'a state::User,
}

impl<'a> User<'a> {
    /// Return this object's ID
    pub fn id(&self) -> UserId {
        self.data.id
    }

    /// The user's current nickname
    pub fn nick(&self) -> Nickname {
        self.data.nick
    }

    /// The user's username
    pub fn user(&self) -> &'a Username {
        &self.data.user
    }

    /// The user's hostname, as shown to other users
    pub fn visible_host(&self) -> &'a Hostname {
        &self.data.visible_host
    }

    /// The user's realname
    pub fn realname(&self) -> &'a Realname {
        &self.data.realname
    }

    /// The away message, if the user is marked away
    pub fn away_reason(&self) -> Option<&'a AwayReason> {
        self.data.away_reason.as_ref()
    }

    /// Whether the user has authenticated as an IRC operator
    pub fn is_oper(&self) -> bool {
        self.data.oper
    }

    /// The `nick!user@host` mask for this user
    pub fn nuh(&self) -> String {
        format!("{}!{}@{}", self.data.nick, self.data.user, self.data.visible_host)
    }

    /// Iterate over the user's channel memberships
    pub fn channels(&self) -> impl Iterator<Item=Membership<'a>> + 'a {
        let my_id = self.data.id;
        self.network.raw_memberships().filter(move |m| m.user == my_id).wrap(self.network)
    }

    /// Test whether this user is in the given channel
    pub fn is_in_channel(&self, c: ChannelId) -> Option<Membership<'a>> {
        self.network.membership(MembershipId::new(self.data.id, c)).ok()
    }
}

impl<'a> super::ObjectWrapper<'a> for User<'a> {
    type Underlying = state::User;

    fn wrap(network: &'a Network, data: &'a state::User) -> Self {
        Self { network, data }
    }

    fn raw(&self) -> &'a state::User { self.data }
}
