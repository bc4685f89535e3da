use super::Network;
use crate::prelude::*;

use crate::network::wrapper::*;

use LookupError::*;

impl Network {
    /// Look up a user by ID.
    pub fn user(&self, id: UserId) -> LookupResult<wrapper::User> {
        let r: LookupResult<&state::User> = self.users.get(&id).ok_or(NoSuchUser(id));
        r.wrap(self)
    }

    /// Return an iterator over all users.
    pub fn users(&self) -> impl std::iter::Iterator<Item=wrapper::User> + '_ {
        self.raw_users().wrap(self)
    }

    /// Return an iterator over the raw `state::User` objects.
    pub fn raw_users(&self) -> impl std::iter::Iterator<Item=&state::User> {
        self.users.values()
    }

    /// Look up the user currently using the given nickname
    pub fn user_by_nick(&self, nick: &Nickname) -> LookupResult<wrapper::User> {
        self.user(*self.nick_bindings.get(nick).ok_or(NoSuchNick(*nick))?)
    }

    /// Whether the nickname is currently held by anyone
    pub fn nick_in_use(&self, nick: &Nickname) -> bool {
        self.nick_bindings.contains_key(nick)
    }

    /// Look up a channel by ID
    pub fn channel(&self, id: ChannelId) -> LookupResult<wrapper::Channel> {
        self.channels.get(&id).ok_or(NoSuchChannel(id)).wrap(self)
    }

    /// Iterate over channels
    pub fn channels(&self) -> impl std::iter::Iterator<Item=wrapper::Channel> + '_ {
        self.raw_channels().wrap(self)
    }

    /// Iterate over raw [`state::Channel`] objects
    pub fn raw_channels(&self) -> impl std::iter::Iterator<Item=&state::Channel> {
        self.channels.values()
    }

    /// Look up a raw channel by name.
    pub(crate) fn raw_channel_by_name(&self, name: &ChannelName) -> LookupResult<&state::Channel> {
        self.channel_names
            .get(name)
            .and_then(|id| self.channels.get(id))
            .ok_or(NoSuchChannelName(*name))
    }

    /// Look up a channel by name.
    pub fn channel_by_name(&self, name: &ChannelName) -> LookupResult<wrapper::Channel> {
        self.raw_channel_by_name(name).wrap(self)
    }

    /// Look up a membership by ID
    pub fn membership(&self, id: MembershipId) -> LookupResult<wrapper::Membership> {
        self.raw_membership(id).wrap(self)
    }

    pub(crate) fn raw_membership(&self, id: MembershipId) -> LookupResult<&state::Membership> {
        self.memberships.get(&id).ok_or(NoSuchMembership(id))
    }

    /// Iterate over raw [`state::Membership`] objects
    pub(crate) fn raw_memberships(&self) -> impl std::iter::Iterator<Item=&state::Membership> {
        self.memberships.values()
    }

    /// The number of users on the network
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// The number of users with operator status
    pub fn oper_count(&self) -> usize {
        self.users.values().filter(|u| u.oper).count()
    }

    /// The number of channels in existence
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }
}
